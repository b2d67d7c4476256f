//! Settings loading

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Accepted values of [`Settings::log_level`]
pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Settings errors
#[derive(Debug, thiserror::Error)]
pub enum ConfError {
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse settings: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for '{key}': {message}")]
	Invalid { key: &'static str, message: String },
}

/// Printer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	/// Printed in place of the brand when a type carries no phone tag
	pub absent_category: String,

	/// Default log level, used when `RUST_LOG` is unset
	pub log_level: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			absent_category: "null".to_string(),
			log_level: "warn".to_string(),
		}
	}
}

impl Settings {
	/// Parse settings from TOML; missing keys keep their defaults
	pub fn from_toml_str(content: &str) -> Result<Self, ConfError> {
		let settings: Settings = toml::from_str(content)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Load settings from a TOML file
	///
	/// # Errors
	///
	/// A missing file is an error: callers only pass a path the user asked for.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfError> {
		let path = path.as_ref();
		let content = fs::read_to_string(path).map_err(|source| ConfError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&content)
	}

	/// Reject values the rest of the program cannot use
	pub fn validate(&self) -> Result<(), ConfError> {
		let level = self.log_level.to_ascii_lowercase();
		if !LOG_LEVELS.contains(&level.as_str()) {
			return Err(ConfError::Invalid {
				key: "log_level",
				message: format!(
					"'{}' is not one of {}",
					self.log_level,
					LOG_LEVELS.join(", ")
				),
			});
		}
		if self.absent_category.contains(['\n', '\r']) {
			return Err(ConfError::Invalid {
				key: "absent_category",
				message: "must fit on one line".to_string(),
			});
		}
		Ok(())
	}
}
