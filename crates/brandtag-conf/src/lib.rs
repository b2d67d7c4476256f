//! # brandtag conf
//!
//! Settings for the brandtag printer.
//!
//! Settings never change which types are printed. They only choose the
//! absent-category stand-in and the default log level.
//!
//! ```rust
//! use brandtag_conf::Settings;
//!
//! let settings = Settings::from_toml_str("absent_category = \"None\"").unwrap();
//! assert_eq!(settings.absent_category, "None");
//! assert_eq!(settings.log_level, "warn");
//! ```

pub mod settings;

pub use settings::{ConfError, LOG_LEVELS, Settings};
