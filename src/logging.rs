//! Logging initialisation
//!
//! Logs go to stderr so that stdout carries only rendered lines. `RUST_LOG`
//! wins when set; otherwise the settings level is raised one step per `-v`.

use brandtag_conf::Settings;
use tracing_subscriber::EnvFilter;

const LEVEL_LADDER: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Level assumed when the configured one is not on the ladder
pub const DEFAULT_LEVEL: &str = "warn";

fn ladder_position(level: &str) -> Option<usize> {
	LEVEL_LADDER.iter().position(|candidate| *candidate == level)
}

/// Raise `base` by `verbosity` steps, saturating at `trace`
///
/// An unrecognised base is treated as [`DEFAULT_LEVEL`].
pub fn effective_level(base: &str, verbosity: u8) -> &'static str {
	let start = ladder_position(&base.to_ascii_lowercase())
		.or_else(|| ladder_position(DEFAULT_LEVEL))
		.unwrap_or_default();
	let index = (start + usize::from(verbosity)).min(LEVEL_LADDER.len() - 1);
	LEVEL_LADDER[index]
}

/// Install the global stderr subscriber
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(settings: &Settings, verbosity: u8) -> anyhow::Result<()> {
	let level = effective_level(&settings.log_level, verbosity);
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.try_init()
		.map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}
