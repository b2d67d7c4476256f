//! Command-line surface: argument parsing, settings loading and output

use brandtag::cli::{Cli, execute};
use brandtag_integration_tests::EXPECTED_LINES;
use clap::Parser;
use rstest::rstest;
use std::io::Write;

#[rstest]
fn test_no_arguments_prints_one_line_per_type() {
	// Arrange
	let cli = Cli::try_parse_from(["brandtag"]).unwrap();
	let settings = cli.load_settings().unwrap();
	let mut out = Vec::new();

	// Act
	execute(&settings, &mut out).unwrap();

	// Assert
	let text = String::from_utf8(out).unwrap();
	let lines: Vec<&str> = text.lines().collect();
	assert_eq!(lines, EXPECTED_LINES);
}

#[rstest]
fn test_settings_file_is_applied() {
	// Arrange
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "absent_category = \"None\"\nlog_level = \"info\"").unwrap();
	let path = file.path().to_str().unwrap().to_string();
	let cli = Cli::try_parse_from(["brandtag", "-v", "--settings", path.as_str()]).unwrap();

	// Act
	let settings = cli.load_settings().unwrap();

	// Assert
	assert_eq!(cli.verbose, 1);
	assert_eq!(settings.absent_category, "None");
	assert_eq!(settings.log_level, "info");
}

#[rstest]
fn test_bad_settings_file_is_reported() {
	// Arrange
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "log_level = \"loud\"").unwrap();
	let path = file.path().to_str().unwrap().to_string();
	let cli = Cli::try_parse_from(["brandtag", "--settings", path.as_str()]).unwrap();

	// Act
	let err = cli.load_settings().unwrap_err();

	// Assert
	let message = format!("{err:#}");
	assert!(message.starts_with("Failed to load settings from"));
	assert!(message.contains("log_level"));
}

#[rstest]
fn test_missing_settings_file_is_reported() {
	// Arrange
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("brandtag.toml");
	let cli = Cli::try_parse_from([
		"brandtag",
		"--settings",
		path.to_str().unwrap(),
	])
	.unwrap();

	// Act
	let result = cli.load_settings();

	// Assert
	assert!(result.is_err());
}
