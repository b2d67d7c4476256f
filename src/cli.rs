//! Command-line surface of the `brandtag` binary

use crate::print_tagged_types;
use anyhow::Context as _;
use brandtag_conf::Settings;
use brandtag_core::Renderer;
use brandtag_registry::TaggedTypeRegistry;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "brandtag")]
#[command(about = "Print the tags of every concrete phone user type", long_about = None)]
#[command(version)]
pub struct Cli {
	/// Verbosity level (can be repeated)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Path to a TOML settings file
	#[arg(long, value_name = "PATH")]
	pub settings: Option<PathBuf>,
}

impl Cli {
	/// Settings from `--settings`, or the defaults when no path was given
	pub fn load_settings(&self) -> anyhow::Result<Settings> {
		match &self.settings {
			Some(path) => Settings::from_file(path)
				.with_context(|| format!("Failed to load settings from {}", path.display())),
			None => Ok(Settings::default()),
		}
	}
}

/// Print every concrete tagged type of the built-in registry to `out`
pub fn execute(settings: &Settings, out: &mut impl Write) -> anyhow::Result<()> {
	let registry = TaggedTypeRegistry::builtin();
	let renderer = Renderer::new(settings.absent_category.clone());
	print_tagged_types(&registry, &renderer, out)
}
