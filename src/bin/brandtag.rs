//! brandtag
//!
//! Prints the tags of every concrete phone user type, one line per type.
//!
//! ```bash
//! brandtag
//! brandtag -vv
//! brandtag --settings brandtag.toml
//! ```

use brandtag::cli::{Cli, execute};
use brandtag::logging::init_logging;
use clap::Parser;
use std::io;
use std::process;

fn main() {
	let cli = Cli::parse();

	if let Err(e) = run(cli) {
		eprintln!("Error: {:#}", e);
		process::exit(1);
	}
}

fn run(cli: Cli) -> anyhow::Result<()> {
	let settings = cli.load_settings()?;

	init_logging(&settings, cli.verbose)?;
	tracing::debug!(?settings, "settings loaded");

	let stdout = io::stdout();
	execute(&settings, &mut stdout.lock())
}
