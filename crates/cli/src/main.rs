//! `datagen` binary.
//!
//! Loads the sound event registry from a registry report, runs the generators
//! and writes their output as JSON files.

mod app;
mod cli;
mod eula;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	init_tracing(cli.verbose)?;

	app::run(&cli, &app::Context::from_process())?;
	Ok(())
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
	let default_level = if verbose { "debug" } else { "info" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

	let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).finish();
	tracing::subscriber::set_global_default(subscriber)?;
	Ok(())
}
