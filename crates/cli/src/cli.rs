use std::path::PathBuf;

use clap::Parser;

/// File name of the sound mapping inside the mappings directory.
pub const SOUND_MAPPING_FILE: &str = "sound.json";

#[derive(Parser, Debug)]
#[command(name = "datagen")]
#[command(about = "Generate game data files from registries and mapping files")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Directory generated files are written to
	#[arg(value_name = "OUTPUT_DIR", default_value = "generated")]
	pub output: PathBuf,

	/// Directory containing mapping files
	#[arg(long, short = 'm', value_name = "DIR", default_value = "mappings")]
	pub mappings: PathBuf,

	/// Registry report (`generated/reports/registries.json` from the game's data generator)
	#[arg(long, value_name = "FILE")]
	pub registry: PathBuf,

	/// Only run specific generators (comma-separated)
	#[arg(long, value_delimiter = ',')]
	pub only: Option<Vec<String>>,

	/// Accept the Minecraft EULA for this run
	#[arg(long)]
	pub accept_eula: bool,

	/// Verbose logging
	#[arg(short, long)]
	pub verbose: bool,
}

impl Cli {
	pub fn sound_mapping_path(&self) -> PathBuf {
		self.mappings.join(SOUND_MAPPING_FILE)
	}
}
