//! Runs a set of generators and writes their output.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::DataGenerator;
use crate::output::write_output;

/// Outcome of [`Pipeline::run`].
#[derive(Debug, Default)]
pub struct RunSummary {
	/// Files written, in generator order.
	pub written: Vec<PathBuf>,
	/// Names of generators that failed to generate or write.
	pub failed: Vec<&'static str>,
}

impl RunSummary {
	pub fn is_success(&self) -> bool {
		self.failed.is_empty()
	}
}

/// Ordered set of generators.
///
/// A failing generator is logged and counted; the remaining generators still run.
#[derive(Default)]
pub struct Pipeline {
	generators: Vec<Box<dyn DataGenerator>>,
}

impl Pipeline {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, generator: impl DataGenerator + 'static) -> &mut Self {
		self.generators.push(Box::new(generator));
		self
	}

	pub fn names(&self) -> Vec<&'static str> {
		self.generators.iter().map(|g| g.name()).collect()
	}

	/// Keeps only generators listed in `names`, returning requested names that matched none.
	pub fn retain_named(&mut self, names: &[String]) -> Vec<String> {
		let unknown = names
			.iter()
			.filter(|name| !self.generators.iter().any(|g| g.name() == name.as_str()))
			.cloned()
			.collect();
		self.generators.retain(|g| names.iter().any(|name| name == g.name()));
		unknown
	}

	/// Runs every generator, writing each result to `<output_dir>/<name>.json`.
	pub fn run(&self, output_dir: &Path) -> RunSummary {
		let mut summary = RunSummary::default();

		for generator in &self.generators {
			let name = generator.name();
			info!(generator = name, "Generating");

			let output = match generator.generate() {
				Ok(output) => output,
				Err(e) => {
					error!(generator = name, error = %e, "Generator failed");
					summary.failed.push(name);
					continue;
				}
			};

			match write_output(output_dir, name, &output) {
				Ok(path) => {
					info!(generator = name, entries = output.len(), path = %path.display(), "Wrote output");
					summary.written.push(path);
				}
				Err(e) => {
					error!(generator = name, error = %e, "Failed to write output");
					summary.failed.push(name);
				}
			}
		}

		summary
	}
}
