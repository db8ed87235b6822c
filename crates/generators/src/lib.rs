//! Data generators.
//!
//! A [`DataGenerator`] turns registry content and external mapping files into
//! a JSON object. The [`Pipeline`] runs a list of generators and writes each
//! result as `<name>.json`.
//!
//! Problems a generator can recover from (missing mappings, unreadable mapping
//! files) are reported through a [`DiagnosticSink`] and do not fail the run.
//! Only a [`GenerateError`] stops a generator.

pub mod diagnostics;
pub mod error;
pub mod mapping;
pub mod output;
pub mod pipeline;
pub mod sound;

pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
pub use error::{GenerateError, MappingLoadError, OutputError};
pub use output::write_output;
pub use pipeline::{Pipeline, RunSummary};
pub use sound::{SOUND_MAPPING_PATH, SoundGenerator};

/// JSON object produced by a generator.
pub type GeneratorOutput = serde_json::Map<String, serde_json::Value>;

/// One step of the data generation pipeline.
pub trait DataGenerator {
	/// Output file stem, e.g. `sounds` for `sounds.json`.
	fn name(&self) -> &'static str;

	fn generate(&self) -> Result<GeneratorOutput, GenerateError>;
}
