//! Sound event mapping generator.
//!
//! Translates every entry of the sound event registry through
//! `mappings/sound.json`:
//!
//! ```json
//! { "block.stone.break": { "playsound_mapping": "dig.stone", "bedrock_mapping": "stone" } }
//! ```
//!
//! into an object keyed by the destination sound:
//!
//! ```json
//! { "dig.stone": { "soundtype": "stone" } }
//! ```
//!
//! Sounds missing from the mapping file are reported and skipped. An
//! unreadable mapping file yields an empty object. A mapping entry without the
//! two string fields fails the whole run.


use std::path::{Path, PathBuf};
use std::sync::Arc;

use datagen_registry::{Registry, ResourceLocation, SoundEvent};
use serde::Deserialize;
use serde::de::{self, Unexpected};
use serde_json::{Map, Value, json};
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::GenerateError;
use crate::mapping::load_mapping_file;
use crate::{DataGenerator, GeneratorOutput};

/// Default mapping file location, relative to the working directory.
pub const SOUND_MAPPING_PATH: &str = "mappings/sound.json";

/// Prefix removed from identifier paths to form mapping keys.
const STRIPPED_PREFIX: &str = "minecraft:";

/// One entry of the mapping file.
#[derive(Debug, Deserialize)]
struct SoundMapping {
	playsound_mapping: String,
	bedrock_mapping: String,
}

/// Reads one mapping entry, which must be a JSON object.
///
/// Derived struct visitors also accept sequences, so arrays are rejected here
/// before they can be read positionally.
fn read_mapping(entry: &Value) -> Result<SoundMapping, serde_json::Error> {
	if !entry.is_object() {
		return Err(de::Error::invalid_type(unexpected(entry), &"a mapping object"));
	}
	SoundMapping::deserialize(entry)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
	match value {
		Value::Null => Unexpected::Unit,
		Value::Bool(b) => Unexpected::Bool(*b),
		Value::Number(_) => Unexpected::Other("number"),
		Value::String(s) => Unexpected::Str(s),
		Value::Array(_) => Unexpected::Seq,
		Value::Object(_) => Unexpected::Map,
	}
}

/// Returns the mapping file key for a registry location.
pub fn mapping_key(location: &ResourceLocation) -> &str {
	let path = location.path();
	path.strip_prefix(STRIPPED_PREFIX).unwrap_or(path)
}

pub struct SoundGenerator {
	registry: Arc<Registry<SoundEvent>>,
	mapping_path: PathBuf,
	sink: Arc<dyn DiagnosticSink>,
}

impl SoundGenerator {
	pub fn new(registry: Arc<Registry<SoundEvent>>, sink: Arc<dyn DiagnosticSink>) -> Self {
		Self {
			registry,
			mapping_path: PathBuf::from(SOUND_MAPPING_PATH),
			sink,
		}
	}

	/// Reads mappings from `path` instead of [`SOUND_MAPPING_PATH`].
	pub fn with_mapping_path(mut self, path: impl Into<PathBuf>) -> Self {
		self.mapping_path = path.into();
		self
	}

	pub fn mapping_path(&self) -> &Path {
		&self.mapping_path
	}

	pub fn generate(&self) -> Result<GeneratorOutput, GenerateError> {
		let mut sounds = Map::new();

		let mapping = match load_mapping_file(&self.mapping_path) {
			Ok(mapping) => mapping,
			Err(error) => {
				self.sink.record(Diagnostic::MappingFileUnreadable {
					path: self.mapping_path.clone(),
					reason: error.to_string(),
				});
				return Ok(sounds);
			}
		};

		for holder in self.registry.iter() {
			let Some(location) = self.registry.key(&holder) else {
				self.sink.record(Diagnostic::MissingRegistryKey {
					entry: holder.value().to_string(),
				});
				continue;
			};

			let key = mapping_key(location);
			let Some(entry) = mapping.get(key) else {
				self.sink.record(Diagnostic::MissingMapping { key: key.to_string() });
				continue;
			};

			let SoundMapping {
				playsound_mapping,
				bedrock_mapping,
			} = read_mapping(entry).map_err(|source| GenerateError::MalformedMapping {
				key: key.to_string(),
				path: self.mapping_path.clone(),
				source,
			})?;

			if let Some(previous) = sounds.insert(playsound_mapping, json!({ "soundtype": bedrock_mapping })) {
				debug!(sound = key, ?previous, "Overwrote earlier mapping for the same destination");
			}
		}

		Ok(sounds)
	}
}

impl DataGenerator for SoundGenerator {
	fn name(&self) -> &'static str {
		"sounds"
	}

	fn generate(&self) -> Result<GeneratorOutput, GenerateError> {
		SoundGenerator::generate(self)
	}
}
