//! Loading registries from vanilla-style registry reports.
//!
//! A report is the `registries.json` dump produced by the game's data
//! generator:
//!
//! ```json
//! {
//!   "minecraft:sound_event": {
//!     "protocol_id": 13,
//!     "entries": {
//!       "minecraft:ambient.cave": { "protocol_id": 0 },
//!       "minecraft:block.stone.break": { "protocol_id": 1 }
//!     }
//!   }
//! }
//! ```
//!
//! Entries are registered in protocol id order. An entry whose identifier does
//! not parse is still registered, without a key.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{RegistryError, Result};
use crate::location::ResourceLocation;
use crate::registry::Registry;

#[derive(Debug, Deserialize)]
struct ReportRegistry {
	#[serde(default)]
	protocol_id: Option<u32>,
	entries: HashMap<String, ReportEntry>,
}

#[derive(Debug, Deserialize)]
struct ReportEntry {
	protocol_id: u32,
}

/// Builds the registry named `registry` from report JSON.
///
/// `make` turns each raw entry identifier into the stored value.
pub fn load_report<T>(json: &str, registry: &str, mut make: impl FnMut(&str) -> T) -> Result<Registry<T>> {
	let mut report: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
	let section = report
		.remove(registry)
		.ok_or_else(|| RegistryError::MissingRegistry(registry.to_string()))?;
	let section: ReportRegistry = serde_json::from_value(section)?;

	let mut entries: Vec<(u32, String)> = section
		.entries
		.into_iter()
		.map(|(id, entry)| (entry.protocol_id, id))
		.collect();
	entries.sort();

	for pair in entries.windows(2) {
		if pair[0].0 == pair[1].0 {
			return Err(RegistryError::DuplicateProtocolId {
				registry: registry.to_string(),
				protocol_id: pair[0].0,
				first: pair[0].1.clone(),
				second: pair[1].1.clone(),
			});
		}
	}

	let mut out = Registry::new(registry);
	for (_, raw) in entries {
		let value = make(&raw);
		match ResourceLocation::parse(&raw) {
			Ok(key) => {
				out.register(key, value)?;
			}
			Err(error) => {
				warn!(registry, entry = %raw, %error, "Unparseable identifier in registry report");
				out.register_unkeyed(value);
			}
		}
	}

	debug!(registry, protocol_id = ?section.protocol_id, entries = out.len(), "Loaded registry report");
	Ok(out)
}

/// Reads a report file and builds the registry named `registry` from it.
pub fn load_report_file<T>(path: &Path, registry: &str, make: impl FnMut(&str) -> T) -> Result<Registry<T>> {
	let json = fs::read_to_string(path).map_err(|error| RegistryError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	load_report(&json, registry, make)
}
