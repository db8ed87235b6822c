//! Sound event registry.

use std::fmt;
use std::path::Path;

use crate::error::Result;
use crate::registry::Registry;
use crate::report::load_report_file;

/// Name of the sound event registry inside a registry report.
pub const SOUND_EVENT_REGISTRY: &str = "minecraft:sound_event";

/// A sound event as known to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEvent {
	sound_id: String,
}

impl SoundEvent {
	pub fn new(sound_id: impl Into<String>) -> Self {
		Self {
			sound_id: sound_id.into(),
		}
	}

	/// The raw identifier the event was declared with.
	pub fn sound_id(&self) -> &str {
		&self.sound_id
	}
}

impl fmt::Display for SoundEvent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "SoundEvent[{}]", self.sound_id)
	}
}

/// Loads the sound event registry from a registry report on disk.
///
/// The report is the game's own `generated/reports/registries.json`, so the
/// registry always matches the game version it was dumped from.
pub fn sound_events_from_file(path: &Path) -> Result<Registry<SoundEvent>> {
	load_report_file(path, SOUND_EVENT_REGISTRY, |id| SoundEvent::new(id))
}
