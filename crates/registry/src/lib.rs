//! Registries of game content for the data generators.
//!
//! * [`ResourceLocation`]: `namespace:path` identifiers.
//! * [`Registry`]: ordered tables of entries keyed by location.
//! * [`report`]: loading registries from vanilla registry reports.
//! * [`sound`]: the sound event registry, loaded from a registry report.

pub mod error;
pub mod location;
pub mod registry;
pub mod report;
pub mod sound;

pub use error::{LocationError, RegistryError, Result};
pub use location::{DEFAULT_NAMESPACE, ResourceLocation};
pub use registry::{Holder, Registry};
pub use sound::{SOUND_EVENT_REGISTRY, SoundEvent, sound_events_from_file};
