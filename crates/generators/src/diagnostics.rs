//! Structured diagnostics emitted by generators.
//!
//! Generators never log directly. They report [`Diagnostic`]s to an injected
//! [`DiagnosticSink`], which the binary wires to `tracing` and tests replace
//! with a [`MemorySink`].

use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{Level, error, warn};

/// A recoverable problem encountered while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
	/// The mapping file could not be opened or parsed; generation produced nothing.
	MappingFileUnreadable { path: PathBuf, reason: String },
	/// A registry entry had no identifier and was skipped.
	MissingRegistryKey { entry: String },
	/// No mapping exists for the lookup key; the entry was skipped.
	MissingMapping { key: String },
}

impl Diagnostic {
	pub fn level(&self) -> Level {
		match self {
			Diagnostic::MappingFileUnreadable { .. } | Diagnostic::MissingRegistryKey { .. } => Level::ERROR,
			Diagnostic::MissingMapping { .. } => Level::WARN,
		}
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::MappingFileUnreadable { path, reason } => {
				write!(f, "failed to load {}: {reason}", path.display())
			}
			Diagnostic::MissingRegistryKey { entry } => write!(f, "null registry key for sound event: {entry}"),
			Diagnostic::MissingMapping { key } => write!(f, "missing mapping for sound: {key}"),
		}
	}
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink: Send + Sync {
	fn record(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at their [`Diagnostic::level`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn record(&self, diagnostic: Diagnostic) {
		match diagnostic {
			Diagnostic::MappingFileUnreadable { path, reason } => {
				error!(path = %path.display(), %reason, "Failed to load mapping file. Does the file even exist?");
			}
			Diagnostic::MissingRegistryKey { entry } => {
				error!(%entry, "Null registry key for sound event");
			}
			Diagnostic::MissingMapping { key } => {
				warn!(sound = %key, "Missing mapping for sound");
			}
		}
	}
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
	entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
	pub fn new() -> Self {
		Self::default()
	}

	/// Copies out everything recorded so far.
	pub fn snapshot(&self) -> Vec<Diagnostic> {
		self.entries.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}

	/// Number of recorded diagnostics at `level`.
	pub fn count(&self, level: Level) -> usize {
		self.entries
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.iter()
			.filter(|d| d.level() == level)
			.count()
	}
}

impl DiagnosticSink for MemorySink {
	fn record(&self, diagnostic: Diagnostic) {
		self.entries.lock().unwrap_or_else(PoisonError::into_inner).push(diagnostic);
	}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Arc<S> {
	fn record(&self, diagnostic: Diagnostic) {
		(**self).record(diagnostic);
	}
}

/// Fans each diagnostic out to both sinks.
impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for (A, B) {
	fn record(&self, diagnostic: Diagnostic) {
		self.0.record(diagnostic.clone());
		self.1.record(diagnostic);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn missing(key: &str) -> Diagnostic {
		Diagnostic::MissingMapping { key: key.to_string() }
	}

	#[test]
	fn levels() {
		assert_eq!(missing("a").level(), Level::WARN);
		assert_eq!(
			Diagnostic::MissingRegistryKey {
				entry: "SoundEvent[x]".into()
			}
			.level(),
			Level::ERROR
		);
		assert_eq!(
			Diagnostic::MappingFileUnreadable {
				path: "mappings/sound.json".into(),
				reason: "not found".into()
			}
			.level(),
			Level::ERROR
		);
	}

	#[test]
	fn display_names_the_sound() {
		assert_eq!(missing("entity.unknown.sound").to_string(), "missing mapping for sound: entity.unknown.sound");
	}

	#[test]
	fn memory_sink_counts_by_level() {
		let sink = MemorySink::new();
		sink.record(missing("a"));
		sink.record(missing("b"));
		sink.record(Diagnostic::MissingRegistryKey { entry: "x".into() });

		assert_eq!(sink.count(Level::WARN), 2);
		assert_eq!(sink.count(Level::ERROR), 1);
		assert_eq!(sink.snapshot().len(), 3);
	}

	#[test]
	fn pair_sink_records_to_both() {
		let left = Arc::new(MemorySink::new());
		let right = Arc::new(MemorySink::new());
		let pair = (left.clone(), right.clone());

		pair.record(missing("a"));

		assert_eq!(left.snapshot(), vec![missing("a")]);
		assert_eq!(right.snapshot(), vec![missing("a")]);
	}
}
