//! Error types for generators and output writing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a single generator run.
///
/// Recoverable problems are reported as [`crate::Diagnostic`]s instead.
#[derive(Debug, Error)]
pub enum GenerateError {
	/// A mapping entry exists but does not have the expected shape.
	#[error("malformed mapping for '{key}' in {path}: {source}")]
	MalformedMapping {
		/// Lookup key of the offending entry.
		key: String,
		/// Mapping file the entry came from.
		path: PathBuf,
		source: serde_json::Error,
	},
}

/// Errors from loading a mapping file.
#[derive(Debug, Error)]
pub enum MappingLoadError {
	#[error("I/O error reading {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },

	#[error("invalid JSON in {path}: {error}")]
	Json { path: PathBuf, error: serde_json::Error },

	#[error("{path} must contain a JSON object at the top level")]
	NotAnObject { path: PathBuf },
}

/// Errors from writing generator output.
#[derive(Debug, Error)]
pub enum OutputError {
	#[error("I/O error writing {path}: {error}")]
	Io { path: PathBuf, error: std::io::Error },

	#[error("failed to serialize output '{name}': {error}")]
	Serialize { name: String, error: serde_json::Error },
}
