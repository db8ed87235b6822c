//! Error types for identifiers and registries.

use std::path::PathBuf;

use thiserror::Error;

use crate::location::ResourceLocation;

/// Errors produced while parsing a [`ResourceLocation`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
	#[error("identifier namespace is empty")]
	EmptyNamespace,

	#[error("identifier path is empty")]
	EmptyPath,

	#[error("invalid character {ch:?} in namespace '{namespace}'")]
	InvalidNamespace { namespace: String, ch: char },

	#[error("invalid character {ch:?} in path '{path}'")]
	InvalidPath { path: String, ch: char },
}

/// Errors produced while building or loading a registry.
#[derive(Debug, Error)]
pub enum RegistryError {
	/// A key was registered twice in the same registry.
	#[error("duplicate key '{key}' in registry '{registry}'")]
	DuplicateKey { registry: String, key: ResourceLocation },

	/// The report does not contain the requested registry.
	#[error("registry '{0}' not found in report")]
	MissingRegistry(String),

	/// Two report entries claim the same protocol id.
	#[error("protocol id {protocol_id} used by both '{first}' and '{second}' in registry '{registry}'")]
	DuplicateProtocolId {
		registry: String,
		protocol_id: u32,
		first: String,
		second: String,
	},

	/// Report JSON did not match the expected layout.
	#[error("malformed registry report: {0}")]
	Json(#[from] serde_json::Error),

	/// Error reading a report file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
