//! Namespaced identifiers (`namespace:path`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::LocationError;

/// Namespace assumed when an identifier has no explicit `namespace:` part.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A namespaced identifier such as `minecraft:block.stone.break`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation {
	namespace: String,
	path: String,
}

impl ResourceLocation {
	/// Builds a location from its parts, validating both.
	pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Result<Self, LocationError> {
		let namespace = namespace.into();
		let path = path.into();

		if namespace.is_empty() {
			return Err(LocationError::EmptyNamespace);
		}
		if let Some(ch) = namespace.chars().find(|&c| !is_namespace_char(c)) {
			return Err(LocationError::InvalidNamespace { namespace, ch });
		}
		if path.is_empty() {
			return Err(LocationError::EmptyPath);
		}
		if let Some(ch) = path.chars().find(|&c| !is_path_char(c)) {
			return Err(LocationError::InvalidPath { path, ch });
		}

		Ok(Self { namespace, path })
	}

	/// Builds a location in the [`DEFAULT_NAMESPACE`].
	pub fn vanilla(path: impl Into<String>) -> Result<Self, LocationError> {
		Self::new(DEFAULT_NAMESPACE, path)
	}

	/// Parses `namespace:path`, or a bare `path` in the default namespace.
	pub fn parse(input: &str) -> Result<Self, LocationError> {
		match input.split_once(':') {
			Some((namespace, path)) => Self::new(namespace, path),
			None => Self::vanilla(input),
		}
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	pub fn path(&self) -> &str {
		&self.path
	}
}

fn is_namespace_char(c: char) -> bool {
	matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-')
}

fn is_path_char(c: char) -> bool {
	is_namespace_char(c) || c == '/'
}

impl fmt::Display for ResourceLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.namespace, self.path)
	}
}

impl FromStr for ResourceLocation {
	type Err = LocationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl Serialize for ResourceLocation {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for ResourceLocation {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		Self::parse(&raw).map_err(serde::de::Error::custom)
	}
}
