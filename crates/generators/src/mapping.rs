//! Loading externally maintained mapping files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::MappingLoadError;

/// Reads a JSON mapping file whose top level must be an object.
pub fn load_mapping_file(path: &Path) -> Result<Map<String, Value>, MappingLoadError> {
	let file = File::open(path).map_err(|error| MappingLoadError::Io {
		path: path.to_path_buf(),
		error,
	})?;

	let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|error| MappingLoadError::Json {
		path: path.to_path_buf(),
		error,
	})?;

	match value {
		Value::Object(map) => Ok(map),
		_ => Err(MappingLoadError::NotAnObject {
			path: path.to_path_buf(),
		}),
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn loads_object() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("sound.json");
		fs::write(&path, r#"{"a": {"playsound_mapping": "x", "bedrock_mapping": "y"}}"#).unwrap();

		let map = load_mapping_file(&path).unwrap();
		assert_eq!(map.len(), 1);
		assert!(map.contains_key("a"));
	}

	#[test]
	fn missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("nope.json");
		let err = load_mapping_file(&path).unwrap_err();
		assert!(matches!(err, MappingLoadError::Io { .. }));
		assert!(
			err.to_string().starts_with(&format!("I/O error reading {}: ", path.display())),
			"{err}"
		);
	}

	#[test]
	fn malformed_json() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("sound.json");
		fs::write(&path, "{ \"a\": ").unwrap();

		assert!(matches!(load_mapping_file(&path), Err(MappingLoadError::Json { .. })));
	}

	#[test]
	fn top_level_array_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("sound.json");
		fs::write(&path, "[]").unwrap();

		let err = load_mapping_file(&path).unwrap_err();
		assert!(matches!(err, MappingLoadError::NotAnObject { .. }));
		assert_eq!(
			err.to_string(),
			format!("{} must contain a JSON object at the top level", path.display())
		);
	}
}
