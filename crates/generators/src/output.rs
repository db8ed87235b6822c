//! Writing generator output to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::GeneratorOutput;
use crate::error::OutputError;

/// Writes `output` as pretty-printed JSON to `<dir>/<name>.json`, creating `dir`.
pub fn write_output(dir: &Path, name: &str, output: &GeneratorOutput) -> Result<PathBuf, OutputError> {
	fs::create_dir_all(dir).map_err(|error| OutputError::Io {
		path: dir.to_path_buf(),
		error,
	})?;

	let mut json = serde_json::to_string_pretty(output).map_err(|error| OutputError::Serialize {
		name: name.to_string(),
		error,
	})?;
	json.push('\n');

	let path = dir.join(format!("{name}.json"));
	fs::write(&path, json).map_err(|error| OutputError::Io {
		path: path.clone(),
		error,
	})?;
	Ok(path)
}
