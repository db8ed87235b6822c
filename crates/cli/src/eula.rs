//! Minecraft EULA gate.
//!
//! Game data may only be generated once the EULA has been accepted, through
//! any of: `--accept-eula`, an `eula.txt` containing `eula=true`, or the `EULA`
//! environment variable set to `true`.

use std::fs;
use std::path::Path;

/// File checked for an `eula=true` line, relative to the working directory.
pub const EULA_FILE: &str = "eula.txt";

/// Environment variable checked for acceptance.
pub const EULA_ENV: &str = "EULA";

/// How the EULA was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
	Flag,
	File,
	Env,
}

/// Returns how the EULA was accepted, or `None` if it was not.
pub fn acceptance(flag: bool, eula_file: &Path, env: Option<&str>) -> Option<Acceptance> {
	if flag {
		return Some(Acceptance::Flag);
	}
	if fs::read_to_string(eula_file).is_ok_and(|text| text.trim().eq_ignore_ascii_case("eula=true")) {
		return Some(Acceptance::File);
	}
	if env.is_some_and(|value| value.trim().eq_ignore_ascii_case("true")) {
		return Some(Acceptance::Env);
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn flag_wins() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(acceptance(true, &dir.path().join(EULA_FILE), None), Some(Acceptance::Flag));
	}

	#[test]
	fn file_accepts_case_insensitively() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(EULA_FILE);
		fs::write(&path, "EULA=TRUE\n").unwrap();

		assert_eq!(acceptance(false, &path, None), Some(Acceptance::File));
	}

	#[test]
	fn file_with_other_content_is_rejected() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(EULA_FILE);
		fs::write(&path, "eula=false").unwrap();

		assert_eq!(acceptance(false, &path, None), None);
	}

	#[test]
	fn env_accepts_true_only() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(EULA_FILE);

		assert_eq!(acceptance(false, &path, Some("true")), Some(Acceptance::Env));
		assert_eq!(acceptance(false, &path, Some("yes")), None);
		assert_eq!(acceptance(false, &path, None), None);
	}
}
