//! One `datagen` run: EULA gate, registry load, generators, output.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, bail};
use datagen_generators::{DiagnosticSink, MemorySink, Pipeline, RunSummary, SoundGenerator, TracingSink};
use datagen_registry::sound_events_from_file;
use tracing::{Level, info, warn};

use crate::cli::Cli;
use crate::eula;

/// Process inputs a run reads besides its arguments.
#[derive(Debug, Clone)]
pub struct Context {
	/// `eula.txt` location.
	pub eula_file: PathBuf,
	/// Value of the `EULA` environment variable, if set.
	pub eula_env: Option<String>,
}

impl Context {
	pub fn from_process() -> Self {
		Self {
			eula_file: PathBuf::from(eula::EULA_FILE),
			eula_env: std::env::var(eula::EULA_ENV).ok(),
		}
	}
}

/// Runs the selected generators, failing if the EULA is not accepted, a
/// requested generator does not exist, or any generator fails.
pub fn run(cli: &Cli, ctx: &Context) -> anyhow::Result<RunSummary> {
	warn!("Mojang requires all source-code and mappings used to be governed by the Minecraft EULA.");
	warn!("Please read the Minecraft EULA located at https://account.mojang.com/documents/minecraft_eula.");
	let Some(acceptance) = eula::acceptance(cli.accept_eula, &ctx.eula_file, ctx.eula_env.as_deref()) else {
		bail!(
			"Data generation has been halted as the EULA has not been signed. \
			 Create {} containing 'eula=true', set {}=true, or pass --accept-eula.",
			eula::EULA_FILE,
			eula::EULA_ENV,
		);
	};
	info!(?acceptance, "The EULA has been accepted and signed");

	let registry = sound_events_from_file(&cli.registry)
		.with_context(|| format!("failed to load registry report {}", cli.registry.display()))?;
	if registry.is_empty() {
		warn!(report = %cli.registry.display(), "Registry report lists no sound events");
	}
	info!(registry = registry.name(), entries = registry.len(), "Loaded sound events");

	let diagnostics = Arc::new(MemorySink::new());
	let sink: Arc<dyn DiagnosticSink> = Arc::new((TracingSink, diagnostics.clone()));

	let sounds = SoundGenerator::new(Arc::new(registry), sink).with_mapping_path(cli.sound_mapping_path());
	info!(path = %sounds.mapping_path().display(), "Reading sound mappings");

	let mut pipeline = Pipeline::new();
	pipeline.push(sounds);

	if let Some(only) = &cli.only {
		let available = pipeline.names().join(", ");
		let unknown = pipeline.retain_named(only);
		if !unknown.is_empty() {
			bail!("unknown generator(s): {} (available: {available})", unknown.join(", "));
		}
	}

	let summary = pipeline.run(&cli.output);
	info!(
		written = summary.written.len(),
		warnings = diagnostics.count(Level::WARN),
		errors = diagnostics.count(Level::ERROR),
		"Data generation finished"
	);

	if !summary.is_success() {
		bail!("{} generator(s) failed: {}", summary.failed.len(), summary.failed.join(", "));
	}
	Ok(summary)
}

#[cfg(test)]
mod tests {
	use std::ffi::OsString;
	use std::fs;
	use std::path::Path;

	use clap::Parser;
	use tempfile::TempDir;

	use super::*;

	const REPORT: &str = r#"{"minecraft:sound_event": {"protocol_id": 13, "entries": {
		"minecraft:block.stone.break": {"protocol_id": 0},
		"minecraft:entity.pig.ambient": {"protocol_id": 1}
	}}}"#;

	fn workspace(mapping: &str) -> TempDir {
		let dir = tempfile::tempdir().expect("create tempdir");
		fs::write(dir.path().join("registries.json"), REPORT).unwrap();
		fs::create_dir(dir.path().join("mappings")).unwrap();
		fs::write(dir.path().join("mappings").join("sound.json"), mapping).unwrap();
		dir
	}

	fn cli(dir: &Path, extra: &[&str]) -> Cli {
		let mut args: Vec<OsString> = vec![
			"datagen".into(),
			dir.join("generated").into(),
			"--registry".into(),
			dir.join("registries.json").into(),
			"--mappings".into(),
			dir.join("mappings").into(),
		];
		args.extend(extra.iter().map(OsString::from));
		Cli::try_parse_from(args).unwrap()
	}

	fn no_eula(dir: &Path) -> Context {
		Context {
			eula_file: dir.join(eula::EULA_FILE),
			eula_env: None,
		}
	}

	const STONE: &str = r#"{"block.stone.break": {"playsound_mapping": "dig.stone", "bedrock_mapping": "stone"}}"#;

	#[test]
	fn writes_sounds_when_accepted() {
		let dir = workspace(STONE);

		let summary = run(&cli(dir.path(), &["--accept-eula"]), &no_eula(dir.path())).unwrap();

		let expected = dir.path().join("generated").join("sounds.json");
		assert_eq!(summary.written, vec![expected.clone()]);
		let written = fs::read_to_string(expected).unwrap();
		assert!(written.contains("\"dig.stone\""));
	}

	#[test]
	fn refuses_without_eula() {
		let dir = workspace(STONE);

		let err = run(&cli(dir.path(), &[]), &no_eula(dir.path())).unwrap_err();

		assert!(err.to_string().contains("EULA has not been signed"), "{err}");
		assert!(!dir.path().join("generated").exists());
	}

	#[test]
	fn eula_file_and_env_are_honoured() {
		let dir = workspace(STONE);
		let ctx = no_eula(dir.path());
		fs::write(&ctx.eula_file, "eula=true\n").unwrap();
		assert!(run(&cli(dir.path(), &[]), &ctx).is_ok());

		let env = Context {
			eula_file: dir.path().join("missing-eula.txt"),
			eula_env: Some("true".to_string()),
		};
		assert!(run(&cli(dir.path(), &[]), &env).is_ok());
	}

	#[test]
	fn unknown_generator_is_rejected() {
		let dir = workspace(STONE);

		let err = run(&cli(dir.path(), &["--accept-eula", "--only", "biomes"]), &no_eula(dir.path())).unwrap_err();

		let message = err.to_string();
		assert!(message.contains("unknown generator(s): biomes"), "{message}");
		assert!(message.contains("available: sounds"), "{message}");
		assert!(!dir.path().join("generated").exists());
	}

	#[test]
	fn failing_generator_fails_the_run() {
		let dir = workspace(r#"{"block.stone.break": ["dig.stone", "stone"]}"#);

		let err = run(&cli(dir.path(), &["--accept-eula"]), &no_eula(dir.path())).unwrap_err();

		assert_eq!(err.to_string(), "1 generator(s) failed: sounds");
		assert!(!dir.path().join("generated").join("sounds.json").exists());
	}

	#[test]
	fn missing_registry_report_is_reported() {
		let dir = workspace(STONE);
		fs::remove_file(dir.path().join("registries.json")).unwrap();

		let err = run(&cli(dir.path(), &["--accept-eula"]), &no_eula(dir.path())).unwrap_err();

		assert!(err.to_string().starts_with("failed to load registry report"), "{err}");
	}
}
