use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use nbtkit::nbt::{ByteOrder, Compression, NbtCodec};

static NBTKIT_BIN: OnceLock<PathBuf> = OnceLock::new();

/// Write the canonical hello-world image to a unique temp file.
pub(crate) fn write_hello_world(name: &str) -> PathBuf {
	let path = nbtkit_testkit::temp_path(name);
	std::fs::write(&path, nbtkit_testkit::hello_world_bytes()).expect("fixture writes");
	path
}

/// Encode the shared sample tree to a unique temp file.
pub(crate) fn write_sample(name: &str, compression: Compression) -> PathBuf {
	let bytes = NbtCodec::new(ByteOrder::Big)
		.encode(&nbtkit_testkit::sample_root(), compression)
		.expect("sample encodes");
	let path = nbtkit_testkit::temp_path(name);
	std::fs::write(&path, bytes).expect("fixture writes");
	path
}

pub(crate) fn run_nbtkit(args: &[&str]) -> Output {
	Command::new(nbtkit_bin()).args(args).output().expect("nbtkit command executes")
}

pub(crate) fn run_nbtkit_json(args: &[&str]) -> serde_json::Value {
	let output = run_nbtkit(args);
	assert!(
		output.status.success(),
		"nbtkit command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn nbtkit_bin() -> &'static PathBuf {
	NBTKIT_BIN.get_or_init(resolve_nbtkit_bin)
}

fn resolve_nbtkit_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_nbtkit") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| manifest_dir.join("..").join("..").join("target"));

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "nbtkit.exe" } else { "nbtkit" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "nbtkit"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build nbtkit binary at {}", bin.display());

	bin
}
