use std::path::PathBuf;

use nbtkit::nbt::{NbtFile, Result};

use crate::cmd::util::{emit_json, parse_order};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "order", default_value = "big")]
	pub order: String,
}

/// Print tree-level statistics for one file.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, order } = args;

	let order = parse_order(&order)?;
	let file = NbtFile::open_with_order(&path, order)?;
	let stats = file.scan_kind_stats();

	let mut kinds: Vec<_> = stats.kinds.into_iter().collect();
	kinds.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.id().cmp(&right.0.id())));

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: file.compression.as_str().to_owned(),
			order: file.order.as_str().to_owned(),
			root_kind: file.root.kind().label().to_owned(),
			root_name: file.root.name().map(str::to_owned),
			tag_count: stats.tag_count,
			max_depth: stats.max_depth,
			kinds: kinds
				.iter()
				.map(|(kind, count)| KindCountJson {
					kind: kind.label().to_owned(),
					count: *count,
				})
				.collect(),
		};
		emit_json(&payload);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", file.compression.as_str());
	println!("order: {}", file.order.as_str());
	println!("root_kind: {}", file.root.kind().label());
	println!("root_name: {}", file.root.name().unwrap_or_default());
	println!("tag_count: {}", stats.tag_count);
	println!("max_depth: {}", stats.max_depth);
	println!("kinds:");
	for (kind, count) in kinds {
		println!("  {}: {}", kind.label(), count);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct KindCountJson {
	kind: String,
	count: u64,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: String,
	order: String,
	root_kind: String,
	root_name: Option<String>,
	tag_count: u64,
	max_depth: u32,
	kinds: Vec<KindCountJson>,
}
