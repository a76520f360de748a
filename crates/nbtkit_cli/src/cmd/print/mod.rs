use std::path::PathBuf;

use nbtkit::nbt::{NbtFile, Payload, Result, Tag, pretty};
use serde_json::{Value, json};

use crate::cmd::util::{emit_json, parse_order};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "order", default_value = "big")]
	pub order: String,
}

/// Dump one file as an indented tree or a JSON document.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, order } = args;

	let order = parse_order(&order)?;
	let file = NbtFile::open_with_order(&path, order)?;

	if json {
		emit_json(&tag_json(&file.root));
		return Ok(());
	}

	print!("{}", pretty(&file.root));
	Ok(())
}

fn tag_json(tag: &Tag) -> Value {
	let value = match tag.payload() {
		Payload::End => Value::Null,
		Payload::Byte(value) => json!(value),
		Payload::Short(value) => json!(value),
		Payload::Int(value) => json!(value),
		Payload::Long(value) => json!(value),
		Payload::Float(value) => json!(value),
		Payload::Double(value) => json!(value),
		Payload::ByteArray(value) => value.as_ref().map_or(Value::Null, |items| json!(items)),
		Payload::String(value) => value.as_ref().map_or(Value::Null, |text| json!(text)),
		Payload::List(list) => Value::Array(list.iter().map(tag_json).collect()),
		Payload::Compound(compound) => Value::Object(
			compound
				.iter()
				.map(|entry| (entry.name().unwrap_or_default().to_owned(), tag_json(entry)))
				.collect(),
		),
		Payload::IntArray(value) => value.as_ref().map_or(Value::Null, |items| json!(items)),
	};

	json!({
		"kind": tag.kind().label(),
		"name": tag.name(),
		"value": value,
	})
}
