use std::path::PathBuf;

use nbtkit::nbt::{NbtFile, Result};

use crate::cmd::util::{parse_compression, parse_order};

#[derive(clap::Args)]
pub struct Args {
	pub input: PathBuf,
	pub output: PathBuf,
	#[arg(long, default_value = "gzip")]
	pub compression: String,
	#[arg(long = "order", default_value = "big")]
	pub order: String,
}

/// Decode a file and re-encode it with the chosen envelope.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		output,
		compression,
		order,
	} = args;

	let compression = parse_compression(&compression)?;
	let order = parse_order(&order)?;

	let file = NbtFile::open_with_order(&input, order)?;
	file.save(&output, compression)?;

	println!("input: {}", input.display());
	println!("input_compression: {}", file.compression.as_str());
	println!("output: {}", output.display());
	println!("output_compression: {}", compression.as_str());

	Ok(())
}
