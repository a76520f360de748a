use nbtkit::nbt::{ByteOrder, Compression, NbtError, Result};

/// Parse a user-provided compression label.
pub(crate) fn parse_compression(label: &str) -> Result<Compression> {
	match label {
		"none" => Ok(Compression::None),
		"gzip" => Ok(Compression::Gzip),
		"zlib" => Ok(Compression::Zlib),
		"detect" => Ok(Compression::Detect),
		_ => Err(NbtError::InvalidCompression { label: label.to_owned() }),
	}
}

/// Parse a user-provided byte-order label.
pub(crate) fn parse_order(label: &str) -> Result<ByteOrder> {
	match label {
		"big" => Ok(ByteOrder::Big),
		"little" => Ok(ByteOrder::Little),
		_ => Err(NbtError::InvalidByteOrder { label: label.to_owned() }),
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: {err}"),
	}
}
