use std::io::{Read, Write};

use flate2::read::{GzDecoder, ZlibDecoder};
use flate2::write::{GzEncoder, ZlibEncoder};

use crate::nbt::{NbtError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;

/// Compression envelope applied around encoded tag bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	None,
	/// Gzip member framing.
	Gzip,
	/// Zlib framing.
	Zlib,
	/// Sniff magic bytes, then delegate to the detected mode.
	Detect,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Gzip => "gzip",
			Self::Zlib => "zlib",
			Self::Detect => "detect",
		}
	}

	/// Detect the compression mode from leading magic bytes.
	///
	/// `1F 8B` is gzip; `78` followed by `01`, `9C`, or `DA` is zlib;
	/// anything else, including inputs shorter than two bytes, is
	/// `None`. Nothing is consumed and `Detect` is never returned.
	pub fn detect(bytes: &[u8]) -> Compression {
		match bytes {
			[0x1F, 0x8B, ..] => Self::Gzip,
			[0x78, 0x01 | 0x9C | 0xDA, ..] => Self::Zlib,
			_ => Self::None,
		}
	}

	/// Decompress-or-passthrough.
	pub fn extract(self, bytes: &[u8]) -> Result<Vec<u8>> {
		match self {
			Self::None => Ok(bytes.to_vec()),
			Self::Gzip => inflate(GzDecoder::new(bytes)),
			Self::Zlib => inflate(ZlibDecoder::new(bytes)),
			Self::Detect => Self::detect(bytes).extract(bytes),
		}
	}

	/// Compress-or-passthrough.
	pub fn compress(self, bytes: &[u8]) -> Result<Vec<u8>> {
		match self {
			Self::None => Ok(bytes.to_vec()),
			Self::Gzip => {
				let mut encoder = GzEncoder::new(Vec::new(), flate2::Compression::default());
				encoder.write_all(bytes)?;
				Ok(encoder.finish()?)
			}
			Self::Zlib => {
				let mut encoder = ZlibEncoder::new(Vec::new(), flate2::Compression::default());
				encoder.write_all(bytes)?;
				Ok(encoder.finish()?)
			}
			Self::Detect => Self::detect(bytes).compress(bytes),
		}
	}
}

/// Drain a decoder, surfacing framing failures as decode errors.
fn inflate(mut decoder: impl Read) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf).map_err(|err| NbtError::BadCompressedData { reason: err.to_string() })?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(NbtError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}
