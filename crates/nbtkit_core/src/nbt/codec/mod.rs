use std::io::{Read, Write};

use crate::nbt::bytes::{Cursor, Writer};
use crate::nbt::{ByteOrder, Compression, Result, Tag, wire};

/// Encodes and decodes whole tag trees, optionally through a
/// compression envelope.
///
/// The payload byte order is fixed at construction; there is no hidden
/// default. Callers expressing "no compression" pass
/// [`Compression::None`].
#[derive(Debug, Clone, Copy)]
pub struct NbtCodec {
	order: ByteOrder,
}

impl NbtCodec {
	/// Create a codec with an explicit payload byte order.
	pub fn new(order: ByteOrder) -> Self {
		Self { order }
	}

	/// Payload byte order used by this codec.
	pub fn order(self) -> ByteOrder {
		self.order
	}

	/// Decode one named root tag from a byte buffer.
	pub fn decode(self, bytes: &[u8], compression: Compression) -> Result<Tag> {
		let bytes = compression.extract(bytes)?;
		let mut cursor = Cursor::new(&bytes);
		wire::read_root(&mut cursor, self.order)
	}

	/// Drain a stream fully, then decode one named root tag.
	///
	/// There is no incremental parse; the whole payload is in memory
	/// before decoding begins.
	pub fn decode_stream(self, mut source: impl Read, compression: Compression) -> Result<Tag> {
		let mut bytes = Vec::new();
		source.read_to_end(&mut bytes)?;
		self.decode(&bytes, compression)
	}

	/// Encode one named root tag, returning the enveloped bytes.
	///
	/// The tag is written into a scratch buffer private to this call;
	/// on failure nothing is delivered.
	pub fn encode(self, tag: &Tag, compression: Compression) -> Result<Vec<u8>> {
		let mut scratch = Writer::new();
		wire::write_root(&mut scratch, tag, self.order)?;
		compression.compress(&scratch.into_bytes())
	}

	/// Encode one named root tag, appending the result to `out`.
	pub fn encode_into(self, out: &mut Vec<u8>, tag: &Tag, compression: Compression) -> Result<()> {
		out.extend_from_slice(&self.encode(tag, compression)?);
		Ok(())
	}

	/// Encode one named root tag to a stream.
	pub fn encode_stream(self, mut dest: impl Write, tag: &Tag, compression: Compression) -> Result<()> {
		dest.write_all(&self.encode(tag, compression)?)?;
		Ok(())
	}
}
