use thiserror::Error;

use crate::nbt::TagKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NbtError>;

/// Errors produced while decoding, encoding, and inspecting tag data.
#[derive(Debug, Error)]
pub enum NbtError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Discriminant byte not bound to any tag kind.
	#[error("unknown tag id {id}")]
	UnknownTagId {
		/// Offending discriminant byte.
		id: u8,
	},
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Compressed envelope could not be inflated.
	#[error("bad compressed data: {reason}")]
	BadCompressedData {
		/// Underlying inflate failure.
		reason: String,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Byte-array, int-array, or string payload was never assigned.
	#[error("{kind} payload was never assigned")]
	MissingPayload {
		/// Kind of the unassigned tag.
		kind: TagKind,
	},
	/// Tag written in a named context without a name.
	#[error("{kind} tag requires a name in this context")]
	MissingName {
		/// Kind of the unnamed tag.
		kind: TagKind,
	},
	/// List element kind differs from the list's declared element kind.
	#[error("list of {expected} rejects {got} element")]
	ListElementMismatch {
		/// Declared element kind.
		expected: TagKind,
		/// Kind of the rejected element.
		got: TagKind,
	},
	/// Array or list length prefix was negative.
	#[error("negative length {len}")]
	NegativeLength {
		/// Parsed signed length.
		len: i32,
	},
	/// Array or list too long for its signed 32-bit length prefix.
	#[error("length {len} exceeds the 32-bit length prefix")]
	LengthOverflow {
		/// Element count that failed to encode.
		len: usize,
	},
	/// String byte length too long for its two-byte length prefix.
	#[error("string of {len} bytes exceeds the {max}-byte limit")]
	StringTooLong {
		/// UTF-8 byte length of the offending string.
		len: usize,
		/// Maximum representable byte length.
		max: usize,
	},
	/// CLI compression label argument was invalid.
	#[error("invalid compression label: {label}")]
	InvalidCompression {
		/// User-provided label.
		label: String,
	},
	/// CLI byte-order label argument was invalid.
	#[error("invalid byte-order label: {label}")]
	InvalidByteOrder {
		/// User-provided label.
		label: String,
	},
}
