mod bytes;
mod codec;
mod compound;
mod compression;
mod error;
mod file;
mod kind;
mod list;
mod print;
mod tag;
mod wire;

/// Byte-order selection and bounded buffer primitives.
pub use bytes::{ByteOrder, Cursor, Writer};
/// Codec facade over buffers and streams.
pub use codec::NbtCodec;
/// String-keyed container of named tags.
pub use compound::Compound;
/// Compression selection and magic-byte detection.
pub use compression::Compression;
/// Error and result aliases.
pub use error::{NbtError, Result};
/// File convenience layer and tag population statistics.
pub use file::{KindStats, NbtFile};
/// Discriminant registry of the twelve tag kinds.
pub use kind::TagKind;
/// Homogeneous sequence of unnamed tags.
pub use list::List;
/// Lazy pretty-printing adapter.
pub use print::{Pretty, pretty};
/// Tag node and payload model.
pub use tag::{Payload, Tag};
/// Wire protocol context and tag read/write entry points.
pub use wire::{TagContext, read_root, write_root, write_tag};
