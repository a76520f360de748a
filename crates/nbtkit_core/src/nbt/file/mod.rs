use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::nbt::tag::Payload;
use crate::nbt::{ByteOrder, Compression, NbtCodec, Result, Tag, TagKind};

/// A tag tree loaded from disk together with its detected envelope.
pub struct NbtFile {
	/// Concrete compression detected on open; never `Detect`.
	pub compression: Compression,
	/// Payload byte order used to decode and re-encode the tree.
	pub order: ByteOrder,
	/// Decoded root tag.
	pub root: Tag,
}

impl NbtFile {
	/// Open a file using magic-byte compression detection and the
	/// reference big-endian payload order.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		Self::open_with_order(path, ByteOrder::Big)
	}

	/// Open a file using magic-byte compression detection and an
	/// explicit payload order.
	pub fn open_with_order(path: impl AsRef<Path>, order: ByteOrder) -> Result<Self> {
		let raw = fs::read(path)?;
		let compression = Compression::detect(&raw);
		let root = NbtCodec::new(order).decode(&raw, compression)?;

		Ok(Self {
			compression,
			order,
			root,
		})
	}

	/// Re-encode the tree to a file with the chosen envelope.
	pub fn save(&self, path: impl AsRef<Path>, compression: Compression) -> Result<()> {
		let bytes = NbtCodec::new(self.order).encode(&self.root, compression)?;
		fs::write(path, bytes)?;
		Ok(())
	}

	/// Count tags per kind across the whole tree.
	pub fn scan_kind_stats(&self) -> KindStats {
		let mut stats = KindStats {
			tag_count: 0,
			max_depth: 0,
			kinds: HashMap::new(),
		};
		scan(&self.root, 1, &mut stats);
		stats
	}
}

/// Tag population statistics for one tree.
pub struct KindStats {
	/// Total number of tags, the root included.
	pub tag_count: u64,
	/// Deepest nesting level observed; the root is level 1.
	pub max_depth: u32,
	/// Per-kind tag counts.
	pub kinds: HashMap<TagKind, u64>,
}

fn scan(tag: &Tag, depth: u32, stats: &mut KindStats) {
	stats.tag_count += 1;
	stats.max_depth = stats.max_depth.max(depth);
	*stats.kinds.entry(tag.kind()).or_insert(0) += 1;

	match tag.payload() {
		Payload::List(list) => {
			for item in list.iter() {
				scan(item, depth + 1, stats);
			}
		}
		Payload::Compound(compound) => {
			for entry in compound.iter() {
				scan(entry, depth + 1, stats);
			}
		}
		_ => {}
	}
}
