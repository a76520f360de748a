use crate::nbt::bytes::{Cursor, Writer};
use crate::nbt::tag::Payload;
use crate::nbt::{ByteOrder, Compound, List, NbtError, Result, Tag, TagKind};

/// Placement of a tag on the wire, deciding discriminant and name
/// presence.
///
/// The context travels down the recursion as a per-call parameter; it
/// is never stored on the tag, so a tag moved between containers can
/// never carry stale wire flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagContext {
	/// Top-level tag: discriminant byte and name both present.
	Root,
	/// Compound entry: discriminant byte and name both present; on
	/// read the compound loop consumes the discriminant before the
	/// entry reads its own name and payload.
	CompoundEntry,
	/// List element: neither discriminant byte nor name present; the
	/// list header covers the whole homogeneous run.
	ListElement,
}

impl TagContext {
	/// Whether this context carries a discriminant byte.
	pub fn with_id(self) -> bool {
		!matches!(self, Self::ListElement)
	}

	/// Whether this context carries a name string.
	pub fn with_name(self) -> bool {
		!matches!(self, Self::ListElement)
	}
}

/// Read one discriminant-prefixed, named top-level tag.
pub fn read_root(cursor: &mut Cursor<'_>, order: ByteOrder) -> Result<Tag> {
	let kind = TagKind::from_id(cursor.read_u8()?)?;
	read_named(cursor, order, kind)
}

/// Read the name-and-payload remainder of a tag whose discriminant was
/// already consumed.
fn read_named(cursor: &mut Cursor<'_>, order: ByteOrder, kind: TagKind) -> Result<Tag> {
	let name = cursor.read_string()?;
	let payload = read_payload(cursor, order, kind)?;
	Ok(Tag::bare(payload).with_name(name))
}

fn read_payload(cursor: &mut Cursor<'_>, order: ByteOrder, kind: TagKind) -> Result<Payload> {
	match kind {
		TagKind::End => Ok(Payload::End),
		TagKind::Byte => Ok(Payload::Byte(cursor.read_i8()?)),
		TagKind::Short => Ok(Payload::Short(cursor.read_i16(order)?)),
		TagKind::Int => Ok(Payload::Int(cursor.read_i32(order)?)),
		TagKind::Long => Ok(Payload::Long(cursor.read_i64(order)?)),
		TagKind::Float => Ok(Payload::Float(cursor.read_f32(order)?)),
		TagKind::Double => Ok(Payload::Double(cursor.read_f64(order)?)),
		TagKind::ByteArray => {
			let len = read_len(cursor, order)?;
			Ok(Payload::ByteArray(Some(cursor.read_exact(len)?.to_vec())))
		}
		TagKind::String => Ok(Payload::String(Some(cursor.read_string()?))),
		TagKind::List => {
			let elem = TagKind::from_id(cursor.read_u8()?)?;
			let count = read_len(cursor, order)?;
			let mut list = List::of(elem);
			for _ in 0..count {
				let payload = read_payload(cursor, order, elem)?;
				list.push(Tag::bare(payload))?;
			}
			Ok(Payload::List(list))
		}
		TagKind::Compound => {
			let mut compound = Compound::new();
			loop {
				let id = cursor.read_u8()?;
				if id == TagKind::End.id() {
					break;
				}
				let entry_kind = TagKind::from_id(id)?;
				compound.insert(read_named(cursor, order, entry_kind)?)?;
			}
			Ok(Payload::Compound(compound))
		}
		TagKind::IntArray => {
			let len = read_len(cursor, order)?;
			let mut values = Vec::with_capacity(len.min(cursor.remaining() / 4));
			for _ in 0..len {
				values.push(cursor.read_i32(order)?);
			}
			Ok(Payload::IntArray(Some(values)))
		}
	}
}

fn read_len(cursor: &mut Cursor<'_>, order: ByteOrder) -> Result<usize> {
	let len = cursor.read_i32(order)?;
	usize::try_from(len).map_err(|_| NbtError::NegativeLength { len })
}

/// Write one discriminant-prefixed, named top-level tag.
pub fn write_root(out: &mut Writer, tag: &Tag, order: ByteOrder) -> Result<()> {
	write_tag(out, tag, order, TagContext::Root)
}

/// Write a tag following the field-presence rules of `context`.
pub fn write_tag(out: &mut Writer, tag: &Tag, order: ByteOrder, context: TagContext) -> Result<()> {
	if context.with_id() {
		out.put_u8(tag.kind().id());
	}
	if context.with_name() {
		let name = tag.name().ok_or(NbtError::MissingName { kind: tag.kind() })?;
		out.put_string(name)?;
	}
	write_payload(out, tag, order)
}

fn write_payload(out: &mut Writer, tag: &Tag, order: ByteOrder) -> Result<()> {
	match tag.payload() {
		Payload::End => Ok(()),
		Payload::Byte(value) => {
			out.put_i8(*value);
			Ok(())
		}
		Payload::Short(value) => {
			out.put_i16(*value, order);
			Ok(())
		}
		Payload::Int(value) => {
			out.put_i32(*value, order);
			Ok(())
		}
		Payload::Long(value) => {
			out.put_i64(*value, order);
			Ok(())
		}
		Payload::Float(value) => {
			out.put_f32(*value, order);
			Ok(())
		}
		Payload::Double(value) => {
			out.put_f64(*value, order);
			Ok(())
		}
		Payload::ByteArray(value) => {
			let bytes = value.as_deref().ok_or(NbtError::MissingPayload { kind: TagKind::ByteArray })?;
			out.put_i32(write_len(bytes.len())?, order);
			out.put_bytes(bytes);
			Ok(())
		}
		Payload::String(value) => {
			let text = value.as_deref().ok_or(NbtError::MissingPayload { kind: TagKind::String })?;
			out.put_string(text)
		}
		Payload::List(list) => {
			out.put_u8(list.elem_kind().id());
			out.put_i32(write_len(list.len())?, order);
			for item in list.iter() {
				write_tag(out, item, order, TagContext::ListElement)?;
			}
			Ok(())
		}
		Payload::Compound(compound) => {
			for entry in compound.iter() {
				write_tag(out, entry, order, TagContext::CompoundEntry)?;
			}
			out.put_u8(TagKind::End.id());
			Ok(())
		}
		Payload::IntArray(value) => {
			let values = value.as_deref().ok_or(NbtError::MissingPayload { kind: TagKind::IntArray })?;
			out.put_i32(write_len(values.len())?, order);
			for item in values {
				out.put_i32(*item, order);
			}
			Ok(())
		}
	}
}

fn write_len(len: usize) -> Result<i32> {
	i32::try_from(len).map_err(|_| NbtError::LengthOverflow { len })
}

#[cfg(test)]
mod tests;
