use crate::nbt::{List, NbtError, Result, Tag, TagKind};

/// String-keyed collection of named tags.
///
/// Keys are unique and always equal the child tag's name; inserting a
/// duplicate key replaces the previous entry. Iteration follows
/// insertion order, which carries no meaning on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
	entries: Vec<Tag>,
}

impl Compound {
	/// Create an empty compound.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the compound holds no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Whether an entry with the given name exists.
	pub fn has(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Entry with the given name.
	pub fn get(&self, name: &str) -> Option<&Tag> {
		self.entries.iter().find(|item| item.name() == Some(name))
	}

	/// Mutable entry with the given name.
	pub fn get_mut(&mut self, name: &str) -> Option<&mut Tag> {
		self.entries.iter_mut().find(|item| item.name() == Some(name))
	}

	/// Insert a named tag, replacing any entry with the same name.
	///
	/// Compound entries are always named; inserting an unnamed tag
	/// fails.
	pub fn insert(&mut self, tag: Tag) -> Result<()> {
		if tag.name().is_none() {
			return Err(NbtError::MissingName { kind: tag.kind() });
		}

		if let Some(slot) = self.entries.iter_mut().find(|item| item.name() == tag.name()) {
			*slot = tag;
		} else {
			self.entries.push(tag);
		}
		Ok(())
	}

	/// Remove and return the entry with the given name.
	pub fn remove(&mut self, name: &str) -> Option<Tag> {
		let index = self.entries.iter().position(|item| item.name() == Some(name))?;
		Some(self.entries.remove(index))
	}

	/// Remove all entries.
	pub fn clear(&mut self) {
		self.entries.clear();
	}

	/// Iterate the entries in insertion order.
	pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
		self.entries.iter()
	}

	/// Whether the named entry holds a numeric payload.
	pub fn is_number(&self, name: &str) -> bool {
		self.get(name).is_some_and(Tag::is_number)
	}

	/// Whether the named entry is a string tag.
	pub fn is_string(&self, name: &str) -> bool {
		self.get(name).is_some_and(|item| item.kind() == TagKind::String)
	}

	/// Whether the named entry is a compound tag.
	pub fn is_compound(&self, name: &str) -> bool {
		self.get(name).is_some_and(|item| item.kind() == TagKind::Compound)
	}

	/// Whether the named entry is a list tag.
	pub fn is_list(&self, name: &str) -> bool {
		self.get(name).is_some_and(|item| item.kind() == TagKind::List)
	}

	/// Whether the named entry is a byte-array tag.
	pub fn is_byte_array(&self, name: &str) -> bool {
		self.get(name).is_some_and(|item| item.kind() == TagKind::ByteArray)
	}

	/// Whether the named entry is an int-array tag.
	pub fn is_int_array(&self, name: &str) -> bool {
		self.get(name).is_some_and(|item| item.kind() == TagKind::IntArray)
	}

	/// Numeric entry widened to `f64`; 0 for missing or non-numeric.
	pub fn number(&self, name: &str) -> f64 {
		self.get(name).and_then(Tag::as_f64).unwrap_or(0.0)
	}

	/// Integer entry widened to `i64`; 0 for missing or non-integer.
	pub fn integer(&self, name: &str) -> i64 {
		self.get(name).and_then(Tag::as_i64).unwrap_or(0)
	}

	/// Best-effort text for the named entry; empty for missing.
	pub fn text(&self, name: &str) -> String {
		self.get(name).map(Tag::to_text).unwrap_or_default()
	}

	/// Compound entry with the given name.
	pub fn compound(&self, name: &str) -> Option<&Compound> {
		self.get(name).and_then(Tag::as_compound)
	}

	/// List entry with the given name.
	pub fn list(&self, name: &str) -> Option<&List> {
		self.get(name).and_then(Tag::as_list)
	}

	/// Byte-array entry with the given name.
	pub fn byte_array(&self, name: &str) -> Option<&[u8]> {
		self.get(name).and_then(Tag::as_bytes)
	}

	/// Int-array entry with the given name.
	pub fn int_array(&self, name: &str) -> Option<&[i32]> {
		self.get(name).and_then(Tag::as_int_array)
	}
}
