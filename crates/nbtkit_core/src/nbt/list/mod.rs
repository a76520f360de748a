use crate::nbt::{Compound, NbtError, Result, Tag, TagKind};

/// Homogeneous ordered sequence of unnamed tags.
///
/// An empty list carries `TagKind::End` meaning "no elements, kind
/// unconstrained"; the first push fixes the element kind and every
/// later push must match it.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
	elem: TagKind,
	items: Vec<Tag>,
}

impl Default for List {
	fn default() -> Self {
		Self {
			elem: TagKind::End,
			items: Vec::new(),
		}
	}
}

impl List {
	/// Create an empty list with an unconstrained element kind.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty list with a declared element kind.
	pub fn of(elem: TagKind) -> Self {
		Self {
			elem,
			items: Vec::new(),
		}
	}

	/// Declared element kind; `TagKind::End` while unconstrained.
	pub fn elem_kind(&self) -> TagKind {
		self.elem
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list holds no elements.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Element at `index`.
	pub fn get(&self, index: usize) -> Option<&Tag> {
		self.items.get(index)
	}

	/// Mutable element at `index`.
	pub fn get_mut(&mut self, index: usize) -> Option<&mut Tag> {
		self.items.get_mut(index)
	}

	/// Append an element, rejecting kind mismatches before any bytes
	/// could be written.
	///
	/// The element's name, if any, is dropped; list elements are never
	/// named.
	pub fn push(&mut self, mut tag: Tag) -> Result<()> {
		let kind = tag.kind();
		if self.items.is_empty() && self.elem == TagKind::End {
			self.elem = kind;
		} else if kind != self.elem {
			return Err(NbtError::ListElementMismatch {
				expected: self.elem,
				got: kind,
			});
		}

		tag.clear_name();
		self.items.push(tag);
		Ok(())
	}

	/// Remove and return the element at `index`.
	pub fn remove(&mut self, index: usize) -> Option<Tag> {
		if index < self.items.len() {
			Some(self.items.remove(index))
		} else {
			None
		}
	}

	/// Remove all elements; the element kind stays as declared.
	pub fn clear(&mut self) {
		self.items.clear();
	}

	/// Iterate the elements in order.
	pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
		self.items.iter()
	}

	/// Whether the element at `index` holds a numeric payload.
	pub fn is_number(&self, index: usize) -> bool {
		self.get(index).is_some_and(Tag::is_number)
	}

	/// Whether the element at `index` is a string tag.
	pub fn is_string(&self, index: usize) -> bool {
		self.get(index).is_some_and(|item| item.kind() == TagKind::String)
	}

	/// Whether the element at `index` is a compound tag.
	pub fn is_compound(&self, index: usize) -> bool {
		self.get(index).is_some_and(|item| item.kind() == TagKind::Compound)
	}

	/// Whether the element at `index` is a list tag.
	pub fn is_list(&self, index: usize) -> bool {
		self.get(index).is_some_and(|item| item.kind() == TagKind::List)
	}

	/// Whether the element at `index` is a byte-array tag.
	pub fn is_byte_array(&self, index: usize) -> bool {
		self.get(index).is_some_and(|item| item.kind() == TagKind::ByteArray)
	}

	/// Whether the element at `index` is an int-array tag.
	pub fn is_int_array(&self, index: usize) -> bool {
		self.get(index).is_some_and(|item| item.kind() == TagKind::IntArray)
	}

	/// Numeric element widened to `f64`; 0 for missing or non-numeric.
	pub fn number(&self, index: usize) -> f64 {
		self.get(index).and_then(Tag::as_f64).unwrap_or(0.0)
	}

	/// Integer element widened to `i64`; 0 for missing or non-integer.
	pub fn integer(&self, index: usize) -> i64 {
		self.get(index).and_then(Tag::as_i64).unwrap_or(0)
	}

	/// Best-effort text for the element; empty for missing.
	pub fn text(&self, index: usize) -> String {
		self.get(index).map(Tag::to_text).unwrap_or_default()
	}

	/// Compound element at `index`.
	pub fn compound(&self, index: usize) -> Option<&Compound> {
		self.get(index).and_then(Tag::as_compound)
	}

	/// List element at `index`.
	pub fn list(&self, index: usize) -> Option<&List> {
		self.get(index).and_then(Tag::as_list)
	}

	/// Byte-array element at `index`.
	pub fn byte_array(&self, index: usize) -> Option<&[u8]> {
		self.get(index).and_then(Tag::as_bytes)
	}

	/// Int-array element at `index`.
	pub fn int_array(&self, index: usize) -> Option<&[i32]> {
		self.get(index).and_then(Tag::as_int_array)
	}
}

#[cfg(test)]
mod tests;
