use crate::nbt::{List, NbtError, Tag, TagKind};

#[test]
fn first_push_adopts_the_element_kind() {
	let mut list = List::new();
	assert_eq!(list.elem_kind(), TagKind::End);

	list.push(Tag::int(7)).expect("first push succeeds");
	assert_eq!(list.elem_kind(), TagKind::Int);
	assert_eq!(list.integer(0), 7);
}

#[test]
fn mismatched_push_is_rejected() {
	let mut list = List::of(TagKind::Int);
	let err = list.push(Tag::string("nope")).expect_err("mismatch fails");

	assert!(matches!(
		err,
		NbtError::ListElementMismatch {
			expected: TagKind::Int,
			got: TagKind::String,
		}
	));
	assert!(list.is_empty(), "rejected element must not be stored");
}

#[test]
fn mismatch_against_adopted_kind_is_rejected() {
	let mut list = List::new();
	list.push(Tag::long(1)).expect("long push succeeds");
	let err = list.push(Tag::byte(2)).expect_err("byte push fails");

	assert!(matches!(err, NbtError::ListElementMismatch { .. }));
	assert_eq!(list.len(), 1);
}

#[test]
fn element_names_are_dropped_on_push() {
	let mut list = List::new();
	list.push(Tag::string("value").with_name("ignored")).expect("push succeeds");

	assert_eq!(list.get(0).and_then(Tag::name), None);
}

#[test]
fn clear_keeps_the_declared_kind() {
	let mut list = List::of(TagKind::Short);
	list.push(Tag::short(3)).expect("push succeeds");
	list.clear();

	assert!(list.is_empty());
	assert_eq!(list.elem_kind(), TagKind::Short);

	let err = list.push(Tag::int(1)).expect_err("kind stays constrained");
	assert!(matches!(err, NbtError::ListElementMismatch { .. }));
}

#[test]
fn typed_index_accessors_default_when_out_of_range() {
	let mut list = List::new();
	list.push(Tag::double(2.5)).expect("push succeeds");

	assert_eq!(list.number(0), 2.5);
	assert_eq!(list.number(9), 0.0);
	assert_eq!(list.integer(9), 0);
	assert_eq!(list.text(9), "");
	assert!(!list.is_number(9));
	assert!(list.compound(0).is_none());
}
