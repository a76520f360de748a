use crate::nbt::bytes::{Cursor, Writer};
use crate::nbt::{ByteOrder, Compound, List, NbtError, Tag, TagContext, TagKind, read_root, write_root, write_tag};

fn round_trip(tag: &Tag, order: ByteOrder) -> Tag {
	let mut out = Writer::new();
	write_root(&mut out, tag, order).expect("write succeeds");
	let bytes = out.into_bytes();

	let mut cursor = Cursor::new(&bytes);
	let back = read_root(&mut cursor, order).expect("read succeeds");
	assert_eq!(cursor.remaining(), 0, "root must consume all bytes");
	back
}

#[test]
fn every_scalar_kind_round_trips_in_both_orders() {
	let tags = [
		Tag::byte(-128).with_name("byte"),
		Tag::short(32767).with_name("short"),
		Tag::int(-2147483648).with_name("int"),
		Tag::long(9223372036854775807).with_name("long"),
		Tag::float(0.4982314705848694).with_name("float"),
		Tag::double(0.4931287132182315).with_name("double"),
	];

	for order in [ByteOrder::Big, ByteOrder::Little] {
		for tag in &tags {
			assert_eq!(&round_trip(tag, order), tag);
		}
	}
}

#[test]
fn arrays_and_strings_round_trip() {
	let tags = [
		Tag::byte_array((0..=255).collect()).with_name("bytes"),
		Tag::int_array(vec![0, -1, 2147483647, -2147483648]).with_name("ints"),
		Tag::string("HELLO WORLD THIS IS A TEST STRING ÅÄÖ!").with_name("text"),
		Tag::string("").with_name("empty"),
	];

	for order in [ByteOrder::Big, ByteOrder::Little] {
		for tag in &tags {
			assert_eq!(&round_trip(tag, order), tag);
		}
	}
}

#[test]
fn big_endian_int_bytes_reversed_decode_as_little_endian() {
	for value in [0_i32, -1, 2147483647, -2147483648] {
		let mut out = Writer::new();
		out.put_i32(value, ByteOrder::Big);
		let mut bytes = out.into_bytes();
		bytes.reverse();

		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_i32(ByteOrder::Little).expect("read succeeds"), value);
	}
}

#[test]
fn empty_compound_encodes_to_the_single_terminator_byte() {
	let mut out = Writer::new();
	let tag = Tag::compound(Compound::new()).with_name("");
	write_root(&mut out, &tag, ByteOrder::Big).expect("write succeeds");

	// id, two-byte empty name, terminator.
	assert_eq!(out.into_bytes(), vec![10, 0, 0, 0]);
}

#[test]
fn single_terminator_byte_decodes_to_zero_entries() {
	let bytes = [10_u8, 0, 0, 0];
	let mut cursor = Cursor::new(&bytes);
	let tag = read_root(&mut cursor, ByteOrder::Big).expect("read succeeds");

	let compound = tag.as_compound().expect("compound decodes");
	assert_eq!(compound.len(), 0);
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn standalone_end_tag_encodes_zero_payload_bytes() {
	let mut out = Writer::new();
	write_root(&mut out, &Tag::end().with_name(""), ByteOrder::Big).expect("write succeeds");

	// id plus two-byte empty name, nothing else.
	assert_eq!(out.into_bytes(), vec![0, 0, 0]);
}

#[test]
fn compound_entries_round_trip_with_nested_containers() {
	let mut egg = Compound::new();
	egg.insert(Tag::string("Eggbert").with_name("name")).expect("insert succeeds");
	egg.insert(Tag::float(0.5).with_name("value")).expect("insert succeeds");

	let mut nested = Compound::new();
	nested.insert(Tag::compound(egg).with_name("egg")).expect("insert succeeds");

	let mut longs = List::new();
	for value in 11..=15_i64 {
		longs.push(Tag::long(value)).expect("push succeeds");
	}

	let mut root = Compound::new();
	root.insert(Tag::compound(nested).with_name("nested compound test")).expect("insert succeeds");
	root.insert(Tag::list(longs).with_name("listTest (long)")).expect("insert succeeds");

	let tag = Tag::compound(root).with_name("Level");
	for order in [ByteOrder::Big, ByteOrder::Little] {
		let back = round_trip(&tag, order);
		let compound = back.as_compound().expect("compound decodes");

		assert_eq!(back.name(), Some("Level"));
		assert_eq!(
			compound.compound("nested compound test").and_then(|item| item.compound("egg")).map(|item| item.text("name")),
			Some("Eggbert".to_owned())
		);

		let list = compound.list("listTest (long)").expect("list decodes");
		assert_eq!(list.elem_kind(), TagKind::Long);
		for (index, expected) in (11..=15_i64).enumerate() {
			assert_eq!(list.integer(index), expected);
		}
	}
}

#[test]
fn empty_unconstrained_list_round_trips() {
	let tag = Tag::list(List::new()).with_name("empty");
	let back = round_trip(&tag, ByteOrder::Big);

	let list = back.as_list().expect("list decodes");
	assert!(list.is_empty());
	assert_eq!(list.elem_kind(), TagKind::End);
}

#[test]
fn unassigned_byte_array_write_fails_and_emits_nothing() {
	let tag = TagKind::ByteArray.construct().with_name("pending");

	let mut out = Writer::new();
	let err = write_tag(&mut out, &tag, ByteOrder::Big, TagContext::ListElement).expect_err("write fails");

	assert!(matches!(err, NbtError::MissingPayload { kind: TagKind::ByteArray }));
	assert!(out.is_empty(), "failed payload must not emit bytes");
}

#[test]
fn unassigned_string_and_int_array_writes_fail() {
	for kind in [TagKind::String, TagKind::IntArray] {
		let tag = kind.construct().with_name("pending");
		let mut out = Writer::new();
		let err = write_root(&mut out, &tag, ByteOrder::Big).expect_err("write fails");
		assert!(matches!(err, NbtError::MissingPayload { kind: got } if got == kind));
	}
}

#[test]
fn unnamed_root_write_is_rejected() {
	let mut out = Writer::new();
	let err = write_root(&mut out, &Tag::int(1), ByteOrder::Big).expect_err("write fails");

	assert!(matches!(err, NbtError::MissingName { kind: TagKind::Int }));
	assert!(out.is_empty());
}

#[test]
fn truncated_input_reports_out_of_data() {
	// Int tag named "a" with only two of its four payload bytes.
	let bytes = [3_u8, 0, 1, b'a', 0, 0];
	let mut cursor = Cursor::new(&bytes);
	let err = read_root(&mut cursor, ByteOrder::Big).expect_err("read fails");

	assert!(matches!(err, NbtError::UnexpectedEof { need: 4, .. }));
}

#[test]
fn unknown_discriminant_fails_the_decode() {
	let bytes = [12_u8, 0, 0];
	let mut cursor = Cursor::new(&bytes);
	let err = read_root(&mut cursor, ByteOrder::Big).expect_err("read fails");

	assert!(matches!(err, NbtError::UnknownTagId { id: 12 }));
}

#[test]
fn negative_array_length_fails_the_decode() {
	let mut out = Writer::new();
	out.put_u8(7);
	out.put_string("bad").expect("name writes");
	out.put_i32(-5, ByteOrder::Big);
	let bytes = out.into_bytes();

	let mut cursor = Cursor::new(&bytes);
	let err = read_root(&mut cursor, ByteOrder::Big).expect_err("read fails");
	assert!(matches!(err, NbtError::NegativeLength { len: -5 }));
}

#[test]
fn list_context_omits_discriminant_and_name() {
	let mut out = Writer::new();
	write_tag(&mut out, &Tag::short(5), ByteOrder::Big, TagContext::ListElement).expect("write succeeds");

	assert_eq!(out.into_bytes(), vec![0, 5]);
}
