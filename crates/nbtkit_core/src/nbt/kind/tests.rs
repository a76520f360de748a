use crate::nbt::{NbtError, TagKind};

#[test]
fn ids_round_trip_through_the_registry() {
	for kind in TagKind::ALL {
		let resolved = TagKind::from_id(kind.id()).expect("bound id resolves");
		assert_eq!(resolved, kind);
	}
}

#[test]
fn ids_are_dense_from_zero() {
	for (index, kind) in TagKind::ALL.iter().enumerate() {
		assert_eq!(usize::from(kind.id()), index);
	}
}

#[test]
fn unbound_id_is_rejected() {
	for id in [12_u8, 63, 255] {
		let err = TagKind::from_id(id).expect_err("unbound id fails");
		assert!(matches!(err, NbtError::UnknownTagId { id: got } if got == id));
	}
}

#[test]
fn constructed_tags_are_unnamed_and_zero_valued() {
	for kind in TagKind::ALL {
		let tag = kind.construct();
		assert_eq!(tag.kind(), kind);
		assert_eq!(tag.name(), None);
	}

	assert_eq!(TagKind::Int.construct().as_i64(), Some(0));
	assert_eq!(TagKind::Double.construct().as_f64(), Some(0.0));
	assert_eq!(TagKind::ByteArray.construct().as_bytes(), None);
	assert_eq!(TagKind::String.construct().as_str(), None);
}
