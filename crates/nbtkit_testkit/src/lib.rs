//! Shared test helpers for workspace crates.

use std::path::PathBuf;

use nbtkit::nbt::{Compound, List, Tag};

/// Byte image of the canonical `hello world` fixture: an uncompressed
/// big-endian compound named `hello world` holding one string entry
/// `name = "Bananrama"`.
pub fn hello_world_bytes() -> Vec<u8> {
	let mut bytes = vec![0x0A, 0x00, 0x0B];
	bytes.extend_from_slice(b"hello world");
	bytes.extend_from_slice(&[0x08, 0x00, 0x04]);
	bytes.extend_from_slice(b"name");
	bytes.extend_from_slice(&[0x00, 0x09]);
	bytes.extend_from_slice(b"Bananrama");
	bytes.push(0x00);
	bytes
}

/// Build a small mixed tree exercising scalars, arrays, and a
/// list of compounds.
pub fn sample_root() -> Tag {
	let mut entries = List::new();
	for index in 0..2_i64 {
		let mut entry = Compound::new();
		entry.insert(Tag::long(1264099775885).with_name("created-on")).expect("insert succeeds");
		entry.insert(Tag::string(format!("Compound tag #{index}")).with_name("name")).expect("insert succeeds");
		entries.push(Tag::compound(entry)).expect("push succeeds");
	}

	let mut root = Compound::new();
	root.insert(Tag::byte(127).with_name("byteTest")).expect("insert succeeds");
	root.insert(Tag::short(32767).with_name("shortTest")).expect("insert succeeds");
	root.insert(Tag::int(2147483647).with_name("intTest")).expect("insert succeeds");
	root.insert(Tag::long(9223372036854775807).with_name("longTest")).expect("insert succeeds");
	root.insert(Tag::float(0.49823147).with_name("floatTest")).expect("insert succeeds");
	root.insert(Tag::double(0.4931287132182315).with_name("doubleTest")).expect("insert succeeds");
	root.insert(Tag::string("HELLO WORLD THIS IS A TEST STRING ÅÄÖ!").with_name("stringTest")).expect("insert succeeds");
	root.insert(Tag::byte_array(byte_array_test()).with_name("byteArrayTest")).expect("insert succeeds");
	root.insert(Tag::int_array(vec![0, -1, 2147483647, -2147483648]).with_name("intArrayTest")).expect("insert succeeds");
	root.insert(Tag::list(entries).with_name("listTest (compound)")).expect("insert succeeds");

	Tag::compound(root).with_name("Level")
}

/// The first 1000 values of `(n*n*255 + n*7) % 100`.
pub fn byte_array_test() -> Vec<u8> {
	(0..1000_i64).map(|n| ((n * n * 255 + n * 7) % 100) as u8).collect()
}

/// Unique path under the system temp directory.
pub fn temp_path(name: &str) -> PathBuf {
	std::env::temp_dir().join(format!("nbtkit_{}_{name}", std::process::id()))
}
