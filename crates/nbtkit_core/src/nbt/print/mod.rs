use std::fmt;

use crate::nbt::tag::Payload;
use crate::nbt::Tag;

const INDENT: &str = "   ";

/// Lazy pretty-printing adapter produced by [`pretty`].
///
/// The rendering is generated at format time and is restartable:
/// formatting the same value twice yields identical output.
pub struct Pretty<'a> {
	tag: &'a Tag,
}

/// Render a tag tree as an indented multi-line diagnostic dump.
///
/// This output is for humans; it is not re-parseable and has no
/// round-trip contract.
pub fn pretty(tag: &Tag) -> Pretty<'_> {
	Pretty { tag }
}

impl fmt::Display for Pretty<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt_tag(f, self.tag, "")
	}
}

fn fmt_tag(f: &mut fmt::Formatter<'_>, tag: &Tag, indent: &str) -> fmt::Result {
	let label = tag.kind().label();
	let name = name_label(tag);
	match tag.payload() {
		Payload::End => Ok(()),
		Payload::Byte(value) => writeln!(f, "{indent}{label}({name}): {value}"),
		Payload::Short(value) => writeln!(f, "{indent}{label}({name}): {value}"),
		Payload::Int(value) => writeln!(f, "{indent}{label}({name}): {value}"),
		Payload::Long(value) => writeln!(f, "{indent}{label}({name}): {value}"),
		Payload::Float(value) => writeln!(f, "{indent}{label}({name}): {}", trim_fixed(format!("{value:.17}"))),
		Payload::Double(value) => writeln!(f, "{indent}{label}({name}): {}", trim_fixed(format!("{value:.17}"))),
		Payload::ByteArray(value) => {
			writeln!(f, "{indent}{label}({name}): [{} bytes]", value.as_ref().map_or(0, Vec::len))
		}
		Payload::String(value) => {
			writeln!(f, "{indent}{label}({name}): '{}'", value.as_deref().unwrap_or_default())
		}
		Payload::List(list) => {
			writeln!(f, "{indent}{label}({name}): {} entries", list.len())?;
			writeln!(f, "{indent}{{")?;
			let inner = format!("{indent}{INDENT}");
			for item in list.iter() {
				fmt_tag(f, item, &inner)?;
			}
			writeln!(f, "{indent}}}")
		}
		Payload::Compound(compound) => {
			writeln!(f, "{indent}{label}({name}): {} entries", compound.len())?;
			writeln!(f, "{indent}{{")?;
			let inner = format!("{indent}{INDENT}");
			let mut entries: Vec<&Tag> = compound.iter().collect();
			entries.sort_by(|left, right| {
				let left = left.name().unwrap_or_default().to_lowercase();
				let right = right.name().unwrap_or_default().to_lowercase();
				left.cmp(&right)
			});
			for entry in entries {
				fmt_tag(f, entry, &inner)?;
			}
			writeln!(f, "{indent}}}")
		}
		Payload::IntArray(value) => {
			writeln!(f, "{indent}{label}({name}): [{} ints]", value.as_ref().map_or(0, Vec::len))
		}
	}
}

fn name_label(tag: &Tag) -> String {
	match tag.name() {
		Some(name) => format!("'{name}'"),
		None => "None".to_owned(),
	}
}

/// Trim trailing zero padding from a fixed-precision rendering,
/// keeping at least one fractional digit.
fn trim_fixed(text: String) -> String {
	let trimmed = text.trim_end_matches('0');
	if trimmed.len() == text.len() {
		return text;
	}

	let trimmed_len = trimmed.len();
	let trimmed_ends_with_dot = trimmed.ends_with('.');

	let mut out = text;
	if trimmed_ends_with_dot {
		out.truncate(trimmed_len + 1);
	} else {
		out.truncate(trimmed_len);
	}
	out
}
