//! HTML escaper used by every `.html` template.
//!
//! Writes named entities (`&lt;`, `&gt;`, `&amp;`, `&quot;`) and `&#x27;` for
//! the single quote instead of askama's default numeric references.

use std::fmt::{self, Write};

use askama::filters::Escaper;

#[derive(Clone, Copy, Debug, Default)]
pub struct NamedEntities;

fn entity(byte: u8) -> Option<&'static str> {
	match byte {
		b'<' => Some("&lt;"),
		b'>' => Some("&gt;"),
		b'&' => Some("&amp;"),
		b'"' => Some("&quot;"),
		b'\'' => Some("&#x27;"),
		_ => None,
	}
}

impl Escaper for NamedEntities {
	fn write_escaped_str<W: Write>(
		&self,
		mut dest: W,
		string: &str,
	) -> fmt::Result {
		// Escaped bytes are all ASCII, so every slice boundary is a char boundary.
		let mut last = 0;
		for (idx, byte) in string.bytes().enumerate() {
			if let Some(escaped) = entity(byte) {
				dest.write_str(&string[last..idx])?;
				dest.write_str(escaped)?;
				last = idx + 1;
			}
		}
		dest.write_str(&string[last..])
	}

	fn write_escaped_char<W: Write>(
		&self,
		mut dest: W,
		c: char,
	) -> fmt::Result {
		match u8::try_from(c).ok().and_then(entity) {
			Some(escaped) => dest.write_str(escaped),
			None => dest.write_char(c),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn escape(input: &str) -> String {
		let mut out = String::new();
		NamedEntities.write_escaped_str(&mut out, input).unwrap();
		out
	}

	#[test]
	fn test_writes_named_entities() {
		assert_eq!(
			escape(r#"<b>bold</b> & 'q' "d""#),
			"&lt;b&gt;bold&lt;/b&gt; &amp; &#x27;q&#x27; &quot;d&quot;"
		);
	}

	#[test]
	fn test_leaves_other_text_alone() {
		assert_eq!(escape("héllo wörld"), "héllo wörld");
		assert_eq!(escape("a<é>b"), "a&lt;é&gt;b");
		assert_eq!(escape(""), "");
	}

	#[test]
	fn test_escapes_single_chars() {
		let mut out = String::new();
		NamedEntities.write_escaped_char(&mut out, '<').unwrap();
		NamedEntities.write_escaped_char(&mut out, 'é').unwrap();
		assert_eq!(out, "&lt;é");
	}
}
