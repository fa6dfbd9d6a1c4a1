use std::fmt::{self, Display, Formatter};

use crate::error::InsertError;

/// Longest word, in bytes, that the index stores.
/// (pneumonoultramicroscopicsilicovolcanoconiosis)
pub const MAX_WORD_LEN: usize = 45;

/// A normalized dictionary entry: ASCII-uppercased and at most [`MAX_WORD_LEN`] bytes.
///
/// Bytes outside `a..=z` pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(Box<[u8]>);

impl Word {
	/// Normalizes `raw` into a new entry.
	///
	/// The buffer is reserved fallibly so that running out of memory mid-load is
	/// reported instead of aborting.
	pub fn new(raw: &[u8]) -> Result<Self, InsertError> {
		if raw.len() > MAX_WORD_LEN {
			return Err(InsertError::OversizeWord { len: raw.len() });
		}

		let mut buf = Vec::new();
		buf.try_reserve_exact(raw.len())?;
		buf.extend(raw.iter().map(u8::to_ascii_uppercase));

		Ok(Self(buf.into_boxed_slice()))
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl AsRef<[u8]> for Word {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Display for Word {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter.write_str(&String::from_utf8_lossy(&self.0))
	}
}

/// Uppercases `raw` into `buf` and returns the filled prefix.
///
/// Returns `None` if `raw` is longer than [`MAX_WORD_LEN`]; such a word can never be in the index.
pub fn normalize_into<'buf>(raw: &[u8], buf: &'buf mut [u8; MAX_WORD_LEN]) -> Option<&'buf [u8]> {
	let out = buf.get_mut(..raw.len())?;
	for (dst, src) in out.iter_mut().zip(raw) {
		*dst = src.to_ascii_uppercase();
	}
	Some(out)
}

#[test]
fn test_word_normalizes() {
	assert_eq!(Word::new(b"apple").unwrap().as_bytes(), b"APPLE");
	assert_eq!(Word::new(b"O'Brien-3").unwrap().as_bytes(), b"O'BRIEN-3");
	assert_eq!(Word::new("café".as_bytes()).unwrap().as_bytes(), "CAFé".as_bytes());
	assert!(Word::new(b"").unwrap().is_empty());
}

#[test]
fn test_word_length_bound() {
	let longest = "pneumonoultramicroscopicsilicovolcanoconiosis";
	assert_eq!(longest.len(), MAX_WORD_LEN);
	assert_eq!(Word::new(longest.as_bytes()).unwrap().len(), MAX_WORD_LEN);

	let too_long = format!("{longest}s");
	assert!(matches!(
		Word::new(too_long.as_bytes()),
		Err(InsertError::OversizeWord { len: 46 })
	));
}

#[test]
fn test_normalize_into() {
	let mut buf = [0; MAX_WORD_LEN];
	assert_eq!(normalize_into(b"MiXeD", &mut buf), Some(&b"MIXED"[..]));
	assert_eq!(normalize_into(b"", &mut buf), Some(&b""[..]));
	assert_eq!(normalize_into(&[b'a'; MAX_WORD_LEN + 1], &mut buf), None);
}
