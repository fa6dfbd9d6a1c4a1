/// Bucket count used when none is given. Odd, roughly 1.3 times the size of a large English word list.
pub const DEFAULT_CAPACITY: usize = 143_091;

/// Largest supported bucket count. Keeps `h * 256 + 255` within `u64`.
pub const MAX_CAPACITY: usize = u32::MAX as usize;

const BASE: u64 = 256;

/// Reads `word` as a base-256 numeral, most significant byte first, and reduces it modulo `capacity`.
///
/// Returns `None` unless `capacity` is in `1..=MAX_CAPACITY`.
pub fn bucket_of(word: &[u8], capacity: usize) -> Option<usize> {
	(1..=MAX_CAPACITY)
		.contains(&capacity)
		.then(|| bucket_in(word, capacity))
}

/// [`bucket_of`] for a capacity already known to be in range.
#[allow(clippy::cast_possible_truncation /* The result is below `capacity`. */)]
pub(crate) fn bucket_in(word: &[u8], capacity: usize) -> usize {
	debug_assert!((1..=MAX_CAPACITY).contains(&capacity));

	let modulus = capacity as u64;
	word
		.iter()
		.fold(0, |hash, &byte| (hash * BASE + u64::from(byte)) % modulus) as usize
}

#[test]
fn test_bucket_of() {
	assert_eq!(bucket_of(b"", DEFAULT_CAPACITY), Some(0));
	assert_eq!(bucket_of(b"A", DEFAULT_CAPACITY), Some(65));
	assert_eq!(bucket_of(b"AB", DEFAULT_CAPACITY), Some(65 * 256 + 66));
	assert_eq!(bucket_of(b"CAT", DEFAULT_CAPACITY), Some(114_906));
	assert_eq!(bucket_of(b"CAT", 1), Some(0));
}

#[test]
fn test_bucket_of_rejects_bad_capacity() {
	assert_eq!(bucket_of(b"a", 0), None);
	assert_eq!(bucket_of(b"abcdefghij", MAX_CAPACITY + 1), None);
	assert_eq!(bucket_of(b"abcdefghij", usize::MAX), None);
	assert!(bucket_of(b"abcdefghij", MAX_CAPACITY).is_some());
}

#[test]
fn test_bucket_of_high_bytes() {
	let word = [0xff; 64];
	assert!(bucket_in(&word, MAX_CAPACITY) < MAX_CAPACITY);
	assert!(bucket_in(&word, 7) < 7);
}
