use super::Dictionary;
use crate::error::{CapacityError, InsertError, LoadError};
use crate::index::WordIndex;
use crate::word::MAX_WORD_LEN;

fn loaded(words: &str) -> Dictionary {
	let mut dict = Dictionary::new();
	dict.load_from(words.as_bytes()).unwrap();
	dict
}

#[test]
fn test_unloaded_is_empty() {
	let dict = Dictionary::new();
	assert!(!dict.is_loaded());
	assert_eq!(dict.size(), 0);
	assert!(!dict.check("apple"));
	assert!(!dict.check(""));
}

#[test]
fn test_lifecycle() {
	let mut dict = loaded("apple\nBanana\nCAT\n");
	assert_eq!(dict.size(), 3);
	assert!(dict.check("apple"));
	assert!(dict.check("APPLE"));
	assert!(dict.check("banana"));
	assert!(!dict.check("dog"));

	assert!(dict.unload());
	assert_eq!(dict.size(), 0);
	assert!(!dict.check("apple"));

	dict.load_from("dog\n".as_bytes()).unwrap();
	assert!(dict.check("Dog"));
	assert!(!dict.check("apple"));
}

#[test]
fn test_unload_is_idempotent() {
	let mut dict = Dictionary::new();
	assert!(dict.unload());
	assert!(dict.unload());
	assert_eq!(dict.size(), 0);

	let mut dict = loaded("one\n");
	assert!(dict.unload());
	assert!(dict.unload());
	assert_eq!(dict.size(), 0);
}

#[test]
fn test_duplicates_counted() {
	let mut dict = loaded("pear\nplum\n");
	let before = dict.size();
	dict.unload();
	dict.load_from("pear\nplum\nfig\nfig\n".as_bytes()).unwrap();
	assert_eq!(dict.size(), before + 2);
	assert!(dict.check("FIG"));
}

#[test]
fn test_load_twice_is_rejected() {
	let mut dict = loaded("one\ntwo\n");
	let err = dict.load_from("three\n".as_bytes()).unwrap_err();
	assert!(matches!(err, LoadError::AlreadyLoaded));
	assert_eq!(dict.size(), 2);
	assert!(!dict.check("three"));
}

#[test]
fn test_failed_load_leaves_unloaded() {
	let mut dict = Dictionary::new();
	let words = format!("fine\n{}\n", "x".repeat(MAX_WORD_LEN + 1));
	let err = dict.load_from(words.as_bytes()).unwrap_err();
	assert!(matches!(
		err,
		LoadError::Insert {
			line: 2,
			source: InsertError::OversizeWord { .. }
		}
	));
	assert!(!dict.is_loaded());
	assert_eq!(dict.size(), 0);
	assert!(!dict.check("fine"));
}

#[test]
fn test_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let mut dict = Dictionary::new();
	let err = dict.load(dir.path().join("nope")).unwrap_err();
	assert!(matches!(err, LoadError::SourceUnavailable { .. }));
	assert!(!dict.is_loaded());
	assert_eq!(dict.size(), 0);
}

#[test]
fn test_load_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("small");
	std::fs::write(&path, "apple\nBanana\nCAT\n").unwrap();

	let mut dict = Dictionary::with_capacity(13);
	dict.load(&path).unwrap();
	assert_eq!(dict.size(), 3);
	assert!(dict.check("cat"));
	assert_eq!(dict.index().map(WordIndex::capacity), Some(13));
}

#[test]
fn test_bad_capacity() {
	let mut dict = Dictionary::with_capacity(0);
	let err = dict.load_from("one\n".as_bytes()).unwrap_err();
	assert!(matches!(
		err,
		LoadError::Capacity(CapacityError::OutOfRange(0))
	));
	assert!(!dict.is_loaded());
}
