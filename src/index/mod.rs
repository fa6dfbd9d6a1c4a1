use std::fmt::{self, Debug, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::{CapacityError, InsertError, LoadError};
use crate::hash::{bucket_in, DEFAULT_CAPACITY, MAX_CAPACITY};
use crate::word::{normalize_into, Word, MAX_WORD_LEN};


// Public API:

/// The load phase of a [`WordIndex`]: a fixed number of chains that words are appended to.
#[derive(Debug)]
pub struct Builder {
	chains: Vec<Vec<Word>>,
	len: usize,
}

/// A frozen table of words, chained by the [`bucket_of`](crate::bucket_of) of their normalized form.
///
/// Only [`Builder`] can add words, so a `WordIndex` can be shared between reader threads freely.
pub struct WordIndex {
	chains: Box<[Box<[Word]>]>,
	len: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
	pub buckets: usize,
	pub entries: usize,
	/// Buckets with at least one entry.
	pub occupied: usize,
	pub longest_chain: usize,
}

impl Builder {
	/// A builder with [`DEFAULT_CAPACITY`] buckets.
	pub fn new() -> Result<Self, CapacityError> {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	pub fn with_capacity(capacity: usize) -> Result<Self, CapacityError> {
		if !(1..=MAX_CAPACITY).contains(&capacity) {
			return Err(CapacityError::OutOfRange(capacity));
		}

		let mut chains = Vec::new();
		chains
			.try_reserve_exact(capacity)
			.map_err(|source| CapacityError::ResourceExhausted {
				buckets: capacity,
				source,
			})?;
		chains.resize_with(capacity, Vec::new);

		Ok(Self { chains, len: 0 })
	}

	/// Appends `raw` to the tail of its chain. The same word may be inserted more than once.
	pub fn insert(&mut self, raw: &[u8]) -> Result<(), InsertError> {
		let word = Word::new(raw)?;
		let bucket = bucket_in(word.as_bytes(), self.chains.len());
		let chain = &mut self.chains[bucket];
		chain.try_reserve(1)?;
		chain.push(word);
		self.len += 1;
		Ok(())
	}

	/// Inserts every line of `reader`, stopping at the first line that cannot be stored.
	pub fn read_from<R: BufRead>(mut self, mut reader: R) -> Result<WordIndex, LoadError> {
		let mut line = Vec::with_capacity(MAX_WORD_LEN + 2);
		let mut number = 0;

		loop {
			number += 1;
			line.clear();

			let read = reader
				.read_until(b'\n', &mut line)
				.map_err(|source| LoadError::Read {
					line: number,
					source,
				})?;
			if read == 0 {
				break;
			}

			self
				.insert(strip_line_ending(&line))
				.map_err(|source| LoadError::Insert {
					line: number,
					source,
				})?;
		}

		let index = self.finish();
		info!("loaded word list: {}", index.stats());
		Ok(index)
	}

	pub fn load(self, path: &Path) -> Result<WordIndex, LoadError> {
		let file = File::open(path).map_err(|source| LoadError::SourceUnavailable {
			path: path.to_owned(),
			source,
		})?;
		debug!("loading word list from {path:?} into {} buckets", self.chains.len());
		self.read_from(BufReader::new(file))
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn finish(self) -> WordIndex {
		WordIndex {
			chains: self
				.chains
				.into_iter()
				.map(Vec::into_boxed_slice)
				.collect(),
			len: self.len,
		}
	}
}

impl WordIndex {
	/// Loads the word list at `path` into [`DEFAULT_CAPACITY`] buckets.
	pub fn load(path: &Path) -> Result<Self, LoadError> {
		Builder::new()?.load(path)
	}

	/// Whether `word` was loaded, ignoring ASCII case.
	pub fn check(&self, word: impl AsRef<[u8]>) -> bool {
		let mut buf = [0; MAX_WORD_LEN];
		let Some(key) = normalize_into(word.as_ref(), &mut buf) else {
			return false;
		};
		self
			.chain_for(key)
			.iter()
			.any(|entry| entry.as_bytes() == key)
	}

	/// Number of entries, counting duplicates.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Number of buckets.
	pub fn capacity(&self) -> usize {
		self.chains.len()
	}

	/// Every entry, bucket by bucket, each chain in insertion order.
	pub fn words(&self) -> impl Iterator<Item = &Word> + '_ {
		self.chains.iter().flat_map(|chain| chain.iter())
	}

	pub fn stats(&self) -> Stats {
		Stats {
			buckets: self.chains.len(),
			entries: self.len,
			occupied: self.chains.iter().filter(|chain| !chain.is_empty()).count(),
			longest_chain: self.chains.iter().map(|chain| chain.len()).max().unwrap_or(0),
		}
	}
}

impl Stats {
	/// Average chain length over all buckets.
	#[allow(clippy::cast_precision_loss)]
	pub fn load_factor(&self) -> f64 {
		self.entries as f64 / self.buckets as f64
	}
}

// Implementation:

fn strip_line_ending(line: &[u8]) -> &[u8] {
	let line = line.strip_suffix(b"\n").unwrap_or(line);
	line.strip_suffix(b"\r").unwrap_or(line)
}

impl WordIndex {
	fn chain_for(&self, key: &[u8]) -> &[Word] {
		&self.chains[bucket_in(key, self.chains.len())]
	}
}

impl Debug for WordIndex {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		formatter
			.debug_struct("WordIndex")
			.field("buckets", &self.chains.len())
			.field("len", &self.len)
			.finish_non_exhaustive()
	}
}

impl Display for Stats {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(
			formatter,
			"{} words in {} buckets ({} occupied), load factor {:.3}, longest chain {}",
			self.entries,
			self.buckets,
			self.occupied,
			self.load_factor(),
			self.longest_chain,
		)
	}
}

#[test]
fn test_strip_line_ending() {
	assert_eq!(strip_line_ending(b"word\n"), b"word");
	assert_eq!(strip_line_ending(b"word\r\n"), b"word");
	assert_eq!(strip_line_ending(b"word"), b"word");
	assert_eq!(strip_line_ending(b"\n"), b"");
}
