use std::io::BufRead;
use std::path::Path;

use log::debug;

use crate::error::LoadError;
use crate::hash::DEFAULT_CAPACITY;
use crate::index::{Builder, WordIndex};

#[cfg(test)]
mod test;

/// A word list that is loaded once, queried, and unloaded.
///
/// Before the first load and after an unload it behaves as an empty table.
/// Loading is all-or-nothing: if it fails, the dictionary stays unloaded.
#[derive(Debug)]
pub struct Dictionary {
	capacity: usize,
	index: Option<WordIndex>,
}

impl Default for Dictionary {
	fn default() -> Self {
		Self::new()
	}
}

impl Dictionary {
	pub fn new() -> Self {
		Self::with_capacity(DEFAULT_CAPACITY)
	}

	/// Loads will use `capacity` buckets. It is validated on load.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			capacity,
			index: None,
		}
	}

	/// Loads the word list at `path`, one word per line.
	///
	/// Fails with [`LoadError::AlreadyLoaded`] if a word list is loaded already.
	pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), LoadError> {
		self.ensure_unloaded()?;
		let index = Builder::with_capacity(self.capacity)?.load(path.as_ref())?;
		self.index = Some(index);
		Ok(())
	}

	/// Like [`load`](Self::load), reading lines from `reader`.
	pub fn load_from<R: BufRead>(&mut self, reader: R) -> Result<(), LoadError> {
		self.ensure_unloaded()?;
		let index = Builder::with_capacity(self.capacity)?.read_from(reader)?;
		self.index = Some(index);
		Ok(())
	}

	/// Whether `word` is in the loaded word list, ignoring ASCII case.
	pub fn check(&self, word: impl AsRef<[u8]>) -> bool {
		self.index.as_ref().is_some_and(|index| index.check(word))
	}

	/// Number of loaded words, duplicates included. Zero when unloaded.
	pub fn size(&self) -> usize {
		self.index.as_ref().map_or(0, WordIndex::len)
	}

	/// Drops the loaded word list, if any. Always succeeds.
	pub fn unload(&mut self) -> bool {
		if let Some(index) = self.index.take() {
			debug!("unloading {} words", index.len());
		}
		true
	}

	pub fn is_loaded(&self) -> bool {
		self.index.is_some()
	}

	pub fn index(&self) -> Option<&WordIndex> {
		self.index.as_ref()
	}

	fn ensure_unloaded(&self) -> Result<(), LoadError> {
		if self.is_loaded() {
			return Err(LoadError::AlreadyLoaded);
		}
		Ok(())
	}
}
