use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::hash::MAX_CAPACITY;
use crate::word::MAX_WORD_LEN;

#[derive(Debug, Error)]
pub enum LoadError {
	#[error("opening word list {path:?}")]
	SourceUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("reading line {line} of the word list")]
	Read {
		line: usize,
		#[source]
		source: io::Error,
	},
	#[error("storing the word on line {line}")]
	Insert {
		line: usize,
		#[source]
		source: InsertError,
	},
	#[error(transparent)]
	Capacity(#[from] CapacityError),
	#[error("a word list is already loaded; unload it first")]
	AlreadyLoaded,
}

#[derive(Debug, Error)]
pub enum InsertError {
	#[error("word is {len} bytes long; the limit is {max}", max = MAX_WORD_LEN)]
	OversizeWord { len: usize },
	#[error("out of memory")]
	ResourceExhausted(#[from] TryReserveError),
}

#[derive(Debug, Error)]
pub enum CapacityError {
	#[error("bucket count must be between 1 and {max}, got {0}", max = MAX_CAPACITY)]
	OutOfRange(usize),
	#[error("out of memory allocating {buckets} buckets")]
	ResourceExhausted {
		buckets: usize,
		#[source]
		source: TryReserveError,
	},
}
