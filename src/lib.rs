#![deny(
	absolute_paths_not_starting_with_crate,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms,
	unused_qualifications
)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![forbid(unsafe_code)]

//! Case-insensitive word lookup over a bulk-loaded word list.
//!
//! The table is a fixed number of buckets chained separately. It is filled once
//! through [`Builder`], frozen into a [`WordIndex`], and read from then on.
//! [`Dictionary`] wraps that in a load/unload lifecycle.

pub use self::dictionary::Dictionary;
pub use self::error::{CapacityError, InsertError, LoadError};
pub use self::hash::{bucket_of, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use self::index::{Builder, Stats, WordIndex};
pub use self::word::{normalize_into, Word, MAX_WORD_LEN};

mod dictionary;
mod error;
mod hash;
mod index;
mod word;
