use std::path::PathBuf;

use argh::FromArgs;
use speller::DEFAULT_CAPACITY;

/// Look words up in a word list, ignoring case.
#[derive(FromArgs, Debug)]
pub struct Args {
	/// path to the word list, one word per line
	#[argh(option, short = 'D', default = r#""words.txt".into()"#)]
	pub dictionary: PathBuf,
	/// number of hash buckets
	#[argh(option, short = 'c', default = "DEFAULT_CAPACITY")]
	pub capacity: usize,
	/// print table statistics after loading
	#[argh(switch, short = 's')]
	pub stats: bool,
	/// words to look up; read from stdin, one per line, if none are given
	#[argh(positional)]
	pub words: Vec<String>,
}

pub fn load() -> Args {
	argh::from_env()
}
