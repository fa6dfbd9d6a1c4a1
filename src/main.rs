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
#![forbid(unsafe_code)]

use anyhow::Context as _;
use speller::Dictionary;

mod args;

fn report(dict: &Dictionary, word: &str) {
	let verdict = if dict.check(word) { "ok" } else { "misspelled" };
	println!("{word}: {verdict}");
}

fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	let args = args::load();

	let mut dict = Dictionary::with_capacity(args.capacity);
	dict
		.load(&args.dictionary)
		.with_context(|| format!("loading dictionary from {:?}", args.dictionary))?;

	if args.stats {
		if let Some(index) = dict.index() {
			eprintln!("{}", index.stats());
		}
	}

	if args.words.is_empty() {
		eprint!("> ");
		for word in std::io::stdin().lines() {
			let word = word.context("reading from stdin")?;
			let word = word.trim();
			if !word.is_empty() {
				report(&dict, word);
			}
			eprint!("> ");
		}
		eprintln!();
	} else {
		for word in &args.words {
			report(&dict, word);
		}
	}

	dict.unload();
	Ok(())
}
