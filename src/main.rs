// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

//! `anagrams <phrase> [max-words]`
//!
//! Prints one anagram of the phrase per line, in discovery order; nothing
//! else goes to stdout. The optional word limit defaults to 1, and any
//! unparsable value silently falls back to that default. The dictionary
//! resource is read from the path in `ANAGRAMS_DICT`, or `dawg.bin` in the
//! working directory.

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use anagram_search::{AnagramSearch, NodeStore, Phrase};

fn main() {
    let mut args = env::args().skip(1);
    let Some(raw_phrase) = args.next() else {
        eprintln!("usage: anagrams <phrase> [max-words]");
        process::exit(2);
    };
    let max_words = args
        .next()
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(1);

    let dict_path = env::var_os("ANAGRAMS_DICT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dawg.bin"));
    let store = match NodeStore::load(&dict_path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("anagrams: {}: {}", dict_path.display(), err);
            process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut search = AnagramSearch::new(&store, Phrase::normalize(&raw_phrase), max_words);
    search.run(|candidate| {
        if writeln!(out, "{candidate}").is_err() {
            // Downstream closed the pipe; there is nowhere left to print.
            process::exit(0);
        }
    });
}
