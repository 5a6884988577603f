// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

//! Single- and multi-word anagram enumeration over a packed DAWG dictionary.
//!
//! Given a phrase and a word limit, the crate prints every rearrangement of
//! the phrase's letters that spells one or more dictionary words, except
//! the phrase itself.
//!
//! # Architecture
//!
//! The pipeline has four stages, each a module:
//!
//! 1. [`dict`], the **node store**: an immutable, packed array of 4-byte
//!    trie records (letter code, end-of-list, word-end, 24-bit child
//!    pointer), loaded once per process. [`dict::encoder`] serializes word
//!    lists into the same layout.
//! 2. [`phrase`], the **normalizer**: trims and lowercases the input into
//!    a canonical comparison string and counts its supported letters into a
//!    multiset, sorted by letter code for reproducible branch order.
//! 3. [`search`], the **enumerator**: recursive backtracking over the node
//!    store against the multiset; every count and flag is restored as
//!    frames return.
//! 4. [`sequence`], the **candidate buffer and formatter**: letter slots
//!    annotated with word-boundary and joiner flags, rendered to text once
//!    full.
//!
//! [`alphabet`] underpins all four with the 32-letter code mapping and the
//! two joiner codes.
//!
//! # Example
//!
//! ```
//! use anagram_search::dict::{encoder::encode_words, NodeStore};
//! use anagram_search::search::collect_anagrams;
//!
//! let bytes = encode_words(["кот", "ток"]).unwrap();
//! let store = NodeStore::from_bytes(bytes).unwrap();
//! assert_eq!(collect_anagrams(&store, "кот", 1), vec!["ток"]);
//! ```

pub mod alphabet;
pub mod dict;
pub mod phrase;
pub mod search;
pub mod sequence;

// Re-export commonly used types
pub use dict::{DictionaryError, NodeStore};
pub use phrase::Phrase;
pub use search::{collect_anagrams, AnagramSearch};
