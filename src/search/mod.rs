// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

//! Recursive backtracking enumeration of anagram phrases.
//!
//! The search walks the dictionary's sibling lists while consuming letters
//! from the input multiset. Its state is the pair `(node, level)`: the
//! record whose sibling list is being scanned, and how many slots of the
//! candidate buffer are filled.
//!
//! At each sibling:
//!
//! - a **joiner** record tags the previous slot with its punctuation and
//!   recurses into the joiner's child at the same level; joiners continue
//!   the current word without consuming a letter,
//! - a **letter** record with remaining uses in the multiset is placed in
//!   the buffer, then the search goes two ways: deeper along the same word
//!   when the record has children and slots remain, and, when the record
//!   completes a word, on to the next word, flagged as a boundary and
//!   restarted from the root sibling list.
//!
//! Every decrement, placement, and flag is undone when the branch returns,
//! so the multiset always ends a search exactly as it began. A full buffer
//! is rendered and handed to the sink unless it reads back as the original
//! phrase; candidates are therefore delivered incrementally, in discovery
//! order, without ever being collected.
//!
//! There is no bound on the work a search may do beyond the word-count
//! limit: a permissive dictionary and a long phrase can produce
//! combinatorially many candidates.

use crate::dict::{NextNode, NodeStore, ROOT};
use crate::phrase::{LetterMultiset, Phrase};
use crate::sequence::{AnnotatedSequence, SlotFlag};

/// One anagram enumeration over a node store.
///
/// The store is borrowed for the search's lifetime and never mutated; all
/// mutable state (the multiset, the candidate buffer) is owned here.
pub struct AnagramSearch<'d> {
    store: &'d NodeStore,
    canonical: String,
    letters: LetterMultiset,
    seq: AnnotatedSequence,
    max_words: usize,
    emitted: u64,
}

impl<'d> AnagramSearch<'d> {
    /// Set up a search for every rearrangement of `phrase`'s letters into
    /// at most `max_words` dictionary words.
    pub fn new(store: &'d NodeStore, phrase: Phrase, max_words: usize) -> Self {
        let (canonical, letters) = phrase.into_parts();
        let seq = AnnotatedSequence::new(letters.total());
        Self {
            store,
            canonical,
            letters,
            seq,
            max_words,
            emitted: 0,
        }
    }

    /// The remaining-letter counts (restored after every run).
    pub fn letters(&self) -> &LetterMultiset {
        &self.letters
    }

    /// Run the search, passing each result to `sink` as it is found.
    ///
    /// Returns the number of candidates emitted. An input with no supported
    /// letters emits nothing.
    pub fn run<F>(&mut self, mut sink: F) -> u64
    where
        F: FnMut(&str),
    {
        self.emitted = 0;
        if self.seq.is_empty() {
            return 0;
        }
        self.descend(ROOT, 0, &mut sink);
        self.emitted
    }

    fn descend(&mut self, node: usize, level: usize, sink: &mut dyn FnMut(&str)) {
        if level == self.seq.len() {
            let candidate = self.seq.render();
            if candidate != self.canonical {
                self.emitted += 1;
                sink(&candidate);
            }
            return;
        }
        if self.seq.words_completed(level) >= self.max_words {
            return;
        }

        let mut index = node;
        loop {
            let code = self.store.letter(index);
            if let Some(flag) = SlotFlag::for_joiner(code) {
                // No letter consumed: tag the previous slot and continue the
                // current word inside the joiner's subtree. A joiner in the
                // root list would underflow here; well-formed dictionaries
                // only reach joiners mid-word.
                self.seq.set_flag(level - 1, flag);
                let target = match self.store.child(index) {
                    NextNode::Descend(child) => child,
                    NextNode::Restart => ROOT,
                };
                self.descend(target, level, sink);
                self.seq.clear_flag(level - 1);
            } else if let Some(i) = self.letters.index_of(code) {
                if self.letters.count(i) > 0 {
                    self.letters.take(i);
                    self.seq.place(level, code);
                    if let NextNode::Descend(child) = self.store.child(index) {
                        if level + 1 < self.seq.len() {
                            self.descend(child, level + 1, sink);
                        }
                    }
                    if self.store.is_word_end(index) {
                        self.seq.set_flag(level, SlotFlag::EndOfWord);
                        self.descend(ROOT, level + 1, sink);
                    }
                    self.letters.restore(i);
                }
            }
            if self.store.is_end_of_list(index) {
                break;
            }
            index += 1;
        }
    }
}

/// Convenience wrapper: normalize `raw`, search, and collect the results.
pub fn collect_anagrams(store: &NodeStore, raw: &str, max_words: usize) -> Vec<String> {
    let mut results = Vec::new();
    let mut search = AnagramSearch::new(store, Phrase::normalize(raw), max_words);
    search.run(|candidate| results.push(candidate.to_string()));
    results
}
