// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

//! Input normalization: canonical comparison string plus letter multiset.
//!
//! A raw phrase normalizes to two things:
//!
//! - the **canonical** string: trimmed and lowercased, with punctuation and
//!   inner spacing kept verbatim. Emitted candidates are compared against it
//!   literally, so an input that already spells a dictionary phrase
//!   (punctuation included) suppresses exactly that one candidate;
//! - the **letter multiset**: a count per alphabet letter, after folding
//!   `ё`→`е` and skipping every character without a letter code. Its total
//!   fixes the length of every candidate the search can produce.
//!
//! Distinct letters are kept sorted by code, so branch order (and with it
//! the order results are printed in) is the same on every run.

use crate::alphabet::{letter_code, ALPHABET_LEN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LetterCount {
    code: u8,
    count: u32,
}

/// Counts of the letters still available to place during search.
///
/// Mutated by [`take`](Self::take) / [`restore`](Self::restore) as the
/// search descends and backtracks; every completed search leaves the counts
/// exactly as they started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterMultiset {
    entries: Vec<LetterCount>,
}

impl LetterMultiset {
    /// Count the supported letters of an already-normalized string.
    fn from_canonical(canonical: &str) -> Self {
        let mut counts = [0u32; ALPHABET_LEN as usize];
        for ch in canonical.chars() {
            if let Some(code) = letter_code(ch) {
                counts[code as usize] += 1;
            }
        }
        let entries = counts
            .iter()
            .enumerate()
            .filter(|(_, &count)| count > 0)
            .map(|(code, &count)| LetterCount {
                code: code as u8,
                count,
            })
            .collect();
        Self { entries }
    }

    /// Total letters across all entries; the candidate length `n`.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count as usize).sum()
    }

    /// Number of distinct letters.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Letter code of entry `i` (entries are sorted by code).
    pub fn code(&self, i: usize) -> u8 {
        self.entries[i].code
    }

    /// Remaining count of entry `i`.
    pub fn count(&self, i: usize) -> u32 {
        self.entries[i].count
    }

    /// Entry index for a letter code, if the letter is present at all.
    pub fn index_of(&self, code: u8) -> Option<usize> {
        self.entries.binary_search_by_key(&code, |e| e.code).ok()
    }

    /// Consume one use of entry `i`.
    pub fn take(&mut self, i: usize) {
        debug_assert!(self.entries[i].count > 0);
        self.entries[i].count -= 1;
    }

    /// Give back one use of entry `i` when backtracking.
    pub fn restore(&mut self, i: usize) {
        self.entries[i].count += 1;
    }

    /// Snapshot of `(code, count)` pairs, sorted by code.
    pub fn counts(&self) -> Vec<(u8, u32)> {
        self.entries.iter().map(|e| (e.code, e.count)).collect()
    }
}

/// A normalized input phrase.
#[derive(Debug, Clone)]
pub struct Phrase {
    canonical: String,
    letters: LetterMultiset,
}

impl Phrase {
    /// Normalize a raw phrase: trim, lowercase, count supported letters.
    pub fn normalize(raw: &str) -> Self {
        let canonical = raw.trim().to_lowercase();
        let letters = LetterMultiset::from_canonical(&canonical);
        Self { canonical, letters }
    }

    /// The trimmed, lowercased comparison string.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn letters(&self) -> &LetterMultiset {
        &self.letters
    }

    pub(crate) fn into_parts(self) -> (String, LetterMultiset) {
        (self.canonical, self.letters)
    }
}
