// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

//! Serialize a word list into the packed record layout.
//!
//! Words are converted to letter-code strings, sorted, inserted into a trie,
//! and the trie is flattened breadth-first: each sibling list becomes one
//! contiguous run of records, starting with the root list at record 0. A
//! node's child pointer is the record index of the first record of its
//! child list, or 0 when it has none.
//!
//! Shared-suffix minimization is the word-list producer's concern; the
//! encoder emits an unminimized graph in the identical layout, which the
//! traversal code cannot tell apart from a minimized one.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io;
use thiserror::Error;

use super::{END_OF_LIST_BIT, RECORD_SIZE, WORD_END_BIT};
use crate::alphabet::symbol_code;

/// Largest record index a 24-bit child pointer can address.
const MAX_RECORDS: usize = 0xff_ffff;

/// Errors encoding a word list.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("unsupported character {ch:?} in word {word:?}")]
    UnsupportedChar { word: String, ch: char },
    #[error("word list needs {0} records, more than a 24-bit pointer can address")]
    TooManyRecords(usize),
}

struct TrieNode {
    code: u8,
    word_end: bool,
    children: Vec<usize>,
}

/// Encode a word list into a packed record array.
///
/// Empty entries are skipped; duplicates collapse. The output is ready for
/// [`super::NodeStore::from_bytes`] (an empty word list produces an empty
/// array, which the store rejects).
pub fn encode_words<I, S>(words: I) -> Result<Vec<u8>, EncodeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut converted: Vec<Vec<u8>> = Vec::new();
    for word in words {
        let word = word.as_ref();
        if word.is_empty() {
            continue;
        }
        let mut codes = Vec::new();
        for ch in word.chars() {
            match symbol_code(ch) {
                Some(code) => codes.push(code),
                None => {
                    return Err(EncodeError::UnsupportedChar {
                        word: word.to_string(),
                        ch,
                    })
                }
            }
        }
        converted.push(codes);
    }
    converted.sort();
    converted.dedup();

    let mut nodes: Vec<TrieNode> = Vec::new();
    let mut root_children: Vec<usize> = Vec::new();

    // Sorted insertion order keeps every sibling list sorted by code.
    for word in &converted {
        let mut current: Option<usize> = None;
        for &code in word {
            let siblings = match current {
                None => &root_children,
                Some(n) => &nodes[n].children,
            };
            let found = siblings.iter().copied().find(|&c| nodes[c].code == code);
            let child = match found {
                Some(c) => c,
                None => {
                    let id = nodes.len();
                    nodes.push(TrieNode {
                        code,
                        word_end: false,
                        children: Vec::new(),
                    });
                    match current {
                        None => root_children.push(id),
                        Some(n) => nodes[n].children.push(id),
                    }
                    id
                }
            };
            current = Some(child);
        }
        if let Some(n) = current {
            nodes[n].word_end = true;
        }
    }

    // Assign each sibling list its starting record index, breadth-first,
    // with the root list pinned at record 0.
    let mut child_start: Vec<u32> = vec![0; nodes.len()];
    let mut lists: Vec<Vec<usize>> = vec![root_children];
    let mut next_start = lists[0].len();
    let mut i = 0;
    while i < lists.len() {
        for pos in 0..lists[i].len() {
            let n = lists[i][pos];
            if nodes[n].children.is_empty() {
                continue;
            }
            child_start[n] = next_start as u32;
            next_start += nodes[n].children.len();
            let children = nodes[n].children.clone();
            lists.push(children);
        }
        i += 1;
    }
    if next_start > MAX_RECORDS {
        return Err(EncodeError::TooManyRecords(next_start));
    }

    let mut out = Vec::with_capacity(next_start * RECORD_SIZE);
    for list in &lists {
        for (pos, &n) in list.iter().enumerate() {
            out.write_u24::<LittleEndian>(child_start[n])?;
            let mut flags = nodes[n].code;
            if pos + 1 == list.len() {
                flags |= END_OF_LIST_BIT;
            }
            if nodes[n].word_end {
                flags |= WORD_END_BIT;
            }
            out.write_u8(flags)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::{NextNode, NodeStore};

    #[test]
    fn single_word_becomes_a_chain() {
        let store = NodeStore::from_bytes(encode_words(["да"]).unwrap()).unwrap();
        assert_eq!(store.record_count(), 2);

        // 'д' at the root, child list holding 'а'
        assert_eq!(store.letter(0), 4);
        assert!(store.is_end_of_list(0));
        assert!(!store.is_word_end(0));
        assert_eq!(store.child(0), NextNode::Descend(1));

        assert_eq!(store.letter(1), 0);
        assert!(store.is_end_of_list(1));
        assert!(store.is_word_end(1));
        assert_eq!(store.child(1), NextNode::Restart);
    }

    #[test]
    fn shared_prefixes_share_records() {
        // кот / ток: root list {к, т}, then one list per remaining letter
        let store = NodeStore::from_bytes(encode_words(["кот", "ток"]).unwrap()).unwrap();
        assert_eq!(store.record_count(), 6);
        assert!(!store.is_end_of_list(0));
        assert!(store.is_end_of_list(1));

        // кот / ко: prefix word marks an interior record
        let store = NodeStore::from_bytes(encode_words(["кот", "ко"]).unwrap()).unwrap();
        assert_eq!(store.record_count(), 3);
        assert!(store.is_word_end(1));
        assert!(store.is_word_end(2));
    }

    #[test]
    fn sibling_lists_are_sorted_regardless_of_input_order() {
        let a = encode_words(["ток", "кот"]).unwrap();
        let b = encode_words(["кот", "ток"]).unwrap();
        assert_eq!(a, b);
        let store = NodeStore::from_bytes(a).unwrap();
        assert!(store.letter(0) < store.letter(1));
    }

    #[test]
    fn joiners_are_plain_records() {
        let store = NodeStore::from_bytes(encode_words(["из-за"]).unwrap()).unwrap();
        let dash = (0..store.record_count())
            .find(|&i| store.letter(i) == crate::alphabet::DASH_CODE)
            .unwrap();
        assert!(!store.is_word_end(dash));
        assert!(matches!(store.child(dash), NextNode::Descend(_)));
    }

    #[test]
    fn empty_and_duplicate_words_collapse() {
        let a = encode_words(["да", "", "да"]).unwrap();
        let b = encode_words(["да"]).unwrap();
        assert_eq!(a, b);
        assert!(encode_words(Vec::<String>::new()).unwrap().is_empty());
    }

    #[test]
    fn rejects_unsupported_characters() {
        let err = encode_words(["тест!"]).unwrap_err();
        assert!(matches!(err, EncodeError::UnsupportedChar { ch: '!', .. }));
    }
}
