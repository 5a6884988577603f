// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

//! Read-only view over the packed dictionary node array.
//!
//! The dictionary is a DAWG flattened into a flat array of 4-byte records,
//! record `i` occupying bytes `[4i, 4i + 4)`:
//!
//! ```text
//! [child pointer: u24 LE][flags: u8]
//! ```
//!
//! The flags byte packs three fields:
//!
//! - bit 7, end-of-list: this record is the last sibling in its list
//! - bit 6, word-end: the path reaching this record spells a complete word
//! - bits 0-5, letter code (see [`crate::alphabet`])
//!
//! Sibling lists are contiguous runs of records; traversal walks forward
//! until it passes the record carrying the end-of-list flag. The child
//! pointer is a record index (not a byte offset); record 0 is the start of
//! the root sibling list, so a stored pointer of 0 can never address a real
//! child list and instead means "no children; the next word starts back at
//! the root". [`NextNode`] names that case explicitly.
//!
//! The store is immutable: it is loaded once at startup and shared by
//! reference for the process lifetime. The resource is trusted input:
//! out-of-range record indices are an internal-consistency violation and
//! panic rather than returning an error.

pub mod encoder;

use byteorder::{ByteOrder, LittleEndian};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::alphabet::LETTER_MASK;

/// Size of one node record in bytes.
pub const RECORD_SIZE: usize = 4;

/// Record index of the root sibling list.
pub const ROOT: usize = 0;

const END_OF_LIST_BIT: u8 = 0x80;
const WORD_END_BIT: u8 = 0x40;

/// Errors constructing a [`NodeStore`].
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("dictionary is empty")]
    Empty,
    #[error("dictionary length {0} is not a multiple of the record size")]
    Misaligned(usize),
}

/// Where a record's child pointer leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextNode {
    /// Continue into the sibling list starting at this record index.
    Descend(usize),

    /// No child list; a continuation can only start a new word at [`ROOT`].
    Restart,
}

/// Immutable packed node array.
#[derive(Debug, Clone)]
pub struct NodeStore {
    data: Vec<u8>,
}

impl NodeStore {
    /// Wrap a packed record array.
    ///
    /// Only the shape is validated (non-empty, whole records); record
    /// contents are trusted.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, DictionaryError> {
        if data.is_empty() {
            return Err(DictionaryError::Empty);
        }
        if data.len() % RECORD_SIZE != 0 {
            return Err(DictionaryError::Misaligned(data.len()));
        }
        Ok(Self { data })
    }

    /// Read the dictionary resource from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Number of records in the store.
    pub fn record_count(&self) -> usize {
        self.data.len() / RECORD_SIZE
    }

    fn flags(&self, index: usize) -> u8 {
        self.data[index * RECORD_SIZE + 3]
    }

    /// Letter code of the record (low six bits of the flags byte).
    pub fn letter(&self, index: usize) -> u8 {
        self.flags(index) & LETTER_MASK
    }

    /// True if this record is the last sibling in its list.
    pub fn is_end_of_list(&self, index: usize) -> bool {
        self.flags(index) & END_OF_LIST_BIT != 0
    }

    /// True if the path reaching this record spells a complete word.
    pub fn is_word_end(&self, index: usize) -> bool {
        self.flags(index) & WORD_END_BIT != 0
    }

    /// The record's child pointer, with the zero sentinel made explicit.
    pub fn child(&self, index: usize) -> NextNode {
        let offset = index * RECORD_SIZE;
        let pointer = LittleEndian::read_u24(&self.data[offset..offset + 3]) as usize;
        if pointer == 0 {
            NextNode::Restart
        } else {
            NextNode::Descend(pointer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-built record: `ptr` in record units, plus flag bits and a code.
    fn record(ptr: u32, end_of_list: bool, word_end: bool, code: u8) -> [u8; 4] {
        let mut flags = code;
        if end_of_list {
            flags |= END_OF_LIST_BIT;
        }
        if word_end {
            flags |= WORD_END_BIT;
        }
        [
            (ptr & 0xff) as u8,
            ((ptr >> 8) & 0xff) as u8,
            ((ptr >> 16) & 0xff) as u8,
            flags,
        ]
    }

    #[test]
    fn rejects_empty_and_misaligned_data() {
        assert!(matches!(
            NodeStore::from_bytes(Vec::new()),
            Err(DictionaryError::Empty)
        ));
        assert!(matches!(
            NodeStore::from_bytes(vec![0; 7]),
            Err(DictionaryError::Misaligned(7))
        ));
    }

    #[test]
    fn decodes_record_fields() {
        let mut data = Vec::new();
        data.extend_from_slice(&record(2, false, false, 10));
        data.extend_from_slice(&record(0, true, true, 31));
        data.extend_from_slice(&record(0x01_02_03, true, false, 33));
        let store = NodeStore::from_bytes(data).unwrap();

        assert_eq!(store.record_count(), 3);

        assert_eq!(store.letter(0), 10);
        assert!(!store.is_end_of_list(0));
        assert!(!store.is_word_end(0));
        assert_eq!(store.child(0), NextNode::Descend(2));

        assert_eq!(store.letter(1), 31);
        assert!(store.is_end_of_list(1));
        assert!(store.is_word_end(1));
        assert_eq!(store.child(1), NextNode::Restart);

        // 24-bit little-endian pointer, independent of the flags byte
        assert_eq!(store.letter(2), 33);
        assert_eq!(store.child(2), NextNode::Descend(0x01_02_03));
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let store = NodeStore::from_bytes(record(0, true, false, 0).to_vec()).unwrap();
        store.letter(1);
    }
}
