// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

//! The annotated candidate buffer and its textual rendering.
//!
//! A candidate under construction is a fixed-length sequence of slots, one
//! per input letter. Each slot holds the chosen letter code plus at most one
//! [`SlotFlag`] saying how the slot connects to the *next* letter: a word
//! boundary (space), a joiner (hyphen or apostrophe continuing the current
//! word), or nothing. Rendering walks the slots once and inserts each
//! separator before the following letter, so a flag on the final slot never
//! produces trailing output.

use strum_macros::EnumCount as EnumCountMacro;

use crate::alphabet::{char_for_code, APOSTROPHE_CODE, DASH_CODE};

/// How a slot connects to the letter after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumCountMacro)]
pub enum SlotFlag {
    /// The next letter continues the same word.
    #[default]
    None,
    /// The word ends here; a space precedes the next letter.
    EndOfWord,
    /// A hyphen precedes the next letter, inside the same word.
    DashJoin,
    /// An apostrophe precedes the next letter, inside the same word.
    ApostropheJoin,
}

impl SlotFlag {
    /// The flag a joiner code tags the preceding slot with, if `code` is a
    /// joiner at all.
    pub fn for_joiner(code: u8) -> Option<Self> {
        match code {
            DASH_CODE => Some(SlotFlag::DashJoin),
            APOSTROPHE_CODE => Some(SlotFlag::ApostropheJoin),
            _ => None,
        }
    }

    fn separator(self) -> Option<char> {
        match self {
            SlotFlag::None => None,
            SlotFlag::EndOfWord => Some(' '),
            SlotFlag::DashJoin => Some('-'),
            SlotFlag::ApostropheJoin => Some('\''),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    code: u8,
    flag: SlotFlag,
}

/// Fixed-length buffer of annotated letter slots.
#[derive(Debug, Clone)]
pub struct AnnotatedSequence {
    slots: Vec<Slot>,
}

impl AnnotatedSequence {
    /// A buffer of `len` slots, all unset.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![
                Slot {
                    code: 0,
                    flag: SlotFlag::None,
                };
                len
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Store a letter at `level`, clearing any stale flag.
    pub fn place(&mut self, level: usize, code: u8) {
        self.slots[level] = Slot {
            code,
            flag: SlotFlag::None,
        };
    }

    pub fn set_flag(&mut self, level: usize, flag: SlotFlag) {
        self.slots[level].flag = flag;
    }

    pub fn clear_flag(&mut self, level: usize) {
        self.slots[level].flag = SlotFlag::None;
    }

    /// Number of completed words in the filled prefix `[0, level)`.
    pub fn words_completed(&self, level: usize) -> usize {
        self.slots[..level]
            .iter()
            .filter(|s| s.flag == SlotFlag::EndOfWord)
            .count()
    }

    /// Render the full buffer as text.
    ///
    /// Pure with respect to the slots: each letter is emitted in order, with
    /// its predecessor's separator (if any) in front of it.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.slots.len() * 2 + 1);
        let mut separator = None;
        for slot in &self.slots {
            if let Some(sep) = separator {
                out.push(sep);
            }
            out.push(char_for_code(slot.code));
            separator = slot.flag.separator();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::letter_code;
    use strum::EnumCount;

    fn seq(letters: &str, flags: &[(usize, SlotFlag)]) -> AnnotatedSequence {
        let codes: Vec<u8> = letters.chars().map(|c| letter_code(c).unwrap()).collect();
        let mut seq = AnnotatedSequence::new(codes.len());
        for (i, code) in codes.into_iter().enumerate() {
            seq.place(i, code);
        }
        for &(i, flag) in flags {
            seq.set_flag(i, flag);
        }
        seq
    }

    #[test]
    fn renders_plain_letters() {
        assert_eq!(seq("ток", &[]).render(), "ток");
    }

    #[test]
    fn end_of_word_becomes_a_space_before_the_next_letter() {
        assert_eq!(seq("адад", &[(1, SlotFlag::EndOfWord)]).render(), "ад ад");
    }

    #[test]
    fn joiners_render_as_punctuation() {
        assert_eq!(seq("изза", &[(1, SlotFlag::DashJoin)]).render(), "из-за");
        assert_eq!(
            seq("дарк", &[(0, SlotFlag::ApostropheJoin)]).render(),
            "д'арк"
        );
    }

    #[test]
    fn final_slot_flag_produces_no_trailing_separator() {
        assert_eq!(seq("ток", &[(2, SlotFlag::EndOfWord)]).render(), "ток");
    }

    #[test]
    fn words_completed_counts_only_the_prefix() {
        let s = seq("адад", &[(1, SlotFlag::EndOfWord), (3, SlotFlag::EndOfWord)]);
        assert_eq!(s.words_completed(0), 0);
        assert_eq!(s.words_completed(2), 1);
        assert_eq!(s.words_completed(4), 2);
    }

    #[test]
    fn place_clears_a_stale_flag() {
        let mut s = seq("ад", &[(0, SlotFlag::EndOfWord)]);
        s.place(0, 0);
        assert_eq!(s.words_completed(2), 0);
    }

    #[test]
    fn joiner_codes_map_to_their_flags() {
        assert_eq!(SlotFlag::for_joiner(DASH_CODE), Some(SlotFlag::DashJoin));
        assert_eq!(
            SlotFlag::for_joiner(APOSTROPHE_CODE),
            Some(SlotFlag::ApostropheJoin)
        );
        assert_eq!(SlotFlag::for_joiner(0), None);
        assert_eq!(SlotFlag::COUNT, 4);
    }
}
