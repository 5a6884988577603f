// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

//! Letter codes for the dictionary alphabet.
//!
//! The dictionary encodes the 32 lowercase Russian letters `а`..`я` as codes
//! `0..=31`, in alphabet order. Two further codes are reserved for joiner
//! pseudo-letters that spell compound and possessive forms without consuming
//! an input letter:
//!
//! - `32`: hyphen (`из-за`)
//! - `33`: apostrophe (`д'Артаньян`)
//!
//! `ё` is not part of the encoded alphabet; it folds to `е` before any code
//! lookup.

/// Number of letters in the encoded alphabet.
pub const ALPHABET_LEN: u8 = 32;

/// First letter of the alphabet; letter code 0.
pub const FIRST_LETTER: char = 'а';

/// Reserved code for the hyphen joiner.
pub const DASH_CODE: u8 = 32;

/// Reserved code for the apostrophe joiner.
pub const APOSTROPHE_CODE: u8 = 33;

/// Mask selecting the letter-code bits of a record's flags byte.
pub const LETTER_MASK: u8 = 0x3f;

/// Fold the one diacritic variant (`ё`) to its base letter (`е`).
pub fn fold(c: char) -> char {
    if c == 'ё' {
        'е'
    } else {
        c
    }
}

/// Code for an alphabet letter, after folding. `None` for anything outside
/// `а`..=`я` (spaces, digits, punctuation, foreign letters).
pub fn letter_code(c: char) -> Option<u8> {
    match fold(c) {
        c @ 'а'..='я' => Some((c as u32 - FIRST_LETTER as u32) as u8),
        _ => None,
    }
}

/// Code for any encodable symbol: alphabet letters plus the two joiners.
/// Used when encoding dictionary words, which may contain `-` and `'`.
pub fn symbol_code(c: char) -> Option<u8> {
    match c {
        '-' => Some(DASH_CODE),
        '\'' => Some(APOSTROPHE_CODE),
        _ => letter_code(c),
    }
}

/// True for the two joiner codes.
pub fn is_joiner(code: u8) -> bool {
    code == DASH_CODE || code == APOSTROPHE_CODE
}

/// The character a code renders as.
///
/// # Panics
///
/// Panics on codes above [`APOSTROPHE_CODE`]; the dictionary format has no
/// such codes.
pub fn char_for_code(code: u8) -> char {
    match code {
        DASH_CODE => '-',
        APOSTROPHE_CODE => '\'',
        c if c < ALPHABET_LEN => {
            char::from_u32(FIRST_LETTER as u32 + c as u32).expect("letter codes stay in the Cyrillic block")
        }
        _ => panic!("invalid symbol code {code}"),
    }
}
