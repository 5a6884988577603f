// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

//! `mkdict [words.txt [dawg.bin]]`
//!
//! Builds the binary dictionary resource from a plain-text word list (one
//! lowercase word per line, letters `а`..`я` plus `-` and `'`).

use std::env;
use std::fs;
use std::process::ExitCode;

use anagram_search::dict::encoder::encode_words;
use anagram_search::dict::RECORD_SIZE;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "words.txt".to_string());
    let output = args.next().unwrap_or_else(|| "dawg.bin".to_string());

    let text = match fs::read_to_string(&input) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("mkdict: {input}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let records = match encode_words(text.lines().map(str::trim)) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("mkdict: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = fs::write(&output, &records) {
        eprintln!("mkdict: {output}: {err}");
        return ExitCode::FAILURE;
    }
    eprintln!(
        "mkdict: wrote {} records ({} bytes) to {output}",
        records.len() / RECORD_SIZE,
        records.len()
    );
    ExitCode::SUCCESS
}
