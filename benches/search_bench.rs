// Copyright (C) 2026 anagram-search contributors. See LICENSE for details.

use anagram_search::dict::encoder::encode_words;
use anagram_search::dict::NodeStore;
use anagram_search::search::collect_anagrams;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn fixture() -> NodeStore {
    let words = [
        "ад", "да", "кот", "ток", "кто", "так", "мат", "там", "том", "мот", "ком", "мак", "рот",
        "тор", "орт", "рок", "кора", "рота", "тара", "карта", "катар", "из-за",
    ];
    NodeStore::from_bytes(encode_words(words).unwrap()).unwrap()
}

fn bench_search(c: &mut Criterion) {
    let store = fixture();

    c.bench_function("single_word", |b| {
        b.iter(|| collect_anagrams(&store, black_box("ток"), 1))
    });

    c.bench_function("three_word_phrases", |b| {
        b.iter(|| collect_anagrams(&store, black_box("токмотад"), 3))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
