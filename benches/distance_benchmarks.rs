//! Benchmarks for string and phone sequence distances.
//!
//! Tests various scenarios:
//! - String length variations (short, medium, long)
//! - Similarity patterns (identical, similar, different)
//! - Character sets (ASCII, Unicode) and unit choice (char, byte)
//! - Unit vs graded phonetic costs
//! - Fresh allocation vs workspace reuse in batch scoring

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use phonetic_distance::prelude::*;

// ============================================================================
// Test Data Generation
// ============================================================================

fn generate_test_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        // (name, source, target)
        ("empty", "", ""),
        ("short_identical", "test", "test"),
        ("short_1edit", "test", "best"),
        ("short_different", "abc", "xyz"),
        ("medium_similar", "programming", "programing"),
        ("medium_prefix", "commonprefix_abc", "commonprefix_xyz"),
        (
            "long_similar",
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumped over the lazy dog",
        ),
        (
            "long_different",
            "Pack my box with five dozen liquor jugs",
            "How vexingly quick daft zebras jump",
        ),
        ("unicode_short", "café", "cafe"),
        ("unicode_mixed", "Hello 世界", "Hello World"),
    ]
}

fn inventory() -> Vec<Phone> {
    let mut phones = Vec::new();
    for &place in Place::ALL {
        phones.push(Phone::consonant(Phonation::Voiceless, place, Manner::Plosive));
        phones.push(Phone::consonant(Phonation::Modal, place, Manner::Fricative));
    }
    for &height in Height::ALL {
        for &backness in Backness::ALL {
            phones.push(Phone::vowel(height, backness, Roundedness::Unrounded, false));
        }
    }
    phones
}

fn phone_sequence(inventory: &[Phone], seed: usize, len: usize) -> Vec<Phone> {
    (0..len)
        .map(|i| inventory[(seed * 31 + i * 17) % inventory.len()])
        .collect()
}

// ============================================================================
// String Distance Benchmarks
// ============================================================================

fn bench_string_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_distance/char");
    let strings = StringDistance::new();

    for (name, source, target) in generate_test_pairs() {
        let size = source.len() + target.len();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, target),
            |b, &(s, t)| {
                b.iter(|| strings.distance(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

fn bench_byte_string_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("string_distance/byte");
    let bytes = ByteStringDistance::with_unit();

    for (name, source, target) in generate_test_pairs() {
        let size = source.len() + target.len();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, target),
            |b, &(s, t)| {
                b.iter(|| bytes.distance(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Phone Sequence Benchmarks
// ============================================================================

fn bench_phone_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("phone_distance");
    let inventory = inventory();
    let unit = PhoneSequenceDistance::new();
    let graded = PhoneSequenceDistance::phonetic();

    for len in [4, 16, 64] {
        let source = phone_sequence(&inventory, 1, len);
        let target = phone_sequence(&inventory, 2, len);
        group.throughput(Throughput::Elements((len * len) as u64));

        group.bench_with_input(BenchmarkId::new("unit", len), &len, |b, _| {
            b.iter(|| unit.distance(black_box(&source), black_box(&target)));
        });
        group.bench_with_input(BenchmarkId::new("phonetic", len), &len, |b, _| {
            b.iter(|| graded.distance(black_box(&source), black_box(&target)));
        });
    }

    group.finish();
}

fn bench_batch_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("phone_distance/batch");
    let inventory = inventory();
    let graded = PhoneSequenceDistance::phonetic();
    let reference = phone_sequence(&inventory, 0, 12);
    let candidates: Vec<Vec<Phone>> = (0..256)
        .map(|seed| phone_sequence(&inventory, seed, 8 + seed % 8))
        .collect();

    group.throughput(Throughput::Elements(candidates.len() as u64));

    group.bench_function("fresh_allocation", |b| {
        b.iter(|| {
            candidates
                .iter()
                .map(|candidate| graded.distance(black_box(&reference), black_box(candidate)))
                .collect::<Vec<_>>()
        });
    });

    group.bench_function("workspace_reuse", |b| {
        b.iter(|| graded.distances(black_box(&reference), black_box(candidates.as_slice())));
    });

    #[cfg(feature = "parallel")]
    group.bench_function("parallel", |b| {
        b.iter(|| graded.par_distances(black_box(&reference), black_box(candidates.as_slice())));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_string_distance,
    bench_byte_string_distance,
    bench_phone_distance,
    bench_batch_scoring,
);
criterion_main!(benches);
