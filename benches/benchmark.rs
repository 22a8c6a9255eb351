use std::hash::BuildHasher;
use std::hash::Hasher;

use ahash::RandomState;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use digest_rs::{
    MinimizedHash, Minimizer, ModMinBuilder, SeqHasher, SyncmerBuilder, SyncmerPolicy,
    WindowMinBuilder,
};
use xxhash_rust::xxh3::xxh3_64;

/// Generate a pseudo-random DNA sequence of length `len` by repeating
/// "ACGT" and inserting occasional "N"s.
fn generate_dna(len: usize) -> Vec<u8> {
    const PATTERN: &[u8] = b"ACGTN";
    (0..len)
        .map(|i| PATTERN[(i * 7 + i / 5) % PATTERN.len()])
        .collect()
}

const SEQ_LEN: usize = 100_000;

fn bench_construction(c: &mut Criterion) {
    let seq = generate_dna(SEQ_LEN);
    let mut group = c.benchmark_group("construction");

    group.bench_function("ModMin", |b| {
        b.iter(|| ModMinBuilder::new(&seq).k(16).modulus(17).finish().unwrap())
    });
    group.bench_function("WindowMin", |b| {
        b.iter(|| WindowMinBuilder::new(&seq).k(16).window(16).finish().unwrap())
    });
    group.bench_function("Syncmer", |b| {
        b.iter(|| SyncmerBuilder::new(&seq).k(16).small_k(8).finish().unwrap())
    });

    group.finish();
}

fn bench_mod_min_roll(c: &mut Criterion) {
    let seq = generate_dna(SEQ_LEN);
    let mut group = c.benchmark_group("roll_minimizers");
    group.throughput(Throughput::Bytes(seq.len() as u64));

    for k in [4u16, 15, 31] {
        group.bench_with_input(BenchmarkId::new("ModMin", k), &k, |b, &k| {
            b.iter(|| {
                let mut d = ModMinBuilder::new(&seq).k(k).modulus(17).finish().unwrap();
                d.roll_next_n_minimizers(SEQ_LEN)
            })
        });
    }

    group.finish();
}

fn bench_window_min_roll(c: &mut Criterion) {
    let seq = generate_dna(SEQ_LEN);
    let mut group = c.benchmark_group("roll_minimizers");
    group.throughput(Throughput::Bytes(seq.len() as u64));

    for (k, w) in [(4u16, 11usize), (15, 10), (31, 15)] {
        let id = format!("k{}_w{}", k, w);
        group.bench_with_input(BenchmarkId::new("WindowMin", id), &(k, w), |b, &(k, w)| {
            b.iter(|| {
                let mut d = WindowMinBuilder::new(&seq).k(k).window(w).finish().unwrap();
                d.roll_next_n_minimizers(SEQ_LEN)
            })
        });
    }

    group.finish();
}

fn bench_syncmer_roll(c: &mut Criterion) {
    let seq = generate_dna(SEQ_LEN);
    let mut group = c.benchmark_group("roll_minimizers");
    group.throughput(Throughput::Bytes(seq.len() as u64));

    for (k, s) in [(16u16, 8u16), (15, 11), (31, 16)] {
        let id = format!("k{}_s{}", k, s);
        group.bench_with_input(BenchmarkId::new("Syncmer", id), &(k, s), |b, &(k, s)| {
            b.iter(|| {
                let mut d = SyncmerBuilder::new(&seq)
                    .k(k)
                    .small_k(s)
                    .policy(SyncmerPolicy::Either)
                    .finish()
                    .unwrap();
                d.roll_next_n_minimizers(SEQ_LEN)
            })
        });
    }

    group.finish();
}

fn bench_rolling_vs_rehash(c: &mut Criterion) {
    let seq = generate_dna(SEQ_LEN);
    let k: usize = 31;

    let mut group = c.benchmark_group("rolling_vs_rehash");
    group.throughput(Throughput::Bytes(seq.len() as u64));

    group.bench_with_input(BenchmarkId::new("SeqHasher", seq.len()), &seq, |b, seq| {
        b.iter(|| {
            let mut h = SeqHasher::new(seq, k as u16, 0, MinimizedHash::Canonical).unwrap();
            let mut acc = 0u64;
            while !h.at_end() {
                if h.roll_one().unwrap() {
                    acc ^= h.canonical_hash();
                }
            }
            acc
        })
    });

    group.bench_with_input(BenchmarkId::new("xxh3_64", seq.len()), &seq, |b, seq| {
        b.iter(|| {
            let mut acc = 0u64;
            for i in 0..=seq.len().saturating_sub(k) {
                acc ^= xxh3_64(&seq[i..i + k]);
            }
            acc
        })
    });

    group.bench_with_input(BenchmarkId::new("ahash", seq.len()), &seq, |b, seq| {
        let state = RandomState::new();
        b.iter(|| {
            let mut acc = 0u64;
            for i in 0..=seq.len().saturating_sub(k) {
                let mut hasher = state.build_hasher();
                hasher.write(&seq[i..i + k]);
                acc ^= hasher.finish();
            }
            acc
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_mod_min_roll,
    bench_window_min_roll,
    bench_syncmer_roll,
    bench_rolling_vs_rehash
);
criterion_main!(benches);
