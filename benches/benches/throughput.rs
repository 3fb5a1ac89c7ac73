//! Octolane Batch Throughput Benchmark
//!
//! Measures the octa-lane engine against serial per-message baselines from
//! the RustCrypto `sha2` and `blake2` crates.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const RECORD: usize = 64;
const DIGEST: usize = 32;

// =============================================================================
// BENCHMARK 1: SHA-256 BATCH
// =============================================================================

/// Octa-lane SHA-256 vs a scalar `sha2` loop over the same 52-byte messages.
fn bench_sha256_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-SHA256-52B");

    for count in [8usize, 64, 1024, 16384] {
        let mut records = vec![0u8; count * RECORD];
        rand::rng().fill(&mut records[..]);
        let mut digests = vec![0u8; count * DIGEST];
        group.throughput(Throughput::Bytes((count * RECORD) as u64));

        group.bench_with_input(BenchmarkId::new("octolane", count), &count, |b, &count| {
            b.iter(|| octolane::sha256_batch_52b(black_box(&records), &mut digests, count));
        });

        let mut scalar_digests = vec![0u8; count * DIGEST];
        group.bench_with_input(BenchmarkId::new("sha2-serial", count), &count, |b, &count| {
            use sha2::{Digest, Sha256};
            b.iter(|| {
                for i in 0..count {
                    let d = Sha256::digest(black_box(&records[i * RECORD..i * RECORD + 52]));
                    scalar_digests[i * DIGEST..(i + 1) * DIGEST].copy_from_slice(&d);
                }
            });
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BLAKE2S BATCH
// =============================================================================

/// Multi-buffer BLAKE2s front vs a scalar `blake2` loop.
fn bench_blake2s_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-BLAKE2s-64B");

    for count in [8usize, 64, 1024, 16384] {
        let mut records = vec![0u8; count * RECORD];
        rand::rng().fill(&mut records[..]);
        let mut digests = vec![0u8; count * DIGEST];
        group.throughput(Throughput::Bytes((count * RECORD) as u64));

        group.bench_with_input(BenchmarkId::new("octolane", count), &count, |b, &count| {
            b.iter(|| octolane::blake2s_batch_64b(black_box(&records), &mut digests, count));
        });

        let mut scalar_digests = vec![0u8; count * DIGEST];
        group.bench_with_input(
            BenchmarkId::new("blake2-serial", count),
            &count,
            |b, &count| {
                use blake2::{Blake2s256, Digest};
                b.iter(|| {
                    for i in 0..count {
                        let d = Blake2s256::digest(black_box(&records[i * RECORD..(i + 1) * RECORD]));
                        scalar_digests[i * DIGEST..(i + 1) * DIGEST].copy_from_slice(&d);
                    }
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_sha256_batch, bench_blake2s_batch);
criterion_main!(benches);
