//! Performance benchmarks for trizip-huffman
//!
//! This benchmark suite evaluates:
//! - Tree construction from a frequency table
//! - Encode and decode throughput on skewed and flat data

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use trizip_huffman::{FrequencyTable, HuffmanTree, compress, decompress};

mod test_data {
    /// English-like text with a skewed byte distribution
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        text.iter().copied().cycle().take(size).collect()
    }

    /// Flat distribution over all byte values
    pub fn random(size: usize) -> Vec<u8> {
        let mut seed: u64 = 0x123456789ABCDEF0;
        (0..size)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                (seed >> 32) as u8
            })
            .collect()
    }
}

const SIZES: [usize; 2] = [16 * 1024, 256 * 1024];

fn bench_tree_build(c: &mut Criterion) {
    let freqs = FrequencyTable::from_bytes(&test_data::random(64 * 1024)).unwrap();
    c.bench_function("huffman_tree_build_256", |b| {
        b.iter(|| HuffmanTree::from_frequencies(black_box(&freqs)).code_table())
    });
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_encode");
    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let text = test_data::text_like(size);
        group.bench_with_input(BenchmarkId::new("text", size), &text, |b, data| {
            b.iter(|| compress(black_box(data)).unwrap())
        });
        let random = test_data::random(size);
        group.bench_with_input(BenchmarkId::new("random", size), &random, |b, data| {
            b.iter(|| compress(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("huffman_decode");
    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let compressed = compress(&test_data::text_like(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("text", size), &compressed, |b, data| {
            b.iter(|| decompress(black_box(data)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tree_build, bench_encode, bench_decode);
criterion_main!(benches);
