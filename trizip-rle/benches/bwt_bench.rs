//! Benchmarks for the Burrows-Wheeler Transform and the full RLE codec.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use trizip_rle::bwt::{forward, inverse};
use trizip_rle::{compress, decompress};

fn generate_text(size: usize) -> Vec<u8> {
    let text = b"The quick brown fox jumps over the lazy dog. ";
    text.iter().copied().cycle().take(size).collect()
}

fn generate_random(size: usize) -> Vec<u8> {
    let mut seed: u64 = 12345;
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed >> 16) as u8
        })
        .collect()
}

const SIZES: [usize; 2] = [4 * 1024, 64 * 1024];

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt_forward");
    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let text = generate_text(size);
        group.bench_with_input(BenchmarkId::new("text", size), &text, |b, data| {
            b.iter(|| forward(black_box(data)).unwrap())
        });
        let random = generate_random(size);
        group.bench_with_input(BenchmarkId::new("random", size), &random, |b, data| {
            b.iter(|| forward(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt_inverse");
    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let (transformed, index) = forward(&generate_text(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("text", size), &transformed, |b, data| {
            b.iter(|| inverse(black_box(data), index).unwrap())
        });
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let data = generate_text(64 * 1024);
    let compressed = compress(&data).unwrap();
    let mut group = c.benchmark_group("rle_codec");
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("compress_text_64k", |b| b.iter(|| compress(black_box(&data)).unwrap()));
    group.bench_function("decompress_text_64k", |b| {
        b.iter(|| decompress(black_box(&compressed)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse, bench_codec);
criterion_main!(benches);
