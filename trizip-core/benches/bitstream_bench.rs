//! Performance benchmarks for the bit-level reader and writer
//!
//! This benchmark suite evaluates:
//! - Single-bit writes (Huffman payload packing)
//! - Fixed-width MSB-first code writes (LZW code stream)
//! - Reading both back

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Cursor;
use trizip_core::bitstream::{BitOrder, BitReader, BitWriter};

/// Standard data sizes for benchmarking
mod data_sizes {
    pub const SMALL: usize = 4 * 1024; // 4 KB
    pub const LARGE: usize = 256 * 1024; // 256 KB
}

/// Pseudo-random 9..=16 bit codes, reproducible across runs
fn codes(count: usize) -> Vec<(u32, u8)> {
    let mut seed: u64 = 0x123456789ABCDEF0;
    (0..count)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            let width = 9 + ((seed >> 60) as u8 % 8);
            ((seed >> 16) as u32 & ((1 << width) - 1), width)
        })
        .collect()
}

fn bench_write_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitwriter");

    for (name, size) in [("4KB", data_sizes::SMALL), ("256KB", data_sizes::LARGE)] {
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("single_bits", name), &size, |b, &size| {
            b.iter(|| {
                let mut out = Vec::with_capacity(size);
                let mut writer = BitWriter::new(&mut out);
                for i in 0..size * 8 {
                    writer.write_bit(i % 3 == 0).unwrap();
                }
                writer.finish().unwrap();
                black_box(out)
            });
        });

        let codes = codes(size);
        group.bench_with_input(BenchmarkId::new("msb_codes", name), &codes, |b, codes| {
            b.iter(|| {
                let mut out = Vec::new();
                let mut writer = BitWriter::new(&mut out);
                for &(value, width) in codes {
                    writer.write_bits(value, width, BitOrder::MsbFirst).unwrap();
                }
                writer.finish().unwrap();
                black_box(out)
            });
        });
    }

    group.finish();
}

fn bench_read_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("bitreader");

    let codes = codes(data_sizes::LARGE);
    let mut encoded = Vec::new();
    let mut writer = BitWriter::new(&mut encoded);
    for &(value, width) in &codes {
        writer.write_bits(value, width, BitOrder::MsbFirst).unwrap();
    }
    writer.finish().unwrap();

    group.throughput(Throughput::Bytes(encoded.len() as u64));
    group.bench_function("msb_codes_256K", |b| {
        b.iter(|| {
            let mut reader = BitReader::new(Cursor::new(&encoded));
            let mut sum = 0u64;
            for &(_, width) in &codes {
                sum += reader.read_bits(width, BitOrder::MsbFirst).unwrap() as u64;
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_write_bits, bench_read_bits);
criterion_main!(benches);
