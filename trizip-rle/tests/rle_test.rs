//! BWT + block RLE integration tests.

use trizip_rle::block::{decode_blocks, encode_blocks, find_blocks};
use trizip_rle::bwt::{forward, inverse};
use trizip_rle::{INDEX_BYTES, RleCodec, TrizipError, compress, decompress};

fn noise(size: usize, mut seed: u64) -> Vec<u8> {
    (0..size)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 33) as u8
        })
        .collect()
}

#[test]
fn test_rle_roundtrip_cases() {
    let mut runs = Vec::new();
    for (i, len) in [1usize, 2, 126, 127, 128, 254, 255, 256, 1000].iter().enumerate() {
        runs.extend(std::iter::repeat_n(i as u8, *len));
    }

    let cases: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"x".to_vec(),
        vec![0u8; 5000],
        (0..=255).collect(),
        runs,
        b"to be or not to be, that is the question".repeat(20),
        noise(3000, 11),
    ];

    for original in cases {
        let compressed = compress(&original).expect("compression failed");
        let decompressed = decompress(&compressed).expect("decompression failed");
        assert_eq!(decompressed, original, "roundtrip failed for {} bytes", original.len());
    }
}

#[test]
fn test_bwt_inverse_independent_of_rle() {
    for seed in 1..20 {
        let data = noise(200 + seed as usize * 37, seed);
        let (transformed, index) = forward(&data).unwrap();

        let mut sorted_in = data.clone();
        let mut sorted_out = transformed.clone();
        sorted_in.sort_unstable();
        sorted_out.sort_unstable();
        assert_eq!(sorted_in, sorted_out, "BWT must permute its input");

        assert_eq!(inverse(&transformed, index).unwrap(), data);
    }
}

#[test]
fn test_bwt_matches_naive_rotation_sort() {
    let data = b"she sells sea shells by the sea shore";
    let n = data.len();
    let mut rotations: Vec<Vec<u8>> = (0..n)
        .map(|i| data[i..].iter().chain(&data[..i]).copied().collect())
        .collect();
    rotations.sort();
    let expected: Vec<u8> = rotations.iter().map(|r| r[n - 1]).collect();
    let expected_index = rotations.iter().position(|r| r == data).unwrap();

    let (transformed, index) = forward(data).unwrap();
    assert_eq!(transformed, expected);
    assert_eq!(index as usize, expected_index);
}

#[test]
fn test_ten_a_scenario() {
    let (transformed, index) = forward(b"AAAAAAAAAA").unwrap();
    assert_eq!(transformed, b"AAAAAAAAAA");
    assert_eq!(inverse(&transformed, index).unwrap(), b"AAAAAAAAAA");

    let compressed = compress(b"AAAAAAAAAA").unwrap();
    assert_eq!(&compressed[INDEX_BYTES..], &[0x80 | 10, b'A']);
}

#[test]
fn test_literal_run_of_130() {
    let data: Vec<u8> = (0..130).map(|i: u32| (i * 7 % 256) as u8).collect();
    assert!(find_blocks(&data).is_empty());

    let mut encoded = Vec::new();
    encode_blocks(&data, &mut encoded);
    assert_eq!(encoded[0], 127);
    assert_eq!(encoded[128], 3);
    assert_eq!(encoded.len(), 132);
    assert_eq!(decode_blocks(&encoded).unwrap(), data);
}

#[test]
fn test_repeat_run_of_300() {
    let data = vec![b'R'; 300];
    let mut encoded = Vec::new();
    encode_blocks(&data, &mut encoded);

    let headers: Vec<u8> = encoded.iter().step_by(2).copied().collect();
    assert!(headers.iter().all(|h| h & 0x80 != 0));
    let total: usize = headers.iter().map(|h| (h & 0x7F) as usize).sum();
    assert_eq!(total, 300);
    assert_eq!(decode_blocks(&encoded).unwrap(), data);
}

#[test]
fn test_no_repeats_expands_by_header_bytes() {
    let data = b"abcdefghij";
    let mut encoded = Vec::new();
    encode_blocks(data, &mut encoded);
    assert_eq!(encoded.len(), data.len() + 1);
}

#[test]
fn test_codec_reuse_is_independent() {
    let mut codec = RleCodec::new();
    let first = b"abracadabra".to_vec();
    let second = vec![9u8; 400];

    let mut a = Vec::new();
    codec.encode(&first[..], &mut a).unwrap();
    let mut b = Vec::new();
    codec.encode(&second[..], &mut b).unwrap();

    assert_eq!(a, compress(&first).unwrap());
    assert_eq!(b, compress(&second).unwrap());
}

#[test]
fn test_truncated_record_stream() {
    let mut compressed = compress(b"abcdefg").unwrap();
    compressed.pop();
    let err = decompress(&compressed).unwrap_err();
    assert!(matches!(err, TrizipError::TruncatedInput { .. }));
}
