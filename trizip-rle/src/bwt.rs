//! Burrows-Wheeler Transform.
//!
//! The forward transform sorts all cyclic rotations of the input. Rotations
//! are compared by finding their longest common prefix with a binary search
//! over [`PolyHash`] substring hashes, then comparing the first byte past it,
//! so each comparison costs O(log n) instead of O(n).

use crate::polyhash::PolyHash;
use std::cmp::Ordering;
use trizip_core::error::{Result, TrizipError};
use trizip_core::framing::checked_u32_len;

/// Perform the Burrows-Wheeler Transform.
///
/// Returns the last column of the sorted rotation table and the row at which
/// the unrotated input sits. Equal rotations keep their original relative
/// order, so the index of a constant input is 0.
pub fn forward(data: &[u8]) -> Result<(Vec<u8>, u32)> {
    if data.is_empty() {
        return Ok((Vec::new(), 0));
    }
    let n = data.len();
    checked_u32_len(n)?;

    let doubled = [data, data].concat();
    let hash = PolyHash::new(&doubled);

    let mut rotations: Vec<usize> = (0..n).collect();
    // `sort_by` is stable.
    rotations.sort_by(|&a, &b| compare_rotations(&doubled, &hash, n, a, b));

    let index = rotations
        .iter()
        .position(|&start| start == 0)
        .ok_or_else(|| TrizipError::corrupt_header("rotation 0 missing from sort"))?;

    let transformed = rotations.iter().map(|&start| doubled[start + n - 1]).collect();
    Ok((transformed, index as u32))
}

/// Length of the longest common prefix of two rotations, capped at `n`.
fn common_prefix(hash: &PolyHash, n: usize, a: usize, b: usize) -> usize {
    let (mut lo, mut hi) = (0, n + 1);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if hash.hash(a, a + mid - 1) == hash.hash(b, b + mid - 1) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

fn compare_rotations(doubled: &[u8], hash: &PolyHash, n: usize, a: usize, b: usize) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    let lcp = common_prefix(hash, n, a, b);
    if lcp >= n {
        return Ordering::Equal;
    }
    doubled[a + lcp].cmp(&doubled[b + lcp])
}

/// Perform the inverse Burrows-Wheeler Transform.
///
/// Fails with `CorruptHeader` when `index` does not name a row of a
/// nonempty table.
pub fn inverse(transformed: &[u8], index: u32) -> Result<Vec<u8>> {
    let n = transformed.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    if index as usize >= n {
        return Err(TrizipError::corrupt_header(format!(
            "BWT index {index} out of range for {n} bytes"
        )));
    }

    let mut counts = [0usize; 256];
    for &byte in transformed {
        counts[byte as usize] += 1;
    }

    // First row of each symbol in the sorted first column.
    let mut offsets = [0usize; 256];
    let mut total = 0;
    for (offset, count) in offsets.iter_mut().zip(counts) {
        *offset = total;
        total += count;
    }

    let mut next = vec![0usize; n];
    for (i, &byte) in transformed.iter().enumerate() {
        next[offsets[byte as usize]] = i;
        offsets[byte as usize] += 1;
    }

    let mut result = Vec::with_capacity(n);
    let mut row = next[index as usize];
    for _ in 0..n {
        result.push(transformed[row]);
        row = next[row];
    }
    Ok(result)
}
