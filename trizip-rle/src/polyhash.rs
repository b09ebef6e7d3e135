//! Double polynomial rolling hash.
//!
//! Two independent `(base, modulus)` pairs make accidental collisions between
//! different substrings negligible for the input sizes the transform handles.
//! Every intermediate product stays below `2^63`, so plain `u64` arithmetic
//! suffices.

const BASE1: u64 = 179;
const MOD1: u64 = 556_556_107;
const BASE2: u64 = 139;
const MOD2: u64 = 2_000_000_011;

/// Prefix hashes of a byte string with O(1) substring queries.
///
/// Read-only after construction.
#[derive(Debug, Clone)]
pub struct PolyHash {
    powers1: Vec<u64>,
    powers2: Vec<u64>,
    prefix1: Vec<u64>,
    prefix2: Vec<u64>,
}

impl PolyHash {
    /// Precompute powers and prefix hashes of `data`.
    pub fn new(data: &[u8]) -> Self {
        let n = data.len();

        let mut powers1 = Vec::with_capacity(n + 1);
        let mut powers2 = Vec::with_capacity(n + 1);
        powers1.push(1);
        powers2.push(1);
        for i in 1..=n {
            powers1.push(powers1[i - 1] * BASE1 % MOD1);
            powers2.push(powers2[i - 1] * BASE2 % MOD2);
        }

        let mut prefix1 = Vec::with_capacity(n);
        let mut prefix2 = Vec::with_capacity(n);
        let (mut h1, mut h2) = (0u64, 0u64);
        for &byte in data {
            h1 = (h1 * BASE1 + byte as u64) % MOD1;
            h2 = (h2 * BASE2 + byte as u64) % MOD2;
            prefix1.push(h1);
            prefix2.push(h2);
        }

        Self {
            powers1,
            powers2,
            prefix1,
            prefix2,
        }
    }

    /// Length of the hashed string.
    pub fn len(&self) -> usize {
        self.prefix1.len()
    }

    /// Whether the hashed string is empty.
    pub fn is_empty(&self) -> bool {
        self.prefix1.is_empty()
    }

    /// Hash pair of the inclusive range `data[left..=right]`.
    ///
    /// # Panics
    ///
    /// Panics if `left > right` or `right` is out of bounds.
    pub fn hash(&self, left: usize, right: usize) -> (u64, u64) {
        assert!(left <= right, "empty range {left}..={right}");
        let span = right - left + 1;

        let mut big1 = self.prefix1[right];
        let mut big2 = self.prefix2[right];
        if left > 0 {
            let small1 = self.prefix1[left - 1] * self.powers1[span] % MOD1;
            let small2 = self.prefix2[left - 1] * self.powers2[span] % MOD2;
            big1 = (big1 + MOD1 - small1) % MOD1;
            big2 = (big2 + MOD2 - small2) % MOD2;
        }
        (big1, big2)
    }
}
