//! LZW dictionary (code table) management.
//!
//! The table is indexed directly by code value. Codes 0-255 hold the single
//! bytes; 256 (CLEAR) and 257 (END) are reserved and map to no string.
//!
//! # Code Width
//!
//! The width grows by one bit at the moment the newly assigned code equals
//! `2^width`, so the encoder writes that very code's successors one bit wider.
//! The decoder assigns each entry one code later than the encoder did, so when
//! reading it widens early if its next assignment will cross the boundary.

use crate::config::LzwConfig;
use log::trace;
use std::collections::HashMap;

/// LZW dictionary for encoding and decoding.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> byte sequence.
    table: Vec<Vec<u8>>,
    /// Reverse lookup: byte sequence -> code (filled by the encoder only).
    reverse: HashMap<Vec<u8>, u32>,
    config: LzwConfig,
    /// Most recently assigned code (257 right after a seed).
    last_code: u32,
    /// Current code bit width.
    width: u8,
}

impl LzwDictionary {
    /// Create a seeded dictionary. The configuration must already be valid.
    pub fn new(config: LzwConfig) -> Self {
        let mut dict = Self {
            table: Vec::new(),
            reverse: HashMap::new(),
            config,
            last_code: config.end_code(),
            width: config.min_bits(),
        };
        dict.reset();
        dict
    }

    /// Return to the seed state: 256 single bytes, width 9.
    pub fn reset(&mut self) {
        self.table.clear();
        self.reverse.clear();

        for byte in 0..=255u8 {
            self.table.push(vec![byte]);
            self.reverse.insert(vec![byte], byte as u32);
        }
        // CLEAR and END
        self.table.push(Vec::new());
        self.table.push(Vec::new());

        self.last_code = self.config.end_code();
        self.width = self.config.min_bits();
    }

    /// Assign the next code to `string` and make it findable by content.
    pub fn add_string(&mut self, string: Vec<u8>) -> u32 {
        let code = self.assign_code();
        self.reverse.insert(string.clone(), code);
        self.table.push(string);
        code
    }

    /// Assign the next code to `string` without the reverse mapping.
    pub fn add_string_decode(&mut self, string: Vec<u8>) -> u32 {
        let code = self.assign_code();
        self.table.push(string);
        code
    }

    fn assign_code(&mut self) -> u32 {
        let code = self.last_code + 1;
        if code == 1 << self.width {
            trace!("lzw width {} -> {} at code {}", self.width, self.width + 1, code);
            self.width += 1;
        }
        self.last_code = code;
        code
    }

    /// Whether the encoder must emit CLEAR and reseed before continuing.
    pub fn needs_reset(&self) -> bool {
        self.last_code == self.config.reset_threshold()
    }

    /// Byte sequence of a code, or `None` for reserved or unassigned codes.
    pub fn get_string(&self, code: u32) -> Option<&[u8]> {
        if code == self.config.clear_code() || code == self.config.end_code() {
            return None;
        }
        self.table.get(code as usize).map(Vec::as_slice)
    }

    /// Find the code for a byte sequence (for encoding).
    pub fn find_code(&self, string: &[u8]) -> Option<u32> {
        self.reverse.get(string).copied()
    }

    /// Width the encoder writes codes with.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Width the decoder must read the next code with.
    pub fn read_width(&self) -> u8 {
        if self.last_code + 1 == 1 << self.width {
            self.width + 1
        } else {
            self.width
        }
    }

    /// Most recently assigned code.
    pub fn last_code(&self) -> u32 {
        self.last_code
    }

    /// Code the next assignment will receive.
    pub fn next_code(&self) -> u32 {
        self.last_code + 1
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_init() {
        let dict = LzwDictionary::new(LzwConfig::DEFAULT);

        for i in 0..256u32 {
            assert_eq!(dict.get_string(i).unwrap(), &[i as u8]);
            assert_eq!(dict.find_code(&[i as u8]), Some(i));
        }

        assert_eq!(dict.get_string(256), None);
        assert_eq!(dict.get_string(257), None);
        assert_eq!(dict.get_string(258), None);
        assert_eq!(dict.last_code(), 257);
        assert_eq!(dict.next_code(), 258);
        assert_eq!(dict.width(), 9);
        assert_eq!(dict.read_width(), 9);
    }

    #[test]
    fn test_add_string() {
        let mut dict = LzwDictionary::new(LzwConfig::DEFAULT);

        let code = dict.add_string(b"AB".to_vec());
        assert_eq!(code, 258);
        assert_eq!(dict.get_string(code).unwrap(), b"AB");
        assert_eq!(dict.find_code(b"AB"), Some(258));

        let code = dict.add_string_decode(b"BC".to_vec());
        assert_eq!(code, 259);
        assert_eq!(dict.get_string(code).unwrap(), b"BC");
        assert_eq!(dict.find_code(b"BC"), None);
    }

    #[test]
    fn test_width_grows_at_512() {
        let mut dict = LzwDictionary::new(LzwConfig::DEFAULT);

        // 258..=511 fit in 9 bits.
        for i in 0..254u32 {
            dict.add_string(i.to_be_bytes().to_vec());
        }
        assert_eq!(dict.last_code(), 511);
        assert_eq!(dict.width(), 9);
        // A decoder one entry behind must already read 10 bits here.
        assert_eq!(dict.read_width(), 10);

        assert_eq!(dict.add_string(b"next".to_vec()), 512);
        assert_eq!(dict.width(), 10);
        assert_eq!(dict.read_width(), 10);
    }

    #[test]
    fn test_needs_reset_at_threshold() {
        let mut dict = LzwDictionary::new(LzwConfig::new(9));
        for i in 0..253u32 {
            dict.add_string(i.to_be_bytes().to_vec());
            assert!(!dict.needs_reset());
        }
        assert_eq!(dict.add_string(b"last".to_vec()), 511);
        assert!(dict.needs_reset());
        assert_eq!(dict.width(), 9);

        dict.reset();
        assert!(!dict.needs_reset());
        assert_eq!(dict.find_code(b"last"), None);
        assert_eq!(dict.next_code(), 258);
    }
}
