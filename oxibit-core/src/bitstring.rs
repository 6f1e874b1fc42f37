//! In-memory bit sequences.
//!
//! [`BitString`] holds an arbitrary number of bits that need not fill a
//! whole byte. It is the representation for Huffman codes, compressed
//! streams and Hamming codewords. The bit length is part of the value: two
//! strings with the same bytes but different lengths are different.
//!
//! # Bit Ordering
//!
//! Bits are packed LSB-first within each byte, the same ordering the
//! DEFLATE-style bit writers use. Unused high bits of the final byte are
//! always zero, so equality and hashing can work on the packed bytes.
//!
//! # Example
//!
//! ```
//! use oxibit_core::bitstring::BitString;
//!
//! let mut bits: BitString = "101".parse().unwrap();
//! bits.push(true);
//! assert_eq!(bits.len(), 4);
//! assert_eq!(bits.to_string(), "1011");
//! assert_eq!(bits.as_bytes(), &[0b1101]);
//! ```

use crate::error::{OxiBitError, Result};
use std::fmt;
use std::str::FromStr;

/// A growable, non byte-aligned sequence of bits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    /// Packed bits (LSB-first).
    bytes: Vec<u8>,
    /// Number of valid bits.
    len: usize,
}

impl BitString {
    /// Create an empty bit string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bit string with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Create a bit string of `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bytes: vec![0; len.div_ceil(8)],
            len,
        }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the string holds no bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed bytes. The final byte is zero-padded in its high bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append a single bit.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << offset;
        }
        self.len += 1;
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &BitString) {
        if self.len % 8 == 0 {
            // Byte aligned: copy whole bytes.
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        self.bytes.reserve(other.len.div_ceil(8));
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Get the bit at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some((self.bytes[index / 8] >> (index % 8)) & 1 == 1)
    }

    /// Set the bit at `index`.
    pub fn set(&mut self, index: usize, bit: bool) -> Result<()> {
        self.check_index(index)?;
        let mask = 1u8 << (index % 8);
        if bit {
            self.bytes[index / 8] |= mask;
        } else {
            self.bytes[index / 8] &= !mask;
        }
        Ok(())
    }

    /// Invert the bit at `index`.
    pub fn flip(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.bytes[index / 8] ^= 1u8 << (index % 8);
        Ok(())
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Check whether `self` is a prefix of `other` (equal strings count).
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        if self.len > other.len {
            return false;
        }
        let whole = self.len / 8;
        if self.bytes[..whole] != other.bytes[..whole] {
            return false;
        }
        (whole * 8..self.len).all(|i| self.get(i) == other.get(i))
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            bits: self,
            position: 0,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(OxiBitError::invalid_input(format!(
                "bit index {} out of range for length {}",
                index, self.len
            )));
        }
        Ok(())
    }
}

/// Iterator over the bits of a [`BitString`].
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    bits: &'a BitString,
    position: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        let bit = self.bits.get(self.position)?;
        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut bits = BitString::with_capacity(iter.size_hint().0);
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

impl Extend<bool> for BitString {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl From<&[bool]> for BitString {
    fn from(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }
}

impl FromStr for BitString {
    type Err = OxiBitError;

    /// Parse a string of `'0'` and `'1'` characters.
    fn from_str(s: &str) -> Result<Self> {
        let mut bits = BitString::with_capacity(s.len());
        for (position, c) in s.chars().enumerate() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(OxiBitError::invalid_bit(position, found)),
            }
        }
        Ok(bits)
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
