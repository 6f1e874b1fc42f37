//! Hamming block encoding and syndrome decoding.
//!
//! Codeword positions are numbered from 1. Parity bits sit at the powers of
//! two (1, 2, 4, ...) and data bits fill the remaining positions in order.
//! Parity bit `2^j` makes the number of set bits among positions with bit
//! `j` set even, so the XOR of the positions of all set bits (the
//! *syndrome*) is zero for a valid codeword and names the flipped position
//! after a single-bit error.
//!
//! The extended (SECDED) variant appends one overall parity bit. A non-zero
//! syndrome with even overall parity then means two bits flipped, which is
//! detected but not corrected.
//!
//! ```text
//! position:  1  2  3  4  5  6  7 | 8 (extended only)
//! role:      p1 p2 d1 p4 d2 d3 d4| p0
//! ```

use crate::sizer::redundant_bits;
use oxibit_core::BitString;
use oxibit_core::error::{OxiBitError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hamming code parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HammingConfig {
    /// Data bits per block.
    pub data_bits: usize,
    /// Whether to append an overall parity bit (SECDED).
    pub extended: bool,
}

impl HammingConfig {
    /// Classic Hamming(7,4).
    pub const HAMMING_7_4: Self = Self {
        data_bits: 4,
        extended: false,
    };

    /// Extended Hamming(8,4), single-error-correct double-error-detect.
    pub const HAMMING_8_4: Self = Self {
        data_bits: 4,
        extended: true,
    };

    /// Hamming(15,11).
    pub const HAMMING_15_11: Self = Self {
        data_bits: 11,
        extended: false,
    };

    /// Extended Hamming(72,64), the usual ECC memory word.
    pub const HAMMING_72_64: Self = Self {
        data_bits: 64,
        extended: true,
    };

    /// Create a configuration.
    pub const fn new(data_bits: usize, extended: bool) -> Self {
        Self {
            data_bits,
            extended,
        }
    }
}

/// Result of decoding one codeword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The recovered data bits.
    pub data: BitString,
    /// Zero-based codeword index of the bit that was corrected, if any.
    pub corrected: Option<usize>,
}

/// A Hamming block code for a fixed number of data bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingCode {
    data_bits: usize,
    parity_bits: u32,
    extended: bool,
}

impl HammingCode {
    /// Create a code from a configuration.
    ///
    /// Fails with `InvalidInput` when `data_bits` is zero or the codeword
    /// length does not fit in `usize`.
    pub fn new(config: HammingConfig) -> Result<Self> {
        if config.data_bits == 0 {
            return Err(OxiBitError::invalid_input(
                "a Hamming block needs at least one data bit",
            ));
        }

        let parity_bits = redundant_bits(config.data_bits);
        config
            .data_bits
            .checked_add(parity_bits as usize)
            .and_then(|n| n.checked_add(usize::from(config.extended)))
            .ok_or_else(|| {
                OxiBitError::invalid_input(format!(
                    "{} data bits give a codeword longer than usize::MAX bits",
                    config.data_bits
                ))
            })?;

        let code = Self {
            data_bits: config.data_bits,
            parity_bits,
            extended: config.extended,
        };
        log::debug!(
            "Hamming({},{}){}",
            code.codeword_bits(),
            code.data_bits,
            if code.extended { " extended" } else { "" }
        );
        Ok(code)
    }

    /// Single-error-correcting code over `data_bits` bits.
    pub fn standard(data_bits: usize) -> Result<Self> {
        Self::new(HammingConfig::new(data_bits, false))
    }

    /// SECDED code over `data_bits` bits.
    pub fn extended(data_bits: usize) -> Result<Self> {
        Self::new(HammingConfig::new(data_bits, true))
    }

    /// Data bits per block.
    pub fn data_bits(&self) -> usize {
        self.data_bits
    }

    /// Hamming parity bits per block (excluding the overall parity bit).
    pub fn redundant_bits(&self) -> u32 {
        self.parity_bits
    }

    /// Whether an overall parity bit is appended.
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Total codeword length.
    pub fn codeword_bits(&self) -> usize {
        self.hamming_bits() + usize::from(self.extended)
    }

    /// Codeword length without the overall parity bit.
    fn hamming_bits(&self) -> usize {
        self.data_bits + self.parity_bits as usize
    }

    /// Encode exactly `data_bits` bits into a codeword.
    pub fn encode(&self, data: &BitString) -> Result<BitString> {
        if data.len() != self.data_bits {
            return Err(OxiBitError::invalid_input(format!(
                "expected {} data bits, got {}",
                self.data_bits,
                data.len()
            )));
        }

        let n = self.hamming_bits();
        let mut data_iter = data.iter();
        let mut codeword = BitString::with_capacity(self.codeword_bits());
        for position in 1..=n {
            let bit = if position.is_power_of_two() {
                false
            } else {
                data_iter.next().unwrap_or(false)
            };
            codeword.push(bit);
        }

        let syndrome = Self::syndrome_of(&codeword, n);
        for j in 0..self.parity_bits {
            let position = 1usize << j;
            codeword.set(position - 1, (syndrome >> j) & 1 == 1)?;
        }

        if self.extended {
            let odd = codeword.count_ones() % 2 == 1;
            codeword.push(odd);
        }

        Ok(codeword)
    }

    /// Syndrome of a codeword: XOR of the 1-based positions of its set bits.
    ///
    /// The overall parity bit of an extended code is not included.
    pub fn syndrome(&self, codeword: &BitString) -> Result<usize> {
        self.check_length(codeword)?;
        Ok(Self::syndrome_of(codeword, self.hamming_bits()))
    }

    fn syndrome_of(codeword: &BitString, n: usize) -> usize {
        codeword
            .iter()
            .take(n)
            .zip(1usize..)
            .filter(|&(bit, _)| bit)
            .fold(0, |acc, (_, position)| acc ^ position)
    }

    /// Decode a codeword, correcting a single flipped bit.
    ///
    /// Fails with `Uncorrectable` when the syndrome names no position of
    /// this code, or (extended codes) when two bits are in error.
    pub fn decode(&self, codeword: &BitString) -> Result<Decoded> {
        self.check_length(codeword)?;

        let n = self.hamming_bits();
        let syndrome = Self::syndrome_of(codeword, n);
        let mut repaired = codeword.clone();

        let corrected = if self.extended {
            let overall_odd = codeword.count_ones() % 2 == 1;
            match (syndrome, overall_odd) {
                (0, false) => None,
                // Only the overall parity bit flipped.
                (0, true) => Some(n),
                (s, true) if s <= n => Some(s - 1),
                (s, _) => return Err(OxiBitError::uncorrectable(s)),
            }
        } else {
            match syndrome {
                0 => None,
                s if s <= n => Some(s - 1),
                s => return Err(OxiBitError::uncorrectable(s)),
            }
        };

        if let Some(index) = corrected {
            log::debug!("Correcting codeword bit {} (syndrome {})", index, syndrome);
            repaired.flip(index)?;
        }

        let data = repaired
            .iter()
            .take(n)
            .zip(1usize..)
            .filter(|&(_, position)| !position.is_power_of_two())
            .map(|(bit, _)| bit)
            .collect();

        Ok(Decoded { data, corrected })
    }

    fn check_length(&self, codeword: &BitString) -> Result<()> {
        if codeword.len() != self.codeword_bits() {
            return Err(OxiBitError::invalid_input(format!(
                "expected a {}-bit codeword, got {} bits",
                self.codeword_bits(),
                codeword.len()
            )));
        }
        Ok(())
    }
}
