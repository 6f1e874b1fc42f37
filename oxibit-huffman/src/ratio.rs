//! Compression ratio measurement.
//!
//! The ratio compares the size of the original sequence, stored at a fixed
//! width per symbol, with the bit length of the compressed stream:
//!
//! ```text
//! ratio = original.len() * symbol_bits / compressed.len()
//! ```
//!
//! With the default 8-bit width, skewed text compresses to a ratio above 1,
//! and a uniform distribution over all 256 byte values approaches exactly 1.

use crate::code_table::CodeTable;
use crate::frequency::FrequencyTable;
use oxibit_core::error::{OxiBitError, Result};
use oxibit_core::{BitString, Symbol};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed-width assumption for the uncompressed representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RatioConfig {
    /// Bits one uncompressed symbol occupies.
    pub symbol_bits: u32,
}

impl RatioConfig {
    /// One byte per symbol (bytes, ASCII text).
    pub const BYTE: Self = Self { symbol_bits: 8 };

    /// Two bytes per symbol (UTF-16 code units, `u16` alphabets).
    pub const WIDE: Self = Self { symbol_bits: 16 };

    /// Four bytes per symbol (Rust `char` as stored in memory).
    pub const UTF32: Self = Self { symbol_bits: 32 };

    /// Create a configuration with a custom symbol width.
    pub const fn new(symbol_bits: u32) -> Self {
        Self { symbol_bits }
    }
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self::BYTE
    }
}

/// Compression ratio assuming one byte per original symbol.
pub fn compression_ratio<S>(original: &[S], compressed: &BitString) -> Result<f64> {
    compression_ratio_with(original, compressed, RatioConfig::default())
}

/// Compression ratio with an explicit symbol width.
///
/// Fails with `InvalidInput` for an empty original or a zero symbol width,
/// and with `DegenerateInput` when the compressed stream has no bits.
pub fn compression_ratio_with<S>(
    original: &[S],
    compressed: &BitString,
    config: RatioConfig,
) -> Result<f64> {
    if original.is_empty() {
        return Err(OxiBitError::invalid_input(
            "cannot measure the ratio of empty data",
        ));
    }
    if config.symbol_bits == 0 {
        return Err(OxiBitError::invalid_input("symbol width must be non-zero"));
    }
    if compressed.is_empty() {
        return Err(OxiBitError::degenerate(format!(
            "{} symbols compressed to zero bits",
            original.len()
        )));
    }

    let original_bits = original.len() as f64 * f64::from(config.symbol_bits);
    Ok(original_bits / compressed.len() as f64)
}

/// Summary of one compression run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompressionStats {
    /// Number of symbols in the original.
    pub symbols: u64,
    /// Number of distinct symbols.
    pub distinct_symbols: usize,
    /// Size of the original at the configured width.
    pub original_bits: u64,
    /// Size of the compressed stream.
    pub compressed_bits: u64,
    /// `original_bits / compressed_bits`.
    pub ratio: f64,
    /// Expected code length in bits per symbol.
    pub average_code_length: f64,
    /// Shannon entropy of the source in bits per symbol.
    pub entropy: f64,
}

impl CompressionStats {
    /// Measure a compression run.
    pub fn measure<S: Symbol>(
        original: &[S],
        compressed: &BitString,
        frequencies: &FrequencyTable<S>,
        codes: &CodeTable<S>,
        config: RatioConfig,
    ) -> Result<Self> {
        let ratio = compression_ratio_with(original, compressed, config)?;
        Ok(Self {
            symbols: original.len() as u64,
            distinct_symbols: frequencies.len(),
            original_bits: original.len() as u64 * u64::from(config.symbol_bits),
            compressed_bits: compressed.len() as u64,
            ratio,
            average_code_length: codes.average_code_length(frequencies)?,
            entropy: frequencies.entropy(),
        })
    }

    /// Fraction of space saved, `1 - 1/ratio`.
    pub fn space_savings(&self) -> f64 {
        1.0 - 1.0 / self.ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_byte_width() {
        let original = b"abcd";
        let compressed: BitString = "00011011".parse().unwrap();
        let ratio = compression_ratio(original, &compressed).unwrap();
        assert!((ratio - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_ratio_custom_width() {
        let original = ['x'; 4];
        let compressed = BitString::zeros(4);
        let ratio = compression_ratio_with(&original, &compressed, RatioConfig::UTF32).unwrap();
        assert!((ratio - 32.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_original() {
        let err = compression_ratio::<u8>(&[], &BitString::zeros(3)).unwrap_err();
        assert!(matches!(err, OxiBitError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_compressed_is_degenerate() {
        let err = compression_ratio(b"aaa", &BitString::new()).unwrap_err();
        assert!(matches!(err, OxiBitError::DegenerateInput { .. }));
    }

    #[test]
    fn test_zero_width() {
        let err =
            compression_ratio_with(b"a", &BitString::zeros(1), RatioConfig::new(0)).unwrap_err();
        assert!(matches!(err, OxiBitError::InvalidInput { .. }));
    }

    #[test]
    fn test_default_config() {
        assert_eq!(RatioConfig::default(), RatioConfig::BYTE);
        assert_eq!(RatioConfig::WIDE.symbol_bits, 16);
    }

    #[test]
    fn test_space_savings() {
        let stats = CompressionStats {
            symbols: 8,
            distinct_symbols: 2,
            original_bits: 64,
            compressed_bits: 16,
            ratio: 4.0,
            average_code_length: 2.0,
            entropy: 1.0,
        };
        assert!((stats.space_savings() - 0.75).abs() < 1e-12);
    }
}
