//! Error types for OxiBit operations.
//!
//! A single error enum covers the Huffman and Hamming coders. Every error is
//! raised synchronously where it is detected; no operation produces partial
//! output on failure.

use thiserror::Error;

/// The main error type for OxiBit operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OxiBitError {
    /// A required argument was empty or otherwise unusable.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the problem.
        message: String,
    },

    /// A tree violated the leaf/internal node structure during traversal.
    #[error("Malformed tree: {message}")]
    MalformedTree {
        /// Description of the structural violation.
        message: String,
    },

    /// A symbol being compressed has no entry in the code table.
    #[error("No code for symbol {symbol}")]
    MissingCode {
        /// Debug rendering of the offending symbol.
        symbol: String,
    },

    /// Ratio computation on an empty compressed stream.
    #[error("Degenerate input: {message}")]
    DegenerateInput {
        /// Description of the degenerate case.
        message: String,
    },

    /// Decoding walked to a child that does not exist.
    #[error("Invalid Huffman code at bit position {bit_position}")]
    InvalidCode {
        /// Bit position where the invalid code was found.
        bit_position: u64,
    },

    /// The compressed stream ended part way through a code.
    #[error("Stream truncated inside a code at bit position {bit_position}")]
    TruncatedStream {
        /// Number of bits consumed when the stream ran out.
        bit_position: u64,
    },

    /// A textual bit string contained something other than `0` or `1`.
    #[error("Invalid bit character {found:?} at position {position}")]
    InvalidBit {
        /// Character index in the source text.
        position: usize,
        /// The character found.
        found: char,
    },

    /// A block code detected an error it cannot correct.
    #[error("Uncorrectable error in codeword (syndrome {syndrome})")]
    Uncorrectable {
        /// Syndrome computed for the codeword.
        syndrome: usize,
    },
}

/// Result type alias for OxiBit operations.
pub type Result<T> = std::result::Result<T, OxiBitError>;

impl OxiBitError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a malformed tree error.
    pub fn malformed_tree(message: impl Into<String>) -> Self {
        Self::MalformedTree {
            message: message.into(),
        }
    }

    /// Create a missing code error for any debuggable symbol.
    pub fn missing_code(symbol: &impl std::fmt::Debug) -> Self {
        Self::MissingCode {
            symbol: format!("{symbol:?}"),
        }
    }

    /// Create a degenerate input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }

    /// Create an invalid code error.
    pub fn invalid_code(bit_position: u64) -> Self {
        Self::InvalidCode { bit_position }
    }

    /// Create a truncated stream error.
    pub fn truncated(bit_position: u64) -> Self {
        Self::TruncatedStream { bit_position }
    }

    /// Create an invalid bit character error.
    pub fn invalid_bit(position: usize, found: char) -> Self {
        Self::InvalidBit { position, found }
    }

    /// Create an uncorrectable codeword error.
    pub fn uncorrectable(syndrome: usize) -> Self {
        Self::Uncorrectable { syndrome }
    }
}
