//! # OxiBit Hamming
//!
//! Pure Rust Hamming single-error-correcting block codes.
//!
//! - [`sizer`]: the minimal parity-bit count `r` for `m` data bits
//! - [`code`]: parity placement, syndrome decoding and SECDED
//!
//! ## Example
//!
//! ```rust
//! use oxibit_core::BitString;
//! use oxibit_hamming::{HammingCode, redundant_bits};
//!
//! assert_eq!(redundant_bits(4), 3);
//!
//! let code = HammingCode::standard(4).unwrap();
//! let data: BitString = "1011".parse().unwrap();
//! let mut codeword = code.encode(&data).unwrap();
//!
//! codeword.flip(2).unwrap();
//! let decoded = code.decode(&codeword).unwrap();
//! assert_eq!(decoded.data, data);
//! assert_eq!(decoded.corrected, Some(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod code;
pub mod sizer;

// Re-exports
pub use code::{Decoded, HammingCode, HammingConfig};
pub use sizer::{is_sufficient, redundant_bits};
