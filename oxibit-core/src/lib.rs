//! # OxiBit Core
//!
//! Core components shared by the OxiBit coders.
//!
//! - [`bitstring`]: Non byte-aligned bit sequences (codes, streams, codewords)
//! - [`symbol`]: The [`Symbol`] alphabet trait
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Coders                                                  │
//! │     oxibit-huffman (entropy)   oxibit-hamming (ECC)     │
//! ├─────────────────────────────────────────────────────────┤
//! │ Core (this crate)                                       │
//! │     BitString, Symbol, OxiBitError                      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxibit_core::BitString;
//!
//! let bits: BitString = "0110".parse().unwrap();
//! assert_eq!(bits.len(), 4);
//! assert_eq!(bits.count_ones(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstring;
pub mod error;
pub mod symbol;

// Re-exports for convenience
pub use bitstring::{BitString, Bits};
pub use error::{OxiBitError, Result};
pub use symbol::Symbol;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstring::BitString;
    pub use crate::error::{OxiBitError, Result};
    pub use crate::symbol::Symbol;
}
