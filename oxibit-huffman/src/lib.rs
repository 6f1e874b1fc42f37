//! # OxiBit Huffman
//!
//! Pure Rust Huffman entropy coding over in-memory symbol sequences.
//!
//! The pipeline runs leaf-first:
//!
//! ```text
//! data ─► FrequencyTable ─► HuffmanTree ─► CodeTable ─► compress ─► BitString
//!                                │                                     │
//!                                └──────────── decompress ◄────────────┘
//! ```
//!
//! - [`frequency`]: symbol counting
//! - [`tree`]: greedy minimum-merge tree construction
//! - [`code_table`]: prefix-code derivation
//! - [`codec`]: compression, decompression and the [`HuffmanCodec`] bundle
//! - [`ratio`]: compression ratio and run statistics
//!
//! ## Example
//!
//! ```rust
//! use oxibit_huffman::{CodeTable, FrequencyTable, HuffmanTree};
//! use oxibit_huffman::{compress, compression_ratio, decompress};
//!
//! let data = b"aaaaabbbbcccddee";
//! let freq = FrequencyTable::build(data).unwrap();
//! let tree = HuffmanTree::build(&freq).unwrap();
//! let codes = CodeTable::derive(tree.root()).unwrap();
//!
//! let compressed = compress(data, &codes).unwrap();
//! assert_eq!(decompress(&compressed, &tree).unwrap(), data.to_vec());
//! assert!(compression_ratio(data, &compressed).unwrap() > 1.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`CompressionStats`] and [`RatioConfig`]
//! - `parallel`: `FrequencyTable::build_parallel` on the rayon thread pool

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod code_table;
pub mod codec;
pub mod frequency;
pub mod ratio;
pub mod tree;

// Re-exports
pub use code_table::CodeTable;
pub use codec::{HuffmanCodec, compress, decode_huffman, decompress, encode_huffman};
pub use frequency::FrequencyTable;
pub use ratio::{CompressionStats, RatioConfig, compression_ratio, compression_ratio_with};
pub use tree::{HuffmanTree, Node};
