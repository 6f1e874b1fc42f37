//! Huffman compression and decompression.
//!
//! Compression concatenates the code of every input symbol. Decompression
//! walks the tree one bit at a time (`0` left, `1` right), emitting a symbol
//! at each leaf and restarting from the root.
//!
//! # Single-symbol trees
//!
//! A tree that is a single leaf codes its symbol as `0`, so each `0` bit
//! decodes to one occurrence. An *empty* stream decoded with such a tree
//! yields the symbol repeated by the leaf's frequency: the frequency doubles
//! as the original occurrence count. This only applies when the root itself
//! is a leaf; an empty stream decoded with any larger tree is empty.

use crate::code_table::CodeTable;
use crate::frequency::FrequencyTable;
use crate::ratio::{CompressionStats, RatioConfig};
use crate::tree::{HuffmanTree, Node};
use oxibit_core::error::{OxiBitError, Result};
use oxibit_core::{BitString, Symbol};

/// Compress `data` with a code table.
///
/// Fails with `InvalidInput` on empty data or an empty table, and with
/// `MissingCode` when a symbol has no code.
pub fn compress<S: Symbol>(data: &[S], codes: &CodeTable<S>) -> Result<BitString> {
    if data.is_empty() {
        return Err(OxiBitError::invalid_input("no data to compress"));
    }
    if codes.is_empty() {
        return Err(OxiBitError::invalid_input("code table is empty"));
    }

    let mut output = BitString::with_capacity(data.len() * codes.max_code_length());
    for symbol in data {
        let code = codes
            .get(symbol)
            .ok_or_else(|| OxiBitError::missing_code(symbol))?;
        output.extend_from(code);
    }

    log::debug!(
        "Compressed {} symbols into {} bits",
        data.len(),
        output.len()
    );
    Ok(output)
}

/// Decompress a stream produced with the codes of `tree`.
pub fn decompress<S: Symbol>(compressed: &BitString, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    let root = tree.root();

    let output = if root.is_leaf() {
        decompress_single_leaf(compressed, root)?
    } else {
        walk(compressed, root)?
    };

    log::debug!(
        "Decompressed {} bits into {} symbols",
        compressed.len(),
        output.len()
    );
    Ok(output)
}

fn decompress_single_leaf<S: Symbol>(compressed: &BitString, leaf: &Node<S>) -> Result<Vec<S>> {
    let symbol = leaf
        .value
        .ok_or_else(|| OxiBitError::malformed_tree("leaf node without a symbol"))?;

    if compressed.is_empty() {
        let count = usize::try_from(leaf.frequency)
            .map_err(|_| OxiBitError::invalid_input("leaf frequency exceeds addressable size"))?;
        let mut output = Vec::new();
        output.try_reserve_exact(count).map_err(|_| {
            OxiBitError::invalid_input(format!(
                "cannot allocate {count} symbols for a single-leaf tree"
            ))
        })?;
        output.resize(count, symbol);
        return Ok(output);
    }

    compressed
        .iter()
        .zip(0u64..)
        .map(|(bit, position)| {
            if bit {
                Err(OxiBitError::invalid_code(position))
            } else {
                Ok(symbol)
            }
        })
        .collect()
}

fn walk<S: Symbol>(compressed: &BitString, root: &Node<S>) -> Result<Vec<S>> {
    let mut output = Vec::new();
    let mut node = root;
    let mut in_code = false;

    for (bit, position) in compressed.iter().zip(0u64..) {
        let next = if bit {
            node.right.as_deref()
        } else {
            node.left.as_deref()
        };
        node = next.ok_or_else(|| OxiBitError::invalid_code(position))?;

        if node.is_leaf() {
            let symbol = node
                .value
                .ok_or_else(|| OxiBitError::malformed_tree("leaf node without a symbol"))?;
            output.push(symbol);
            node = root;
            in_code = false;
        } else {
            in_code = true;
        }
    }

    if in_code {
        return Err(OxiBitError::truncated(compressed.len() as u64));
    }
    Ok(output)
}

/// A Huffman coder bound to one frequency distribution.
///
/// Bundles the frequency table, tree and code table so a caller can encode,
/// decode and measure without threading the pieces through by hand.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S: Symbol> {
    frequencies: FrequencyTable<S>,
    tree: HuffmanTree<S>,
    codes: CodeTable<S>,
}

impl<S: Symbol> HuffmanCodec<S> {
    /// Build a codec from the symbol distribution of `data`.
    pub fn from_data(data: &[S]) -> Result<Self> {
        Self::from_table(FrequencyTable::build(data)?)
    }

    /// Build a codec from a frequency table.
    pub fn from_table(frequencies: FrequencyTable<S>) -> Result<Self> {
        let tree = HuffmanTree::build(&frequencies)?;
        let codes = CodeTable::derive(tree.root())?;
        Ok(Self {
            frequencies,
            tree,
            codes,
        })
    }

    /// Compress `data`.
    pub fn encode(&self, data: &[S]) -> Result<BitString> {
        compress(data, &self.codes)
    }

    /// Decompress `compressed`.
    pub fn decode(&self, compressed: &BitString) -> Result<Vec<S>> {
        decompress(compressed, &self.tree)
    }

    /// Measure a compression run at the default byte width.
    pub fn stats(&self, original: &[S], compressed: &BitString) -> Result<CompressionStats> {
        self.stats_with(original, compressed, RatioConfig::default())
    }

    /// Measure a compression run at an explicit symbol width.
    pub fn stats_with(
        &self,
        original: &[S],
        compressed: &BitString,
        config: RatioConfig,
    ) -> Result<CompressionStats> {
        CompressionStats::measure(original, compressed, &self.frequencies, &self.codes, config)
    }

    /// The frequency table.
    pub fn frequencies(&self) -> &FrequencyTable<S> {
        &self.frequencies
    }

    /// The decoding tree.
    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    /// The code table.
    pub fn code_table(&self) -> &CodeTable<S> {
        &self.codes
    }
}

/// Compress `data` with a tree built from its own distribution.
///
/// Returns the stream and the tree needed to decode it.
pub fn encode_huffman<S: Symbol>(data: &[S]) -> Result<(BitString, HuffmanTree<S>)> {
    let codec = HuffmanCodec::from_data(data)?;
    let compressed = codec.encode(data)?;
    Ok((compressed, codec.tree))
}

/// Decompress a stream produced by [`encode_huffman`].
pub fn decode_huffman<S: Symbol>(compressed: &BitString, tree: &HuffmanTree<S>) -> Result<Vec<S>> {
    decompress(compressed, tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_roundtrip_text() {
        let data = chars("she sells sea shells by the sea shore");
        let codec = HuffmanCodec::from_data(&data).unwrap();
        let compressed = codec.encode(&data).unwrap();
        assert_eq!(codec.decode(&compressed).unwrap(), data);
    }

    #[test]
    fn test_known_stream() {
        let data = chars("abcc");
        let codec = HuffmanCodec::from_data(&data).unwrap();
        let compressed = codec.encode(&data).unwrap();
        // a=10 b=11 c=0
        assert_eq!(compressed.to_string(), "101100");
    }

    #[test]
    fn test_compress_empty_data() {
        let codec = HuffmanCodec::from_data(b"ab").unwrap();
        let err = compress(&[], codec.code_table()).unwrap_err();
        assert!(matches!(err, OxiBitError::InvalidInput { .. }));
    }

    #[test]
    fn test_compress_missing_symbol() {
        let codec = HuffmanCodec::from_data(b"ab").unwrap();
        let err = codec.encode(b"abc").unwrap_err();
        assert_eq!(err, OxiBitError::missing_code(&b'c'));
    }

    #[test]
    fn test_single_symbol_roundtrip() {
        let data = b"aaaaaaa";
        let codec = HuffmanCodec::from_data(data).unwrap();
        let compressed = codec.encode(data).unwrap();
        assert_eq!(compressed.to_string(), "0000000");
        assert_eq!(codec.decode(&compressed).unwrap(), data.to_vec());
    }

    #[test]
    fn test_single_leaf_empty_stream_repeats_frequency() {
        // Special case: only a root leaf expands an empty stream.
        let tree = HuffmanTree::from_root(Node::leaf('x', 5));
        let output = decompress(&BitString::new(), &tree).unwrap();
        assert_eq!(output, vec!['x'; 5]);
    }

    #[test]
    fn test_single_leaf_huge_frequency_is_an_error() {
        let tree = HuffmanTree::from_root(Node::leaf(1u64, u64::MAX));
        let err = decompress(&BitString::new(), &tree).unwrap_err();
        assert!(matches!(err, OxiBitError::InvalidInput { .. }));
    }

    #[test]
    fn test_multi_leaf_empty_stream_is_empty() {
        let codec = HuffmanCodec::from_data(b"aab").unwrap();
        assert!(codec.decode(&BitString::new()).unwrap().is_empty());
    }

    #[test]
    fn test_single_leaf_rejects_one_bits() {
        let tree = HuffmanTree::from_root(Node::leaf('x', 2));
        let stream: BitString = "001".parse().unwrap();
        let err = decompress(&stream, &tree).unwrap_err();
        assert_eq!(err, OxiBitError::invalid_code(2));
    }

    #[test]
    fn test_truncated_stream() {
        let codec = HuffmanCodec::from_data(&chars("abcc")).unwrap();
        // "1" starts the code for a or b but never finishes it.
        let stream: BitString = "01".parse().unwrap();
        let err = codec.decode(&stream).unwrap_err();
        assert_eq!(err, OxiBitError::truncated(2));
    }

    #[test]
    fn test_missing_child_during_walk() {
        let root = Node {
            value: None,
            frequency: 1,
            left: Some(Box::new(Node::leaf('a', 1))),
            right: None,
        };
        let tree = HuffmanTree::from_root(root);
        let stream: BitString = "01".parse().unwrap();
        let err = decompress(&stream, &tree).unwrap_err();
        assert_eq!(err, OxiBitError::invalid_code(1));
    }

    #[test]
    fn test_encode_decode_helpers() {
        let data = b"hello huffman";
        let (compressed, tree) = encode_huffman(data).unwrap();
        assert_eq!(decode_huffman(&compressed, &tree).unwrap(), data.to_vec());
    }

    #[test]
    fn test_stats() {
        let data = chars("aaaaabbbbcccddee");
        let codec = HuffmanCodec::from_data(&data).unwrap();
        let compressed = codec.encode(&data).unwrap();
        let stats = codec.stats(&data, &compressed).unwrap();

        assert_eq!(stats.symbols, 16);
        assert_eq!(stats.distinct_symbols, 5);
        assert_eq!(stats.original_bits, 128);
        assert_eq!(stats.compressed_bits, 36);
        assert!(stats.ratio > 1.0);
        assert!((stats.average_code_length - 2.25).abs() < 1e-12);
    }
}
