//! Huffman tree construction.
//!
//! The tree is built greedily: every symbol starts as a leaf, and the two
//! lowest-frequency nodes are merged until a single root remains.
//!
//! # Tie-break
//!
//! Nodes are ordered by `(frequency, sequence)`. Leaves receive sequence
//! numbers in the frequency table's first-encounter order and every merged
//! node takes the next free number, so among equal frequencies the older
//! node is selected first. The first node popped becomes the left (`0`)
//! child, the second the right (`1`) child.

use crate::frequency::FrequencyTable;
use oxibit_core::Symbol;
use oxibit_core::error::{OxiBitError, Result};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A node of a Huffman tree.
///
/// Leaves carry a symbol and no children. Internal nodes built by
/// [`HuffmanTree::build`] carry no symbol and exactly two children, with a
/// frequency equal to the sum of theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S> {
    /// Symbol, present on leaves only.
    pub value: Option<S>,
    /// Leaf: symbol count. Internal: sum of the children.
    pub frequency: u64,
    /// Child reached by a `0` bit.
    pub left: Option<Box<Node<S>>>,
    /// Child reached by a `1` bit.
    pub right: Option<Box<Node<S>>>,
}

impl<S> Node<S> {
    /// Create a leaf.
    pub fn leaf(value: S, frequency: u64) -> Self {
        Self {
            value: Some(value),
            frequency,
            left: None,
            right: None,
        }
    }

    /// Create an internal node over two subtrees.
    pub fn internal(left: Node<S>, right: Node<S>) -> Self {
        Self {
            value: None,
            frequency: left.frequency.saturating_add(right.frequency),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Check whether this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A node waiting in the merge queue.
struct Pending<S> {
    frequency: u64,
    sequence: u64,
    node: Node<S>,
}

impl<S> PartialEq for Pending<S> {
    fn eq(&self, other: &Self) -> bool {
        self.frequency == other.frequency && self.sequence == other.sequence
    }
}

impl<S> Eq for Pending<S> {}

impl<S> PartialOrd for Pending<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Pending<S> {
    // Reversed: BinaryHeap is a max-heap and we want the smallest first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .frequency
            .cmp(&self.frequency)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// A binary prefix-code tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: Node<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Build the tree for a frequency table.
    ///
    /// A table with a single symbol yields a single-leaf tree. Fails with
    /// `InvalidInput` for an empty table.
    pub fn build(table: &FrequencyTable<S>) -> Result<Self> {
        if table.is_empty() {
            return Err(OxiBitError::invalid_input(
                "cannot build a Huffman tree from an empty frequency table",
            ));
        }

        let mut heap: BinaryHeap<Pending<S>> = table
            .iter()
            .zip(0u64..)
            .map(|((symbol, count), sequence)| Pending {
                frequency: count,
                sequence,
                node: Node::leaf(symbol, count),
            })
            .collect();
        let mut next_sequence = heap.len() as u64;

        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.pop(), heap.pop()) else {
                break;
            };
            log::trace!(
                "Merging nodes #{} ({}) and #{} ({})",
                left.sequence,
                left.frequency,
                right.sequence,
                right.frequency
            );
            let node = Node::internal(left.node, right.node);
            heap.push(Pending {
                frequency: node.frequency,
                sequence: next_sequence,
                node,
            });
            next_sequence += 1;
        }

        let root = heap
            .pop()
            .map(|pending| pending.node)
            .ok_or_else(|| OxiBitError::invalid_input("frequency table has no symbols"))?;

        let tree = Self { root };
        log::debug!(
            "Built Huffman tree: {} leaves, depth {}, total frequency {}",
            tree.leaf_count(),
            tree.depth(),
            tree.total()
        );
        Ok(tree)
    }
}

impl<S> HuffmanTree<S> {
    /// Wrap an externally built root.
    ///
    /// The structure is not validated here; traversals report
    /// `MalformedTree` when they hit a violation.
    pub fn from_root(root: Node<S>) -> Self {
        Self { root }
    }

    /// The root node.
    pub fn root(&self) -> &Node<S> {
        &self.root
    }

    /// Consume the tree and return its root.
    pub fn into_root(self) -> Node<S> {
        self.root
    }

    /// Root frequency (the encoded input length for built trees).
    pub fn total(&self) -> u64 {
        self.root.frequency
    }

    /// Check whether the whole tree is a single leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                count += 1;
            }
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }
        count
    }

    /// Length of the longest root-to-leaf path (0 for a single leaf).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        max_depth
    }
}
