//! Prefix-code derivation.
//!
//! A [`CodeTable`] is read off a [`Node`] tree by recording the path from
//! the root to each leaf, `0` for a left edge and `1` for a right edge.
//! Since only leaves receive codes the result is prefix-free.

use crate::frequency::FrequencyTable;
use crate::tree::Node;
use oxibit_core::error::{OxiBitError, Result};
use oxibit_core::{BitString, Symbol};
use std::collections::HashMap;

/// Mapping from symbol to its non-empty code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, BitString>,
}

impl<S: Symbol> CodeTable<S> {
    /// Derive the code table for the tree rooted at `root`.
    ///
    /// A root that is itself a leaf receives the code `0`. A node with only
    /// one child is walked through that child. A childless node without a
    /// symbol, or a symbol found on two leaves, is reported as
    /// `MalformedTree`.
    pub fn derive(root: &Node<S>) -> Result<Self> {
        let mut codes = HashMap::new();
        let mut stack = vec![(root, BitString::new())];

        while let Some((node, path)) = stack.pop() {
            if node.is_leaf() {
                let symbol = node
                    .value
                    .ok_or_else(|| OxiBitError::malformed_tree("leaf node without a symbol"))?;
                let code = if path.is_empty() {
                    BitString::zeros(1)
                } else {
                    path
                };
                if codes.insert(symbol, code).is_some() {
                    return Err(OxiBitError::malformed_tree(format!(
                        "symbol {symbol:?} appears on more than one leaf"
                    )));
                }
                continue;
            }

            // Right first so the left subtree is visited first.
            if let Some(right) = node.right.as_deref() {
                let mut right_path = path.clone();
                right_path.push(true);
                stack.push((right, right_path));
            }
            if let Some(left) = node.left.as_deref() {
                let mut left_path = path;
                left_path.push(false);
                stack.push((left, left_path));
            }
        }

        log::debug!("Derived {} codes", codes.len());
        Ok(Self { codes })
    }

    /// Code for `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&BitString> {
        self.codes.get(symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check whether the table has no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate over `(symbol, code)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &BitString)> {
        self.codes.iter()
    }

    /// Length of the longest code.
    pub fn max_code_length(&self) -> usize {
        self.codes.values().map(BitString::len).max().unwrap_or(0)
    }

    /// Expected code length in bits per symbol under `frequencies`.
    pub fn average_code_length(&self, frequencies: &FrequencyTable<S>) -> Result<f64> {
        if frequencies.is_empty() {
            return Err(OxiBitError::invalid_input("frequency table has no symbols"));
        }

        let mut weighted_bits = 0u128;
        for (symbol, count) in frequencies.iter() {
            let code = self
                .get(&symbol)
                .ok_or_else(|| OxiBitError::missing_code(&symbol))?;
            weighted_bits += u128::from(count) * code.len() as u128;
        }
        Ok(weighted_bits as f64 / frequencies.total() as f64)
    }

    /// Check that no code is a prefix of another.
    ///
    /// Quadratic in the number of codes; meant for validation and tests.
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitString> = self.codes.values().collect();
        codes.iter().enumerate().all(|(i, a)| {
            codes
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !a.is_prefix_of(b))
        })
    }
}
