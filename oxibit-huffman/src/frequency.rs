//! Symbol frequency counting.
//!
//! A [`FrequencyTable`] maps every symbol seen in the input to its number of
//! occurrences. Entries keep first-encounter order, which the tree builder
//! uses as its deterministic tie-break.

use oxibit_core::Symbol;
use oxibit_core::error::{OxiBitError, Result};
use std::collections::HashMap;

/// Occurrence counts for the symbols of an input sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    /// (symbol, count) in first-encounter order.
    entries: Vec<(S, u64)>,
    /// Symbol to position in `entries`.
    index: HashMap<S, usize>,
    /// Sum of all counts.
    total: u64,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Count the symbols of `data`.
    ///
    /// Fails with `InvalidInput` when `data` is empty.
    pub fn build(data: &[S]) -> Result<Self> {
        if data.is_empty() {
            return Err(OxiBitError::invalid_input(
                "cannot build a frequency table from empty data",
            ));
        }

        let table = Self::count(data);
        log::debug!(
            "Counted {} symbols, {} distinct",
            table.total,
            table.entries.len()
        );
        Ok(table)
    }

    /// Build a table from precomputed counts.
    ///
    /// Repeated symbols accumulate. Zero counts are rejected, as is an empty
    /// iterator.
    pub fn from_counts<I>(counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u64)>,
    {
        let mut table = Self::empty();
        for (symbol, count) in counts {
            if count == 0 {
                return Err(OxiBitError::invalid_input(format!(
                    "symbol {symbol:?} has a zero count"
                )));
            }
            table.add(symbol, count)?;
        }

        if table.is_empty() {
            return Err(OxiBitError::invalid_input("frequency table has no symbols"));
        }
        Ok(table)
    }

    fn empty() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
            total: 0,
        }
    }

    fn count(data: &[S]) -> Self {
        let mut table = Self::empty();
        for &symbol in data {
            match table.index.get(&symbol) {
                Some(&i) => table.entries[i].1 += 1,
                None => {
                    table.index.insert(symbol, table.entries.len());
                    table.entries.push((symbol, 1));
                }
            }
        }
        table.total = data.len() as u64;
        table
    }

    fn add(&mut self, symbol: S, count: u64) -> Result<()> {
        let overflow = || OxiBitError::invalid_input("symbol counts overflow u64");
        self.total = self.total.checked_add(count).ok_or_else(overflow)?;
        match self.index.get(&symbol) {
            Some(&i) => {
                self.entries[i].1 = self.entries[i].1.checked_add(count).ok_or_else(overflow)?;
            }
            None => {
                self.index.insert(symbol, self.entries.len());
                self.entries.push((symbol, count));
            }
        }
        Ok(())
    }

    /// Count for `symbol`, if it occurs.
    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (the input length).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate over `(symbol, count)` in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (S, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Symbols in first-encounter order.
    pub fn symbols(&self) -> impl Iterator<Item = S> + '_ {
        self.entries.iter().map(|&(symbol, _)| symbol)
    }

    /// Shannon entropy of the distribution in bits per symbol.
    ///
    /// This is the lower bound on the average length of any prefix code.
    pub fn entropy(&self) -> f64 {
        let total = self.total as f64;
        self.entries
            .iter()
            .map(|&(_, count)| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

#[cfg(feature = "parallel")]
impl<S: Symbol + Send + Sync> FrequencyTable<S> {
    /// Input chunk size for parallel counting.
    const PARALLEL_CHUNK: usize = 64 * 1024;

    /// Count the symbols of `data` on the rayon thread pool.
    ///
    /// Produces the same table as [`FrequencyTable::build`], including
    /// first-encounter order.
    pub fn build_parallel(data: &[S]) -> Result<Self> {
        use rayon::prelude::*;

        if data.is_empty() {
            return Err(OxiBitError::invalid_input(
                "cannot build a frequency table from empty data",
            ));
        }

        data.par_chunks(Self::PARALLEL_CHUNK)
            .map(|chunk| Ok::<_, OxiBitError>(Self::count(chunk)))
            .try_reduce(Self::empty, |mut left, right| {
                for (symbol, count) in right.entries {
                    left.add(symbol, count)?;
                }
                Ok(left)
            })
    }
}
