//! The symbol alphabet abstraction.

use std::fmt::Debug;
use std::hash::Hash;

/// An atomic unit of a coded alphabet.
///
/// Symbols are immutable values compared by equality. Any `Copy + Eq + Hash`
/// type qualifies, so bytes (`u8`), characters (`char`) and wider integer
/// alphabets all work through the blanket implementation.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}
