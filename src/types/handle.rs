//! Typed table indices
//!
//! Palette and path references travel through the format as plain `u16`
//! positions. [`TableIndex<T>`] keeps the position together with the table
//! it points into, so a path index can never be looked up in the palette.

use std::fmt;
use std::marker::PhantomData;

/// A position in an append-only table of `T`.
///
/// An index is only a claim; it is validated once, when the program is built.
pub struct TableIndex<T> {
    value: u16,
    _table: PhantomData<fn() -> T>,
}

impl<T> TableIndex<T> {
    #[inline]
    pub const fn new(value: u16) -> Self {
        Self {
            value,
            _table: PhantomData,
        }
    }

    /// Get the raw position
    #[inline]
    pub const fn value(&self) -> u16 {
        self.value
    }

    #[inline]
    pub const fn as_usize(&self) -> usize {
        self.value as usize
    }

    /// Check the index against a table length
    #[inline]
    pub const fn is_within(&self, len: usize) -> bool {
        (self.value as usize) < len
    }
}

// Manual impls: derives would bound `T` itself.
impl<T> Clone for TableIndex<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TableIndex<T> {}

impl<T> PartialEq for TableIndex<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for TableIndex<T> {}

impl<T> fmt::Debug for TableIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TableIndex({})", self.value)
    }
}

impl<T> fmt::Display for TableIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.value)
    }
}

impl<T> From<u16> for TableIndex<T> {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}
