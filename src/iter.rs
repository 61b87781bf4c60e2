//! Iterators over a [`BinaryArraySet`].
//!
//! Elements come out grouped by level: ascending within each block, with blocks visited from the
//! lowest level up. This is **not** a sorted order for the whole set, since a recently merged
//! higher level can hold values smaller than those in a lower level. Use
//! [`BinaryArraySet::into_sorted_vec`] if a sorted order is needed.
//!
//! The borrowing [`Iter`] is a view into the set's blocks and is not fail-fast. It can't observe
//! mutation anyway, since the set is borrowed for as long as the iterator lives.

use crate::{prelude::*, INLINE_LEVELS};
use std::iter::FusedIterator;

/// Index of the first present level at or after `index`, or `levels.len()` if there's none.
fn skip_absent<T>(levels: &[Option<Vec<T>>], mut index: usize) -> usize {
    while index < levels.len() && levels[index].is_none() {
        index += 1;
    }
    index
}

/// Borrowing iterator over a [`BinaryArraySet`], created by [`BinaryArraySet::iter`].
pub struct Iter<'a, T> {
    /// The blocks of the set.
    levels: &'a [Option<Vec<T>>],
    /// Current level. Either present or past the end.
    index: usize,
    /// Position within the current block.
    subindex: usize,
    /// Elements not yet returned.
    remaining: usize,
}

// A derive would require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T> Iter<'a, T> {
    /// Positions a new iterator on the first present level. Takes O(log n) time.
    fn new(set: &'a BinaryArraySet<T>) -> Self {
        Self {
            levels: &set.levels,
            index: skip_absent(&set.levels, 0),
            subindex: 0,
            remaining: set.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Amortized O(1), or O(log n) when skipping over empty levels.
    fn next(&mut self) -> Option<&'a T> {
        let levels = self.levels;
        let block = levels.get(self.index)?.as_deref()?;
        let value = block.get(self.subindex)?;

        self.subindex += 1;
        if self.subindex == block.len() {
            self.subindex = 0;
            self.index = skip_absent(levels, self.index + 1);
        }

        self.remaining = self.remaining.saturating_sub(1);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`BinaryArraySet`], in the same order as [`Iter`].
pub struct IntoIter<T> {
    /// The levels we haven't started on.
    levels: smallvec::IntoIter<[Option<Vec<T>>; INLINE_LEVELS]>,
    /// The rest of the current block.
    block: std::vec::IntoIter<T>,
    /// Elements not yet returned.
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(value) = self.block.next() {
                self.remaining -= 1;
                return Some(value);
            }

            self.block = self.levels.by_ref().flatten().next()?.into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// The blocks of a [`BinaryArraySet`] by level, created by [`BinaryArraySet::levels`].
///
/// Yields `None` for every empty level.
pub struct Levels<'a, T>(std::slice::Iter<'a, Option<Vec<T>>>);

impl<T> Clone for Levels<'_, T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<'a, T> Iterator for Levels<'a, T> {
    type Item = Option<&'a [T]>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Option::as_deref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Levels<'_, T> {}
impl<T> DoubleEndedIterator for Levels<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(Option::as_deref)
    }
}

// -------------------- Entry points -------------------- //

impl<T> BinaryArraySet<T> {
    /// Iterate over the elements of the set, grouped by level.
    ///
    /// Each call starts a fresh traversal of the current contents.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterate over the levels of the set, from the lowest.
    pub fn levels(&self) -> Levels<'_, T> {
        Levels(self.levels.iter())
    }
}

impl<'a, T> IntoIterator for &'a BinaryArraySet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> IntoIterator for BinaryArraySet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            levels: self.levels.into_iter(),
            block: Vec::new().into_iter(),
            remaining: self.len,
        }
    }
}
