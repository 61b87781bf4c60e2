//! Structural validation for [`BinaryArraySet`].
//!
//! None of this runs during normal operation. It exists so that tests can assert that the
//! insertion engine never breaks the invariants of the set.

use crate::{block, prelude::*};

/// A broken invariant in a [`BinaryArraySet`].
///
/// This always indicates a bug, either in this crate or in the [`Ord`] implementation of the
/// element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum StructureError {
    /// A present block has the wrong length for its level.
    #[display(fmt = "level {} has {} elements, expected {}", level, found, expected)]
    BlockSize {
        /// The level of the block.
        level: usize,
        /// The length `2^level`.
        expected: usize,
        /// The actual length.
        found: usize,
    },

    /// A block is not strictly ascending.
    #[display(fmt = "level {} is out of order at index {}", level, index)]
    Unordered {
        /// The level of the block.
        level: usize,
        /// The first index whose element isn't greater than the one before it.
        index: usize,
    },

    /// Two levels hold equal values.
    #[display(fmt = "levels {} and {} share a value", first, second)]
    Duplicate {
        /// The lower of the levels.
        first: usize,
        /// The higher of the levels.
        second: usize,
    },

    /// The stored length isn't the number of elements in the blocks.
    #[display(fmt = "length is {}, but the blocks hold {} elements", found, expected)]
    Length {
        /// The sum of the block lengths.
        expected: usize,
        /// The stored length.
        found: usize,
    },

    /// The present levels don't spell out the length in binary.
    #[display(fmt = "occupied levels don't match length {:#b}", length)]
    Occupancy {
        /// The stored length.
        length: usize,
    },
}

impl std::error::Error for StructureError {}

impl<T: Ord> BinaryArraySet<T> {
    /// Verifies the invariants of the set.
    ///
    /// This takes O(n) time. See [`BinaryArraySet::check_structure`] for the panicking version.
    ///
    /// ## Errors
    ///
    /// Returns the first broken invariant found. Blocks are checked one by one first, followed by
    /// the length, and finally duplicates across levels.
    pub fn validate(&self) -> Result<(), StructureError> {
        let mut sum = 0;
        for (level, block) in self.levels().enumerate() {
            let Some(block) = block else { continue };

            let expected = 1 << level;
            if block.len() != expected {
                return Err(StructureError::BlockSize {
                    level,
                    expected,
                    found: block.len(),
                });
            }
            if let Some(index) = block::first_unordered(block) {
                return Err(StructureError::Unordered { level, index });
            }

            sum += expected;
        }

        if sum != self.len {
            return Err(StructureError::Length {
                expected: sum,
                found: self.len,
            });
        }

        // Given the sum matches, this only fails with trailing empty levels.
        let mask = self.level_mask();
        let bits = self.len.view_bits::<Lsb0>();
        let width = (usize::BITS - self.len.leading_zeros()) as usize;
        if mask.len() != width || mask.as_bitslice() != &bits[..width] {
            return Err(StructureError::Occupancy { length: self.len });
        }

        // Merge every level, tagging each value with its origin. Equal values end up adjacent.
        let mut merged: Vec<(&T, usize)> = Vec::with_capacity(self.len);
        for (level, block) in self.levels().enumerate() {
            if let Some(block) = block {
                merged = block::merge(merged, block.iter().map(|x| (x, level)).collect());
            }
        }
        for pair in merged.windows(2) {
            if pair[0].0 == pair[1].0 {
                return Err(StructureError::Duplicate {
                    first: pair[0].1,
                    second: pair[1].1,
                });
            }
        }

        Ok(())
    }

    /// Verifies the invariants of the set, for use in tests.
    ///
    /// ## Panics
    ///
    /// Panics if any invariant is broken. See [`BinaryArraySet::validate`].
    pub fn check_structure(&self) {
        if let Err(err) = self.validate() {
            panic!("binary array set is malformed: {err}");
        }
    }
}
