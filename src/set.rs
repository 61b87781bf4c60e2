//! The [`BinaryArraySet`] type.

use crate::{block, prelude::*};

/// A set stored as a sequence of sorted blocks whose sizes follow the binary representation of its
/// length.
///
/// Level `i` is either empty or holds an ascending block of exactly `2^i` elements. Inserting an
/// element works like incrementing a binary counter: a singleton block is carried upward, merging
/// with every occupied level it meets, until it lands on an empty one. This makes insertion
/// amortized O(1) on top of the O((log n)²) duplicate check, while membership is O((log n)²).
///
/// ## Invariants
///
/// - Every present block at level `i` has length `2^i` and is strictly ascending.
/// - No value appears twice, whether within a block or across blocks.
/// - The length equals the sum of the block lengths. Equivalently, level `i` is present exactly
///   when bit `i` of the length is set.
///
/// These can be verified through [`BinaryArraySet::validate`].
///
/// ## Panics in `Ord`
///
/// If the [`Ord`] implementation of `T` panics or is inconsistent during an insertion, the set may
/// be left in an unspecified state. It remains memory safe, but elements can be lost.
#[derive(Clone)]
pub struct BinaryArraySet<T> {
    /// The blocks for every level, indexed by level.
    pub(crate) levels: SmallVec<Option<Vec<T>>>,
    /// Total number of elements.
    pub(crate) len: usize,
}

// -------------------- Level store -------------------- //

impl<T> Default for BinaryArraySet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryArraySet<T> {
    /// Initializes an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            levels: SmallVec::new(),
            len: 0,
        }
    }

    /// Removes all elements from the set.
    pub fn clear(&mut self) {
        self.levels = SmallVec::new();
        self.len = 0;
    }

    /// Number of elements in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of level slots, present or not.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Which levels currently hold a block.
    ///
    /// For a well-formed set this spells out the length in binary, least significant bit first.
    #[must_use]
    pub fn level_mask(&self) -> BitVec {
        self.levels.iter().map(Option::is_some).collect()
    }
}

// -------------------- Membership and insertion -------------------- //

impl<T: Ord> BinaryArraySet<T> {
    /// Whether the set contains a value.
    ///
    /// Runs a binary search on every present level, for O((log n)²) time overall.
    pub fn contains(&self, value: &T) -> bool {
        self.levels
            .iter()
            .flatten()
            .any(|block| block::search(block, value))
    }

    /// Adds a value to the set. Returns whether the value was newly inserted.
    ///
    /// Adding a value that's already in the set does nothing. Otherwise, the value is carried
    /// upward through the levels:
    ///
    /// ```text
    /// before:  _    (4 8)  (1 6 7 9)                              len = 0b0110
    /// add 2:   (2)  (4 8)  (1 6 7 9)                              len = 0b0111
    /// add 5:   _    _      _          (1 2 4 5 6 7 8 9)           len = 0b1000
    /// ```
    ///
    /// A single insertion can take O(n) time, but over any sequence of insertions the merging
    /// costs amortized O(1) per element. The duplicate check, at O((log n)²), dominates.
    pub fn add(&mut self, value: T) -> bool {
        // Without this check we'd be building a multiset.
        if self.contains(&value) {
            return false;
        }

        let mut carry = vec![value];
        for slot in &mut self.levels {
            match slot.take() {
                None => {
                    *slot = Some(carry);
                    self.len += 1;
                    return true;
                }
                Some(block) => {
                    debug_assert_eq!(block.len(), carry.len());
                    carry = block::merge(block, carry);
                }
            }
        }

        // Every level was full.
        self.levels.push(Some(carry));
        self.len += 1;
        true
    }

    /// Consumes the set, returning its elements in ascending order.
    ///
    /// Blocks are merged from the lowest level upward. Each block is at least as long as all the
    /// blocks below it combined, so this takes O(n) time.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.levels.into_iter().flatten().fold(Vec::new(), block::merge)
    }
}

// -------------------- Basic traits -------------------- //

impl<T: Ord> Extend<T> for BinaryArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// Two sets are equal when they have the same elements, regardless of how they're laid out.
impl<T: Ord> PartialEq for BinaryArraySet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().all(|value| other.contains(value))
    }
}

impl<T: Ord> Eq for BinaryArraySet<T> {}

/// Writes the set as stored in memory, one group per level. Empty levels are written as `_`.
impl<T: Debug> Debug for BinaryArraySet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('[')?;
        for (i, level) in self.levels.iter().enumerate() {
            if i != 0 {
                f.write_char(' ')?;
            }

            match level {
                None => f.write_char('_')?,
                Some(block) => {
                    f.write_char('(')?;
                    for (j, value) in block.iter().enumerate() {
                        if j != 0 {
                            f.write_char(' ')?;
                        }
                        write!(f, "{value:?}")?;
                    }
                    f.write_char(')')?;
                }
            }
        }
        f.write_char(']')
    }
}

/// Displays the set in roster notation, in iteration order.
impl<T: Display> Display for BinaryArraySet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for value in iter {
            write!(f, ", {value}")?;
        }
        f.write_char('}')
    }
}
