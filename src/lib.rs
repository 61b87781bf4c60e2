//! # Binary array sets
//!
//! A [`BinaryArraySet`] stores its elements in sorted blocks of sizes 1, 2, 4, 8, …, with a block
//! of size `2^i` present exactly when bit `i` of the element count is set. Insertion then behaves
//! like incrementing a binary counter, merging blocks the way a carry propagates.
//!
//! ```
//! use binary_array_set::prelude::*;
//!
//! let mut set = BinaryArraySet::new();
//! for x in [5, 3, 8, 3, 1] {
//!     set.add(x);
//! }
//!
//! assert_eq!(set.len(), 4);
//! assert!(set.contains(&3));
//! assert!(!set.contains(&9));
//! assert_eq!(set.into_sorted_vec(), [1, 3, 5, 8]);
//! ```
//!
//! | Operation | Cost |
//! |---|---|
//! | [`len`](BinaryArraySet::len), [`clear`](BinaryArraySet::clear) | O(1) |
//! | [`contains`](BinaryArraySet::contains) | O((log n)²) |
//! | [`add`](BinaryArraySet::add) | O((log n)²) for the duplicate check, amortized O(1) otherwise |
//! | [`iter`](BinaryArraySet::iter) | O(log n) to start, amortized O(1) per element |
//!
//! There is no removal.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

mod block;
pub mod check;
pub mod iter;
pub mod prelude;
pub mod set;
mod tests;

/// Number of levels stored without a heap allocation. Sets with up to 255 elements fit.
const INLINE_LEVELS: usize = 8;

/// Small vector, sized for the levels of a set.
type SmallVec<T> = smallvec::SmallVec<[T; INLINE_LEVELS]>;
