//! Algorithms on individual blocks.
//!
//! A block is the ascending, duplicate-free array stored at some level of a
//! [`BinaryArraySet`]. The functions here don't know about levels: they work on any sorted slice or
//! vector.

use crate::prelude::*;

/// Binary search over an ascending slice.
///
/// This is the usual three-way search: we narrow the range `start..end` until we either hit an
/// equal element or the range is empty.
pub(crate) fn search<T: Ord>(block: &[T], value: &T) -> bool {
    let mut start = 0;
    let mut end = block.len();

    while start < end {
        let mid = start + (end - start) / 2;
        match value.cmp(&block[mid]) {
            Ordering::Less => end = mid,
            Ordering::Greater => start = mid + 1,
            Ordering::Equal => return true,
        }
    }

    false
}

/// Merges two ascending vectors into a single ascending vector.
///
/// On ties, the element from `fst` goes first. Blocks in a set never tie, but the validator merges
/// `(value, level)` pairs and relies on equal values ending up adjacent.
pub(crate) fn merge<T: Ord>(fst: Vec<T>, snd: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(fst.len() + snd.len());
    let mut fst = fst.into_iter().peekable();
    let mut snd = snd.into_iter().peekable();

    loop {
        let take_fst = match (fst.peek(), snd.peek()) {
            (Some(x), Some(y)) => x <= y,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => return out,
        };

        // The peek above guarantees this is `Some`.
        let next = if take_fst { fst.next() } else { snd.next() };
        out.extend(next);
    }
}

/// Returns the index of the first element that is not strictly greater than its predecessor.
pub(crate) fn first_unordered<T: Ord>(block: &[T]) -> Option<usize> {
    block
        .windows(2)
        .position(|pair| pair[0] >= pair[1])
        .map(|i| i + 1)
}
