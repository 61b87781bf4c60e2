//! General library tests.

#![cfg(test)]

use crate::prelude::*;
use concat_idents::concat_idents;
use std::collections::BTreeSet;

/// Creates analogous tests for every element type implementing [`Suite`].
macro_rules! test {
    ($($name: ident),*) => {
        $(
            concat_idents!(fn_name = int, $name {
                #[test]
                fn fn_name() {
                    <i32 as Suite>::$name();
                }
            });

            concat_idents!(fn_name = uint, $name {
                #[test]
                fn fn_name() {
                    <u64 as Suite>::$name();
                }
            });

            concat_idents!(fn_name = string, $name {
                #[test]
                fn fn_name() {
                    <String as Suite>::$name();
                }
            });
        )*
    };
}

/// Element types to run the general tests on.
trait Suite: Ord + Clone + Debug + Sized {
    /// An injective, order-preserving map from naturals into the element type.
    fn sample(n: u32) -> Self;

    /// Builds a set by adding the samples for the given naturals, in order.
    fn build<I: IntoIterator<Item = u32>>(ns: I) -> BinaryArraySet<Self> {
        let mut set = BinaryArraySet::new();
        for n in ns {
            set.add(Self::sample(n));
        }
        set
    }

    /// A scrambled sequence of naturals, with repeats.
    fn scrambled(len: u32) -> impl Iterator<Item = u32> {
        (0..len).map(|i| (i * 37 + 11) % 101)
    }

    /// Test [`BinaryArraySet::new`].
    fn _empty() {
        let set = BinaryArraySet::<Self>::new();
        assert_eq!(set.len(), 0);
        assert!(set.is_empty());
        assert_eq!(set.level_count(), 0);
        assert!(!set.contains(&Self::sample(0)));
        assert_eq!(set.iter().next(), None);
        set.check_structure();
    }

    /// The worked example: add 5, 3, 8, 3, 1.
    fn _scenario() {
        let set = Self::build([5, 3, 8, 3, 1]);
        assert_eq!(set.len(), 4);
        assert!(set.contains(&Self::sample(3)));
        assert!(!set.contains(&Self::sample(9)));
        set.check_structure();

        let found: BTreeSet<_> = set.iter().cloned().collect();
        let expected: BTreeSet<_> = [1, 3, 5, 8].into_iter().map(Self::sample).collect();
        assert_eq!(found, expected);
        assert_eq!(set.iter().count(), 4);
    }

    /// Test that [`BinaryArraySet::add`] is idempotent.
    fn _idempotent() {
        let mut set = Self::build(0..13);
        let before = set.clone();
        let layout = format!("{set:?}");

        for n in 0..13 {
            assert!(!set.add(Self::sample(n)), "sample {n} was added twice");
        }
        assert_eq!(set.len(), 13);
        assert_eq!(set, before);
        assert_eq!(format!("{set:?}"), layout, "a repeated add changed the layout");
        set.check_structure();
    }

    /// Test a full carry cascade.
    fn _cascade() {
        let mut set = Self::build(1..=7);
        assert_eq!(set.level_mask().as_bitslice(), bits![1, 1, 1]);
        set.check_structure();

        assert!(set.add(Self::sample(8)));
        assert_eq!(set.len(), 8);
        assert_eq!(set.level_mask().as_bitslice(), bits![0, 0, 0, 1]);
        set.check_structure();

        let top = set.levels().last().flatten().expect("level 3 should be present");
        let expected: Vec<_> = (1..=8).map(Self::sample).collect();
        assert_eq!(top, expected.as_slice());
    }

    /// The present levels spell out the length in binary after every insertion.
    fn _levels() {
        let mut set = BinaryArraySet::new();
        for n in 0..100 {
            set.add(Self::sample(n));
            let len = set.len();
            for (i, level) in set.levels().enumerate() {
                let bit = (len >> i) & 1 == 1;
                assert_eq!(level.is_some(), bit, "level {i} mismatch at length {len}");
                if let Some(block) = level {
                    assert_eq!(block.len(), 1 << i);
                }
            }
        }
    }

    /// Test [`BinaryArraySet::len`] and [`BinaryArraySet::contains`] against a [`BTreeSet`].
    fn _membership() {
        let mut set = BinaryArraySet::new();
        let mut model = BTreeSet::new();
        for n in Self::scrambled(300) {
            assert_eq!(set.add(Self::sample(n)), model.insert(n));
            assert_eq!(set.len(), model.len());
        }
        set.check_structure();

        for n in 0..120 {
            assert_eq!(
                set.contains(&Self::sample(n)),
                model.contains(&n),
                "membership fail at {n}"
            );
        }
    }

    /// Iteration yields exactly the distinct values added.
    fn _roundtrip() {
        let set = Self::build(Self::scrambled(200));
        let expected: BTreeSet<_> = Self::scrambled(200).map(Self::sample).collect();

        let borrowed: Vec<_> = set.iter().cloned().collect();
        assert_eq!(borrowed.len(), expected.len(), "iteration repeated a value");
        assert_eq!(borrowed.iter().cloned().collect::<BTreeSet<_>>(), expected);

        let owned: Vec<_> = set.clone().into_iter().collect();
        assert_eq!(owned, borrowed, "owned and borrowed iteration disagree");

        let sorted: Vec<_> = expected.into_iter().collect();
        assert_eq!(set.into_sorted_vec(), sorted);
    }

    /// Iteration goes through levels in order, ascending within each.
    fn _order() {
        let set = Self::build(Self::scrambled(45));
        let grouped: Vec<_> = set.levels().flatten().flatten().collect();
        let iterated: Vec<_> = set.iter().collect();
        assert_eq!(iterated, grouped);
    }

    /// Every call to [`BinaryArraySet::iter`] starts over, and reports its length exactly.
    fn _restart() {
        let mut set = Self::build(0..11);
        let mut iter = set.iter();
        assert_eq!(iter.len(), 11);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 9);
        assert_eq!(iter.clone().count(), 9);
        assert_eq!(set.iter().len(), 11);

        set.add(Self::sample(11));
        assert_eq!(set.iter().count(), 12);

        let mut iter = set.iter();
        for _ in 0..12 {
            assert!(iter.next().is_some());
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    /// Test [`BinaryArraySet::clear`].
    fn _clear() {
        let mut set = Self::build(0..20);
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.level_count(), 0);
        assert!(!set.contains(&Self::sample(3)));
        set.check_structure();

        set.extend((0..5).map(Self::sample));
        assert_eq!(set.len(), 5);
        set.check_structure();
    }

    /// Sets compare equal regardless of insertion order.
    fn _eq() {
        let fst = Self::build(0..30);
        let snd = Self::build((0..30).rev());
        let trd = Self::build(1..31);
        assert_eq!(fst, snd);
        assert_ne!(fst, trd);
        assert_ne!(fst, Self::build(0..29));

        let collected: BinaryArraySet<_> = (0..30).chain(0..30).map(Self::sample).collect();
        assert_eq!(collected, fst);
        collected.check_structure();
    }
}

impl Suite for i32 {
    fn sample(n: u32) -> Self {
        i32::try_from(n).unwrap() * 3 - 100
    }
}

impl Suite for u64 {
    fn sample(n: u32) -> Self {
        u64::from(n) << 20
    }
}

impl Suite for String {
    fn sample(n: u32) -> Self {
        format!("{n:06}")
    }
}

test!(
    _empty, _scenario, _idempotent, _cascade, _levels, _membership, _roundtrip, _order, _restart,
    _clear, _eq
);

#[test]
fn display() {
    let mut set = BinaryArraySet::<i32>::new();
    assert_eq!(set.to_string(), "{}");

    set.extend([5, 3, 8, 1, 7]);
    assert_eq!(set.to_string(), "{7, 1, 3, 5, 8}");
    assert_eq!(format!("{set:?}"), "[(7) _ (1 3 5 8)]");
}
