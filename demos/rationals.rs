//! Collects the fractions m/n with 0 < m, n ≤ 6 into a set.
//!
//! Fractions are stored in lowest terms, so equal fractions like 2/4 and 3/6 are only stored once.
//! Pairs compare lexicographically, which isn't the order of the rationals they stand for, but a
//! [`BinaryArraySet`] only needs some total order.

use binary_array_set::prelude::*;

/// Reduces a fraction into lowest terms.
fn reduce(m: u64, n: u64) -> (u64, u64) {
    let g = gcd::binary_u64(m, n);
    (m / g, n / g)
}

fn main() {
    let mut set = BinaryArraySet::new();
    let mut total = 0;
    for m in 1..=6 {
        for n in 1..=6 {
            set.add(reduce(m, n));
            total += 1;
        }
    }

    println!("{total} fractions, {} distinct:", set.len());
    for (m, n) in set.into_sorted_vec() {
        println!("    {m}/{n}");
    }
}
