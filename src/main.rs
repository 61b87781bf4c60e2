//! Walks through the insertions of a small set, showing its levels after each one.

use binary_array_set::prelude::*;

fn main() {
    let mut set = BinaryArraySet::new();
    for x in [5, 3, 8, 3, 1, 7, 2, 6, 4] {
        let added = if set.add(x) { "added" } else { "kept " };
        println!("{added} {x}: {set:?}");
    }

    println!("\nset:    {set}\nsorted: {:?}", set.clone().into_sorted_vec());
    set.check_structure();
}
