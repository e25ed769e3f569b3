use std::collections::{BTreeMap, BTreeSet};

pub use std::collections::btree_map as ordered_map;
pub use std::collections::btree_set as ordered_set;

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Type alias for sets whose iteration order is determined by the ordering of the elements.
pub type OrderedSet<S> = BTreeSet<S>;
/// Type alias for maps whose iteration order is determined by the ordering of the keys.
pub type OrderedMap<K, V> = BTreeMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;

/// Returns the elements of `0..width` whose bit is set in `mask`, in increasing order. This is
/// how a subset of `{0, ..., width - 1}` is decoded from its index in the powerset.
pub fn decode_subset(mask: u64, width: usize) -> impl Iterator<Item = usize> {
    (0..width).filter(move |i| mask & (1 << i) != 0)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    #[test]
    fn decoding_subsets() {
        assert_eq!(super::decode_subset(0, 3).collect_vec(), Vec::<usize>::new());
        assert_eq!(super::decode_subset(0b101, 3).collect_vec(), vec![0, 2]);
        assert_eq!(super::decode_subset(0b111, 2).collect_vec(), vec![0, 1]);
    }
}
