//! Every NFA with `n` states is determined by its initial state, its set of accepting states and,
//! for each state and symbol, the set of successors. Enumerating all of them is hopeless already
//! for small `n`, so [`automata_of_size`] only produces NFAs in a canonical form: the accepting
//! states form a suffix `{k, ..., n - 1}` of the states and the initial state is either `0` or `k`.
//! Up to a renaming of states, every NFA with at least one accepting state has this form.
//!
//! The transition tables are produced by counting through an index tuple, which holds for each
//! pair of state and symbol the index of its successor set in the powerset of `{0, ..., n - 1}`.
//! Only the automaton for the current tuple is materialized.

use std::iter::FusedIterator;

use itertools::Itertools;

use crate::prelude::*;

/// Initial state and accepting states that all automata of one block of the enumeration share.
type Base = (DefaultIdType, math::OrderedSet<DefaultIdType>);

/// Lazy iterator over NFAs of a fixed size, see [`automata_of_size`] and [`all_automata_of_size`].
/// It is finite and can be restarted by creating a new one, but a position cannot be saved.
#[derive(Clone, Debug)]
pub struct AutomataOfSize {
    alphabet: CharAlphabet,
    size: usize,
    bases: Vec<Base>,
    base: usize,
    table: Vec<u64>,
    yielded: u128,
}

impl AutomataOfSize {
    fn new(alphabet: CharAlphabet, size: usize, bases: Vec<Base>) -> Self {
        assert!(size < 64, "Automata with {size} states cannot be enumerated");
        Self {
            table: vec![0; size * alphabet.size()],
            alphabet,
            size,
            bases,
            base: 0,
            yielded: 0,
        }
    }

    /// The number of automata the iterator produces in total, if it fits into a `u128`.
    pub fn total(&self) -> Option<u128> {
        let slots = u32::try_from(self.table.len()).ok()?;
        let tables = 2u128.checked_pow(u32::try_from(self.size).ok()?.checked_mul(slots)?)?;
        tables.checked_mul(self.bases.len() as u128)
    }

    /// Returns the number of states of the enumerated automata.
    pub fn size(&self) -> usize {
        self.size
    }

    fn current(&self, (initial, accepting): &Base) -> NFA {
        let transitions = (0..self.size as DefaultIdType)
            .cartesian_product(self.alphabet.universe())
            .zip(&self.table)
            .map(|(key, &mask)| {
                let targets = math::decode_subset(mask, self.size)
                    .map(|p| p as DefaultIdType)
                    .collect();
                (key, targets)
            })
            .collect();
        NFA::from_parts_unchecked(
            self.alphabet.clone(),
            (0..self.size as DefaultIdType).collect(),
            transitions,
            *initial,
            accepting.clone(),
        )
    }

    /// Moves the index tuple to the next transition table, or to the first table of the next
    /// base once all tables have been produced.
    fn advance(&mut self) {
        let bound = 1u64 << self.size;
        for slot in self.table.iter_mut() {
            *slot += 1;
            if *slot < bound {
                return;
            }
            *slot = 0;
        }
        self.base += 1;
    }
}

impl Iterator for AutomataOfSize {
    type Item = NFA;

    fn next(&mut self) -> Option<Self::Item> {
        let nfa = self.current(self.bases.get(self.base)?);
        self.advance();
        self.yielded += 1;
        Some(nfa)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self
            .total()
            .and_then(|total| usize::try_from(total - self.yielded).ok())
        {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for AutomataOfSize {}

/// Lazily produces all canonical NFAs over `alphabet` with the states `0..size`. For every split
/// point `k` in `0..size`, the accepting states are `{k, ..., size - 1}` and the initial state is
/// `0` or `k`. For each of these choices, every state and symbol independently range over all
/// subsets of the states as successors, which gives `2^(size * size * |alphabet|)` automata per
/// choice.
///
/// This is a reduction of the search space and not a complete enumeration. It covers every NFA
/// with at least one accepting state up to renaming, but the empty language has no
/// representative of size one. Use [`all_automata_of_size`] for the complete enumeration.
///
/// # Example
/// ```
/// use minimal_nfa::prelude::*;
///
/// let alphabet = CharAlphabet::of_size(2);
/// assert_eq!(automata_of_size(&alphabet, 2).count(), 768);
/// ```
pub fn automata_of_size(alphabet: &CharAlphabet, size: usize) -> AutomataOfSize {
    let bases = (0..size as DefaultIdType)
        .flat_map(|k| {
            let accepting: math::OrderedSet<_> = (k..size as DefaultIdType).collect();
            [0, k]
                .into_iter()
                .unique()
                .map(move |initial| (initial, accepting.clone()))
        })
        .collect();
    AutomataOfSize::new(alphabet.clone(), size, bases)
}

/// Lazily produces every NFA over `alphabet` with the states `0..size`, i.e. every combination of
/// initial state, set of accepting states and transition table. This serves as a reference for
/// [`automata_of_size`], it is larger by a factor of roughly `2^size`.
pub fn all_automata_of_size(alphabet: &CharAlphabet, size: usize) -> AutomataOfSize {
    assert!(size < 64, "Automata with {size} states cannot be enumerated");
    let bases = (0..size as DefaultIdType)
        .cartesian_product(0..(1u64 << size))
        .map(|(initial, mask)| {
            let accepting = math::decode_subset(mask, size)
                .map(|q| q as DefaultIdType)
                .collect();
            (initial, accepting)
        })
        .collect();
    AutomataOfSize::new(alphabet.clone(), size, bases)
}

#[cfg(test)]
mod tests {
    use crate::{math::Set, prelude::*};

    #[test_log::test]
    fn canonical_enumeration_of_size_two() {
        let alphabet = CharAlphabet::from_iter(['a', 'b']);
        let automata = automata_of_size(&alphabet, 2);
        assert_eq!(automata.total(), Some(768));
        assert_eq!(automata.size_hint(), (768, Some(768)));

        let mut seen = Set::default();
        for nfa in automata {
            assert_eq!(nfa.size(), 2);
            assert!(nfa.validate().is_ok());
            assert!(nfa.accepting().is_subset(nfa.states()));
            for q in nfa.states() {
                for a in alphabet.universe() {
                    assert!(nfa.successors(q, a).all(|p| nfa.states().contains(p)));
                }
            }
            seen.insert(nfa);
        }
        assert_eq!(seen.len(), 768);
    }

    #[test]
    fn canonical_form() {
        let alphabet = CharAlphabet::of_size(1);
        for size in 1..=3 {
            let mut count = 0;
            for nfa in automata_of_size(&alphabet, size) {
                let first = *nfa.accepting().first().unwrap();
                assert!(nfa.accepting().iter().copied().eq(first..size as u32));
                assert!(*nfa.initial() == 0 || *nfa.initial() == first);
                count += 1;
            }
            let bases = 2 * size - 1;
            assert_eq!(count, bases << (size * size));
        }
    }

    #[test]
    fn exhaustive_enumeration() {
        let alphabet = CharAlphabet::of_size(2);
        let automata = all_automata_of_size(&alphabet, 2);
        assert_eq!(automata.total(), Some(2 * 4 * 256));
        assert_eq!(automata.clone().next(), Some(NFA::empty(alphabet.clone(), 2)));
        let distinct = automata.collect::<Set<_>>();
        assert_eq!(distinct.len(), 2048);
        assert!(distinct.iter().any(|nfa| nfa.accepting().is_empty()));

        let canonical = automata_of_size(&alphabet, 2).collect::<Set<_>>();
        assert!(canonical.is_subset(&distinct));
    }

    #[test]
    fn degenerate_sizes() {
        let alphabet = CharAlphabet::of_size(2);
        assert_eq!(automata_of_size(&alphabet, 0).count(), 0);
        assert_eq!(all_automata_of_size(&alphabet, 0).count(), 0);

        let empty = CharAlphabet::default();
        assert_eq!(automata_of_size(&empty, 3).count(), 5);
    }

    #[test]
    fn enumeration_is_lazy() {
        let alphabet = CharAlphabet::of_size(3);
        let mut automata = automata_of_size(&alphabet, 5);
        assert_eq!(automata.total(), Some(9 << 75));
        assert_eq!(automata.size_hint(), (usize::MAX, None));
        assert_eq!(automata_of_size(&alphabet, 10).total(), None);
        let first = automata.next().unwrap();
        assert_eq!(first.size(), automata.size());
        assert_eq!(first.edges().count(), 0);
        let second = automata.next().unwrap();
        assert_eq!(second.edges().collect::<Vec<_>>(), vec![(&0, 'a', &0)]);
    }
}
