use std::collections::VecDeque;

use itertools::Itertools;

use crate::prelude::*;

/// A set of states of an NFA, which forms a single state of the DFA obtained through the subset
/// construction. The states are kept in order, so equal sets have equal representations.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StateSet<Q: StateIndex>(math::OrderedSet<Q>);

impl<Q: StateIndex> StateSet<Q> {
    /// Creates the set containing only `q`.
    pub fn singleton(q: Q) -> Self {
        Self(math::OrderedSet::from([q]))
    }

    /// Iterates over the states in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = &'_ Q> + '_ {
        self.0.iter()
    }

    /// Returns true if the set contains `q`.
    pub fn contains(&self, q: &Q) -> bool {
        self.0.contains(q)
    }

    /// Returns the number of states in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty, which makes it a rejecting sink in the subset construction.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<Q: StateIndex> FromIterator<Q> for StateSet<Q> {
    fn from_iter<T: IntoIterator<Item = Q>>(iter: T) -> Self {
        Self(math::OrderedSet::from_iter(iter))
    }
}

impl<Q: StateIndex> IntoIterator for StateSet<Q> {
    type IntoIter = math::ordered_set::IntoIter<Q>;
    type Item = Q;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<Q: StateIndex> std::fmt::Debug for StateSet<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.show())
    }
}

impl<Q: StateIndex> Show for StateSet<Q> {
    fn show(&self) -> String {
        if self.0.is_empty() {
            "∅".to_string()
        } else {
            format!("{{{}}}", self.iter().map(|q| q.show()).join(", "))
        }
    }
}

/// Converts `nfa` into an equivalent [`DFA`] through the subset construction. The states of the
/// resulting DFA are the sets of NFA states that are reachable from the singleton set containing
/// the initial state, a set is accepting if it contains at least one accepting state.
///
/// Whenever a set of states has no successor on some symbol, the empty set is reached. It is
/// included as a rejecting sink that loops on every symbol, so the result is total.
pub fn convert_to_dfa<Q: StateIndex>(nfa: &NFA<Q>) -> DFA<StateSet<Q>> {
    let initial = StateSet::singleton(nfa.initial().clone());
    let mut states = math::OrderedSet::from([initial.clone()]);
    let mut queue = VecDeque::from([initial.clone()]);
    let mut transitions = math::OrderedMap::new();

    while let Some(source) = queue.pop_front() {
        for sym in nfa.alphabet().universe() {
            let target: StateSet<Q> = source
                .iter()
                .flat_map(|q| nfa.successors(q, sym))
                .cloned()
                .collect();
            if states.insert(target.clone()) {
                queue.push_back(target.clone());
            }
            transitions.insert((source.clone(), sym), target);
        }
    }

    let accepting = states
        .iter()
        .filter(|set| set.iter().any(|q| nfa.is_accepting(q)))
        .cloned()
        .collect();
    DFA::from_parts_unchecked(
        nfa.alphabet().clone(),
        states,
        transitions,
        initial,
        accepting,
    )
}
