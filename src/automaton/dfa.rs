use std::{collections::VecDeque, fmt::Display};

use crate::prelude::*;

use super::{check_edge, check_states, check_total, transition_table};

/// A deterministic finite automaton (DFA). Every state has precisely one successor for every
/// symbol of the alphabet, which is checked upon construction. Hence every value of this type
/// is total and can safely be complemented by swapping accepting and rejecting states.
///
/// A partial deterministic automaton can be completed with an explicit sink state through
/// [`AutomatonBuilder::into_total_dfa`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DFA<Q: StateIndex = DefaultIdType> {
    alphabet: CharAlphabet,
    states: math::OrderedSet<Q>,
    transitions: math::OrderedMap<(Q, Symbol), Q>,
    initial: Q,
    accepting: math::OrderedSet<Q>,
}

impl<Q: StateIndex> DFA<Q> {
    /// Creates a new DFA from its parts. Fails if some state and symbol pair has no transition or
    /// more than one, or if the parts do not form a valid automaton otherwise, see
    /// [`DFA::validate`].
    pub fn new<S, T, F>(
        alphabet: CharAlphabet,
        states: S,
        transitions: T,
        initial: Q,
        accepting: F,
    ) -> Result<Self, InvalidAutomaton>
    where
        S: IntoIterator<Item = Q>,
        T: IntoIterator<Item = (Q, Symbol, Q)>,
        F: IntoIterator<Item = Q>,
    {
        let states: math::OrderedSet<Q> = states.into_iter().collect();
        let mut table = math::OrderedMap::new();
        for (origin, symbol, target) in transitions {
            check_edge(&alphabet, &states, &origin, symbol, &target)?;
            match table.entry((origin, symbol)) {
                math::ordered_map::Entry::Vacant(entry) => {
                    entry.insert(target);
                }
                math::ordered_map::Entry::Occupied(entry) if entry.get() != &target => {
                    return Err(InvalidAutomaton::Nondeterministic {
                        state: entry.key().0.show(),
                        symbol,
                    });
                }
                math::ordered_map::Entry::Occupied(_) => {}
            }
        }

        let dfa = Self::from_parts_unchecked(
            alphabet,
            states,
            table,
            initial,
            accepting.into_iter().collect(),
        );
        dfa.validate()?;
        Ok(dfa)
    }

    /// Assembles a DFA without checking any invariant. Callers guarantee that the parts form
    /// a valid and total automaton.
    pub(crate) fn from_parts_unchecked(
        alphabet: CharAlphabet,
        states: math::OrderedSet<Q>,
        transitions: math::OrderedMap<(Q, Symbol), Q>,
        initial: Q,
        accepting: math::OrderedSet<Q>,
    ) -> Self {
        Self {
            alphabet,
            states,
            transitions,
            initial,
            accepting,
        }
    }

    /// Re-checks the structural invariants of the automaton: the initial state and all accepting
    /// states are states, every transition stays within the states and the alphabet and the
    /// transition function is total.
    pub fn validate(&self) -> Result<(), InvalidAutomaton> {
        check_states(&self.states, &self.initial, &self.accepting)?;
        for ((origin, symbol), target) in &self.transitions {
            check_edge(&self.alphabet, &self.states, origin, *symbol, target)?;
        }
        check_total(&self.alphabet, &self.states, |q| {
            self.alphabet
                .universe()
                .filter(|&a| self.transitions.contains_key(&(q.clone(), a)))
                .collect()
        })
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Returns the alphabet over which the automaton is defined.
    pub fn alphabet(&self) -> &CharAlphabet {
        &self.alphabet
    }

    /// Returns the set of all states.
    pub fn states(&self) -> &math::OrderedSet<Q> {
        &self.states
    }

    /// Returns the initial state.
    pub fn initial(&self) -> &Q {
        &self.initial
    }

    /// Returns the set of accepting states.
    pub fn accepting(&self) -> &math::OrderedSet<Q> {
        &self.accepting
    }

    /// Returns true if `state` is accepting.
    pub fn is_accepting(&self, state: &Q) -> bool {
        self.accepting.contains(state)
    }

    /// Returns the successor of `state` on `symbol`. This is only `None` if `state` or `symbol`
    /// are not part of the automaton.
    pub fn successor(&self, state: &Q, symbol: Symbol) -> Option<&Q> {
        self.transitions.get(&(state.clone(), symbol))
    }

    /// Iterates over all transitions as triples of origin, symbol and target.
    pub fn edges(&self) -> impl Iterator<Item = (&Q, Symbol, &Q)> + '_ {
        self.transitions.iter().map(|((q, a), p)| (q, *a, p))
    }

    /// Runs `word` from the initial state and returns the reached state. Returns `None` if the
    /// word contains a symbol that is not in the alphabet.
    pub fn reached<W: IntoIterator<Item = Symbol>>(&self, word: W) -> Option<&Q> {
        word.into_iter()
            .try_fold(&self.initial, |q, symbol| self.successor(q, symbol))
    }

    /// Returns whether the automaton accepts the given finite word.
    pub fn accepts<W: IntoIterator<Item = Symbol>>(&self, word: W) -> bool {
        self.reached(word).is_some_and(|q| self.is_accepting(q))
    }

    /// Returns the states that can be reached from the initial state in breadth-first order.
    pub fn reachable_states(&self) -> Vec<&Q> {
        let mut seen = math::Set::from_iter([&self.initial]);
        let mut queue = VecDeque::from([&self.initial]);
        let mut order = vec![];
        while let Some(q) = queue.pop_front() {
            order.push(q);
            for sym in self.alphabet.universe() {
                if let Some(p) = self.successor(q, sym) {
                    if seen.insert(p) {
                        queue.push_back(p);
                    }
                }
            }
        }
        order
    }

    /// Views `self` as an [`NFA`] in which every transition set is a singleton.
    pub fn to_nfa(&self) -> NFA<Q> {
        NFA::from_parts_unchecked(
            self.alphabet.clone(),
            self.states.clone(),
            self.transitions
                .iter()
                .map(|(k, p)| (k.clone(), math::OrderedSet::from([p.clone()])))
                .collect(),
            self.initial.clone(),
            self.accepting.clone(),
        )
    }

    /// Computes the complement of `self` by swapping accepting and rejecting states,
    /// see [`complement`].
    pub fn complement(&self) -> Self {
        complement(self)
    }

    /// Checks whether the languages of `self` and `other` are disjoint, see
    /// [`intersection_is_empty`].
    pub fn intersection_is_empty<P: StateIndex>(
        &self,
        other: &DFA<P>,
    ) -> Result<bool, InvalidAutomaton> {
        intersection_is_empty(self, other)
    }

    /// Checks whether `self` and `other` accept the same language. This is done by verifying
    /// that neither automaton accepts a word that the other one rejects.
    pub fn is_equivalent_to<P: StateIndex>(
        &self,
        other: &DFA<P>,
    ) -> Result<bool, InvalidAutomaton> {
        crate::operations::are_equivalent(self, other)
    }

    /// Attempts to find a word that is accepted by one of `self` and `other` but not by the
    /// other one. Returns `None` if the two automata are equivalent.
    pub fn separating_word<P: StateIndex>(
        &self,
        other: &DFA<P>,
    ) -> Result<Option<Vec<Symbol>>, InvalidAutomaton> {
        if let Some(word) = intersection_witness(self, &other.complement())? {
            return Ok(Some(word));
        }
        intersection_witness(&self.complement(), other)
    }

    /// Checks whether `self` and `other` are identical up to a renaming of their reachable
    /// states, see [`are_isomorphic`].
    pub fn is_isomorphic_to<P: StateIndex>(&self, other: &DFA<P>) -> bool {
        are_isomorphic(self, other)
    }
}

impl<Q: StateIndex> Display for DFA<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            transition_table(
                &self.alphabet,
                &self.states,
                &self.initial,
                &self.accepting,
                |q, a| self
                    .successor(q, a)
                    .map(|p| p.show())
                    .unwrap_or_else(|| "-".to_string()),
            )
        )
    }
}
