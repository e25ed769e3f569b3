use std::fmt::Display;

use crate::prelude::*;

use super::{check_edge, check_states, check_total, transition_table};

/// A nondeterministic finite automaton (NFA). For every state and every symbol of the
/// alphabet, the automaton has a (possibly empty) set of successor states. A finite word is
/// accepted if at least one of the runs on it ends in an accepting state. There are no
/// transitions on the empty word.
///
/// NFAs are immutable values, operations like [`NFA::subset_construction`] never modify the
/// automaton they are applied to.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NFA<Q: StateIndex = DefaultIdType> {
    alphabet: CharAlphabet,
    states: math::OrderedSet<Q>,
    transitions: math::OrderedMap<(Q, Symbol), math::OrderedSet<Q>>,
    initial: Q,
    accepting: math::OrderedSet<Q>,
}

impl NFA<DefaultIdType> {
    /// Creates an NFA over `alphabet` with the states `0..size`, where `0` is initial. No state
    /// is accepting and every transition leads to the empty set.
    pub fn empty(alphabet: CharAlphabet, size: usize) -> Self {
        let states: math::OrderedSet<_> = (0..size as DefaultIdType).collect();
        let transitions = states
            .iter()
            .flat_map(|&q| alphabet.universe().map(move |a| ((q, a), Default::default())))
            .collect();
        Self {
            alphabet,
            states,
            transitions,
            initial: 0,
            accepting: math::OrderedSet::new(),
        }
    }
}

impl<Q: StateIndex> NFA<Q> {
    /// Creates a new NFA from its parts. Every state and symbol pair for which no transition is
    /// given leads to the empty set. Fails if the parts do not form a valid automaton, see
    /// [`NFA::validate`].
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
        let mut table: math::OrderedMap<(Q, Symbol), math::OrderedSet<Q>> = states
            .iter()
            .flat_map(|q| alphabet.universe().map(move |a| ((q.clone(), a), Default::default())))
            .collect();
        for (origin, symbol, target) in transitions {
            check_edge(&alphabet, &states, &origin, symbol, &target)?;
            table.entry((origin, symbol)).or_default().insert(target);
        }

        let nfa = Self::from_parts_unchecked(
            alphabet,
            states,
            table,
            initial,
            accepting.into_iter().collect(),
        );
        nfa.validate()?;
        Ok(nfa)
    }

    /// Assembles an NFA without checking any invariant. Callers guarantee that the parts
    /// form a valid automaton.
    pub(crate) fn from_parts_unchecked(
        alphabet: CharAlphabet,
        states: math::OrderedSet<Q>,
        transitions: math::OrderedMap<(Q, Symbol), math::OrderedSet<Q>>,
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
    /// transition relation is defined for every state and symbol.
    pub fn validate(&self) -> Result<(), InvalidAutomaton> {
        check_states(&self.states, &self.initial, &self.accepting)?;
        for ((origin, symbol), targets) in &self.transitions {
            check_edge(&self.alphabet, &self.states, origin, *symbol, origin)?;
            for target in targets {
                check_edge(&self.alphabet, &self.states, origin, *symbol, target)?;
            }
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

    /// Iterates over the successors of `state` on `symbol`. The iterator is empty if there is no
    /// such transition, or if `state` or `symbol` are unknown.
    pub fn successors(&self, state: &Q, symbol: Symbol) -> impl Iterator<Item = &Q> + '_ {
        self.transitions
            .get(&(state.clone(), symbol))
            .into_iter()
            .flatten()
    }

    /// Iterates over all transitions as triples of origin, symbol and target.
    pub fn edges(&self) -> impl Iterator<Item = (&Q, Symbol, &Q)> + '_ {
        self.transitions
            .iter()
            .flat_map(|((q, a), targets)| targets.iter().map(move |p| (q, *a, p)))
    }

    /// Returns whether the automaton accepts the given finite word, that is whether some run on
    /// the word ends in an accepting state.
    pub fn accepts<W: IntoIterator<Item = Symbol>>(&self, word: W) -> bool {
        let mut current = math::OrderedSet::from([&self.initial]);
        for symbol in word {
            current = current
                .into_iter()
                .flat_map(|q| self.successors(q, symbol))
                .collect();
            if current.is_empty() {
                return false;
            }
        }
        current.into_iter().any(|q| self.is_accepting(q))
    }

    /// Converts `self` into an equivalent [`DFA`] through the subset construction, see
    /// [`convert_to_dfa`].
    pub fn subset_construction(&self) -> DFA<StateSet<Q>> {
        convert_to_dfa(self)
    }
}

impl<Q: StateIndex> Display for NFA<Q> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            transition_table(
                &self.alphabet,
                &self.states,
                &self.initial,
                &self.accepting,
                |q, a| Q::show_collection(self.successors(q, a)),
            )
        )
    }
}
