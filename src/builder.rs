use bit_set::BitSet;
use itertools::Itertools;

use crate::prelude::*;

use self::math::Set;

/// Helper struct for the construction of automata. It stores a list of edges, a list of accepting
/// states and the symbols of the alphabet. The states of the resulting automaton are all states
/// that appear on an edge, are accepting, are explicitly added or are initial.
///
/// # Example
///
/// We want to create a DFA with two states 0 and 1 over the alphabet `['a', 'b']`, which accepts
/// all words that end with `b`:
/// ```
/// use minimal_nfa::prelude::*;
///
/// let dfa = AutomatonBuilder::default()
///     .with_accepting([1])
///     .with_edges([(0, 'a', 0), (0, 'b', 1), (1, 'a', 0), (1, 'b', 1)])
///     .into_dfa(0) // 0 is the initial state
///     .unwrap();
/// assert!(dfa.accepts("aab".chars()));
/// ```
#[derive(Clone, Debug)]
pub struct AutomatonBuilder<Q = DefaultIdType> {
    symbols: Set<Symbol>,
    edges: Vec<(Q, Symbol, Q)>,
    states: Vec<Q>,
    accepting: Vec<Q>,
}

impl<Q> Default for AutomatonBuilder<Q> {
    fn default() -> Self {
        Self {
            symbols: Set::default(),
            edges: vec![],
            states: vec![],
            accepting: vec![],
        }
    }
}

impl<Q: StateIndex> AutomatonBuilder<Q> {
    /// By default, the only alphabet symbols in the automaton that is built are the ones that
    /// appear on at least one edge. This method can be used to force additional alphabet symbols
    /// to appear.
    pub fn with_alphabet_symbols<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.symbols.extend(symbols);
        self
    }

    /// Adds states that do not necessarily appear on any edge.
    pub fn with_states<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I: IntoIterator<Item = Q>>(mut self, states: I) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Adds a list of edges, given as triples of origin, symbol and target.
    pub fn with_edges<I: IntoIterator<Item = (Q, Symbol, Q)>>(mut self, edges: I) -> Self {
        self.edges.extend(edges);
        self
    }

    fn alphabet(&self) -> CharAlphabet {
        self.edges
            .iter()
            .map(|(_, a, _)| *a)
            .chain(self.symbols.iter().copied())
            .collect()
    }

    fn states(&self, initial: &Q) -> Vec<Q> {
        self.edges
            .iter()
            .flat_map(|(p, _, q)| [p, q])
            .chain(&self.states)
            .chain(&self.accepting)
            .chain(std::iter::once(initial))
            .unique()
            .cloned()
            .collect()
    }

    /// Collects `self` into an [`NFA`] with the given initial state.
    pub fn into_nfa(self, initial: Q) -> Result<NFA<Q>, InvalidAutomaton> {
        let alphabet = self.alphabet();
        let states = self.states(&initial);
        NFA::new(alphabet, states, self.edges, initial, self.accepting)
    }

    /// Collects `self` into a [`DFA`] with the given initial state. Fails if some state lacks
    /// a transition for some symbol or has more than one.
    pub fn into_dfa(self, initial: Q) -> Result<DFA<Q>, InvalidAutomaton> {
        let alphabet = self.alphabet();
        let states = self.states(&initial);
        DFA::new(alphabet, states, self.edges, initial, self.accepting)
    }

    /// Collects `self` into a [`DFA`], redirecting every missing transition to `sink`. If some
    /// transition is missing, `sink` is added as a rejecting state with a loop on every symbol.
    /// In that case `sink` must not already be a state, otherwise
    /// [`InvalidAutomaton::SinkIsAState`] is returned. If nothing is missing, `sink` is unused.
    pub fn into_total_dfa(mut self, initial: Q, sink: Q) -> Result<DFA<Q>, InvalidAutomaton> {
        let alphabet = self.alphabet();
        let states = self.states(&initial);

        let mut seen = BitSet::with_capacity(alphabet.size());
        let mut missing = vec![];
        for q in &states {
            seen.clear();
            for (_, a, _) in self.edges.iter().filter(|(p, _, _)| p == q) {
                if let Some(pos) = alphabet.position(*a) {
                    seen.insert(pos);
                }
            }
            missing.extend(
                (0..alphabet.size())
                    .filter(|i| !seen.contains(*i))
                    .map(|i| (q.clone(), alphabet[i], sink.clone())),
            );
        }

        if !missing.is_empty() {
            if states.contains(&sink) {
                return Err(InvalidAutomaton::SinkIsAState(sink.show()));
            }
            tracing::trace!("completing automaton with {} sink transitions", missing.len());
            self.edges.extend(missing);
            self.edges
                .extend(alphabet.universe().map(|a| (sink.clone(), a, sink.clone())));
        }
        self.into_dfa(initial)
    }
}
