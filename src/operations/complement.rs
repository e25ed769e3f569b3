use crate::prelude::*;

/// Computes a DFA accepting precisely the words that `dfa` rejects. States, transitions and the
/// initial state are kept, accepting and rejecting states are swapped.
///
/// This is only correct because every [`DFA`] is total: a word that has no run in a partial
/// automaton would be rejected by both the automaton and its complement.
pub fn complement<Q: StateIndex>(dfa: &DFA<Q>) -> DFA<Q> {
    let accepting = dfa
        .states()
        .difference(dfa.accepting())
        .cloned()
        .collect();
    DFA::from_parts_unchecked(
        dfa.alphabet().clone(),
        dfa.states().clone(),
        dfa.edges()
            .map(|(q, a, p)| ((q.clone(), a), p.clone()))
            .collect(),
        dfa.initial().clone(),
        accepting,
    )
}
