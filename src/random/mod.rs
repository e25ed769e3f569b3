use crate::prelude::*;

/// Generates a random [`NFA`] over [`CharAlphabet::of_size`]`(symbols)` with the states
/// `0..size`, where `0` is initial. For each state, symbol and potential target, the
/// corresponding transition is inserted with probability `density`. Each state is accepting
/// with probability one half.
///
/// # Panics
/// If `size` is zero, as the initial state `0` must exist.
pub fn random_nfa(symbols: usize, size: usize, density: f64, rng: &mut fastrand::Rng) -> NFA {
    assert!(size > 0, "a random automaton needs at least one state");
    let alphabet = CharAlphabet::of_size(symbols);
    let states = 0..size as DefaultIdType;
    let mut edges = vec![];
    for q in states.clone() {
        for sym in alphabet.universe() {
            edges.extend(states.clone().filter(|_| rng.f64() < density).map(|p| (q, sym, p)));
        }
    }
    let accepting = states.clone().filter(|_| rng.bool()).collect::<Vec<_>>();

    NFA::from_parts_unchecked(
        alphabet.clone(),
        states.clone().collect(),
        states
            .flat_map(|q| alphabet.universe().map(move |a| (q, a)))
            .map(|(q, a)| {
                let targets = edges
                    .iter()
                    .filter(|(p, b, _)| *p == q && *b == a)
                    .map(|(_, _, t)| *t)
                    .collect();
                ((q, a), targets)
            })
            .collect(),
        0,
        accepting.into_iter().collect(),
    )
}

/// Generate a random [`DFA`] of size `size` by randomly drawing transitions.
/// `symbols` determines the number of distinct symbols in the [`CharAlphabet`].
/// The algorithm is as follows:
/// 1. Start with `size` states and no transitions.
/// 2. For each state, for each symbol draw a target state and add the corresponding edge.
/// 3. Make each state accepting with probability one half.
///
/// Note that depending on the drawn transitions, there may be unreachable states.
///
/// # Panics
/// If `size` is zero, as the initial state `0` must exist.
pub fn random_dfa(symbols: usize, size: usize, rng: &mut fastrand::Rng) -> DFA {
    assert!(size > 0, "a random automaton needs at least one state");
    let alphabet = CharAlphabet::of_size(symbols);
    let states = 0..size as DefaultIdType;
    let transitions = states
        .clone()
        .flat_map(|q| alphabet.universe().map(move |a| (q, a)))
        .map(|key| (key, rng.u32(0..size as DefaultIdType)))
        .collect();
    let accepting = states.clone().filter(|_| rng.bool()).collect();

    DFA::from_parts_unchecked(alphabet, states.collect(), transitions, 0, accepting)
}

#[cfg(test)]
mod tests {
    #[test]
    fn random_automata_are_valid() {
        let mut rng = fastrand::Rng::with_seed(42);
        for size in 1..6 {
            let nfa = super::random_nfa(2, size, 0.4, &mut rng);
            assert_eq!(nfa.size(), size);
            assert!(nfa.validate().is_ok());

            let dfa = super::random_dfa(3, size, &mut rng);
            assert_eq!(dfa.size(), size);
            assert!(dfa.validate().is_ok());
        }
    }

    #[test]
    #[should_panic(expected = "at least one state")]
    fn random_dfa_without_states() {
        super::random_dfa(2, 0, &mut fastrand::Rng::with_seed(1));
    }

    #[test]
    #[should_panic(expected = "at least one state")]
    fn random_nfa_without_states() {
        super::random_nfa(2, 0, 0.5, &mut fastrand::Rng::with_seed(1));
    }
}
