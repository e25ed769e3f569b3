use std::collections::VecDeque;

use tracing::trace;

use crate::prelude::*;

/// Decides whether `left` and `right` are identical up to a renaming of their states.
///
/// Automata with a different number of states or over different alphabets are never isomorphic.
/// Otherwise, both automata are traversed simultaneously from their initial states, building a
/// bijection between the visited states on the way. The check fails as soon as a transition in
/// `left` leads to a state whose image does not match the corresponding transition in `right`, or
/// when a state of `right` would be the image of two different states. Finally, mapped states
/// must agree on whether they are accepting.
///
/// States that are not reachable from the initial state are not compared, so the result is only
/// meaningful for automata in which every state is reachable.
pub fn are_isomorphic<P: StateIndex, Q: StateIndex>(left: &DFA<P>, right: &DFA<Q>) -> bool {
    if left.size() != right.size() || left.alphabet() != right.alphabet() {
        return false;
    }

    let mut bijection: math::Bijection<&P, &Q> = math::Bijection::new();
    bijection.insert(left.initial(), right.initial());
    let mut queue = VecDeque::from([(left.initial(), right.initial())]);

    while let Some((p, q)) = queue.pop_front() {
        for sym in left.alphabet().universe() {
            let (Some(p_next), Some(q_next)) = (left.successor(p, sym), right.successor(q, sym))
            else {
                return false;
            };
            match bijection.get_by_left(&p_next) {
                Some(&mapped) if mapped != q_next => {
                    trace!(
                        "{} is mapped to {} but {} leads to {} on {sym}",
                        p_next.show(),
                        mapped.show(),
                        q.show(),
                        q_next.show()
                    );
                    return false;
                }
                Some(_) => {}
                None => {
                    if bijection.insert_no_overwrite(p_next, q_next).is_err() {
                        trace!("{} is already the image of another state", q_next.show());
                        return false;
                    }
                    queue.push_back((p_next, q_next));
                }
            }
        }
    }

    bijection
        .iter()
        .all(|(p, q)| left.is_accepting(p) == right.is_accepting(q))
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    type Edge = (&'static str, char, &'static str);

    fn build(edges: [Edge; 6], accepting: &'static str) -> DFA<&'static str> {
        AutomatonBuilder::default()
            .with_accepting([accepting])
            .with_edges(edges)
            .into_dfa("q0")
            .unwrap()
    }

    #[test]
    fn isomorphic_dfas() {
        let dfa = crate::tests::three_state_dfa();
        let renamed = build(
            [
                ("q0", '0', "q0"),
                ("q0", '1', "q2"),
                ("q1", '0', "q1"),
                ("q1", '1', "q2"),
                ("q2", '0', "q0"),
                ("q2", '1', "q1"),
            ],
            "q2",
        );
        assert!(are_isomorphic(&dfa, &renamed));
        assert!(are_isomorphic(&renamed, &dfa));
        assert!(dfa.is_isomorphic_to(&dfa));
    }

    #[test]
    fn wrong_transition() {
        let dfa = crate::tests::three_state_dfa();
        let other = build(
            [
                ("q0", '0', "q0"),
                ("q0", '1', "q2"),
                ("q1", '0', "q1"),
                ("q1", '1', "q2"),
                ("q2", '0', "q0"),
                ("q2", '1', "q2"),
            ],
            "q2",
        );
        assert!(!are_isomorphic(&dfa, &other));
    }

    #[test]
    fn different_acceptance() {
        let dfa = crate::tests::three_state_dfa();
        let other = build(
            [
                ("q0", '0', "q0"),
                ("q0", '1', "q1"),
                ("q1", '0', "q0"),
                ("q1", '1', "q2"),
                ("q2", '0', "q2"),
                ("q2", '1', "q1"),
            ],
            "q2",
        );
        assert!(!are_isomorphic(&dfa, &other));
    }

    #[test]
    fn useless_state() {
        let with_useless = |edges: [Edge; 6], accepting: &'static str| {
            AutomatonBuilder::default()
                .with_accepting([accepting])
                .with_edges(edges)
                .with_edges([("q3", '0', "q2"), ("q3", '1', "q1")])
                .into_dfa("q0")
                .unwrap()
        };
        let dfa = with_useless(
            [
                ("q0", '0', "q0"),
                ("q0", '1', "q1"),
                ("q1", '0', "q0"),
                ("q1", '1', "q2"),
                ("q2", '0', "q2"),
                ("q2", '1', "q1"),
            ],
            "q1",
        );
        let other = with_useless(
            [
                ("q0", '0', "q0"),
                ("q0", '1', "q2"),
                ("q1", '0', "q1"),
                ("q1", '1', "q2"),
                ("q2", '0', "q0"),
                ("q2", '1', "q2"),
            ],
            "q2",
        );
        assert!(!are_isomorphic(&dfa, &other));
        // the unreachable state alone makes the sizes differ
        assert!(!are_isomorphic(&dfa, &crate::tests::three_state_dfa()));
        assert!(are_isomorphic(&dfa, &dfa));
    }

    #[test]
    fn subset_construction_of_dfa_is_isomorphic() {
        let dfa = crate::tests::three_state_dfa();
        let converted = dfa.to_nfa().subset_construction();
        assert!(are_isomorphic(&dfa, &converted));
    }

    #[cfg(feature = "random")]
    #[test]
    fn reflexivity_on_reachable_dfas() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..50 {
            let dfa = crate::random::random_dfa(3, 6, &mut rng);
            let trimmed = dfa.to_nfa().subset_construction();
            assert!(are_isomorphic(&trimmed, &trimmed));
            assert!(are_isomorphic(&trimmed, &trimmed.complement().complement()));
        }
    }
}
