use std::collections::VecDeque;

use crate::prelude::*;

/// A state of the [`Product`] of two automata, consisting of a state of each.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ProductIndex<L, R>(pub L, pub R);

/// The product of two DFAs over the same alphabet. It is never materialized, successors of a
/// [`ProductIndex`] are computed on demand from the two components.
#[derive(Clone, Debug)]
pub struct Product<'a, P: StateIndex, Q: StateIndex> {
    left: &'a DFA<P>,
    right: &'a DFA<Q>,
}

impl<'a, P: StateIndex, Q: StateIndex> Product<'a, P, Q> {
    /// Pairs up `left` and `right`. Fails if they are defined over different alphabets.
    pub fn new(left: &'a DFA<P>, right: &'a DFA<Q>) -> Result<Self, InvalidAutomaton> {
        if left.alphabet() != right.alphabet() {
            return Err(InvalidAutomaton::AlphabetMismatch(
                left.alphabet().show(),
                right.alphabet().show(),
            ));
        }
        Ok(Self { left, right })
    }

    /// Returns the pair of initial states.
    pub fn initial(&self) -> ProductIndex<&'a P, &'a Q> {
        ProductIndex(self.left.initial(), self.right.initial())
    }

    /// Computes the successor of `state` on `symbol`.
    pub fn successor(
        &self,
        state: ProductIndex<&'a P, &'a Q>,
        symbol: Symbol,
    ) -> Option<ProductIndex<&'a P, &'a Q>> {
        Some(ProductIndex(
            self.left.successor(state.0, symbol)?,
            self.right.successor(state.1, symbol)?,
        ))
    }

    /// A pair is accepting in the intersection if both of its components are accepting.
    pub fn is_accepting(&self, state: ProductIndex<&'a P, &'a Q>) -> bool {
        self.left.is_accepting(state.0) && self.right.is_accepting(state.1)
    }

    /// Explores the product breadth-first from the initial pair and returns the access word of
    /// the first pair that is accepting in both automata. As symbols are explored in order, this
    /// is the length-lexicographically minimal word in the intersection.
    pub fn find_accepting(&self) -> Option<Vec<Symbol>> {
        type Parent<'b, L, R> = Option<(ProductIndex<&'b L, &'b R>, Symbol)>;

        let origin = self.initial();
        let mut parents: math::Map<ProductIndex<&'a P, &'a Q>, Parent<'a, P, Q>> =
            math::Map::default();
        parents.insert(origin, None);
        let mut queue = VecDeque::from([origin]);

        while let Some(state) = queue.pop_front() {
            if self.is_accepting(state) {
                tracing::trace!("reached accepting pair after visiting {} pairs", parents.len());
                let mut word = vec![];
                let mut current = state;
                while let Some(&Some((parent, symbol))) = parents.get(&current) {
                    word.push(symbol);
                    current = parent;
                }
                word.reverse();
                return Some(word);
            }
            for symbol in self.left.alphabet().universe() {
                let Some(successor) = self.successor(state, symbol) else {
                    continue;
                };
                if !parents.contains_key(&successor) {
                    parents.insert(successor, Some((state, symbol)));
                    queue.push_back(successor);
                }
            }
        }
        None
    }
}

/// Returns the length-lexicographically minimal word that is accepted by both `left` and `right`,
/// or `None` if their languages are disjoint. Fails if the automata are defined over different
/// alphabets.
pub fn intersection_witness<P: StateIndex, Q: StateIndex>(
    left: &DFA<P>,
    right: &DFA<Q>,
) -> Result<Option<Vec<Symbol>>, InvalidAutomaton> {
    Ok(Product::new(left, right)?.find_accepting())
}

/// Decides whether no word is accepted by both `left` and `right`. The product automaton is
/// explored lazily and the search stops as soon as a pair of accepting states is reached, so
/// at most `left.size() * right.size()` pairs are visited.
pub fn intersection_is_empty<P: StateIndex, Q: StateIndex>(
    left: &DFA<P>,
    right: &DFA<Q>,
) -> Result<bool, InvalidAutomaton> {
    Ok(intersection_witness(left, right)?.is_none())
}

/// Decides whether `left` and `right` accept the same language, by checking that
/// `left ∩ complement(right)` and `right ∩ complement(left)` are both empty.
pub fn are_equivalent<P: StateIndex, Q: StateIndex>(
    left: &DFA<P>,
    right: &DFA<Q>,
) -> Result<bool, InvalidAutomaton> {
    Ok(intersection_is_empty(left, &complement(right))?
        && intersection_is_empty(right, &complement(left))?)
}
