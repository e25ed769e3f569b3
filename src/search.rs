use itertools::Itertools;
use tracing::{debug, info, trace};

use crate::prelude::*;

/// Determines which automata are tried by a [`MinimalNfaSearch`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Strategy {
    /// Only try automata in the canonical form produced by [`automata_of_size`].
    #[default]
    Canonical,
    /// Try every automaton, as produced by [`all_automata_of_size`].
    Exhaustive,
}

impl Strategy {
    fn candidates(&self, alphabet: &CharAlphabet, size: usize) -> AutomataOfSize {
        match self {
            Strategy::Canonical => automata_of_size(alphabet, size),
            Strategy::Exhaustive => all_automata_of_size(alphabet, size),
        }
    }
}

/// Records how many candidates a search has examined for each size.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SearchStatistics {
    candidates: math::OrderedMap<usize, usize>,
}

impl SearchStatistics {
    /// Returns the number of candidates with `size` states that were examined.
    pub fn candidates_of_size(&self, size: usize) -> usize {
        self.candidates.get(&size).copied().unwrap_or(0)
    }

    /// Returns the number of candidates that were examined in total.
    pub fn total(&self) -> usize {
        self.candidates.values().sum()
    }

    /// Returns the largest size for which candidates were examined.
    pub fn largest_size(&self) -> Option<usize> {
        self.candidates.keys().last().copied()
    }
}

/// Searches for an [`NFA`] with as few states as possible that accepts the same language as
/// a target [`DFA`].
///
/// Starting with the configured size, all candidates of the current size
/// are enumerated according to the [`Strategy`]. Each candidate is converted into a DFA through the
/// subset construction and compared to the target: if the two are isomorphic, they are trivially
/// equivalent, otherwise neither the candidate may accept a word that the target rejects nor the
/// other way around. The first candidate passing this check is returned. If no size up to the
/// number of states of the target succeeds, the search fails with
/// [`SearchError::AutomatonNotFound`].
///
/// The search starts with a single state by default, so languages that need only one state,
/// such as the set of all words, are found as well. Use [`MinimalNfaSearch::starting_at`] to
/// begin at a larger size, for example `starting_at(2)` to skip single-state candidates.
///
/// # Example
/// ```
/// use minimal_nfa::prelude::*;
///
/// // every word over a single symbol except for `a`
/// let dfa = AutomatonBuilder::default()
///     .with_accepting([0u32, 2])
///     .with_edges([(0, 'a', 1), (1, 'a', 2), (2, 'a', 2)])
///     .into_dfa(0)
///     .unwrap();
///
/// let mut search = MinimalNfaSearch::new(&dfa);
/// let nfa = search.run().unwrap();
/// assert_eq!(nfa.size(), 2);
/// assert!(nfa.accepts("".chars()) && !nfa.accepts("a".chars()));
/// assert!(search.statistics().total() > 0);
/// ```
#[derive(Clone, Debug)]
pub struct MinimalNfaSearch<'a, Q: StateIndex> {
    target: &'a DFA<Q>,
    start: usize,
    strategy: Strategy,
    statistics: SearchStatistics,
}

impl<'a, Q: StateIndex> MinimalNfaSearch<'a, Q> {
    /// Prepares a search for an NFA that is equivalent to `target`.
    pub fn new(target: &'a DFA<Q>) -> Self {
        Self {
            target,
            start: 1,
            strategy: Strategy::default(),
            statistics: SearchStatistics::default(),
        }
    }

    /// Skips all candidates with fewer than `size` states. Defaults to `1`.
    pub fn starting_at(mut self, size: usize) -> Self {
        self.start = size;
        self
    }

    /// Sets the [`Strategy`] that determines which candidates are tried.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the statistics of the last call to [`MinimalNfaSearch::run`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Runs the search and returns the first candidate that is equivalent to the target.
    pub fn run(&mut self) -> Result<NFA, SearchError> {
        self.target.validate()?;
        self.statistics = SearchStatistics::default();

        let max_size = self.target.size();
        let negated_target = self.target.complement();

        for size in self.start..=max_size {
            let candidates = self.strategy.candidates(self.target.alphabet(), size);
            debug!(
                "trying {} automata with {size} states",
                candidates
                    .total()
                    .map_or_else(|| "too many".to_string(), |n| n.to_string())
            );

            for candidate in candidates {
                *self.statistics.candidates.entry(size).or_default() += 1;
                if self.is_equivalent(&candidate, &negated_target)? {
                    info!(
                        "found equivalent automaton with {size} states after {} candidates",
                        self.statistics.total()
                    );
                    return Ok(candidate);
                }
            }
        }

        Err(SearchError::AutomatonNotFound { max_size })
    }

    fn is_equivalent(&self, candidate: &NFA, negated_target: &DFA<Q>) -> Result<bool, SearchError> {
        let dfa = candidate.subset_construction();
        if are_isomorphic(&dfa, self.target) {
            trace!("candidate is isomorphic to the target");
            return Ok(true);
        }
        if let Some(word) = intersection_witness(&dfa, negated_target)? {
            trace!("candidate accepts {} which is rejected", word.iter().join(""));
            return Ok(false);
        }
        if let Some(word) = intersection_witness(self.target, &dfa.complement())? {
            trace!("candidate rejects {} which is accepted", word.iter().join(""));
            return Ok(false);
        }
        Ok(true)
    }
}

/// Searches for an NFA with as few states as possible that is equivalent to `target`, using the
/// default configuration of [`MinimalNfaSearch`].
pub fn minimal_nfa<Q: StateIndex>(target: &DFA<Q>) -> Result<NFA, SearchError> {
    MinimalNfaSearch::new(target).run()
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    fn check_equivalent<Q: StateIndex>(nfa: &NFA, target: &DFA<Q>) {
        assert!(nfa.subset_construction().is_equivalent_to(target).unwrap());
        for word in target.alphabet().words_up_to(6) {
            assert_eq!(nfa.accepts(word.iter().copied()), target.accepts(word));
        }
    }

    #[test_log::test]
    fn minimal_nfa_for_three_state_dfa() {
        let dfa = crate::tests::three_state_dfa();
        let mut search = MinimalNfaSearch::new(&dfa);
        let nfa = search.run().unwrap();
        assert!(nfa.size() <= 3);
        assert_eq!(nfa.size(), 2);
        check_equivalent(&nfa, &dfa);

        assert_eq!(search.statistics().candidates_of_size(1), 4);
        assert!(search.statistics().candidates_of_size(2) <= 768);
        assert_eq!(search.statistics().largest_size(), Some(2));

        let nfa = MinimalNfaSearch::new(&dfa).starting_at(2).run().unwrap();
        check_equivalent(&nfa, &dfa);
    }

    #[test]
    fn single_state_languages() {
        let universal = AutomatonBuilder::default()
            .with_accepting([0])
            .with_edges([(0, 'a', 0), (0, 'b', 0)])
            .into_dfa(0)
            .unwrap();
        let nfa = minimal_nfa(&universal).unwrap();
        assert_eq!(nfa.size(), 1);
        check_equivalent(&nfa, &universal);
    }

    #[test]
    fn nfa_smaller_than_dfa() {
        let all_but_a = AutomatonBuilder::default()
            .with_accepting([0, 2])
            .with_edges([(0, 'a', 1), (1, 'a', 2), (2, 'a', 2)])
            .into_dfa(0)
            .unwrap();
        let nfa = minimal_nfa(&all_but_a).unwrap();
        assert_eq!(nfa.size(), 2);
        check_equivalent(&nfa, &all_but_a);

        let at_least_two = AutomatonBuilder::default()
            .with_accepting([2])
            .with_edges([(0, 'a', 1), (1, 'a', 2), (2, 'a', 2)])
            .into_dfa(0)
            .unwrap();
        let mut search = MinimalNfaSearch::new(&at_least_two);
        let nfa = search.run().unwrap();
        assert_eq!(nfa.size(), 3);
        check_equivalent(&nfa, &at_least_two);
        assert_eq!(search.statistics().candidates_of_size(2), 48);
    }

    #[test]
    fn empty_language_needs_exhaustive_search() {
        let empty = AutomatonBuilder::default()
            .with_edges([(0, 'a', 0)])
            .into_dfa(0)
            .unwrap();
        assert_eq!(
            minimal_nfa(&empty),
            Err(SearchError::AutomatonNotFound { max_size: 1 })
        );

        let nfa = MinimalNfaSearch::new(&empty)
            .with_strategy(Strategy::Exhaustive)
            .run()
            .unwrap();
        assert_eq!(nfa.size(), 1);
        assert!(nfa.accepting().is_empty());

        let larger = AutomatonBuilder::default()
            .with_edges([(0, 'a', 1), (1, 'a', 2), (2, 'a', 2)])
            .into_dfa(0)
            .unwrap();
        assert_eq!(minimal_nfa(&larger).unwrap().size(), 2);
        let nfa = MinimalNfaSearch::new(&larger)
            .with_strategy(Strategy::Exhaustive)
            .run()
            .unwrap();
        assert_eq!(nfa.size(), 1);
        check_equivalent(&nfa, &larger);
    }

    #[test]
    fn canonical_and_exhaustive_agree() {
        let alphabet = CharAlphabet::of_size(1);
        for size in 1..=2 {
            for reference in all_automata_of_size(&alphabet, size) {
                let target = reference.subset_construction();
                if target.accepting().is_empty() {
                    continue;
                }
                let canonical = minimal_nfa(&target).unwrap();
                let exhaustive = MinimalNfaSearch::new(&target)
                    .with_strategy(Strategy::Exhaustive)
                    .run()
                    .unwrap();
                assert_eq!(canonical.size(), exhaustive.size());
                assert!(canonical.size() <= size);
                check_equivalent(&canonical, &target);
            }
        }
    }

    #[cfg(feature = "random")]
    #[test]
    fn random_targets() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..10 {
            let dfa = crate::random::random_dfa(1, 3, &mut rng);
            let nfa = MinimalNfaSearch::new(&dfa)
                .with_strategy(Strategy::Exhaustive)
                .run()
                .unwrap();
            assert!(nfa.size() <= dfa.size());
            check_equivalent(&nfa, &dfa);
        }
    }
}
