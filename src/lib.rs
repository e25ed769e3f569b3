//! Library for finding minimal nondeterministic finite automata.
//!
//! Given a deterministic finite automaton (a [`DFA`](automaton::DFA)), the crate searches for a
//! nondeterministic finite automaton (an [`NFA`](automaton::NFA)) with as few states as possible
//! that accepts the same language. The search is a brute-force one: it enumerates all NFAs of a
//! given size (see [`enumeration`]), converts each of them into a DFA through the subset
//! construction and checks whether the result is language-equivalent to the target. Equivalence is
//! decided by complementing both automata and verifying that neither cross-intersection contains a
//! word, which in turn is done by a lazy reachability analysis on the product automaton.
//!
//! The most important entry points are
//! - [`search::minimal_nfa`] and the configurable [`search::MinimalNfaSearch`],
//! - [`enumeration::automata_of_size`], which lazily yields all canonical NFAs of a given size,
//! - [`operations`], which contains the subset construction, complementation, the product
//!   intersection check and the isomorphism check.
//!
//! Automata are immutable values. They are either built from their parts through
//! [`NFA::new`](automaton::NFA::new)/[`DFA::new`](automaton::DFA::new) or, more conveniently,
//! through an [`AutomatonBuilder`](builder::AutomatonBuilder):
//! ```
//! use minimal_nfa::prelude::*;
//!
//! let dfa = AutomatonBuilder::default()
//!     .with_accepting([1u32])
//!     .with_edges([(0, 'a', 1), (0, 'b', 0), (1, 'a', 0), (1, 'b', 1)])
//!     .into_dfa(0)
//!     .unwrap();
//! let nfa = minimal_nfa(&dfa).unwrap();
//! assert_eq!(nfa.size(), 2);
//! ```
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use minimal_nfa::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::{CharAlphabet, Symbol},
        automaton::{StateSet, DFA, NFA},
        builder::AutomatonBuilder,
        enumeration::{all_automata_of_size, automata_of_size, AutomataOfSize},
        error::{InvalidAutomaton, SearchError},
        math,
        operations::{
            are_equivalent, are_isomorphic, complement, convert_to_dfa, intersection_is_empty,
            intersection_witness, Product, ProductIndex,
        },
        search::{minimal_nfa, MinimalNfaSearch, SearchStatistics, Strategy},
        DefaultIdType, Show, StateIndex,
    };
}

/// This module contains type aliases for the collections that are used throughout the crate.
pub mod math;

/// Module that contains definitions for dealing with alphabets and words over them.
pub mod alphabet;

/// Defines the error types of the crate.
pub mod error;

/// Defines the two kinds of automata the crate works with, [`NFA`](automaton::NFA) and
/// [`DFA`](automaton::DFA).
#[allow(clippy::upper_case_acronyms)]
pub mod automaton;

/// Builder for conveniently constructing automata from a list of edges.
pub mod builder;

/// Algorithms operating on automata: subset construction, complementation, the product
/// intersection check and the isomorphism check.
pub mod operations;

/// Lazy enumeration of all NFAs of a given size.
pub mod enumeration;

/// The driver that searches for a minimal NFA equivalent to a given DFA.
pub mod search;

/// Implements the generation of random automata.
#[cfg(feature = "random")]
pub mod random;

use std::{fmt::Debug, hash::Hash};

use itertools::Itertools;

/// The type used for identifying states of enumerated automata.
pub type DefaultIdType = u32;

/// A state index is simply a type that can be used to identify the states of an automaton.
/// Identifiers only have to be unique within one automaton, two automata may well reuse
/// the same identifiers without them being related in any way.
pub trait StateIndex: Clone + Eq + Ord + Hash + Debug + Show {}

impl<T: Clone + Eq + Ord + Hash + Debug + Show> StateIndex for T {}

/// Helper trait which can be used to display states, symbols and such.
pub trait Show {
    /// Returns a human readable representation of `self`, for a state index that should be
    /// for example q0, q1, q2, ... Just use something that makes sense. This is mainly used for
    /// displaying automata and for error messages.
    fn show(&self) -> String;

    /// Show a collection of the thing, for a collection of states this should be {q0, q1, q2, ...}.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

macro_rules! impl_show_for_integers {
    ($($t:ty),*) => {
        $(
            impl Show for $t {
                fn show(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_show_for_integers!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Show for char {
    fn show(&self) -> String {
        self.to_string()
    }

    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("\"{}\"", iter.into_iter().join(""))
    }
}

impl Show for str {
    fn show(&self) -> String {
        self.to_string()
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// Three state DFA over `{0, 1}` accepting the words that end in a block of `1`s of odd
    /// length. `q0` and `q2` are equivalent, so it is not minimal.
    pub fn three_state_dfa() -> DFA<&'static str> {
        AutomatonBuilder::default()
            .with_accepting(["q1"])
            .with_edges([
                ("q0", '0', "q0"),
                ("q0", '1', "q1"),
                ("q1", '0', "q0"),
                ("q1", '1', "q2"),
                ("q2", '0', "q2"),
                ("q2", '1', "q1"),
            ])
            .into_dfa("q0")
            .unwrap()
    }

    #[test]
    fn show_states() {
        assert_eq!(3u32.show(), "3");
        assert_eq!("q0".show(), "q0");
        assert_eq!(vec![1u32, 2].show(), "{1, 2}");
        assert_eq!(vec!['a', 'b'].show(), "\"ab\"");
    }

    #[test]
    fn crate_level_example() {
        let dfa = three_state_dfa();
        let nfa = minimal_nfa(&dfa).unwrap();
        assert!(nfa.size() <= 3);
    }
}
