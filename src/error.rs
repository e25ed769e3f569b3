use thiserror::Error;

/// Represents the ways in which an automaton can violate the structural invariants. These errors
/// are only produced where automata enter the crate, i.e. when they are constructed or validated,
/// and when two automata over different alphabets are combined.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum InvalidAutomaton {
    /// The designated initial state is not one of the states.
    #[error("initial state {0} is not a state of the automaton")]
    InitialNotAState(String),
    /// An accepting state is not one of the states.
    #[error("accepting state {0} is not a state of the automaton")]
    AcceptingNotAState(String),
    /// A transition starts or ends in a state that does not exist.
    #[error("transition ({origin}, {symbol}, {target}) references a state outside of the automaton")]
    TransitionOutsideStates {
        /// The origin of the offending transition.
        origin: String,
        /// The symbol of the offending transition.
        symbol: char,
        /// The target of the offending transition.
        target: String,
    },
    /// A transition is labeled with a symbol that does not belong to the alphabet.
    #[error("symbol {0} does not belong to the alphabet")]
    UnknownSymbol(char),
    /// A deterministic automaton has no transition for some state and symbol.
    #[error("deterministic automaton has no transition from {state} on {symbol}")]
    NotTotal {
        /// The state that lacks an outgoing transition.
        state: String,
        /// The symbol on which the transition is missing.
        symbol: char,
    },
    /// A deterministic automaton has more than one transition for some state and symbol.
    #[error("deterministic automaton has several transitions from {state} on {symbol}")]
    Nondeterministic {
        /// The state with several outgoing transitions.
        state: String,
        /// The symbol on which the transitions overlap.
        symbol: char,
    },
    /// A partial automaton cannot be completed with a sink that is already one of its states.
    #[error("sink {0} is already a state of the automaton")]
    SinkIsAState(String),
    /// Two automata that should be combined are defined over different alphabets.
    #[error("automata are over different alphabets {0} and {1}")]
    AlphabetMismatch(String, String),
}

/// Errors that can be produced when searching for a minimal NFA.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum SearchError {
    /// No NFA with at most as many states as the target was found. As the target itself is such
    /// an automaton, this indicates that the enumeration strategy missed it.
    #[error("no equivalent automaton with at most {max_size} states was found, the search logic is broken")]
    AutomatonNotFound {
        /// The largest size that was searched.
        max_size: usize,
    },
    /// The target automaton is malformed.
    #[error("invalid target automaton: {0}")]
    Invalid(#[from] InvalidAutomaton),
}
