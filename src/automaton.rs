use bit_set::BitSet;
use owo_colors::OwoColorize;

use crate::prelude::*;

mod nfa;
pub use nfa::NFA;

mod dfa;
pub use dfa::DFA;

pub use crate::operations::StateSet;

/// Checks that `initial` and every state of `accepting` belong to `states`.
pub(crate) fn check_states<Q: StateIndex>(
    states: &math::OrderedSet<Q>,
    initial: &Q,
    accepting: &math::OrderedSet<Q>,
) -> Result<(), InvalidAutomaton> {
    if !states.contains(initial) {
        return Err(InvalidAutomaton::InitialNotAState(initial.show()));
    }
    if let Some(q) = accepting.iter().find(|q| !states.contains(*q)) {
        return Err(InvalidAutomaton::AcceptingNotAState(q.show()));
    }
    Ok(())
}

/// Checks that the transition `(origin, symbol, target)` stays within `states` and `alphabet`.
pub(crate) fn check_edge<Q: StateIndex>(
    alphabet: &CharAlphabet,
    states: &math::OrderedSet<Q>,
    origin: &Q,
    symbol: Symbol,
    target: &Q,
) -> Result<(), InvalidAutomaton> {
    if !alphabet.contains(symbol) {
        return Err(InvalidAutomaton::UnknownSymbol(symbol));
    }
    if !states.contains(origin) || !states.contains(target) {
        return Err(InvalidAutomaton::TransitionOutsideStates {
            origin: origin.show(),
            symbol,
            target: target.show(),
        });
    }
    Ok(())
}

/// Verifies that for every state and every symbol, `defined` holds. Returns the first pair
/// for which it does not as a [`InvalidAutomaton::NotTotal`] error.
pub(crate) fn check_total<Q: StateIndex, F>(
    alphabet: &CharAlphabet,
    states: &math::OrderedSet<Q>,
    defined: F,
) -> Result<(), InvalidAutomaton>
where
    F: Fn(&Q) -> Vec<Symbol>,
{
    let mut seen = BitSet::with_capacity(alphabet.size());
    for q in states {
        seen.clear();
        for sym in defined(q) {
            if let Some(pos) = alphabet.position(sym) {
                seen.insert(pos);
            }
        }
        if let Some(missing) = (0..alphabet.size()).find(|i| !seen.contains(*i)) {
            return Err(InvalidAutomaton::NotTotal {
                state: q.show(),
                symbol: alphabet[missing],
            });
        }
    }
    Ok(())
}

/// Renders the transition table of an automaton. The initial state is marked with an arrow and
/// accepting states are highlighted. `cell` produces the entry for a state and a symbol.
pub(crate) fn transition_table<Q: StateIndex, F>(
    alphabet: &CharAlphabet,
    states: &math::OrderedSet<Q>,
    initial: &Q,
    accepting: &math::OrderedSet<Q>,
    cell: F,
) -> String
where
    F: Fn(&Q, Symbol) -> String,
{
    let mut builder = tabled::builder::Builder::default();
    builder.push_record(
        std::iter::once("State".to_string()).chain(alphabet.universe().map(|s| s.show())),
    );
    for q in states {
        let name = if accepting.contains(q) {
            q.show().green().bold().to_string()
        } else {
            q.show()
        };
        let mut row = vec![if q == initial {
            format!("→ {name}")
        } else {
            name
        }];
        row.extend(alphabet.universe().map(|sym| cell(q, sym)));
        builder.push_record(row);
    }

    builder
        .build()
        .with(tabled::settings::Style::rounded())
        .to_string()
}
