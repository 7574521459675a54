//! Construction-time errors.
//!
//! Running and combining automata never fails. The only failure class is a
//! malformed automaton, and it is rejected when the automaton is built.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DfaError {
    #[error("no start state was given")]
    MissingStart,

    /// The transition table is not total.
    #[error("no transition from state {state} on symbol {symbol}")]
    MissingTransition { state: String, symbol: String },

    /// The same `(state, symbol)` pair was given two different successors.
    #[error("conflicting transitions from state {state} on symbol {symbol}: {first} vs {second}")]
    ConflictingTransition {
        state: String,
        symbol: String,
        first: String,
        second: String,
    },

    #[error("transition table has {actual} entries, expected {expected}")]
    TableSize { expected: usize, actual: usize },

    #[error("state index {index} out of range for state space of size {count}")]
    StateOutOfRange { index: usize, count: usize },

    /// Successors are stored as `u32` indices.
    #[error("state space of size {count} does not fit into a transition table")]
    StateSpaceTooLarge { count: usize },
}

impl DfaError {
    pub(crate) fn missing_transition(
        state: impl std::fmt::Debug,
        symbol: impl std::fmt::Debug,
    ) -> Self {
        DfaError::MissingTransition {
            state: format!("{:?}", state),
            symbol: format!("{:?}", symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = DfaError::missing_transition(3usize, 'a');
        assert_eq!(err.to_string(), "no transition from state 3 on symbol 'a'");

        let err = DfaError::TableSize {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "transition table has 3 entries, expected 4");

        let err = DfaError::StateSpaceTooLarge { count: 1 << 33 };
        assert_eq!(
            err.to_string(),
            "state space of size 8589934592 does not fit into a transition table"
        );
    }
}
