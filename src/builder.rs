//! Rule-by-rule construction of automata.

use log::debug;

use crate::dfa::Dfa;
use crate::error::DfaError;
use crate::set::StateSet;
use crate::table::TransitionTable;
use crate::types::Finite;

/// Collects a start state, terminal states and transition rules, then checks
/// that the rules form a total deterministic transition function.
///
/// # Examples
///
/// ```
/// use dfa_rs::builder::DfaBuilder;
///
/// let dfa = DfaBuilder::<bool, bool>::new()
///     .start(false)
///     .terminal(true)
///     .transition(false, false, false)
///     .transition(false, true, true)
///     .transition(true, false, false)
///     .transition(true, true, true)
///     .build()
///     .unwrap();
///
/// assert!(dfa.accepts(&[false, true]));
/// ```
#[derive(Debug, Clone)]
pub struct DfaBuilder<S, Q> {
    start: Option<Q>,
    terminal: Vec<Q>,
    rules: Vec<(Q, S, Q)>,
}

impl<S: Finite, Q: Finite> DfaBuilder<S, Q> {
    pub fn new() -> Self {
        Self {
            start: None,
            terminal: Vec::new(),
            rules: Vec::new(),
        }
    }

    /// Sets the start state. A later call overrides an earlier one.
    pub fn start(mut self, state: Q) -> Self {
        self.start = Some(state);
        self
    }

    /// Marks a state as terminal.
    pub fn terminal(mut self, state: Q) -> Self {
        self.terminal.push(state);
        self
    }

    /// Marks several states as terminal.
    pub fn terminals(mut self, states: impl IntoIterator<Item = Q>) -> Self {
        self.terminal.extend(states);
        self
    }

    /// Adds the rule `δ(source, symbol) = target`.
    pub fn transition(mut self, source: Q, symbol: S, target: Q) -> Self {
        self.rules.push((source, symbol, target));
        self
    }

    /// Adds `δ(source, s) = target` for every symbol `s` not yet covered for `source`.
    ///
    /// Handy for sink states and default edges.
    pub fn default_transition(mut self, source: Q, target: Q) -> Self {
        let covered: Vec<S> = self
            .rules
            .iter()
            .filter(|(q, _, _)| *q == source)
            .map(|&(_, s, _)| s)
            .collect();
        for s in S::all() {
            if !covered.contains(&s) {
                self.rules.push((source, s, target));
            }
        }
        self
    }

    /// Adds `δ(source, s) = target` for every symbol `s` satisfying `pred`.
    pub fn transitions_where(mut self, source: Q, pred: impl Fn(S) -> bool, target: Q) -> Self {
        for s in S::all().filter(|&s| pred(s)) {
            self.rules.push((source, s, target));
        }
        self
    }

    /// Validates the rules and builds the automaton.
    pub fn build(self) -> Result<Dfa<S, Q>, DfaError> {
        debug!(
            "build(start = {:?}, |terminal| = {}, {} rules)",
            self.start,
            self.terminal.len(),
            self.rules.len()
        );
        let start = self.start.ok_or(DfaError::MissingStart)?;
        let table = TransitionTable::from_rules(self.rules)?;
        let terminal: StateSet<Q> = self.terminal.into_iter().collect();
        Ok(Dfa::new(start, terminal, table))
    }
}

impl<S: Finite, Q: Finite> Default for DfaBuilder<S, Q> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::types::Fin;

    crate::finite_enum! {
        enum Letter { A, B, C }
    }

    type Q = Fin<3>;

    fn q(i: usize) -> Q {
        Fin::new(i)
    }

    #[test]
    fn test_build() {
        // Words over {a, b, c} containing "ab".
        let dfa = DfaBuilder::<Letter, Q>::new()
            .start(q(0))
            .terminal(q(2))
            .transition(q(0), Letter::A, q(1))
            .transition(q(1), Letter::A, q(1))
            .transition(q(1), Letter::B, q(2))
            .default_transition(q(0), q(0))
            .default_transition(q(1), q(0))
            .default_transition(q(2), q(2))
            .build()
            .unwrap();

        assert!(dfa.accepts(&[Letter::C, Letter::A, Letter::B]));
        assert!(dfa.accepts(&[Letter::A, Letter::A, Letter::B, Letter::C]));
        assert!(!dfa.accepts(&[Letter::A, Letter::C, Letter::B]));
        assert!(!dfa.accepts(&[]));
    }

    #[test]
    fn test_transitions_where() {
        let dfa = DfaBuilder::<Letter, bool>::new()
            .start(false)
            .terminal(true)
            .transitions_where(false, |l| l == Letter::C, true)
            .transitions_where(false, |l| l != Letter::C, false)
            .default_transition(true, true)
            .build()
            .unwrap();
        assert!(dfa.accepts(&[Letter::A, Letter::C, Letter::B]));
        assert!(!dfa.accepts(&[Letter::A, Letter::B]));
    }

    #[test]
    fn test_missing_start() {
        let err = DfaBuilder::<bool, bool>::new()
            .default_transition(false, false)
            .default_transition(true, true)
            .build()
            .unwrap_err();
        assert_eq!(err, DfaError::MissingStart);
    }

    #[test]
    fn test_missing_transition() {
        let err = DfaBuilder::<Letter, Q>::new()
            .start(q(0))
            .default_transition(q(0), q(1))
            .default_transition(q(1), q(0))
            .transition(q(2), Letter::A, q(2))
            .build()
            .unwrap_err();
        assert_eq!(err, DfaError::missing_transition(q(2), Letter::B));
    }

    #[test]
    fn test_conflicting_transition() {
        let err = DfaBuilder::<bool, bool>::new()
            .start(false)
            .transition(false, true, true)
            .transition(false, true, false)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            DfaError::ConflictingTransition {
                state: "false".to_string(),
                symbol: "true".to_string(),
                first: "true".to_string(),
                second: "false".to_string(),
            }
        );
    }

    #[test]
    fn test_state_space_too_large() {
        type Huge = (u8, (u8, (u8, (u8, bool))));
        let err = DfaBuilder::<bool, Huge>::new()
            .start(Huge::from_index(0))
            .build()
            .unwrap_err();
        assert_eq!(err, DfaError::StateSpaceTooLarge { count: 1 << 33 });
    }
}
