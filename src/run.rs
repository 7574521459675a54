//! Incremental execution.
//!
//! [`Runner`] consumes input in pieces, for callers that receive a word as a
//! stream. Because runs compose, feeding `left` and then `right` ends in the same
//! state as running `left ++ right` at once.

use crate::dfa::Dfa;
use crate::types::Finite;

/// Incremental executor holding the current state of a run.
///
/// # Examples
///
/// ```
/// use dfa_rs::dfa::Dfa;
/// use dfa_rs::run::Runner;
///
/// let ends_in_one = Dfa::from_fn(false, |q: bool| q, |_q, bit: bool| bit);
///
/// let mut runner = Runner::new(&ends_in_one);
/// runner.feed(&[true, false]);
/// assert!(!runner.is_accepting());
/// runner.push(true);
/// assert!(runner.is_accepting());
/// assert_eq!(runner.consumed(), 3);
/// ```
#[derive(Clone)]
pub struct Runner<'a, S, Q> {
    dfa: &'a Dfa<S, Q>,
    state: Q,
    consumed: usize,
}

impl<'a, S: Finite, Q: Finite> Runner<'a, S, Q> {
    /// Starts a run at the start state.
    pub fn new(dfa: &'a Dfa<S, Q>) -> Self {
        Self::from_state(dfa, dfa.start())
    }

    /// Starts a run at an arbitrary state.
    pub fn from_state(dfa: &'a Dfa<S, Q>, state: Q) -> Self {
        Self {
            dfa,
            state,
            consumed: 0,
        }
    }

    /// Consumes one symbol.
    pub fn push(&mut self, symbol: S) -> Q {
        self.state = self.dfa.step(self.state, symbol);
        self.consumed += 1;
        self.state
    }

    /// Consumes a chunk of symbols.
    pub fn feed(&mut self, chunk: &[S]) -> Q {
        self.state = self.dfa.run(self.state, chunk);
        self.consumed += chunk.len();
        self.state
    }

    /// Current state.
    pub fn state(&self) -> Q {
        self.state
    }

    /// Number of symbols consumed so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns true if the input consumed so far is accepted.
    pub fn is_accepting(&self) -> bool {
        self.dfa.is_terminal(self.state)
    }

    /// Returns to the start state and forgets the consumed input.
    pub fn reset(&mut self) {
        self.state = self.dfa.start();
        self.consumed = 0;
    }
}

impl<S: Finite, Q: Finite> Extend<S> for Runner<'_, S, Q> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.push(s);
        }
    }
}

/// Iterator over the states visited by a run.
///
/// Yields the initial state first, then the state after each symbol, so a
/// word of length `n` produces `n + 1` states.
pub struct Trace<'a, S, Q, I> {
    dfa: &'a Dfa<S, Q>,
    state: Option<Q>,
    word: I,
    started: bool,
}

impl<S: Finite, Q: Finite, I: Iterator<Item = S>> Iterator for Trace<'_, S, Q, I> {
    type Item = Q;

    fn next(&mut self) -> Option<Self::Item> {
        let state = self.state?;
        if !self.started {
            self.started = true;
            return Some(state);
        }
        match self.word.next() {
            Some(s) => {
                let next = self.dfa.step(state, s);
                self.state = Some(next);
                Some(next)
            }
            None => {
                self.state = None;
                None
            }
        }
    }
}

impl<S: Finite, Q: Finite> Dfa<S, Q> {
    /// Returns the sequence of states visited when running `word` from `state`.
    pub fn trace<W>(&self, state: Q, word: W) -> Trace<'_, S, Q, W::IntoIter>
    where
        W: IntoIterator<Item = S>,
    {
        Trace {
            dfa: self,
            state: Some(state),
            word: word.into_iter(),
            started: false,
        }
    }

    /// Returns a fresh [`Runner`] positioned at the start state.
    pub fn runner(&self) -> Runner<'_, S, Q> {
        Runner::new(self)
    }
}
