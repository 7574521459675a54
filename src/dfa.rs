//! The automaton type, its executor and its recognizer.
//!
//! A [`Dfa`] is a start state, a set of terminal states, and a total transition
//! function. The transition function is stored either as a dense
//! [`TransitionTable`] or as a shared closure; closure constructions compose
//! existing transition functions instead of copying them.

use std::fmt::{self, Debug};
use std::sync::Arc;

use log::debug;

use crate::error::DfaError;
use crate::set::StateSet;
use crate::table::TransitionTable;
use crate::types::Finite;

type TransitionFn<S, Q> = dyn Fn(Q, S) -> Q + Send + Sync;

/// The transition function of an automaton.
pub enum Delta<S, Q> {
    /// Materialized `|Q| × |S|` table.
    Table(Arc<TransitionTable<S, Q>>),
    /// Pure total function, evaluated on demand.
    Func(Arc<TransitionFn<S, Q>>),
}

impl<S: Finite, Q: Finite> Delta<S, Q> {
    #[inline]
    pub fn apply(&self, state: Q, symbol: S) -> Q {
        match self {
            Delta::Table(table) => table.get(state, symbol),
            Delta::Func(f) => f(state, symbol),
        }
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Delta::Table(_))
    }
}

impl<S, Q> Clone for Delta<S, Q> {
    fn clone(&self) -> Self {
        match self {
            Delta::Table(table) => Delta::Table(Arc::clone(table)),
            Delta::Func(f) => Delta::Func(Arc::clone(f)),
        }
    }
}

/// A deterministic finite automaton over symbols `S` and states `Q`.
///
/// Immutable after construction. Cloning is cheap: the transition function is
/// shared.
///
/// # Examples
///
/// ```
/// use dfa_rs::dfa::Dfa;
///
/// // Binary strings ending in `1`: state `true` means "last symbol was 1".
/// let dfa = Dfa::from_fn(false, |q: bool| q, |_q, bit: bool| bit);
///
/// assert!(dfa.accepts(&[true, false, true]));
/// assert!(!dfa.accepts(&[true, false]));
/// assert!(!dfa.accepts(&[]));
/// ```
pub struct Dfa<S, Q> {
    start: Q,
    terminal: StateSet<Q>,
    delta: Delta<S, Q>,
}

impl<S: Finite, Q: Finite> Dfa<S, Q> {
    /// Creates an automaton from a complete transition table.
    pub fn new(start: Q, terminal: StateSet<Q>, table: TransitionTable<S, Q>) -> Self {
        Self::with_delta(start, terminal, Delta::Table(Arc::new(table)))
    }

    /// Creates an automaton from a terminal predicate and a transition function.
    ///
    /// The predicate is evaluated once per state and stored as a set.
    /// The transition function is kept as is and must be pure.
    pub fn from_fn(
        start: Q,
        is_terminal: impl Fn(Q) -> bool,
        transition: impl Fn(Q, S) -> Q + Send + Sync + 'static,
    ) -> Self {
        let terminal = StateSet::from_predicate(is_terminal);
        Self::with_delta(start, terminal, Delta::Func(Arc::new(transition)))
    }

    /// Creates an automaton from raw indices.
    ///
    /// `table` lists successor indices row-major: for every state index `q`,
    /// the successors on symbols `0..S::COUNT`.
    pub fn from_indices(
        start: usize,
        terminal: impl IntoIterator<Item = usize>,
        table: impl IntoIterator<Item = usize>,
    ) -> Result<Self, DfaError> {
        TransitionTable::<S, Q>::check_capacity()?;
        let check = |index: usize| {
            if index < Q::COUNT {
                Ok(Q::from_index(index))
            } else {
                Err(DfaError::StateOutOfRange {
                    index,
                    count: Q::COUNT,
                })
            }
        };
        let start = check(start)?;
        let terminal = terminal
            .into_iter()
            .map(check)
            .collect::<Result<StateSet<Q>, _>>()?;
        let table = TransitionTable::from_indices(table)?;
        Ok(Self::new(start, terminal, table))
    }

    pub(crate) fn with_delta(start: Q, terminal: StateSet<Q>, delta: Delta<S, Q>) -> Self {
        debug!(
            "Dfa(start = {:?}, |terminal| = {}, |Q| = {}, |S| = {}, table = {})",
            start,
            terminal.len(),
            Q::COUNT,
            S::COUNT,
            delta.is_table()
        );
        Self {
            start,
            terminal,
            delta,
        }
    }

    pub fn start(&self) -> Q {
        self.start
    }

    pub fn terminal(&self) -> &StateSet<Q> {
        &self.terminal
    }

    pub fn delta(&self) -> &Delta<S, Q> {
        &self.delta
    }

    pub fn is_terminal(&self, state: Q) -> bool {
        self.terminal.contains(state)
    }

    /// Returns true if the transition function is a materialized table.
    pub fn is_materialized(&self) -> bool {
        self.delta.is_table()
    }

    /// Single transition.
    #[inline]
    pub fn step(&self, state: Q, symbol: S) -> Q {
        self.delta.apply(state, symbol)
    }

    /// Runs the automaton from `state` over `word`, returning the state reached.
    ///
    /// Symbols are consumed left to right; the empty word leaves `state` unchanged.
    /// Runs compose: `run(a, l ++ r) == run(run(a, l), r)`.
    pub fn run(&self, state: Q, word: &[S]) -> Q {
        self.run_iter(state, word.iter().copied())
    }

    /// Like [`run`][Dfa::run], but consumes the symbols from an iterator.
    pub fn run_iter(&self, state: Q, word: impl IntoIterator<Item = S>) -> Q {
        word.into_iter().fold(state, |q, s| self.delta.apply(q, s))
    }

    /// Returns true if `word` leads from the start state to a terminal state.
    pub fn accepts(&self, word: &[S]) -> bool {
        self.is_terminal(self.run(self.start, word))
    }

    /// Like [`accepts`][Dfa::accepts], but consumes the symbols from an iterator.
    pub fn accepts_iter(&self, word: impl IntoIterator<Item = S>) -> bool {
        self.is_terminal(self.run_iter(self.start, word))
    }

    /// Returns an equivalent automaton whose transition function is a dense table.
    ///
    /// Evaluates the transition function on all `|Q| × |S|` pairs, so for
    /// product automata this is the eager Cartesian construction.
    ///
    /// # Panics
    ///
    /// Panics if the state space does not fit into `u32` indices.
    pub fn materialize(&self) -> Self {
        match &self.delta {
            Delta::Table(_) => self.clone(),
            Delta::Func(f) => {
                debug!("materialize(|Q| = {}, |S| = {})", Q::COUNT, S::COUNT);
                let table = TransitionTable::from_fn(|q, s| f(q, s));
                Self::new(self.start, self.terminal.clone(), table)
            }
        }
    }

    /// Returns the same automaton with a different start state.
    pub fn with_start(&self, start: Q) -> Self {
        Self {
            start,
            terminal: self.terminal.clone(),
            delta: self.delta.clone(),
        }
    }
}

impl<S, Q: Copy> Clone for Dfa<S, Q> {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            terminal: self.terminal.clone(),
            delta: self.delta.clone(),
        }
    }
}

impl<S: Finite, Q: Finite> Debug for Dfa<S, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dfa")
            .field("start", &self.start)
            .field("terminal", &self.terminal)
            .field("states", &Q::COUNT)
            .field("symbols", &S::COUNT)
            .field("materialized", &self.is_materialized())
            .finish()
    }
}
