//! Closure constructions: complement, intersection, union, difference.
//!
//! Each construction builds a new automaton and leaves its arguments untouched.
//! Only complement and product carry their own logic; union and difference are
//! derived from them.

use std::sync::Arc;

use log::debug;

use crate::dfa::{Delta, Dfa};
use crate::types::Finite;

impl<S: Finite, Q: Finite> Dfa<S, Q> {
    /// Automaton for the complement language.
    ///
    /// Same start state and (shared) transition function, terminal set
    /// `AllStates \ terminal`.
    ///
    /// ```text
    /// accepts(complement(d), w) == !accepts(d, w)
    /// ```
    pub fn complement(&self) -> Dfa<S, Q> {
        debug!(
            "complement(start = {:?}, |terminal| = {})",
            self.start(),
            self.terminal().len()
        );
        Dfa::with_delta(self.start(), self.terminal().complement(), self.delta().clone())
    }

    /// Product automaton, recognizing the intersection of both languages.
    ///
    /// States are pairs; both components step on the same symbol:
    ///
    /// ```text
    /// start'              = (L.start, M.start)
    /// terminal'           = L.terminal × M.terminal
    /// δ'((ql, qm), s)     = (δL(ql, s), δM(qm, s))
    /// ```
    ///
    /// The state space is the full Cartesian product `|QL| × |QM|`. The pair
    /// transition is evaluated on demand; use [`materialize`][Dfa::materialize]
    /// to tabulate it.
    ///
    /// # Examples
    ///
    /// ```
    /// use dfa_rs::dfa::Dfa;
    ///
    /// let ends_in_one = Dfa::from_fn(false, |q: bool| q, |_q, bit: bool| bit);
    /// let even_length = Dfa::from_fn(true, |q: bool| q, |q: bool, _bit: bool| !q);
    ///
    /// let both = ends_in_one.intersect(&even_length);
    /// assert!(both.accepts(&[true, false, true, true]));
    /// assert!(!both.accepts(&[true, false, true]));
    /// ```
    pub fn intersect<M: Finite>(&self, other: &Dfa<S, M>) -> Dfa<S, (Q, M)> {
        debug!(
            "intersect(left.start = {:?}, |left.terminal| = {}, right.start = {:?}, |right.terminal| = {})",
            self.start(),
            self.terminal().len(),
            other.start(),
            other.terminal().len()
        );
        let left = self.delta().clone();
        let right = other.delta().clone();
        let delta = Delta::Func(Arc::new(move |(l, m): (Q, M), s: S| {
            (left.apply(l, s), right.apply(m, s))
        }));
        let terminal = self.terminal().product(other.terminal());
        Dfa::with_delta((self.start(), other.start()), terminal, delta)
    }

    /// Automaton for the union of both languages, by De Morgan's law:
    ///
    /// ```text
    /// L ∪ M = ¬(¬L ∩ ¬M)
    /// ```
    pub fn union<M: Finite>(&self, other: &Dfa<S, M>) -> Dfa<S, (Q, M)> {
        debug!(
            "union(left.start = {:?}, |left.terminal| = {}, right.start = {:?}, |right.terminal| = {})",
            self.start(),
            self.terminal().len(),
            other.start(),
            other.terminal().len()
        );
        self.complement()
            .intersect(&other.complement())
            .complement()
    }

    /// Automaton for `L \ M = L ∩ ¬M`.
    pub fn difference<M: Finite>(&self, other: &Dfa<S, M>) -> Dfa<S, (Q, M)> {
        debug!(
            "difference(left.start = {:?}, |left.terminal| = {}, right.start = {:?}, |right.terminal| = {})",
            self.start(),
            self.terminal().len(),
            other.start(),
            other.terminal().len()
        );
        self.intersect(&other.complement())
    }

    /// Automaton for the symmetric difference `(L \ M) ∪ (M \ L)`.
    ///
    /// Built directly on the pair space: a pair is terminal when exactly one
    /// component is terminal.
    pub fn symmetric_difference<M: Finite>(&self, other: &Dfa<S, M>) -> Dfa<S, (Q, M)> {
        debug!(
            "symmetric_difference(left.start = {:?}, |left.terminal| = {}, right.start = {:?}, |right.terminal| = {})",
            self.start(),
            self.terminal().len(),
            other.start(),
            other.terminal().len()
        );
        let in_left = self.intersect(&other.complement());
        let in_right = self.complement().intersect(other);
        let terminal = in_left.terminal().union(in_right.terminal());
        Dfa::with_delta(in_left.start(), terminal, in_left.delta().clone())
    }
}
