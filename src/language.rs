//! Queries about the language recognized by an automaton.
//!
//! The language is never materialized; every query works on the state graph.
//! Emptiness and witnesses use breadth-first search from the start state,
//! counting uses dynamic programming over word length.

use std::collections::VecDeque;

use log::{debug, trace};
use num_bigint::BigUint;

use crate::dfa::Dfa;
use crate::set::StateSet;
use crate::types::Finite;

impl<S: Finite, Q: Finite> Dfa<S, Q> {
    /// States reachable from the start state by some word.
    pub fn reachable_states(&self) -> StateSet<Q> {
        let mut visited = StateSet::new();
        let mut queue = VecDeque::new();
        visited.insert(self.start());
        queue.push_back(self.start());

        while let Some(q) = queue.pop_front() {
            trace!("reachable: visiting {:?}", q);
            for s in S::all() {
                let next = self.step(q, s);
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        debug!("reachable_states: {} of {}", visited.len(), Q::COUNT);
        visited
    }

    /// Returns true if the automaton accepts no word at all.
    pub fn is_empty(&self) -> bool {
        !self.reachable_states().intersects(self.terminal())
    }

    /// Returns true if the automaton accepts every word.
    pub fn is_universal(&self) -> bool {
        self.complement().is_empty()
    }

    /// Returns a shortest accepted word, if the language is not empty.
    ///
    /// Among words of minimal length, the one found first when symbols are
    /// explored in index order is returned.
    pub fn shortest_accepted(&self) -> Option<Vec<S>> {
        // parent[q] = (predecessor, symbol) on a shortest path from start
        let mut parent: Vec<Option<(Q, S)>> = vec![None; Q::COUNT];
        let mut visited = StateSet::new();
        let mut queue = VecDeque::new();
        visited.insert(self.start());
        queue.push_back(self.start());

        while let Some(q) = queue.pop_front() {
            if self.is_terminal(q) {
                let mut word = Vec::new();
                let mut current = q;
                while let Some((prev, s)) = parent[current.index()] {
                    word.push(s);
                    current = prev;
                }
                word.reverse();
                debug!("shortest_accepted: {:?}", word);
                return Some(word);
            }
            for s in S::all() {
                let next = self.step(q, s);
                if visited.insert(next) {
                    parent[next.index()] = Some((q, s));
                    queue.push_back(next);
                }
            }
        }

        debug!("shortest_accepted: language is empty");
        None
    }

    /// Returns a shortest word that is rejected, if any.
    pub fn shortest_rejected(&self) -> Option<Vec<S>> {
        self.complement().shortest_accepted()
    }

    /// Returns true if every word accepted by `self` is accepted by `other`.
    pub fn is_subset_of<M: Finite>(&self, other: &Dfa<S, M>) -> bool {
        self.difference(other).is_empty()
    }

    /// Returns true if both automata accept exactly the same words.
    pub fn is_equivalent_to<M: Finite>(&self, other: &Dfa<S, M>) -> bool {
        self.symmetric_difference(other).is_empty()
    }

    /// Returns a word accepted by exactly one of the two automata, if any.
    pub fn distinguishing_word<M: Finite>(&self, other: &Dfa<S, M>) -> Option<Vec<S>> {
        self.symmetric_difference(other).shortest_accepted()
    }

    /// Number of accepted words of length exactly `len`.
    ///
    /// Together with the complement, the counts add up to `|S|^len`.
    pub fn count_accepted(&self, len: usize) -> BigUint {
        // ways[q] = number of words of the current length leading from start to q
        let mut ways: Vec<BigUint> = vec![BigUint::ZERO; Q::COUNT];
        ways[self.start().index()] = BigUint::from(1u32);

        for _ in 0..len {
            let mut next: Vec<BigUint> = vec![BigUint::ZERO; Q::COUNT];
            for q in Q::all() {
                let count = &ways[q.index()];
                if *count == BigUint::ZERO {
                    continue;
                }
                for s in S::all() {
                    next[self.step(q, s).index()] += count;
                }
            }
            ways = next;
        }

        self.terminal().iter().map(|q| ways[q.index()].clone()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::builder::DfaBuilder;
    use crate::types::Fin;

    fn ends_in_one() -> Dfa<bool, bool> {
        Dfa::from_fn(false, |q: bool| q, |_q: bool, bit: bool| bit)
    }

    /// Binary numbers (MSB first) divisible by 5.
    fn div_five() -> Dfa<bool, Fin<5>> {
        Dfa::from_fn(
            Fin::new(0),
            |q: Fin<5>| q.get() == 0,
            |q: Fin<5>, bit: bool| Fin::new((2 * q.get() + bit as usize) % 5),
        )
    }

    /// Accepts `111`, and any word that falls into trap state 4 and then reads a `1`.
    fn three_ones_or_trap() -> Dfa<bool, Fin<6>> {
        let q = Fin::<6>::new;
        DfaBuilder::new()
            .start(q(0))
            .terminal(q(3))
            .terminal(q(5))
            .transition(q(0), true, q(1))
            .transition(q(1), true, q(2))
            .transition(q(2), true, q(3))
            .transition(q(4), true, q(5))
            .default_transition(q(0), q(4))
            .default_transition(q(1), q(4))
            .default_transition(q(2), q(4))
            .default_transition(q(3), q(4))
            .default_transition(q(4), q(4))
            .default_transition(q(5), q(5))
            .build()
            .unwrap()
    }

    #[test]
    fn test_reachable_states() {
        let d = three_ones_or_trap();
        let reachable = d.reachable_states();
        // 5 is only entered from the trap state.
        assert!(reachable.contains(Fin::new(4)));
        assert!(reachable.contains(Fin::new(5)));

        let d = Dfa::<bool, Fin<3>>::from_fn(Fin::new(0), |_| true, |q: Fin<3>, _| q);
        assert_eq!(d.reachable_states().len(), 1);
    }

    #[test]
    fn test_is_empty() {
        assert!(!ends_in_one().is_empty());
        let never = Dfa::<bool, bool>::from_fn(false, |q| q, |_q, _bit| false);
        assert!(never.is_empty());
        // Terminal but unreachable.
        let unreachable = Dfa::<bool, Fin<2>>::from_fn(
            Fin::new(0),
            |q| q.get() == 1,
            |_q, _bit| Fin::new(0),
        );
        assert!(unreachable.is_empty());
    }

    #[test]
    fn test_is_universal() {
        let always = Dfa::<bool, ()>::from_fn((), |_| true, |_, _| ());
        assert!(always.is_universal());
        assert!(!ends_in_one().is_universal());
    }

    #[test]
    fn test_shortest_accepted() {
        assert_eq!(ends_in_one().shortest_accepted(), Some(vec![true]));
        assert_eq!(ends_in_one().shortest_rejected(), Some(vec![]));
        // 5 = 101b
        assert_eq!(div_five().complement().shortest_accepted(), Some(vec![true]));
        assert_eq!(div_five().shortest_accepted(), Some(vec![]));
        assert_eq!(
            three_ones_or_trap().shortest_accepted(),
            Some(vec![false, true])
        );
    }

    #[test]
    fn test_shortest_accepted_nonempty_start() {
        // Skip the empty word: intersect with "length at least 3".
        let long = Dfa::<bool, Fin<4>>::from_fn(
            Fin::new(0),
            |q| q.get() == 3,
            |q, _bit| Fin::new((q.get() + 1).min(3)),
        );
        let witness = div_five().intersect(&long).shortest_accepted().unwrap();
        assert_eq!(witness, vec![false, false, false]);
    }

    #[test]
    fn test_shortest_accepted_empty_language() {
        let never = Dfa::<bool, bool>::from_fn(false, |_| false, |q, _| q);
        assert_eq!(never.shortest_accepted(), None);
    }

    #[test]
    fn test_subset_and_equivalence() {
        let d = div_five();
        // Divisible by 5 and ending in 1 is a subset of divisible by 5.
        let sub = d.intersect(&ends_in_one());
        assert!(sub.is_subset_of(&d));
        assert!(!d.is_subset_of(&sub));
        assert!(d.is_equivalent_to(&d.complement().complement()));
        assert!(!d.is_equivalent_to(&sub));
        let w = d.distinguishing_word(&sub).unwrap();
        assert_ne!(d.accepts(&w), sub.accepts(&w));
        assert_eq!(d.distinguishing_word(&d.materialize()), None);
    }

    #[test]
    fn test_count_accepted() {
        let d = ends_in_one();
        assert_eq!(d.count_accepted(0), BigUint::ZERO);
        // Half of the words of each positive length end in 1.
        for len in 1..10 {
            assert_eq!(d.count_accepted(len), BigUint::from(1u32) << (len - 1));
        }
    }

    #[test]
    fn test_count_accepted_partitions() {
        let d = div_five();
        let c = d.complement();
        for len in 0..12 {
            let total = d.count_accepted(len) + c.count_accepted(len);
            assert_eq!(total, BigUint::from(2u32).pow(len as u32));
        }
    }

    #[test]
    fn test_count_accepted_large() {
        // 2^200 words of length 200; exactly half end in 1.
        let d = ends_in_one();
        assert_eq!(d.count_accepted(200), BigUint::from(1u32) << 199);
    }
}
