//! Sets of states over a finite state space.

use std::fmt;
use std::marker::PhantomData;

use crate::bitset::BitSet;
use crate::types::Finite;

/// A set of states of type `Q`, stored as a bit set over `Q::COUNT` indices.
///
/// Membership is total and decidable, and the complement is taken with
/// respect to the whole state space.
pub struct StateSet<Q> {
    bits: BitSet,
    _phantom: PhantomData<fn() -> Q>,
}

impl<Q: Finite> StateSet<Q> {
    /// Creates the empty set.
    pub fn new() -> Self {
        Self::from_bits(BitSet::new(Q::COUNT))
    }

    /// Creates the set of all states.
    pub fn full() -> Self {
        Self::from_bits(BitSet::full(Q::COUNT))
    }

    /// Creates the set of states satisfying `pred`.
    ///
    /// The predicate is evaluated exactly once per state.
    pub fn from_predicate(pred: impl Fn(Q) -> bool) -> Self {
        let mut bits = BitSet::new(Q::COUNT);
        bits.extend(Q::all().filter(|&q| pred(q)).map(Q::index));
        Self::from_bits(bits)
    }

    fn from_bits(bits: BitSet) -> Self {
        debug_assert_eq!(bits.universe(), Q::COUNT);
        Self {
            bits,
            _phantom: PhantomData,
        }
    }

    /// Returns true if `state` belongs to the set.
    #[inline]
    pub fn contains(&self, state: Q) -> bool {
        self.bits.contains(state.index())
    }

    /// Adds a state. Returns true if it was not present.
    pub fn insert(&mut self, state: Q) -> bool {
        self.bits.insert(state.index())
    }

    /// Removes a state. Returns true if it was present.
    pub fn remove(&mut self, state: Q) -> bool {
        self.bits.remove(state.index())
    }

    /// Returns the number of states in the set.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns true if the set has no states.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns `AllStates \ self`.
    pub fn complement(&self) -> Self {
        Self::from_bits(self.bits.complement())
    }

    pub fn intersection(&self, other: &Self) -> Self {
        Self::from_bits(self.bits.intersection(&other.bits))
    }

    pub fn union(&self, other: &Self) -> Self {
        Self::from_bits(self.bits.union(&other.bits))
    }

    /// Returns true if the two sets have a state in common.
    pub fn intersects(&self, other: &Self) -> bool {
        self.bits.intersects(&other.bits)
    }

    /// Returns the Cartesian product `{(l, m) : l ∈ left, m ∈ right}`.
    pub fn product<M: Finite>(&self, right: &StateSet<M>) -> StateSet<(Q, M)> {
        let mut bits = BitSet::new(<(Q, M)>::COUNT);
        for l in self.iter() {
            for m in right.iter() {
                bits.insert((l, m).index());
            }
        }
        StateSet::from_bits(bits)
    }

    /// Iterates over the states in index order.
    pub fn iter(&self) -> impl Iterator<Item = Q> + '_ {
        self.bits.iter().map(Q::from_index)
    }
}

impl<Q: Finite> Default for StateSet<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q> Clone for StateSet<Q> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<Q> PartialEq for StateSet<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<Q> Eq for StateSet<Q> {}

impl<Q: Finite> fmt::Debug for StateSet<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<Q: Finite> FromIterator<Q> for StateSet<Q> {
    fn from_iter<I: IntoIterator<Item = Q>>(iter: I) -> Self {
        let mut set = Self::new();
        for q in iter {
            set.insert(q);
        }
        set
    }
}

impl<Q: Finite> Extend<Q> for StateSet<Q> {
    fn extend<I: IntoIterator<Item = Q>>(&mut self, iter: I) {
        for q in iter {
            self.insert(q);
        }
    }
}
