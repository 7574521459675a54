//! Dense transition tables.
//!
//! A table stores one successor per `(state, symbol)` pair, row-major with
//! states as rows and symbols as columns. A table can only be built complete,
//! so every lookup succeeds.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use log::debug;

use crate::error::DfaError;
use crate::types::Finite;
use crate::utils::cell_index;

pub struct TransitionTable<S, Q> {
    /// Successor state indices, `Q::COUNT * S::COUNT` entries.
    data: Box<[u32]>,
    _phantom: PhantomData<fn(Q, S) -> Q>,
}

impl<S: Finite, Q: Finite> TransitionTable<S, Q> {
    /// Number of entries in a complete table.
    pub const SIZE: usize = Q::COUNT * S::COUNT;

    /// Builds the table by evaluating `f` once for every `(state, symbol)` pair.
    ///
    /// # Panics
    ///
    /// Panics if the state space does not fit into `u32` indices.
    pub fn from_fn(f: impl Fn(Q, S) -> Q) -> Self {
        assert!(
            Self::fits(),
            "State space of size {} does not fit into a transition table",
            Q::COUNT
        );
        let mut data = Vec::with_capacity(Self::SIZE);
        for q in Q::all() {
            for s in S::all() {
                data.push(f(q, s).index() as u32);
            }
        }
        Self::from_data(data)
    }

    /// Builds the table from a list of `(state, symbol, successor)` rules.
    ///
    /// Fails fast if some pair has no rule, or has two rules with different
    /// successors. Repeating an identical rule is allowed.
    pub fn from_rules(rules: impl IntoIterator<Item = (Q, S, Q)>) -> Result<Self, DfaError> {
        let mut map: HashMap<(Q, S), Q> = HashMap::new();
        for (q, s, r) in rules {
            if let Some(&prev) = map.get(&(q, s)) {
                if prev != r {
                    return Err(DfaError::ConflictingTransition {
                        state: format!("{:?}", q),
                        symbol: format!("{:?}", s),
                        first: format!("{:?}", prev),
                        second: format!("{:?}", r),
                    });
                }
            }
            map.insert((q, s), r);
        }
        debug!("from_rules: {} distinct rules, {} needed", map.len(), Self::SIZE);

        Self::check_capacity()?;
        let mut data = Vec::with_capacity(Self::SIZE);
        for q in Q::all() {
            for s in S::all() {
                match map.get(&(q, s)) {
                    Some(r) => data.push(r.index() as u32),
                    None => return Err(DfaError::missing_transition(q, s)),
                }
            }
        }
        Ok(Self::from_data(data))
    }

    /// Builds the table from raw successor indices in row-major order.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Result<Self, DfaError> {
        Self::check_capacity()?;
        let data = indices
            .into_iter()
            .map(|i| {
                if i < Q::COUNT {
                    Ok(i as u32)
                } else {
                    Err(DfaError::StateOutOfRange {
                        index: i,
                        count: Q::COUNT,
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        if data.len() != Self::SIZE {
            return Err(DfaError::TableSize {
                expected: Self::SIZE,
                actual: data.len(),
            });
        }
        Ok(Self::from_data(data))
    }

    fn fits() -> bool {
        Q::COUNT <= u32::MAX as usize
    }

    /// Fails if successor indices of `Q` do not fit into `u32`.
    pub(crate) fn check_capacity() -> Result<(), DfaError> {
        if Self::fits() {
            Ok(())
        } else {
            Err(DfaError::StateSpaceTooLarge { count: Q::COUNT })
        }
    }

    fn from_data(data: Vec<u32>) -> Self {
        debug_assert_eq!(data.len(), Self::SIZE);
        Self {
            data: data.into_boxed_slice(),
            _phantom: PhantomData,
        }
    }

    /// Returns the successor of `state` on `symbol`.
    #[inline]
    pub fn get(&self, state: Q, symbol: S) -> Q {
        let i = cell_index(state.index(), symbol.index(), S::COUNT);
        Q::from_index(self.data[i] as usize)
    }

    /// Returns the number of entries (always `Q::COUNT * S::COUNT`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over all `(state, symbol, successor)` entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Q, S, Q)> + '_ {
        Q::all().flat_map(move |q| S::all().map(move |s| (q, s, self.get(q, s))))
    }
}

impl<S, Q> Clone for TransitionTable<S, Q> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<S, Q> PartialEq for TransitionTable<S, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<S, Q> Eq for TransitionTable<S, Q> {}

impl<S: Finite, Q: Finite> fmt::Debug for TransitionTable<S, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTable")
            .field("states", &Q::COUNT)
            .field("symbols", &S::COUNT)
            .finish()
    }
}
