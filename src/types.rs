//! Finite types for alphabets and state spaces.
//!
//! Every symbol type and every state type of an automaton implements [`Finite`]:
//! a bijection between the values of the type and the integers `0..COUNT`.
//! The dense index is what transition tables and state sets are keyed by.

use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use crate::utils::{pair_index, unpair_index};

/// A type with finitely many values, enumerable by a dense index.
///
/// # Invariants
///
/// - `from_index(i).index() == i` for every `i < COUNT`
/// - `from_index(v.index()) == v` for every value `v`
/// - `index` never returns a value `>= COUNT`
pub trait Finite: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Number of distinct values.
    const COUNT: usize;

    /// Dense index of the value, in `0..COUNT`.
    fn index(self) -> usize;

    /// Value with the given dense index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= COUNT`.
    fn from_index(index: usize) -> Self;

    /// All values, in index order.
    fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT).map(Self::from_index)
    }
}

impl Finite for bool {
    const COUNT: usize = 2;

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Self {
        assert!(index < 2, "Index {} out of range for bool", index);
        index == 1
    }
}

impl Finite for () {
    const COUNT: usize = 1;

    fn index(self) -> usize {
        0
    }

    fn from_index(index: usize) -> Self {
        assert_eq!(index, 0, "Index {} out of range for ()", index);
    }
}

impl Finite for u8 {
    const COUNT: usize = 256;

    fn index(self) -> usize {
        self as usize
    }

    fn from_index(index: usize) -> Self {
        u8::try_from(index).unwrap_or_else(|_| panic!("Index {} out of range for u8", index))
    }
}

/// Pairs are the state space of product automata.
///
/// Indexing is row-major: `(a, b)` maps to `a.index() * B::COUNT + b.index()`.
impl<A: Finite, B: Finite> Finite for (A, B) {
    const COUNT: usize = A::COUNT * B::COUNT;

    fn index(self) -> usize {
        pair_index(self.0.index(), self.1.index(), B::COUNT)
    }

    fn from_index(index: usize) -> Self {
        assert!(
            index < Self::COUNT,
            "Index {} out of range for pair of size {}",
            index,
            Self::COUNT
        );
        let (a, b) = unpair_index(index, B::COUNT);
        (A::from_index(a), B::from_index(b))
    }
}

/// An integer in the range `0..N`.
///
/// Handy for anonymous state spaces: `Fin<4>` has exactly four values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Fin<const N: usize>(usize);

impl<const N: usize> Fin<N> {
    /// Creates a new value.
    ///
    /// # Panics
    ///
    /// Panics if `value >= N`.
    pub fn new(value: usize) -> Self {
        assert!(value < N, "Value {} out of range for Fin<{}>", value, N);
        Fin(value)
    }

    /// Returns the raw value.
    pub fn get(self) -> usize {
        self.0
    }
}

impl<const N: usize> Finite for Fin<N> {
    const COUNT: usize = N;

    fn index(self) -> usize {
        self.0
    }

    fn from_index(index: usize) -> Self {
        Fin::new(index)
    }
}

impl<const N: usize> fmt::Display for Fin<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl<const N: usize> From<Fin<N>> for usize {
    fn from(value: Fin<N>) -> Self {
        value.0
    }
}

/// Declares a field-less enum and implements [`Finite`] for it.
///
/// Variants are indexed in declaration order.
///
/// ```
/// use dfa_rs::finite_enum;
/// use dfa_rs::types::Finite;
///
/// finite_enum! {
///     pub enum Light { Red, Yellow, Green }
/// }
///
/// assert_eq!(Light::COUNT, 3);
/// assert_eq!(Light::Green.index(), 2);
/// assert_eq!(Light::from_index(1), Light::Yellow);
/// ```
#[macro_export]
macro_rules! finite_enum {
    ($vis:vis enum $name:ident { $($variant:ident),+ $(,)? }) => {
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $crate::types::Finite for $name {
            const COUNT: usize = [$($name::$variant),+].len();

            fn index(self) -> usize {
                self as usize
            }

            fn from_index(index: usize) -> Self {
                const ALL: &[$name] = &[$($name::$variant),+];
                assert!(
                    index < ALL.len(),
                    "Index {} out of range for {}",
                    index,
                    stringify!($name)
                );
                ALL[index]
            }
        }
    };
}
