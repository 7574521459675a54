//! Operator overloads for the closure constructions.

use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use crate::dfa::Dfa;
use crate::types::Finite;

/// `!&d` is the complement of `d`.
impl<S: Finite, Q: Finite> Not for &Dfa<S, Q> {
    type Output = Dfa<S, Q>;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

/// `!d` is the complement of `d`.
impl<S: Finite, Q: Finite> Not for Dfa<S, Q> {
    type Output = Dfa<S, Q>;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

/// `&l & &m` is the product (intersection) of `l` and `m`.
impl<S: Finite, Q: Finite, M: Finite> BitAnd<&Dfa<S, M>> for &Dfa<S, Q> {
    type Output = Dfa<S, (Q, M)>;

    fn bitand(self, rhs: &Dfa<S, M>) -> Self::Output {
        self.intersect(rhs)
    }
}

/// `&l | &m` is the union of `l` and `m`.
impl<S: Finite, Q: Finite, M: Finite> BitOr<&Dfa<S, M>> for &Dfa<S, Q> {
    type Output = Dfa<S, (Q, M)>;

    fn bitor(self, rhs: &Dfa<S, M>) -> Self::Output {
        self.union(rhs)
    }
}

/// `&l ^ &m` is the symmetric difference of `l` and `m`.
impl<S: Finite, Q: Finite, M: Finite> BitXor<&Dfa<S, M>> for &Dfa<S, Q> {
    type Output = Dfa<S, (Q, M)>;

    fn bitxor(self, rhs: &Dfa<S, M>) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

/// `&l - &m` is the difference `l \ m`.
impl<S: Finite, Q: Finite, M: Finite> Sub<&Dfa<S, M>> for &Dfa<S, Q> {
    type Output = Dfa<S, (Q, M)>;

    fn sub(self, rhs: &Dfa<S, M>) -> Self::Output {
        self.difference(rhs)
    }
}
