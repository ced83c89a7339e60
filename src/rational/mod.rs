//! Exact fractions over fixed-width integers.
//!
//! A [RationalNumber] is always kept in reduced form with the sign stored in
//! the numerator. Zero denominators are allowed and behave like the special
//! values of floating point numbers:
//! - `1/0` is positive infinity
//! - `-1/0` is negative infinity
//! - `0/0` is NaN
//!
//! Unlike IEEE floats, NaN compares equal to itself since equality is a plain
//! comparison of the reduced components.

mod convert;
mod ops;

use crate::math::{gcd, reduce_pair};
use crate::traits::{Category, RationalBase};
use num_traits::{One, Zero};
use std::fmt;

/// A fraction `numer / denom` over an integral type `T`
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct RationalNumber<T> {
    numer: T,
    denom: T, // non-negative
}

impl<T> RationalNumber<T> {
    #[inline]
    pub(crate) const fn new_raw(numer: T, denom: T) -> Self {
        RationalNumber { numer, denom }
    }

    /// Get return-only references to the components `(numer, denom)`
    #[inline]
    pub const fn parts(&self) -> (&T, &T) {
        (&self.numer, &self.denom)
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }
}

impl<T: RationalBase> RationalNumber<T> {
    /// Create a fraction `numer / denom` and reduce it.
    ///
    /// The denominator may be zero, the result is then one of the degenerate
    /// values `1/0`, `-1/0` or `0/0`.
    pub fn new(numer: T, denom: T) -> Self {
        // reduce before moving the sign, `-T::MIN` only overflows when the
        // reduced denominator is still `T::MIN`
        let (numer, denom) = reduce_pair(numer, denom);
        if denom < T::zero() {
            RationalNumber::new_raw(-numer, -denom)
        } else {
            RationalNumber::new_raw(numer, denom)
        }
    }

    /// Create a fraction whose components are already coprime, only the sign
    /// of the denominator is fixed.
    ///
    /// Caller guarantees that `gcd(numer, denom)` is one, or that the pair is
    /// already one of `(0, 1)`, `(±1, 0)`, `(0, 0)`.
    #[inline]
    pub(crate) fn from_coprime(numer: T, denom: T) -> Self {
        debug_assert!({
            let g = gcd(numer, denom);
            g.is_one() || g.is_zero()
        });
        if denom < T::zero() {
            RationalNumber::new_raw(-numer, -denom)
        } else {
            RationalNumber::new_raw(numer, denom)
        }
    }

    /// Positive infinity `1/0`
    #[inline]
    pub fn infinity() -> Self {
        RationalNumber::new_raw(T::one(), T::zero())
    }

    /// Negative infinity `-1/0`
    #[inline]
    pub fn neg_infinity() -> Self {
        RationalNumber::new_raw(-T::one(), T::zero())
    }

    /// Not a number `0/0`
    #[inline]
    pub fn nan() -> Self {
        RationalNumber::new_raw(T::zero(), T::zero())
    }

    pub fn category(&self) -> Category {
        if !self.denom.is_zero() {
            return Category::Finite;
        }
        if self.numer.is_positive() {
            Category::PositiveInfinity
        } else if self.numer.is_negative() {
            Category::NegativeInfinity
        } else {
            Category::NaN
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.denom.is_zero()
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.denom.is_zero() && !self.numer.is_zero()
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.denom.is_zero() && self.numer.is_zero()
    }

    /// Determine if the fraction is a (finite) integer
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Returns the reciprocal `denom / numer`.
    ///
    /// Zero and the infinities swap into each other, NaN stays NaN.
    #[inline]
    pub fn recip(self) -> Self {
        RationalNumber::from_coprime(self.denom, self.numer)
    }
}

impl<T: RationalBase> From<T> for RationalNumber<T> {
    /// Create a fraction `t/1`
    #[inline]
    fn from(t: T) -> Self {
        RationalNumber::new_raw(t, T::one())
    }
}

impl<T: RationalBase> Default for RationalNumber<T> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RationalBase> Zero for RationalNumber<T> {
    #[inline]
    fn zero() -> Self {
        RationalNumber::new_raw(T::zero(), T::one())
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.numer.is_zero() && !self.denom.is_zero()
    }
}

impl<T: RationalBase> One for RationalNumber<T> {
    #[inline]
    fn one() -> Self {
        RationalNumber::new_raw(T::one(), T::one())
    }
    #[inline]
    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl<T: fmt::Display> fmt::Display for RationalNumber<T> {
    /// Writes `numer/denom`, or `<numer/denom>` with the alternate flag (`{:#}`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "<{}/{}>", self.numer, self.denom)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type R = RationalNumber<i32>;

    #[test]
    fn new_test() {
        assert_eq!(R::new(2, 4).parts(), (&1, &2));
        assert_eq!(R::new(-2, 4).parts(), (&-1, &2));
        assert_eq!(R::new(2, -4).parts(), (&-1, &2));
        assert_eq!(R::new(-2, -4).parts(), (&1, &2));
        assert_eq!(R::new(6, 3).parts(), (&2, &1));
        assert_eq!(*R::from(7).numer(), 7);
        assert_eq!(*R::from(7).denom(), 1);
    }

    #[test]
    fn min_value_test() {
        let half_min = RationalNumber::<i32>::new(i32::MIN, 2);
        assert_eq!(half_min.parts(), (&-1073741824, &1));
        assert_eq!(RationalNumber::new(i32::MIN, -4).parts(), (&(1 << 29), &1));
        assert_eq!(RationalNumber::new(i8::MIN, 1).parts(), (&i8::MIN, &1));
        assert_eq!(RationalNumber::new(i8::MIN, 0), RationalNumber::neg_infinity());
        assert_eq!(RationalNumber::new(0, i16::MIN), RationalNumber::zero());
        assert_eq!(RationalNumber::new(6, i64::MIN).parts(), (&-3, &(1 << 62)));
        assert_eq!(RationalNumber::<i8>::from(i8::MIN).to_string(), "-128/1");
    }

    #[test]
    fn sign_normalization() {
        assert_eq!(R::new(1, -1), R::new(-1, 1));
        assert_eq!(R::new(-1, -1), R::new(1, 1));
    }

    #[test]
    fn zero_equivalence() {
        assert_eq!(R::new(0, 1), R::new(0, 2));
        assert_eq!(R::new(0, -1), R::new(0, 1));
        assert_eq!(R::new(0, -5), R::zero());
        assert_eq!(R::default(), R::zero());
        assert!(R::new(0, 9).is_zero());
        assert!(!R::nan().is_zero());
    }

    #[test]
    fn degenerate_test() {
        assert_eq!(R::new(5, 0), R::infinity());
        assert_eq!(R::new(-5, 0), R::neg_infinity());
        assert_eq!(R::new(0, 0), R::nan());
        assert_eq!(R::nan(), R::nan());
        assert_ne!(R::infinity(), R::neg_infinity());
        assert_ne!(R::infinity(), R::nan());
        assert_ne!(R::neg_infinity(), R::nan());

        assert_eq!(R::infinity().category(), Category::PositiveInfinity);
        assert_eq!(R::neg_infinity().category(), Category::NegativeInfinity);
        assert_eq!(R::nan().category(), Category::NaN);
        assert_eq!(R::new(3, 7).category(), Category::Finite);

        assert!(R::infinity().is_infinite() && !R::infinity().is_nan());
        assert!(R::nan().is_nan() && !R::nan().is_infinite());
        assert!(!R::nan().is_finite());
        assert!(R::new(-3, 7).is_finite());
    }

    #[test]
    fn property_test() {
        assert!(R::new(4, 2).is_integer());
        assert!(!R::new(1, 2).is_integer());
        assert!(!R::infinity().is_integer());
        assert!(R::new(3, 3).is_one());
    }

    #[test]
    fn recip_test() {
        assert_eq!(R::new(2, 3).recip(), R::new(3, 2));
        assert_eq!(R::new(-2, 3).recip(), R::new(-3, 2));
        assert_eq!(R::new(-2, 3).recip().parts(), (&-3, &2));
        assert_eq!(R::zero().recip(), R::infinity());
        assert_eq!(R::infinity().recip(), R::zero());
        assert_eq!(R::neg_infinity().recip(), R::zero());
        assert_eq!(R::nan().recip(), R::nan());
    }

    #[test]
    fn formatting_test() {
        assert_eq!(R::new(2, 1).to_string(), "2/1");
        assert_eq!(RationalNumber::<i64>::from(-2).to_string(), "-2/1");
        assert_eq!(R::new(1, -2).to_string(), "-1/2");
        assert_eq!(R::nan().to_string(), "0/0");
        assert_eq!(format!("{}", R::neg_infinity()), "-1/0");
        assert_eq!(format!("{:#}", R::new(1, 3)), "<1/3>");
        assert_eq!(format!("{:#}", R::new(4, -6)), "<-2/3>");
    }

    proptest! {
        #[test]
        fn new_is_reduced(n in -100_000i64..100_000, d in -100_000i64..100_000) {
            prop_assume!(d != 0);
            let r = RationalNumber::new(n, d);
            prop_assert!(*r.denom() > 0);
            prop_assert_eq!(gcd(*r.numer(), *r.denom()), 1);
            if n == 0 {
                prop_assert_eq!(r.parts(), (&0, &1));
            }
            // same value
            prop_assert_eq!(*r.numer() as i128 * d as i128, n as i128 * *r.denom() as i128);
        }

        #[test]
        fn new_is_idempotent(n in -100_000i32..100_000, d in -100_000i32..100_000) {
            let r = R::new(n, d);
            prop_assert_eq!(R::new(*r.numer(), *r.denom()), r);
        }
    }
}
