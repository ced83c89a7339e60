//! Arithmetic operators of [RationalNumber].
//!
//! Operations with plain integers go through the generic `*_int` methods,
//! the operator traits for each primitive integer width are generated by
//! macros on top of them.

use super::RationalNumber;
use crate::math::{lcm, sgn};
use crate::traits::RationalBase;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::AsPrimitive;
use tracing::trace;

impl<T: RationalBase> RationalNumber<T> {
    // Addition table when a denominator is zero:
    // - `x/0 + y/d` with d != 0 gives `x/0`, and symmetrically
    // - `±1/0 + ±1/0` gives the infinity if the signs agree, NaN otherwise
    // - anything with `0/0` on a zero denominator side gives NaN
    fn add_fraction(self, rhs: Self) -> Self {
        match (self.denom.is_zero(), rhs.denom.is_zero()) {
            (false, false) => {
                let l = lcm(self.denom, rhs.denom);
                RationalNumber::new(
                    self.numer * (l / self.denom) + rhs.numer * (l / rhs.denom),
                    l,
                )
            }
            (true, false) => {
                trace!(lhs = ?self.category(), "degenerate addition");
                self
            }
            (false, true) => {
                trace!(rhs = ?rhs.category(), "degenerate addition");
                rhs
            }
            (true, true) => {
                trace!(lhs = ?self.category(), rhs = ?rhs.category(), "degenerate addition");
                if self.numer.is_zero() || rhs.numer.is_zero() {
                    Self::nan()
                } else {
                    RationalNumber::new(sgn(&(sgn(&self.numer) + sgn(&rhs.numer))), T::zero())
                }
            }
        }
    }
}

impl<T: RationalBase + 'static> RationalNumber<T> {
    /// Returns `self + i`.
    ///
    /// `i` is converted with `as` semantics. The sum `(i*d + n) / d` shares
    /// no factor with `d`, so no gcd reduction is needed. This also holds for
    /// degenerate values, where the result is `self`. The guarantee assumes
    /// `i*d + n` does not overflow `T`.
    #[inline]
    pub fn add_int<I: AsPrimitive<T>>(self, i: I) -> Self {
        RationalNumber::from_coprime(i.as_() * self.denom + self.numer, self.denom)
    }

    /// Returns `self - i`
    #[inline]
    pub fn sub_int<I: AsPrimitive<T>>(self, i: I) -> Self {
        RationalNumber::from_coprime(self.numer - i.as_() * self.denom, self.denom)
    }

    /// Returns `self * i`. The integer may share factors with the
    /// denominator, so the result is reduced.
    #[inline]
    pub fn mul_int<I: AsPrimitive<T>>(self, i: I) -> Self {
        RationalNumber::new(i.as_() * self.numer, self.denom)
    }

    /// Returns `self / i`
    #[inline]
    pub fn div_int<I: AsPrimitive<T>>(self, i: I) -> Self {
        RationalNumber::new(self.numer, i.as_() * self.denom)
    }
}

impl<T: RationalBase> Neg for RationalNumber<T> {
    type Output = RationalNumber<T>;
    #[inline]
    fn neg(self) -> RationalNumber<T> {
        RationalNumber::new_raw(-self.numer, self.denom)
    }
}

impl<T: RationalBase> Add for RationalNumber<T> {
    type Output = RationalNumber<T>;
    #[inline]
    fn add(self, rhs: RationalNumber<T>) -> RationalNumber<T> {
        self.add_fraction(rhs)
    }
}

impl<T: RationalBase> Sub for RationalNumber<T> {
    type Output = RationalNumber<T>;
    #[inline]
    fn sub(self, rhs: RationalNumber<T>) -> RationalNumber<T> {
        self.add_fraction(-rhs)
    }
}

impl<T: RationalBase> Mul for RationalNumber<T> {
    type Output = RationalNumber<T>;
    #[inline]
    fn mul(self, rhs: RationalNumber<T>) -> RationalNumber<T> {
        RationalNumber::new(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl<T: RationalBase> Div for RationalNumber<T> {
    type Output = RationalNumber<T>;
    #[inline]
    fn div(self, rhs: RationalNumber<T>) -> RationalNumber<T> {
        RationalNumber::new(self.numer * rhs.denom, self.denom * rhs.numer)
    }
}

macro_rules! assign_impl {
    (impl $imp:ident, $method:ident, $op:ident) => {
        impl<T: RationalBase> $imp for RationalNumber<T> {
            #[inline]
            fn $method(&mut self, rhs: RationalNumber<T>) {
                *self = (*self).$op(rhs);
            }
        }
    };
}

assign_impl!(impl AddAssign, add_assign, add);
assign_impl!(impl SubAssign, sub_assign, sub);
assign_impl!(impl MulAssign, mul_assign, mul);
assign_impl!(impl DivAssign, div_assign, div);

// Abstracts `fraction op i`, `i op fraction` and `fraction op= i` for a primitive integer type
macro_rules! int_arith_impl {
    ($($int:ty)*) => {$(
        impl<T: RationalBase + 'static> Add<$int> for RationalNumber<T>
        where
            $int: AsPrimitive<T>,
        {
            type Output = RationalNumber<T>;
            #[inline]
            fn add(self, rhs: $int) -> RationalNumber<T> {
                self.add_int(rhs)
            }
        }

        impl<T: RationalBase + 'static> Sub<$int> for RationalNumber<T>
        where
            $int: AsPrimitive<T>,
        {
            type Output = RationalNumber<T>;
            #[inline]
            fn sub(self, rhs: $int) -> RationalNumber<T> {
                self.sub_int(rhs)
            }
        }

        impl<T: RationalBase + 'static> Mul<$int> for RationalNumber<T>
        where
            $int: AsPrimitive<T>,
        {
            type Output = RationalNumber<T>;
            #[inline]
            fn mul(self, rhs: $int) -> RationalNumber<T> {
                self.mul_int(rhs)
            }
        }

        impl<T: RationalBase + 'static> Div<$int> for RationalNumber<T>
        where
            $int: AsPrimitive<T>,
        {
            type Output = RationalNumber<T>;
            #[inline]
            fn div(self, rhs: $int) -> RationalNumber<T> {
                self.div_int(rhs)
            }
        }

        impl<T: RationalBase + 'static> Add<RationalNumber<T>> for $int
        where
            $int: AsPrimitive<T>,
        {
            type Output = RationalNumber<T>;
            #[inline]
            fn add(self, rhs: RationalNumber<T>) -> RationalNumber<T> {
                rhs.add_int(self)
            }
        }

        impl<T: RationalBase + 'static> Sub<RationalNumber<T>> for $int
        where
            $int: AsPrimitive<T>,
        {
            type Output = RationalNumber<T>;
            #[inline]
            fn sub(self, rhs: RationalNumber<T>) -> RationalNumber<T> {
                (-rhs).add_int(self)
            }
        }

        impl<T: RationalBase + 'static> Mul<RationalNumber<T>> for $int
        where
            $int: AsPrimitive<T>,
        {
            type Output = RationalNumber<T>;
            #[inline]
            fn mul(self, rhs: RationalNumber<T>) -> RationalNumber<T> {
                rhs.mul_int(self)
            }
        }

        impl<T: RationalBase + 'static> Div<RationalNumber<T>> for $int
        where
            $int: AsPrimitive<T>,
        {
            type Output = RationalNumber<T>;
            #[inline]
            fn div(self, rhs: RationalNumber<T>) -> RationalNumber<T> {
                rhs.recip().mul_int(self)
            }
        }

        impl<T: RationalBase + 'static> AddAssign<$int> for RationalNumber<T>
        where
            $int: AsPrimitive<T>,
        {
            #[inline]
            fn add_assign(&mut self, rhs: $int) {
                *self = self.add_int(rhs);
            }
        }

        impl<T: RationalBase + 'static> SubAssign<$int> for RationalNumber<T>
        where
            $int: AsPrimitive<T>,
        {
            #[inline]
            fn sub_assign(&mut self, rhs: $int) {
                *self = self.sub_int(rhs);
            }
        }

        impl<T: RationalBase + 'static> MulAssign<$int> for RationalNumber<T>
        where
            $int: AsPrimitive<T>,
        {
            #[inline]
            fn mul_assign(&mut self, rhs: $int) {
                *self = self.mul_int(rhs);
            }
        }

        impl<T: RationalBase + 'static> DivAssign<$int> for RationalNumber<T>
        where
            $int: AsPrimitive<T>,
        {
            #[inline]
            fn div_assign(&mut self, rhs: $int) {
                *self = self.div_int(rhs);
            }
        }
    )*};
}

int_arith_impl!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);
