use super::RationalNumber;
use crate::error::DegenerateError;
use crate::traits::RationalBase;
use core::convert::TryFrom;
use num_rational::Ratio;
use num_traits::{AsPrimitive, Float, NumCast, ToPrimitive};

impl<T: RationalBase> RationalNumber<T> {
    /// Converts to an integer, rounding towards zero.
    /// Returns `None` if the denominator is zero.
    #[inline]
    pub fn to_integer(&self) -> Option<T> {
        if self.denom.is_zero() {
            None
        } else {
            Some(self.numer / self.denom)
        }
    }
}

impl<T: RationalBase + ToPrimitive> RationalNumber<T> {
    /// Converts to a float by dividing the converted components in `F`.
    ///
    /// Degenerate fractions map to the IEEE special values, `1/0` is `inf`,
    /// `-1/0` is `-inf` and `0/0` is NaN. Returns `None` only if a component
    /// is not representable in `F`.
    #[inline]
    pub fn to_float<F: Float>(&self) -> Option<F> {
        let numer = <F as NumCast>::from(self.numer)?;
        let denom = <F as NumCast>::from(self.denom)?;
        Some(numer / denom)
    }
}

impl<T: Copy + 'static> RationalNumber<T> {
    /// Copy the fraction into another base type with `as` semantics.
    ///
    /// The components are not reduced again, a lossy cast is the caller's
    /// responsibility.
    #[inline]
    pub fn cast<U: Copy + 'static>(self) -> RationalNumber<U>
    where
        T: AsPrimitive<U>,
    {
        RationalNumber::new_raw(self.numer.as_(), self.denom.as_())
    }
}

impl<T: ToPrimitive> RationalNumber<T> {
    /// Copy the fraction into another base type, `None` if either component does not fit
    #[inline]
    pub fn checked_cast<U: NumCast>(self) -> Option<RationalNumber<U>> {
        let numer = U::from(self.numer)?;
        let denom = U::from(self.denom)?;
        Some(RationalNumber::new_raw(numer, denom))
    }
}

impl<T: RationalBase + ToPrimitive> ToPrimitive for RationalNumber<T> {
    /// Integer conversions round towards zero and fail on degenerate fractions
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.to_integer()?.to_i64()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.to_integer()?.to_i128()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.to_integer()?.to_u64()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.to_integer()?.to_u128()
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        self.to_float()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        self.to_float()
    }
}

impl<T> From<RationalNumber<T>> for (T, T) {
    /// Deconstruct the fraction into tuple `(numer, denom)`
    #[inline]
    fn from(r: RationalNumber<T>) -> Self {
        (r.numer, r.denom)
    }
}

impl<T: RationalBase> From<Ratio<T>> for RationalNumber<T> {
    #[inline]
    fn from(r: Ratio<T>) -> Self {
        let (numer, denom) = r.into();
        RationalNumber::new(numer, denom)
    }
}

impl<T: RationalBase> TryFrom<RationalNumber<T>> for Ratio<T> {
    type Error = DegenerateError;

    /// [Ratio] has no representation for a zero denominator
    fn try_from(r: RationalNumber<T>) -> Result<Self, DegenerateError> {
        if r.denom.is_zero() {
            return Err(DegenerateError);
        }
        Ok(Ratio::new_raw(r.numer, r.denom))
    }
}
