use num_integer::Integer;
use num_traits::Signed;

/// A helper trait to define valid type that can be used for RationalNumber.
///
/// The sign of a fraction lives in its numerator, so the base type has to
/// be signed. Fixed-width integers are the intended targets.
pub trait RationalBase: Integer + Signed + Copy {}
impl<T: Integer + Signed + Copy> RationalBase for T {}

/// Classification of a fraction, similar to [std::num::FpCategory]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Category {
    /// Non-zero denominator
    Finite,
    /// `n/0` with `n > 0`
    PositiveInfinity,
    /// `n/0` with `n < 0`
    NegativeInfinity,
    /// `0/0`
    NaN,
}

impl Category {
    #[inline]
    pub fn is_degenerate(self) -> bool {
        self != Category::Finite
    }
}
