//! Integer helpers used by the fraction normalization.
//!
//! Negative inputs are accepted. `gcd(0, 0) == 0` and `lcm(0, x) == 0`.

use num_integer::Integer;
use num_traits::Signed;

/// Greatest common divisor, always non-negative.
///
/// `gcd(a, 0) == |a|` and `gcd(0, 0) == 0`. `T::MIN` inputs are fine as long
/// as the result fits in `T`.
#[inline]
pub fn gcd<T: Integer>(a: T, b: T) -> T {
    a.gcd(&b)
}

/// Least common multiple, zero if either input is zero
#[inline]
pub fn lcm<T: Integer>(a: T, b: T) -> T {
    a.lcm(&b)
}

/// Sign of `n` as `-1`, `0` or `1`
#[inline]
pub fn sgn<T: Signed>(n: &T) -> T {
    if n.is_zero() {
        T::zero()
    } else {
        n.signum()
    }
}

/// Divide both values by their gcd. A `(0, 0)` pair is left as is.
pub fn reduce_pair<T: Integer + Signed + Clone>(a: T, b: T) -> (T, T) {
    // with a zero side only the sign of the other side survives
    if b.is_zero() {
        return (sgn(&a), b);
    }
    if a.is_zero() {
        return (a, sgn(&b));
    }
    let g = gcd(a.clone(), b.clone());
    (a / g.clone(), b / g)
}
