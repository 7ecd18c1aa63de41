//! Integer square root over the full 256-bit range.

use super::U256;

/// Returns `floor(sqrt(n))`.
///
/// Newton's method seeded with `2^ceil(bits(n) / 2)`, which is never below
/// the root, so the iterates decrease monotonically and stop after at most
/// a few dozen rounds.  Every intermediate stays below `2^129`.
///
/// # Examples
///
/// ```
/// use pair_amm::math::{U256, isqrt};
///
/// assert_eq!(isqrt(U256::from(99u64)), U256::from(9u64));
/// assert_eq!(isqrt(U256::from(100u64)), U256::from(10u64));
/// ```
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::zero();
    }
    let shift = n.bits().div_ceil(2);
    let mut x = U256::one() << shift;
    let mut y = (x + n / x) >> 1usize;
    while y < x {
        x = y;
        y = (x + n / x) >> 1usize;
    }
    x
}
