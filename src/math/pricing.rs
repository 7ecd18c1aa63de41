//! Fee-adjusted constant-product output formula.

use crate::domain::Amount;
use crate::error::{AmmError, Result};

/// Fee numerator: 99.8% of the input takes part in pricing.
pub const FEE_NUMERATOR: u128 = 998;

/// Fee denominator.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Computes the output of selling `amount_in` against the given reserves.
///
/// ```text
/// amount_out = floor(amount_in * 998 * reserve_out
///                    / (reserve_in * 1000 + amount_in * 998))
/// ```
///
/// The function is pure and may be called with hypothetical reserves.
/// It returns zero when the denominator is zero (all inputs zero) and when
/// `reserve_out` is zero.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if an intermediate product exceeds
/// 256 bits.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Amount;
/// use pair_amm::math::get_amount_out;
///
/// let out = get_amount_out(Amount::new(1_000), Amount::new(10_000), Amount::new(10_000));
/// assert_eq!(out, Ok(Amount::new(907)));
/// ```
pub fn get_amount_out(amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
    let amount_in_with_fee = amount_in
        .checked_mul(&Amount::new(FEE_NUMERATOR))
        .ok_or(AmmError::Overflow("fee-adjusted input overflow"))?;
    let numerator = amount_in_with_fee
        .checked_mul(&reserve_out)
        .ok_or(AmmError::Overflow("swap numerator overflow"))?;
    let denominator = reserve_in
        .checked_mul(&Amount::new(FEE_DENOMINATOR))
        .and_then(|scaled| scaled.checked_add(&amount_in_with_fee))
        .ok_or(AmmError::Overflow("swap denominator overflow"))?;

    Ok(numerator.checked_div(&denominator).unwrap_or(Amount::ZERO))
}
