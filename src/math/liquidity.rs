//! Claim minting and redemption formulas.
//!
//! These functions are pure: they compute what an operation would do and
//! leave the reserves to the caller.  All divisions round down, so any dust
//! stays in the pool.

use super::isqrt;
use crate::domain::{Amount, Claims, Redemption};
use crate::error::{AmmError, Result};

/// Claims minted by the first deposit into an empty pool: `isqrt(a * b)`.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if `amount_a * amount_b` exceeds 256 bits.
/// - [`AmmError::InsufficientLiquidity`] if the result is zero.
pub fn initial_claims(amount_a: Amount, amount_b: Amount) -> Result<Claims> {
    let product = amount_a
        .checked_mul(&amount_b)
        .ok_or(AmmError::Overflow("initial deposit product overflow"))?;
    let minted = Claims::from_u256(isqrt(product.get()));
    if minted.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(minted)
}

/// Claims minted by a deposit into a funded pool.
///
/// `min(amount_a * total / reserve_a, amount_b * total / reserve_b)`, so an
/// unbalanced deposit is credited at the less favourable side.
///
/// # Errors
///
/// - [`AmmError::Overflow`] if a product exceeds 256 bits.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is empty or the
///   result is zero.
pub fn proportional_claims(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    total: Claims,
) -> Result<Claims> {
    let share = |amount: Amount, reserve: Amount| -> Result<Amount> {
        total
            .checked_mul_amount(&amount)
            .ok_or(AmmError::Overflow("deposit share overflow"))?
            .checked_div(&reserve)
            .ok_or(AmmError::InsufficientLiquidity)
    };
    let via_a = share(amount_a, reserve_a)?;
    let via_b = share(amount_b, reserve_b)?;
    let minted = Claims::from_u256(via_a.min(via_b).get());
    if minted.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(minted)
}

/// Reserve amounts released by burning `claims` out of `total`.
///
/// Each side is `floor(claims * reserve / total)`.
///
/// # Errors
///
/// - [`AmmError::InvalidLiquidity`] if `total` is zero.
/// - [`AmmError::Overflow`] if a product exceeds 256 bits.
pub fn redeem_amounts(
    claims: Claims,
    reserve_a: Amount,
    reserve_b: Amount,
    total: Claims,
) -> Result<Redemption> {
    let total = Amount::from_u256(total.get());
    let portion = |reserve: Amount| -> Result<Amount> {
        claims
            .checked_mul_amount(&reserve)
            .ok_or(AmmError::Overflow("redemption product overflow"))?
            .checked_div(&total)
            .ok_or(AmmError::InvalidLiquidity)
    };
    Ok(Redemption::new(portion(reserve_a)?, portion(reserve_b)?))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::math::U256;

    const E18: u128 = 1_000_000_000_000_000_000;

    // -- initial_claims ------------------------------------------------------

    #[test]
    fn initial_is_geometric_mean() {
        let Ok(minted) = initial_claims(Amount::new(4_000), Amount::new(1_000)) else {
            panic!("expected Ok");
        };
        assert_eq!(minted, Claims::new(2_000));
    }

    #[test]
    fn initial_one_by_one_mints_one() {
        assert_eq!(
            initial_claims(Amount::new(1), Amount::new(1)),
            Ok(Claims::new(1))
        );
    }

    #[test]
    fn initial_realistic_supply() {
        let a = Amount::new(1_000_000 * E18);
        let b = Amount::new(10 * E18);
        let Ok(minted) = initial_claims(a, b) else {
            panic!("fits in 256 bits");
        };
        let product = U256::widen(1_000_000 * E18) * U256::widen(10 * E18);
        assert_eq!(minted.get(), isqrt(product));
    }

    #[test]
    fn initial_overflow() {
        assert!(matches!(
            initial_claims(Amount::MAX, Amount::new(2)),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn initial_zero_is_insufficient() {
        assert_eq!(
            initial_claims(Amount::ZERO, Amount::new(5)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    // -- proportional_claims -------------------------------------------------

    #[test]
    fn proportional_balanced() {
        let minted = proportional_claims(
            Amount::new(100),
            Amount::new(400),
            Amount::new(1_000),
            Amount::new(4_000),
            Claims::new(2_000),
        );
        assert_eq!(minted, Ok(Claims::new(200)));
    }

    #[test]
    fn proportional_takes_lesser_side() {
        let minted = proportional_claims(
            Amount::new(100),
            Amount::new(4_000),
            Amount::new(1_000),
            Amount::new(4_000),
            Claims::new(2_000),
        );
        assert_eq!(minted, Ok(Claims::new(200)));
    }

    #[test]
    fn proportional_dust_is_insufficient() {
        let minted = proportional_claims(
            Amount::new(1),
            Amount::new(1),
            Amount::new(1_000_000),
            Amount::new(1_000_000),
            Claims::new(10),
        );
        assert_eq!(minted, Err(AmmError::InsufficientLiquidity));
    }

    #[test]
    fn proportional_empty_reserve() {
        let minted = proportional_claims(
            Amount::new(1),
            Amount::new(1),
            Amount::ZERO,
            Amount::new(10),
            Claims::new(10),
        );
        assert_eq!(minted, Err(AmmError::InsufficientLiquidity));
    }

    // -- redeem_amounts ------------------------------------------------------

    #[test]
    fn redeem_all_returns_reserves() {
        let Ok(out) = redeem_amounts(
            Claims::new(2_000),
            Amount::new(4_000),
            Amount::new(1_000),
            Claims::new(2_000),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_a(), Amount::new(4_000));
        assert_eq!(out.amount_b(), Amount::new(1_000));
    }

    #[test]
    fn redeem_partial_floors() {
        let Ok(out) = redeem_amounts(
            Claims::new(1),
            Amount::new(10),
            Amount::new(7),
            Claims::new(3),
        ) else {
            panic!("expected Ok");
        };
        assert_eq!(out.amount_a(), Amount::new(3));
        assert_eq!(out.amount_b(), Amount::new(2));
    }

    #[test]
    fn redeem_from_empty_supply() {
        assert_eq!(
            redeem_amounts(Claims::new(1), Amount::new(1), Amount::new(1), Claims::ZERO),
            Err(AmmError::InvalidLiquidity)
        );
    }
}
