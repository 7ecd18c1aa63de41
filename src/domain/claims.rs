//! Pool-share claim units.

use core::fmt;

use super::Amount;
use crate::math::U256;

/// Claim-token units representing a proportional share of both reserves.
///
/// Distinct from [`Amount`] because it measures a share of the pool, not a
/// quantity of either asset.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Claims;
///
/// let a = Claims::new(1_000);
/// let b = Claims::new(2_000);
/// assert_eq!(a.checked_add(&b), Some(Claims::new(3_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Claims(U256);

impl Claims {
    /// No claims.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Creates `Claims` from a `u128` value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(U256::widen(value))
    }

    /// Wraps a raw 256-bit value.
    #[must_use]
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns the value as `u128`, or `None` if it does not fit.
    #[must_use]
    pub const fn to_u128(&self) -> Option<u128> {
        self.0.narrow()
    }

    /// Returns `true` if there are no claims.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        let w = self.0.0;
        w[0] == 0 && w[1] == 0 && w[2] == 0 && w[3] == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Scales an [`Amount`] by this claim count.
    ///
    /// Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul_amount(&self, amount: &Amount) -> Option<Amount> {
        self.0.checked_mul(amount.get()).map(Amount::from_u256)
    }
}

impl fmt::Display for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Claims {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Claims {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        U256::from_dec_str(&raw)
            .map(Self)
            .map_err(serde::de::Error::custom)
    }
}
