//! Raw asset amount with checked 256-bit arithmetic.

use core::fmt;
use core::str::FromStr;

use crate::math::U256;

/// A raw asset amount in the smallest unit (wei or equivalent).
///
/// `Amount` never interprets decimals.  All 256-bit values are valid
/// amounts; arithmetic methods are checked and return `None` on overflow,
/// underflow, or division by zero instead of panicking.  Division always
/// truncates towards zero.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Amount;
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(b.checked_div(&Amount::new(3)), Some(Amount::new(66)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256([0; 4]));

    /// Maximum representable amount.
    pub const MAX: Self = Self(U256([u64::MAX; 4]));

    /// Creates a new `Amount` from a `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(U256::widen(value))
    }

    /// Wraps a raw 256-bit value.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns the amount as `u128`, or `None` if it does not fit.
    #[must_use]
    pub const fn to_u128(&self) -> Option<u128> {
        self.0.narrow()
    }

    /// Returns `true` if the amount is zero.
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

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Checked floor division. Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.0.checked_div(divisor.0).map(Self)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl FromStr for Amount {
    type Err = uint::FromDecStrErr;

    /// Parses a base-10 string such as `"1000000000000000000"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        U256::from_dec_str(s).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Amount {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Amount {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
