//! The pool's two asset slots.

use super::Address;
use crate::error::AmmError;

/// One of the two reserve slots of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    /// The slot holding asset A.
    A,
    /// The slot holding asset B.
    B,
}

impl Side {
    /// Returns the opposite slot.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// A pair of distinct asset identities, kept in construction order.
///
/// Unlike a canonically sorted pair, slot A is always the asset given
/// first.  Reserves are looked up by identity through [`side_of`](Self::side_of),
/// never by comparing addresses.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, AssetPair, Side};
///
/// let token = Address::from_bytes([2u8; 32]);
/// let wrapped = Address::from_bytes([1u8; 32]);
///
/// let pair = AssetPair::new(token, wrapped).expect("distinct assets");
/// assert_eq!(pair.asset_a(), token);
/// assert_eq!(pair.side_of(&wrapped), Some(Side::B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetPair {
    asset_a: Address,
    asset_b: Address,
}

impl AssetPair {
    /// Creates a pair from two asset identities.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if both identities are equal.
    pub fn new(asset_a: Address, asset_b: Address) -> Result<Self, AmmError> {
        if asset_a == asset_b {
            return Err(AmmError::InvalidConfiguration(
                "asset pair requires two distinct identities",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns the asset in slot A.
    #[must_use]
    pub const fn asset_a(&self) -> Address {
        self.asset_a
    }

    /// Returns the asset in slot B.
    #[must_use]
    pub const fn asset_b(&self) -> Address {
        self.asset_b
    }

    /// Returns the asset in `side`.
    #[must_use]
    pub const fn asset(&self, side: Side) -> Address {
        match side {
            Side::A => self.asset_a,
            Side::B => self.asset_b,
        }
    }

    /// Resolves an identity to its slot, or `None` if it is not in the pair.
    #[must_use]
    pub fn side_of(&self, asset: &Address) -> Option<Side> {
        if *asset == self.asset_a {
            Some(Side::A)
        } else if *asset == self.asset_b {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Returns `true` if `asset` is one of the two identities.
    #[must_use]
    pub fn contains(&self, asset: &Address) -> bool {
        self.side_of(asset).is_some()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::from_bytes([b; 32])
    }

    #[test]
    fn keeps_construction_order() {
        let Ok(pair) = AssetPair::new(addr(9), addr(1)) else {
            panic!("distinct assets");
        };
        assert_eq!(pair.asset_a(), addr(9));
        assert_eq!(pair.asset_b(), addr(1));
        assert_eq!(pair.asset(Side::A), addr(9));
        assert_eq!(pair.asset(Side::B), addr(1));
    }

    #[test]
    fn rejects_identical_assets() {
        assert!(matches!(
            AssetPair::new(addr(3), addr(3)),
            Err(AmmError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn side_lookup() {
        let Ok(pair) = AssetPair::new(addr(1), addr(2)) else {
            panic!("distinct assets");
        };
        assert_eq!(pair.side_of(&addr(1)), Some(Side::A));
        assert_eq!(pair.side_of(&addr(2)), Some(Side::B));
        assert_eq!(pair.side_of(&addr(3)), None);
        assert!(pair.contains(&addr(2)));
        assert!(!pair.contains(&addr(0)));
    }

    #[test]
    fn other_side() {
        assert_eq!(Side::A.other(), Side::B);
        assert_eq!(Side::B.other(), Side::A);
    }
}
