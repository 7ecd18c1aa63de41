//! Configuration for a constant-product pool.

use crate::domain::{Address, AssetPair};
use crate::error::AmmError;

/// Identities of a constant-product pool (`x · y = k`, 0.2% fee).
///
/// The fee and curve are fixed; only the three identities vary between
/// pools.  Reserves always start at zero and are funded by the first
/// deposit.
///
/// # Validation
///
/// - `asset_a` and `asset_b` must differ.
/// - `pool` must differ from both assets, since it holds balances on their
///   ledgers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolConfig {
    pool: Address,
    asset_a: Address,
    asset_b: Address,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any two identities
    /// coincide.
    pub fn new(pool: Address, asset_a: Address, asset_b: Address) -> Result<Self, AmmError> {
        let config = Self {
            pool,
            asset_a,
            asset_b,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// Deserialized configs bypass [`new`](Self::new), so pool construction
    /// calls this again.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any two identities
    /// coincide.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.asset_a == self.asset_b {
            return Err(AmmError::InvalidConfiguration(
                "asset pair requires two distinct identities",
            ));
        }
        if self.pool == self.asset_a || self.pool == self.asset_b {
            return Err(AmmError::InvalidConfiguration(
                "pool address must differ from both assets",
            ));
        }
        Ok(())
    }

    /// Returns the pool's own address.
    #[must_use]
    pub const fn pool(&self) -> Address {
        self.pool
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

    /// Returns both assets as an [`AssetPair`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the assets coincide.
    pub fn asset_pair(&self) -> Result<AssetPair, AmmError> {
        AssetPair::new(self.asset_a, self.asset_b)
    }
}
