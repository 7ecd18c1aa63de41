//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use pair_amm::prelude::*;
//!
//! let pool = Address::from_bytes([0xff; 32]);
//! let config = PoolConfig::new(pool, Address::from_bytes([1; 32]), Address::from_bytes([2; 32]));
//! assert!(config.is_ok());
//! ```

pub use crate::config::PoolConfig;
pub use crate::domain::{
    Address, Amount, AssetPair, Claims, PoolEvent, Redemption, Side, SwapResult,
};
pub use crate::error::{AmmError, LedgerError, Result};
pub use crate::exchange::{Exchange, SharedExchange};
pub use crate::ledger::{TokenLedger, WrappedNativeLedger};
pub use crate::math::CheckedArithmetic;
pub use crate::pools::{ConstantProductPool, LedgerPair};
pub use crate::traits::{FromConfig, FungibleLedger};
