//! Events recorded by committed pool operations.

use core::fmt;

use super::{Address, Amount};

/// One entry of the pool's ordered event log.
///
/// Exactly one event is appended per successful mutating call; failed calls
/// append nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PoolEvent {
    /// Liquidity was deposited by `owner`.
    AddLiquidity {
        /// Depositor credited with the minted claims.
        owner: Address,
        /// Asset A pulled into the pool.
        amount_a: Amount,
        /// Asset B pulled into the pool.
        amount_b: Amount,
    },
    /// Claims were burned and both assets paid out.
    RemoveLiquidity {
        /// Asset A pushed to the redeemer.
        amount_a: Amount,
        /// Asset B pushed to the redeemer.
        amount_b: Amount,
    },
    /// One asset was exchanged for the other.
    Swap {
        /// Amount of `token_in` pulled from the caller.
        amount_in: Amount,
        /// Amount of `token_out` pushed to the caller.
        amount_out: Amount,
        /// Asset sold to the pool.
        token_in: Address,
        /// Asset bought from the pool.
        token_out: Address,
    },
}

impl PoolEvent {
    /// Short event name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddLiquidity { .. } => "AddLiquidity",
            Self::RemoveLiquidity { .. } => "RemoveLiquidity",
            Self::Swap { .. } => "Swap",
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddLiquidity {
                owner,
                amount_a,
                amount_b,
            } => write!(f, "AddLiquidity({owner}, {amount_a}, {amount_b})"),
            Self::RemoveLiquidity { amount_a, amount_b } => {
                write!(f, "RemoveLiquidity({amount_a}, {amount_b})")
            }
            Self::Swap {
                amount_in,
                amount_out,
                token_in,
                token_out,
            } => write!(f, "Swap({amount_in}, {amount_out}, {token_in}, {token_out})"),
        }
    }
}
