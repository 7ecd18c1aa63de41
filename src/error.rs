//! Unified error types for the pool and its ledgers.
//!
//! Every fallible pool operation returns [`AmmError`].  Failures raised by a
//! ledger collaborator are carried unchanged inside [`AmmError::Ledger`], so
//! callers can match on the ledger's own [`LedgerError`] kind.
//!
//! Each variant has a short, stable reason string (see [`AmmError::reason`])
//! suitable for machine matching.  The [`Display`](core::fmt::Display) output
//! of the kind-only variants is exactly that reason.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors raised by a [`FungibleLedger`](crate::traits::FungibleLedger).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum LedgerError {
    /// The debited account holds less than the requested amount.
    #[error("Insufficient balance")]
    InsufficientBalance,

    /// The spender's allowance from the owner is below the requested amount.
    #[error("Insufficient allowance")]
    InsufficientAllowance,

    /// Crediting the account or the supply would overflow.
    #[error("Balance overflow")]
    Overflow,
}

impl LedgerError {
    /// Returns the stable reason string for this error.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InsufficientBalance => "Insufficient balance",
            Self::InsufficientAllowance => "Insufficient allowance",
            Self::Overflow => "Balance overflow",
        }
    }
}

/// Errors raised by pool operations.
///
/// All variants are caller-correctable: they abort only the triggering call
/// and leave pool and ledger state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// A liquidity deposit amount was zero.
    #[error("Invalid amounts")]
    InvalidAmount,

    /// A swap input amount was zero.
    #[error("Invalid amountIn")]
    InvalidAmountIn,

    /// A directional swap input amount was zero.
    #[error("Invalid input amount")]
    InvalidInputAmount,

    /// The input asset is not one of the pool's two assets.
    #[error("Invalid tokenIn")]
    InvalidTokenIn,

    /// The output asset is not one of the pool's assets, or equals the input.
    #[error("Invalid tokenOut")]
    InvalidTokenOut,

    /// A deposit would mint zero claims.
    #[error("Insufficient liquidity")]
    InsufficientLiquidity,

    /// A redemption was zero or exceeded the caller's claim balance.
    #[error("Invalid liquidity")]
    InvalidLiquidity,

    /// A directional swap would pay out nothing.
    #[error("Insufficient output amount")]
    InsufficientOutputAmount,

    /// The computed output fell below the caller's minimum.
    #[error("Slippage tolerance exceeded")]
    SlippageExceeded,

    /// A ledger transfer failed; the ledger's error is passed through.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Pool parameters or collaborators are inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// An intermediate 256-bit computation overflowed.
    #[error("Arithmetic overflow: {0}")]
    Overflow(&'static str),
}

impl AmmError {
    /// Returns the short, stable reason string for this error kind.
    ///
    /// Ledger errors report the ledger's own reason.
    ///
    /// ```
    /// use pair_amm::error::{AmmError, LedgerError};
    ///
    /// assert_eq!(AmmError::InvalidAmount.reason(), "Invalid amounts");
    /// assert_eq!(
    ///     AmmError::from(LedgerError::InsufficientAllowance).reason(),
    ///     "Insufficient allowance",
    /// );
    /// ```
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidAmount => "Invalid amounts",
            Self::InvalidAmountIn => "Invalid amountIn",
            Self::InvalidInputAmount => "Invalid input amount",
            Self::InvalidTokenIn => "Invalid tokenIn",
            Self::InvalidTokenOut => "Invalid tokenOut",
            Self::InsufficientLiquidity => "Insufficient liquidity",
            Self::InvalidLiquidity => "Invalid liquidity",
            Self::InsufficientOutputAmount => "Insufficient output amount",
            Self::SlippageExceeded => "Slippage tolerance exceeded",
            Self::Ledger(err) => err.reason(),
            Self::InvalidConfiguration(_) => "Invalid configuration",
            Self::Overflow(_) => "Arithmetic overflow",
        }
    }
}
