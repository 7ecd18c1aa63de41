//! Outcome of a swap operation.

use super::{Address, Amount};

/// The outcome of a committed swap.
///
/// `amount_out` may be zero for the general swap entry point when the
/// caller accepted a zero minimum.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, Amount, SwapResult};
///
/// let token_in = Address::from_bytes([1u8; 32]);
/// let token_out = Address::from_bytes([2u8; 32]);
/// let result = SwapResult::new(Amount::new(1_000), Amount::new(907), token_in, token_out);
/// assert_eq!(result.amount_out(), Amount::new(907));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapResult {
    amount_in: Amount,
    amount_out: Amount,
    token_in: Address,
    token_out: Address,
}

impl SwapResult {
    /// Creates a new `SwapResult`.
    pub const fn new(
        amount_in: Amount,
        amount_out: Amount,
        token_in: Address,
        token_out: Address,
    ) -> Self {
        Self {
            amount_in,
            amount_out,
            token_in,
            token_out,
        }
    }

    /// Returns the input amount pulled from the caller.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Returns the output amount pushed to the caller.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Returns the asset sold to the pool.
    pub const fn token_in(&self) -> Address {
        self.token_in
    }

    /// Returns the asset bought from the pool.
    pub const fn token_out(&self) -> Address {
        self.token_out
    }
}
