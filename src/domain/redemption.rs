//! Amounts released by burning claims.

use super::Amount;

/// Both asset amounts paid out by a liquidity removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Redemption {
    amount_a: Amount,
    amount_b: Amount,
}

impl Redemption {
    /// Creates a new `Redemption`.
    pub const fn new(amount_a: Amount, amount_b: Amount) -> Self {
        Self { amount_a, amount_b }
    }

    /// Amount of asset A released.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of asset B released.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }
}
