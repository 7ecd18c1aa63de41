//! Mutable view of the two ledgers a pool trades on.

use crate::domain::Side;
use crate::traits::FungibleLedger;

/// Borrowed access to the ledgers of asset A and asset B for the duration
/// of one pool operation.
///
/// The two borrows are distinct, so a single ledger can never stand in for
/// both sides.
pub struct LedgerPair<'a> {
    a: &'a mut dyn FungibleLedger,
    b: &'a mut dyn FungibleLedger,
}

impl<'a> LedgerPair<'a> {
    /// Pairs the ledger of asset A with the ledger of asset B.
    pub fn new(a: &'a mut dyn FungibleLedger, b: &'a mut dyn FungibleLedger) -> Self {
        Self { a, b }
    }

    /// Returns the ledger for `side`.
    #[must_use]
    pub fn get(&self, side: Side) -> &(dyn FungibleLedger + 'a) {
        match side {
            Side::A => &*self.a,
            Side::B => &*self.b,
        }
    }

    /// Returns the ledger for `side` mutably.
    pub fn get_mut(&mut self, side: Side) -> &mut (dyn FungibleLedger + 'a) {
        match side {
            Side::A => &mut *self.a,
            Side::B => &mut *self.b,
        }
    }
}

impl core::fmt::Debug for LedgerPair<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LedgerPair")
            .field("a", &self.a.address())
            .field("b", &self.b.address())
            .finish()
    }
}
