//! Pool implementation and the ledger view it operates on.
//!
//! | Item | Role |
//! |------|------|
//! | [`ConstantProductPool`] | reserves, claim accounting and swaps |
//! | [`LedgerPair`] | borrowed access to the two asset ledgers for one call |

pub mod constant_product;
mod ledger_pair;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use ledger_pair::LedgerPair;
