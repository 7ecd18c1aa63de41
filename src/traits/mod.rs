//! Trait seams of the crate.
//!
//! [`FungibleLedger`] is the boundary to the asset ledgers a pool moves
//! balances on, and [`FromConfig`] is configuration-driven construction.

mod from_config;
mod ledger;

pub use from_config::FromConfig;
pub use ledger::FungibleLedger;
