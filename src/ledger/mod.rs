//! In-memory [`FungibleLedger`](crate::traits::FungibleLedger)
//! implementations.
//!
//! [`TokenLedger`] is a plain token with a fixed genesis supply;
//! [`WrappedNativeLedger`] mints and burns against native currency.

mod token;
mod wrapped_native;

pub use token::TokenLedger;
pub use wrapped_native::WrappedNativeLedger;
