//! Value types used throughout the pool.
//!
//! Identities, 256-bit amounts and claim units, the two-slot asset pair, and
//! the records returned or logged by pool operations.

mod address;
mod amount;
mod asset_pair;
mod claims;
mod event;
mod redemption;
mod swap_result;

pub use address::Address;
pub use amount::Amount;
pub use asset_pair::{AssetPair, Side};
pub use claims::Claims;
pub use event::PoolEvent;
pub use redemption::Redemption;
pub use swap_result::SwapResult;
