//! Integer math for the pool.
//!
//! Everything here works on 256-bit unsigned integers and rounds down.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`U256`] | 256-bit unsigned integer backing `Amount` and `Claims` |
//! | [`isqrt`] | floor square root for the first deposit |
//! | [`get_amount_out`] | fee-adjusted swap output |
//! | [`initial_claims`], [`proportional_claims`], [`redeem_amounts`] | claim accounting |
//! | [`CheckedArithmetic`] | `Result`-returning add/sub for counters |

mod checked;
mod liquidity;
mod pricing;
mod sqrt;
mod u256;

pub use checked::CheckedArithmetic;
pub use liquidity::{initial_claims, proportional_claims, redeem_amounts};
pub use pricing::{FEE_DENOMINATOR, FEE_NUMERATOR, get_amount_out};
pub use sqrt::isqrt;
pub use u256::U256;
