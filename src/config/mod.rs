//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for a pool: its own address
//! and the identities of its two assets.  Pools are built from it through
//! [`FromConfig`](crate::traits::FromConfig).

mod pool_config;

pub use pool_config::PoolConfig;
