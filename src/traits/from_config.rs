//! Construction of a pool from its configuration.
//!
//! Implementations **must** validate the configuration during construction,
//! so a successfully built pool is always in a valid initial state.  There
//! is no blanket implementation: each pairing of pool and config type is
//! written out explicitly.

use crate::error::AmmError;

/// Builds `Self` from a configuration of type `C`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if the configuration is
/// invalid.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// The configuration is taken by reference because callers usually keep
    /// it around (for example to build a host around the pool).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any invariant of
    /// `config` does not hold.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
