//! 256-bit unsigned integer backing every amount, reserve and claim.
//!
//! Reserve products of realistic supplies (an 18-decimal asset with a
//! million-unit supply paired against ten units of another) already exceed
//! `u128`, so all pool arithmetic is carried out at 256 bits.

use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

impl U256 {
    /// Builds a `U256` from a `u128` in a `const` context.
    #[must_use]
    pub const fn widen(value: u128) -> Self {
        Self([value as u64, (value >> 64) as u64, 0, 0])
    }

    /// Returns the value as `u128`, or `None` if it does not fit.
    #[must_use]
    pub const fn narrow(&self) -> Option<u128> {
        let words = self.0;
        if words[2] != 0 || words[3] != 0 {
            return None;
        }
        Some(((words[1] as u128) << 64) | words[0] as u128)
    }
}
