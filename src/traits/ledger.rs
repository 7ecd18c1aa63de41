//! Boundary of a fungible balance ledger.
//!
//! The pool never stores asset balances itself: it pulls deposits and swap
//! inputs from callers with [`transfer_from`](FungibleLedger::transfer_from)
//! (the pool acting as spender) and pays out with
//! [`transfer`](FungibleLedger::transfer).
//!
//! # Dry runs
//!
//! A pool operation usually touches two ledgers.  To stay atomic it first
//! calls [`check_transfer`](FungibleLedger::check_transfer) /
//! [`check_transfer_from`](FungibleLedger::check_transfer_from) for every
//! transfer it needs, and only performs them once all checks pass.  The
//! default implementations derive the answer from the query methods, so an
//! implementor only needs to override them when its transfer rules differ.

use crate::domain::{Address, Amount};
use crate::error::LedgerError;

/// A fungible balance ledger with delegated allowances.
pub trait FungibleLedger {
    /// Returns the identity of the asset this ledger tracks.
    fn address(&self) -> Address;

    /// Returns the total amount in circulation.
    fn total_supply(&self) -> Amount;

    /// Returns the balance held by `owner`.
    fn balance_of(&self, owner: &Address) -> Amount;

    /// Returns how much `spender` may still move out of `owner`'s balance.
    fn allowance(&self, owner: &Address, spender: &Address) -> Amount;

    /// Sets `spender`'s allowance over `owner`'s balance, overwriting any
    /// previous value.
    fn approve(&mut self, owner: Address, spender: Address, amount: Amount);

    /// Moves `amount` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::Overflow`] if crediting `to` overflows.
    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), LedgerError>;

    /// Moves `amount` from `owner` to `to` on behalf of `spender`, debiting
    /// the allowance.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientAllowance`] if the allowance is below
    ///   `amount` (checked first).
    /// - [`LedgerError::InsufficientBalance`] if `owner` holds less than
    ///   `amount`.
    /// - [`LedgerError::Overflow`] if crediting `to` overflows.
    fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Reports whether [`transfer`](Self::transfer) would succeed, without
    /// changing any state.
    ///
    /// # Errors
    ///
    /// The error `transfer` would return.
    fn check_transfer(&self, from: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        if self.balance_of(from) < amount {
            return Err(LedgerError::InsufficientBalance);
        }
        if from != to && self.balance_of(to).checked_add(&amount).is_none() {
            return Err(LedgerError::Overflow);
        }
        Ok(())
    }

    /// Reports whether [`transfer_from`](Self::transfer_from) would succeed,
    /// without changing any state.
    ///
    /// # Errors
    ///
    /// The error `transfer_from` would return.
    fn check_transfer_from(
        &self,
        spender: &Address,
        owner: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if self.allowance(owner, spender) < amount {
            return Err(LedgerError::InsufficientAllowance);
        }
        self.check_transfer(owner, to, amount)
    }
}
