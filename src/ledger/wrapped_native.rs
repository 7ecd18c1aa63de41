//! Ledger that wraps the host's native currency 1:1.

use super::TokenLedger;
use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::traits::FungibleLedger;

/// A fungible ledger minted 1:1 against native currency.
///
/// Native value enters through [`deposit`](Self::deposit) or a plain
/// transfer to the ledger ([`receive`](Self::receive)), and leaves through
/// [`withdraw`](Self::withdraw).  The ledger keeps the native amount it
/// holds equal to its total supply at all times.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, Amount};
/// use pair_amm::ledger::WrappedNativeLedger;
/// use pair_amm::traits::FungibleLedger;
///
/// let user = Address::from_bytes([0xa1; 32]);
/// let mut weth = WrappedNativeLedger::new(Address::from_bytes([2u8; 32]));
///
/// weth.receive(user, Amount::new(5)).expect("mint");
/// assert_eq!(weth.balance_of(&user), Amount::new(5));
///
/// assert_eq!(weth.withdraw(user, Amount::new(2)), Ok(Amount::new(2)));
/// assert_eq!(weth.native_locked(), weth.total_supply());
/// ```
#[derive(Debug, Clone)]
pub struct WrappedNativeLedger {
    inner: TokenLedger,
    native_locked: Amount,
}

impl WrappedNativeLedger {
    /// Creates an empty wrapped ledger for the asset `address`.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            inner: TokenLedger::new(address),
            native_locked: Amount::ZERO,
        }
    }

    /// Native currency currently held against the wrapped supply.
    #[must_use]
    pub const fn native_locked(&self) -> Amount {
        self.native_locked
    }

    /// Wraps `value` native currency sent by `caller`.
    ///
    /// A zero `value` succeeds and mints nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the supply would overflow.
    pub fn deposit(&mut self, caller: Address, value: Amount) -> Result<(), LedgerError> {
        if value.is_zero() {
            return Ok(());
        }
        let locked = self
            .native_locked
            .checked_add(&value)
            .ok_or(LedgerError::Overflow)?;
        self.inner.mint(caller, value)?;
        self.native_locked = locked;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(asset = %self.inner.address(), %caller, %value, "Deposit");
        }

        Ok(())
    }

    /// Handles native currency sent directly to the ledger; behaves exactly
    /// like [`deposit`](Self::deposit).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the supply would overflow.
    pub fn receive(&mut self, caller: Address, value: Amount) -> Result<(), LedgerError> {
        self.deposit(caller, value)
    }

    /// Burns `amount` of `caller`'s wrapped balance and returns the native
    /// amount released to them.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if `caller` holds less
    /// than `amount`; nothing changes in that case.
    pub fn withdraw(&mut self, caller: Address, amount: Amount) -> Result<Amount, LedgerError> {
        if self.inner.balance_of(&caller) < amount {
            #[cfg(feature = "tracing")]
            {
                tracing::warn!(
                    asset = %self.inner.address(),
                    %caller,
                    %amount,
                    balance = %self.inner.balance_of(&caller),
                    "Withdrawal exceeds wrapped balance"
                );
            }
            return Err(LedgerError::InsufficientBalance);
        }
        let locked = self
            .native_locked
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.inner.burn(caller, amount)?;
        self.native_locked = locked;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(asset = %self.inner.address(), %caller, %amount, "Withdraw");
        }

        Ok(amount)
    }
}

impl FungibleLedger for WrappedNativeLedger {
    fn address(&self) -> Address {
        self.inner.address()
    }

    fn total_supply(&self) -> Amount {
        self.inner.total_supply()
    }

    fn balance_of(&self, owner: &Address) -> Amount {
        self.inner.balance_of(owner)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.inner.allowance(owner, spender)
    }

    fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        self.inner.approve(owner, spender, amount);
    }

    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), LedgerError> {
        self.inner.transfer(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.inner.transfer_from(spender, owner, to, amount)
    }
}
