//! In-memory fungible token ledger.

use std::collections::HashMap;

use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::traits::FungibleLedger;

/// A fungible token ledger held entirely in memory.
///
/// Balances and allowances live in hash maps; absent entries read as zero.
/// Supply changes only through [`mint`](Self::mint) and
/// [`burn`](Self::burn).
///
/// # Examples
///
/// ```
/// use pair_amm::domain::{Address, Amount};
/// use pair_amm::ledger::TokenLedger;
/// use pair_amm::traits::FungibleLedger;
///
/// let token = Address::from_bytes([1u8; 32]);
/// let alice = Address::from_bytes([0xa1; 32]);
/// let bob = Address::from_bytes([0xb0; 32]);
///
/// let mut ledger = TokenLedger::with_genesis(token, alice, Amount::new(1_000));
/// ledger.transfer(alice, bob, Amount::new(300)).expect("funded");
/// assert_eq!(ledger.balance_of(&bob), Amount::new(300));
/// assert_eq!(ledger.total_supply(), Amount::new(1_000));
/// ```
#[derive(Debug, Clone)]
pub struct TokenLedger {
    address: Address,
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
}

impl TokenLedger {
    /// Creates an empty ledger for the asset `address`.
    #[must_use]
    pub fn new(address: Address) -> Self {
        Self {
            address,
            total_supply: Amount::ZERO,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// Creates a ledger whose whole `supply` is held by `owner`.
    #[must_use]
    pub fn with_genesis(address: Address, owner: Address, supply: Amount) -> Self {
        let mut ledger = Self::new(address);
        ledger.total_supply = supply;
        if !supply.is_zero() {
            ledger.balances.insert(owner, supply);
        }
        ledger
    }

    /// Creates `amount` new units and credits them to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Overflow`] if the supply or the balance would
    /// overflow.
    pub fn mint(&mut self, to: Address, amount: Amount) -> Result<(), LedgerError> {
        let supply = self
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        let balance = self
            .balance_of(&to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.total_supply = supply;
        self.balances.insert(to, balance);
        Ok(())
    }

    /// Destroys `amount` units held by `from`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if `from` holds less
    /// than `amount`.
    pub fn burn(&mut self, from: Address, amount: Amount) -> Result<(), LedgerError> {
        let balance = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        // Supply is the sum of balances, so it cannot drop below `amount`.
        let supply = self
            .total_supply
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.total_supply = supply;
        self.balances.insert(from, balance);
        Ok(())
    }

    fn move_balance(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), LedgerError> {
        self.check_transfer(&from, &to, amount)?;
        if from == to {
            return Ok(());
        }
        let debited = self
            .balance_of(&from)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        let credited = self
            .balance_of(&to)
            .checked_add(&amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(from, debited);
        self.balances.insert(to, credited);

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                asset = %self.address,
                %from,
                %to,
                %amount,
                "Transfer"
            );
        }

        Ok(())
    }
}

impl FungibleLedger for TokenLedger {
    fn address(&self) -> Address {
        self.address
    }

    fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn balance_of(&self, owner: &Address) -> Amount {
        self.balances.get(owner).copied().unwrap_or(Amount::ZERO)
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn approve(&mut self, owner: Address, spender: Address, amount: Amount) {
        self.allowances.insert((owner, spender), amount);
    }

    fn transfer(&mut self, from: Address, to: Address, amount: Amount) -> Result<(), LedgerError> {
        self.move_balance(from, to, amount)
    }

    fn transfer_from(
        &mut self,
        spender: Address,
        owner: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.check_transfer_from(&spender, &owner, &to, amount)?;
        let remaining = self
            .allowance(&owner, &spender)
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance)?;
        self.move_balance(owner, to, amount)?;
        self.allowances.insert((owner, spender), remaining);
        Ok(())
    }
}
