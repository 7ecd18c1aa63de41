//! Host that owns one pool together with its two asset ledgers.
//!
//! [`Exchange`] is the single-threaded aggregate: every call borrows the
//! pool and both ledgers at once and runs to completion.  [`SharedExchange`]
//! puts the whole aggregate behind one lock for multi-threaded hosts.

mod shared;

pub use shared::SharedExchange;

use crate::config::PoolConfig;
use crate::domain::{Address, Amount, AssetPair, Claims, PoolEvent, Redemption, SwapResult};
use crate::error::{AmmError, Result};
use crate::pools::{ConstantProductPool, LedgerPair};
use crate::traits::{FromConfig, FungibleLedger};

/// A constant-product pool wired to the ledgers of its two assets.
///
/// # Example
///
/// ```rust
/// use pair_amm::config::PoolConfig;
/// use pair_amm::domain::{Address, Amount};
/// use pair_amm::exchange::Exchange;
/// use pair_amm::ledger::{TokenLedger, WrappedNativeLedger};
/// use pair_amm::traits::FungibleLedger;
///
/// let pool = Address::from_bytes([0xff; 32]);
/// let token = Address::from_bytes([1; 32]);
/// let weth = Address::from_bytes([2; 32]);
/// let alice = Address::from_bytes([0xa1; 32]);
///
/// let config = PoolConfig::new(pool, token, weth).expect("distinct identities");
/// let mut exchange = Exchange::new(
///     &config,
///     TokenLedger::with_genesis(token, alice, Amount::new(1_000_000)),
///     WrappedNativeLedger::new(weth),
/// )
/// .expect("ledgers match config");
///
/// exchange.ledger_b_mut().deposit(alice, Amount::new(100)).expect("wrap");
/// exchange.ledger_a_mut().approve(alice, pool, Amount::new(1_000_000));
/// exchange.ledger_b_mut().approve(alice, pool, Amount::new(100));
/// exchange
///     .add_liquidity(alice, Amount::new(1_000_000), Amount::new(100))
///     .expect("funded and approved");
/// assert_eq!(exchange.reserve_b(), Amount::new(100));
/// ```
#[derive(Debug, Clone)]
pub struct Exchange<A, B> {
    pool: ConstantProductPool,
    ledger_a: A,
    ledger_b: B,
}

impl<A: FungibleLedger, B: FungibleLedger> Exchange<A, B> {
    /// Builds the pool described by `config` around the two ledgers.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `config` is invalid or
    /// a ledger does not track the asset of its slot.
    pub fn new(config: &PoolConfig, ledger_a: A, ledger_b: B) -> Result<Self> {
        let pool = ConstantProductPool::from_config(config)?;
        if ledger_a.address() != config.asset_a() {
            return Err(AmmError::InvalidConfiguration(
                "ledger A does not track asset A",
            ));
        }
        if ledger_b.address() != config.asset_b() {
            return Err(AmmError::InvalidConfiguration(
                "ledger B does not track asset B",
            ));
        }

        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                pool = %config.pool(),
                asset_a = %config.asset_a(),
                asset_b = %config.asset_b(),
                "Exchange created"
            );
        }

        Ok(Self {
            pool,
            ledger_a,
            ledger_b,
        })
    }

    fn split(&mut self) -> (&mut ConstantProductPool, LedgerPair<'_>) {
        (
            &mut self.pool,
            LedgerPair::new(&mut self.ledger_a, &mut self.ledger_b),
        )
    }

    // -- Operations -------------------------------------------------------------

    /// See [`ConstantProductPool::add_liquidity`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn add_liquidity(&mut self, caller: Address, amount_a: Amount, amount_b: Amount) -> Result<Claims> {
        let (pool, ledgers) = self.split();
        pool.add_liquidity(ledgers, caller, amount_a, amount_b)
    }

    /// See [`ConstantProductPool::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn remove_liquidity(&mut self, caller: Address, claims: Claims) -> Result<Redemption> {
        let (pool, ledgers) = self.split();
        pool.remove_liquidity(ledgers, caller, claims)
    }

    /// See [`ConstantProductPool::swap`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn swap(
        &mut self,
        caller: Address,
        token_in: Address,
        token_out: Address,
        amount_in: Amount,
        amount_out_min: Amount,
    ) -> Result<SwapResult> {
        let (pool, ledgers) = self.split();
        pool.swap(ledgers, caller, token_in, token_out, amount_in, amount_out_min)
    }

    /// See [`ConstantProductPool::swap_a_for_b`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn swap_a_for_b(&mut self, caller: Address, amount_in: Amount) -> Result<SwapResult> {
        let (pool, ledgers) = self.split();
        pool.swap_a_for_b(ledgers, caller, amount_in)
    }

    /// See [`ConstantProductPool::swap_b_for_a`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn swap_b_for_a(&mut self, caller: Address, amount_in: Amount) -> Result<SwapResult> {
        let (pool, ledgers) = self.split();
        pool.swap_b_for_a(ledgers, caller, amount_in)
    }

    // -- Queries ----------------------------------------------------------------

    /// Returns the pool.
    #[must_use]
    pub const fn pool(&self) -> &ConstantProductPool {
        &self.pool
    }

    /// Returns the ledger of asset A.
    #[must_use]
    pub const fn ledger_a(&self) -> &A {
        &self.ledger_a
    }

    /// Returns the ledger of asset B.
    #[must_use]
    pub const fn ledger_b(&self) -> &B {
        &self.ledger_b
    }

    /// Returns the ledger of asset A mutably, for approvals and transfers.
    pub fn ledger_a_mut(&mut self) -> &mut A {
        &mut self.ledger_a
    }

    /// Returns the ledger of asset B mutably, for approvals and transfers.
    pub fn ledger_b_mut(&mut self) -> &mut B {
        &mut self.ledger_b
    }

    /// Returns the pool's address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.pool.address()
    }

    /// Returns the two assets in slot order.
    #[must_use]
    pub const fn asset_pair(&self) -> AssetPair {
        self.pool.asset_pair()
    }

    /// Returns the recorded reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.pool.reserve_a()
    }

    /// Returns the recorded reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.pool.reserve_b()
    }

    /// Returns the number of outstanding claims.
    #[must_use]
    pub const fn total_claims(&self) -> Claims {
        self.pool.total_claims()
    }

    /// Returns the claims held by `owner`.
    #[must_use]
    pub fn claim_balance_of(&self, owner: &Address) -> Claims {
        self.pool.claim_balance_of(owner)
    }

    /// See [`ConstantProductPool::get_amount_out`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the computation overflows.
    pub fn get_amount_out(&self, amount_in: Amount, reserve_in: Amount, reserve_out: Amount) -> Result<Amount> {
        self.pool.get_amount_out(amount_in, reserve_in, reserve_out)
    }

    /// See [`ConstantProductPool::quote_swap`].
    ///
    /// # Errors
    ///
    /// As for the pool query.
    pub fn quote_swap(&self, token_in: &Address, amount_in: Amount) -> Result<Amount> {
        self.pool.quote_swap(token_in, amount_in)
    }

    /// Returns the events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        self.pool.events()
    }

    /// Drains and returns the recorded events.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        self.pool.take_events()
    }

    /// Wraps the exchange for shared use across threads.
    #[must_use]
    pub fn into_shared(self) -> SharedExchange<A, B> {
        SharedExchange::new(self)
    }
}
