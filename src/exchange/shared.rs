//! Thread-safe handle to an [`Exchange`].

use std::sync::Arc;

use parking_lot::Mutex;

use super::Exchange;
use crate::domain::{Address, Amount, Claims, PoolEvent, Redemption, SwapResult};
use crate::error::Result;
use crate::traits::FungibleLedger;

/// A cloneable, lock-guarded [`Exchange`].
///
/// Every operation takes the one lock for its whole duration, so pool
/// and ledger state are only ever observed between complete operations.
#[derive(Debug)]
pub struct SharedExchange<A, B> {
    inner: Arc<Mutex<Exchange<A, B>>>,
}

impl<A, B> Clone for SharedExchange<A, B> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A: FungibleLedger, B: FungibleLedger> SharedExchange<A, B> {
    /// Wraps `exchange`.
    #[must_use]
    pub fn new(exchange: Exchange<A, B>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(exchange)),
        }
    }

    /// Runs `f` with exclusive access to the exchange.
    ///
    /// Use this to combine ledger calls (approvals, wrapping) with pool
    /// operations under one lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut Exchange<A, B>) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// See [`Exchange::add_liquidity`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn add_liquidity(&self, caller: Address, amount_a: Amount, amount_b: Amount) -> Result<Claims> {
        self.inner.lock().add_liquidity(caller, amount_a, amount_b)
    }

    /// See [`Exchange::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn remove_liquidity(&self, caller: Address, claims: Claims) -> Result<Redemption> {
        self.inner.lock().remove_liquidity(caller, claims)
    }

    /// See [`Exchange::swap`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn swap(
        &self,
        caller: Address,
        token_in: Address,
        token_out: Address,
        amount_in: Amount,
        amount_out_min: Amount,
    ) -> Result<SwapResult> {
        self.inner
            .lock()
            .swap(caller, token_in, token_out, amount_in, amount_out_min)
    }

    /// See [`Exchange::swap_a_for_b`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn swap_a_for_b(&self, caller: Address, amount_in: Amount) -> Result<SwapResult> {
        self.inner.lock().swap_a_for_b(caller, amount_in)
    }

    /// See [`Exchange::swap_b_for_a`].
    ///
    /// # Errors
    ///
    /// As for the pool operation.
    pub fn swap_b_for_a(&self, caller: Address, amount_in: Amount) -> Result<SwapResult> {
        self.inner.lock().swap_b_for_a(caller, amount_in)
    }

    /// Returns both reserves from one consistent snapshot.
    #[must_use]
    pub fn reserves(&self) -> (Amount, Amount) {
        let guard = self.inner.lock();
        (guard.reserve_a(), guard.reserve_b())
    }

    /// Returns the number of outstanding claims.
    #[must_use]
    pub fn total_claims(&self) -> Claims {
        self.inner.lock().total_claims()
    }

    /// Returns the claims held by `owner`.
    #[must_use]
    pub fn claim_balance_of(&self, owner: &Address) -> Claims {
        self.inner.lock().claim_balance_of(owner)
    }

    /// See [`Exchange::quote_swap`].
    ///
    /// # Errors
    ///
    /// As for the pool query.
    pub fn quote_swap(&self, token_in: &Address, amount_in: Amount) -> Result<Amount> {
        self.inner.lock().quote_swap(token_in, amount_in)
    }

    /// Drains and returns the recorded events.
    pub fn take_events(&self) -> Vec<PoolEvent> {
        self.inner.lock().take_events()
    }
}
