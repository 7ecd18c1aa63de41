//! Constant-product pool with claim-token accounting.
//!
//! The pool prices swaps on `x × y = k` with a 0.2% fee taken from the
//! input.  The fee is never paid out separately: the full input is added to
//! the reserve, so `k` grows and liquidity providers earn it when they
//! redeem.
//!
//! # Swap Algorithm (asset A → asset B)
//!
//! 1. `amount_out = amount_in × 998 × reserve_b / (reserve_a × 1000 + amount_in × 998)`
//! 2. pull `amount_in` of A from the caller
//! 3. `reserve_a += amount_in`, `reserve_b -= amount_out`
//! 4. push `amount_out` of B to the caller
//!
//! # Atomicity
//!
//! Every mutating operation runs in four stages: validate and compute the
//! new state, dry-run every ledger transfer, perform the transfers, then
//! commit reserves and claims and record one [`PoolEvent`].  A failure in
//! the first two stages leaves every ledger and the pool untouched.
//!
//! # Invariants
//!
//! - `total_claims` equals the sum of all claim balances.
//! - Once claims are outstanding, both reserves are non-zero.
//! - A swap never decreases `reserve_a × reserve_b`.

use std::collections::HashMap;

use super::LedgerPair;
use crate::config::PoolConfig;
use crate::domain::{Address, Amount, AssetPair, Claims, PoolEvent, Redemption, Side, SwapResult};
use crate::error::{AmmError, Result};
use crate::math::{self, CheckedArithmetic};
use crate::traits::FromConfig;

/// A two-asset constant-product pool (`x · y = k`).
///
/// Reserves are the pool's own bookkeeping: balances sent to the pool's
/// address outside of its operations are ignored for pricing.
///
/// # Example
///
/// ```rust
/// use pair_amm::domain::{Address, Amount};
/// use pair_amm::ledger::TokenLedger;
/// use pair_amm::pools::{ConstantProductPool, LedgerPair};
/// use pair_amm::traits::FungibleLedger;
///
/// let pool_addr = Address::from_bytes([0xff; 32]);
/// let (asset_a, asset_b) = (Address::from_bytes([1; 32]), Address::from_bytes([2; 32]));
/// let alice = Address::from_bytes([0xa1; 32]);
///
/// let mut token_a = TokenLedger::with_genesis(asset_a, alice, Amount::new(1_000_000));
/// let mut token_b = TokenLedger::with_genesis(asset_b, alice, Amount::new(1_000_000));
/// token_a.approve(alice, pool_addr, Amount::new(40_000));
/// token_b.approve(alice, pool_addr, Amount::new(10_000));
///
/// let mut pool = ConstantProductPool::new(pool_addr, asset_a, asset_b).expect("valid pool");
/// let minted = pool
///     .add_liquidity(LedgerPair::new(&mut token_a, &mut token_b), alice, Amount::new(40_000), Amount::new(10_000))
///     .expect("funded and approved");
/// assert_eq!(minted.to_u128(), Some(20_000));
/// assert_eq!(pool.reserve_a(), Amount::new(40_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    address: Address,
    assets: AssetPair,
    reserve_a: Amount,
    reserve_b: Amount,
    total_claims: Claims,
    claims: HashMap<Address, Claims>,
    events: Vec<PoolEvent>,
}

impl ConstantProductPool {
    /// Creates an empty pool at `address` trading `asset_a` against
    /// `asset_b`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any two identities
    /// coincide.
    pub fn new(address: Address, asset_a: Address, asset_b: Address) -> Result<Self> {
        Self::from_config(&PoolConfig::new(address, asset_a, asset_b)?)
    }

    // -- Queries --------------------------------------------------------------

    /// Returns the pool's own address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Returns the two assets in slot order.
    #[must_use]
    pub const fn asset_pair(&self) -> AssetPair {
        self.assets
    }

    /// Returns the recorded reserve of asset A.
    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    /// Returns the recorded reserve of asset B.
    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    /// Returns the recorded reserve of `side`.
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::A => self.reserve_a,
            Side::B => self.reserve_b,
        }
    }

    /// Returns the number of outstanding claims.
    #[must_use]
    pub const fn total_claims(&self) -> Claims {
        self.total_claims
    }

    /// Returns the claims held by `owner`.
    #[must_use]
    pub fn claim_balance_of(&self, owner: &Address) -> Claims {
        self.claims.get(owner).copied().unwrap_or(Claims::ZERO)
    }

    /// Returns the events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Drains and returns the recorded events.
    pub fn take_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    /// Applies the swap pricing formula to arbitrary reserves.
    ///
    /// See [`math::get_amount_out`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if an intermediate product exceeds
    /// 256 bits.
    pub fn get_amount_out(
        &self,
        amount_in: Amount,
        reserve_in: Amount,
        reserve_out: Amount,
    ) -> Result<Amount> {
        math::get_amount_out(amount_in, reserve_in, reserve_out)
    }

    /// Quotes the output of selling `amount_in` of `token_in` against the
    /// current reserves, without changing anything.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidTokenIn`] if `token_in` is not in the pair.
    /// - [`AmmError::Overflow`] if the computation overflows.
    pub fn quote_swap(&self, token_in: &Address, amount_in: Amount) -> Result<Amount> {
        let side_in = self.assets.side_of(token_in).ok_or(AmmError::InvalidTokenIn)?;
        let amount_out = math::get_amount_out(
            amount_in,
            self.reserve(side_in),
            self.reserve(side_in.other()),
        )?;

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(%token_in, %amount_in, %amount_out, "Quote");
        }

        Ok(amount_out)
    }

    // -- Liquidity --------------------------------------------------------------

    /// Deposits `amount_a` of asset A and `amount_b` of asset B from
    /// `caller` and credits them with newly minted claims.
    ///
    /// The first deposit mints `isqrt(amount_a × amount_b)`; later deposits
    /// mint `min(amount_a × total / reserve_a, amount_b × total / reserve_b)`.
    /// The caller must have approved the pool's address for both amounts.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidity`] if no claims would be minted.
    /// - [`AmmError::Ledger`] if a pull would fail.
    /// - [`AmmError::InvalidConfiguration`] if `ledgers` do not track the
    ///   pool's assets.
    /// - [`AmmError::Overflow`] if a 256-bit counter overflows.
    pub fn add_liquidity(
        &mut self,
        mut ledgers: LedgerPair<'_>,
        caller: Address,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<Claims> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        self.check_ledgers(&ledgers)?;

        let minted = if self.total_claims.is_zero() {
            math::initial_claims(amount_a, amount_b)?
        } else {
            math::proportional_claims(
                amount_a,
                amount_b,
                self.reserve_a,
                self.reserve_b,
                self.total_claims,
            )?
        };

        let reserve_a = self.reserve_a.safe_add(&amount_a)?;
        let reserve_b = self.reserve_b.safe_add(&amount_b)?;
        let total_claims = self.total_claims.safe_add(&minted)?;
        let caller_claims = self.claim_balance_of(&caller).safe_add(&minted)?;

        let pool = self.address;
        ledgers
            .get(Side::A)
            .check_transfer_from(&pool, &caller, &pool, amount_a)?;
        ledgers
            .get(Side::B)
            .check_transfer_from(&pool, &caller, &pool, amount_b)?;
        ledgers
            .get_mut(Side::A)
            .transfer_from(pool, caller, pool, amount_a)?;
        ledgers
            .get_mut(Side::B)
            .transfer_from(pool, caller, pool, amount_b)?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.total_claims = total_claims;
        self.claims.insert(caller, caller_claims);
        self.events.push(PoolEvent::AddLiquidity {
            owner: caller,
            amount_a,
            amount_b,
        });

        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                %caller,
                %amount_a,
                %amount_b,
                %minted,
                total_claims = %self.total_claims,
                "Liquidity added"
            );
        }

        Ok(minted)
    }

    /// Burns `claims` of `caller`'s balance and pays out their share of
    /// both reserves, rounded down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidLiquidity`] if `claims` is zero or exceeds the
    ///   caller's balance.
    /// - [`AmmError::Ledger`] if a payout would fail.
    /// - [`AmmError::InvalidConfiguration`] if `ledgers` do not track the
    ///   pool's assets.
    /// - [`AmmError::Overflow`] if an intermediate product overflows.
    pub fn remove_liquidity(
        &mut self,
        mut ledgers: LedgerPair<'_>,
        caller: Address,
        claims: Claims,
    ) -> Result<Redemption> {
        let held = self.claim_balance_of(&caller);
        if claims.is_zero() || claims > held {
            return Err(AmmError::InvalidLiquidity);
        }
        self.check_ledgers(&ledgers)?;

        let redemption =
            math::redeem_amounts(claims, self.reserve_a, self.reserve_b, self.total_claims)?;
        let (amount_a, amount_b) = (redemption.amount_a(), redemption.amount_b());

        let reserve_a = self.reserve_a.safe_sub(&amount_a)?;
        let reserve_b = self.reserve_b.safe_sub(&amount_b)?;
        let total_claims = self.total_claims.safe_sub(&claims)?;
        let caller_claims = held.safe_sub(&claims)?;

        let pool = self.address;
        ledgers
            .get(Side::A)
            .check_transfer(&pool, &caller, amount_a)?;
        ledgers
            .get(Side::B)
            .check_transfer(&pool, &caller, amount_b)?;
        ledgers.get_mut(Side::A).transfer(pool, caller, amount_a)?;
        ledgers.get_mut(Side::B).transfer(pool, caller, amount_b)?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.total_claims = total_claims;
        self.claims.insert(caller, caller_claims);
        self.events
            .push(PoolEvent::RemoveLiquidity { amount_a, amount_b });

        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                %caller,
                burned = %claims,
                %amount_a,
                %amount_b,
                total_claims = %self.total_claims,
                "Liquidity removed"
            );
        }

        Ok(redemption)
    }

    // -- Swaps ------------------------------------------------------------------

    /// Sells `amount_in` of `token_in` for `token_out`, paying the output
    /// to `caller`.
    ///
    /// Checks run in this order: distinct tokens, non-zero input, known
    /// input asset, known output asset, slippage floor.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidTokenOut`] if `token_in == token_out` or
    ///   `token_out` is not in the pair.
    /// - [`AmmError::InvalidAmountIn`] if `amount_in` is zero.
    /// - [`AmmError::InvalidTokenIn`] if `token_in` is not in the pair.
    /// - [`AmmError::SlippageExceeded`] if the output is below
    ///   `amount_out_min`.
    /// - [`AmmError::Ledger`] if the pull or the payout would fail.
    /// - [`AmmError::Overflow`] if the computation overflows.
    pub fn swap(
        &mut self,
        ledgers: LedgerPair<'_>,
        caller: Address,
        token_in: Address,
        token_out: Address,
        amount_in: Amount,
        amount_out_min: Amount,
    ) -> Result<SwapResult> {
        if token_in == token_out {
            return Err(AmmError::InvalidTokenOut);
        }
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmountIn);
        }
        let side_in = self.assets.side_of(&token_in).ok_or(AmmError::InvalidTokenIn)?;
        if self.assets.side_of(&token_out).is_none() {
            return Err(AmmError::InvalidTokenOut);
        }

        let amount_out = math::get_amount_out(
            amount_in,
            self.reserve(side_in),
            self.reserve(side_in.other()),
        )?;
        if amount_out < amount_out_min {
            return Err(AmmError::SlippageExceeded);
        }

        self.settle_swap(ledgers, caller, side_in, amount_in, amount_out)
    }

    /// Sells `amount_in` of asset A for asset B with no slippage floor.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInputAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to zero.
    /// - [`AmmError::Ledger`] if the pull or the payout would fail.
    /// - [`AmmError::Overflow`] if the computation overflows.
    pub fn swap_a_for_b(
        &mut self,
        ledgers: LedgerPair<'_>,
        caller: Address,
        amount_in: Amount,
    ) -> Result<SwapResult> {
        self.swap_side(ledgers, caller, Side::A, amount_in)
    }

    /// Sells `amount_in` of asset B for asset A with no slippage floor.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidInputAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientOutputAmount`] if the output rounds to zero.
    /// - [`AmmError::Ledger`] if the pull or the payout would fail.
    /// - [`AmmError::Overflow`] if the computation overflows.
    pub fn swap_b_for_a(
        &mut self,
        ledgers: LedgerPair<'_>,
        caller: Address,
        amount_in: Amount,
    ) -> Result<SwapResult> {
        self.swap_side(ledgers, caller, Side::B, amount_in)
    }

    // -- Internals --------------------------------------------------------------

    fn swap_side(
        &mut self,
        ledgers: LedgerPair<'_>,
        caller: Address,
        side_in: Side,
        amount_in: Amount,
    ) -> Result<SwapResult> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidInputAmount);
        }
        let amount_out = math::get_amount_out(
            amount_in,
            self.reserve(side_in),
            self.reserve(side_in.other()),
        )?;
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        self.settle_swap(ledgers, caller, side_in, amount_in, amount_out)
    }

    /// Moves the swap's balances and commits the new reserves.
    fn settle_swap(
        &mut self,
        mut ledgers: LedgerPair<'_>,
        caller: Address,
        side_in: Side,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Result<SwapResult> {
        self.check_ledgers(&ledgers)?;
        let side_out = side_in.other();

        let reserve_in = self.reserve(side_in).safe_add(&amount_in)?;
        let reserve_out = self.reserve(side_out).safe_sub(&amount_out)?;

        let pool = self.address;
        ledgers
            .get(side_in)
            .check_transfer_from(&pool, &caller, &pool, amount_in)?;
        ledgers
            .get(side_out)
            .check_transfer(&pool, &caller, amount_out)?;
        ledgers
            .get_mut(side_in)
            .transfer_from(pool, caller, pool, amount_in)?;
        ledgers
            .get_mut(side_out)
            .transfer(pool, caller, amount_out)?;

        self.set_reserve(side_in, reserve_in);
        self.set_reserve(side_out, reserve_out);

        let token_in = self.assets.asset(side_in);
        let token_out = self.assets.asset(side_out);
        self.events.push(PoolEvent::Swap {
            amount_in,
            amount_out,
            token_in,
            token_out,
        });

        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                %caller,
                %token_in,
                %token_out,
                %amount_in,
                %amount_out,
                reserve_a = %self.reserve_a,
                reserve_b = %self.reserve_b,
                "Swap"
            );
        }

        Ok(SwapResult::new(amount_in, amount_out, token_in, token_out))
    }

    fn set_reserve(&mut self, side: Side, amount: Amount) {
        match side {
            Side::A => self.reserve_a = amount,
            Side::B => self.reserve_b = amount,
        }
    }

    fn check_ledgers(&self, ledgers: &LedgerPair<'_>) -> Result<()> {
        if ledgers.get(Side::A).address() != self.assets.asset_a() {
            return Err(AmmError::InvalidConfiguration(
                "ledger A does not track asset A",
            ));
        }
        if ledgers.get(Side::B).address() != self.assets.asset_b() {
            return Err(AmmError::InvalidConfiguration(
                "ledger B does not track asset B",
            ));
        }
        Ok(())
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates an empty pool from the given configuration.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            address: config.pool(),
            assets: config.asset_pair()?,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_claims: Claims::ZERO,
            claims: HashMap::new(),
            events: Vec::new(),
        })
    }
}
