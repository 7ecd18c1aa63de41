//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Claim conservation**: `total_claims` equals the sum of balances
//!    after any sequence of operations.
//! 2. **Reserve backing**: recorded reserves equal the pool's ledger
//!    balances, and are non-zero while claims are outstanding.
//! 3. **Invariant preservation**: a swap never decreases `k`.
//! 4. **Failure atomicity**: a rejected operation changes nothing.
//! 5. **Swap reversibility**: a round trip A→B→A returns less than sent.
//! 6. **Liquidity round trip**: deposit then redeem-all returns at most the
//!    deposit.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::{ConstantProductPool, LedgerPair};
use crate::domain::{Address, Amount, Claims};
use crate::ledger::TokenLedger;
use crate::math::U256;
use crate::traits::FungibleLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const ACTORS: u8 = 3;
const FUNDING: u128 = 1_000_000_000_000_000_000_000_000;

fn pool_addr() -> Address {
    Address::from_bytes([0xff; 32])
}

fn actor(i: u8) -> Address {
    Address::from_bytes([0xa0 + i; 32])
}

struct World {
    pool: ConstantProductPool,
    token_a: TokenLedger,
    token_b: TokenLedger,
}

impl World {
    fn new() -> Self {
        let (asset_a, asset_b) = (Address::from_bytes([1; 32]), Address::from_bytes([2; 32]));
        let Ok(pool) = ConstantProductPool::new(pool_addr(), asset_a, asset_b) else {
            panic!("valid pool");
        };
        let mut token_a = TokenLedger::new(asset_a);
        let mut token_b = TokenLedger::new(asset_b);
        for i in 0..ACTORS {
            let Ok(()) = token_a.mint(actor(i), Amount::new(FUNDING)) else {
                panic!("mint");
            };
            let Ok(()) = token_b.mint(actor(i), Amount::new(FUNDING)) else {
                panic!("mint");
            };
            token_a.approve(actor(i), pool_addr(), Amount::MAX);
            token_b.approve(actor(i), pool_addr(), Amount::MAX);
        }
        Self {
            pool,
            token_a,
            token_b,
        }
    }

    fn ledgers<'a>(token_a: &'a mut TokenLedger, token_b: &'a mut TokenLedger) -> LedgerPair<'a> {
        LedgerPair::new(token_a, token_b)
    }

    fn apply(&mut self, op: &Op) -> bool {
        let ledgers = Self::ledgers(&mut self.token_a, &mut self.token_b);
        match *op {
            Op::Add { who, a, b } => self
                .pool
                .add_liquidity(ledgers, actor(who), Amount::new(a), Amount::new(b))
                .is_ok(),
            Op::Remove { who, percent } => {
                let held = self.pool.claim_balance_of(&actor(who)).get();
                let claims = held * U256::from(percent) / U256::from(100u8);
                self.pool
                    .remove_liquidity(ledgers, actor(who), Claims::from_u256(claims))
                    .is_ok()
            }
            Op::SwapAForB { who, amount } => self
                .pool
                .swap_a_for_b(ledgers, actor(who), Amount::new(amount))
                .is_ok(),
            Op::SwapBForA { who, amount } => self
                .pool
                .swap_b_for_a(ledgers, actor(who), Amount::new(amount))
                .is_ok(),
        }
    }

    fn k(&self) -> U256 {
        self.pool.reserve_a().get() * self.pool.reserve_b().get()
    }

    fn claim_sum(&self) -> U256 {
        (0..ACTORS).fold(U256::zero(), |acc, i| {
            acc + self.pool.claim_balance_of(&actor(i)).get()
        })
    }
}

#[derive(Debug, Clone)]
enum Op {
    Add { who: u8, a: u128, b: u128 },
    Remove { who: u8, percent: u8 },
    SwapAForB { who: u8, amount: u128 },
    SwapBForA { who: u8, amount: u128 },
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![1u128..=1_000, 1_000u128..=1_000_000_000_000_000_000_000]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let who = 0..ACTORS;
    prop_oneof![
        (who.clone(), amount_strategy(), amount_strategy())
            .prop_map(|(who, a, b)| Op::Add { who, a, b }),
        (who.clone(), 0u8..=100).prop_map(|(who, percent)| Op::Remove { who, percent }),
        (who.clone(), amount_strategy()).prop_map(|(who, amount)| Op::SwapAForB { who, amount }),
        (who, amount_strategy()).prop_map(|(who, amount)| Op::SwapBForA { who, amount }),
    ]
}

// ---------------------------------------------------------------------------
// Properties 1-4: operation sequences
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariants_hold_over_sequences(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut world = World::new();

        for op in &ops {
            let before = world.pool.clone();
            let balances_before = (
                world.token_a.balance_of(&pool_addr()),
                world.token_b.balance_of(&pool_addr()),
            );
            let k_before = world.k();

            let ok = world.apply(op);

            if !ok {
                prop_assert_eq!(&world.pool, &before, "failed {:?} mutated the pool", op);
                prop_assert_eq!(world.token_a.balance_of(&pool_addr()), balances_before.0);
                prop_assert_eq!(world.token_b.balance_of(&pool_addr()), balances_before.1);
                continue;
            }

            prop_assert_eq!(world.claim_sum(), world.pool.total_claims().get());
            prop_assert_eq!(world.token_a.balance_of(&pool_addr()), world.pool.reserve_a());
            prop_assert_eq!(world.token_b.balance_of(&pool_addr()), world.pool.reserve_b());
            if !world.pool.total_claims().is_zero() {
                prop_assert!(!world.pool.reserve_a().is_zero());
                prop_assert!(!world.pool.reserve_b().is_zero());
            }
            if matches!(op, Op::SwapAForB { .. } | Op::SwapBForA { .. }) {
                prop_assert!(world.k() >= k_before, "k decreased after {:?}", op);
            }
            prop_assert_eq!(world.pool.events().len(), before.events().len() + 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Properties 5-6: round trips
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_reversibility(
        seed_a in 1_000_000u128..=1_000_000_000_000_000_000_000,
        seed_b in 1_000_000u128..=1_000_000_000_000_000_000_000,
        swap_in in 1u128..=1_000_000_000_000_000_000,
    ) {
        let mut world = World::new();
        prop_assume!(world.apply(&Op::Add { who: 0, a: seed_a, b: seed_b }));

        let trader = actor(1);
        let start_a = world.token_a.balance_of(&trader);
        let ledgers = World::ledgers(&mut world.token_a, &mut world.token_b);
        let Ok(there) = world.pool.swap_a_for_b(ledgers, trader, Amount::new(swap_in)) else {
            return Ok(());
        };
        let Some(back_in) = there.amount_out().to_u128() else {
            return Ok(());
        };
        let ledgers = World::ledgers(&mut world.token_a, &mut world.token_b);
        let Ok(back) = world.pool.swap_b_for_a(ledgers, trader, Amount::new(back_in)) else {
            return Ok(());
        };

        prop_assert!(
            back.amount_out() < Amount::new(swap_in),
            "round-trip should lose value: final={} >= original={}",
            back.amount_out(), swap_in
        );
        prop_assert!(world.token_a.balance_of(&trader) < start_a);
    }

    #[test]
    fn prop_liquidity_round_trip(
        seed_a in 1u128..=1_000_000_000_000_000_000_000,
        seed_b in 1u128..=1_000_000_000_000_000_000_000,
        add_a in 1u128..=1_000_000_000_000_000_000_000,
        add_b in 1u128..=1_000_000_000_000_000_000_000,
    ) {
        let mut world = World::new();
        prop_assume!(world.apply(&Op::Add { who: 0, a: seed_a, b: seed_b }));

        let lp = actor(1);
        let (start_a, start_b) = (world.token_a.balance_of(&lp), world.token_b.balance_of(&lp));
        let reserves_before = (world.pool.reserve_a(), world.pool.reserve_b());
        if !world.apply(&Op::Add { who: 1, a: add_a, b: add_b }) {
            return Ok(());
        }
        let removed = world.apply(&Op::Remove { who: 1, percent: 100 });
        prop_assert!(removed);

        prop_assert!(world.pool.claim_balance_of(&lp).is_zero());
        prop_assert!(world.token_a.balance_of(&lp) <= start_a);
        prop_assert!(world.token_b.balance_of(&lp) <= start_b);
        // Truncation leaves dust in the pool, never takes from it.
        prop_assert!(world.pool.reserve_a() >= reserves_before.0);
        prop_assert!(world.pool.reserve_b() >= reserves_before.1);
    }
}
