//! Constant-product exchange walkthrough.
//!
//! Deploys a pool pairing a fixed-supply token with a wrapped native asset,
//! seeds it, trades in both directions and redeems the provider's claims.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=debug cargo run --example constant_product
//! ```

use pair_amm::config::PoolConfig;
use pair_amm::domain::{Address, Amount};
use pair_amm::exchange::Exchange;
use pair_amm::ledger::{TokenLedger, WrappedNativeLedger};
use pair_amm::traits::FungibleLedger;
use tracing_subscriber::EnvFilter;

const E18: u128 = 1_000_000_000_000_000_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Constant Product Exchange (x · y = k) ===\n");

    // ── 1. Identities ───────────────────────────────────────────────────
    let pool = Address::from_bytes([0xff; 32]);
    let che = Address::from_bytes([0xc1; 32]);
    let weth = Address::from_bytes([0xe7; 32]);
    let provider = Address::from_bytes([0x01; 32]);
    let trader = Address::from_bytes([0x02; 32]);

    // ── 2. Deploy: CHE genesis to the provider, empty WETH ──────────────
    let config = PoolConfig::new(pool, che, weth)?;
    let mut exchange = Exchange::new(
        &config,
        TokenLedger::with_genesis(che, provider, Amount::new(1_000_000 * E18)),
        WrappedNativeLedger::new(weth),
    )?;
    println!("Pool {pool}");
    println!("  Asset A (CHE):  {che}");
    println!("  Asset B (WETH): {weth}");

    // ── 3. Wrap native currency ─────────────────────────────────────────
    exchange.ledger_b_mut().deposit(provider, Amount::new(10 * E18))?;
    exchange.ledger_b_mut().deposit(trader, Amount::new(5 * E18))?;
    println!(
        "\nWrapped supply: {} (locked native {})",
        exchange.ledger_b().total_supply(),
        exchange.ledger_b().native_locked()
    );

    // ── 4. Seed the pool ────────────────────────────────────────────────
    exchange
        .ledger_a_mut()
        .approve(provider, pool, Amount::new(1_000_000 * E18));
    exchange
        .ledger_b_mut()
        .approve(provider, pool, Amount::new(10 * E18));
    let claims = exchange.add_liquidity(
        provider,
        Amount::new(1_000_000 * E18),
        Amount::new(10 * E18),
    )?;
    println!("\n--- Seed ---");
    println!("  Claims minted: {claims}");
    println!("  Reserve A:     {}", exchange.reserve_a());
    println!("  Reserve B:     {}", exchange.reserve_b());

    // ── 5. Buy CHE with 1 WETH, guarded by a quote ──────────────────────
    exchange.ledger_a_mut().approve(trader, pool, Amount::MAX);
    exchange.ledger_b_mut().approve(trader, pool, Amount::MAX);
    let quote = exchange.quote_swap(&weth, Amount::new(E18))?;
    let bought = exchange.swap(trader, weth, che, Amount::new(E18), quote)?;
    println!("\n--- Swap: sell 1 WETH ---");
    println!("  Quoted:      {quote}");
    println!("  Amount out:  {}", bought.amount_out());

    // ── 6. Sell the CHE back ────────────────────────────────────────────
    let sold = exchange.swap_a_for_b(trader, bought.amount_out())?;
    println!("\n--- Swap: sell {} CHE ---", bought.amount_out());
    println!("  Amount out:  {}", sold.amount_out());
    println!(
        "  Trader WETH: {} (started with {})",
        exchange.ledger_b().balance_of(&trader),
        Amount::new(5 * E18)
    );

    // ── 7. Redeem everything ────────────────────────────────────────────
    let redeemed = exchange.remove_liquidity(provider, claims)?;
    println!("\n--- Redeem {claims} claims ---");
    println!("  CHE returned:  {}", redeemed.amount_a());
    println!("  WETH returned: {}", redeemed.amount_b());

    // ── 8. Event log ────────────────────────────────────────────────────
    println!("\n--- Events ---");
    for event in exchange.take_events() {
        println!("  {event}");
    }

    // ── 9. Unwrap ───────────────────────────────────────────────────────
    let released = exchange
        .ledger_b_mut()
        .withdraw(provider, redeemed.amount_b())?;
    println!("\nProvider unwrapped {released} native");

    Ok(())
}
