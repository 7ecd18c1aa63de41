//! # Pair AMM
//!
//! A two-asset constant-product exchange pool with claim-token accounting.
//!
//! Liquidity providers deposit both assets and receive claims on the pool's
//! reserves; traders exchange one asset for the other along `x · y = k`,
//! paying a 0.2% fee that stays in the reserves.  All amounts are 256-bit
//! integers and every division rounds down in the pool's favour.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `tracing` | yes | Structured logs for committed operations and ledger moves |
//! | `serde` | no | `Serialize`/`Deserialize` for config, identities, amounts and events |
//!
//! # Quick Start
//!
//! ```rust
//! use pair_amm::config::PoolConfig;
//! use pair_amm::domain::{Address, Amount};
//! use pair_amm::exchange::Exchange;
//! use pair_amm::ledger::{TokenLedger, WrappedNativeLedger};
//! use pair_amm::traits::FungibleLedger;
//!
//! let pool = Address::from_bytes([0xff; 32]);
//! let token = Address::from_bytes([1; 32]);
//! let weth = Address::from_bytes([2; 32]);
//! let provider = Address::from_bytes([0xa1; 32]);
//! let trader = Address::from_bytes([0xb2; 32]);
//!
//! // 1. Wire a pool to the ledgers of its two assets
//! let config = PoolConfig::new(pool, token, weth).expect("distinct identities");
//! let mut exchange = Exchange::new(
//!     &config,
//!     TokenLedger::with_genesis(token, provider, Amount::new(1_000_000)),
//!     WrappedNativeLedger::new(weth),
//! )
//! .expect("ledgers match");
//!
//! // 2. Wrap native currency and seed the pool
//! exchange.ledger_b_mut().deposit(provider, Amount::new(1_000)).expect("wrap");
//! exchange.ledger_b_mut().deposit(trader, Amount::new(50)).expect("wrap");
//! exchange.ledger_a_mut().approve(provider, pool, Amount::new(1_000_000));
//! exchange.ledger_b_mut().approve(provider, pool, Amount::new(1_000));
//! let claims = exchange
//!     .add_liquidity(provider, Amount::new(1_000_000), Amount::new(1_000))
//!     .expect("funded and approved");
//!
//! // 3. Swap with a slippage floor taken from a quote
//! let quote = exchange.quote_swap(&weth, Amount::new(50)).expect("known asset");
//! exchange.ledger_b_mut().approve(trader, pool, Amount::new(50));
//! let result = exchange
//!     .swap(trader, weth, token, Amount::new(50), quote)
//!     .expect("swap succeeded");
//! assert_eq!(result.amount_out(), quote);
//!
//! // 4. Redeem everything, fees included
//! let redeemed = exchange.remove_liquidity(provider, claims).expect("owned claims");
//! assert!(redeemed.amount_b() > Amount::new(1_000));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Exchange    │  owns pool + both ledgers, one lock when shared
//! └──────┬───────┘
//!        │ LedgerPair (borrowed view)
//!        ▼
//! ┌──────────────┐
//! │     Pool      │  reserves, claims, swaps, event log
//! └──────┬───────┘
//!        │ FungibleLedger trait
//!        ▼
//! ┌──────────────┐
//! │   Ledgers     │  TokenLedger, WrappedNativeLedger
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Claims`](domain::Claims), events |
//! | [`traits`] | [`FungibleLedger`](traits::FungibleLedger) boundary and [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`pools`] | [`ConstantProductPool`](pools::ConstantProductPool) and [`LedgerPair`](pools::LedgerPair) |
//! | [`ledger`] | In-memory token and wrapped-native ledgers |
//! | [`exchange`] | [`Exchange`](exchange::Exchange) host and [`SharedExchange`](exchange::SharedExchange) |
//! | [`math`] | 256-bit integers, square root, pricing and claim formulas |
//! | [`error`] | [`AmmError`](error::AmmError) and [`LedgerError`](error::LedgerError) |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
