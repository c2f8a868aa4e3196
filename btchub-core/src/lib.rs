//! BTC Hub Core — the financial simulation engine behind the three calculators.
//!
//! Everything here is a pure function of its inputs:
//! - Synthetic price model (trend plus two waves)
//! - Investor-style quiz scoring (weighted, per-question table)
//! - DCA simulator with a lump-sum baseline
//! - Buy/sell profit calculator with a scenario sweep
//!
//! Input records carry `validate()` for the form ranges; the engine itself
//! never fails and returns zero where a ratio would divide by zero.

pub mod dca;
pub mod error;
pub mod price_model;
pub mod profit;
pub mod quiz;

pub use error::InputError;
pub use price_model::{synthetic_price, PriceModel, PricePoint, DEFAULT_BASE_PRICE};
