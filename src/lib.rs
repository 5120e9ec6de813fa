//! Sizing and profit of a two-leg premium arbitrage trade.
//!
//! Capital in INR is converted to USD, the buy leg's premium plus its capped,
//! taxed fee sets the cost of one contract, and the whole-contract quantity
//! that capital affords is priced against the sell leg.
pub mod calculators;
pub mod error;
pub mod fee_schedule;
pub mod inputs;

pub use calculators::{compute, ProfitCalculator, TradeSummary};
pub use error::{CalculationError, ConfigError};
pub use fee_schedule::FeeSchedule;
pub use inputs::{Field, RawInputs, TradeInputs};
