pub mod amount_calculator;
pub mod fee_calculator;
pub mod profit_calculator;

pub use amount_calculator::AmountCalculator;
pub use fee_calculator::{FeeCalculator, LegFee};
pub use profit_calculator::{compute, ProfitCalculator, TradeSummary};
