use crate::calculators::{AmountCalculator, FeeCalculator, LegFee};
use crate::error::CalculationError;
use crate::fee_schedule::FeeSchedule;
use crate::inputs::{Field, RawInputs, TradeInputs};

#[derive(Clone, Copy, PartialEq, Debug, serde::Serialize)]
pub struct TradeSummary {
    pub max_quantity: u64,
    pub net_profit_inr: f64,
    pub net_profit_usd: f64,
    pub gross_profit_usd: f64,
    pub total_fees_usd: f64,
    pub total_buy_fees_usd: f64,
    pub total_sell_fees_usd: f64,
    pub cost_per_contract: f64,
    pub buy_fee_with_tax: f64,
    pub sell_fee_with_tax: f64,
    pub capital_usd: f64,
    pub notional_per_contract: f64,
    pub buy_fee: LegFee,
    pub sell_fee: LegFee,
}

#[derive(Default, Copy, Clone, Debug)]
pub struct ProfitCalculator {
    fee_calculator: FeeCalculator,
    amount_calculator: AmountCalculator,
}

impl ProfitCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        ProfitCalculator {
            fee_calculator: FeeCalculator::new(schedule),
            amount_calculator: AmountCalculator::default(),
        }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.fee_calculator.schedule
    }

    pub fn calculate_raw(&self, raw: &RawInputs) -> Result<TradeSummary, CalculationError> {
        let inputs = TradeInputs::parse(raw)?;
        self.calculate(&inputs)
    }

    pub fn calculate(&self, inputs: &TradeInputs) -> Result<TradeSummary, CalculationError> {
        if let Some(field) = inputs.first_non_finite() {
            log::warn!("Rejected non-finite {}", field);
            return Err(CalculationError::InvalidInput(field));
        }
        if inputs.inr_to_usd_rate <= 0.0 {
            log::warn!("Rejected non-positive INR to USD rate {}", inputs.inr_to_usd_rate);
            return Err(CalculationError::InvalidInput(Field::InrToUsdRate));
        }

        let capital_usd = self.amount_calculator.capital_usd(
            inputs.capital_inr,
            inputs.inr_to_usd_rate);
        if !capital_usd.is_finite() {
            log::warn!(
                "Rejected capital {} INR at rate {}: overflows in USD",
                inputs.capital_inr,
                inputs.inr_to_usd_rate);
            return Err(CalculationError::InvalidInput(Field::CapitalInr));
        }
        let notional_per_contract = self.fee_calculator.notional_per_contract(
            inputs.btc_spot_price_usd);
        let buy_fee = self.fee_calculator.leg_fee(notional_per_contract, inputs.buy_premium_usd);
        let sell_fee = self.fee_calculator.leg_fee(notional_per_contract, inputs.sell_premium_usd);
        let cost_per_contract = inputs.buy_premium_usd + buy_fee.with_tax;
        log::debug!(
            "capital {:.5} USD, notional {:.5}, buy fee {:?}, sell fee {:?}, cost {:.5}",
            capital_usd,
            notional_per_contract,
            buy_fee,
            sell_fee,
            cost_per_contract);

        if cost_per_contract <= 0.0 {
            log::warn!("Rejected non-positive cost per contract {}", cost_per_contract);
            return Err(CalculationError::InvalidInput(Field::BuyPremiumUsd));
        }
        let max_quantity = match self.amount_calculator.max_quantity(capital_usd, cost_per_contract) {
            Some(max_quantity) => max_quantity,
            None => {
                log::warn!(
                    "Rejected unbounded quantity for capital {} and cost {}",
                    capital_usd,
                    cost_per_contract);
                // Capital beyond the countable range is at fault on its own;
                // otherwise a sub-dollar cost blew the ratio up.
                let field = if capital_usd >= u64::MAX as f64 {
                    Field::CapitalInr
                } else {
                    Field::BuyPremiumUsd
                };
                return Err(CalculationError::InvalidInput(field));
            },
        };
        if max_quantity == 0 {
            return Err(CalculationError::InsufficientCapital);
        }

        let quantity = max_quantity as f64;
        let total_buy_fees_usd = quantity * buy_fee.with_tax;
        let total_sell_fees_usd = quantity * sell_fee.with_tax;
        let total_fees_usd = total_buy_fees_usd + total_sell_fees_usd;
        let gross_profit_usd = quantity * (inputs.sell_premium_usd - inputs.buy_premium_usd);
        let net_profit_usd = gross_profit_usd - total_fees_usd;
        let net_profit_inr = net_profit_usd * inputs.inr_to_usd_rate;
        log::info!(
            "Max quantity {} contracts, net profit {:.2} INR ({:.2} USD)",
            quantity,
            net_profit_inr,
            net_profit_usd);

        Ok(TradeSummary {
            max_quantity,
            net_profit_inr,
            net_profit_usd,
            gross_profit_usd,
            total_fees_usd,
            total_buy_fees_usd,
            total_sell_fees_usd,
            cost_per_contract,
            buy_fee_with_tax: buy_fee.with_tax,
            sell_fee_with_tax: sell_fee.with_tax,
            capital_usd,
            notional_per_contract,
            buy_fee,
            sell_fee,
        })
    }
}

/// Prices the trade against the default fee schedule.
pub fn compute(
    capital_inr: f64,
    inr_to_usd_rate: f64,
    btc_spot_price_usd: f64,
    buy_premium_usd: f64,
    sell_premium_usd: f64,
) -> Result<TradeSummary, CalculationError> {
    ProfitCalculator::default().calculate(&TradeInputs {
        capital_inr,
        inr_to_usd_rate,
        btc_spot_price_usd,
        buy_premium_usd,
        sell_premium_usd,
    })
}
