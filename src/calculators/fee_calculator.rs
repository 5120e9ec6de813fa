use crate::fee_schedule::FeeSchedule;

/// Fee charged on one leg of the trade, per contract.
#[derive(Clone, Copy, PartialEq, Debug, serde::Serialize)]
pub struct LegFee {
    pub notional: f64,
    pub premium_cap: f64,
    pub before_tax: f64,
    pub with_tax: f64,
}

#[derive(Default, Copy, Clone, Debug)]
pub struct FeeCalculator {
    pub schedule: FeeSchedule,
}

impl FeeCalculator {
    pub fn new(schedule: FeeSchedule) -> Self {
        FeeCalculator { schedule }
    }

    pub fn notional_per_contract(&self, spot_price: f64) -> f64 {
        spot_price * self.schedule.lot_size
    }

    /// The exchange charges the smaller of the notional fee and the premium cap.
    pub fn leg_fee(&self, notional_per_contract: f64, premium: f64) -> LegFee {
        let notional = notional_per_contract * self.schedule.notional_fee_rate;
        let premium_cap = premium * self.schedule.premium_cap_rate;
        let before_tax = notional.min(premium_cap);
        LegFee {
            notional,
            premium_cap,
            before_tax,
            with_tax: before_tax * self.schedule.tax_multiplier(),
        }
    }
}
