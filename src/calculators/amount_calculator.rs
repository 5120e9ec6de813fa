#[derive(Default, Copy, Clone, Debug)]
pub struct AmountCalculator {
}

impl AmountCalculator {
    pub fn capital_usd(&self, capital_inr: f64, inr_to_usd_rate: f64) -> f64 {
        capital_inr / inr_to_usd_rate
    }

    /// Whole contracts affordable at `cost_per_contract`.
    ///
    /// Returns None when the ratio is not finite or does not fit a `u64`.
    /// Negative capital buys nothing rather than a negative quantity.
    pub fn max_quantity(&self, capital_usd: f64, cost_per_contract: f64) -> Option<u64> {
        let quantity = (capital_usd / cost_per_contract).floor();
        if !quantity.is_finite() || quantity >= u64::MAX as f64 {
            None
        } else if quantity <= 0.0 {
            Some(0)
        } else {
            Some(quantity as u64)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn capital_usd() {
        let calculator = AmountCalculator::default();
        let capital = calculator.capital_usd(1_000_000.0, 83.0);
        assert!((capital - 12048.19277).abs() < 1e-5);
    }

    #[test]
    fn max_quantity() {
        let calculator = AmountCalculator::default();
        assert_eq!(calculator.max_quantity(100.0, 10.0), Some(10));
        assert_eq!(calculator.max_quantity(99.99, 10.0), Some(9));
        assert_eq!(calculator.max_quantity(9.99, 10.0), Some(0));
        assert_eq!(calculator.max_quantity(12048.19277, 50.01062), Some(240));
    }

    #[test]
    fn degenerate_ratio() {
        let calculator = AmountCalculator::default();
        assert_eq!(calculator.max_quantity(100.0, 0.0), None);
        assert_eq!(calculator.max_quantity(0.0, 0.0), None);
        assert_eq!(calculator.max_quantity(-100.0, 10.0), Some(0));
        assert_eq!(calculator.max_quantity(1e300, 50.01062), None);
        assert_eq!(calculator.max_quantity(u64::MAX as f64, 1.0), None);
        assert_eq!(calculator.max_quantity(1e18, 1.0), Some(1_000_000_000_000_000_000));
    }
}
