use crate::error::CalculationError;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize)]
pub enum Field {
    CapitalInr,
    InrToUsdRate,
    BtcSpotPriceUsd,
    BuyPremiumUsd,
    SellPremiumUsd,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::CapitalInr => "capital (INR)",
            Field::InrToUsdRate => "INR to USD rate",
            Field::BtcSpotPriceUsd => "BTC spot price (USD)",
            Field::BuyPremiumUsd => "buy premium (USD)",
            Field::SellPremiumUsd => "sell premium (USD)",
        };
        f.write_str(name)
    }
}

/// Field text exactly as collected by the form.
#[derive(Clone, Copy, Debug)]
pub struct RawInputs<'a> {
    pub capital_inr: &'a str,
    pub inr_to_usd_rate: &'a str,
    pub btc_spot_price_usd: &'a str,
    pub buy_premium_usd: &'a str,
    pub sell_premium_usd: &'a str,
}

#[derive(Clone, Copy, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct TradeInputs {
    pub capital_inr: f64,
    pub inr_to_usd_rate: f64,
    pub btc_spot_price_usd: f64,
    pub buy_premium_usd: f64,
    pub sell_premium_usd: f64,
}

impl TradeInputs {
    pub fn parse(raw: &RawInputs) -> Result<TradeInputs, CalculationError> {
        Ok(TradeInputs {
            capital_inr: parse_field(Field::CapitalInr, raw.capital_inr)?,
            inr_to_usd_rate: parse_field(Field::InrToUsdRate, raw.inr_to_usd_rate)?,
            btc_spot_price_usd: parse_field(Field::BtcSpotPriceUsd, raw.btc_spot_price_usd)?,
            buy_premium_usd: parse_field(Field::BuyPremiumUsd, raw.buy_premium_usd)?,
            sell_premium_usd: parse_field(Field::SellPremiumUsd, raw.sell_premium_usd)?,
        })
    }

    /// First input that is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<Field> {
        self.fields()
            .iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(field, _)| *field)
    }

    pub fn fields(&self) -> [(Field, f64); 5] {
        [
            (Field::CapitalInr, self.capital_inr),
            (Field::InrToUsdRate, self.inr_to_usd_rate),
            (Field::BtcSpotPriceUsd, self.btc_spot_price_usd),
            (Field::BuyPremiumUsd, self.buy_premium_usd),
            (Field::SellPremiumUsd, self.sell_premium_usd),
        ]
    }
}

fn parse_field(field: Field, text: &str) -> Result<f64, CalculationError> {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            log::warn!("Rejected {}: {:?}", field, text);
            Err(CalculationError::InvalidInput(field))
        },
    }
}
