use crate::error::ConfigError;
use std::path::Path;

pub const GST_RATE: f64 = 0.18;
pub const LOT_SIZE: f64 = 0.001;
pub const NOTIONAL_FEE_RATE: f64 = 0.00015;
pub const PREMIUM_CAP_RATE: f64 = 0.05;

/// Exchange fee parameters. Missing keys in a JSON document fall back to
/// the defaults above.
#[derive(Clone, Copy, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub gst_rate: f64,
    pub lot_size: f64,
    pub notional_fee_rate: f64,
    pub premium_cap_rate: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        FeeSchedule {
            gst_rate: GST_RATE,
            lot_size: LOT_SIZE,
            notional_fee_rate: NOTIONAL_FEE_RATE,
            premium_cap_rate: PREMIUM_CAP_RATE,
        }
    }
}

impl FeeSchedule {
    pub fn from_json(json: &str) -> Result<FeeSchedule, ConfigError> {
        let schedule: FeeSchedule = serde_json::from_str(json)?;
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<FeeSchedule, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let schedule = Self::from_json(&json)?;
        log::info!("Loaded fee schedule from {}: {:?}", path.display(), schedule);
        Ok(schedule)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("gst_rate", self.gst_rate),
            ("notional_fee_rate", self.notional_fee_rate),
            ("premium_cap_rate", self.premium_cap_rate),
        ];
        for (name, value) in rates.iter() {
            if !value.is_finite() || *value < 0.0 {
                return Err(ConfigError::InvalidParameter(*name, *value));
            }
        }
        if !self.lot_size.is_finite() || self.lot_size <= 0.0 {
            return Err(ConfigError::InvalidParameter("lot_size", self.lot_size));
        }
        Ok(())
    }

    pub fn tax_multiplier(&self) -> f64 {
        1.0 + self.gst_rate
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_rates() {
        let schedule = FeeSchedule::default();
        assert!((schedule.notional_fee_rate - 0.00015).abs() < 1e-12);
        assert!((schedule.premium_cap_rate - 0.05).abs() < 1e-12);
        assert_eq!(schedule.gst_rate, 0.18);
        assert_eq!(schedule.lot_size, 0.001);
        assert!(schedule.validate().is_ok());
    }

    #[test]
    fn partial_json() {
        let schedule = FeeSchedule::from_json(r#"{ "gst_rate": 0.0 }"#).unwrap();
        assert_eq!(schedule.gst_rate, 0.0);
        assert_eq!(schedule.lot_size, LOT_SIZE);
        assert_eq!(schedule.tax_multiplier(), 1.0);
    }

    #[test]
    fn invalid_parameters() {
        match FeeSchedule::from_json(r#"{ "lot_size": 0.0 }"#) {
            Err(ConfigError::InvalidParameter(name, _)) => assert_eq!(name, "lot_size"),
            other => panic!("Unexpected result: {:?}", other),
        }
        match FeeSchedule::from_json(r#"{ "premium_cap_rate": -0.1 }"#) {
            Err(ConfigError::InvalidParameter(name, value)) => {
                assert_eq!(name, "premium_cap_rate");
                assert_eq!(value, -0.1);
            },
            other => panic!("Unexpected result: {:?}", other),
        }
        assert!(matches!(FeeSchedule::from_json("not json"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn missing_file() {
        let result = FeeSchedule::load("fee_schedule/does_not_exist.json");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
