use crate::inputs::Field;

#[derive(Clone, Copy, PartialEq, Debug, serde::Serialize, thiserror::Error)]
pub enum CalculationError {
    #[error("Invalid value for {0}")]
    InvalidInput(Field),
    #[error("Capital is too low to purchase even one contract")]
    InsufficientCapital,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read fee schedule: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse fee schedule: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Fee schedule parameter {0} has invalid value {1}")]
    InvalidParameter(&'static str, f64),
}
