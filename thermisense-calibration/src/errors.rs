//! Calibration errors

use thermisense_core::ConversionError;

/// Result type for calibration operations
pub type CalibrationResult<T> = Result<T, CalibrationError>;

/// Everything that can go wrong between typed-in numbers and a coefficient set
#[derive(Debug, thiserror_no_std::Error)]
pub enum CalibrationError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Resistance must be positive and finite, got {0}")]
    NonPositiveResistance(f64),

    #[error("Temperature {0} °C is below absolute zero or not finite")]
    InvalidTemperature(f64),

    #[error("Steinhart-Hart needs exactly three points, got {0}")]
    WrongPointCount(usize),

    #[error("Beta model needs at least two points, got {0}")]
    TooFewPoints(usize),

    #[error("Points do not determine a unique solution")]
    SingularSystem,

    #[error("Model gives 1/T <= 0 for {resistance_ohms} ohm")]
    NonPhysicalResult {
        resistance_ohms: f64,
    },

    #[error("Coefficients rejected by the conversion core: {0}")]
    Model(#[from] ConversionError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
