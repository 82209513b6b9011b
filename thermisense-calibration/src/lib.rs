//! NTC Thermistor Calibration
//!
//! ## Overview
//!
//! Turns a handful of bench measurements (thermistor resistance at a known
//! temperature) into the constants the firmware needs:
//!
//! ```text
//! (R1, T1) (R2, T2) (R3, T3)
//!        │
//!        ├── SteinhartHartFit::fit ──▶ A, B, C   ──▶ SteinhartHartModel
//!        └── BetaFit::fit          ──▶ β, R25    ──▶ BetaModel
//!                                        │
//!                                        └──▶ CoefficientReport (JSON)
//! ```
//!
//! All math here is `f64`. The `to_model` conversions narrow to the `f32`
//! constants the on-device models use.
//!
//! ## Choosing Points
//!
//! Steinhart-Hart is exact at its three points and interpolates well between
//! them, so pick points that bracket the working range (the defaults are 5,
//! 25 and 45 °C). Beta only uses the first two points for β; put the two you
//! trust most first.
//!
//! ## Usage Example
//!
//! ```rust
//! use thermisense_calibration::{Calibration, DEFAULT_POINTS};
//!
//! let calibration = Calibration::compute(&DEFAULT_POINTS)?;
//!
//! // Exact at the measured points
//! let t = calibration.steinhart.temperature_c(10_000.0)?;
//! assert!((t - 25.0).abs() < 1e-9);
//!
//! // Firmware constants and a JSON record of them
//! let model = calibration.steinhart.to_model()?;
//! let json = calibration.report().to_json_pretty()?;
//! assert!(json.contains("\"SteinhartHart\""));
//! # let _ = model;
//! # Ok::<(), thermisense_calibration::CalibrationError>(())
//! ```

pub mod beta;
pub mod errors;
pub mod parse;
pub mod points;
pub mod report;
pub mod steinhart;

pub use beta::BetaFit;
pub use errors::{CalibrationError, CalibrationResult};
pub use parse::parse_decimal;
pub use points::CalibrationPoint;
pub use report::CoefficientReport;
pub use steinhart::SteinhartHartFit;

use serde::{Deserialize, Serialize};

/// Bench defaults: 25 kΩ at 5 °C, 10 kΩ at 25 °C, 4 kΩ at 45 °C
pub const DEFAULT_POINTS: [CalibrationPoint; 3] = [
    CalibrationPoint {
        resistance_ohms: 25_000.0,
        temperature_c: 5.0,
    },
    CalibrationPoint {
        resistance_ohms: 10_000.0,
        temperature_c: 25.0,
    },
    CalibrationPoint {
        resistance_ohms: 4_000.0,
        temperature_c: 45.0,
    },
];

/// Both fits over the same three points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub steinhart: SteinhartHartFit,
    pub beta: BetaFit,
}

impl Calibration {
    /// Fit both models; Steinhart-Hart requires exactly three points
    pub fn compute(points: &[CalibrationPoint]) -> CalibrationResult<Self> {
        let steinhart = SteinhartHartFit::fit(points)?;
        let beta = BetaFit::fit(points)?;
        Ok(Self { steinhart, beta })
    }

    /// Parse typed-in pairs (either decimal separator) and fit
    pub fn from_text(pairs: &[(&str, &str)]) -> CalibrationResult<Self> {
        let points = pairs
            .iter()
            .map(|(ohms, celsius)| CalibrationPoint::new(parse_decimal(ohms)?, parse_decimal(celsius)?))
            .collect::<CalibrationResult<Vec<_>>>()?;
        Self::compute(&points)
    }

    /// Serializable record of both fits
    pub fn report(&self) -> CoefficientReport {
        CoefficientReport::from(self)
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
