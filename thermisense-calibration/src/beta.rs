//! Beta-parameter fit
//!
//! β comes from the first two points:
//!
//! ```text
//! β = ln(R1/R2) / (1/T1 - 1/T2)
//! ```
//!
//! and R25 is the mean of every point projected back to 25 °C with that β.
//! With more than two points the extra ones only influence R25.

use serde::{Deserialize, Serialize};
use thermisense_core::{constants::NOMINAL_TEMPERATURE_K, BetaModel};

use crate::{
    errors::{CalibrationError, CalibrationResult},
    points::{celsius_to_kelvin, kelvin_to_celsius, validate_all, CalibrationPoint},
};

/// Beta constant in Kelvin and resistance at 25 °C in ohms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaFit {
    pub beta: f64,
    pub r25: f64,
}

impl BetaFit {
    pub fn new(beta: f64, r25: f64) -> Self {
        Self { beta, r25 }
    }

    pub fn fit(points: &[CalibrationPoint]) -> CalibrationResult<Self> {
        if points.len() < 2 {
            return Err(CalibrationError::TooFewPoints(points.len()));
        }
        validate_all(points)?;

        let (first, second) = (&points[0], &points[1]);
        let beta = (first.resistance_ohms / second.resistance_ohms).ln()
            / (1.0 / first.kelvin() - 1.0 / second.kelvin());
        if !beta.is_finite() {
            // Equal temperatures in the first two points
            return Err(CalibrationError::SingularSystem);
        }

        let r25 = points
            .iter()
            .map(|p| p.resistance_ohms * (-beta * (1.0 / p.kelvin() - 1.0 / NOMINAL_TEMPERATURE_K)).exp())
            .sum::<f64>()
            / points.len() as f64;

        log::debug!("Beta fit beta={:.2} K R25={:.2} ohm", beta, r25);
        Ok(Self { beta, r25 })
    }

    pub fn temperature_c(&self, resistance_ohms: f64) -> CalibrationResult<f64> {
        if !(resistance_ohms > 0.0) {
            return Err(CalibrationError::NonPositiveResistance(resistance_ohms));
        }
        let inverse = 1.0 / NOMINAL_TEMPERATURE_K + (1.0 / self.beta) * (resistance_ohms / self.r25).ln();
        if !(inverse > 0.0) {
            return Err(CalibrationError::NonPhysicalResult { resistance_ohms });
        }
        Ok(kelvin_to_celsius(1.0 / inverse))
    }

    /// Closed-form inverse of [`temperature_c`](Self::temperature_c)
    pub fn resistance_at(&self, temperature_c: f64) -> f64 {
        let kelvin = celsius_to_kelvin(temperature_c);
        self.r25 * (self.beta * (1.0 / kelvin - 1.0 / NOMINAL_TEMPERATURE_K)).exp()
    }

    /// Firmware model; R25 is rounded to whole ohms
    pub fn to_model(&self) -> CalibrationResult<BetaModel> {
        if !(self.r25 >= 1.0) || self.r25 > u32::MAX as f64 {
            return Err(CalibrationError::NonPositiveResistance(self.r25));
        }
        Ok(BetaModel::new(self.beta as f32, self.r25.round() as u32)?)
    }
}
