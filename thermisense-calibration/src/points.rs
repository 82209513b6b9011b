//! Measured resistance/temperature pairs

use serde::{Deserialize, Serialize};
use thermisense_core::constants::KELVIN_OFFSET;

use crate::errors::{CalibrationError, CalibrationResult};

/// One measurement: the thermistor read `resistance_ohms` at `temperature_c`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationPoint {
    pub resistance_ohms: f64,
    pub temperature_c: f64,
}

impl CalibrationPoint {
    /// Checked constructor; resistance must be positive, temperature above 0 K
    pub fn new(resistance_ohms: f64, temperature_c: f64) -> CalibrationResult<Self> {
        let point = Self {
            resistance_ohms,
            temperature_c,
        };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> CalibrationResult<()> {
        if !(self.resistance_ohms > 0.0) || !self.resistance_ohms.is_finite() {
            return Err(CalibrationError::NonPositiveResistance(self.resistance_ohms));
        }
        if !(self.kelvin() > 0.0) || !self.temperature_c.is_finite() {
            return Err(CalibrationError::InvalidTemperature(self.temperature_c));
        }
        Ok(())
    }

    pub fn kelvin(&self) -> f64 {
        celsius_to_kelvin(self.temperature_c)
    }
}

pub(crate) fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + KELVIN_OFFSET
}

pub(crate) fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub(crate) fn validate_all(points: &[CalibrationPoint]) -> CalibrationResult<()> {
    points.iter().try_for_each(CalibrationPoint::validate)
}
