//! Steinhart-Hart model
//!
//! `1/T = a + b · ln R + c · (ln R)³`. The three constants come from an
//! offline three-point fit (see the `thermisense-calibration` crate).

use crate::{
    constants::sensors::{REFERENCE_STEINHART_A, REFERENCE_STEINHART_B, REFERENCE_STEINHART_C},
    errors::{ConversionError, ConversionResult},
    traits::ReportChannel,
};

use super::{check_resistance, kelvin_to_celsius, ThermistorModel};

/// Cubic-log NTC approximation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SteinhartHartModel {
    a: f32,
    b: f32,
    c: f32,
}

impl Default for SteinhartHartModel {
    fn default() -> Self {
        Self {
            a: REFERENCE_STEINHART_A,
            b: REFERENCE_STEINHART_B,
            c: REFERENCE_STEINHART_C,
        }
    }
}

impl SteinhartHartModel {
    /// Create a model from fitted coefficients
    pub fn new(a: f32, b: f32, c: f32) -> ConversionResult<Self> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(ConversionError::InvalidCalibration {
                reason: "Steinhart-Hart coefficients must be finite",
            });
        }
        Ok(Self { a, b, c })
    }

    /// Coefficients as `(a, b, c)`
    pub fn coefficients(&self) -> (f32, f32, f32) {
        (self.a, self.b, self.c)
    }
}

impl ThermistorModel for SteinhartHartModel {
    fn celsius(&self, resistance_ohms: f32) -> ConversionResult<f64> {
        let resistance = check_resistance(resistance_ohms)?;

        let lr = libm::logf(resistance);
        let inverse = self.a + self.b * lr + self.c * lr * lr * lr;
        let kelvin = (1.0 / f64::from(inverse)) as f32;

        kelvin_to_celsius(kelvin)
    }

    fn channel(&self) -> ReportChannel {
        ReportChannel::SteinhartHart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_thermistor_at_ten_kilohm() {
        let celsius = SteinhartHartModel::default().celsius(10_000.0).unwrap();
        assert!((celsius - 25.0).abs() < 0.01, "got {}", celsius);
    }

    #[test]
    fn midscale_golden_value() {
        let celsius = SteinhartHartModel::default().celsius(9980.46875).unwrap();
        assert_eq!(celsius, 25.044549560546898);
    }

    #[test]
    fn negative_polynomial_is_non_physical() {
        // 1/T = -1 at every resistance
        let model = SteinhartHartModel::new(-1.0, 0.0, 0.0).unwrap();
        assert!(matches!(
            model.celsius(10_000.0),
            Err(ConversionError::NonPhysicalTemperature { .. })
        ));
    }

    #[test]
    fn zero_polynomial_is_non_physical() {
        let model = SteinhartHartModel::new(0.0, 0.0, 0.0).unwrap();
        assert!(model.celsius(10_000.0).is_err());
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        assert!(SteinhartHartModel::new(f32::NAN, 0.0, 0.0).is_err());
        assert!(SteinhartHartModel::new(0.0, f32::INFINITY, 0.0).is_err());
    }
}
