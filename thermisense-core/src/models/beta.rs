//! Beta-parameter model
//!
//! `1/T = 1/T0 + (1/B) · ln(R / R0)` with T0 = 298.15 K.

use crate::{
    constants::{
        sensors::{REFERENCE_BETA_COEFFICIENT, REFERENCE_NOMINAL_RESISTANCE_OHMS},
        NOMINAL_TEMPERATURE_K,
    },
    errors::{ConversionError, ConversionResult},
    traits::ReportChannel,
};

use super::{check_resistance, kelvin_to_celsius, ThermistorModel};

/// Single-constant NTC approximation anchored at 25 °C
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetaModel {
    /// Material constant in Kelvin
    b_coefficient: f32,

    /// Resistance at the 25 °C reference point in ohms
    nominal_resistance: u32,
}

impl Default for BetaModel {
    fn default() -> Self {
        Self {
            b_coefficient: REFERENCE_BETA_COEFFICIENT,
            nominal_resistance: REFERENCE_NOMINAL_RESISTANCE_OHMS,
        }
    }
}

impl BetaModel {
    /// Create a model, rejecting constants that would divide by zero
    pub fn new(b_coefficient: f32, nominal_resistance: u32) -> ConversionResult<Self> {
        if !b_coefficient.is_finite() || b_coefficient <= 0.0 {
            return Err(ConversionError::InvalidCalibration {
                reason: "Beta coefficient must be finite and positive",
            });
        }
        if nominal_resistance == 0 {
            return Err(ConversionError::InvalidCalibration {
                reason: "Nominal resistance must be positive",
            });
        }

        Ok(Self {
            b_coefficient,
            nominal_resistance,
        })
    }

    /// Beta coefficient in Kelvin
    pub fn b_coefficient(&self) -> f32 {
        self.b_coefficient
    }

    /// Resistance at 25 °C in ohms
    pub fn nominal_resistance(&self) -> u32 {
        self.nominal_resistance
    }
}

impl ThermistorModel for BetaModel {
    fn celsius(&self, resistance_ohms: f32) -> ConversionResult<f64> {
        let resistance = check_resistance(resistance_ohms)?;

        let ratio = resistance / self.nominal_resistance as f32;
        let ln_ratio = f64::from(libm::logf(ratio));
        let inverse = 1.0 / NOMINAL_TEMPERATURE_K + (1.0 / f64::from(self.b_coefficient)) * ln_ratio;
        let kelvin = (1.0 / inverse) as f32;

        kelvin_to_celsius(kelvin)
    }

    fn channel(&self) -> ReportChannel {
        ReportChannel::Beta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_resistance_gives_nominal_temperature() {
        let model = BetaModel::default();
        let celsius = model.celsius(10_000.0).unwrap();
        assert!((celsius - 25.0).abs() < 0.01, "got {}", celsius);
    }

    #[test]
    fn colder_means_higher_resistance() {
        let model = BetaModel::default();
        let warm = model.celsius(5_000.0).unwrap();
        let cold = model.celsius(20_000.0).unwrap();
        assert!(cold < 25.0 && 25.0 < warm);
    }

    #[test]
    fn midscale_golden_value() {
        // R = 9980.46875 ohm, B = 3455 K, R0 = 10 kohm
        let celsius = BetaModel::default().celsius(9980.46875).unwrap();
        assert_eq!(celsius, 25.050317382812523);
    }

    #[test]
    fn rejects_non_positive_resistance() {
        let model = BetaModel::default();
        assert!(matches!(
            model.celsius(0.0),
            Err(ConversionError::NonPositiveResistance { .. })
        ));
        assert!(model.celsius(-12.0).is_err());
        assert!(model.celsius(f32::NAN).is_err());
    }

    #[test]
    fn rejects_bad_constants() {
        assert!(BetaModel::new(0.0, 10_000).is_err());
        assert!(BetaModel::new(-3455.0, 10_000).is_err());
        assert!(BetaModel::new(f32::NAN, 10_000).is_err());
        assert!(BetaModel::new(3455.0, 0).is_err());
        assert!(BetaModel::new(3950.0, 100_000).is_ok());
    }
}
