//! Resistance-to-Temperature Models
//!
//! ## Overview
//!
//! Two interchangeable approximations of the NTC resistance curve:
//!
//! | Model          | Constants            | Typical accuracy (0-50 °C) |
//! |----------------|----------------------|----------------------------|
//! | Beta           | B, R0 at 25 °C       | ±1-3 °C away from 25 °C    |
//! | Steinhart-Hart | a, b, c              | ±0.1 °C inside the fit span |
//!
//! Both are pure and stateless. The sampler runs both on the same raw code and
//! reports the pair, which makes drift between them visible during bring-up.
//!
//! ## Floating-Point Semantics
//!
//! The reference firmware stored intermediates in single precision and did the
//! final reciprocal in double precision. The models reproduce that mix:
//!
//! ```text
//! Beta:      ratio, ln(ratio)         f32
//!            1 / (1/T0 + ln/B)        f64, stored as f32 Kelvin
//! Steinhart: ln(R), a + b·lr + c·lr³  f32
//!            1 / poly                 f64, stored as f32 Kelvin
//! Celsius:   f64(kelvin) - 273.15
//! ```
//!
//! ## Usage Example
//!
//! ```rust
//! use thermisense_core::models::{BetaModel, SteinhartHartModel, ThermistorModel};
//!
//! let beta = BetaModel::new(3455.0, 10_000)?;
//! let steinhart = SteinhartHartModel::new(0.001129241, 0.0002341077, 0.00000008775468)?;
//!
//! let at_nominal = beta.celsius(10_000.0)?;
//! assert!((at_nominal - 25.0).abs() < 0.01);
//! assert!((steinhart.celsius(10_000.0)? - at_nominal).abs() < 0.5);
//! # Ok::<(), thermisense_core::ConversionError>(())
//! ```

mod beta;
mod steinhart;

pub use beta::BetaModel;
pub use steinhart::SteinhartHartModel;

use crate::{
    constants::KELVIN_OFFSET,
    errors::{ConversionError, ConversionResult},
    resistance::{AdcResolution, RawSample, VoltageDivider},
    traits::ReportChannel,
};

/// A resistance-to-temperature approximation
pub trait ThermistorModel {
    /// Temperature in Celsius for an estimated thermistor resistance
    fn celsius(&self, resistance_ohms: f32) -> ConversionResult<f64>;

    /// Report channel this model's readings are published on
    fn channel(&self) -> ReportChannel;
}

/// Shared tail of both models: reject non-physical Kelvin, then shift scales
pub(crate) fn kelvin_to_celsius(kelvin: f32) -> ConversionResult<f64> {
    if !kelvin.is_finite() || kelvin <= 0.0 {
        log_warn!("Model output {} K is not physical", kelvin);
        return Err(ConversionError::NonPhysicalTemperature { kelvin });
    }
    Ok(f64::from(kelvin) - KELVIN_OFFSET)
}

/// Logarithms only take strictly positive resistances
pub(crate) fn check_resistance(resistance_ohms: f32) -> ConversionResult<f32> {
    if resistance_ohms > 0.0 {
        Ok(resistance_ohms)
    } else {
        Err(ConversionError::NonPositiveResistance {
            ohms: resistance_ohms,
        })
    }
}

/// Beta-model temperature for a 10-bit sample
///
/// `series_resistance` is the divider's lower leg, `b_coefficient` the
/// thermistor's Beta constant and `nominal_resistance` its resistance at 25 °C.
pub fn temp_ntc_beta(
    analog_value: RawSample,
    series_resistance: u32,
    b_coefficient: f32,
    nominal_resistance: u32,
) -> ConversionResult<f64> {
    temp_ntc_beta_with_resolution(
        analog_value,
        series_resistance,
        b_coefficient,
        nominal_resistance,
        AdcResolution::TEN_BIT,
    )
}

/// Beta-model temperature for a sample from a converter of any resolution
pub fn temp_ntc_beta_with_resolution(
    analog_value: RawSample,
    series_resistance: u32,
    b_coefficient: f32,
    nominal_resistance: u32,
    resolution: AdcResolution,
) -> ConversionResult<f64> {
    let model = BetaModel::new(b_coefficient, nominal_resistance)?;
    VoltageDivider::new(series_resistance, resolution).celsius(analog_value, &model)
}

/// Steinhart-Hart temperature for a 10-bit sample
pub fn temp_ntc_steinhart(
    analog_value: RawSample,
    series_resistance: u32,
    a: f32,
    b: f32,
    c: f32,
) -> ConversionResult<f64> {
    temp_ntc_steinhart_with_resolution(analog_value, series_resistance, a, b, c, AdcResolution::TEN_BIT)
}

/// Steinhart-Hart temperature for a sample from a converter of any resolution
pub fn temp_ntc_steinhart_with_resolution(
    analog_value: RawSample,
    series_resistance: u32,
    a: f32,
    b: f32,
    c: f32,
    resolution: AdcResolution,
) -> ConversionResult<f64> {
    let model = SteinhartHartModel::new(a, b, c)?;
    VoltageDivider::new(series_resistance, resolution).celsius(analog_value, &model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::sensors::*;

    #[test]
    fn kelvin_below_zero_is_rejected() {
        assert!(matches!(
            kelvin_to_celsius(-5.0),
            Err(ConversionError::NonPhysicalTemperature { .. })
        ));
        assert!(kelvin_to_celsius(f32::NAN).is_err());
        assert!(kelvin_to_celsius(f32::INFINITY).is_err());
    }

    #[test]
    fn zero_sample_fails_the_same_way_in_both_models() {
        let beta = temp_ntc_beta(0, 10_000, REFERENCE_BETA_COEFFICIENT, 10_000);
        let steinhart = temp_ntc_steinhart(
            0,
            10_000,
            REFERENCE_STEINHART_A,
            REFERENCE_STEINHART_B,
            REFERENCE_STEINHART_C,
        );
        let expected = Err(ConversionError::InvalidSample { raw: 0, max: 1023 });
        assert_eq!(beta, expected);
        assert_eq!(steinhart, expected);
    }

    #[test]
    fn wider_converters_scale_the_code() {
        // Half of a 12-bit range lands on the same resistance as half of 10 bits
        let ten = temp_ntc_beta(512, 10_000, 3455.0, 10_000).unwrap();
        let twelve =
            temp_ntc_beta_with_resolution(2048, 10_000, 3455.0, 10_000, AdcResolution::TWELVE_BIT)
                .unwrap();
        assert!((ten - twelve).abs() < 0.1);
    }

    #[test]
    fn bad_calibration_surfaces_before_conversion() {
        assert!(matches!(
            temp_ntc_beta(512, 10_000, 0.0, 10_000),
            Err(ConversionError::InvalidCalibration { .. })
        ));
    }
}
