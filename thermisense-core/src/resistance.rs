//! Resistance estimation for the fixed divider topology
//!
//! The thermistor sits in the upper leg and the known series resistor in the
//! lower leg, so the ADC reads
//!
//! ```text
//! raw = max_code * R_series / (R_ntc + R_series)
//! R_ntc = (R_series / raw) * max_code - R_series
//! ```
//!
//! Resistance falls as the code rises. The expression is evaluated in `f32`
//! in exactly that operation order; firmware that logged these values before
//! gets the same bits back.

use crate::{
    errors::{ConversionError, ConversionResult},
    models::ThermistorModel,
};

/// One quantized ADC reading
pub type RawSample = u16;

/// Largest code a converter can produce (one less than `2^bits`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdcResolution(u16);

impl AdcResolution {
    /// 10-bit converter (AVR, ESP32 in Arduino compatibility mode)
    pub const TEN_BIT: Self = Self(1023);

    /// 12-bit converter (RP2040, STM32, ESP32 native)
    pub const TWELVE_BIT: Self = Self(4095);

    /// ADS1115 single-ended full scale; the sign bit is never set
    pub const FIFTEEN_BIT: Self = Self(32767);

    /// Full 16-bit converter
    pub const SIXTEEN_BIT: Self = Self(65535);

    /// Resolution of a converter with the given bit depth (1..=16)
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits == 0 || bits > 16 {
            return None;
        }
        Some(Self(((1u32 << bits) - 1) as u16))
    }

    /// Resolution given directly as the maximum code
    pub const fn from_max_code(max_code: u16) -> Option<Self> {
        if max_code == 0 {
            None
        } else {
            Some(Self(max_code))
        }
    }

    /// The largest code the converter can produce
    pub const fn max_code(self) -> u16 {
        self.0
    }

    /// Whether `raw` is a code the divider formula can use
    pub const fn accepts(self, raw: RawSample) -> bool {
        raw != 0 && raw <= self.0
    }
}

impl Default for AdcResolution {
    fn default() -> Self {
        Self::TEN_BIT
    }
}

/// Estimate the thermistor resistance from one ADC code
///
/// Unchecked: a zero code yields infinity and a full-scale code yields zero
/// or a tiny residue. Use [`VoltageDivider::resistance`] to get typed errors.
pub fn estimate_resistance(raw: RawSample, series_ohms: u32, resolution: AdcResolution) -> f32 {
    let series = series_ohms as f32;
    (series / f32::from(raw)) * f32::from(resolution.max_code()) - series
}

/// The supply - NTC - ADC - series resistor - ground divider
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VoltageDivider {
    /// Lower-leg resistor in ohms
    series_resistance: u32,

    /// Converter sampling the tap node
    resolution: AdcResolution,
}

impl VoltageDivider {
    /// Describe a divider with the given series resistor and converter
    pub const fn new(series_resistance: u32, resolution: AdcResolution) -> Self {
        Self {
            series_resistance,
            resolution,
        }
    }

    /// Series resistor in ohms
    pub const fn series_resistance(&self) -> u32 {
        self.series_resistance
    }

    /// Converter resolution
    pub const fn resolution(&self) -> AdcResolution {
        self.resolution
    }

    /// Estimated thermistor resistance, rejecting samples the formula cannot use
    pub fn resistance(&self, raw: RawSample) -> ConversionResult<f32> {
        if !self.resolution.accepts(raw) {
            log_warn!(
                "Rejected ADC sample {} (valid 1..={})",
                raw,
                self.resolution.max_code()
            );
            return Err(ConversionError::InvalidSample {
                raw,
                max: self.resolution.max_code(),
            });
        }

        let ohms = estimate_resistance(raw, self.series_resistance, self.resolution);

        // Catches NaN as well as zero and negative estimates
        if !(ohms > 0.0) {
            log_warn!("Divider estimate {} ohm for sample {} is not positive", ohms, raw);
            return Err(ConversionError::NonPositiveResistance { ohms });
        }

        Ok(ohms)
    }

    /// Temperature in Celsius for one sample under the given model
    pub fn celsius<M: ThermistorModel + ?Sized>(&self, raw: RawSample, model: &M) -> ConversionResult<f64> {
        let ohms = self.resistance(raw)?;
        model.celsius(ohms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_from_bits() {
        assert_eq!(AdcResolution::from_bits(10), Some(AdcResolution::TEN_BIT));
        assert_eq!(AdcResolution::from_bits(12), Some(AdcResolution::TWELVE_BIT));
        assert_eq!(AdcResolution::from_bits(16), Some(AdcResolution::SIXTEEN_BIT));
        assert_eq!(AdcResolution::from_bits(0), None);
        assert_eq!(AdcResolution::from_bits(17), None);
        assert_eq!(AdcResolution::from_max_code(0), None);
    }

    #[test]
    fn midscale_reference_value() {
        // (10000 / 512) * 1023 - 10000
        let ohms = estimate_resistance(512, 10_000, AdcResolution::TEN_BIT);
        assert_eq!(ohms, 9980.46875);
    }

    #[test]
    fn exact_thirds() {
        let ohms = estimate_resistance(341, 10_000, AdcResolution::TEN_BIT);
        assert_eq!(ohms, 20_000.0);
    }

    #[test]
    fn resistance_falls_as_code_rises() {
        let divider = VoltageDivider::new(10_000, AdcResolution::TEN_BIT);
        let mut previous = f32::INFINITY;
        for raw in [1u16, 10, 100, 256, 512, 768, 900, 1000, 1022] {
            let ohms = divider.resistance(raw).unwrap();
            assert!(ohms < previous, "raw {} gave {} >= {}", raw, ohms, previous);
            previous = ohms;
        }
    }

    #[test]
    fn zero_code_is_unchecked_infinity() {
        let ohms = estimate_resistance(0, 10_000, AdcResolution::TEN_BIT);
        assert!(ohms.is_infinite());
    }

    #[test]
    fn zero_code_is_rejected() {
        let divider = VoltageDivider::new(10_000, AdcResolution::TEN_BIT);
        assert_eq!(
            divider.resistance(0),
            Err(ConversionError::InvalidSample { raw: 0, max: 1023 })
        );
    }

    #[test]
    fn code_above_full_scale_is_rejected() {
        let divider = VoltageDivider::new(10_000, AdcResolution::TEN_BIT);
        assert!(matches!(
            divider.resistance(1024),
            Err(ConversionError::InvalidSample { raw: 1024, .. })
        ));
    }

    #[test]
    fn full_scale_code_has_no_positive_resistance() {
        let divider = VoltageDivider::new(10_000, AdcResolution::TEN_BIT);
        assert!(matches!(
            divider.resistance(1023),
            Err(ConversionError::NonPositiveResistance { .. })
        ));
    }
}
