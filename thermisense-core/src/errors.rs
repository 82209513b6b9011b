//! Error Types for Thermistor Conversion Failures
//!
//! ## Design Philosophy
//!
//! The reference firmware had no error path at all: a zero ADC code divided by
//! zero and a non-positive resistance went straight into a logarithm, and the
//! resulting NaN or infinity was printed like any other temperature. Here those
//! cases become typed errors so a caller can tell a sensor fault apart from a
//! valid extreme reading.
//!
//! Errors stay small and `Copy`: no heap data, only scalar fields and
//! `&'static str` reasons. They are returned from the sampling hot path and
//! may be forwarded to a report sink on every cycle.
//!
//! ## Error Categories
//!
//! ### Sample faults
//! - `InvalidSample`: raw code outside `1..=max_code` (code 0 divides by zero)
//!
//! ### Domain faults
//! - `NonPositiveResistance`: the divider estimate cannot feed a logarithm
//! - `NonPhysicalTemperature`: the model produced a non-finite or ≤ 0 K result
//!
//! ### Configuration faults
//! - `InvalidCalibration`: model constants that would divide by zero or are not finite
//!
//! ## Handling Strategy
//!
//! ```rust
//! use thermisense_core::{temp_ntc_beta, ConversionError};
//!
//! match temp_ntc_beta(0, 10_000, 3455.0, 10_000) {
//!     Ok(celsius) => assert!(celsius.is_finite()),
//!     Err(ConversionError::InvalidSample { raw, .. }) => assert_eq!(raw, 0),
//!     Err(other) => panic!("unexpected error: {}", other),
//! }
//! ```

use core::fmt;

use thiserror_no_std::Error;

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Conversion errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConversionError {
    /// Raw ADC code outside the converter's valid range
    #[error("ADC sample {raw} outside valid range 1..={max}")]
    InvalidSample {
        /// The code read from the converter
        raw: u16,
        /// Largest code the converter can produce
        max: u16,
    },

    /// Divider estimate that cannot be fed to a logarithm
    #[error("Estimated resistance {ohms} ohm is not positive")]
    NonPositiveResistance {
        /// The estimated thermistor resistance
        ohms: f32,
    },

    /// Model output below absolute zero, infinite or NaN
    #[error("Model produced non-physical temperature {kelvin} K")]
    NonPhysicalTemperature {
        /// The model output before conversion to Celsius
        kelvin: f32,
    },

    /// Calibration constants the models cannot work with
    #[error("Invalid calibration: {reason}")]
    InvalidCalibration {
        /// Which constant was rejected
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConversionError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidSample { raw, max } =>
                defmt::write!(fmt, "Sample {} outside 1..={}", raw, max),
            Self::NonPositiveResistance { ohms } =>
                defmt::write!(fmt, "Resistance {} ohm not positive", ohms),
            Self::NonPhysicalTemperature { kelvin } =>
                defmt::write!(fmt, "Non-physical temperature {} K", kelvin),
            Self::InvalidCalibration { reason } =>
                defmt::write!(fmt, "Invalid calibration: {}", reason),
        }
    }
}

/// Failure of one sampling cycle
///
/// Conversion problems are not sampler errors: they travel inside
/// [`DualReading`](crate::sampler::DualReading) so one model failing never
/// hides the other. Only the ADC read and the report sink can fail a cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplerError<S, K> {
    /// The analog source failed to deliver a sample
    Source(S),
    /// The report sink rejected a reading
    Sink(K),
}

impl<S: fmt::Debug, K: fmt::Debug> fmt::Display for SamplerError<S, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source(error) => write!(f, "ADC read failed: {:?}", error),
            Self::Sink(error) => write!(f, "Report sink failed: {:?}", error),
        }
    }
}

#[cfg(feature = "std")]
impl<S: fmt::Debug, K: fmt::Debug> std::error::Error for SamplerError<S, K> {}

#[cfg(feature = "defmt")]
impl<S: defmt::Format, K: defmt::Format> defmt::Format for SamplerError<S, K> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Source(error) => defmt::write!(fmt, "ADC read failed: {}", error),
            Self::Sink(error) => defmt::write!(fmt, "Report sink failed: {}", error),
        }
    }
}
