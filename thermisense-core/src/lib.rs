//! NTC thermistor conversion for edge devices
//!
//! Reads an NTC thermistor through a fixed voltage divider and converts each
//! raw ADC code to Celsius with both the Beta model and the Steinhart-Hart
//! model, side by side.
//!
//! Key constraints:
//! - `no_std`, no heap allocation anywhere in the sampling path
//! - Pure conversion functions; the sampler is the only stateful part
//! - Bit-compatible with firmware that logged the same formulas in `f32`
//!
//! ```rust
//! use thermisense_core::{temp_ntc_beta, temp_ntc_steinhart};
//!
//! // Midscale on a 10-bit ADC with a 10 kΩ series resistor
//! let beta = temp_ntc_beta(512, 10_000, 3455.0, 10_000)?;
//! let steinhart = temp_ntc_steinhart(512, 10_000, 0.001129241, 0.0002341077, 0.00000008775468)?;
//!
//! assert!((beta - 25.05).abs() < 0.01);
//! assert!((steinhart - 25.04).abs() < 0.01);
//! # Ok::<(), thermisense_core::ConversionError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]

#[macro_use]
mod logging;

#[cfg(feature = "hal")]
pub mod adapters;
pub mod constants;
pub mod errors;
pub mod models;
pub mod report;
pub mod resistance;
pub mod sampler;
pub mod time;
pub mod traits;

// Public API
pub use errors::{ConversionError, ConversionResult, SamplerError};
pub use models::{
    temp_ntc_beta,
    temp_ntc_beta_with_resolution,
    temp_ntc_steinhart,
    temp_ntc_steinhart_with_resolution,
    BetaModel,
    SteinhartHartModel,
    ThermistorModel,
};
pub use resistance::{estimate_resistance, AdcResolution, RawSample, VoltageDivider};
pub use sampler::{DualReading, Sampler, SamplerConfig};
pub use traits::{AnalogSource, ReportChannel, ReportSink, TimeSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
