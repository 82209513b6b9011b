//! Constants for thermisense
//!
//! Centralized, documented constants for the conversion math and the
//! reference circuit. Every numeric value used by the models or the sampler
//! defaults is defined here with its unit in the name.
//!
//! ## Organization
//!
//! - **Physics**: temperature scale offsets and the Beta model reference point
//! - **Sensors**: the reference divider, thermistor and converter
//! - **Time**: sampling intervals

/// Temperature scale constants and the Beta model reference point.
pub mod physics;

/// Reference divider, thermistor calibration and converter constants.
pub mod sensors;

/// Sampling intervals.
pub mod time;

// Re-export commonly used constants for convenience
pub use physics::{KELVIN_OFFSET, NOMINAL_TEMPERATURE_C, NOMINAL_TEMPERATURE_K};

pub use sensors::{
    REFERENCE_SERIES_RESISTANCE_OHMS, REFERENCE_NOMINAL_RESISTANCE_OHMS,
    REFERENCE_BETA_COEFFICIENT, REFERENCE_STEINHART_A, REFERENCE_STEINHART_B,
    REFERENCE_STEINHART_C,
};

pub use time::DEFAULT_SAMPLE_INTERVAL_MS;
