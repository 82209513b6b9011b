//! Physical Constants
//!
//! Temperature scale offsets shared by both thermistor models.

/// Offset between the Kelvin and Celsius scales (K).
///
/// Both models compute in Kelvin and subtract this to report Celsius.
///
/// Source: SI definition of the degree Celsius
pub const KELVIN_OFFSET: f64 = 273.15;

/// Reference temperature of the Beta model (°C).
///
/// Thermistor datasheets quote the nominal resistance R0 at 25 °C.
/// The Beta model is anchored at this point and returns it exactly when the
/// estimated resistance equals R0.
pub const NOMINAL_TEMPERATURE_C: f64 = 25.0;

/// Reference temperature of the Beta model (K).
pub const NOMINAL_TEMPERATURE_K: f64 = NOMINAL_TEMPERATURE_C + KELVIN_OFFSET;
