//! Reference Circuit Specifications
//!
//! Values for the one supported topology:
//!
//! ```text
//! Vcc ─── NTC ───┬─── series resistor ─── GND
//!                │
//!               ADC
//! ```
//!
//! The defaults describe a common 10 kΩ NTC (B = 3455 K) paired with a
//! 10 kΩ series resistor. Callers with other parts supply their own values.

// ===== DIVIDER =====

/// Series (lower leg) resistor of the reference divider (Ω).
pub const REFERENCE_SERIES_RESISTANCE_OHMS: u32 = 10_000;

// ===== BETA MODEL =====

/// Thermistor resistance at 25 °C (Ω).
///
/// Source: 10 kΩ NTC datasheet nominal value
pub const REFERENCE_NOMINAL_RESISTANCE_OHMS: u32 = 10_000;

/// Thermistor Beta coefficient (K).
///
/// Typical NTC parts range from 3000 K to 4500 K.
pub const REFERENCE_BETA_COEFFICIENT: f32 = 3455.0;

// ===== STEINHART-HART MODEL =====

/// Steinhart-Hart `a` coefficient for the reference thermistor (1/K).
pub const REFERENCE_STEINHART_A: f32 = 0.001129241;

/// Steinhart-Hart `b` coefficient for the reference thermistor (1/K).
pub const REFERENCE_STEINHART_B: f32 = 0.0002341077;

/// Steinhart-Hart `c` coefficient for the reference thermistor (1/K).
pub const REFERENCE_STEINHART_C: f32 = 0.00000008775468;

// ===== CONVERTERS =====

/// Analog input wired to the divider on an Arduino Uno (A5).
pub const ARDUINO_UNO_NTC_CHANNEL: u8 = 5;

/// Default 7-bit I2C address of an ADS1115 (ADDR pin tied to GND).
pub const ADS1115_DEFAULT_ADDRESS: u8 = 0x48;

/// ADS1115 input the divider is wired to on the ESP32 board.
pub const ADS1115_NTC_CHANNEL: u8 = 0;

/// Divider supply on the ESP32 board, in millivolts (3.3 V rail).
pub const ADS1115_SUPPLY_MV: u16 = 3300;
