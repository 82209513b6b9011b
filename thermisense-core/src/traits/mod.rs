//! Capability Traits
//!
//! The conversion core never touches hardware. Everything it consumes or
//! produces crosses one of these seams:
//!
//! - [`source`] - "read one raw sample from channel X" ([`AnalogSource`])
//! - [`sink`] - "report a labeled temperature" ([`ReportSink`])
//! - [`time`] - "what time is it" ([`TimeSource`])
//!
//! A built-in ADC and an external I2C converter are two implementations of
//! the same [`AnalogSource`]; the sampler loop is written once against the
//! trait and the platform picks the implementation at construction time.
//!
//! ## Usage Example
//!
//! ```rust
//! use thermisense_core::traits::AnalogSource;
//! use thermisense_core::resistance::{AdcResolution, RawSample};
//!
//! struct FixedCode(RawSample);
//!
//! impl AnalogSource for FixedCode {
//!     type Error = core::convert::Infallible;
//!
//!     fn resolution(&self) -> AdcResolution {
//!         AdcResolution::TEN_BIT
//!     }
//!
//!     fn read(&mut self, _channel: u8) -> nb::Result<RawSample, Self::Error> {
//!         Ok(self.0)
//!     }
//! }
//!
//! let mut adc = FixedCode(512);
//! assert_eq!(nb::block!(adc.read(0)), Ok(512));
//! ```

pub mod sink;
pub mod source;
pub mod time;

pub use sink::{PairError, ReportChannel, ReportSink};
pub use source::AnalogSource;
pub use time::TimeSource;
