//! embedded-hal 0.2 adapters implementing [`AnalogSource`](crate::traits::AnalogSource)
//!
//! - [`OneShotSource`]: any on-chip ADC exposing `adc::OneShot`, bound to one pin
//! - [`Ads1115`]: TI ADS1115 16-bit converter on a blocking I2C bus

pub mod ads1115;
pub mod one_shot;

pub use ads1115::{Ads1115, Ads1115Error, Gain};
pub use one_shot::{OneShotError, OneShotSource};
