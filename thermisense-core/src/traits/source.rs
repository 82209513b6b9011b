//! Analog sample source

use crate::resistance::{AdcResolution, RawSample};

/// Something that can produce raw codes for the divider's tap node
///
/// Reads follow the `nb` convention: a converter that needs time to finish a
/// conversion returns `nb::Error::WouldBlock` and is polled again. Gain and
/// any other converter setup happen once at construction, never per read.
pub trait AnalogSource {
    /// Driver-specific read failure
    type Error;

    /// Largest code this source can return
    fn resolution(&self) -> AdcResolution;

    /// Read one raw sample from `channel`
    fn read(&mut self, channel: u8) -> nb::Result<RawSample, Self::Error>;
}

impl<T: AnalogSource + ?Sized> AnalogSource for &mut T {
    type Error = T::Error;

    fn resolution(&self) -> AdcResolution {
        (**self).resolution()
    }

    fn read(&mut self, channel: u8) -> nb::Result<RawSample, Self::Error> {
        (**self).read(channel)
    }
}
