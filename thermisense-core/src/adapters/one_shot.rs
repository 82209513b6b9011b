//! On-chip ADC adapter

use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};

use crate::{
    resistance::{AdcResolution, RawSample},
    traits::AnalogSource,
};

/// Read failure of a [`OneShotSource`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OneShotError<E> {
    /// The HAL's ADC reported an error
    Adc(E),
    /// Asked for a channel other than the bound pin's
    UnboundChannel(u8),
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for OneShotError<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Adc(error) => defmt::write!(fmt, "ADC failed: {}", error),
            Self::UnboundChannel(channel) => defmt::write!(fmt, "Channel {} not bound", channel),
        }
    }
}

/// A HAL ADC paired with the pin wired to the divider tap
///
/// The HAL addresses channels by pin type, so the source owns exactly one
/// pin and accepts only that pin's channel number.
pub struct OneShotSource<A, ADC, P> {
    adc: A,
    pin: P,
    resolution: AdcResolution,
    _adc: PhantomData<ADC>,
}

impl<A, ADC, P> OneShotSource<A, ADC, P>
where
    A: OneShot<ADC, u16, P>,
    P: Channel<ADC, ID = u8>,
{
    /// Bind `pin` on `adc`; `resolution` is the converter's top code
    pub fn new(adc: A, pin: P, resolution: AdcResolution) -> Self {
        Self {
            adc,
            pin,
            resolution,
            _adc: PhantomData,
        }
    }

    /// Channel number of the bound pin
    pub fn channel(&self) -> u8 {
        P::channel()
    }

    /// Give the ADC and pin back
    pub fn release(self) -> (A, P) {
        (self.adc, self.pin)
    }
}

impl<A, ADC, P> AnalogSource for OneShotSource<A, ADC, P>
where
    A: OneShot<ADC, u16, P>,
    P: Channel<ADC, ID = u8>,
{
    type Error = OneShotError<A::Error>;

    fn resolution(&self) -> AdcResolution {
        self.resolution
    }

    fn read(&mut self, channel: u8) -> nb::Result<RawSample, Self::Error> {
        if channel != P::channel() {
            return Err(nb::Error::Other(OneShotError::UnboundChannel(channel)));
        }
        self.adc
            .read(&mut self.pin)
            .map_err(|error| error.map(OneShotError::Adc))
    }
}
