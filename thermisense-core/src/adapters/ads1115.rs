//! TI ADS1115 over blocking I2C
//!
//! Single-shot, single-ended conversions at 128 SPS with the comparator off.
//! A read is a small state machine driven by `nb`:
//!
//! ```text
//! idle ── write config (OS=1, MUX=AINx/GND) ──▶ converting      → WouldBlock
//! converting ── config OS bit still 0 ─────────▶ converting      → WouldBlock
//! converting ── OS bit 1 ── read conversion ───▶ idle            → Ok(code)
//! ```
//!
//! Gain is chosen once at construction. Single-ended inputs never go below
//! ground in a working circuit, so negative codes (offset noise) clamp to 0.
//!
//! The divider formula needs the code that reads the divider supply, not the
//! converter's full-scale code. With gain 2/3 (±6.144 V) and a 3.3 V divider
//! that is `3300 / 6144 * 32768 = 17600`, so `resolution()` derives
//! it from the supply set with [`Ads1115::with_supply_mv`] and the gain.

use embedded_hal::blocking::i2c::{Write, WriteRead};

use crate::{
    constants::sensors::{ADS1115_DEFAULT_ADDRESS, ADS1115_SUPPLY_MV},
    resistance::{AdcResolution, RawSample},
    traits::AnalogSource,
};

const REG_CONVERSION: u8 = 0x00;
const REG_CONFIG: u8 = 0x01;

const OS_SINGLE: u16 = 0x8000;
const MUX_SINGLE_ENDED: u16 = 0x4000;
const MODE_SINGLE_SHOT: u16 = 0x0100;
const DATA_RATE_128SPS: u16 = 0x0080;
const COMPARATOR_DISABLED: u16 = 0x0003;

/// Single-ended inputs AIN0..=AIN3
const CHANNEL_COUNT: u8 = 4;

/// Codes per full-scale range on the positive side
const POSITIVE_CODES: u32 = 32768;

/// Programmable gain amplifier setting (full-scale input range)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gain {
    /// ±6.144 V
    #[default]
    TwoThirds,
    /// ±4.096 V
    One,
    /// ±2.048 V
    Two,
    /// ±1.024 V
    Four,
    /// ±0.512 V
    Eight,
    /// ±0.256 V
    Sixteen,
}

impl Gain {
    /// PGA bits of the config register
    pub const fn bits(self) -> u16 {
        match self {
            Self::TwoThirds => 0x0000,
            Self::One => 0x0200,
            Self::Two => 0x0400,
            Self::Four => 0x0600,
            Self::Eight => 0x0800,
            Self::Sixteen => 0x0A00,
        }
    }

    /// Full-scale input range in millivolts
    pub const fn full_scale_mv(self) -> u16 {
        match self {
            Self::TwoThirds => 6144,
            Self::One => 4096,
            Self::Two => 2048,
            Self::Four => 1024,
            Self::Eight => 512,
            Self::Sixteen => 256,
        }
    }

    /// Code an input at `supply_mv` converts to, saturated to `1..=32767`
    pub const fn supply_code(self, supply_mv: u16) -> u16 {
        let full_scale = self.full_scale_mv() as u32;
        let code = (supply_mv as u32 * POSITIVE_CODES + full_scale / 2) / full_scale;
        if code == 0 {
            1
        } else if code > i16::MAX as u32 {
            i16::MAX as u16
        } else {
            code as u16
        }
    }
}

/// ADS1115 failure
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ads1115Error<E> {
    /// Bus transaction failed
    I2c(E),
    /// Channel outside 0..=3
    InvalidChannel(u8),
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Ads1115Error<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::I2c(error) => defmt::write!(fmt, "ADS1115 bus error: {}", error),
            Self::InvalidChannel(channel) => defmt::write!(fmt, "ADS1115 has no AIN{}", channel),
        }
    }
}

/// ADS1115 driver exposing single-ended inputs as an analog source
#[derive(Debug)]
pub struct Ads1115<I2C> {
    i2c: I2C,
    address: u8,
    gain: Gain,
    supply_mv: u16,
    pending: Option<u8>,
}

impl<I2C, E> Ads1115<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    /// Converter at `address`, gain 2/3, divider on a 3.3 V supply
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            gain: Gain::default(),
            supply_mv: ADS1115_SUPPLY_MV,
            pending: None,
        }
    }

    /// Converter at 0x48 (ADDR tied to ground)
    pub fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, ADS1115_DEFAULT_ADDRESS)
    }

    /// Set the PGA range used for every conversion
    pub fn with_gain(mut self, gain: Gain) -> Self {
        self.gain = gain;
        self
    }

    /// Set the voltage across the divider, in millivolts
    pub fn with_supply_mv(mut self, supply_mv: u16) -> Self {
        self.supply_mv = supply_mv;
        self
    }

    /// Current PGA range
    pub fn gain(&self) -> Gain {
        self.gain
    }

    /// Divider supply in millivolts
    pub fn supply_mv(&self) -> u16 {
        self.supply_mv
    }

    /// 7-bit I2C address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Config word that starts one conversion on `channel`
    pub fn config_word(&self, channel: u8) -> u16 {
        OS_SINGLE
            | MUX_SINGLE_ENDED
            | (u16::from(channel) << 12)
            | self.gain.bits()
            | MODE_SINGLE_SHOT
            | DATA_RATE_128SPS
            | COMPARATOR_DISABLED
    }

    fn write_register(&mut self, register: u8, value: u16) -> Result<(), E> {
        let [hi, lo] = value.to_be_bytes();
        self.i2c.write(self.address, &[register, hi, lo])
    }

    fn read_register(&mut self, register: u8) -> Result<u16, E> {
        let mut buffer = [0u8; 2];
        self.i2c.write_read(self.address, &[register], &mut buffer)?;
        Ok(u16::from_be_bytes(buffer))
    }

    fn start(&mut self, channel: u8) -> Result<(), E> {
        let config = self.config_word(channel);
        log_trace!("ADS1115 start AIN{} config {:#06x}", channel, config);
        self.write_register(REG_CONFIG, config)?;
        self.pending = Some(channel);
        Ok(())
    }
}

impl<I2C, E> AnalogSource for Ads1115<I2C>
where
    I2C: Write<Error = E> + WriteRead<Error = E>,
{
    type Error = Ads1115Error<E>;

    /// Code of the divider supply at the configured gain
    fn resolution(&self) -> AdcResolution {
        let code = self.gain.supply_code(self.supply_mv);
        AdcResolution::from_max_code(code).unwrap_or(AdcResolution::FIFTEEN_BIT)
    }

    fn read(&mut self, channel: u8) -> nb::Result<RawSample, Self::Error> {
        if channel >= CHANNEL_COUNT {
            return Err(nb::Error::Other(Ads1115Error::InvalidChannel(channel)));
        }

        if self.pending != Some(channel) {
            self.start(channel).map_err(|e| nb::Error::Other(Ads1115Error::I2c(e)))?;
            return Err(nb::Error::WouldBlock);
        }

        let config = self
            .read_register(REG_CONFIG)
            .map_err(|e| nb::Error::Other(Ads1115Error::I2c(e)))?;
        if config & OS_SINGLE == 0 {
            return Err(nb::Error::WouldBlock);
        }

        let code = self
            .read_register(REG_CONVERSION)
            .map_err(|e| nb::Error::Other(Ads1115Error::I2c(e)))?;
        self.pending = None;

        let signed = code as i16;
        log_trace!("ADS1115 AIN{} code {}", channel, signed);
        Ok(signed.max(0) as RawSample)
    }
}
