//! Fixed-Interval Dual-Model Sampler
//!
//! ## Overview
//!
//! One cooperative loop, one ADC channel, two models:
//!
//! ```text
//! loop:
//!   now - last_sample >= interval ?
//!     ├── no  → return, nothing to do
//!     └── yes → read one code (blocking on WouldBlock)
//!               last_sample = now
//!               Beta(code)      ─┐ independent,
//!               Steinhart(code) ─┘ same input
//!               report both
//! ```
//!
//! The sampler owns the last-sample timestamp; nothing else writes it. A
//! failed ADC read leaves it untouched so the next poll retries immediately.
//! Conversion failures never fail the cycle: each model's result is reported
//! (or routed to [`ReportSink::report_fault`]) on its own, and the next cycle
//! starts clean.
//!
//! ## Timing
//!
//! Elapsed time is `now.wrapping_sub(last_sample)`, the same unsigned
//! arithmetic as a `millis()` loop, so a wrapping tick counter keeps its
//! cadence. The first reading is due once `interval_ms` has passed since
//! timestamp zero.
//!
//! ## Usage Example
//!
//! ```rust
//! use thermisense_core::{
//!     resistance::{AdcResolution, RawSample},
//!     sampler::{Sampler, SamplerConfig},
//!     traits::{AnalogSource, ReportChannel, ReportSink},
//! };
//!
//! struct Midscale;
//!
//! impl AnalogSource for Midscale {
//!     type Error = ();
//!     fn resolution(&self) -> AdcResolution { AdcResolution::TEN_BIT }
//!     fn read(&mut self, _channel: u8) -> nb::Result<RawSample, ()> { Ok(512) }
//! }
//!
//! struct Last(Option<f64>);
//!
//! impl ReportSink for Last {
//!     type Error = ();
//!     fn report(&mut self, _channel: ReportChannel, celsius: f64) -> Result<(), ()> {
//!         self.0 = Some(celsius);
//!         Ok(())
//!     }
//! }
//!
//! let mut sampler = Sampler::new(SamplerConfig::default());
//! let mut sink = Last(None);
//!
//! assert!(sampler.poll(500, &mut Midscale, &mut sink).unwrap().is_none());
//! let reading = sampler.poll(1000, &mut Midscale, &mut sink).unwrap().unwrap();
//! assert_eq!(reading.raw, 512);
//! assert!(sink.0.is_some());
//! ```

use core::fmt::Debug;

use crate::{
    constants::{
        sensors::{ADS1115_NTC_CHANNEL, ARDUINO_UNO_NTC_CHANNEL, REFERENCE_SERIES_RESISTANCE_OHMS},
        time::DEFAULT_SAMPLE_INTERVAL_MS,
    },
    errors::{ConversionResult, SamplerError},
    models::{BetaModel, SteinhartHartModel, ThermistorModel},
    resistance::{AdcResolution, RawSample, VoltageDivider},
    time::Timestamp,
    traits::{AnalogSource, ReportChannel, ReportSink, TimeSource},
};

/// Sampler configuration: cadence, wiring and calibration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Minimum time between readings in milliseconds
    pub interval_ms: u64,

    /// ADC channel wired to the divider tap
    pub channel: u8,

    /// Lower-leg resistor of the divider in ohms
    pub series_resistance: u32,

    /// Beta model constants
    pub beta: BetaModel,

    /// Steinhart-Hart model constants
    pub steinhart: SteinhartHartModel,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            channel: 0,
            series_resistance: REFERENCE_SERIES_RESISTANCE_OHMS,
            beta: BetaModel::default(),
            steinhart: SteinhartHartModel::default(),
        }
    }
}

impl SamplerConfig {
    /// Reference circuit on an Arduino Uno, divider on A5
    pub fn arduino_uno() -> Self {
        Self {
            channel: ARDUINO_UNO_NTC_CHANNEL,
            ..Self::default()
        }
    }

    /// Reference circuit on an ADS1115 input 0
    pub fn ads1115() -> Self {
        Self {
            channel: ADS1115_NTC_CHANNEL,
            ..Self::default()
        }
    }

    /// Milliseconds between readings
    pub fn with_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Converter input the divider is wired to
    pub fn with_channel(mut self, channel: u8) -> Self {
        self.channel = channel;
        self
    }

    /// Fixed divider resistor in ohms
    pub fn with_series_resistance(mut self, ohms: u32) -> Self {
        self.series_resistance = ohms;
        self
    }

    /// Replace the Beta model
    pub fn with_beta(mut self, beta: BetaModel) -> Self {
        self.beta = beta;
        self
    }

    /// Replace the Steinhart-Hart model
    pub fn with_steinhart(mut self, steinhart: SteinhartHartModel) -> Self {
        self.steinhart = steinhart;
        self
    }
}

/// Both model outputs for one raw sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualReading {
    /// The code both models were fed
    pub raw: RawSample,

    /// Beta model result in Celsius
    pub beta: ConversionResult<f64>,

    /// Steinhart-Hart model result in Celsius
    pub steinhart: ConversionResult<f64>,
}

impl DualReading {
    /// Result for one report channel
    pub fn get(&self, channel: ReportChannel) -> ConversionResult<f64> {
        match channel {
            ReportChannel::Beta => self.beta,
            ReportChannel::SteinhartHart => self.steinhart,
        }
    }

    /// Absolute disagreement between the models, if both succeeded
    pub fn spread(&self) -> Option<f64> {
        match (self.beta, self.steinhart) {
            (Ok(beta), Ok(steinhart)) => Some((beta - steinhart).abs()),
            _ => None,
        }
    }
}

/// Time-gated sampler driving both models
#[derive(Debug, Clone)]
pub struct Sampler {
    config: SamplerConfig,
    last_sample: Timestamp,
}

impl Sampler {
    /// Sampler that takes its first reading once `interval_ms` has elapsed
    pub fn new(config: SamplerConfig) -> Self {
        Self {
            config,
            last_sample: 0,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Timestamp of the last successful read (0 before the first one)
    pub fn last_sample(&self) -> Timestamp {
        self.last_sample
    }

    /// Whether a reading is due at `now`
    pub fn is_due(&self, now: Timestamp) -> bool {
        now.wrapping_sub(self.last_sample) >= self.config.interval_ms
    }

    /// Run both models on one code from a converter of the given resolution
    pub fn convert(&self, resolution: AdcResolution, raw: RawSample) -> DualReading {
        let divider = VoltageDivider::new(self.config.series_resistance, resolution);
        DualReading {
            raw,
            beta: divider.celsius(raw, &self.config.beta),
            steinhart: divider.celsius(raw, &self.config.steinhart),
        }
    }

    /// Take and report a reading if one is due
    ///
    /// Returns `Ok(None)` when the interval has not elapsed yet. Both channels
    /// are always offered to the sink; if either delivery fails the first
    /// failure is returned after the second has been attempted.
    pub fn poll<S, K>(
        &mut self,
        now: Timestamp,
        source: &mut S,
        sink: &mut K,
    ) -> Result<Option<DualReading>, SamplerError<S::Error, K::Error>>
    where
        S: AnalogSource + ?Sized,
        K: ReportSink + ?Sized,
    {
        if !self.is_due(now) {
            return Ok(None);
        }

        let raw = nb::block!(source.read(self.config.channel)).map_err(SamplerError::Source)?;
        self.last_sample = now;

        let reading = self.convert(source.resolution(), raw);
        log_debug!(
            "t={}ms raw={} beta={:?} steinhart={:?}",
            now,
            raw,
            reading.beta,
            reading.steinhart
        );

        let models: [&dyn ThermistorModel; 2] = [&self.config.beta, &self.config.steinhart];
        let mut first_failure = None;
        for model in models {
            let channel = model.channel();
            let delivered = match reading.get(channel) {
                Ok(celsius) => sink.report(channel, celsius),
                Err(error) => sink.report_fault(channel, error),
            };
            if let Err(error) = delivered {
                first_failure.get_or_insert(error);
            }
        }

        match first_failure {
            Some(error) => Err(SamplerError::Sink(error)),
            None => Ok(Some(reading)),
        }
    }

    /// Sample forever on the given clock
    ///
    /// Failed cycles are logged and the loop carries on; there is no exit.
    pub fn run<T, S, K>(&mut self, clock: &T, source: &mut S, sink: &mut K) -> !
    where
        T: TimeSource + ?Sized,
        S: AnalogSource + ?Sized,
        K: ReportSink + ?Sized,
        S::Error: Debug,
        K::Error: Debug,
    {
        loop {
            if let Err(_error) = self.poll(clock.now(), source, sink) {
                log_warn!("Sampling cycle failed: {}", _error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ConversionError;

    struct Script<'a> {
        codes: &'a [RawSample],
        next: usize,
        busy_polls: usize,
    }

    impl<'a> Script<'a> {
        fn new(codes: &'a [RawSample]) -> Self {
            Self { codes, next: 0, busy_polls: 0 }
        }
    }

    impl AnalogSource for Script<'_> {
        type Error = &'static str;

        fn resolution(&self) -> AdcResolution {
            AdcResolution::TEN_BIT
        }

        fn read(&mut self, _channel: u8) -> nb::Result<RawSample, Self::Error> {
            // Every other poll reports a conversion in progress
            self.busy_polls += 1;
            if self.busy_polls % 2 == 1 {
                return Err(nb::Error::WouldBlock);
            }
            let code = self.codes.get(self.next).copied().ok_or(nb::Error::Other("exhausted"))?;
            self.next += 1;
            Ok(code)
        }
    }

    #[derive(Default)]
    struct Tally {
        values: usize,
        faults: usize,
    }

    impl ReportSink for Tally {
        type Error = ();

        fn report(&mut self, _channel: ReportChannel, _celsius: f64) -> Result<(), ()> {
            self.values += 1;
            Ok(())
        }

        fn report_fault(&mut self, _channel: ReportChannel, _error: ConversionError) -> Result<(), ()> {
            self.faults += 1;
            Ok(())
        }
    }

    #[test]
    fn waits_for_the_interval() {
        let sampler = Sampler::new(SamplerConfig::default());
        assert!(!sampler.is_due(0));
        assert!(!sampler.is_due(999));
        assert!(sampler.is_due(1000));
    }

    #[test]
    fn timestamp_advances_once_per_cycle() {
        let mut sampler = Sampler::new(SamplerConfig::default());
        let mut source = Script::new(&[512, 512, 512]);
        let mut sink = Tally::default();

        assert!(sampler.poll(1000, &mut source, &mut sink).unwrap().is_some());
        assert_eq!(sampler.last_sample(), 1000);
        assert!(sampler.poll(1500, &mut source, &mut sink).unwrap().is_none());
        assert!(sampler.poll(2000, &mut source, &mut sink).unwrap().is_some());
        assert_eq!(sampler.last_sample(), 2000);
        assert_eq!(sink.values, 4);
    }

    #[test]
    fn bad_sample_is_reported_as_fault_and_next_cycle_recovers() {
        let mut sampler = Sampler::new(SamplerConfig::default());
        let mut source = Script::new(&[0, 512]);
        let mut sink = Tally::default();

        let bad = sampler.poll(1000, &mut source, &mut sink).unwrap().unwrap();
        assert!(bad.beta.is_err() && bad.steinhart.is_err());
        assert_eq!(sink.faults, 2);

        let good = sampler.poll(2000, &mut source, &mut sink).unwrap().unwrap();
        assert!(good.beta.is_ok() && good.steinhart.is_ok());
        assert_eq!(sink.values, 2);
    }

    #[test]
    fn failed_read_keeps_the_timestamp() {
        let mut sampler = Sampler::new(SamplerConfig::default());
        let mut source = Script::new(&[]);
        let mut sink = Tally::default();

        let result = sampler.poll(1000, &mut source, &mut sink);
        assert_eq!(result, Err(SamplerError::Source("exhausted")));
        assert_eq!(sampler.last_sample(), 0);
        assert!(sampler.is_due(1001));
    }

    #[test]
    fn wrapping_counter_keeps_cadence() {
        let mut sampler = Sampler::new(SamplerConfig::default());
        let mut source = Script::new(&[512, 512]);
        let mut sink = Tally::default();

        let near_wrap = u64::MAX - 200;
        assert!(sampler.poll(near_wrap, &mut source, &mut sink).unwrap().is_some());
        // Counter has wrapped; 1000 ms have elapsed at tick 799
        assert!(!sampler.is_due(600));
        assert!(sampler.is_due(799));
    }

    /// Rejects the first channel it is given, records the rest
    #[derive(Default)]
    struct RefusesBeta {
        delivered: usize,
    }

    impl ReportSink for RefusesBeta {
        type Error = ReportChannel;

        fn report(&mut self, channel: ReportChannel, _celsius: f64) -> Result<(), ReportChannel> {
            if channel == ReportChannel::Beta {
                return Err(channel);
            }
            self.delivered += 1;
            Ok(())
        }

        fn report_fault(&mut self, channel: ReportChannel, _error: ConversionError) -> Result<(), ReportChannel> {
            Err(channel)
        }
    }

    #[test]
    fn sink_failure_on_beta_still_delivers_steinhart() {
        let mut sampler = Sampler::new(SamplerConfig::default());
        let mut source = Script::new(&[512]);
        let mut sink = RefusesBeta::default();

        let result = sampler.poll(1000, &mut source, &mut sink);
        assert_eq!(result, Err(SamplerError::Sink(ReportChannel::Beta)));
        assert_eq!(sink.delivered, 1);
        assert_eq!(sampler.last_sample(), 1000);
    }

    #[test]
    fn first_sink_failure_wins() {
        let mut sampler = Sampler::new(SamplerConfig::default());
        let mut source = Script::new(&[0]);
        let mut sink = RefusesBeta::default();

        // Both faults are refused; the Beta one is returned
        let result = sampler.poll(1000, &mut source, &mut sink);
        assert_eq!(result, Err(SamplerError::Sink(ReportChannel::Beta)));
        assert_eq!(sink.delivered, 0);
    }

    #[test]
    fn spread_needs_both_models() {
        let sampler = Sampler::new(SamplerConfig::default());
        let reading = sampler.convert(AdcResolution::TEN_BIT, 512);
        let spread = reading.spread().unwrap();
        assert!(spread < 0.1, "spread {}", spread);

        let failed = sampler.convert(AdcResolution::TEN_BIT, 0);
        assert_eq!(failed.spread(), None);
    }

    #[test]
    fn presets_pick_channels() {
        assert_eq!(SamplerConfig::arduino_uno().channel, 5);
        assert_eq!(SamplerConfig::ads1115().channel, 0);
        let custom = SamplerConfig::default()
            .with_interval_ms(250)
            .with_channel(3)
            .with_series_resistance(4_700);
        assert_eq!(custom.interval_ms, 250);
        assert_eq!(custom.channel, 3);
        assert_eq!(custom.series_resistance, 4_700);
    }
}
