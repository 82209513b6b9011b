//! Shared fixtures for integration tests
//!
//! - `ScriptedAdc`: replays a fixed list of codes, optionally busy first
//! - `Recorder`: report sink that keeps every value and fault

#![allow(dead_code)]

use thermisense_core::{
    resistance::{AdcResolution, RawSample},
    AnalogSource, ConversionError, ReportChannel, ReportSink,
};

/// Replays codes in order; fails once they run out
pub struct ScriptedAdc {
    codes: Vec<RawSample>,
    next: usize,
    busy_polls: usize,
    pending_busy: usize,
    pub reads: usize,
    pub channels: Vec<u8>,
}

impl ScriptedAdc {
    pub fn new(codes: &[RawSample]) -> Self {
        Self {
            codes: codes.to_vec(),
            next: 0,
            busy_polls: 0,
            pending_busy: 0,
            reads: 0,
            channels: Vec::new(),
        }
    }

    /// Report `WouldBlock` this many times before each code
    pub fn busy_for(mut self, polls: usize) -> Self {
        self.busy_polls = polls;
        self.pending_busy = polls;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exhausted;

impl AnalogSource for ScriptedAdc {
    type Error = Exhausted;

    fn resolution(&self) -> AdcResolution {
        AdcResolution::TEN_BIT
    }

    fn read(&mut self, channel: u8) -> nb::Result<RawSample, Self::Error> {
        if self.pending_busy > 0 {
            self.pending_busy -= 1;
            return Err(nb::Error::WouldBlock);
        }
        self.pending_busy = self.busy_polls;
        self.reads += 1;
        self.channels.push(channel);

        let code = self.codes.get(self.next).copied().ok_or(nb::Error::Other(Exhausted))?;
        self.next += 1;
        Ok(code)
    }
}

/// Keeps everything it is given
#[derive(Debug, Default)]
pub struct Recorder {
    pub values: Vec<(ReportChannel, f64)>,
    pub faults: Vec<(ReportChannel, ConversionError)>,
}

impl Recorder {
    pub fn channel_values(&self, channel: ReportChannel) -> Vec<f64> {
        self.values
            .iter()
            .filter(|(c, _)| *c == channel)
            .map(|(_, v)| *v)
            .collect()
    }
}

impl ReportSink for Recorder {
    type Error = ();

    fn report(&mut self, channel: ReportChannel, celsius: f64) -> Result<(), ()> {
        self.values.push((channel, celsius));
        Ok(())
    }

    fn report_fault(&mut self, channel: ReportChannel, error: ConversionError) -> Result<(), ()> {
        self.faults.push((channel, error));
        Ok(())
    }
}

/// Sink that refuses everything
pub struct Unplugged;

impl ReportSink for Unplugged {
    type Error = &'static str;

    fn report(&mut self, _channel: ReportChannel, _celsius: f64) -> Result<(), Self::Error> {
        Err("unplugged")
    }
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}
