//! Dual-Model Sampling Example
//!
//! Drives the sampler with a simulated 10-bit ADC whose thermistor warms
//! from 18 °C to 32 °C, and prints both models to a serial-style console.
//!
//! ## What You'll Learn
//!
//! - Implementing `AnalogSource` for your own converter
//! - Polling the sampler from a cooperative loop with a test clock
//! - Fanning one reading out to two sinks (console + display)
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_dual_model_sampling
//! ```

use thermisense_core::{
    report::{DisplaySink, SerialPlotter, TextDisplay},
    resistance::{AdcResolution, RawSample},
    time::FixedTime,
    AnalogSource, Sampler, SamplerConfig, TimeSource,
};

/// A 10 kΩ / B=3455 thermistor over a 10 kΩ series resistor
struct SimulatedDivider {
    celsius: f64,
    step: f64,
}

impl SimulatedDivider {
    fn code(&self) -> RawSample {
        let kelvin = self.celsius + 273.15;
        let ohms = 10_000.0 * (3455.0 * (1.0 / kelvin - 1.0 / 298.15)).exp();
        (1023.0 * 10_000.0 / (ohms + 10_000.0)).round() as RawSample
    }
}

impl AnalogSource for SimulatedDivider {
    type Error = core::convert::Infallible;

    fn resolution(&self) -> AdcResolution {
        AdcResolution::TEN_BIT
    }

    fn read(&mut self, _channel: u8) -> nb::Result<RawSample, Self::Error> {
        let code = self.code();
        self.celsius += self.step;
        Ok(code)
    }
}

/// Four-row character display that echoes to stdout
#[derive(Default)]
struct ConsoleLcd {
    rows: [String; 4],
}

impl TextDisplay for ConsoleLcd {
    type Error = core::convert::Infallible;

    fn set_text(&mut self, row: u8, text: &str) -> Result<(), Self::Error> {
        if let Some(slot) = self.rows.get_mut(row as usize) {
            *slot = text.to_string();
        }
        Ok(())
    }
}

fn main() {
    println!("=== Thermisense Dual-Model Sampling ===\n");

    let clock = FixedTime::new(0);
    let mut adc = SimulatedDivider {
        celsius: 18.0,
        step: 2.0,
    };
    let mut sampler = Sampler::new(SamplerConfig::arduino_uno());
    let mut sinks = (
        SerialPlotter::new(String::new()),
        DisplaySink::new(ConsoleLcd::default()),
    );

    for _ in 0..8 {
        clock.advance(1000);
        match sampler.poll(clock.now(), &mut adc, &mut sinks) {
            Ok(Some(reading)) => {
                let spread = reading
                    .spread()
                    .map(|s| format!("{:.3} °C", s))
                    .unwrap_or_else(|| "n/a".into());
                println!("t={:>5}ms raw={:>4} spread={}", clock.now(), reading.raw, spread);
            }
            Ok(None) => {}
            Err(e) => println!("cycle failed: {}", e),
        }
    }

    println!("\nSerial console:");
    print!("{}", sinks.0.writer());

    println!("\nDisplay:");
    for (row, text) in sinks.1.display().rows.iter().enumerate() {
        println!("  [{}] {}", row, text);
    }
}
