//! Report sinks for the serial console, small text displays and `log`
//!
//! Line formats:
//!
//! ```text
//! serial   >Temp Beta: 25.05\r\n      (plotter-compatible, two decimals)
//! display  TB:25.05                   (one row per model)
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::{
    errors::ConversionError,
    traits::{ReportChannel, ReportSink},
};

/// Longest line a [`DisplaySink`] renders
pub const DISPLAY_LINE_CAPACITY: usize = 16;

/// Text shown on a display row when a conversion failed
pub const DISPLAY_FAULT_TEXT: &str = "--";

/// Render the short display form of one reading
pub fn display_line<const N: usize>(channel: ReportChannel, celsius: f64) -> Result<String<N>, fmt::Error> {
    let mut line = String::new();
    write!(line, "{}:{:.2}", channel.tag(), celsius)?;
    Ok(line)
}

/// Serial console writer in plotter format
#[derive(Debug)]
pub struct SerialPlotter<W> {
    writer: W,
    report_faults: bool,
}

impl<W: Write> SerialPlotter<W> {
    /// Plotter writing into `writer`, numbers only
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report_faults: false,
        }
    }

    /// Also print a comment line for failed conversions
    ///
    /// Off by default so plotter traces only ever see numbers.
    pub fn with_fault_lines(mut self, enabled: bool) -> Self {
        self.report_faults = enabled;
        self
    }

    /// Everything written so far
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Give the writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for SerialPlotter<W> {
    type Error = fmt::Error;

    fn report(&mut self, channel: ReportChannel, celsius: f64) -> Result<(), Self::Error> {
        write!(self.writer, ">{}: {:.2}\r\n", channel.label(), celsius)
    }

    fn report_fault(&mut self, channel: ReportChannel, error: ConversionError) -> Result<(), Self::Error> {
        if self.report_faults {
            write!(self.writer, "# {}: {}\r\n", channel.label(), error)?;
        }
        Ok(())
    }
}

/// Row-addressed text display (character LCD, small OLED)
pub trait TextDisplay {
    /// Driver-specific write failure
    type Error;

    /// Replace the contents of `row` with `text`
    fn set_text(&mut self, row: u8, text: &str) -> Result<(), Self::Error>;
}

impl<T: TextDisplay + ?Sized> TextDisplay for &mut T {
    type Error = T::Error;

    fn set_text(&mut self, row: u8, text: &str) -> Result<(), Self::Error> {
        (**self).set_text(row, text)
    }
}

/// Display sink failure
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayError<E> {
    /// Rendered line did not fit [`DISPLAY_LINE_CAPACITY`]
    LineOverflow,
    /// The display driver failed
    Display(E),
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for DisplayError<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::LineOverflow => defmt::write!(fmt, "Display line overflow"),
            Self::Display(error) => defmt::write!(fmt, "Display failed: {}", error),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for DisplayError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineOverflow => write!(f, "Display line longer than {} characters", DISPLAY_LINE_CAPACITY),
            Self::Display(error) => write!(f, "Display write failed: {:?}", error),
        }
    }
}

/// Puts each model's reading on its own display row
#[derive(Debug)]
pub struct DisplaySink<D> {
    display: D,
    beta_row: u8,
    steinhart_row: u8,
}

impl<D: TextDisplay> DisplaySink<D> {
    /// Beta on row 2, Steinhart-Hart on row 3
    pub fn new(display: D) -> Self {
        Self {
            display,
            beta_row: 2,
            steinhart_row: 3,
        }
    }

    /// Draw the two channels on other rows
    pub fn with_rows(mut self, beta_row: u8, steinhart_row: u8) -> Self {
        self.beta_row = beta_row;
        self.steinhart_row = steinhart_row;
        self
    }

    /// Row a channel is drawn on
    pub fn row(&self, channel: ReportChannel) -> u8 {
        match channel {
            ReportChannel::Beta => self.beta_row,
            ReportChannel::SteinhartHart => self.steinhart_row,
        }
    }

    /// Wrapped display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Give the display back
    pub fn release(self) -> D {
        self.display
    }
}

impl<D: TextDisplay> ReportSink for DisplaySink<D> {
    type Error = DisplayError<D::Error>;

    fn report(&mut self, channel: ReportChannel, celsius: f64) -> Result<(), Self::Error> {
        let line: String<DISPLAY_LINE_CAPACITY> =
            display_line(channel, celsius).map_err(|_| DisplayError::LineOverflow)?;
        let row = self.row(channel);
        self.display.set_text(row, &line).map_err(DisplayError::Display)
    }

    fn report_fault(&mut self, channel: ReportChannel, _error: ConversionError) -> Result<(), Self::Error> {
        let mut line: String<DISPLAY_LINE_CAPACITY> = String::new();
        write!(line, "{}:{}", channel.tag(), DISPLAY_FAULT_TEXT).map_err(|_| DisplayError::LineOverflow)?;
        let row = self.row(channel);
        self.display.set_text(row, &line).map_err(DisplayError::Display)
    }
}

/// Forwards readings to the `log` facade at info level
#[cfg(feature = "log")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[cfg(feature = "log")]
impl ReportSink for LogSink {
    type Error = core::convert::Infallible;

    fn report(&mut self, channel: ReportChannel, celsius: f64) -> Result<(), Self::Error> {
        log::info!("{}: {:.2}", channel.label(), celsius);
        Ok(())
    }

    fn report_fault(&mut self, channel: ReportChannel, error: ConversionError) -> Result<(), Self::Error> {
        log::warn!("{}: {}", channel.label(), error);
        Ok(())
    }
}
