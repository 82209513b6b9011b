//! Report sink for converted temperatures

use crate::errors::ConversionError;

/// Which model a reported value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReportChannel {
    /// Beta-parameter model
    Beta,
    /// Steinhart-Hart model
    SteinhartHart,
}

impl ReportChannel {
    /// Both channels in reporting order
    pub const ALL: [ReportChannel; 2] = [ReportChannel::Beta, ReportChannel::SteinhartHart];

    /// Long label used on the serial console
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beta => "Temp Beta",
            Self::SteinhartHart => "Temp Steinhart",
        }
    }

    /// Two-letter tag used on small displays
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Beta => "TB",
            Self::SteinhartHart => "TS",
        }
    }
}

/// Destination for labeled temperature readings (console, display, log)
pub trait ReportSink {
    /// Sink-specific write failure
    type Error;

    /// Publish one temperature in Celsius
    fn report(&mut self, channel: ReportChannel, celsius: f64) -> Result<(), Self::Error>;

    /// Publish a failed conversion; ignored unless the sink cares
    fn report_fault(&mut self, _channel: ReportChannel, _error: ConversionError) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: ReportSink + ?Sized> ReportSink for &mut T {
    type Error = T::Error;

    fn report(&mut self, channel: ReportChannel, celsius: f64) -> Result<(), Self::Error> {
        (**self).report(channel, celsius)
    }

    fn report_fault(&mut self, channel: ReportChannel, error: ConversionError) -> Result<(), Self::Error> {
        (**self).report_fault(channel, error)
    }
}

/// Failure of one half of a sink pair
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PairError<A, B> {
    /// The first sink failed; the second was still written
    First(A),
    /// The second sink failed
    Second(B),
}

/// Fan-out to two sinks, e.g. serial console and display
///
/// Both halves are always written. A failure in the first half is reported
/// ahead of one in the second.
impl<A: ReportSink, B: ReportSink> ReportSink for (A, B) {
    type Error = PairError<A::Error, B::Error>;

    fn report(&mut self, channel: ReportChannel, celsius: f64) -> Result<(), Self::Error> {
        let first = self.0.report(channel, celsius);
        let second = self.1.report(channel, celsius);
        first.map_err(PairError::First)?;
        second.map_err(PairError::Second)
    }

    fn report_fault(&mut self, channel: ReportChannel, error: ConversionError) -> Result<(), Self::Error> {
        let first = self.0.report_fault(channel, error);
        let second = self.1.report_fault(channel, error);
        first.map_err(PairError::First)?;
        second.map_err(PairError::Second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Count(usize);

    impl ReportSink for Count {
        type Error = ();

        fn report(&mut self, _channel: ReportChannel, _celsius: f64) -> Result<(), ()> {
            self.0 += 1;
            Ok(())
        }
    }

    struct Broken;

    impl ReportSink for Broken {
        type Error = &'static str;

        fn report(&mut self, _channel: ReportChannel, _celsius: f64) -> Result<(), Self::Error> {
            Err("offline")
        }
    }

    #[test]
    fn labels_and_tags() {
        assert_eq!(ReportChannel::Beta.label(), "Temp Beta");
        assert_eq!(ReportChannel::SteinhartHart.label(), "Temp Steinhart");
        assert_eq!(ReportChannel::Beta.tag(), "TB");
        assert_eq!(ReportChannel::SteinhartHart.tag(), "TS");
    }

    #[test]
    fn pair_writes_both() {
        let mut pair = (Count::default(), Count::default());
        pair.report(ReportChannel::Beta, 21.0).unwrap();
        assert_eq!((pair.0).0, 1);
        assert_eq!((pair.1).0, 1);
    }

    #[test]
    fn broken_console_does_not_starve_the_display() {
        let mut pair = (Broken, Count::default());
        assert_eq!(
            pair.report(ReportChannel::Beta, 21.0),
            Err(PairError::First("offline"))
        );
        assert_eq!(
            pair.report(ReportChannel::SteinhartHart, 21.0),
            Err(PairError::First("offline"))
        );
        assert_eq!((pair.1).0, 2);
    }

    #[test]
    fn second_half_failure_is_reported() {
        let mut pair = (Count::default(), Broken);
        assert_eq!(
            pair.report(ReportChannel::Beta, 21.0),
            Err(PairError::Second("offline"))
        );
        assert_eq!((pair.0).0, 1);
    }
}
