//! Time-Related Constants

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Default sampling interval (milliseconds).
///
/// One reading per second, matching the reference firmware.
pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = MS_PER_SECOND;
