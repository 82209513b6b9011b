//! Time Source Abstraction for Embedded Systems
//!
//! The sampler only needs "milliseconds since some fixed point" to decide when
//! the next reading is due. Where that number comes from differs per target:
//!
//! - `millis()`-style tick counters on bare metal
//! - RTOS tick counts
//! - `Instant` on a host
//! - A settable value in tests
//!
//! ## Implementation Requirements
//!
//! - `now()` should be monotonic; the sampler tolerates a counter that wraps
//!   but not one that jumps backwards by less than a full wrap
//! - Precision should be documented for each implementation

use crate::time::Timestamp;

/// Source of time for the sampler
///
/// ## Example Implementation
///
/// ```rust
/// use thermisense_core::traits::TimeSource;
/// use thermisense_core::time::Timestamp;
///
/// struct TickCounter {
///     ticks: u32,
/// }
///
/// impl TimeSource for TickCounter {
///     fn now(&self) -> Timestamp {
///         // 1 kHz SysTick
///         Timestamp::from(self.ticks)
///     }
///
///     fn is_wall_clock(&self) -> bool {
///         false
///     }
///
///     fn precision_ms(&self) -> u32 {
///         1
///     }
/// }
///
/// assert_eq!(TickCounter { ticks: 1500 }.now(), 1500);
/// ```
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    ///
    /// The epoch depends on the implementation:
    /// - Monotonic sources: milliseconds since boot
    /// - Wall clock sources: milliseconds since Unix epoch
    /// - Test sources: arbitrary starting point
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;

    /// Get precision in milliseconds
    fn precision_ms(&self) -> u32;
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> Timestamp {
        (**self).now()
    }

    fn is_wall_clock(&self) -> bool {
        (**self).is_wall_clock()
    }

    fn precision_ms(&self) -> u32 {
        (**self).precision_ms()
    }
}
