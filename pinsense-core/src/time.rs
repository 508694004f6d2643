//! Time management for the sensor layer
//!
//! Sensors read a free-running millisecond counter through the [`Clock`]
//! port. On most microcontrollers that counter is 32 bits wide and wraps
//! after roughly 49.7 days, so every elapsed-time computation here is done
//! with wrapping unsigned arithmetic: the difference between two ticks is
//! correct across a wrap as long as the real interval is shorter than one
//! lap of the clock.

use core::cell::Cell;

use crate::constants::time::{MS_PER_SECOND, SECOND_BUCKETS_PER_LAP};

/// Clock tick in milliseconds since boot; wraps at `u32::MAX`
pub type Timestamp = u32;

/// Monotonic millisecond clock
///
/// ## Implementation Requirements
///
/// - Ticks must increase by one per millisecond and wrap to zero after
///   `u32::MAX`, like Arduino's `millis()`
/// - `now_ms` is called from `update`, so it must not block
pub trait Clock {
    /// Current tick in milliseconds
    fn now_ms(&self) -> Timestamp;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> Timestamp {
        (**self).now_ms()
    }
}

/// Milliseconds from `earlier` to `later`, tolerant of one clock wrap
#[inline]
pub fn elapsed_ms(earlier: Timestamp, later: Timestamp) -> u32 {
    later.wrapping_sub(earlier)
}

/// Whole-second buckets (`ms / 1000`) from `earlier` to `later`
///
/// Compares the second each tick falls in rather than the exact
/// millisecond distance, so 0.999 s → 1.000 s counts as one second. Wraps
/// with the clock: the bucket count restarts at zero together with the
/// millisecond counter.
#[inline]
pub fn whole_seconds_elapsed(earlier: Timestamp, later: Timestamp) -> u32 {
    let from = earlier / MS_PER_SECOND;
    let to = later / MS_PER_SECOND;
    if to >= from {
        to - from
    } else {
        SECOND_BUCKETS_PER_LAP - from + to
    }
}

/// Convert whole seconds to milliseconds, saturating at `u32::MAX`
#[inline]
pub fn secs_to_ms(secs: u32) -> u32 {
    secs.saturating_mul(MS_PER_SECOND)
}

/// Manually driven clock for tests and simulations
///
/// Uses interior mutability so one instance can be shared by reference
/// among many sensors while the test advances it.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    /// Create a clock showing `start`
    pub const fn new(start: Timestamp) -> Self {
        Self { now: Cell::new(start) }
    }

    /// Jump to an absolute tick
    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    /// Move forward by `ms`, wrapping like a hardware counter
    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }

    /// Move forward by whole seconds
    pub fn advance_secs(&self, secs: u32) {
        self.advance(secs_to_ms(secs));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Timestamp {
        self.now.get()
    }
}

/// Host clock backed by `std::time::Instant` (requires std)
///
/// Truncates to 32 bits, so it wraps exactly like a microcontroller tick
/// counter.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Start counting from now
    pub fn new() -> Self {
        Self { start: std::time::Instant::now() }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&self) -> Timestamp {
        self.start.elapsed().as_millis() as Timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(1000);
        assert_eq!(clock.now_ms(), 1000);

        clock.advance(500);
        assert_eq!(clock.now_ms(), 1500);

        clock.advance_secs(2);
        assert_eq!(clock.now_ms(), 3500);
    }

    #[test]
    fn manual_clock_wraps() {
        let clock = ManualClock::new(u32::MAX - 99);
        clock.advance(200);
        assert_eq!(clock.now_ms(), 100);
    }

    #[test]
    fn elapsed_across_wrap() {
        assert_eq!(elapsed_ms(1000, 3500), 2500);
        assert_eq!(elapsed_ms(u32::MAX - 499, 500), 1000);
    }

    #[test]
    fn whole_second_buckets() {
        // 0.999 s and 1.000 s sit in neighbouring buckets
        assert_eq!(whole_seconds_elapsed(999, 1000), 1);
        assert_eq!(whole_seconds_elapsed(1000, 1999), 0);
        assert_eq!(whole_seconds_elapsed(0, 61_000), 61);
    }

    #[test]
    fn whole_second_buckets_across_wrap() {
        let last_bucket_start = (u32::MAX / MS_PER_SECOND) * MS_PER_SECOND;
        // Last (partial) bucket to the first bucket of the next lap
        assert_eq!(whole_seconds_elapsed(last_bucket_start, 0), 1);
        // Two seconds before the wrap to one second after
        assert_eq!(whole_seconds_elapsed(last_bucket_start - 1000, 1500), 3);
    }

    #[test]
    fn secs_to_ms_saturates() {
        assert_eq!(secs_to_ms(5), 5000);
        assert_eq!(secs_to_ms(u32::MAX), u32::MAX);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_clock_is_monotonic() {
        let clock = StdClock::new();
        let first = clock.now_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(elapsed_ms(first, clock.now_ms()) >= 5);
    }

    #[test]
    fn clock_by_reference() {
        fn read(clock: impl Clock) -> Timestamp {
            clock.now_ms()
        }
        let clock = ManualClock::new(42);
        assert_eq!(read(&clock), 42);
    }
}
