//! Time-Related Constants
//!
//! Conversion factors for the millisecond clock.

/// Milliseconds per second.
pub const MS_PER_SECOND: u32 = 1000;

/// Number of whole-second buckets in one lap of the millisecond clock.
///
/// The clock wraps after `u32::MAX` ms; the last bucket is a partial one.
pub const SECOND_BUCKETS_PER_LAP: u32 = u32::MAX / MS_PER_SECOND + 1;
