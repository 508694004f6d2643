//! Constants for pinsense
//!
//! Sentinel values, time conversion factors and the defaults behind the
//! configuration presets. Use these instead of magic numbers.
//!
//! ## Organization
//!
//! - **Sensors**: sentinels and per-transducer defaults
//! - **Time**: clock conversion factors and sampling intervals

/// Sentinel values and sensor-specific defaults.
pub mod sensors;

/// Clock conversion factors and sampling intervals.
pub mod time;

// Re-export commonly used constants for convenience
pub use sensors::{INACTIVE_PIN, UNREAD_SENTINEL};

pub use time::MS_PER_SECOND;
