//! Sensor Sentinels and Defaults
//!
//! Reserved values that stand in for "nothing here yet", plus the
//! per-transducer defaults used by the configuration presets.

use crate::io::PinNumber;

// ===== SENTINELS =====

/// Pin number of an unassigned sensor slot.
///
/// A sensor bound to this pin is inactive: it never touches hardware and
/// `update` always reports no change.
pub const INACTIVE_PIN: PinNumber = 0;

/// Temperature/humidity value stored before the first successful read.
///
/// Lies below the operating range of every supported transducer
/// (DHT22: -40°C to 80°C, 0% to 100% RH), so it cannot collide with a
/// real measurement.
pub const UNREAD_SENTINEL: f32 = -100.0;

// ===== DIGITAL INPUTS =====

/// Hysteresis for plain contacts (seconds).
///
/// Zero reports every LOW as soon as it is read.
pub const DEFAULT_HYSTERESIS_SECS: u32 = 0;

/// Hysteresis for magnetic reed switches on doors and windows (seconds).
///
/// Long enough to swallow the bounce of a door settling in its frame.
pub const REED_SWITCH_HYSTERESIS_SECS: u32 = 2;

/// Hold time for PIR motion detectors (seconds).
///
/// PIR modules pulse HIGH while motion continues; the sensor stays HIGH
/// until the area has been quiet this long.
pub const MOTION_HOLD_SECS: u32 = 60;

// ===== CLIMATE SENSORS =====

/// Minimum time between two reads of a DHT22 (seconds).
///
/// Source: AM2302 datasheet, "collecting period" of 2 s
pub const DHT22_MIN_INTERVAL_SECS: u32 = 2;

/// Default sampling interval for climate sensors (seconds).
///
/// Room temperature and humidity change slowly; one sample a minute is
/// plenty for home automation.
pub const DEFAULT_CLIMATE_INTERVAL_SECS: u32 = 60;

/// Sampling interval for battery-powered nodes (seconds).
pub const LOW_POWER_CLIMATE_INTERVAL_SECS: u32 = 600;
