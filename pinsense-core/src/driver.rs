//! Climate transducer driver port
//!
//! A climate sensor owns one driver handle for the transducer on its pin
//! (a DHT22 on real hardware). The handle is produced by a
//! [`DriverFactory`] and released by dropping it, so the sensor's
//! ownership of an `Option<Driver>` is all the bookkeeping needed:
//! replacing the option in `reset` releases the old handle, dropping the
//! sensor releases the current one, each exactly once.
//!
//! ## Read Failures
//!
//! DHT-family drivers signal a failed read (no response, bad checksum,
//! polled too early) by returning NaN. Implementations should do the same
//! rather than panic or block.

use crate::io::PinNumber;

/// Handle to an initialized transducer
///
/// Dropping the handle releases the hardware.
pub trait ClimateDriver {
    /// One-time hardware initialization after creation
    fn begin(&mut self);

    /// Relative humidity in %, NaN on failure
    fn read_humidity(&mut self) -> f32;

    /// Air temperature in °C, NaN on failure
    fn read_temperature(&mut self) -> f32;
}

/// Creates driver handles bound to a pin
///
/// ## Example Implementation
///
/// ```rust
/// use pinsense_core::driver::{ClimateDriver, DriverFactory};
/// use pinsense_core::io::PinNumber;
///
/// struct Dht22 { pin: PinNumber }
///
/// impl ClimateDriver for Dht22 {
///     fn begin(&mut self) { /* pull the data line high */ }
///     fn read_humidity(&mut self) -> f32 { f32::NAN }
///     fn read_temperature(&mut self) -> f32 { f32::NAN }
/// }
///
/// struct Dht22Bus;
///
/// impl DriverFactory for Dht22Bus {
///     type Driver = Dht22;
///
///     fn create_driver(&self, pin: PinNumber) -> Dht22 {
///         Dht22 { pin }
///     }
/// }
/// ```
pub trait DriverFactory {
    /// Handle type produced for each pin
    type Driver: ClimateDriver;

    /// Create an uninitialized driver for `pin`; the sensor calls `begin`
    fn create_driver(&self, pin: PinNumber) -> Self::Driver;
}

/// One good temperature/humidity sample
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateReading {
    /// Air temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
}
