//! Error Types
//!
//! ## Design Philosophy
//!
//! Sensors on a microcontroller fail all the time: a loose wire, a checksum
//! mismatch, a transducer that was polled too early. None of that is fatal.
//! The sensor layer therefore absorbs hardware faults itself and degrades to
//! "stale last-known value" instead of handing errors upward:
//!
//! - `Sensor::update` never returns an error. A failed read shows up only as
//!   "no change" and is retried on the next call.
//! - [`ReadError`] classifies a failed transducer read so it can be logged;
//!   it never leaves the crate through `update`.
//! - [`BankError`] is the one error a caller sees, returned when a sensor
//!   cannot be added to a [`SensorBank`](crate::bank::SensorBank).
//!
//! All errors are `Copy`, carry no heap data and are small enough to pass
//! around freely on embedded targets.
//!
//! ## Telling "never read" from "stale"
//!
//! A climate sensor that has never produced a good sample reports
//! [`UNREAD_SENTINEL`](crate::constants::UNREAD_SENTINEL) (-100.0) for both
//! temperature and humidity. Use `ClimateSensor::reading()` to get an
//! `Option` instead of comparing against the sentinel.
//!
//! ```rust
//! use pinsense_core::{BankError, SensorBank, DigitalSensor, DigitalConfig};
//! use pinsense_core::sim::SimulatedPins;
//! use pinsense_core::time::ManualClock;
//!
//! let pins = SimulatedPins::<8>::new();
//! let clock = ManualClock::new(0);
//! let mut a = DigitalSensor::new(&pins, &clock);
//! let mut b = DigitalSensor::new(&pins, &clock);
//! a.init(3, "hall", DigitalConfig::default());
//! b.init(3, "porch", DigitalConfig::default());
//!
//! let mut bank = SensorBank::<4>::new();
//! bank.register(&mut a)?;
//! match bank.register(&mut b) {
//!     Err(BankError::PinInUse { pin }) => assert_eq!(pin, 3),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! # Ok::<(), BankError>(())
//! ```

use thiserror_no_std::Error;

use crate::io::PinNumber;

/// Result type for fallible sensor-layer operations
pub type SensorResult<T> = Result<T, BankError>;

/// Physical quantity a climate transducer measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Quantity {
    /// Air temperature in °C
    Temperature,
    /// Relative humidity in %
    Humidity,
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Temperature => f.write_str("temperature"),
            Self::Humidity => f.write_str("humidity"),
        }
    }
}

/// Reasons a transducer read is discarded
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// Driver returned NaN (wiring fault, checksum failure, timeout)
    #[error("{quantity} read returned NaN on pin {pin}")]
    NotANumber {
        /// Which of the two readings failed
        quantity: Quantity,
        /// Pin the transducer is attached to
        pin: PinNumber,
    },
}

/// Errors from building a [`SensorBank`](crate::bank::SensorBank)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankError {
    /// Every slot is taken
    #[error("sensor bank full ({capacity} slots)")]
    Full {
        /// Fixed capacity of the bank
        capacity: usize,
    },

    /// Another active sensor is already bound to this pin
    #[error("pin {pin} already used by a registered sensor")]
    PinInUse {
        /// The contested pin
        pin: PinNumber,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReadError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotANumber { quantity, pin } =>
                defmt::write!(fmt, "{} read returned NaN on pin {}", quantity, pin),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BankError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Full { capacity } =>
                defmt::write!(fmt, "Bank full ({} slots)", capacity),
            Self::PinInUse { pin } =>
                defmt::write!(fmt, "Pin {} already in use", pin),
        }
    }
}
