//! Sensor state machines for microcontroller inputs
//!
//! Puts debounced digital contacts and interval-sampled climate sensors
//! behind one polling contract, so application code can walk an arbitrary
//! set of sensors, learn which ones changed and read their latest values.
//!
//! Key constraints:
//! - No heap allocation; `no_std` without the `std` feature
//! - Hardware is reached only through injected ports ([`PinIo`], [`Clock`],
//!   [`DriverFactory`]), so the timing logic runs unchanged on the host
//! - Only the latest sample per sensor is kept
//!
//! ```
//! use pinsense_core::sim::{SimulatedPins, SimulatedClimate};
//! use pinsense_core::time::ManualClock;
//! use pinsense_core::{ClimateConfig, ClimateSensor, DigitalConfig, DigitalSensor, Level, Sensor};
//!
//! let pins = SimulatedPins::<8>::new();
//! let climate = SimulatedClimate::new(21.5, 40.0);
//! let clock = ManualClock::new(0);
//!
//! let mut door = DigitalSensor::new(&pins, &clock);
//! door.init(2, "door", DigitalConfig::reed_switch());
//!
//! let mut room = ClimateSensor::new(&climate, &clock);
//! room.init(4, "room", ClimateConfig::dht22());
//! assert_eq!(room.temperature(), 21.5);
//!
//! pins.set_level(2, Level::High);
//! assert!(door.update(false));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod bank;
pub mod constants;
pub mod driver;
pub mod errors;
pub mod io;
pub mod sensors;
pub mod sim;
pub mod time;

// Public API
pub use bank::{ChangeSet, SensorBank, SlotId};
pub use driver::{ClimateDriver, ClimateReading, DriverFactory};
pub use errors::{BankError, Quantity, ReadError, SensorResult};
pub use io::{Level, PinIo, PinMode, PinNumber};
pub use sensors::{
    ClimateConfig, ClimateSensor, DigitalConfig, DigitalSensor, DigitalState, Sensor, SensorLabel,
    SensorValue,
};
pub use time::{Clock, Timestamp};

/// Crate version, taken from the manifest.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
