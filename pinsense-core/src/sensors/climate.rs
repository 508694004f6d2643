//! Interval-Sampled Climate Sensors
//!
//! ## Sampling Policy
//!
//! DHT-style transducers are slow (a read takes several milliseconds) and
//! refuse to be polled more often than every couple of seconds. The sensor
//! therefore gates real reads behind an interval timer:
//!
//! ```text
//! update(force = false)
//!   │
//!   ├─ inactive ───────────────────────────────► false, no I/O
//!   ├─ never sampled ──────────────────┐
//!   ├─ interval elapsed ───────────────┤
//!   ├─ otherwise ──────────────────────┼───────► false, no I/O
//!   │                                  ▼
//!   │                       read humidity + temperature
//!   │                                  │
//!   │                  NaN ◄───────────┴──────────► good sample
//!   │      (keep values and timestamp)         (stamp time, compare)
//! ```
//!
//! The gate compares whole-second buckets (`ms / 1000`) of the last good
//! sample and the current tick, so the effective interval can be up to one
//! second shorter than configured depending on phase. That slack matches
//! the coarse timing DHT drivers need anyway.
//!
//! ## Failed Reads
//!
//! A NaN from either reading discards the whole sample. The stored values
//! and the sample timestamp stay untouched. Since the gate only looks at
//! the last *good* sample, a sensor whose interval has run out keeps
//! reading on every `update` until one succeeds. A failed forced read
//! inside the interval does not open the gate early.
//!
//! ## Driver Ownership
//!
//! The sensor owns its driver handle as an `Option`. `reset` drops the old
//! handle before creating a new one and dropping the sensor drops the
//! current one, so each handle is released exactly once.

use core::fmt;

use crate::constants::sensors::{
    DEFAULT_CLIMATE_INTERVAL_SECS, DHT22_MIN_INTERVAL_SECS, LOW_POWER_CLIMATE_INTERVAL_SECS,
};
use crate::constants::UNREAD_SENTINEL;
use crate::driver::{ClimateDriver, ClimateReading, DriverFactory};
use crate::errors::{Quantity, ReadError};
use crate::io::PinNumber;
use crate::sensors::{Sensor, SensorLabel, SensorValue};
use crate::time::{whole_seconds_elapsed, Clock, Timestamp};

/// Settings for a [`ClimateSensor`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClimateConfig {
    /// Minimum time between two samples (s); 0 samples on every update
    pub interval_secs: u32,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_CLIMATE_INTERVAL_SECS,
        }
    }
}

impl ClimateConfig {
    /// Custom sampling interval
    pub const fn new(interval_secs: u32) -> Self {
        Self { interval_secs }
    }

    /// As fast as a DHT22 allows
    pub const fn dht22() -> Self {
        Self {
            interval_secs: DHT22_MIN_INTERVAL_SECS,
        }
    }

    /// Battery-powered node
    pub const fn low_power() -> Self {
        Self {
            interval_secs: LOW_POWER_CLIMATE_INTERVAL_SECS,
        }
    }

    /// Replace the sampling interval
    pub const fn with_interval(self, interval_secs: u32) -> Self {
        Self { interval_secs }
    }
}

/// Temperature/humidity sensor sampled at most once per interval
///
/// `F` creates the transducer driver, `C` is the board clock.
pub struct ClimateSensor<'a, F: DriverFactory, C> {
    label: SensorLabel<'a>,
    factory: F,
    clock: C,
    config: ClimateConfig,
    driver: Option<F::Driver>,
    temperature: f32,
    humidity: f32,
    last_sample: Option<Timestamp>,
}

impl<'a, F, C> ClimateSensor<'a, F, C>
where
    F: DriverFactory,
    C: Clock,
{
    /// Create an inactive sensor (pin 0, no driver)
    pub fn new(factory: F, clock: C) -> Self {
        Self {
            label: SensorLabel::new(),
            factory,
            clock,
            config: ClimateConfig::default(),
            driver: None,
            temperature: UNREAD_SENTINEL,
            humidity: UNREAD_SENTINEL,
            last_sample: None,
        }
    }

    /// Bind pin, name and settings, recreate the driver, and take a forced
    /// first sample
    ///
    /// Replaces any previous binding; the old driver is released. Passing
    /// pin 0 leaves the sensor inactive without a driver.
    pub fn init(&mut self, pin: PinNumber, name: &'a str, config: ClimateConfig) {
        self.label.bind(pin, name);
        self.config = config;

        self.reset();
        self.update(true);
    }

    /// Last good temperature in °C, or
    /// [`UNREAD_SENTINEL`](crate::constants::UNREAD_SENTINEL) if none yet
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Last good relative humidity in %, or
    /// [`UNREAD_SENTINEL`](crate::constants::UNREAD_SENTINEL) if none yet
    pub fn humidity(&self) -> f32 {
        self.humidity
    }

    /// Last good sample, `None` until the first successful read
    pub fn reading(&self) -> Option<ClimateReading> {
        self.last_sample.map(|_| ClimateReading {
            temperature: self.temperature,
            humidity: self.humidity,
        })
    }

    /// Sampling interval in seconds
    pub fn interval(&self) -> u32 {
        self.config.interval_secs
    }

    /// Tick of the last successful sample
    pub fn last_sample(&self) -> Option<Timestamp> {
        self.last_sample
    }

    /// Settings given at init
    pub fn config(&self) -> ClimateConfig {
        self.config
    }

    fn sample_due(&self, now: Timestamp) -> bool {
        match self.last_sample {
            Some(last) => whole_seconds_elapsed(last, now) >= self.config.interval_secs,
            None => true,
        }
    }
}

/// Humidity first, then temperature; both are always requested
fn read_transducer<D: ClimateDriver>(driver: &mut D, pin: PinNumber) -> Result<ClimateReading, ReadError> {
    let humidity = driver.read_humidity();
    let temperature = driver.read_temperature();

    if humidity.is_nan() {
        return Err(ReadError::NotANumber { quantity: Quantity::Humidity, pin });
    }
    if temperature.is_nan() {
        return Err(ReadError::NotANumber { quantity: Quantity::Temperature, pin });
    }

    Ok(ClimateReading { temperature, humidity })
}

impl<'a, F, C> Sensor<'a> for ClimateSensor<'a, F, C>
where
    F: DriverFactory,
    C: Clock,
{
    fn label(&self) -> &SensorLabel<'a> {
        &self.label
    }

    fn label_mut(&mut self) -> &mut SensorLabel<'a> {
        &mut self.label
    }

    fn reset(&mut self) {
        self.temperature = UNREAD_SENTINEL;
        self.humidity = UNREAD_SENTINEL;
        self.last_sample = None;

        // Release before creating: the transducer has a single owner
        if self.driver.take().is_some() {
            sensor_debug!("{}: released driver", self.label.display_name());
        }

        if self.label.has_pin() {
            let mut driver = self.factory.create_driver(self.label.pin());
            driver.begin();
            self.driver = Some(driver);
            sensor_debug!(
                "{}: driver started on pin {}",
                self.label.display_name(),
                self.label.pin()
            );
        }
    }

    fn update(&mut self, force: bool) -> bool {
        if !self.is_active() {
            return false;
        }

        let now = self.clock.now_ms();
        if !force && !self.sample_due(now) {
            sensor_trace!("{}: interval not elapsed", self.label.display_name());
            return false;
        }

        let pin = self.label.pin();
        let Some(driver) = self.driver.as_mut() else {
            return false;
        };

        let reading = match read_transducer(driver, pin) {
            Ok(reading) => reading,
            Err(err) => {
                sensor_warn!("{}: {}", self.label.display_name(), err);
                return false;
            }
        };

        self.last_sample = Some(self.clock.now_ms());

        if reading.temperature == self.temperature && reading.humidity == self.humidity {
            return false;
        }

        sensor_debug!(
            "{}: {}°C {}%",
            self.label.display_name(),
            reading.temperature,
            reading.humidity
        );
        self.temperature = reading.temperature;
        self.humidity = reading.humidity;
        true
    }

    fn value(&self) -> SensorValue {
        if self.is_active() {
            SensorValue::Climate(self.reading())
        } else {
            SensorValue::Inactive
        }
    }

    fn is_active(&self) -> bool {
        self.label.has_pin() && self.driver.is_some()
    }
}

impl<'a, F, C> fmt::Debug for ClimateSensor<'a, F, C>
where
    F: DriverFactory,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClimateSensor")
            .field("label", &self.label)
            .field("config", &self.config)
            .field("has_driver", &self.driver.is_some())
            .field("temperature", &self.temperature)
            .field("humidity", &self.humidity)
            .field("last_sample", &self.last_sample)
            .finish()
    }
}
