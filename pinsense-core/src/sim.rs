//! Host-side hardware doubles
//!
//! In-memory stand-ins for a board's pins and for a DHT transducer, used by
//! the test suite and by demos that run without hardware. Both record every
//! call so tests can assert on the exact I/O a sensor performed.
//!
//! They use `Cell`, so they are `!Sync`: share them by reference within
//! one thread, the same way the sensors themselves are used.

use core::cell::Cell;

use crate::driver::{ClimateDriver, DriverFactory};
use crate::io::{Level, PinIo, PinMode, PinNumber};

/// `N` simulated digital pins, numbered `0..N`
///
/// All pins start LOW and unconfigured. Reads of pins outside the range
/// return LOW.
#[derive(Debug)]
pub struct SimulatedPins<const N: usize> {
    levels: [Cell<Level>; N],
    modes: [Cell<Option<PinMode>>; N],
    reads: Cell<usize>,
    configurations: Cell<usize>,
}

impl<const N: usize> SimulatedPins<N> {
    /// All pins LOW, none configured
    pub fn new() -> Self {
        Self {
            levels: core::array::from_fn(|_| Cell::new(Level::Low)),
            modes: core::array::from_fn(|_| Cell::new(None)),
            reads: Cell::new(0),
            configurations: Cell::new(0),
        }
    }

    fn slot(pin: PinNumber) -> Option<usize> {
        let index = usize::from(pin);
        (index < N).then_some(index)
    }

    /// Drive `pin` to `level`; out-of-range pins are ignored
    pub fn set_level(&self, pin: PinNumber, level: Level) {
        match Self::slot(pin) {
            Some(index) => self.levels[index].set(level),
            None => sensor_warn!("simulated pin {} out of range", pin),
        }
    }

    /// Current level of `pin`
    pub fn level(&self, pin: PinNumber) -> Option<Level> {
        Self::slot(pin).map(|index| self.levels[index].get())
    }

    /// Mode last configured on `pin`, if any
    pub fn mode(&self, pin: PinNumber) -> Option<PinMode> {
        Self::slot(pin).and_then(|index| self.modes[index].get())
    }

    /// Number of level reads so far, across all pins
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of mode configurations so far, across all pins
    pub fn configurations(&self) -> usize {
        self.configurations.get()
    }
}

impl<const N: usize> Default for SimulatedPins<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PinIo for SimulatedPins<N> {
    fn configure_pin_mode(&self, pin: PinNumber, mode: PinMode) {
        self.configurations.set(self.configurations.get() + 1);
        if let Some(index) = Self::slot(pin) {
            self.modes[index].set(Some(mode));
        }
    }

    fn read_digital_level(&self, pin: PinNumber) -> Level {
        self.reads.set(self.reads.get() + 1);
        self.level(pin).unwrap_or(Level::Low)
    }
}

/// Simulated DHT transducer bus
///
/// `&SimulatedClimate` is a [`DriverFactory`]; every driver it hands out
/// reports the current reading set here, or NaN while failing. Counts
/// created, started and released handles, and read attempts.
#[derive(Debug)]
pub struct SimulatedClimate {
    temperature: Cell<f32>,
    humidity: Cell<f32>,
    failing: Cell<bool>,
    created: Cell<usize>,
    begun: Cell<usize>,
    released: Cell<usize>,
    reads: Cell<usize>,
    last_pin: Cell<Option<PinNumber>>,
}

impl SimulatedClimate {
    /// Transducer reporting `temperature` °C and `humidity` %
    pub fn new(temperature: f32, humidity: f32) -> Self {
        Self {
            temperature: Cell::new(temperature),
            humidity: Cell::new(humidity),
            failing: Cell::new(false),
            created: Cell::new(0),
            begun: Cell::new(0),
            released: Cell::new(0),
            reads: Cell::new(0),
            last_pin: Cell::new(None),
        }
    }

    /// Change what subsequent reads return
    pub fn set_reading(&self, temperature: f32, humidity: f32) {
        self.temperature.set(temperature);
        self.humidity.set(humidity);
    }

    /// Make reads return NaN until switched off again
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Driver handles created
    pub fn created(&self) -> usize {
        self.created.get()
    }

    /// Driver handles started with `begin`
    pub fn begun(&self) -> usize {
        self.begun.get()
    }

    /// Driver handles dropped
    pub fn released(&self) -> usize {
        self.released.get()
    }

    /// Handles currently alive
    pub fn live(&self) -> usize {
        self.created() - self.released()
    }

    /// Read attempts (one per humidity/temperature pair)
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Pin of the most recently created handle
    pub fn last_pin(&self) -> Option<PinNumber> {
        self.last_pin.get()
    }
}

/// Driver handle produced by [`SimulatedClimate`]
#[derive(Debug)]
pub struct SimulatedDriver<'s> {
    source: &'s SimulatedClimate,
    pin: PinNumber,
}

impl SimulatedDriver<'_> {
    /// Pin this handle was created for
    pub fn pin(&self) -> PinNumber {
        self.pin
    }
}

impl ClimateDriver for SimulatedDriver<'_> {
    fn begin(&mut self) {
        self.source.begun.set(self.source.begun.get() + 1);
    }

    fn read_humidity(&mut self) -> f32 {
        self.source.reads.set(self.source.reads.get() + 1);
        if self.source.failing.get() {
            f32::NAN
        } else {
            self.source.humidity.get()
        }
    }

    fn read_temperature(&mut self) -> f32 {
        if self.source.failing.get() {
            f32::NAN
        } else {
            self.source.temperature.get()
        }
    }
}

impl Drop for SimulatedDriver<'_> {
    fn drop(&mut self) {
        self.source.released.set(self.source.released.get() + 1);
    }
}

impl<'s> DriverFactory for &'s SimulatedClimate {
    type Driver = SimulatedDriver<'s>;

    fn create_driver(&self, pin: PinNumber) -> SimulatedDriver<'s> {
        self.created.set(self.created.get() + 1);
        self.last_pin.set(Some(pin));
        SimulatedDriver { source: *self, pin }
    }
}
