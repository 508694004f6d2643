//! Shared fixtures for integration tests
//!
//! Provides:
//! - A `Board` bundling simulated pins, a DHT bus and a manual clock
//! - `Waveform`, a pin whose level is a function of the clock
//! - Named input patterns in `scenarios`

#![allow(dead_code)]

use std::cell::RefCell;

use pinsense_core::{
    sim::{SimulatedClimate, SimulatedPins},
    time::ManualClock,
    Clock, Level, PinIo, PinMode, PinNumber, Timestamp,
};

pub mod scenarios;

/// Pins used by the fixtures
pub const DOOR_PIN: PinNumber = 2;
pub const MOTION_PIN: PinNumber = 3;
pub const CLIMATE_PIN: PinNumber = 7;

/// Everything a sensor needs, in one place
pub struct Board {
    pub pins: SimulatedPins<16>,
    pub climate: SimulatedClimate,
    pub clock: ManualClock,
}

impl Board {
    /// Board at t=0 with all pins LOW and the DHT reading 20°C / 50%
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    pub fn starting_at(now: Timestamp) -> Self {
        Self {
            pins: SimulatedPins::new(),
            climate: SimulatedClimate::new(20.0, 50.0),
            clock: ManualClock::new(now),
        }
    }

    /// Set the clock to `secs` whole seconds
    pub fn at_secs(&self, secs: u32) {
        self.clock.set(secs * 1000);
    }

    pub fn high(&self, pin: PinNumber) {
        self.pins.set_level(pin, Level::High);
    }

    pub fn low(&self, pin: PinNumber) {
        self.pins.set_level(pin, Level::Low);
    }
}

/// Digital line driven by a list of `(tick, level)` edges
///
/// The level at time `t` is the level of the last edge at or before `t`,
/// LOW before the first edge. Reads are logged with their tick.
pub struct Waveform<'c> {
    clock: &'c ManualClock,
    edges: Vec<(Timestamp, Level)>,
    reads: RefCell<Vec<Timestamp>>,
    modes: RefCell<Vec<(PinNumber, PinMode)>>,
}

impl<'c> Waveform<'c> {
    pub fn new(clock: &'c ManualClock, edges: &[(Timestamp, Level)]) -> Self {
        let mut edges = edges.to_vec();
        edges.sort_by_key(|(t, _)| *t);
        Self {
            clock,
            edges,
            reads: RefCell::new(Vec::new()),
            modes: RefCell::new(Vec::new()),
        }
    }

    pub fn level_at(&self, now: Timestamp) -> Level {
        self.edges
            .iter()
            .rev()
            .find(|(t, _)| *t <= now)
            .map(|(_, level)| *level)
            .unwrap_or(Level::Low)
    }

    pub fn read_count(&self) -> usize {
        self.reads.borrow().len()
    }

    pub fn modes(&self) -> Vec<(PinNumber, PinMode)> {
        self.modes.borrow().clone()
    }
}

impl PinIo for Waveform<'_> {
    fn configure_pin_mode(&self, pin: PinNumber, mode: PinMode) {
        self.modes.borrow_mut().push((pin, mode));
    }

    fn read_digital_level(&self, _pin: PinNumber) -> Level {
        let now = self.clock.now_ms();
        self.reads.borrow_mut().push(now);
        self.level_at(now)
    }
}
