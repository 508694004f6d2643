//! Debounced Digital Inputs
//!
//! ## Hysteresis
//!
//! Mechanical contacts bounce and PIR detectors drop out between pulses
//! while motion continues. Instead of buffering a history of samples, the
//! sensor keeps a single timestamp: the last tick at which the line read
//! HIGH. A LOW reading is only accepted once the line has been quiet for
//! the whole hysteresis window after that tick.
//!
//! ```text
//! line:    ‾‾‾‾|________|‾|______________________
//! reported ‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾|________
//!                         ^ HIGH pulse     ^ pulse + H
//!                           re-arms window
//! ```
//!
//! - Every HIGH observation refreshes the timestamp, not just transitions.
//! - LOW→HIGH is reported on the first HIGH read.
//! - The window only holds a previously *reported* HIGH; a sensor whose
//!   state is still unknown reports LOW straight away.
//!
//! Elapsed time is a wrapping difference of clock ticks, so the window
//! works across the 32-bit wrap of the millisecond counter.

use crate::constants::sensors::{DEFAULT_HYSTERESIS_SECS, MOTION_HOLD_SECS, REED_SWITCH_HYSTERESIS_SECS};
use crate::io::{Level, PinIo, PinMode, PinNumber};
use crate::sensors::{Sensor, SensorLabel, SensorValue};
use crate::time::{elapsed_ms, secs_to_ms, Clock, Timestamp};

/// Reported level of a digital input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitalState {
    /// Line is (or is still considered) high
    High,
    /// Line has been low for the full hysteresis window
    Low,
    /// Nothing reported since the last reset
    #[default]
    Unknown,
}

impl DigitalState {
    /// True for [`DigitalState::High`]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<Level> for DigitalState {
    fn from(level: Level) -> Self {
        match level {
            Level::High => Self::High,
            Level::Low => Self::Low,
        }
    }
}

/// Settings for a [`DigitalSensor`], fixed at init
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitalConfig {
    /// Minimum quiet time after the last HIGH before LOW is reported (s)
    pub hysteresis_secs: u32,
    /// Enable the internal pull-up resistor
    pub use_pullup: bool,
}

impl Default for DigitalConfig {
    fn default() -> Self {
        Self {
            hysteresis_secs: DEFAULT_HYSTERESIS_SECS,
            use_pullup: false,
        }
    }
}

impl DigitalConfig {
    /// Custom hysteresis and pull-up selection
    pub const fn new(hysteresis_secs: u32, use_pullup: bool) -> Self {
        Self { hysteresis_secs, use_pullup }
    }

    /// Reed switch wired to ground, using the internal pull-up
    pub const fn reed_switch() -> Self {
        Self {
            hysteresis_secs: REED_SWITCH_HYSTERESIS_SECS,
            use_pullup: true,
        }
    }

    /// PIR motion detector with an active-high output
    pub const fn motion_detector() -> Self {
        Self {
            hysteresis_secs: MOTION_HOLD_SECS,
            use_pullup: false,
        }
    }

    /// Replace the hysteresis window
    pub const fn with_hysteresis(self, hysteresis_secs: u32) -> Self {
        Self { hysteresis_secs, ..self }
    }

    /// Replace the pull-up selection
    pub const fn with_pullup(self, use_pullup: bool) -> Self {
        Self { use_pullup, ..self }
    }

    /// Hysteresis window in milliseconds, saturating
    pub fn hysteresis_ms(&self) -> u32 {
        secs_to_ms(self.hysteresis_secs)
    }
}

/// Digital input with HIGH→LOW hysteresis
///
/// `P` is the board's pin I/O, `C` its millisecond clock; both are usually
/// shared references to board-wide singletons.
#[derive(Debug)]
pub struct DigitalSensor<'a, P, C> {
    label: SensorLabel<'a>,
    io: P,
    clock: C,
    config: DigitalConfig,
    state: DigitalState,
    last_activity: Timestamp,
}

impl<'a, P, C> DigitalSensor<'a, P, C>
where
    P: PinIo,
    C: Clock,
{
    /// Create an inactive sensor (pin 0)
    pub fn new(io: P, clock: C) -> Self {
        Self {
            label: SensorLabel::new(),
            io,
            clock,
            config: DigitalConfig::default(),
            state: DigitalState::Unknown,
            last_activity: 0,
        }
    }

    /// Bind pin, name and settings, reset, and take a first sample
    ///
    /// Replaces any previous binding. Passing pin 0 leaves the sensor
    /// inactive.
    pub fn init(&mut self, pin: PinNumber, name: &'a str, config: DigitalConfig) {
        self.label.bind(pin, name);
        self.config = config;

        self.reset();
        self.update(true);
    }

    /// Last reported level
    pub fn state(&self) -> DigitalState {
        self.state
    }

    /// Hysteresis window in seconds
    pub fn delay(&self) -> u32 {
        self.config.hysteresis_secs
    }

    /// Whether the internal pull-up is selected
    pub fn uses_pullup(&self) -> bool {
        self.config.use_pullup
    }

    /// Tick of the most recent HIGH observation
    pub fn last_activity(&self) -> Timestamp {
        self.last_activity
    }

    /// Settings given at init
    pub fn config(&self) -> DigitalConfig {
        self.config
    }
}

impl<'a, P, C> Sensor<'a> for DigitalSensor<'a, P, C>
where
    P: PinIo,
    C: Clock,
{
    fn label(&self) -> &SensorLabel<'a> {
        &self.label
    }

    fn label_mut(&mut self) -> &mut SensorLabel<'a> {
        &mut self.label
    }

    fn reset(&mut self) {
        self.state = DigitalState::Unknown;
        self.last_activity = 0;

        if self.label.has_pin() {
            let mode = PinMode::for_pullup(self.config.use_pullup);
            self.io.configure_pin_mode(self.label.pin(), mode);
            sensor_debug!(
                "{}: pin {} configured as {:?}",
                self.label.display_name(),
                self.label.pin(),
                mode
            );
        }
    }

    // `force` has no meaning here: every call samples the pin.
    fn update(&mut self, _force: bool) -> bool {
        if !self.is_active() {
            return false;
        }

        let mut level = self.io.read_digital_level(self.label.pin());
        let now = self.clock.now_ms();
        if level.is_high() {
            self.last_activity = now;
        }

        // LOW only counts after a full quiet window following the last HIGH
        if level == Level::Low
            && self.state == DigitalState::High
            && elapsed_ms(self.last_activity, now) < self.config.hysteresis_ms()
        {
            sensor_trace!("{}: LOW held back by hysteresis", self.label.display_name());
            level = Level::High;
        }

        let next = DigitalState::from(level);
        if next == self.state {
            return false;
        }

        sensor_debug!(
            "{}: {:?} -> {:?}",
            self.label.display_name(),
            self.state,
            next
        );
        self.state = next;
        true
    }

    fn value(&self) -> SensorValue {
        if self.is_active() {
            SensorValue::Digital(self.state)
        } else {
            SensorValue::Inactive
        }
    }
}
