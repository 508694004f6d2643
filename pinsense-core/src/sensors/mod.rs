//! Sensor Contract and Variants
//!
//! ## Overview
//!
//! Every sensor, whatever the transducer behind it, answers the same
//! questions through the [`Sensor`] trait: which pin is it on, what is it
//! called, is it active, and did its value change since the last poll. The
//! application keeps a set of sensors and calls [`Sensor::update`] on each
//! at whatever cadence it likes; each variant decides from its own timing
//! state whether to touch hardware and whether to report a change.
//!
//! ## Variants
//!
//! - [`DigitalSensor`]: reed switches, PIR detectors and other contacts,
//!   with a hysteresis window that delays HIGH→LOW transitions
//! - [`ClimateSensor`]: DHT-style temperature/humidity transducers, sampled
//!   at most once per interval; once due, re-read on every poll until a
//!   read succeeds
//!
//! ## Lifecycle
//!
//! ```text
//! new()  ──►  inactive (pin 0, no I/O)
//!   │
//! init(pin, name, config) ──► reset() ──► update(force = true)
//!   │                                          │
//!   └──────────── re-init replaces everything ◄┘
//! ```
//!
//! A freshly constructed sensor is inactive. `init` binds a pin and a
//! name, re-establishes derived state through `reset`, and takes a first
//! forced sample, so a caller never observes a half-initialized sensor.
//!
//! ## Names Are Borrowed
//!
//! A sensor stores `&'a str`, never a copy. The text must outlive the
//! sensor, which the lifetime enforces; string literals and names held in
//! a long-lived configuration block are the usual sources.

mod climate;
mod digital;

pub use climate::{ClimateConfig, ClimateSensor};
pub use digital::{DigitalConfig, DigitalSensor, DigitalState};

use crate::constants::INACTIVE_PIN;
use crate::driver::ClimateReading;
use crate::io::PinNumber;

/// Pin and name shared by every sensor variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorLabel<'a> {
    pin: PinNumber,
    name: Option<&'a str>,
}

impl<'a> SensorLabel<'a> {
    /// Unbound label: pin 0, no name
    pub const fn new() -> Self {
        Self { pin: INACTIVE_PIN, name: None }
    }

    /// Rebind pin and name together
    pub fn bind(&mut self, pin: PinNumber, name: &'a str) {
        self.pin = pin;
        self.name = Some(name);
    }

    /// Bound pin, 0 if unbound
    pub const fn pin(&self) -> PinNumber {
        self.pin
    }

    /// Borrowed name, if one was given
    pub const fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// Replace the name without touching the pin
    pub fn set_name(&mut self, name: &'a str) {
        self.name = Some(name);
    }

    /// True when a real pin is assigned
    pub const fn has_pin(&self) -> bool {
        self.pin != INACTIVE_PIN
    }

    /// Name for log lines
    pub(crate) fn display_name(&self) -> &'a str {
        self.name.unwrap_or("<unnamed>")
    }
}

/// Latest value of a sensor, independent of its variant
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorValue {
    /// Sensor has no pin (or no driver) and reports nothing
    Inactive,
    /// Debounced level of a digital input
    Digital(DigitalState),
    /// Last good climate sample; `None` until the first successful read
    Climate(Option<ClimateReading>),
}

/// Polymorphic sensor contract
///
/// Object safe, so heterogeneous sensors can sit behind
/// `&mut dyn Sensor<'a>` in one collection.
///
/// ## Implementation Requirements
///
/// - `update` must return `false` and perform no I/O while `is_active()` is
///   false
/// - `update` never panics and never reports errors; hardware faults leave
///   the previous value in place and read as "no change"
/// - `reset` keeps the pin and name
pub trait Sensor<'a> {
    /// Shared pin/name record
    fn label(&self) -> &SensorLabel<'a>;

    /// Mutable access to the shared pin/name record
    fn label_mut(&mut self) -> &mut SensorLabel<'a>;

    /// Re-establish timing and derived state without forgetting pin or name
    fn reset(&mut self);

    /// Poll the sensor; `true` iff its visible value changed since the last
    /// call
    ///
    /// `force` asks to sample even when the variant's own policy would skip;
    /// variants that always sample ignore it.
    fn update(&mut self, force: bool) -> bool;

    /// Latest value without any I/O
    fn value(&self) -> SensorValue;

    /// Whether the sensor is bound and able to sample
    fn is_active(&self) -> bool {
        self.label().has_pin()
    }

    /// Bound pin, 0 if unbound
    fn pin(&self) -> PinNumber {
        self.label().pin()
    }

    /// Borrowed name
    fn name(&self) -> Option<&'a str> {
        self.label().name()
    }

    /// Replace the name; the text is borrowed, not copied
    fn set_name(&mut self, name: &'a str) {
        self.label_mut().set_name(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_starts_unbound() {
        let label = SensorLabel::new();
        assert_eq!(label.pin(), INACTIVE_PIN);
        assert_eq!(label.name(), None);
        assert!(!label.has_pin());
        assert_eq!(label, SensorLabel::default());
    }

    #[test]
    fn label_binds_and_renames() {
        let mut label = SensorLabel::new();
        label.bind(5, "garage");
        assert_eq!(label.pin(), 5);
        assert_eq!(label.name(), Some("garage"));

        label.set_name("shed");
        assert_eq!(label.pin(), 5);
        assert_eq!(label.display_name(), "shed");
    }

    #[test]
    fn name_is_borrowed_not_copied() {
        let text = "kitchen";
        let mut label = SensorLabel::new();
        label.bind(1, text);
        let stored = label.name().unwrap();
        assert!(core::ptr::eq(stored, text));
    }
}
