//! Fixed-capacity sensor bank
//!
//! Application code usually polls every sensor on each pass of its main
//! loop and only cares about the ones that changed. A [`SensorBank`] holds
//! mutable borrows of up to `N` heterogeneous sensors and does exactly
//! that, without allocating.
//!
//! ```rust
//! use pinsense_core::sim::{SimulatedClimate, SimulatedPins};
//! use pinsense_core::time::ManualClock;
//! use pinsense_core::{ClimateConfig, ClimateSensor, DigitalConfig, DigitalSensor, Level, SensorBank};
//!
//! let pins = SimulatedPins::<8>::new();
//! let dht = SimulatedClimate::new(20.0, 50.0);
//! let clock = ManualClock::new(0);
//!
//! let mut door = DigitalSensor::new(&pins, &clock);
//! door.init(2, "door", DigitalConfig::reed_switch());
//! let mut room = ClimateSensor::new(&dht, &clock);
//! room.init(5, "room", ClimateConfig::new(60));
//!
//! let mut bank = SensorBank::<4>::new();
//! let door_slot = bank.register(&mut door)?;
//! bank.register(&mut room)?;
//!
//! pins.set_level(2, Level::High);
//! let changed = bank.poll(false);
//! assert_eq!(changed.as_slice(), &[door_slot]);
//! # Ok::<(), pinsense_core::BankError>(())
//! ```
//!
//! Slots are handed out in registration order and never reused; the bank
//! has no removal. Drop it to get the sensors back.

use heapless::Vec;

use crate::errors::{BankError, SensorResult};
use crate::io::PinNumber;
use crate::sensors::{Sensor, SensorValue};

/// Index of a sensor inside its bank
pub type SlotId = usize;

/// Slots that reported a change during one poll
pub type ChangeSet<const N: usize> = Vec<SlotId, N>;

/// Up to `N` sensors polled together
pub struct SensorBank<'s, 'a, const N: usize> {
    sensors: Vec<&'s mut dyn Sensor<'a>, N>,
}

impl<'s, 'a, const N: usize> SensorBank<'s, 'a, N> {
    /// Empty bank
    pub const fn new() -> Self {
        Self { sensors: Vec::new() }
    }

    /// Add a sensor and return its slot
    ///
    /// Fails when the bank is full, or when the sensor is active and another
    /// active sensor already uses its pin. Inactive sensors never collide.
    pub fn register(&mut self, sensor: &'s mut dyn Sensor<'a>) -> SensorResult<SlotId> {
        if self.sensors.is_full() {
            sensor_warn!("bank full, cannot register {}", sensor.label().display_name());
            return Err(BankError::Full { capacity: N });
        }

        if sensor.is_active() {
            let pin = sensor.pin();
            if self.find_by_pin(pin).is_some() {
                sensor_warn!("pin {} already registered", pin);
                return Err(BankError::PinInUse { pin });
            }
        }

        let slot = self.sensors.len();
        sensor_debug!("slot {}: {}", slot, sensor.label().display_name());
        self.sensors
            .push(sensor)
            .map_err(|_| BankError::Full { capacity: N })?;
        Ok(slot)
    }

    /// Update every sensor in slot order and collect the ones that changed
    pub fn poll(&mut self, force: bool) -> ChangeSet<N> {
        let mut changed = ChangeSet::new();
        for (slot, sensor) in self.sensors.iter_mut().enumerate() {
            if sensor.update(force) {
                // Same capacity as the bank, cannot overflow
                let _ = changed.push(slot);
            }
        }
        changed
    }

    /// Reset every sensor
    pub fn reset_all(&mut self) {
        for sensor in self.sensors.iter_mut() {
            sensor.reset();
        }
    }

    /// Number of registered sensors
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// True if nothing is registered
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Maximum number of sensors
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of registered sensors that are active
    pub fn active_count(&self) -> usize {
        self.sensors.iter().filter(|sensor| sensor.is_active()).count()
    }

    /// Sensor in `slot`
    pub fn get(&self, slot: SlotId) -> Option<&(dyn Sensor<'a> + 's)> {
        self.sensors.get(slot).map(|sensor| &**sensor)
    }

    /// Mutable sensor in `slot`
    pub fn get_mut(&mut self, slot: SlotId) -> Option<&mut (dyn Sensor<'a> + 's)> {
        self.sensors.get_mut(slot).map(|sensor| &mut **sensor)
    }

    /// Slot of the first sensor called `name`
    pub fn find_by_name(&self, name: &str) -> Option<SlotId> {
        self.sensors
            .iter()
            .position(|sensor| sensor.name() == Some(name))
    }

    /// Slot of the active sensor bound to `pin`
    pub fn find_by_pin(&self, pin: PinNumber) -> Option<SlotId> {
        self.sensors
            .iter()
            .position(|sensor| sensor.is_active() && sensor.pin() == pin)
    }

    /// Registered sensors in slot order
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Sensor<'a> + 's)> + '_ {
        self.sensors.iter().map(|sensor| &**sensor)
    }

    /// Latest value of every sensor in slot order, without I/O
    pub fn values(&self) -> Vec<(SlotId, SensorValue), N> {
        self.sensors
            .iter()
            .enumerate()
            .map(|(slot, sensor)| (slot, sensor.value()))
            .collect()
    }
}

impl<const N: usize> Default for SensorBank<'_, '_, N> {
    fn default() -> Self {
        Self::new()
    }
}
