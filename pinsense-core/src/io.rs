//! Pin I/O port
//!
//! The sensor layer never touches GPIO registers itself. Digital sensors
//! configure and read their pin through [`PinIo`], which the board support
//! code implements. Pins are addressed by number, the way Arduino-style
//! HALs do it, with `0` reserved for "no pin".

/// Numeric pin identifier; `0` is the unassigned sentinel
pub type PinNumber = u16;

/// Instantaneous logic level of a digital input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic high
    High,
    /// Logic low
    Low,
}

impl Level {
    /// True for [`Level::High`]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Self::High
        } else {
            Self::Low
        }
    }
}

/// Input configuration for a digital pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Floating input
    Input,
    /// Input with the internal pull-up resistor enabled
    InputPullup,
}

impl PinMode {
    /// Mode for a sensor that does or does not want the pull-up
    pub const fn for_pullup(use_pullup: bool) -> Self {
        if use_pullup {
            Self::InputPullup
        } else {
            Self::Input
        }
    }
}

/// Board-level digital I/O
///
/// Methods take `&self` so a single board can be shared by reference among
/// all sensors; implementations use interior mutability where needed (GPIO
/// registers are memory-mapped anyway).
///
/// ## Example Implementation
///
/// ```rust
/// use pinsense_core::io::{Level, PinIo, PinMode, PinNumber};
///
/// struct AlwaysHigh;
///
/// impl PinIo for AlwaysHigh {
///     fn configure_pin_mode(&self, _pin: PinNumber, _mode: PinMode) {}
///
///     fn read_digital_level(&self, _pin: PinNumber) -> Level {
///         Level::High
///     }
/// }
/// ```
pub trait PinIo {
    /// Put `pin` into the given input mode
    fn configure_pin_mode(&self, pin: PinNumber, mode: PinMode);

    /// Sample the current level of `pin`
    fn read_digital_level(&self, pin: PinNumber) -> Level;
}

impl<T: PinIo + ?Sized> PinIo for &T {
    fn configure_pin_mode(&self, pin: PinNumber, mode: PinMode) {
        (**self).configure_pin_mode(pin, mode)
    }

    fn read_digital_level(&self, pin: PinNumber) -> Level {
        (**self).read_digital_level(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pullup_selects_mode() {
        assert_eq!(PinMode::for_pullup(true), PinMode::InputPullup);
        assert_eq!(PinMode::for_pullup(false), PinMode::Input);
    }

    #[test]
    fn level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert!(!Level::from(false).is_high());
    }
}
