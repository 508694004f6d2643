//! Named input patterns
//!
//! Each scenario is a list of `(tick, level)` edges for a [`Waveform`]
//! plus the ticks at which the test polls.
//!
//! [`Waveform`]: super::Waveform

use pinsense_core::{Level, Timestamp};

pub struct Scenario {
    pub name: &'static str,
    pub hysteresis_secs: u32,
    pub edges: Vec<(Timestamp, Level)>,
    /// `(tick, expected change, expected level after the poll)`
    pub polls: Vec<(Timestamp, bool, Level)>,
}

/// Contact held, released, bouncing twice within 300 ms, then released
///
/// The window is anchored to the last HIGH the sensor actually *read*, so
/// the polls sample the line during each bounce.
pub fn bouncing_reed_switch() -> Scenario {
    Scenario {
        name: "bouncing reed switch",
        hysteresis_secs: 2,
        edges: vec![
            (0, Level::High),
            (5_000, Level::Low),
            (5_100, Level::High),
            (5_150, Level::Low),
            (5_300, Level::High),
            (5_320, Level::Low),
        ],
        polls: vec![
            (0, false, Level::High),
            (4_900, false, Level::High),
            (5_050, false, Level::High),
            (5_120, false, Level::High),
            (5_200, false, Level::High),
            (5_310, false, Level::High),
            (6_000, false, Level::High),
            (7_309, false, Level::High),
            (7_310, true, Level::Low),
            (9_000, false, Level::Low),
        ],
    }
}

/// PIR keeps pulsing while someone moves, then the room goes quiet
pub fn pir_with_repeated_pulses() -> Scenario {
    Scenario {
        name: "pir with repeated pulses",
        hysteresis_secs: 10,
        edges: vec![
            (1_000, Level::High),
            (1_500, Level::Low),
            (8_000, Level::High),
            (8_500, Level::Low),
            (15_000, Level::High),
            (15_500, Level::Low),
        ],
        polls: vec![
            (0, false, Level::Low),
            (1_200, true, Level::High),
            (1_600, false, Level::High),
            (8_200, false, Level::High),
            (12_000, false, Level::High),
            (15_100, false, Level::High),
            (20_000, false, Level::High),
            (25_099, false, Level::High),
            (25_100, true, Level::Low),
        ],
    }
}

pub fn all() -> Vec<Scenario> {
    vec![bouncing_reed_switch(), pir_with_repeated_pulses()]
}
