//! Integration tests for debounced digital inputs
//!
//! Drives `DigitalSensor` with clock-dependent waveforms and checks the
//! hysteresis behaviour end to end.

mod common;

use pinsense_core::{DigitalConfig, DigitalSensor, DigitalState, Level, PinMode, Sensor};

use common::{scenarios, Board, Waveform, DOOR_PIN, MOTION_PIN};

#[test]
fn scenarios_match_expected_levels() {
    for scenario in scenarios::all() {
        let board = Board::new();
        let wave = Waveform::new(&board.clock, &scenario.edges);
        let mut sensor = DigitalSensor::new(&wave, &board.clock);
        sensor.init(
            MOTION_PIN,
            scenario.name,
            DigitalConfig::default().with_hysteresis(scenario.hysteresis_secs),
        );

        for (tick, changed, level) in &scenario.polls {
            board.clock.set(*tick);
            assert_eq!(
                sensor.update(false),
                *changed,
                "{}: change at t={}ms",
                scenario.name,
                tick
            );
            assert_eq!(
                sensor.state(),
                DigitalState::from(*level),
                "{}: level at t={}ms",
                scenario.name,
                tick
            );
        }
    }
}

#[test]
fn five_second_hysteresis() {
    let board = Board::new();
    let mut sensor = DigitalSensor::new(&board.pins, &board.clock);

    board.high(MOTION_PIN);
    sensor.init(MOTION_PIN, "hallway motion", DigitalConfig::new(5, false));
    assert_eq!(sensor.state(), DigitalState::High);

    board.low(MOTION_PIN);
    board.at_secs(1);
    assert!(!sensor.update(false));
    assert_eq!(sensor.state(), DigitalState::High);

    board.at_secs(6);
    assert!(sensor.update(false));
    assert_eq!(sensor.state(), DigitalState::Low);
}

#[test]
fn unbound_sensor_performs_no_io() {
    let board = Board::new();
    let wave = Waveform::new(&board.clock, &[(0, Level::High)]);
    let mut sensor = DigitalSensor::new(&wave, &board.clock);

    for force in [false, true, false] {
        assert!(!sensor.update(force));
    }
    sensor.reset();
    sensor.init(0, "unused", DigitalConfig::reed_switch());
    assert!(!sensor.update(true));

    assert!(!sensor.is_active());
    assert_eq!(wave.read_count(), 0);
    assert!(wave.modes().is_empty());
}

#[test]
fn every_update_reads_the_pin() {
    let board = Board::new();
    let wave = Waveform::new(&board.clock, &[]);
    let mut sensor = DigitalSensor::new(&wave, &board.clock);
    sensor.init(DOOR_PIN, "door", DigitalConfig::reed_switch());

    for _ in 0..5 {
        sensor.update(false);
    }
    assert_eq!(wave.read_count(), 6);
    assert_eq!(wave.modes(), vec![(DOOR_PIN, PinMode::InputPullup)]);
}

#[test]
fn pullup_reconfigured_on_reinit() {
    let board = Board::new();
    let mut sensor = DigitalSensor::new(&board.pins, &board.clock);

    sensor.init(DOOR_PIN, "door", DigitalConfig::reed_switch());
    assert_eq!(board.pins.mode(DOOR_PIN), Some(PinMode::InputPullup));

    sensor.init(DOOR_PIN, "door", DigitalConfig::reed_switch().with_pullup(false));
    assert_eq!(board.pins.mode(DOOR_PIN), Some(PinMode::Input));
    assert_eq!(board.pins.configurations(), 2);
}

#[test]
fn window_spans_clock_wrap() {
    let board = Board::starting_at(u32::MAX - 2_000);
    let mut sensor = DigitalSensor::new(&board.pins, &board.clock);

    board.high(MOTION_PIN);
    sensor.init(MOTION_PIN, "pir", DigitalConfig::new(10, false));

    board.low(MOTION_PIN);
    for _ in 0..9 {
        board.clock.advance(1_000);
        assert!(!sensor.update(false));
    }
    assert_eq!(sensor.state(), DigitalState::High);

    board.clock.advance(1_000);
    assert!(sensor.update(false));
    assert_eq!(sensor.state(), DigitalState::Low);
}
