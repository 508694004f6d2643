//! Polling a Mixed Sensor Bank Example
//!
//! This example runs a scripted evening in a hallway: a reed switch on the
//! front door, a PIR motion detector and a DHT22 on the wall, all polled
//! together from one main loop.
//!
//! ## What You'll Learn
//!
//! - Binding sensors to pins with configuration presets
//! - Registering heterogeneous sensors in a `SensorBank`
//! - Reacting only to the sensors that changed
//! - How hysteresis hides contact bounce and PIR gaps
//! - What a failed climate read looks like (stale value, retry next poll)
//! - Running the same sensors on a wall clock with `StdClock`
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example poll_bank
//! ```

use std::{thread, time::Duration};

use pinsense_core::{
    sim::{SimulatedClimate, SimulatedPins},
    time::{elapsed_ms, ManualClock, StdClock},
    BankError, ClimateConfig, ClimateSensor, Clock, DigitalConfig, DigitalSensor, Level,
    PinNumber, Sensor, SensorBank, SensorValue,
};

const DOOR: PinNumber = 2;
const HALL_PIR: PinNumber = 3;
const HALL_DHT: PinNumber = 4;

/// What happens at each second of the script
enum Event {
    Pin(PinNumber, Level),
    Climate(f32, f32),
    ClimateFault(bool),
}

fn script() -> Vec<(u32, Event)> {
    vec![
        (5, Event::Pin(DOOR, Level::High)),
        (5, Event::Pin(HALL_PIR, Level::High)),
        (6, Event::Pin(DOOR, Level::Low)),
        (7, Event::Pin(HALL_PIR, Level::Low)),
        (30, Event::Pin(HALL_PIR, Level::High)),
        (31, Event::Pin(HALL_PIR, Level::Low)),
        (55, Event::Climate(22.4, 47.0)),
        (59, Event::ClimateFault(true)),
        (62, Event::ClimateFault(false)),
        (100, Event::Climate(21.9, 49.5)),
    ]
}

fn describe(value: SensorValue) -> String {
    match value {
        SensorValue::Inactive => "inactive".into(),
        SensorValue::Digital(state) => format!("{:?}", state),
        SensorValue::Climate(Some(reading)) => {
            format!("{:.1}°C {:.1}%", reading.temperature, reading.humidity)
        }
        SensorValue::Climate(None) => "no reading yet".into(),
    }
}

/// Door on the host's monotonic clock: open, close, wait out the bounce window
fn wall_clock_door(pins: &SimulatedPins<8>) {
    println!("\nWall-clock run (1 s reed switch hysteresis):");

    let clock = StdClock::new();
    let mut door = DigitalSensor::new(pins, &clock);
    door.init(DOOR, "front door", DigitalConfig::reed_switch().with_hysteresis(1));

    pins.set_level(DOOR, Level::High);
    door.update(false);
    let opened = clock.now_ms();
    println!("  opened  -> {:?}", door.state());

    pins.set_level(DOOR, Level::Low);
    for _ in 0..30 {
        thread::sleep(Duration::from_millis(100));
        if door.update(false) {
            println!(
                "  closed  -> {:?} after {} ms",
                door.state(),
                elapsed_ms(opened, clock.now_ms())
            );
            return;
        }
    }
    println!("  still {:?} after 3 s", door.state());
}

fn main() -> Result<(), BankError> {
    println!("pinsense Sensor Bank Example");
    println!("============================\n");

    let pins = SimulatedPins::<8>::new();
    let dht = SimulatedClimate::new(21.0, 50.0);
    let clock = ManualClock::new(0);

    let mut door = DigitalSensor::new(&pins, &clock);
    door.init(DOOR, "front door", DigitalConfig::reed_switch());

    let mut motion = DigitalSensor::new(&pins, &clock);
    motion.init(HALL_PIR, "hall motion", DigitalConfig::motion_detector().with_hysteresis(20));

    let mut climate = ClimateSensor::new(&dht, &clock);
    climate.init(HALL_DHT, "hall climate", ClimateConfig::new(60));

    let mut bank = SensorBank::<4>::new();
    bank.register(&mut door)?;
    bank.register(&mut motion)?;
    bank.register(&mut climate)?;

    println!("Registered {} of {} slots:", bank.len(), bank.capacity());
    for (slot, value) in bank.values() {
        let name = bank.get(slot).and_then(|s| s.name()).unwrap_or("<unnamed>");
        println!("  [{}] {:<13} {}", slot, name, describe(value));
    }
    println!();

    let events = script();
    for second in 0..=120 {
        clock.set(second * 1000);

        for (_, event) in events.iter().filter(|(at, _)| *at == second) {
            match event {
                Event::Pin(pin, level) => pins.set_level(*pin, *level),
                Event::Climate(t, h) => dht.set_reading(*t, *h),
                Event::ClimateFault(failing) => dht.set_failing(*failing),
            }
        }

        for slot in bank.poll(false) {
            if let Some(sensor) = bank.get(slot) {
                println!(
                    "t={:>3}s  {:<13} -> {}",
                    second,
                    sensor.name().unwrap_or("<unnamed>"),
                    describe(sensor.value())
                );
            }
        }
    }

    println!("\nForcing a final read of every sensor:");
    let changed = bank.poll(true);
    println!("  {} sensor(s) changed", changed.len());

    drop(bank);
    println!("\nDHT handles created: {}, still live: {}", dht.created(), dht.live());

    pins.set_level(DOOR, Level::Low);
    wall_clock_door(&pins);
    Ok(())
}
