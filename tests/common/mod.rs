//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use std::process::{Command, Output};

use house_energy_sim::input::SimulationInput;
use house_energy_sim::loads::Appliance;
use rand::Rng;
use rand::rngs::StdRng;

/// Seed shared by the randomized tests.
pub const SEED: u64 = 42;

/// 0 panels, 5 batteries, fan 10 h.
pub fn fan_on_batteries() -> SimulationInput {
    SimulationInput::new(0, 5).with_load(Appliance::Fan, true, 10.0)
}

/// 10 panels, 0 batteries, AC 2 h.
pub fn ac_on_solar() -> SimulationInput {
    SimulationInput::new(10, 0).with_load(Appliance::Ac, true, 2.0)
}

/// Nothing installed, nothing switched on.
pub fn empty_house() -> SimulationInput {
    SimulationInput::new(0, 0)
}

/// 0 panels, 1 battery, water heater 1 h.
pub fn water_heater_on_one_battery() -> SimulationInput {
    SimulationInput::new(0, 1).with_load(Appliance::WaterHeater, true, 1.0)
}

/// Random household: up to 30 panels and batteries, every appliance
/// independently on or off with 0–24 hours.
pub fn random_input(rng: &mut StdRng) -> SimulationInput {
    let mut input = SimulationInput::new(rng.random_range(0..=30), rng.random_range(0..=30));
    for appliance in Appliance::ALL {
        input = input.with_load(
            appliance,
            rng.random_bool(0.5),
            rng.random_range(0.0..=24.0),
        );
    }
    input
}

/// Runs the binary with `args` from the package root.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_house-energy-sim"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("house-energy-sim process should run")
}

/// Stdout of a successful run; panics with stderr otherwise.
pub fn cli_stdout(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}
