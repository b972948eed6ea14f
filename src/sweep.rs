//! Storage sizing sweep.
//!
//! Re-runs the calculator across a range of battery counts with every
//! other input held fixed.

use std::ops::RangeInclusive;

use serde::Serialize;

use crate::calc::{EnergyBalance, SimulationResult, calculate};
use crate::input::SimulationInput;

/// Largest battery count a sweep may reach.
pub const MAX_SWEEP_BATTERIES: u32 = 10_000;

/// One battery count of a sweep.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepRow {
    pub batteries: u32,
    pub balance: EnergyBalance,
    pub result: SimulationResult,
}

/// Calculates `base` once per battery count in `batteries`.
pub fn sweep_batteries(base: &SimulationInput, batteries: RangeInclusive<u32>) -> Vec<SweepRow> {
    batteries
        .map(|battery_count| {
            let mut input = *base;
            input.battery_count = battery_count;
            SweepRow {
                batteries: battery_count,
                balance: EnergyBalance::of(&input),
                result: calculate(&input),
            }
        })
        .collect()
}

/// Smallest battery count in the sweep reaching `stars` or more.
pub fn min_batteries_for(rows: &[SweepRow], stars: u8) -> Option<u32> {
    rows.iter()
        .find(|row| row.result.star_rating.stars().is_some_and(|s| s >= stars))
        .map(|row| row.batteries)
}
