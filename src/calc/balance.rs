use serde::Serialize;

use crate::input::SimulationInput;

/// Generation capacity of one solar panel (kW).
pub const PANEL_CAPACITY_KW: f64 = 0.4;

/// Equivalent hours of full-intensity sunlight per day.
pub const PEAK_SUN_HOURS: f64 = 4.0;

/// Storage capacity of one battery (kWh).
pub const BATTERY_CAPACITY_KWH: f64 = 1.0;

/// Daily surplus (kWh) at or below which the system counts as balanced.
pub const BALANCED_SURPLUS_KWH: f64 = 0.01;

/// Daily energy budget of a household.
///
/// # Sign Convention
/// `net_kwh` is demand minus generation: positive means a deficit the
/// batteries must cover, negative means a surplus that charges them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyBalance {
    /// Energy drawn by all enabled loads per day (kWh).
    pub demand_kwh: f64,
    /// Solar energy produced per day (kWh).
    pub generation_kwh: f64,
    /// `demand_kwh - generation_kwh` (kWh).
    pub net_kwh: f64,
    /// Total battery storage (kWh).
    pub storage_kwh: f64,
}

impl EnergyBalance {
    /// Computes the daily budget for an input snapshot.
    pub fn of(input: &SimulationInput) -> Self {
        let demand_kwh = daily_energy_demand(input);
        let generation_kwh = daily_solar_generation(input.solar_panel_count);
        Self {
            demand_kwh,
            generation_kwh,
            net_kwh: demand_kwh - generation_kwh,
            storage_kwh: f64::from(input.battery_count) * BATTERY_CAPACITY_KWH,
        }
    }

    /// Daily surplus (kWh), or `None` when generation does not exceed demand.
    pub fn surplus_kwh(&self) -> Option<f64> {
        (self.net_kwh <= 0.0).then(|| -self.net_kwh)
    }

    /// Hours the storage lasts if only the net deficit is drawn from it.
    ///
    /// Diagnostic only: reported runtime divides storage by total demand.
    /// Returns `None` unless there is a deficit.
    pub fn net_deficit_runtime_hours(&self) -> Option<f64> {
        (self.net_kwh > 0.0).then(|| self.storage_kwh / self.net_kwh * 24.0)
    }
}

/// Sum of `power × hours` over enabled loads (kWh/day).
pub fn daily_energy_demand(input: &SimulationInput) -> f64 {
    input
        .loads()
        .filter(|(_, setting)| setting.enabled())
        .map(|(appliance, setting)| appliance.power_kw() * setting.daily_hours())
        .sum()
}

/// Daily solar yield for a panel count (kWh/day).
pub fn daily_solar_generation(solar_panel_count: u32) -> f64 {
    f64::from(solar_panel_count) * PANEL_CAPACITY_KW * PEAK_SUN_HOURS
}
