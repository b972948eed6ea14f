//! Complete calculation report for display layers.

use std::fmt;

use serde::Serialize;

use crate::calc::{EnergyBalance, SimulationResult, calculate};
use crate::input::SimulationInput;
use crate::layout::{BATTERY_GRID, PANEL_GRID};
use crate::loads::Appliance;

/// One appliance line of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoadLine {
    pub appliance: Appliance,
    pub power_kw: f64,
    pub enabled: bool,
    pub hours: f64,
    /// Energy this appliance contributes to demand (kWh/day).
    pub energy_kwh: f64,
}

/// Input echo, energy budget, result and grid sizes of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub solar_panels: u32,
    pub batteries: u32,
    pub loads: Vec<LoadLine>,
    pub balance: EnergyBalance,
    pub result: SimulationResult,
    /// Runtime if only the net deficit drained the batteries; diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_deficit_runtime_hours: Option<f64>,
    pub panel_rows: u32,
    pub battery_rows: u32,
}

impl Report {
    /// Runs the calculator and collects everything a display layer shows.
    pub fn new(input: &SimulationInput) -> Self {
        let loads = input
            .loads()
            .map(|(appliance, setting)| LoadLine {
                appliance,
                power_kw: appliance.power_kw(),
                enabled: setting.enabled(),
                hours: setting.daily_hours(),
                energy_kwh: if setting.enabled() {
                    appliance.power_kw() * setting.daily_hours()
                } else {
                    0.0
                },
            })
            .collect();

        let balance = EnergyBalance::of(input);
        Self {
            solar_panels: input.solar_panel_count,
            batteries: input.battery_count,
            loads,
            balance,
            result: calculate(input),
            net_deficit_runtime_hours: balance.net_deficit_runtime_hours(),
            panel_rows: PANEL_GRID.rows(input.solar_panel_count),
            battery_rows: BATTERY_GRID.rows(input.battery_count),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Household ---")?;
        writeln!(
            f,
            "Solar panels: {} ({} row(s) of {})",
            self.solar_panels, self.panel_rows, PANEL_GRID.per_row
        )?;
        writeln!(
            f,
            "Batteries: {} ({} row(s) of {})",
            self.batteries, self.battery_rows, BATTERY_GRID.per_row
        )?;
        for line in &self.loads {
            let mark = if line.enabled { "x" } else { " " };
            writeln!(
                f,
                "  [{mark}] {:<16} {:>4.1} kW × {:>5.1} h = {:>6.2} kWh",
                line.appliance.label(),
                line.power_kw,
                line.hours,
                line.energy_kwh,
            )?;
        }
        writeln!(f, "\n--- Energy Balance ---")?;
        writeln!(f, "Daily demand: {:.2} kWh", self.balance.demand_kwh)?;
        writeln!(f, "Daily solar generation: {:.2} kWh", self.balance.generation_kwh)?;
        writeln!(f, "Net daily demand: {:.2} kWh", self.balance.net_kwh)?;
        writeln!(f, "Total storage: {:.2} kWh", self.balance.storage_kwh)?;
        if let Some(hours) = self.net_deficit_runtime_hours {
            writeln!(f, "Runtime on net deficit only: {hours:.1} hours")?;
        }
        writeln!(f, "\n--- Result ---")?;
        writeln!(f, "Estimate: {}", self.result.result_text)?;
        write!(
            f,
            "Rating: {} ({})",
            self.result.star_rating,
            self.result.star_rating.as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::StarRating;

    #[test]
    fn report_matches_calculator() {
        let input = SimulationInput::new(13, 6).with_load(Appliance::Ac, true, 10.0);
        let report = Report::new(&input);
        assert_eq!(report.result, calculate(&input));
        assert_eq!(report.panel_rows, 2);
        assert_eq!(report.battery_rows, 2);
    }

    #[test]
    fn disabled_loads_contribute_no_energy() {
        let input = SimulationInput::new(0, 0).with_load(Appliance::Tv, false, 5.0);
        let report = Report::new(&input);
        let tv = report.loads[Appliance::Tv.index()];
        assert_eq!(tv.hours, 5.0);
        assert_eq!(tv.energy_kwh, 0.0);
    }

    #[test]
    fn text_report_lists_estimate_and_rating() {
        let input = SimulationInput::new(0, 1).with_load(Appliance::WaterHeater, true, 1.0);
        let text = Report::new(&input).to_string();
        assert!(text.contains("Estimate: 5.3 hours of runtime"));
        assert!(text.contains(&format!("Rating: {}", StarRating::One)));
        assert!(text.contains("Daily demand: 4.50 kWh"));
    }

    #[test]
    fn net_deficit_runtime_is_diagnostic_only() {
        // 4.5 kWh demand, 3.2 kWh solar, 1 kWh storage
        let input = SimulationInput::new(2, 1).with_load(Appliance::WaterHeater, true, 1.0);
        let report = Report::new(&input);
        assert_eq!(report.result.result_text, "5.3 hours of runtime");
        let text = report.to_string();
        assert!(text.contains("Runtime on net deficit only: 18.5 hours"));

        let surplus = Report::new(&SimulationInput::new(10, 0).with_load(Appliance::Fan, true, 1.0));
        assert!(surplus.net_deficit_runtime_hours.is_none());
    }
}
