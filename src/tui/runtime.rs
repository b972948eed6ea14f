//! Form state of the interactive calculator.

use crate::calc::SimulationResult;
use crate::config::HouseholdConfig;
use crate::input::{LoadSetting, SimulationInput};
use crate::loads::Appliance;
use crate::report::Report;

/// Hours added or removed per key press.
const HOURS_STEP: f64 = 0.5;

/// Upper bound for daily hours in the form.
const MAX_HOURS: f64 = 24.0;

/// One editable row of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Panels,
    Batteries,
    Load(Appliance),
}

/// Form rows in display order.
pub const FIELDS: [Field; 2 + Appliance::COUNT] = [
    Field::Panels,
    Field::Batteries,
    Field::Load(Appliance::Fan),
    Field::Load(Appliance::Tv),
    Field::Load(Appliance::Ac),
    Field::Load(Appliance::WaterHeater),
];

/// TUI application state.
///
/// Every edit recomputes [`App::report`] from scratch.
pub struct App {
    /// Current form values.
    pub input: SimulationInput,
    /// Calculation for `input`.
    pub report: Report,
    /// Index into [`FIELDS`].
    pub selected: usize,
    /// Name of the preset the form started from.
    pub preset_name: String,
    /// Form values restored by [`App::reset`].
    initial: SimulationInput,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app with the given starting values.
    pub fn new(preset_name: &str, input: SimulationInput) -> Self {
        Self {
            input,
            report: Report::new(&input),
            selected: 0,
            preset_name: preset_name.to_string(),
            initial: input,
            quit: false,
        }
    }

    /// Latest calculation result.
    pub fn result(&self) -> &SimulationResult {
        &self.report.result
    }

    /// Row under the cursor.
    pub fn selected_field(&self) -> Field {
        FIELDS[self.selected]
    }

    /// Moves the cursor down, wrapping at the end.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % FIELDS.len();
    }

    /// Moves the cursor up, wrapping at the start.
    pub fn select_prev(&mut self) {
        self.selected = (self.selected + FIELDS.len() - 1) % FIELDS.len();
    }

    /// Increments the selected count or hours.
    pub fn increase(&mut self) {
        self.adjust(1);
    }

    /// Decrements the selected count or hours, stopping at zero.
    pub fn decrease(&mut self) {
        self.adjust(-1);
    }

    fn adjust(&mut self, direction: i8) {
        match self.selected_field() {
            Field::Panels => {
                self.input.solar_panel_count = step_count(self.input.solar_panel_count, direction);
            }
            Field::Batteries => {
                self.input.battery_count = step_count(self.input.battery_count, direction);
            }
            Field::Load(appliance) => {
                let current = self.input.load(appliance);
                let hours = (current.daily_hours() + f64::from(direction) * HOURS_STEP)
                    .clamp(0.0, MAX_HOURS);
                self.input
                    .set_load(appliance, LoadSetting::new(current.enabled(), hours));
            }
        }
        self.recompute();
    }

    /// Flips the checkbox of the selected appliance; no-op on count rows.
    pub fn toggle(&mut self) {
        if let Field::Load(appliance) = self.selected_field() {
            let current = self.input.load(appliance);
            self.input.set_load(
                appliance,
                LoadSetting::new(!current.enabled(), current.daily_hours()),
            );
            self.recompute();
        }
    }

    /// Replaces the form with a preset; unknown names are ignored.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(household) = HouseholdConfig::from_preset(name) else {
            return;
        };
        self.initial = household.to_input();
        self.preset_name = name.to_string();
        self.reset();
    }

    /// Restores the starting values of the current preset.
    pub fn reset(&mut self) {
        self.input = self.initial;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.report = Report::new(&self.input);
    }
}

fn step_count(count: u32, direction: i8) -> u32 {
    if direction >= 0 {
        count.saturating_add(1)
    } else {
        count.saturating_sub(1)
    }
}
