//! Household configuration snapshot and raw-input normalization.
//!
//! The calculator only ever sees a [`SimulationInput`], whose counts are
//! unsigned and whose hours are finite and non-negative. Raw control values
//! (form text, JSON numbers, CLI strings) are folded into that shape here,
//! and that folding never fails: anything unusable becomes `0`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::loads::Appliance;

/// Enable flag and daily usage of one appliance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LoadSetting {
    enabled: bool,
    daily_hours: f64,
}

impl LoadSetting {
    /// Creates a setting, clamping `daily_hours` to a finite value `>= 0`.
    pub fn new(enabled: bool, daily_hours: f64) -> Self {
        Self {
            enabled,
            daily_hours: clamp_hours(daily_hours),
        }
    }

    /// Whether the appliance is switched on.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Daily usage in hours (always finite and `>= 0`).
    pub fn daily_hours(&self) -> f64 {
        self.daily_hours
    }
}

/// Immutable snapshot of one calculation request.
///
/// Holds exactly one [`LoadSetting`] per catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationInput {
    /// Number of installed solar panels.
    pub solar_panel_count: u32,
    /// Number of installed batteries.
    pub battery_count: u32,
    loads: [LoadSetting; Appliance::COUNT],
}

impl SimulationInput {
    /// Creates an input with the given counts and every load disabled.
    pub fn new(solar_panel_count: u32, battery_count: u32) -> Self {
        Self {
            solar_panel_count,
            battery_count,
            loads: [LoadSetting::default(); Appliance::COUNT],
        }
    }

    /// Returns a copy with the given appliance setting replaced.
    #[must_use]
    pub fn with_load(mut self, appliance: Appliance, enabled: bool, daily_hours: f64) -> Self {
        self.set_load(appliance, LoadSetting::new(enabled, daily_hours));
        self
    }

    /// Replaces the setting of one appliance.
    pub fn set_load(&mut self, appliance: Appliance, setting: LoadSetting) {
        self.loads[appliance.index()] = setting;
    }

    /// Setting of one appliance.
    pub fn load(&self, appliance: Appliance) -> LoadSetting {
        self.loads[appliance.index()]
    }

    /// All settings in catalog order.
    pub fn loads(&self) -> impl Iterator<Item = (Appliance, LoadSetting)> + '_ {
        Appliance::ALL.iter().map(|&a| (a, self.load(a)))
    }

    /// Returns `true` if at least one appliance is switched on.
    pub fn any_enabled(&self) -> bool {
        self.loads.iter().any(LoadSetting::enabled)
    }
}

/// A raw control value: either a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Numeric value as typed into a number field.
    Number(f64),
    /// Unparsed text from a text field or command line.
    Text(String),
}

impl RawValue {
    /// Numeric reading of the value; `NaN` when the text is not a number.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Raw state of one appliance control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLoad {
    /// Checkbox state.
    pub enabled: bool,
    /// Hours field contents.
    pub hours: Option<RawValue>,
}

/// Raw state of every input control, as the display layer holds it.
///
/// Appliances missing from `loads` are treated as unchecked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSnapshot {
    /// Solar panel count field.
    pub solar_panels: Option<RawValue>,
    /// Battery count field.
    pub batteries: Option<RawValue>,
    /// Appliance controls keyed by catalog entry.
    pub loads: BTreeMap<Appliance, RawLoad>,
}

impl FormSnapshot {
    /// Folds the raw control values into a calculator input.
    pub fn normalize(&self) -> SimulationInput {
        let mut input = SimulationInput::new(
            normalize_count(self.solar_panels.as_ref()),
            normalize_count(self.batteries.as_ref()),
        );
        for (&appliance, raw) in &self.loads {
            input.set_load(
                appliance,
                LoadSetting::new(raw.enabled, normalize_hours(raw.hours.as_ref())),
            );
        }
        input
    }
}

/// Converts a raw count to a non-negative integer.
///
/// Missing, non-numeric, negative and non-finite values become `0`;
/// fractions truncate toward zero and oversized values saturate.
pub fn normalize_count(raw: Option<&RawValue>) -> u32 {
    let Some(value) = raw.map(RawValue::as_f64) else {
        return 0;
    };
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // float-to-int `as` saturates at u32::MAX
    value.trunc() as u32
}

/// Converts raw hours to a finite value `>= 0`.
pub fn normalize_hours(raw: Option<&RawValue>) -> f64 {
    raw.map_or(0.0, |v| clamp_hours(v.as_f64()))
}

fn clamp_hours(hours: f64) -> f64 {
    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}
