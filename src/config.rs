//! TOML-based household configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::input::{LoadSetting, SimulationInput};
use crate::loads::Appliance;

/// Longest daily usage a config file may declare (hours).
const MAX_DAILY_HOURS: f64 = 24.0;

/// Top-level household configuration parsed from TOML.
///
/// Every section has a default (an empty house with no loads switched
/// on). Load from TOML with [`HouseholdConfig::from_toml_file`] or use one
/// of the [`HouseholdConfig::PRESETS`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HouseholdConfig {
    /// Installed generation and storage.
    #[serde(default)]
    pub system: SystemConfig,
    /// Appliance usage.
    #[serde(default)]
    pub loads: LoadsConfig,
}

/// Installed solar panels and batteries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// Number of solar panels.
    pub solar_panels: u32,
    /// Number of batteries.
    pub batteries: u32,
}

/// Usage of every catalog appliance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadsConfig {
    pub fan: LoadConfig,
    pub tv: LoadConfig,
    pub ac: LoadConfig,
    pub water_heater: LoadConfig,
}

/// Usage of one appliance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadConfig {
    /// Whether the appliance is switched on.
    pub enabled: bool,
    /// Daily usage in hours (0–24).
    pub hours: f64,
}

impl LoadConfig {
    const fn on(hours: f64) -> Self {
        Self {
            enabled: true,
            hours,
        }
    }
}

impl LoadsConfig {
    /// Settings of one appliance.
    pub fn get(&self, appliance: Appliance) -> &LoadConfig {
        match appliance {
            Appliance::Fan => &self.fan,
            Appliance::Tv => &self.tv,
            Appliance::Ac => &self.ac,
            Appliance::WaterHeater => &self.water_heater,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"loads.ac.hours"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl HouseholdConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["empty", "cabin", "suburban", "all_electric", "solar_surplus"];

    /// Small off-grid cabin: a fan and a TV on a modest battery bank.
    pub fn cabin() -> Self {
        Self {
            system: SystemConfig {
                solar_panels: 0,
                batteries: 5,
            },
            loads: LoadsConfig {
                fan: LoadConfig::on(10.0),
                tv: LoadConfig::on(3.0),
                ..LoadsConfig::default()
            },
        }
    }

    /// Typical suburban home with air conditioning and a rooftop array.
    pub fn suburban() -> Self {
        Self {
            system: SystemConfig {
                solar_panels: 6,
                batteries: 10,
            },
            loads: LoadsConfig {
                fan: LoadConfig::on(8.0),
                tv: LoadConfig::on(4.0),
                ac: LoadConfig::on(6.0),
                ..LoadsConfig::default()
            },
        }
    }

    /// Every appliance on, including the water heater.
    pub fn all_electric() -> Self {
        Self {
            system: SystemConfig {
                solar_panels: 12,
                batteries: 15,
            },
            loads: LoadsConfig {
                fan: LoadConfig::on(12.0),
                tv: LoadConfig::on(5.0),
                ac: LoadConfig::on(8.0),
                water_heater: LoadConfig::on(2.0),
            },
        }
    }

    /// Large array on a light load: generation exceeds demand.
    pub fn solar_surplus() -> Self {
        Self {
            system: SystemConfig {
                solar_panels: 10,
                batteries: 5,
            },
            loads: LoadsConfig {
                ac: LoadConfig::on(2.0),
                ..LoadsConfig::default()
            },
        }
    }

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "empty" => Ok(Self::default()),
            "cabin" => Ok(Self::cabin()),
            "suburban" => Ok(Self::suburban()),
            "all_electric" => Ok(Self::all_electric()),
            "solar_surplus" => Ok(Self::solar_surplus()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "reading household config");
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for appliance in Appliance::ALL {
            let hours = self.loads.get(appliance).hours;
            if !hours.is_finite() || !(0.0..=MAX_DAILY_HOURS).contains(&hours) {
                errors.push(ConfigError {
                    field: format!("loads.{}.hours", appliance.key()),
                    message: format!("must be in [0, {MAX_DAILY_HOURS}], got {hours}"),
                });
            }
        }
        errors
    }

    /// Builds the calculator input described by this configuration.
    pub fn to_input(&self) -> SimulationInput {
        let mut input = SimulationInput::new(self.system.solar_panels, self.system.batteries);
        for appliance in Appliance::ALL {
            let load = self.loads.get(appliance);
            input.set_load(appliance, LoadSetting::new(load.enabled, load.hours));
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_house() {
        let cfg = HouseholdConfig::default();
        assert!(cfg.validate().is_empty());
        let input = cfg.to_input();
        assert_eq!(input.solar_panel_count, 0);
        assert!(!input.any_enabled());
    }

    #[test]
    fn from_preset_unknown() {
        let e = HouseholdConfig::from_preset("mansion").unwrap_err();
        assert_eq!(e.field, "preset");
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in HouseholdConfig::PRESETS {
            let cfg = HouseholdConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(HouseholdConfig::validate).unwrap_or_default();
            assert!(errors.is_empty(), "preset \"{name}\" should be valid: {errors:?}");
        }
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[system]
solar_panels = 10
batteries = 4

[loads.fan]
enabled = true
hours = 10

[loads.water_heater]
enabled = true
hours = 1.5
"#;
        let cfg = HouseholdConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.system.solar_panels), Some(10));
        assert_eq!(cfg.as_ref().map(|c| c.loads.water_heater.hours), Some(1.5));
        // untouched sections keep defaults
        assert_eq!(cfg.as_ref().map(|c| c.loads.ac.enabled), Some(false));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[loads.dishwasher]
enabled = true
"#;
        assert!(HouseholdConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn negative_count_is_rejected_by_parser() {
        let toml = "[system]\nsolar_panels = -1\n";
        assert!(HouseholdConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn validation_catches_hours_out_of_range() {
        let mut cfg = HouseholdConfig::cabin();
        cfg.loads.tv.hours = 30.0;
        cfg.loads.ac.hours = -2.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "loads.tv.hours"));
        assert!(errors.iter().any(|e| e.field == "loads.ac.hours"));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn to_input_carries_loads() {
        let input = HouseholdConfig::suburban().to_input();
        assert_eq!(input.solar_panel_count, 6);
        assert_eq!(input.battery_count, 10);
        assert_eq!(input.load(Appliance::Ac), LoadSetting::new(true, 6.0));
        assert!(!input.load(Appliance::WaterHeater).enabled());
    }

    #[test]
    fn error_display_names_field() {
        let e = ConfigError {
            field: "loads.fan.hours".into(),
            message: "must be in [0, 24]".into(),
        };
        assert_eq!(e.to_string(), "config error: loads.fan.hours: must be in [0, 24]");
    }
}
