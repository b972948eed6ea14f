//! Household appliance catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An appliance from the fixed household load catalog.
///
/// Each appliance draws a constant power while switched on. The catalog is
/// closed: every [`crate::input::SimulationInput`] carries exactly one
/// setting per variant, indexed by [`Appliance::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appliance {
    /// Ceiling fan.
    Fan,
    /// Television.
    Tv,
    /// Air conditioner.
    Ac,
    /// Electric water heater.
    #[serde(alias = "waterHeater")]
    WaterHeater,
}

/// Returned when a name does not match any catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown appliance \"{0}\", available: fan, tv, ac, water_heater")]
pub struct UnknownAppliance(pub String);

impl Appliance {
    /// Number of entries in the catalog.
    pub const COUNT: usize = 4;

    /// Catalog in display order.
    pub const ALL: [Self; Self::COUNT] = [Self::Fan, Self::Tv, Self::Ac, Self::WaterHeater];

    /// Constant power draw while running (kW).
    pub const fn power_kw(self) -> f64 {
        match self {
            Self::Fan => 0.1,
            Self::Tv => 0.2,
            Self::Ac => 1.5,
            Self::WaterHeater => 4.5,
        }
    }

    /// Position of this appliance in [`Appliance::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::Fan => 0,
            Self::Tv => 1,
            Self::Ac => 2,
            Self::WaterHeater => 3,
        }
    }

    /// Machine-readable key used in TOML, JSON and CLI arguments.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fan => "fan",
            Self::Tv => "tv",
            Self::Ac => "ac",
            Self::WaterHeater => "water_heater",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fan => "Fan",
            Self::Tv => "TV",
            Self::Ac => "Air conditioner",
            Self::WaterHeater => "Water heater",
        }
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Appliance {
    type Err = UnknownAppliance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fan" => Ok(Self::Fan),
            "tv" => Ok(Self::Tv),
            "ac" => Ok(Self::Ac),
            // "waterheater" covers the camel-case form after lowercasing
            "water_heater" | "water-heater" | "waterheater" => Ok(Self::WaterHeater),
            _ => Err(UnknownAppliance(s.to_string())),
        }
    }
}
