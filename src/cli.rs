//! Command-line argument definitions.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};

use crate::config::{ConfigError, HouseholdConfig};
use crate::input::{LoadSetting, RawValue, SimulationInput, normalize_count, normalize_hours};
use crate::loads::{Appliance, UnknownAppliance};
use crate::sweep::MAX_SWEEP_BATTERIES;

#[derive(Debug, Parser)]
#[command(name = "house-energy-sim")]
#[command(author, version, about = "Household solar and battery energy-balance calculator")]
#[command(
    long_about = "Estimates how long a battery bank carries a household's appliances, or how \
    long solar surplus takes to fill it, and rates the configuration with up to five stars.\n\
    \nExamples:\n  \
    house-energy-sim calc --preset cabin\n  \
    house-energy-sim calc --panels 10 --load ac:2 --json\n  \
    house-energy-sim sweep --scenario house.toml --max-batteries 20 --csv-out sweep.csv"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate runtime or charge time for one household
    Calc(CalcArgs),
    /// Recalculate across a range of battery counts
    Sweep(SweepArgs),
    /// List built-in presets
    Presets,
    /// Interactive terminal form
    #[cfg(feature = "tui")]
    Tui(TuiArgs),
    /// Serve the calculator over HTTP
    #[cfg(feature = "api")]
    Serve(ServeArgs),
}

/// Where the household comes from, plus per-field overrides.
///
/// Overrides go through the same normalization as form input: text that
/// is not a usable number counts as `0`.
#[derive(Debug, Clone, Default, Args)]
pub struct HouseholdArgs {
    /// Load household from a TOML file
    #[arg(long, conflicts_with = "preset")]
    pub scenario: Option<PathBuf>,

    /// Use a built-in preset (see `presets`)
    #[arg(long)]
    pub preset: Option<String>,

    /// Override the solar panel count
    #[arg(long, allow_hyphen_values = true)]
    pub panels: Option<String>,

    /// Override the battery count
    #[arg(long, allow_hyphen_values = true)]
    pub batteries: Option<String>,

    /// Switch an appliance on, optionally with daily hours (e.g. `fan:10`)
    #[arg(long = "load", value_name = "APPLIANCE[:HOURS]")]
    pub loads: Vec<LoadArg>,

    /// Switch an appliance off
    #[arg(long = "off", value_name = "APPLIANCE")]
    pub off: Vec<Appliance>,
}

#[derive(Debug, Args)]
pub struct CalcArgs {
    #[command(flatten)]
    pub household: HouseholdArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct SweepArgs {
    #[command(flatten)]
    pub household: HouseholdArgs,

    /// Largest battery count in the sweep (at most 10000)
    #[arg(
        long,
        default_value_t = 20,
        value_parser = clap::value_parser!(u32).range(..=i64::from(MAX_SWEEP_BATTERIES))
    )]
    pub max_batteries: u32,

    /// Write the sweep to a CSV file
    #[arg(long)]
    pub csv_out: Option<PathBuf>,
}

#[cfg(feature = "tui")]
#[derive(Debug, Args)]
pub struct TuiArgs {
    #[command(flatten)]
    pub household: HouseholdArgs,
}

#[cfg(feature = "api")]
#[derive(Debug, Args)]
pub struct ServeArgs {
    #[command(flatten)]
    pub household: HouseholdArgs,

    /// API server port
    #[arg(long, default_value_t = 3000)]
    pub port: u16,
}

/// `APPLIANCE[:HOURS]` command-line value.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadArg {
    pub appliance: Appliance,
    /// Raw hours text; `None` keeps the configured hours.
    pub hours: Option<String>,
}

impl FromStr for LoadArg {
    type Err = UnknownAppliance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, hours) = match s.split_once(':') {
            Some((name, hours)) => (name, Some(hours.to_string())),
            None => (s, None),
        };
        Ok(Self {
            appliance: name.parse()?,
            hours,
        })
    }
}

impl HouseholdArgs {
    /// Name of the household source, for logging.
    pub fn source(&self) -> String {
        if let Some(path) = &self.scenario {
            path.display().to_string()
        } else if let Some(name) = &self.preset {
            format!("preset:{name}")
        } else {
            "preset:empty".to_string()
        }
    }

    /// Loads the base configuration (scenario, preset, or empty house).
    ///
    /// # Errors
    ///
    /// Returns every error found while loading or validating.
    pub fn load_config(&self) -> Result<HouseholdConfig, Vec<ConfigError>> {
        let cfg = if let Some(path) = &self.scenario {
            HouseholdConfig::from_toml_file(path).map_err(|e| vec![e])?
        } else if let Some(name) = &self.preset {
            HouseholdConfig::from_preset(name).map_err(|e| vec![e])?
        } else {
            HouseholdConfig::default()
        };
        let errors = cfg.validate();
        if errors.is_empty() {
            Ok(cfg)
        } else {
            Err(errors)
        }
    }

    /// Resolves the configuration and applies command-line overrides.
    ///
    /// # Errors
    ///
    /// Returns every error found while loading or validating.
    pub fn resolve(&self) -> Result<SimulationInput, Vec<ConfigError>> {
        let cfg = self.load_config()?;
        Ok(self.apply_overrides(cfg.to_input()))
    }

    /// Applies `--panels`, `--batteries`, `--load` and `--off` to `input`.
    pub fn apply_overrides(&self, mut input: SimulationInput) -> SimulationInput {
        if let Some(raw) = &self.panels {
            input.solar_panel_count = normalize_count(Some(&RawValue::from(raw.as_str())));
        }
        if let Some(raw) = &self.batteries {
            input.battery_count = normalize_count(Some(&RawValue::from(raw.as_str())));
        }
        for arg in &self.loads {
            let hours = arg.hours.as_deref().map_or_else(
                || input.load(arg.appliance).daily_hours(),
                |raw| normalize_hours(Some(&RawValue::from(raw))),
            );
            input.set_load(arg.appliance, LoadSetting::new(true, hours));
        }
        for &appliance in &self.off {
            let hours = input.load(appliance).daily_hours();
            input.set_load(appliance, LoadSetting::new(false, hours));
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("house-energy-sim").chain(args.iter().copied()))
            .expect("parse should succeed")
    }

    fn household(cli: Cli) -> HouseholdArgs {
        match cli.command {
            Command::Calc(args) => args.household,
            Command::Sweep(args) => args.household,
            _ => panic!("expected a household command"),
        }
    }

    #[test]
    fn load_arg_with_and_without_hours() {
        let arg: LoadArg = "ac:2.5".parse().unwrap();
        assert_eq!(arg.appliance, Appliance::Ac);
        assert_eq!(arg.hours.as_deref(), Some("2.5"));

        let arg: LoadArg = "waterHeater".parse().unwrap();
        assert_eq!(arg.appliance, Appliance::WaterHeater);
        assert!(arg.hours.is_none());

        let err = "toaster:1".parse::<LoadArg>().unwrap_err();
        assert_eq!(err, UnknownAppliance("toaster".to_string()));
    }

    #[test]
    fn calc_with_explicit_household() {
        let h = household(parse(&["calc", "--panels", "10", "--load", "ac:2"]));
        let input = h.resolve().unwrap();
        assert_eq!(input.solar_panel_count, 10);
        assert_eq!(input.battery_count, 0);
        assert_eq!(input.load(Appliance::Ac), LoadSetting::new(true, 2.0));
    }

    #[test]
    fn bad_numbers_normalize_to_zero() {
        let h = household(parse(&[
            "calc",
            "--panels",
            "lots",
            "--batteries",
            "-3",
            "--load",
            "fan:-1",
        ]));
        let input = h.resolve().unwrap();
        assert_eq!(input.solar_panel_count, 0);
        assert_eq!(input.battery_count, 0);
        assert_eq!(input.load(Appliance::Fan), LoadSetting::new(true, 0.0));
    }

    #[test]
    fn overrides_apply_on_top_of_preset() {
        let h = household(parse(&[
            "calc", "--preset", "cabin", "--batteries", "9", "--off", "tv", "--load", "fan",
        ]));
        let input = h.resolve().unwrap();
        assert_eq!(input.battery_count, 9);
        assert!(!input.load(Appliance::Tv).enabled());
        assert_eq!(input.load(Appliance::Tv).daily_hours(), 3.0);
        // hours kept from the preset
        assert_eq!(input.load(Appliance::Fan), LoadSetting::new(true, 10.0));
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let h = household(parse(&["sweep", "--preset", "castle"]));
        let errors = h.resolve().unwrap_err();
        assert_eq!(errors[0].field, "preset");
    }

    #[test]
    fn scenario_and_preset_conflict() {
        let result = Cli::try_parse_from([
            "house-energy-sim",
            "calc",
            "--scenario",
            "a.toml",
            "--preset",
            "cabin",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn sweep_range_is_capped() {
        let parse_max = |max: &str| {
            Cli::try_parse_from(["house-energy-sim", "sweep", "--max-batteries", max])
        };
        assert!(parse_max("4000000000").is_err());
        assert!(parse_max("10001").is_err());
        match parse_max("10000").map(|cli| cli.command) {
            Ok(Command::Sweep(args)) => assert_eq!(args.max_batteries, MAX_SWEEP_BATTERIES),
            other => panic!("expected sweep, got {other:?}"),
        }
    }

    #[test]
    fn sweep_defaults() {
        match parse(&["sweep"]).command {
            Command::Sweep(args) => {
                assert_eq!(args.max_batteries, 20);
                assert!(args.csv_out.is_none());
            }
            _ => panic!("expected sweep"),
        }
    }
}
