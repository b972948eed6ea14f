//! Calculator entry point: CLI wiring and household resolution.

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{error, info};

use house_energy_sim::cli::{CalcArgs, Cli, Command, HouseholdArgs, SweepArgs};
use house_energy_sim::config::HouseholdConfig;
use house_energy_sim::input::SimulationInput;
use house_energy_sim::io::export::export_csv;
use house_energy_sim::report::Report;
use house_energy_sim::sweep::{min_batteries_for, sweep_batteries};
use house_energy_sim::telemetry::init_tracing;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Calc(args) => calc(&args),
        Command::Sweep(args) => sweep(&args),
        Command::Presets => {
            presets();
            Ok(())
        }
        #[cfg(feature = "tui")]
        Command::Tui(args) => {
            let input = resolve(&args.household)?;
            let name = args.household.preset.as_deref().unwrap_or("custom");
            info!(preset = name, "starting TUI");
            house_energy_sim::tui::run(name, input).context("TUI failed")
        }
        #[cfg(feature = "api")]
        Command::Serve(args) => serve(&args),
    }
}

/// Loads the household and applies overrides, logging every config error.
fn resolve(household: &HouseholdArgs) -> Result<SimulationInput> {
    match household.resolve() {
        Ok(input) => {
            info!(
                source = %household.source(),
                panels = input.solar_panel_count,
                batteries = input.battery_count,
                "household resolved"
            );
            Ok(input)
        }
        Err(errors) => {
            for e in &errors {
                error!("{e}");
            }
            bail!("invalid household ({} error(s))", errors.len())
        }
    }
}

fn calc(args: &CalcArgs) -> Result<()> {
    let input = resolve(&args.household)?;
    let report = Report::new(&input);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
    } else {
        println!("{report}");
    }
    Ok(())
}

fn sweep(args: &SweepArgs) -> Result<()> {
    let input = resolve(&args.household)?;
    let rows = sweep_batteries(&input, 0..=args.max_batteries);

    println!(
        "{:>9}  {:>11}  {:>9}  {:<26}  rating",
        "batteries", "storage_kwh", "net_kwh", "result"
    );
    for row in &rows {
        println!(
            "{:>9}  {:>11.2}  {:>9.2}  {:<26}  {}",
            row.batteries,
            row.balance.storage_kwh,
            row.balance.net_kwh,
            row.result.result_text,
            row.result.star_rating,
        );
    }

    println!();
    for stars in (1..=5).rev() {
        match min_batteries_for(&rows, stars) {
            Some(n) => println!("{stars}+ stars: {n} batteries"),
            None => println!("{stars}+ stars: not reached within {}", args.max_batteries),
        }
    }

    if let Some(path) = &args.csv_out {
        export_csv(&rows, path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
        info!(path = %path.display(), rows = rows.len(), "sweep written");
    }
    Ok(())
}

fn presets() {
    for name in HouseholdConfig::PRESETS {
        if let Ok(cfg) = HouseholdConfig::from_preset(name) {
            let result = house_energy_sim::calc::calculate(&cfg.to_input());
            println!(
                "{name:<14} {:>3} panels {:>3} batteries  {result}",
                cfg.system.solar_panels, cfg.system.batteries
            );
        }
    }
}

#[cfg(feature = "api")]
fn serve(args: &house_energy_sim::cli::ServeArgs) -> Result<()> {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use house_energy_sim::api::{self, AppState};

    let household = args
        .household
        .load_config()
        .map_err(|errors| {
            for e in &errors {
                error!("{e}");
            }
            anyhow::anyhow!("invalid household ({} error(s))", errors.len())
        })?;
    let input = args.household.apply_overrides(household.to_input());
    let state = Arc::new(AppState { household, input });
    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));

    let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    rt.block_on(api::serve(state, addr)).context("API server failed")
}
