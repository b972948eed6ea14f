use super::balance::{BALANCED_SURPLUS_KWH, EnergyBalance};
use super::types::{Estimate, SimulationResult};
use crate::input::SimulationInput;

/// Computes the runtime or charge-time estimate and star rating.
///
/// - No demand: "No loads selected", unrated.
/// - Surplus above [`BALANCED_SURPLUS_KWH`]: hours to fill the storage from
///   the daily surplus, five stars.
/// - Surplus at or below it (including an exact match of generation and
///   demand): "System is balanced", five stars.
/// - Deficit: storage divided by total daily demand, rated by
///   [`super::StarRating::from_runtime_hours`], zero stars under one hour.
pub fn calculate(input: &SimulationInput) -> SimulationResult {
    estimate(&EnergyBalance::of(input)).into()
}

fn estimate(balance: &EnergyBalance) -> Estimate {
    if balance.demand_kwh == 0.0 {
        return Estimate::NoLoads;
    }

    if let Some(surplus_kwh) = balance.surplus_kwh() {
        return if surplus_kwh > BALANCED_SURPLUS_KWH {
            Estimate::ChargeTime {
                hours: balance.storage_kwh / surplus_kwh * 24.0,
            }
        } else {
            Estimate::Balanced
        };
    }

    // Divides by total demand, not the net deficit.
    let hours = balance.storage_kwh / balance.demand_kwh * 24.0;
    if hours < 1.0 {
        Estimate::RuntimeUnderOneHour { hours }
    } else {
        Estimate::Runtime { hours }
    }
}
