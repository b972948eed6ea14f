//! Calculator result types.

use std::fmt;

use serde::Serialize;

use super::rating::StarRating;

/// Which estimate the calculator produced, with its hour figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimate {
    /// Every load is off or has zero hours.
    NoLoads,
    /// Surplus fills the batteries in `hours`.
    ChargeTime { hours: f64 },
    /// Surplus is too small to matter.
    Balanced,
    /// Batteries sustain the loads for `hours` (at least one hour).
    Runtime { hours: f64 },
    /// Batteries run out in under an hour.
    RuntimeUnderOneHour { hours: f64 },
}

impl Estimate {
    /// Hour figure carried by the estimate, if any.
    pub fn hours(&self) -> Option<f64> {
        match *self {
            Self::ChargeTime { hours }
            | Self::Runtime { hours }
            | Self::RuntimeUnderOneHour { hours } => Some(hours),
            Self::NoLoads | Self::Balanced => None,
        }
    }

    /// Star rating implied by the estimate.
    pub fn star_rating(&self) -> StarRating {
        match *self {
            Self::NoLoads => StarRating::Unrated,
            Self::ChargeTime { .. } | Self::Balanced => StarRating::Five,
            Self::RuntimeUnderOneHour { .. } => StarRating::Zero,
            Self::Runtime { hours } => StarRating::from_runtime_hours(hours),
        }
    }

    /// Display text, e.g. `5.3 hours of runtime`.
    pub fn result_text(&self) -> String {
        match *self {
            Self::NoLoads => "No loads selected".to_string(),
            Self::ChargeTime { hours } => format!("~{:.0} hrs to fully charge", hours.round()),
            Self::Balanced => "System is balanced".to_string(),
            Self::Runtime { hours } => {
                format!("{:.1} hours of runtime", round_half_up_tenths(hours))
            }
            Self::RuntimeUnderOneHour { .. } => "Runtime < 1 hour".to_string(),
        }
    }
}

/// Rounds to one decimal, ties away from zero like the charge-time text.
fn round_half_up_tenths(hours: f64) -> f64 {
    (hours * 10.0).round() / 10.0
}

/// Outcome of one calculation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// Human-readable estimate.
    pub result_text: String,
    /// Discrete rating.
    pub star_rating: StarRating,
    /// Numeric hours behind `result_text`, when there is one.
    pub hours_value: Option<f64>,
    /// Branch taken by the calculator.
    pub estimate: Estimate,
}

impl From<Estimate> for SimulationResult {
    fn from(estimate: Estimate) -> Self {
        Self {
            result_text: estimate.result_text(),
            star_rating: estimate.star_rating(),
            hours_value: estimate.hours(),
            estimate,
        }
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.result_text, self.star_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charge_time_rounds_to_nearest_hour() {
        assert_eq!(
            Estimate::ChargeTime { hours: 2.5 }.result_text(),
            "~3 hrs to fully charge"
        );
        assert_eq!(
            Estimate::ChargeTime { hours: 0.0 }.result_text(),
            "~0 hrs to fully charge"
        );
    }

    #[test]
    fn runtime_has_one_decimal() {
        assert_eq!(
            Estimate::Runtime { hours: 120.0 }.result_text(),
            "120.0 hours of runtime"
        );
    }

    #[test]
    fn runtime_ties_round_up() {
        assert_eq!(
            Estimate::Runtime { hours: 1.25 }.result_text(),
            "1.3 hours of runtime"
        );
        assert_eq!(
            Estimate::Runtime { hours: 4.75 }.result_text(),
            "4.8 hours of runtime"
        );
    }

    #[test]
    fn result_from_estimate_carries_hours() {
        let r = SimulationResult::from(Estimate::RuntimeUnderOneHour { hours: 0.5 });
        assert_eq!(r.result_text, "Runtime < 1 hour");
        assert_eq!(r.star_rating, StarRating::Zero);
        assert_eq!(r.hours_value, Some(0.5));

        let r = SimulationResult::from(Estimate::Balanced);
        assert_eq!(r.hours_value, None);
        assert_eq!(r.star_rating, StarRating::Five);
    }

    #[test]
    fn display_joins_text_and_stars() {
        let r = SimulationResult::from(Estimate::Runtime { hours: 30.0 });
        assert_eq!(r.to_string(), "30.0 hours of runtime [★★★★☆]");
    }

    #[test]
    fn estimate_serializes_tagged() {
        let json = serde_json::to_value(Estimate::Runtime { hours: 5.0 }).unwrap();
        assert_eq!(json["kind"], "runtime");
        assert_eq!(json["hours"], 5.0);
    }
}
