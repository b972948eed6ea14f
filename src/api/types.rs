use serde::{Deserialize, Serialize};

use crate::config::HouseholdConfig;
use crate::input::{RawValue, SimulationInput, normalize_count};
use crate::layout::SceneLayout;
use crate::loads::Appliance;
use crate::report::Report;

/// Calculation report plus the grid placements for its counts.
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    #[serde(flatten)]
    pub report: Report,
    pub layout: SceneLayout,
}

impl SimulationResponse {
    pub fn new(input: &SimulationInput) -> Self {
        Self {
            report: Report::new(input),
            layout: SceneLayout::for_input(input),
        }
    }
}

/// `GET /state` body: the configured household and its calculation.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub household: HouseholdConfig,
    #[serde(flatten)]
    pub simulation: SimulationResponse,
}

/// One entry of the appliance catalog.
#[derive(Debug, Serialize)]
pub struct LoadInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub power_kw: f64,
}

impl From<Appliance> for LoadInfo {
    fn from(a: Appliance) -> Self {
        Self {
            key: a.key(),
            label: a.label(),
            power_kw: a.power_kw(),
        }
    }
}

/// Raw counts for the layout endpoint; normalized like form input.
#[derive(Debug, Default, Deserialize)]
pub struct LayoutQuery {
    pub panels: Option<String>,
    pub batteries: Option<String>,
}

impl LayoutQuery {
    /// `(panels, batteries)` after normalization.
    pub fn counts(&self) -> (u32, u32) {
        let count = |raw: &Option<String>| {
            normalize_count(raw.as_deref().map(RawValue::from).as_ref())
        };
        (count(&self.panels), count(&self.batteries))
    }
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_query_normalizes_counts() {
        let q = LayoutQuery {
            panels: Some("14".into()),
            batteries: Some("-1".into()),
        };
        assert_eq!(q.counts(), (14, 0));
        assert_eq!(LayoutQuery::default().counts(), (0, 0));
    }

    #[test]
    fn response_flattens_report() {
        let input = SimulationInput::new(2, 1).with_load(Appliance::Fan, true, 4.0);
        let json = serde_json::to_value(SimulationResponse::new(&input)).unwrap();
        assert!(json.get("result").is_some());
        assert!(json.get("balance").is_some());
        assert_eq!(json["solar_panels"], 2);
        assert_eq!(json["layout"]["panels"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn load_info_from_catalog() {
        let info = LoadInfo::from(Appliance::WaterHeater);
        assert_eq!(info.key, "water_heater");
        assert_eq!(info.power_kw, 4.5);
    }
}
