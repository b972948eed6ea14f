//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use tracing::{debug, info, warn};

use super::types::{ErrorResponse, LayoutQuery, LoadInfo, SimulationResponse, StateResponse};
use super::{AppState, MAX_LAYOUT_INSTANCES};
use crate::input::FormSnapshot;
use crate::layout::SceneLayout;
use crate::loads::Appliance;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Builds an error response with a JSON body.
fn api_error(status: StatusCode, error: String) -> ApiError {
    (status, Json(ErrorResponse { error }))
}

/// Rejects counts too large to lay out.
fn check_layout_size(panels: u32, batteries: u32) -> Result<(), ApiError> {
    if panels > MAX_LAYOUT_INSTANCES || batteries > MAX_LAYOUT_INSTANCES {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            format!(
                "at most {MAX_LAYOUT_INSTANCES} panels and batteries can be laid out \
                 (got {panels} panels, {batteries} batteries)"
            ),
        ));
    }
    Ok(())
}

/// Configuration, report and layout for the household the server runs with.
///
/// `GET /state` → 200 + `StateResponse` JSON
pub async fn get_state(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    Json(StateResponse {
        household: state.household.clone(),
        simulation: SimulationResponse::new(&state.input),
    })
}

/// Report and layout for a raw form snapshot.
///
/// `POST /simulate` → 200 + `SimulationResponse` JSON
/// Counts above [`MAX_LAYOUT_INSTANCES`] → 400 + `ErrorResponse`
/// Body that is not a form snapshot → 400/415/422 + `ErrorResponse`
pub async fn post_simulate(
    payload: Result<Json<FormSnapshot>, JsonRejection>,
) -> Result<Json<SimulationResponse>, ApiError> {
    let Json(form) = payload.map_err(|rejection| {
        warn!(status = %rejection.status(), "rejected simulate body");
        api_error(rejection.status(), rejection.body_text())
    })?;
    let input = form.normalize();
    check_layout_size(input.solar_panel_count, input.battery_count)?;
    let response = SimulationResponse::new(&input);
    info!(
        panels = input.solar_panel_count,
        batteries = input.battery_count,
        result = %response.report.result.result_text,
        "simulated"
    );
    Ok(Json(response))
}

/// Appliance catalog.
///
/// `GET /loads` → 200 + `Vec<LoadInfo>` JSON
pub async fn get_loads() -> Json<Vec<LoadInfo>> {
    Json(Appliance::ALL.into_iter().map(LoadInfo::from).collect())
}

/// Grid placements for the given counts.
///
/// `GET /layout?panels=N&batteries=M` → 200 + `SceneLayout` JSON
pub async fn get_layout(
    query: Result<Query<LayoutQuery>, QueryRejection>,
) -> Result<Json<SceneLayout>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| api_error(rejection.status(), rejection.body_text()))?;
    let (panels, batteries) = query.counts();
    check_layout_size(panels, batteries)?;
    debug!(panels, batteries, "layout requested");
    Ok(Json(SceneLayout::for_counts(panels, batteries)))
}
