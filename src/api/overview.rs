use crate::api::DashboardState;
use crate::dataset::Sensor;
use crate::figure::{map_figure, table_figure, MapFigure, TableFigure};
use crate::participant::ParticipantClass;
use crate::selection::SelectionState;
use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use std::sync::Arc;

/// Map and detail table over the preview subset
#[derive(Serialize)]
pub struct OverviewResponse {
    pub map: MapFigure,
    pub table: TableFigure,
}

/// Selector bootstrap payload: everything the page needs to render its
/// controls and issue the first chart request
#[derive(Serialize)]
pub struct SensorsResponse {
    /// Distinct countlines in order of first appearance
    pub sensors: Vec<Sensor>,
    /// Class labels in the order they are offered
    pub classes: Vec<&'static str>,
    pub initial: SelectionState,
}

/// Create overview API router
pub fn create_overview_router(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/api/overview", get(get_overview))
        .route("/api/sensors", get(get_sensors))
        .with_state(state)
}

/// GET /api/overview - map and detail table figures
///
/// Both views render the same leading subset of the table so the page
/// shows a fixed, representative sample rather than the full series.
async fn get_overview(State(state): State<Arc<DashboardState>>) -> Json<OverviewResponse> {
    let preview = state.table.first_n(state.preview_rows);

    Json(OverviewResponse {
        map: map_figure(preview, &state.map),
        table: table_figure(preview),
    })
}

/// GET /api/sensors - selector options and the initial selection
async fn get_sensors(State(state): State<Arc<DashboardState>>) -> Json<SensorsResponse> {
    Json(SensorsResponse {
        sensors: state.table.sensors(),
        classes: ParticipantClass::ALL.iter().map(|c| c.label()).collect(),
        initial: SelectionState::initial(&state.table),
    })
}
