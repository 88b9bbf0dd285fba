use crate::api::DashboardState;
use crate::figure::{time_series_figure, ChartFigure};
use crate::participant::{self, UnknownClass};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for chart recomputation
#[derive(Deserialize)]
pub struct ChartParams {
    /// Countline identifier (required)
    pub sensor: Option<String>,
    /// Comma-separated class labels in selection order; absent or empty
    /// is the empty selection
    pub classes: Option<String>,
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create chart API router
pub fn create_chart_router(state: Arc<DashboardState>) -> Router {
    Router::new()
        .route("/api/chart", get(get_chart))
        .with_state(state)
}

/// GET /api/chart?sensor=X&classes=Car,Bus
///
/// Recomputes the time chart from the full resident table on every call;
/// the page replaces its chart wholesale with the response. A countline
/// id not present in the dataset is not an error: the figure simply
/// carries empty series. Class label order in the query is series order
/// in the figure.
async fn get_chart(
    State(state): State<Arc<DashboardState>>,
    Query(params): Query<ChartParams>,
) -> Result<Json<ChartFigure>, ChartError> {
    let sensor = params.sensor.ok_or(ChartError::MissingSensor)?;
    let classes = participant::parse_selection(params.classes.as_deref().unwrap_or(""))
        .map_err(ChartError::UnknownClass)?;

    Ok(Json(time_series_figure(&state.table, &sensor, &classes)))
}

/// Chart error types
#[derive(Debug)]
enum ChartError {
    MissingSensor,
    UnknownClass(UnknownClass),
}

impl IntoResponse for ChartError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ChartError::MissingSensor => (
                StatusCode::BAD_REQUEST,
                "sensor parameter is required".to_string(),
            ),
            ChartError::UnknownClass(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
