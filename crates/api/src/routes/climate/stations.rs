use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::error_response;
use crate::{query::station_names, AppState};

#[utoipa::path(
    get,
    path = "/api/v1.0/stations",
    responses(
        (status = OK, description = "Names of the stations in the dataset", body = Vec<String>),
        (status = SERVICE_UNAVAILABLE, description = "The observation dataset is empty"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read station data")
    ))]
pub async fn stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, (StatusCode, String)> {
    station_names(state.store.as_ref())
        .await
        .map(Json)
        .map_err(|e| error_response(&state, e))
}
