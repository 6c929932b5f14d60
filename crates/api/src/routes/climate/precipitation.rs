use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use super::error_response;
use crate::{db::PrecipitationReading, query::precipitation_series, AppState};

#[utoipa::path(
    get,
    path = "/api/v1.0/precipitation",
    responses(
        (status = OK, description = "Every station's daily precipitation reading, ordered by date", body = Vec<PrecipitationReading>),
        (status = SERVICE_UNAVAILABLE, description = "The observation dataset is empty"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read precipitation data")
    ))]
pub async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PrecipitationReading>>, (StatusCode, String)> {
    precipitation_series(state.store.as_ref())
        .await
        .map(Json)
        .map_err(|e| error_response(&state, e))
}
