use axum::{extract::State, http::StatusCode, Json};
use log::debug;
use std::sync::Arc;

use super::error_response;
use crate::{db::TemperatureReading, query::last_year_temperatures, AppState};

#[utoipa::path(
    get,
    path = "/api/v1.0/tobs",
    responses(
        (status = OK, description = "Temperature observations from the 365 days ending at the last recorded date", body = Vec<TemperatureReading>),
        (status = SERVICE_UNAVAILABLE, description = "The observation dataset is empty"),
        (status = INTERNAL_SERVER_ERROR, description = "Failed to read temperature data")
    ))]
pub async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureReading>>, (StatusCode, String)> {
    let (range, readings) = last_year_temperatures(state.store.as_ref())
        .await
        .map_err(|e| error_response(&state, e))?;
    debug!(
        "{} temperature readings between {} and {}",
        readings.len(),
        range.start,
        range.end
    );
    Ok(Json(readings))
}
