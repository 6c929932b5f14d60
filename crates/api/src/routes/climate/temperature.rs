use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use super::error_response;
use crate::{
    query::{temperature_summary, SummaryOutcome},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}",
    params(
        ("start" = String, Path, description = "First day to include, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "[minimum, average, maximum] temperature from start through the last recorded date, or a plain-text rejection", body = [f64]),
        (status = BAD_REQUEST, description = "Start is not a YYYY-MM-DD date, or the range was rejected with strict errors enabled"),
        (status = NOT_FOUND, description = "No temperature readings in the range"),
        (status = SERVICE_UNAVAILABLE, description = "The observation dataset is empty")
    ))]
pub async fn start(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Result<Json<[f64; 3]>, (StatusCode, String)> {
    summarize(&state, &start, None).await
}

#[utoipa::path(
    get,
    path = "/api/v1.0/{start}/{end}",
    params(
        ("start" = String, Path, description = "First day to include, YYYY-MM-DD"),
        ("end" = String, Path, description = "Last day to include, YYYY-MM-DD"),
    ),
    responses(
        (status = OK, description = "[minimum, average, maximum] temperature between start and end inclusive, or a plain-text rejection", body = [f64]),
        (status = BAD_REQUEST, description = "A bound is not a YYYY-MM-DD date, or the range was rejected with strict errors enabled"),
        (status = NOT_FOUND, description = "No temperature readings in the range"),
        (status = SERVICE_UNAVAILABLE, description = "The observation dataset is empty")
    ))]
pub async fn start_end(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<[f64; 3]>, (StatusCode, String)> {
    summarize(&state, &start, Some(&end)).await
}

async fn summarize(
    state: &AppState,
    start: &str,
    end: Option<&str>,
) -> Result<Json<[f64; 3]>, (StatusCode, String)> {
    let outcome = temperature_summary(state.store.as_ref(), start, end)
        .await
        .map_err(|e| error_response(state, e))?;

    match outcome {
        SummaryOutcome::Summary { summary, .. } => Ok(Json(summary.as_array())),
        SummaryOutcome::NoData { range } => Err((
            StatusCode::NOT_FOUND,
            format!(
                "No temperature observations recorded between {} and {}.",
                range.start, range.end
            ),
        )),
    }
}
