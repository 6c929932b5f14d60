pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use precipitation::*;
pub use stations::*;
pub use temperature::*;
pub use tobs::*;

use axum::http::StatusCode;
use log::{error, warn};

use crate::{query::QueryError, AppState};

/// Maps a query failure onto the plain-text response every climate route returns.
///
/// Range rejections answer with 200 unless `strict_errors` is configured.
pub fn error_response(state: &AppState, err: QueryError) -> (StatusCode, String) {
    let status = match &err {
        QueryError::EmptyDataset => StatusCode::SERVICE_UNAVAILABLE,
        QueryError::DateParse { .. } => StatusCode::BAD_REQUEST,
        QueryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        e if e.is_rejection() && state.strict_errors => StatusCode::BAD_REQUEST,
        _ => StatusCode::OK,
    };

    if status.is_server_error() {
        error!("error handling climate query: {}", err);
    } else {
        warn!(
            "rejected climate query: {} (boundary: {:?})",
            err,
            err.boundary()
        );
    }

    (status, err.to_string())
}
