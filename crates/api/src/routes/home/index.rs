use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Html};

use crate::{
    query::resolve_extent, routes::climate::error_response, templates::index_page, AppState,
};

/// Handler for the route index (GET /)
pub async fn index_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let extent = resolve_extent(state.store.as_ref())
        .await
        .map_err(|e| error_response(&state, e))?;
    Ok(Html(index_page(&state.remote_url, &extent).into_string()))
}
