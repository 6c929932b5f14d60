use crate::{
    db::{self, ObservationStore, SqliteStore},
    index_handler, query, routes,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(Clone)]
pub struct AppState {
    pub remote_url: String,
    /// Answer out-of-range requests with 400 instead of 200
    pub strict_errors: bool,
    pub store: Arc<dyn ObservationStore>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::climate::precipitation::precipitation,
        routes::climate::stations::stations,
        routes::climate::tobs::tobs,
        routes::climate::temperature::start,
        routes::climate::temperature::start_end,
    ),
    components(
        schemas(
            db::PrecipitationReading,
            db::TemperatureReading,
            db::TemperatureSummary,
            db::DateExtent,
            db::Station,
        )
    ),
    tags(
        (name = "climate api", description = "a read-only api over daily precipitation and temperature observations")
    )
)]
struct ApiDoc;

pub async fn build_app_state(
    remote_url: String,
    database: String,
    max_connections: u32,
    strict_errors: bool,
) -> Result<AppState, anyhow::Error> {
    let store = SqliteStore::new(&database, max_connections)
        .await
        .map_err(|e| anyhow!("error opening observation database: {}", e))?;
    store
        .health_check()
        .await
        .map_err(|e| anyhow!("observation database failed health check: {}", e))?;

    match query::resolve_extent(&store).await {
        Ok(extent) => info!(
            "observations available from {} to {}",
            extent.earliest, extent.latest
        ),
        Err(e) => log::warn!("{}", e),
    }

    Ok(AppState {
        remote_url,
        strict_errors,
        store: Arc::new(store),
    })
}

pub fn app(app_state: AppState) -> Router {
    let api_docs = ApiDoc::openapi();
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(routes::precipitation))
        .route("/api/v1.0/stations", get(routes::stations))
        .route("/api/v1.0/tobs", get(routes::tobs))
        .route("/api/v1.0/{start}", get(routes::start))
        .route("/api/v1.0/{start}/{end}", get(routes::start_end))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .merge(Scalar::with_url("/docs", api_docs))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default()
        .to_owned();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
