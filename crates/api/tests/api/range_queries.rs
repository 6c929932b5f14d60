use crate::helpers::{hawaii_extent, spawn_app, spawn_strict_app, MockObservationAccess};
use axum::http::StatusCode;
use climate_api::TemperatureSummary;
use std::sync::Arc;
use time::macros::date;

fn mock_with_extent() -> MockObservationAccess {
    let mut store = MockObservationAccess::new();
    store
        .expect_date_extent()
        .returning(|| Ok(Some(hawaii_extent())));
    store
}

#[tokio::test]
async fn start_after_latest_is_rejected_with_latest_date() {
    let mut store = mock_with_extent();
    store.expect_temperature_summary().times(0);
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = test_app.get("/api/v1.0/2017-08-24").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("2017-08-23"), "{}", body);
    assert!(body.contains("No data available at or after start date 2017-08-24"));
}

#[tokio::test]
async fn strict_errors_answer_bad_request() {
    let mut store = mock_with_extent();
    store.expect_temperature_summary().times(0);
    let test_app = spawn_strict_app(Arc::new(store)).await;

    let (status, body) = test_app.get("/api/v1.0/2017-08-24").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("2017-08-23"));
}

#[tokio::test]
async fn start_after_latest_wins_over_other_rules() {
    let mut store = mock_with_extent();
    store.expect_temperature_summary().times(0);
    let test_app = spawn_app(Arc::new(store)).await;

    // end is before the earliest date and before start, yet the start rule applies first
    let (_, body) = test_app.get("/api/v1.0/2018-01-01/2009-01-01").await;

    assert!(body.contains("at or after start date 2018-01-01"), "{}", body);
}

#[tokio::test]
async fn end_before_earliest_is_rejected_with_earliest_date() {
    let mut store = mock_with_extent();
    store.expect_temperature_summary().times(0);
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = test_app.get("/api/v1.0/2009-01-01/2009-12-31").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("at or before end date 2009-12-31"), "{}", body);
    assert!(body.contains("2010-01-01"));
}

#[tokio::test]
async fn inverted_range_is_rejected() {
    let mut store = mock_with_extent();
    store.expect_temperature_summary().times(0);
    let test_app = spawn_strict_app(Arc::new(store)).await;

    let (status, body) = test_app.get("/api/v1.0/2017-08-23/2016-08-23").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        "Start date 2017-08-23 must not be after end date 2016-08-23."
    );
}

#[tokio::test]
async fn malformed_dates_fail_before_touching_the_store() {
    let mut store = MockObservationAccess::new();
    store.expect_date_extent().times(0);
    store.expect_temperature_summary().times(0);
    let test_app = spawn_app(Arc::new(store)).await;

    for uri in [
        "/api/v1.0/yesterday",
        "/api/v1.0/2017-13-01",
        "/api/v1.0/2016-08-23/08-23-2017",
    ] {
        let (status, body) = test_app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert!(body.starts_with("Invalid date"), "{}", body);
    }
}

#[tokio::test]
async fn closed_range_returns_min_avg_max() {
    let mut store = mock_with_extent();
    store
        .expect_temperature_summary()
        .withf(|start, end| *start == date!(2016 - 08 - 23) && *end == date!(2017 - 08 - 23))
        .times(1)
        .returning(|_, _| {
            Ok(Some(TemperatureSummary {
                minimum: 72.0,
                average: 77.2,
                maximum: 81.0,
            }))
        });
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = test_app.get("/api/v1.0/2016-08-23/2017-08-23").await;

    assert_eq!(status, StatusCode::OK);
    let values: Vec<f64> = serde_json::from_str(&body).unwrap();
    assert_eq!(values, vec![72.0, 77.2, 81.0]);
}

#[tokio::test]
async fn open_range_runs_through_latest_date() {
    let mut store = mock_with_extent();
    store
        .expect_temperature_summary()
        .withf(|start, end| *start == date!(2017 - 01 - 01) && *end == date!(2017 - 08 - 23))
        .times(1)
        .returning(|_, _| {
            Ok(Some(TemperatureSummary {
                minimum: 72.0,
                average: 76.333_333_333,
                maximum: 81.0,
            }))
        });
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = test_app.get("/api/v1.0/2017-01-01").await;

    assert_eq!(status, StatusCode::OK);
    // averages are not rounded in JSON
    let values: Vec<f64> = serde_json::from_str(&body).unwrap();
    assert_eq!(values[1], 76.333_333_333);
}

#[tokio::test]
async fn out_of_extent_bounds_are_clamped_before_aggregation() {
    let mut store = mock_with_extent();
    store
        .expect_temperature_summary()
        .withf(|start, end| *start == date!(2010 - 01 - 01) && *end == date!(2017 - 08 - 23))
        .times(1)
        .returning(|_, _| {
            Ok(Some(TemperatureSummary {
                minimum: 53.0,
                average: 73.1,
                maximum: 87.0,
            }))
        });
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, _) = test_app.get("/api/v1.0/2001-01-01/2030-12-31").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn empty_range_reports_no_data() {
    let mut store = mock_with_extent();
    store
        .expect_temperature_summary()
        .times(1)
        .returning(|_, _| Ok(None));
    let test_app = spawn_app(Arc::new(store)).await;

    let (status, body) = test_app.get("/api/v1.0/2012-01-01/2012-12-31").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        "No temperature observations recorded between 2012-01-01 and 2012-12-31."
    );
}

#[tokio::test]
async fn empty_dataset_is_service_unavailable() {
    let mut store = MockObservationAccess::new();
    store.expect_date_extent().returning(|| Ok(None));
    store.expect_temperature_summary().times(0);
    let test_app = spawn_app(Arc::new(store)).await;

    for uri in ["/api/v1.0/2016-08-23", "/api/v1.0/2016-08-23/2017-08-23"] {
        let (status, body) = test_app.get(uri).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{}", uri);
        assert!(body.contains("empty"));
    }
}
