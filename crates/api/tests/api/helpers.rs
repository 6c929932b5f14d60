use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use climate_api::{
    app, db, AppState, DateExtent, Observation, ObservationStore, PrecipitationReading,
    SqliteStore, Station, TemperatureReading, TemperatureSummary,
};
use hyper::{header, Method};
use mockall::mock;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr, sync::Arc};
use time::{macros::date, Date};
use tower::ServiceExt;

mock! {
    pub ObservationAccess {}
    #[async_trait]
    impl ObservationStore for ObservationAccess {
        async fn date_extent(&self) -> Result<Option<DateExtent>, db::Error>;
        async fn precipitation(&self) -> Result<Vec<PrecipitationReading>, db::Error>;
        async fn stations(&self) -> Result<Vec<Station>, db::Error>;
        async fn temperatures(
            &self,
            start: Date,
            end: Date,
        ) -> Result<Vec<TemperatureReading>, db::Error>;
        async fn temperature_summary(
            &self,
            start: Date,
            end: Date,
        ) -> Result<Option<TemperatureSummary>, db::Error>;
        async fn health_check(&self) -> Result<(), db::Error>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(store: Arc<dyn ObservationStore>) -> TestApp {
    build_test_app(store, false)
}

pub async fn spawn_strict_app(store: Arc<dyn ObservationStore>) -> TestApp {
    build_test_app(store, true)
}

fn build_test_app(store: Arc<dyn ObservationStore>, strict_errors: bool) -> TestApp {
    let app_state = AppState {
        remote_url: String::from("http://127.0.0.1:5000"),
        strict_errors,
        store,
    };
    TestApp {
        app: app(app_state),
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "application/json")
            .body(Body::empty())
            .unwrap();

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

pub fn hawaii_extent() -> DateExtent {
    DateExtent {
        earliest: date!(2010 - 01 - 01),
        latest: date!(2017 - 08 - 23),
    }
}

pub fn mock_stations() -> Vec<Station> {
    vec![
        Station {
            station_id: String::from("USC00519397"),
            name: String::from("WAIKIKI 717.2, HI US"),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        },
        Station {
            station_id: String::from("USC00513117"),
            name: String::from("KANEOHE 838.1, HI US"),
            latitude: 21.4234,
            longitude: -157.8015,
            elevation: 14.6,
        },
        Station {
            station_id: String::from("USC00519281"),
            name: String::from("WAIHEE 837.5, HI US"),
            latitude: 21.45167,
            longitude: -157.84889,
            elevation: 32.9,
        },
    ]
}

fn observation(station: &str, date: Date, prcp: Option<f64>, tobs: f64) -> Observation {
    Observation {
        station_id: station.to_string(),
        date,
        precipitation: prcp,
        temperature: tobs,
    }
}

/// Sparse sample spanning 2010-01-01 to 2017-08-23 with same-day readings from
/// several stations and a gap between 2010 and 2016.
pub fn mock_observations() -> Vec<Observation> {
    vec![
        observation("USC00519397", date!(2010 - 01 - 01), Some(0.08), 65.0),
        observation("USC00513117", date!(2010 - 01 - 01), Some(0.28), 67.0),
        observation("USC00519397", date!(2016 - 08 - 22), Some(0.4), 78.0),
        observation("USC00513117", date!(2016 - 08 - 23), Some(0.15), 76.0),
        observation("USC00519397", date!(2016 - 08 - 23), Some(0.0), 81.0),
        observation("USC00519281", date!(2017 - 01 - 01), None, 72.0),
        observation("USC00519281", date!(2017 - 08 - 23), Some(0.45), 76.0),
        observation("USC00519397", date!(2017 - 08 - 23), Some(0.0), 81.0),
    ]
}

pub fn precipitation_reading(observation: &Observation) -> PrecipitationReading {
    PrecipitationReading {
        date: observation.date,
        station: observation.station_id.clone(),
        prcp: observation.precipitation,
    }
}

pub fn temperature_reading(observation: &Observation) -> TemperatureReading {
    TemperatureReading {
        date: observation.date,
        station: observation.station_id.clone(),
        tobs: observation.temperature,
    }
}

/// In-memory sqlite store laid out like the hawaii dataset.
pub async fn seeded_store(observations: &[Observation], stations: &[Station]) -> SqliteStore {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    // a single never-recycled connection keeps the in-memory database alive
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("Failed to open in-memory database");

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    for station in stations {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&station.station_id)
        .bind(&station.name)
        .bind(station.latitude)
        .bind(station.longitude)
        .bind(station.elevation)
        .execute(&pool)
        .await
        .unwrap();
    }

    for observation in observations {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(&observation.station_id)
            .bind(observation.date)
            .bind(observation.precipitation)
            .bind(observation.temperature)
            .execute(&pool)
            .await
            .unwrap();
    }

    SqliteStore::from_pool(pool)
}
