use anyhow::Context;
use async_trait::async_trait;
use log::{debug, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::{str::FromStr, time::Duration};
use time::Date;

use super::{
    DateExtent, Error, ObservationStore, PrecipitationReading, Station, TemperatureReading,
    TemperatureSummary,
};

/// Observation store backed by the `measurement` and `station` tables of a sqlite file.
///
/// The file is opened read-only; the pool hands out connections to concurrent requests.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn new(path: &str, max_connections: u32) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .read_only(true)
            .create_if_missing(false)
            .pragma("busy_timeout", "5000")
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "MEMORY");

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to open observation database: {}", path))?;

        info!("Observation database opened read-only at: {}", path);
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ObservationStore for SqliteStore {
    async fn date_extent(&self) -> Result<Option<DateExtent>, Error> {
        let (earliest, latest): (Option<Date>, Option<Date>) =
            sqlx::query_as("SELECT MIN(date), MAX(date) FROM measurement")
                .fetch_one(&self.pool)
                .await?;

        let extent = match (earliest, latest) {
            (Some(earliest), Some(latest)) => Some(DateExtent { earliest, latest }),
            _ => None,
        };
        debug!("resolved date extent: {:?}", extent);
        Ok(extent)
    }

    async fn precipitation(&self) -> Result<Vec<PrecipitationReading>, Error> {
        let readings = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, station, prcp FROM measurement ORDER BY date, station",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(readings)
    }

    async fn stations(&self) -> Result<Vec<Station>, Error> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT station, name, latitude, longitude, elevation FROM station",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(stations)
    }

    async fn temperatures(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Vec<TemperatureReading>, Error> {
        let readings = sqlx::query_as::<_, TemperatureReading>(
            "SELECT date, station, tobs FROM measurement
             WHERE date >= ? AND date <= ? AND tobs IS NOT NULL
             ORDER BY date, station",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;
        Ok(readings)
    }

    async fn temperature_summary(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Option<TemperatureSummary>, Error> {
        let row: (i64, Option<f64>, Option<f64>, Option<f64>) = sqlx::query_as(
            "SELECT COUNT(tobs), MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement
             WHERE date >= ? AND date <= ?",
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        let summary = match row {
            (count, Some(minimum), Some(average), Some(maximum)) if count > 0 => {
                Some(TemperatureSummary {
                    minimum,
                    average,
                    maximum,
                })
            }
            _ => None,
        };
        Ok(summary)
    }

    async fn health_check(&self) -> Result<(), Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
