mod sqlite;

pub use sqlite::*;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::Date;
use utoipa::ToSchema;

// Dates travel as YYYY-MM-DD, the layout the dataset stores them in.
time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to query observation store: {0}")]
    Query(#[from] sqlx::Error),
}

/// Read-only access to the observation dataset.
///
/// Every range argument is inclusive on both ends.
#[async_trait]
pub trait ObservationStore: Send + Sync {
    /// Earliest and latest observation dates, `None` when the store holds no observations.
    async fn date_extent(&self) -> Result<Option<DateExtent>, Error>;
    /// Every observation's precipitation reading, ordered by date then station.
    async fn precipitation(&self) -> Result<Vec<PrecipitationReading>, Error>;
    async fn stations(&self) -> Result<Vec<Station>, Error>;
    /// Temperature readings dated within `start..=end`, ordered by date then station.
    async fn temperatures(&self, start: Date, end: Date)
        -> Result<Vec<TemperatureReading>, Error>;
    /// Min/avg/max temperature within `start..=end`, `None` when nothing matches.
    async fn temperature_summary(
        &self,
        start: Date,
        end: Date,
    ) -> Result<Option<TemperatureSummary>, Error>;
    async fn health_check(&self) -> Result<(), Error>;
}

/// A single daily reading from one station.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Observation {
    pub station_id: String,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    /// Precipitation in inches, absent when the station did not report it
    pub precipitation: Option<f64>,
    /// Observed temperature in degrees Fahrenheit
    pub temperature: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema, sqlx::FromRow)]
pub struct Station {
    #[sqlx(rename = "station")]
    pub station_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// First and last dates present in the dataset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct DateExtent {
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date)]
    pub earliest: Date,
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date)]
    pub latest: Date,
}

impl DateExtent {
    pub fn contains(&self, date: Date) -> bool {
        self.earliest <= date && date <= self.latest
    }
}

/// Precipitation reported by one station on one day.
///
/// Readings from different stations on the same date are kept as separate entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema, sqlx::FromRow)]
pub struct PrecipitationReading {
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    pub station: String,
    pub prcp: Option<f64>,
}

/// Temperature observed by one station on one day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema, sqlx::FromRow)]
pub struct TemperatureReading {
    #[serde(with = "iso_date")]
    #[schema(value_type = String, format = Date)]
    pub date: Date,
    pub station: String,
    pub tobs: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, ToSchema)]
pub struct TemperatureSummary {
    pub minimum: f64,
    pub average: f64,
    pub maximum: f64,
}

impl TemperatureSummary {
    /// `[minimum, average, maximum]`, the shape returned by the range endpoints.
    pub fn as_array(&self) -> [f64; 3] {
        [self.minimum, self.average, self.maximum]
    }
}

impl fmt::Display for TemperatureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min {:.2}, avg {:.2}, max {:.2}",
            self.minimum, self.average, self.maximum
        )
    }
}
