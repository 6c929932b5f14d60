//! Date-range queries over the observation store.
//!
//! Every operation resolves the dataset's current [`db::DateExtent`] first, so an empty
//! store is reported as [`QueryError::EmptyDataset`] instead of an empty success.

mod extent;
mod range;
mod series;
mod summary;

pub use extent::resolve_extent;
pub use range::{parse_date, DateRangeQuery, EffectiveRange};
pub use series::{last_year_temperatures, precipitation_series, station_names, YEAR_WINDOW_DAYS};
pub use summary::{aggregate, temperature_summary, SummaryOutcome};

use time::Date;

use crate::db;

#[derive(thiserror::Error, Debug)]
pub enum QueryError {
    #[error("The observation dataset is empty; no date range is available")]
    EmptyDataset,
    #[error(
        "No data available at or after start date {start}. The most recent observation is {latest}."
    )]
    StartAfterLatest { start: Date, latest: Date },
    #[error(
        "No data available at or before end date {end}. The earliest observation is {earliest}."
    )]
    EndBeforeEarliest { end: Date, earliest: Date },
    #[error("Start date {start} must not be after end date {end}.")]
    InvertedRange { start: Date, end: Date },
    #[error("Invalid date '{input}', expected YYYY-MM-DD: {source}")]
    DateParse {
        input: String,
        #[source]
        source: time::error::Parse,
    },
    #[error(transparent)]
    Store(#[from] db::Error),
}

impl QueryError {
    /// True for inputs that fall outside the semantic range of the dataset.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            QueryError::StartAfterLatest { .. }
                | QueryError::EndBeforeEarliest { .. }
                | QueryError::InvertedRange { .. }
        )
    }

    /// The dataset boundary a rejection was checked against, if any.
    pub fn boundary(&self) -> Option<Date> {
        match self {
            QueryError::StartAfterLatest { latest, .. } => Some(*latest),
            QueryError::EndBeforeEarliest { earliest, .. } => Some(*earliest),
            _ => None,
        }
    }
}
