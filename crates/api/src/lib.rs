pub mod db;
pub mod query;
pub mod routes;
mod startup;
pub mod templates;
mod utils;

pub use db::{
    DateExtent, Observation, ObservationStore, PrecipitationReading, SqliteStore, Station,
    TemperatureReading, TemperatureSummary,
};
pub use query::{DateRangeQuery, EffectiveRange, QueryError, SummaryOutcome};
pub use routes::index_handler;
pub use startup::*;
pub use utils::*;
