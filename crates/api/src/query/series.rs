use std::collections::HashSet;

use time::Duration;

use super::{resolve_extent, EffectiveRange, QueryError};
use crate::db::{ObservationStore, PrecipitationReading, TemperatureReading};

/// Length of the trailing temperature window. Fixed, not calendar-year aware.
pub const YEAR_WINDOW_DAYS: i64 = 365;

/// Every station's precipitation reading, one entry per station per date.
pub async fn precipitation_series(
    store: &dyn ObservationStore,
) -> Result<Vec<PrecipitationReading>, QueryError> {
    resolve_extent(store).await?;
    Ok(store.precipitation().await?)
}

/// Distinct station names in store order.
pub async fn station_names(store: &dyn ObservationStore) -> Result<Vec<String>, QueryError> {
    resolve_extent(store).await?;
    let mut seen = HashSet::new();
    Ok(store
        .stations()
        .await?
        .into_iter()
        .map(|station| station.name)
        .filter(|name| seen.insert(name.clone()))
        .collect())
}

/// Temperature readings from the 365 days ending at the last recorded date, inclusive.
pub async fn last_year_temperatures(
    store: &dyn ObservationStore,
) -> Result<(EffectiveRange, Vec<TemperatureReading>), QueryError> {
    let extent = resolve_extent(store).await?;
    let query_date = extent.latest;
    let year_ago = query_date.saturating_sub(Duration::days(YEAR_WINDOW_DAYS));
    let range = EffectiveRange {
        start: year_ago,
        end: query_date,
    };
    let readings = store.temperatures(range.start, range.end).await?;
    Ok((range, readings))
}
