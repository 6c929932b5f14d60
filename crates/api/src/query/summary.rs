use log::{debug, info};

use super::{resolve_extent, DateRangeQuery, EffectiveRange, QueryError};
use crate::db::{ObservationStore, TemperatureSummary};

/// Result of a temperature summary once the range has passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryOutcome {
    Summary {
        range: EffectiveRange,
        summary: TemperatureSummary,
    },
    /// The validated range held no temperature readings.
    NoData { range: EffectiveRange },
}

/// Min/avg/max temperature over an already validated, inclusive range.
pub async fn aggregate(
    store: &dyn ObservationStore,
    range: EffectiveRange,
) -> Result<Option<TemperatureSummary>, QueryError> {
    Ok(store.temperature_summary(range.start, range.end).await?)
}

/// Parses, validates and clamps the caller's bounds, then aggregates over them.
///
/// `end` of `None` means "through the last recorded date".
pub async fn temperature_summary(
    store: &dyn ObservationStore,
    start: &str,
    end: Option<&str>,
) -> Result<SummaryOutcome, QueryError> {
    let query = DateRangeQuery::parse(Some(start), end)?;
    let extent = resolve_extent(store).await?;
    let range = query.clamp_to(&extent)?;
    debug!(
        "requested {:?}..{:?}, effective {}..{}",
        query.start, query.end, range.start, range.end
    );

    match aggregate(store, range).await? {
        Some(summary) => {
            info!(
                "temperature summary for {} to {}: {}",
                range.start, range.end, summary
            );
            Ok(SummaryOutcome::Summary { range, summary })
        }
        None => Ok(SummaryOutcome::NoData { range }),
    }
}
