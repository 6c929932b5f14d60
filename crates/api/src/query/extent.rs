use log::debug;

use super::QueryError;
use crate::db::{DateExtent, ObservationStore};

/// Earliest and latest dates with data, read fresh from the store on every call.
pub async fn resolve_extent(store: &dyn ObservationStore) -> Result<DateExtent, QueryError> {
    let extent = store
        .date_extent()
        .await?
        .ok_or(QueryError::EmptyDataset)?;
    debug!("dataset spans {} to {}", extent.earliest, extent.latest);
    Ok(extent)
}
