use time::{macros::format_description, Date};

use super::QueryError;
use crate::db::DateExtent;

/// Parses a caller supplied `YYYY-MM-DD` date. Never falls back to a default date.
pub fn parse_date(input: &str) -> Result<Date, QueryError> {
    Date::parse(input.trim(), format_description!("[year]-[month]-[day]")).map_err(|source| {
        QueryError::DateParse {
            input: input.to_owned(),
            source,
        }
    })
}

/// Optional caller bounds, before they are checked against the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRangeQuery {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

/// Inclusive range that is guaranteed to lie within the dataset's extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveRange {
    pub start: Date,
    pub end: Date,
}

impl DateRangeQuery {
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, QueryError> {
        Ok(Self {
            start: start.map(parse_date).transpose()?,
            end: end.map(parse_date).transpose()?,
        })
    }

    /// Checks the bounds against `extent` and clamps them into it.
    ///
    /// Rules apply in order and the first match wins: a start after the last recorded
    /// date, an end before the first recorded date, then an inverted range.
    pub fn clamp_to(&self, extent: &DateExtent) -> Result<EffectiveRange, QueryError> {
        if let Some(start) = self.start {
            if start > extent.latest {
                return Err(QueryError::StartAfterLatest {
                    start,
                    latest: extent.latest,
                });
            }
        }

        if let Some(end) = self.end {
            if end < extent.earliest {
                return Err(QueryError::EndBeforeEarliest {
                    end,
                    earliest: extent.earliest,
                });
            }
        }

        if let (Some(start), Some(end)) = (self.start, self.end) {
            if start > end {
                return Err(QueryError::InvertedRange { start, end });
            }
        }

        let range = EffectiveRange {
            start: self.start.unwrap_or(extent.earliest).max(extent.earliest),
            end: self.end.unwrap_or(extent.latest).min(extent.latest),
        };
        debug_assert!(extent.contains(range.start) && extent.contains(range.end));
        Ok(range)
    }
}
