use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An academic term bounding the date range within which its tasks live.
///
/// Serialized form (preference snapshots) keeps dates as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: i64,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Semester {
    /// Whether the given calendar date falls within this term, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
