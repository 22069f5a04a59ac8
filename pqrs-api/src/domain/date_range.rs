use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive calendar-date window over the complaint filing date.
///
/// Either bound may be absent for an open-ended range. Days are evaluated in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self { start_date, end_date }
    }

    /// Range that selects every complaint
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_unbounded(&self) -> bool {
        self.start_date.is_none() && self.end_date.is_none()
    }

    /// Start of day of `start_date`
    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.start_date
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    /// Last instant of `end_date`
    pub fn upper_bound(&self) -> Option<DateTime<Utc>> {
        self.end_date
            .and_then(|d| d.and_hms_nano_opt(23, 59, 59, 999_999_999))
            .map(|naive| Utc.from_utc_datetime(&naive))
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let after_start = self.lower_bound().map_or(true, |start| instant >= start);
        let before_end = self.upper_bound().map_or(true, |end| instant <= end);
        after_start && before_end
    }
}
