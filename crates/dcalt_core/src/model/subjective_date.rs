//! Subjective day/time pair derived from a timestamp.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Format of [`SubjectiveDate::day`]; lexicographic order equals date order.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";
/// Format of [`SubjectiveDate::time_of_day`].
pub const TIME_KEY_FORMAT: &str = "%H:%M:%S";

/// The subjective day a timestamp belongs to, plus its literal local time.
///
/// Derived `Ord` compares `day` first and then `time_of_day`, which matches
/// chronological order within one time zone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubjectiveDate {
    /// Subjective calendar day as `YYYY-MM-DD`.
    pub day: String,
    /// Local wall-clock time as `HH:MM:SS`, never rolled back.
    pub time_of_day: String,
}

impl SubjectiveDate {
    /// Parses `day` back into a calendar date.
    ///
    /// Returns `None` when `day` was not produced by this crate.
    pub fn day_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.day, DAY_KEY_FORMAT).ok()
    }
}
