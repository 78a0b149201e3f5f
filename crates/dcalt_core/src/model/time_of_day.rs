//! Day-start time-of-day value.
//!
//! # Responsibility
//! - Represent the hour/minute at which the user's day begins.
//! - Parse and render the `HH:MM` wire form used by settings storage.
//!
//! # Invariants
//! - `hour` is always within `0..=23`, `minute` within `0..=59`.
//! - Values are immutable once constructed.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static TIME_OF_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid time-of-day regex"));

/// Default hour at which a new subjective day begins.
pub const DEFAULT_DAY_START_HOUR: u8 = 3;
/// Default minute at which a new subjective day begins.
pub const DEFAULT_DAY_START_MINUTE: u8 = 0;

/// Validation errors for [`TimeOfDay`] construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeOfDayError {
    /// Hour is outside `0..=23`.
    HourOutOfRange(u32),
    /// Minute is outside `0..=59`.
    MinuteOutOfRange(u32),
    /// Input text is not of the form `HH:MM`.
    Malformed(String),
}

impl Display for TimeOfDayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HourOutOfRange(hour) => write!(f, "hour {hour} is outside 0..=23"),
            Self::MinuteOutOfRange(minute) => write!(f, "minute {minute} is outside 0..=59"),
            Self::Malformed(value) => write!(f, "expected HH:MM, got `{value}`"),
        }
    }
}

impl Error for TimeOfDayError {}

/// Hour and minute marking the start of a user's day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight; with this day start the subjective day equals the calendar day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Creates a validated time of day.
    ///
    /// # Errors
    /// - `HourOutOfRange` when `hour > 23`.
    /// - `MinuteOutOfRange` when `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeOfDayError> {
        if hour > 23 {
            return Err(TimeOfDayError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeOfDayError::MinuteOutOfRange(minute));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns this value as a wall-clock time with zero seconds.
    pub fn as_naive_time(&self) -> NaiveTime {
        // Fields are range-checked on construction, so this never falls back.
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self {
            hour: DEFAULT_DAY_START_HOUR,
            minute: DEFAULT_DAY_START_MINUTE,
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let captures = TIME_OF_DAY_RE
            .captures(trimmed)
            .ok_or_else(|| TimeOfDayError::Malformed(trimmed.to_string()))?;
        let hour = captures[1]
            .parse::<u32>()
            .map_err(|_| TimeOfDayError::Malformed(trimmed.to_string()))?;
        let minute = captures[2]
            .parse::<u32>()
            .map_err(|_| TimeOfDayError::Malformed(trimmed.to_string()))?;
        Self::new(hour, minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
