//! Subjective day use-case service.
//!
//! # Responsibility
//! - Resolve timestamps with the day start read from settings, so every
//!   caller goes through one entry point.

use crate::day::{self, DayError};
use crate::model::subjective_date::SubjectiveDate;
use crate::repo::settings_repo::SettingsRepository;
use crate::repo::RepoError;
use chrono::{DateTime, Local, TimeZone};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for day resolution that needs stored settings.
#[derive(Debug)]
pub enum DayServiceError {
    Repo(RepoError),
    Day(DayError),
}

impl Display for DayServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Day(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DayServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Day(err) => Some(err),
        }
    }
}

impl From<RepoError> for DayServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DayError> for DayServiceError {
    fn from(value: DayError) -> Self {
        Self::Day(value)
    }
}

pub type DayServiceResult<T> = Result<T, DayServiceError>;

/// Resolves days using the configured day start.
pub struct DayService<S: SettingsRepository> {
    settings: S,
}

impl<S: SettingsRepository> DayService<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    /// Subjective day of `instant` under the stored day start.
    pub fn resolve_at<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
    ) -> DayServiceResult<SubjectiveDate> {
        let day_start = self.settings.load_settings()?.day_start;
        Ok(day::resolve_at(instant, day_start)?)
    }

    /// Subjective day for the current local time.
    pub fn subjective_today(&self) -> DayServiceResult<SubjectiveDate> {
        self.resolve_at(&Local::now())
    }
}
