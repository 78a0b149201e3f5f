//! Logic core for the daily calorie tracker.
//!
//! Resolves which day a log entry belongs to, keeps recently used values
//! for quick re-entry, and saturates stepper input into valid ranges.

pub mod day;
pub mod db;
pub mod logging;
pub mod model;
pub mod progress;
pub mod range;
pub mod recents;
pub mod repo;
pub mod service;

pub use day::{resolve, resolve_at, split_to_local, subjective_today, DayError, DayResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::settings::{AppSettings, DEFAULT_TARGET_CALORIES};
pub use model::subjective_date::SubjectiveDate;
pub use model::time_of_day::{TimeOfDay, TimeOfDayError};
pub use progress::ProgressFormat;
pub use range::{clamp, ValueRange};
pub use recents::{bounded, update_mru, FormFactor, RecentValue, RecentsKey, RecentsSlot};
pub use repo::recents_repo::{RecentsRepository, SqliteRecentsRepository};
pub use repo::settings_repo::{SettingsRepository, SqliteSettingsRepository};
pub use repo::{RepoError, RepoResult};
pub use service::day_service::{DayService, DayServiceError};
pub use service::recents_service::RecentsService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
