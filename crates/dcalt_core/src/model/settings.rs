//! User-editable application settings.
//!
//! # Invariants
//! - `target_calories` stays within `DAILY_TARGET_RANGE` once normalized.
//! - Missing persisted settings resolve to [`AppSettings::default`].

use crate::model::time_of_day::TimeOfDay;
use crate::progress::ProgressFormat;
use crate::range::DAILY_TARGET_RANGE;
use serde::{Deserialize, Serialize};

/// Daily calorie target used when the user has not picked one.
pub const DEFAULT_TARGET_CALORIES: i16 = 2000;

/// Settings the UI layer reads when logging and rendering progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub day_start: TimeOfDay,
    pub target_calories: i16,
    pub progress_format: ProgressFormat,
}

impl AppSettings {
    /// Returns a copy with `target_calories` clamped into the stepper range.
    pub fn normalized(mut self) -> Self {
        self.target_calories = DAILY_TARGET_RANGE.clamp(self.target_calories);
        self
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            day_start: TimeOfDay::default(),
            target_calories: DEFAULT_TARGET_CALORIES,
            progress_format: ProgressFormat::default(),
        }
    }
}
