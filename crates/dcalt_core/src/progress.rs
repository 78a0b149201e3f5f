//! Rendering of today's calories against the daily target.
//!
//! # Responsibility
//! - Format progress text for each display mode.
//! - Define the tap-to-cycle order of display modes.

use serde::{Deserialize, Serialize};

const CALORIE_SUFFIX: &str = " cal";

/// Display mode for progress toward the daily target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressFormat {
    CaloriesOnly,
    PercentOnly,
    CaloriesPercent,
    #[default]
    PercentCalories,
    CaloriesTarget,
    Remaining,
}

impl ProgressFormat {
    /// All formats in cycle order.
    pub const ALL: [ProgressFormat; 6] = [
        Self::CaloriesOnly,
        Self::PercentOnly,
        Self::CaloriesPercent,
        Self::PercentCalories,
        Self::CaloriesTarget,
        Self::Remaining,
    ];

    /// Stable numeric code used by settings storage.
    pub fn code(self) -> i64 {
        match self {
            Self::CaloriesOnly => 0,
            Self::PercentOnly => 1,
            Self::CaloriesPercent => 2,
            Self::PercentCalories => 3,
            Self::CaloriesTarget => 4,
            Self::Remaining => 5,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.code() == code)
    }

    /// Next format in the cycle, wrapping after `Remaining`.
    pub fn next(self) -> Self {
        match self {
            Self::CaloriesOnly => Self::PercentOnly,
            Self::PercentOnly => Self::CaloriesPercent,
            Self::CaloriesPercent => Self::PercentCalories,
            Self::PercentCalories => Self::CaloriesTarget,
            Self::CaloriesTarget => Self::Remaining,
            Self::Remaining => Self::CaloriesOnly,
        }
    }

    /// Renders progress text.
    ///
    /// `compact` drops the calorie unit where a watch display has no room.
    pub fn render(self, calories: i16, target_calories: i16, compact: bool) -> String {
        let percent = percent_text(calories, target_calories);
        let suffix = if compact { "" } else { CALORIE_SUFFIX };

        match self {
            Self::CaloriesOnly => format!("{calories}{CALORIE_SUFFIX}"),
            Self::PercentOnly => percent,
            Self::CaloriesPercent => format!("{calories}{suffix} ({percent})"),
            Self::PercentCalories => format!("{percent} ({calories}{suffix})"),
            Self::CaloriesTarget => format!("{calories}/{target_calories}{suffix}"),
            Self::Remaining => {
                let remaining = i32::from(target_calories) - i32::from(calories);
                if remaining >= 0 {
                    let label = if compact { "remain" } else { "remaining" };
                    format!("{remaining} {label}")
                } else {
                    format!("Over by {}", -remaining)
                }
            }
        }
    }
}

/// Whether consumed calories exceed the target.
pub fn is_over(calories: i16, target_calories: i16) -> bool {
    calories > target_calories
}

fn percent_text(calories: i16, target_calories: i16) -> String {
    if target_calories <= 0 {
        return String::new();
    }
    let percent = 100.0 * f32::from(calories) / f32::from(target_calories);
    format!("{percent:.0}%")
}
