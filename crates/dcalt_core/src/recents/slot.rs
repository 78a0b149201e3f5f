//! Named recents lists and their per-form-factor policy.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Quick-log amount offered when a category has no usable last value.
pub const DEFAULT_QUICK_LOG_CALORIES: i16 = 150;

const QUICK_LOG_SEED: &[f64] = &[25.0, 50.0, 100.0, 150.0, 200.0, 400.0, 600.0, 800.0];
const SERVING_CALORIES_DEFAULT: &[f64] = &[100.0, 200.0, 400.0, 800.0];
const SERVING_WEIGHT_DEFAULT: &[f64] = &[10.0, 50.0, 100.0, 200.0];

/// Device class; sets how many presets fit on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormFactor {
    Watch,
    Phone,
}

/// Numeric kind of the values a slot stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Integer,
    Decimal,
}

/// One screen's list of recently entered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecentsSlot {
    /// Calories quick-logged against a category (integer).
    QuickLogCalories,
    /// Calories entered on a serving (integer).
    ServingCalories,
    /// Serving weight in grams (floating point).
    ServingWeight,
    /// Serving volume in millilitres (floating point).
    ServingVolume,
}

impl RecentsSlot {
    /// Stable key under which the slot's lists are stored.
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::QuickLogCalories => "quick-log-recents",
            Self::ServingCalories => "serving-calorie-recents",
            Self::ServingWeight => "serving-weight-recents",
            Self::ServingVolume => "serving-volume-recents",
        }
    }

    pub fn from_storage_key(key: &str) -> Option<Self> {
        [
            Self::QuickLogCalories,
            Self::ServingCalories,
            Self::ServingWeight,
            Self::ServingVolume,
        ]
        .into_iter()
        .find(|slot| slot.storage_key() == key)
    }

    /// Maximum number of values kept and shown.
    pub fn max_count(self, form_factor: FormFactor) -> usize {
        match (self, form_factor) {
            (_, FormFactor::Watch) => 4,
            (Self::QuickLogCalories, FormFactor::Phone) => 12,
            (_, FormFactor::Phone) => 8,
        }
    }

    /// List read back when nothing has been stored for the slot.
    pub fn default_values(self) -> &'static [f64] {
        match self {
            Self::ServingCalories => SERVING_CALORIES_DEFAULT,
            Self::ServingWeight => SERVING_WEIGHT_DEFAULT,
            Self::QuickLogCalories | Self::ServingVolume => &[],
        }
    }

    /// Presets inserted, in order, the first time a slot is shown empty.
    ///
    /// Only quick log is seeded; the other slots read back their defaults.
    pub fn seed_values(self) -> &'static [f64] {
        match self {
            Self::QuickLogCalories => QUICK_LOG_SEED,
            Self::ServingCalories | Self::ServingWeight | Self::ServingVolume => &[],
        }
    }

    /// Kind of value the slot holds.
    pub fn value_kind(self) -> ValueKind {
        match self {
            Self::QuickLogCalories | Self::ServingCalories => ValueKind::Integer,
            Self::ServingWeight | Self::ServingVolume => ValueKind::Decimal,
        }
    }
}

/// Identifies one stored list: a slot plus an optional owner.
///
/// Quick-log lists are owned by a category; serving lists are shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecentsKey {
    pub slot: RecentsSlot,
    pub owner: Option<Uuid>,
}

impl RecentsKey {
    pub fn shared(slot: RecentsSlot) -> Self {
        Self { slot, owner: None }
    }

    pub fn quick_log(category_id: Uuid) -> Self {
        Self {
            slot: RecentsSlot::QuickLogCalories,
            owner: Some(category_id),
        }
    }
}

/// Starting amount for a quick log: the last logged value, or the default.
pub fn initial_quick_log_calories(last_calories: Option<i16>) -> i16 {
    match last_calories {
        Some(value) if value > 0 => value,
        _ => DEFAULT_QUICK_LOG_CALORIES,
    }
}
