//! Bounded most-recently-used value lists.
//!
//! # Responsibility
//! - Transform recents lists (`update_mru`) and clamp them on read (`bounded`).
//! - Describe the named slots the UI keeps lists for.
//!
//! # Invariants
//! - A list returned by `update_mru` holds at most `max_count` values.
//! - No value appears twice; the newest value is first.

mod mru;
mod slot;

pub use mru::{bounded, update_mru, RecentValue};
pub use slot::{
    initial_quick_log_calories, FormFactor, RecentsKey, RecentsSlot, ValueKind,
    DEFAULT_QUICK_LOG_CALORIES,
};
