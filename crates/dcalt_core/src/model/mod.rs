//! Domain values shared by the resolver, recents tracker and settings store.
//!
//! # Responsibility
//! - Define configuration values (`TimeOfDay`, `AppSettings`).
//! - Define derived values (`SubjectiveDate`) that are never persisted here.

pub mod settings;
pub mod subjective_date;
pub mod time_of_day;
