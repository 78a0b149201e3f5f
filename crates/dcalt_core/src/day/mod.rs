//! Subjective day resolution.
//!
//! # Responsibility
//! - Attribute timestamps to the day the user experiences, honoring the
//!   configured day start.
//! - Provide the one calendar split every caller uses.
//!
//! # Invariants
//! - Resolution is a pure function of its inputs.
//! - The day start comparison is strict: a timestamp equal to the day start
//!   belongs to the new day.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod resolver;

pub use resolver::{
    is_before_cutoff, resolve, resolve_at, resolve_epoch_ms, retention_cutoff_day,
    split_to_local, subjective_today, RETENTION_MONTHS,
};

pub type DayResult<T> = Result<T, DayError>;

/// Error raised when a timestamp cannot be decomposed into calendar parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayError {
    InvalidInput(String),
}

impl Display for DayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(details) => write!(f, "invalid timestamp: {details}"),
        }
    }
}

impl Error for DayError {}
