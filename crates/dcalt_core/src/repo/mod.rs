//! Repository contracts and SQLite implementations.
//!
//! # Responsibility
//! - Define the storage capability the services are given.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Read paths reject corrupt persisted state instead of masking it.

use crate::db::DbError;
use crate::recents::ValueKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod recents_repo;
pub mod settings_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for settings and recents storage.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    /// A value type was used with a slot holding a different kind.
    KindMismatch {
        slot: &'static str,
        expected: ValueKind,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::KindMismatch { slot, expected } => {
                write!(f, "slot `{slot}` holds {expected:?} values")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) | Self::KindMismatch { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
