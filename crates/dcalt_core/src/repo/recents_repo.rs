//! Recents list storage.
//!
//! # Responsibility
//! - Load and store one encoded list per `(slot, owner)` key.
//!
//! # Invariants
//! - Lists are stored as JSON arrays of numbers, in list order.
//! - Shared lists use an empty owner column.

use super::{RepoError, RepoResult};
use crate::recents::RecentsKey;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// Storage capability for recents lists.
pub trait RecentsRepository {
    /// Returns the stored list, or `None` when nothing was ever stored.
    fn load_values(&self, key: &RecentsKey) -> RepoResult<Option<Vec<f64>>>;
    /// Replaces the stored list.
    fn save_values(&self, key: &RecentsKey, values: &[f64]) -> RepoResult<()>;
    /// Removes the stored list; returns whether one existed.
    fn clear(&self, key: &RecentsKey) -> RepoResult<bool>;
}

/// SQLite-backed recents repository.
pub struct SqliteRecentsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecentsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RecentsRepository for SqliteRecentsRepository<'_> {
    fn load_values(&self, key: &RecentsKey) -> RepoResult<Option<Vec<f64>>> {
        let encoded: Option<String> = self
            .conn
            .query_row(
                "SELECT values_json FROM recents WHERE slot = ?1 AND owner = ?2;",
                params![key.slot.storage_key(), owner_column(key)],
                |row| row.get(0),
            )
            .optional()?;

        let Some(encoded) = encoded else {
            return Ok(None);
        };

        let values = serde_json::from_str::<Vec<f64>>(&encoded).map_err(|err| {
            RepoError::InvalidData(format!(
                "recents.values_json for `{}` is not a number array: {err}",
                key.slot.storage_key()
            ))
        })?;
        Ok(Some(values))
    }

    fn save_values(&self, key: &RecentsKey, values: &[f64]) -> RepoResult<()> {
        let encoded = serde_json::to_string(values).map_err(|err| {
            RepoError::InvalidData(format!("cannot encode recents list: {err}"))
        })?;

        self.conn.execute(
            "INSERT INTO recents (slot, owner, values_json)
             VALUES (?1, ?2, ?3)
             ON CONFLICT (slot, owner) DO UPDATE SET
                values_json = excluded.values_json,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key.slot.storage_key(), owner_column(key), encoded],
        )?;

        debug!(
            "event=recents_save module=repo status=ok slot={} count={}",
            key.slot.storage_key(),
            values.len()
        );
        Ok(())
    }

    fn clear(&self, key: &RecentsKey) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "DELETE FROM recents WHERE slot = ?1 AND owner = ?2;",
            params![key.slot.storage_key(), owner_column(key)],
        )?;
        Ok(changed > 0)
    }
}

fn owner_column(key: &RecentsKey) -> String {
    key.owner.map(|owner| owner.to_string()).unwrap_or_default()
}
