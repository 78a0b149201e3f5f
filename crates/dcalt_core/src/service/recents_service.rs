//! Recents use-case service.
//!
//! # Responsibility
//! - Run the load, transform, store cycle around `update_mru`.
//! - Apply per-slot capacity, defaults and seed presets.
//!
//! # Invariants
//! - Lists read through this service never exceed the slot capacity.
//! - Zero values are never recorded.
//! - A slot is only read and written with its own value kind.

use crate::recents::{bounded, update_mru, FormFactor, RecentValue, RecentsKey};
use crate::repo::recents_repo::RecentsRepository;
use crate::repo::{RepoError, RepoResult};
use log::{debug, warn};

/// Recents service over an injected storage capability.
pub struct RecentsService<R: RecentsRepository> {
    repo: R,
    form_factor: FormFactor,
}

impl<R: RecentsRepository> RecentsService<R> {
    pub fn new(repo: R, form_factor: FormFactor) -> Self {
        Self { repo, form_factor }
    }

    pub fn form_factor(&self) -> FormFactor {
        self.form_factor
    }

    /// Returns the list for `key`, most recent first.
    ///
    /// Falls back to the slot's default list when nothing is stored. Stored
    /// values that do not fit `T` are skipped.
    ///
    /// # Errors
    /// - `KindMismatch` when `T` is not the slot's value kind.
    pub fn recents<T: RecentValue>(&self, key: &RecentsKey) -> RepoResult<Vec<T>> {
        ensure_kind::<T>(key)?;
        let max_count = key.slot.max_count(self.form_factor);
        let values = self.load_decoded::<T>(key)?;
        Ok(bounded(&values, max_count).to_vec())
    }

    /// Records `value` as most recently used and returns the updated list.
    pub fn record<T: RecentValue>(&self, key: &RecentsKey, value: T) -> RepoResult<Vec<T>> {
        ensure_kind::<T>(key)?;
        if value.is_zero() || !value.is_recordable() {
            debug!(
                "event=recents_record module=service status=skipped slot={}",
                key.slot.storage_key()
            );
            return self.recents(key);
        }

        let max_count = key.slot.max_count(self.form_factor);
        let current = self.load_decoded::<T>(key)?;
        let updated = update_mru(&current, value, max_count);
        self.store(key, &updated)?;
        Ok(updated)
    }

    /// Records the slot's seed presets, in order, when `key` has no values.
    ///
    /// The last preset ends up first. Returns whether anything was written.
    pub fn seed_if_empty<T: RecentValue>(&self, key: &RecentsKey) -> RepoResult<bool> {
        ensure_kind::<T>(key)?;
        let has_values = self
            .repo
            .load_values(key)?
            .is_some_and(|values| !values.is_empty());
        if has_values {
            return Ok(false);
        }

        let max_count = key.slot.max_count(self.form_factor);
        let seeded = key
            .slot
            .seed_values()
            .iter()
            .filter_map(|value| T::from_stored(*value))
            .fold(Vec::new(), |list, value| update_mru(&list, value, max_count));
        if seeded.is_empty() {
            return Ok(false);
        }

        self.store(key, &seeded)?;
        Ok(true)
    }

    /// Forgets the list stored for `key`.
    pub fn clear(&self, key: &RecentsKey) -> RepoResult<bool> {
        self.repo.clear(key)
    }

    fn load_decoded<T: RecentValue>(&self, key: &RecentsKey) -> RepoResult<Vec<T>> {
        let stored = self.repo.load_values(key)?;
        let raw = stored.unwrap_or_else(|| key.slot.default_values().to_vec());

        let decoded: Vec<T> = raw.iter().filter_map(|value| T::from_stored(*value)).collect();
        if decoded.len() != raw.len() {
            warn!(
                "event=recents_load module=service status=partial slot={} skipped={}",
                key.slot.storage_key(),
                raw.len() - decoded.len()
            );
        }
        Ok(decoded)
    }

    fn store<T: RecentValue>(&self, key: &RecentsKey, values: &[T]) -> RepoResult<()> {
        let encoded: Vec<f64> = values.iter().map(|value| value.to_stored()).collect();
        self.repo.save_values(key, &encoded)
    }
}

fn ensure_kind<T: RecentValue>(key: &RecentsKey) -> RepoResult<()> {
    let expected = key.slot.value_kind();
    if T::KIND != expected {
        return Err(RepoError::KindMismatch {
            slot: key.slot.storage_key(),
            expected,
        });
    }
    Ok(())
}
