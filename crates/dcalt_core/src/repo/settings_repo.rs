//! Application settings storage.
//!
//! # Invariants
//! - At most one settings row exists (`id = 1`).
//! - A missing row reads back as `AppSettings::default()`.
//! - Loaded settings are normalized the same way saved ones are.

use super::{RepoError, RepoResult};
use crate::model::settings::AppSettings;
use crate::model::time_of_day::TimeOfDay;
use crate::progress::ProgressFormat;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Storage capability for `AppSettings`.
pub trait SettingsRepository {
    fn load_settings(&self) -> RepoResult<AppSettings>;
    fn save_settings(&self, settings: &AppSettings) -> RepoResult<()>;
}

/// SQLite-backed settings repository.
pub struct SqliteSettingsRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSettingsRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SettingsRepository for SqliteSettingsRepository<'_> {
    fn load_settings(&self) -> RepoResult<AppSettings> {
        let mut stmt = self.conn.prepare(
            "SELECT day_start_hour, day_start_minute, target_calories, progress_format
             FROM app_settings
             WHERE id = 1;",
        )?;
        let row = stmt
            .query_row([], |row| Ok(parse_settings_row(row)))
            .optional()?;

        match row {
            Some(parsed) => parsed,
            None => {
                debug!("event=settings_load module=repo status=default");
                Ok(AppSettings::default())
            }
        }
    }

    fn save_settings(&self, settings: &AppSettings) -> RepoResult<()> {
        let normalized = settings.normalized();
        if normalized.target_calories != settings.target_calories {
            warn!(
                "event=settings_save module=repo status=clamped target_calories={} stored={}",
                settings.target_calories, normalized.target_calories
            );
        }

        self.conn.execute(
            "INSERT INTO app_settings (
                id,
                day_start_hour,
                day_start_minute,
                target_calories,
                progress_format
            ) VALUES (1, ?1, ?2, ?3, ?4)
            ON CONFLICT (id) DO UPDATE SET
                day_start_hour = excluded.day_start_hour,
                day_start_minute = excluded.day_start_minute,
                target_calories = excluded.target_calories,
                progress_format = excluded.progress_format,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                normalized.day_start.hour(),
                normalized.day_start.minute(),
                normalized.target_calories,
                normalized.progress_format.code(),
            ],
        )?;
        Ok(())
    }
}

fn parse_settings_row(row: &Row<'_>) -> RepoResult<AppSettings> {
    let hour: u32 = row.get("day_start_hour")?;
    let minute: u32 = row.get("day_start_minute")?;
    let day_start = TimeOfDay::new(hour, minute).map_err(|err| {
        RepoError::InvalidData(format!("invalid day start in app_settings: {err}"))
    })?;

    let format_code: i64 = row.get("progress_format")?;
    let progress_format = ProgressFormat::from_code(format_code).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid progress format `{format_code}` in app_settings.progress_format"
        ))
    })?;

    let target_raw: i64 = row.get("target_calories")?;
    let target_calories = i16::try_from(target_raw).map_err(|_| {
        RepoError::InvalidData(format!(
            "target calories `{target_raw}` in app_settings.target_calories is out of range"
        ))
    })?;

    Ok(AppSettings {
        day_start,
        target_calories,
        progress_format,
    }
    .normalized())
}
