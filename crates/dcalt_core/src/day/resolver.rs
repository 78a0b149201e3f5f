//! Day-start aware splitting of timestamps.

use super::{DayError, DayResult};
use crate::model::subjective_date::{SubjectiveDate, DAY_KEY_FORMAT, TIME_KEY_FORMAT};
use crate::model::time_of_day::TimeOfDay;
use chrono::{DateTime, Local, Months, NaiveDateTime, TimeZone};

/// Age after which log records fall out of retention.
pub const RETENTION_MONTHS: u32 = 12;

/// Resolves a local wall-clock timestamp to its subjective day.
///
/// When the local time is strictly earlier than `day_start`, the timestamp
/// belongs to the previous calendar day. `time_of_day` is always the literal
/// local time.
///
/// # Errors
/// - `InvalidInput` when the previous calendar day is not representable.
pub fn resolve(local: NaiveDateTime, day_start: TimeOfDay) -> DayResult<SubjectiveDate> {
    let calendar_day = local.date();
    let day = if local.time() < day_start.as_naive_time() {
        calendar_day.pred_opt().ok_or_else(|| {
            DayError::InvalidInput(format!("no calendar day precedes {calendar_day}"))
        })?
    } else {
        calendar_day
    };

    Ok(SubjectiveDate {
        day: day.format(DAY_KEY_FORMAT).to_string(),
        time_of_day: local.time().format(TIME_KEY_FORMAT).to_string(),
    })
}

/// Resolves an instant using the wall clock of its own time zone.
pub fn resolve_at<Tz: TimeZone>(
    instant: &DateTime<Tz>,
    day_start: TimeOfDay,
) -> DayResult<SubjectiveDate> {
    resolve(instant.naive_local(), day_start)
}

/// Resolves a persisted epoch-milliseconds timestamp in the given zone.
///
/// # Errors
/// - `InvalidInput` when `epoch_ms` is outside the supported calendar range.
pub fn resolve_epoch_ms<Tz: TimeZone>(
    epoch_ms: i64,
    tz: &Tz,
    day_start: TimeOfDay,
) -> DayResult<SubjectiveDate> {
    let utc = DateTime::from_timestamp_millis(epoch_ms).ok_or_else(|| {
        DayError::InvalidInput(format!("epoch_ms {epoch_ms} is out of calendar range"))
    })?;
    resolve_at(&utc.with_timezone(tz), day_start)
}

/// Splits an instant into its literal calendar day and time, with no rollback.
pub fn split_to_local<Tz: TimeZone>(instant: &DateTime<Tz>) -> DayResult<SubjectiveDate> {
    resolve_at(instant, TimeOfDay::MIDNIGHT)
}

/// Subjective day for the current local time.
pub fn subjective_today(day_start: TimeOfDay) -> DayResult<SubjectiveDate> {
    resolve_at(&Local::now(), day_start)
}

/// Calendar day `RETENTION_MONTHS` before `now`; older days are expired.
///
/// # Errors
/// - `InvalidInput` when subtracting the retention window underflows.
pub fn retention_cutoff_day<Tz: TimeZone>(now: &DateTime<Tz>) -> DayResult<String> {
    let local = now.naive_local();
    let keep_since = local
        .checked_sub_months(Months::new(RETENTION_MONTHS))
        .ok_or_else(|| {
            DayError::InvalidInput(format!(
                "cannot go back {RETENTION_MONTHS} months from {local}"
            ))
        })?;
    Ok(resolve(keep_since, TimeOfDay::MIDNIGHT)?.day)
}

/// Whether `day` sorts strictly before `cutoff_day`.
pub fn is_before_cutoff(day: &str, cutoff_day: &str) -> bool {
    day < cutoff_day
}
