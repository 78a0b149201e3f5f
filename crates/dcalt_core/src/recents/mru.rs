//! Most-recently-used list transforms.

use super::slot::ValueKind;

/// Value type that can be kept in a recents list.
///
/// Stored lists are encoded as `f64`, which is exact for `i16`, `i32`,
/// `f32` and `f64`. Wider integers are not supported.
pub trait RecentValue: Copy + PartialEq {
    /// Kind of slot this type may be stored in.
    const KIND: ValueKind;

    /// Whether the value may be inserted; NaN never is.
    fn is_recordable(&self) -> bool {
        true
    }

    fn is_zero(&self) -> bool;

    fn to_stored(self) -> f64;

    /// Decodes a stored value; `None` when it does not fit this type.
    fn from_stored(value: f64) -> Option<Self>;
}

macro_rules! impl_recent_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl RecentValue for $ty {
                const KIND: ValueKind = ValueKind::Integer;

                fn is_zero(&self) -> bool {
                    *self == 0
                }

                fn to_stored(self) -> f64 {
                    f64::from(self)
                }

                fn from_stored(value: f64) -> Option<Self> {
                    if !value.is_finite() || value.fract() != 0.0 {
                        return None;
                    }
                    <$ty>::try_from(value as i64).ok()
                }
            }
        )*
    };
}

impl_recent_value_for_int!(i16, i32);

impl RecentValue for f32 {
    const KIND: ValueKind = ValueKind::Decimal;

    fn is_recordable(&self) -> bool {
        !self.is_nan()
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn to_stored(self) -> f64 {
        f64::from(self)
    }

    fn from_stored(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() > f64::from(f32::MAX) {
            return None;
        }
        Some(value as f32)
    }
}

impl RecentValue for f64 {
    const KIND: ValueKind = ValueKind::Decimal;

    fn is_recordable(&self) -> bool {
        !self.is_nan()
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn to_stored(self) -> f64 {
        self
    }

    fn from_stored(value: f64) -> Option<Self> {
        value.is_finite().then_some(value)
    }
}

/// Returns `list` with `value` moved (or inserted) to the front.
///
/// Every earlier occurrence of `value` is removed, duplicates already in
/// `list` keep only their first occurrence, and the result is truncated to
/// `max_count` (at least one) entries. A non-recordable `value` leaves the
/// normalized list without inserting anything.
pub fn update_mru<T: RecentValue>(list: &[T], value: T, max_count: usize) -> Vec<T> {
    let capacity = max_count.max(1);
    let mut updated = Vec::with_capacity(capacity);

    if value.is_recordable() {
        updated.push(value);
    }

    for item in list {
        if updated.len() >= capacity {
            break;
        }
        if !item.is_recordable() || updated.contains(item) {
            continue;
        }
        updated.push(*item);
    }

    updated
}

/// Returns at most the first `max_count` entries of `list`, order preserved.
pub fn bounded<T>(list: &[T], max_count: usize) -> &[T] {
    &list[..list.len().min(max_count)]
}
