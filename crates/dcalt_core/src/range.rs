//! Numeric value ranges for steppers and keypad entry.
//!
//! # Responsibility
//! - Saturate user-entered values into the range each field accepts.
//! - Step values up/down the way the stepper controls do.
//!
//! # Invariants
//! - `clamp` never panics and never returns a value outside its bounds.
//! - Floating point results are kept at one decimal place.

/// Calories per serving or quick log.
pub const CALORIE_RANGE: ValueRange<i16> = ValueRange::new(0, 2000, 1);
/// Serving weight in grams.
pub const WEIGHT_RANGE: ValueRange<f32> = ValueRange::new(0.0, 1000.0, 1.0);
/// Serving volume in millilitres.
pub const VOLUME_RANGE: ValueRange<f32> = ValueRange::new(0.0, 1000.0, 1.0);
/// Serving-size multiplier (1.0 is 100%).
pub const INTENSITY_RANGE: ValueRange<f32> = ValueRange::new(0.0, 10.0, 0.1);
/// Daily calorie target.
pub const DAILY_TARGET_RANGE: ValueRange<i16> = ValueRange::new(0, 10000, 10);

/// Returns `value` if it lies within `[lower, upper]`, otherwise the nearest bound.
///
/// Reversed bounds are swapped. A value that compares unordered with the
/// bounds (NaN) saturates to the lower bound.
pub fn clamp<T: PartialOrd + Copy>(value: T, lower: T, upper: T) -> T {
    let (lower, upper) = if upper < lower {
        (upper, lower)
    } else {
        (lower, upper)
    };

    if value < lower {
        lower
    } else if value > upper {
        upper
    } else if value >= lower {
        value
    } else {
        lower
    }
}

/// Rounds to one decimal place.
pub fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Arithmetic a stepper needs from its value type.
pub trait Steppable: PartialOrd + Copy {
    fn plus(self, step: Self) -> Self;
    fn minus(self, step: Self) -> Self;
}

impl Steppable for i16 {
    fn plus(self, step: Self) -> Self {
        self.saturating_add(step)
    }

    fn minus(self, step: Self) -> Self {
        self.saturating_sub(step)
    }
}

impl Steppable for f32 {
    fn plus(self, step: Self) -> Self {
        round_to_tenth(self + step)
    }

    fn minus(self, step: Self) -> Self {
        round_to_tenth(self - step)
    }
}

/// Closed range with a step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange<T> {
    pub lower: T,
    pub upper: T,
    pub step: T,
}

impl<T> ValueRange<T> {
    pub const fn new(lower: T, upper: T, step: T) -> Self {
        Self { lower, upper, step }
    }
}

impl<T: Steppable> ValueRange<T> {
    pub fn clamp(&self, value: T) -> T {
        clamp(value, self.lower, self.upper)
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Increments by one step, saturating at `upper`.
    pub fn step_up(&self, value: T) -> T {
        self.clamp(self.clamp(value).plus(self.step))
    }

    /// Decrements by one step, saturating at `lower`.
    pub fn step_down(&self, value: T) -> T {
        self.clamp(self.clamp(value).minus(self.step))
    }
}
