use dcalt_core::range::{
    CALORIE_RANGE, DAILY_TARGET_RANGE, INTENSITY_RANGE, VOLUME_RANGE, WEIGHT_RANGE,
};
use dcalt_core::clamp;

#[test]
fn clamp_keeps_in_range_values() {
    for value in [0, 1, 999, 2000] {
        assert_eq!(clamp(value, 0, 2000), value);
    }
}

#[test]
fn clamp_saturates_to_nearest_bound() {
    for value in -50..50 {
        let clamped = clamp(value, -10, 10);
        assert!((-10..=10).contains(&clamped));
    }
    assert_eq!(clamp(2.5_f32, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-0.1_f32, 0.0, 1.0), 0.0);
}

#[test]
fn calorie_range_clamps_keypad_entry() {
    assert_eq!(CALORIE_RANGE.clamp(2500), 2000);
    assert_eq!(CALORIE_RANGE.clamp(-5), 0);
    assert!(CALORIE_RANGE.contains(150));
}

#[test]
fn steppers_saturate_at_bounds() {
    assert_eq!(CALORIE_RANGE.step_up(2000), 2000);
    assert_eq!(CALORIE_RANGE.step_down(0), 0);
    assert_eq!(DAILY_TARGET_RANGE.step_up(1990), 2000);
    assert_eq!(DAILY_TARGET_RANGE.step_up(9995), 10000);
    assert_eq!(WEIGHT_RANGE.step_down(0.4), 0.0);
    assert_eq!(VOLUME_RANGE.step_up(999.5), 1000.0);
}

#[test]
fn intensity_steps_by_tenths_without_drift() {
    let mut value = 0.0_f32;
    for _ in 0..30 {
        value = INTENSITY_RANGE.step_up(value);
    }
    assert_eq!(value, 3.0);
    assert_eq!(INTENSITY_RANGE.step_up(10.0), 10.0);
    assert_eq!(INTENSITY_RANGE.clamp(12.0), 10.0);
}
