use dcalt_core::recents::initial_quick_log_calories;
use dcalt_core::{bounded, update_mru, FormFactor, RecentsSlot};

#[test]
fn existing_value_moves_to_front() {
    assert_eq!(update_mru(&[100, 200, 150], 200, 4), vec![200, 100, 150]);
}

#[test]
fn empty_list_then_new_value() {
    let first = update_mru(&[], 50_i16, 4);
    assert_eq!(first, vec![50]);
    assert_eq!(update_mru(&first, 999, 4), vec![999, 50]);
}

#[test]
fn oldest_value_is_dropped_at_capacity() {
    assert_eq!(update_mru(&[4, 3, 2, 1], 5, 4), vec![5, 4, 3, 2]);
}

#[test]
fn reinserting_same_value_is_idempotent() {
    let lists: [&[i16]; 4] = [&[], &[7], &[1, 7, 2], &[1, 2, 3, 4, 5, 6]];
    for list in lists {
        for max_count in 1..6 {
            let once = update_mru(list, 7, max_count);
            let twice = update_mru(&once, 7, max_count);
            assert_eq!(once, twice, "list {list:?} max {max_count}");
        }
    }
}

#[test]
fn result_is_bounded_unique_and_newest_first() {
    let messy = [3, 3, 9, 1, 9, 4, 3, 8];
    for max_count in 1..10 {
        let updated = update_mru(&messy, 1, max_count);
        assert_eq!(updated[0], 1);
        assert!(updated.len() <= max_count);

        let mut seen = updated.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), updated.len(), "duplicates in {updated:?}");
    }
    assert_eq!(update_mru(&messy, 1, 10), vec![1, 3, 9, 4, 8]);
}

#[test]
fn float_values_use_value_equality() {
    let updated = update_mru(&[10.5_f32, 50.0, 100.0], 50.0, 8);
    assert_eq!(updated, vec![50.0, 10.5, 100.0]);
}

#[test]
fn bounded_returns_prefix() {
    let list = [1, 2, 3, 4, 5];
    assert_eq!(bounded(&list, 3), &[1, 2, 3]);
    assert_eq!(bounded(&list, 9), &list);
    assert!(bounded(&list, 0).is_empty());
    assert!(bounded::<i16>(&[], 4).is_empty());
}

#[test]
fn slot_capacity_depends_on_form_factor() {
    assert_eq!(RecentsSlot::QuickLogCalories.max_count(FormFactor::Watch), 4);
    assert_eq!(RecentsSlot::QuickLogCalories.max_count(FormFactor::Phone), 12);
    assert_eq!(RecentsSlot::ServingWeight.max_count(FormFactor::Watch), 4);
    assert_eq!(RecentsSlot::ServingWeight.max_count(FormFactor::Phone), 8);
}

#[test]
fn slot_storage_keys_round_trip() {
    let slot = RecentsSlot::from_storage_key("serving-volume-recents").unwrap();
    assert_eq!(slot, RecentsSlot::ServingVolume);
    assert_eq!(RecentsSlot::from_storage_key("unknown"), None);
}

#[test]
fn quick_log_starts_from_last_positive_value() {
    assert_eq!(initial_quick_log_calories(Some(320)), 320);
    assert_eq!(initial_quick_log_calories(Some(0)), 150);
    assert_eq!(initial_quick_log_calories(None), 150);
}
