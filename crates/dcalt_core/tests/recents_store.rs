use dcalt_core::db::open_db_in_memory;
use dcalt_core::{
    FormFactor, RecentsKey, RecentsRepository, RecentsService, RecentsSlot, RepoError,
    SqliteRecentsRepository,
};
use dcalt_core::recents::ValueKind;
use uuid::Uuid;

#[test]
fn quick_log_lists_are_kept_per_category() {
    let conn = open_db_in_memory().unwrap();
    let service = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Watch);
    let fruit = RecentsKey::quick_log(Uuid::new_v4());
    let meat = RecentsKey::quick_log(Uuid::new_v4());

    assert!(service.recents::<i16>(&fruit).unwrap().is_empty());

    service.record(&fruit, 50_i16).unwrap();
    service.record(&fruit, 999_i16).unwrap();
    service.record(&meat, 400_i16).unwrap();

    assert_eq!(service.recents::<i16>(&fruit).unwrap(), vec![999, 50]);
    assert_eq!(service.recents::<i16>(&meat).unwrap(), vec![400]);
}

#[test]
fn record_moves_value_to_front_and_caps_list() {
    let conn = open_db_in_memory().unwrap();
    let service = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Watch);
    let key = RecentsKey::quick_log(Uuid::new_v4());

    for value in [100_i16, 200, 150, 300, 450] {
        service.record(&key, value).unwrap();
    }
    assert_eq!(service.recents::<i16>(&key).unwrap(), vec![450, 300, 150, 200]);

    let updated = service.record(&key, 200_i16).unwrap();
    assert_eq!(updated, vec![200, 450, 300, 150]);
}

#[test]
fn zero_values_are_not_recorded() {
    let conn = open_db_in_memory().unwrap();
    let service = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Phone);
    let key = RecentsKey::shared(RecentsSlot::ServingVolume);

    assert!(service.record(&key, 0.0_f32).unwrap().is_empty());
    assert_eq!(service.record(&key, 250.5_f32).unwrap(), vec![250.5]);
}

#[test]
fn serving_lists_fall_back_to_defaults() {
    let conn = open_db_in_memory().unwrap();
    let service = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Phone);

    let calories = RecentsKey::shared(RecentsSlot::ServingCalories);
    assert_eq!(service.recents::<i16>(&calories).unwrap(), vec![100, 200, 400, 800]);

    let weight = RecentsKey::shared(RecentsSlot::ServingWeight);
    assert_eq!(
        service.record(&weight, 75.0_f32).unwrap(),
        vec![75.0, 10.0, 50.0, 100.0, 200.0]
    );
}

#[test]
fn seeding_fills_empty_quick_log_once() {
    let conn = open_db_in_memory().unwrap();
    let service = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Watch);
    let key = RecentsKey::quick_log(Uuid::new_v4());

    assert!(service.seed_if_empty::<i16>(&key).unwrap());
    assert_eq!(service.recents::<i16>(&key).unwrap(), vec![800, 600, 400, 200]);

    service.record(&key, 25_i16).unwrap();
    assert!(!service.seed_if_empty::<i16>(&key).unwrap());
    assert_eq!(service.recents::<i16>(&key).unwrap(), vec![25, 800, 600, 400]);
}

#[test]
fn read_clamps_lists_grown_elsewhere() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRecentsRepository::new(&conn);
    let key = RecentsKey::shared(RecentsSlot::ServingCalories);
    repo.save_values(&key, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    let watch = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Watch);
    assert_eq!(watch.recents::<i16>(&key).unwrap(), vec![1, 2, 3, 4]);

    let phone = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Phone);
    assert_eq!(phone.recents::<i16>(&key).unwrap(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn clear_removes_stored_list() {
    let conn = open_db_in_memory().unwrap();
    let service = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Watch);
    let key = RecentsKey::quick_log(Uuid::new_v4());

    service.record(&key, 120_i16).unwrap();
    assert!(service.clear(&key).unwrap());
    assert!(!service.clear(&key).unwrap());
    assert!(service.recents::<i16>(&key).unwrap().is_empty());
}

#[test]
fn seeding_leaves_serving_defaults_in_order() {
    let conn = open_db_in_memory().unwrap();
    let service = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Phone);
    let key = RecentsKey::shared(RecentsSlot::ServingCalories);

    let before = service.recents::<i16>(&key).unwrap();
    assert!(!service.seed_if_empty::<i16>(&key).unwrap());
    let after = service.recents::<i16>(&key).unwrap();

    assert_eq!(before, vec![100, 200, 400, 800]);
    assert_eq!(after, before);
}

#[test]
fn slot_rejects_values_of_another_kind() {
    let conn = open_db_in_memory().unwrap();
    let service = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Phone);
    let calories = RecentsKey::shared(RecentsSlot::ServingCalories);
    let volume = RecentsKey::shared(RecentsSlot::ServingVolume);

    service.record(&calories, 250_i16).unwrap();

    let err = service.record(&calories, 12.5_f32).unwrap_err();
    assert!(
        matches!(
            err,
            RepoError::KindMismatch {
                expected: ValueKind::Integer,
                ..
            }
        ),
        "{err}"
    );
    assert!(matches!(
        service.recents::<i32>(&volume).unwrap_err(),
        RepoError::KindMismatch {
            expected: ValueKind::Decimal,
            ..
        }
    ));

    assert_eq!(
        service.recents::<i16>(&calories).unwrap(),
        vec![250, 100, 200, 400, 800]
    );
}

#[test]
fn wide_integers_round_trip_through_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = RecentsService::new(SqliteRecentsRepository::new(&conn), FormFactor::Phone);
    let key = RecentsKey::quick_log(Uuid::new_v4());

    service.record(&key, i32::MAX).unwrap();
    service.record(&key, i32::MIN + 1).unwrap();

    assert_eq!(
        service.recents::<i32>(&key).unwrap(),
        vec![i32::MIN + 1, i32::MAX]
    );
}

#[test]
fn corrupt_stored_list_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO recents (slot, owner, values_json) VALUES ('serving-weight-recents', '', 'oops');",
        [],
    )
    .unwrap();

    let repo = SqliteRecentsRepository::new(&conn);
    let err = repo
        .load_values(&RecentsKey::shared(RecentsSlot::ServingWeight))
        .unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)), "{err}");
}
