use super::*;

fn movie(id: MovieId) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        image: format!("https://img/{id}.jpg"),
        rating: 4.0,
        genre: "Drama".to_owned(),
        duration: "120 min".to_owned(),
        year: 2020,
    }
}

fn ids(items: &[Movie]) -> Vec<MovieId> {
    items.iter().map(|m| m.id).collect()
}

/// Backend that refuses every operation.
struct BrokenStorage;

impl StorageBackend for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Access("quota exceeded".to_owned()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// Reads
// =============================================================

#[test]
fn absent_key_reads_as_empty() {
    let store = WishlistStore::new(MemoryStorage::new());
    assert!(store.read().is_empty());
    assert!(store.try_read().expect("read").is_empty());
    assert!(store.is_empty());
}

#[test]
fn reads_data_written_in_the_browser_shape() {
    let raw = r#"[{"id":7,"title":"The Dark Knight","image":"x","rating":4.9,"genre":"Action","duration":"152 min","year":2008}]"#;
    let store = WishlistStore::new(MemoryStorage::with_raw(DEFAULT_KEY, raw));
    let items = store.read();
    assert_eq!(ids(&items), vec![7]);
    assert_eq!(items[0].title, "The Dark Knight");
}

#[test]
fn duplicate_ids_in_storage_are_dropped_on_read() {
    let raw = serde_json::to_string(&vec![movie(1), movie(2), movie(1)]).expect("encode");
    let store = WishlistStore::new(MemoryStorage::with_raw(DEFAULT_KEY, &raw));
    assert_eq!(ids(&store.read()), vec![1, 2]);
}

#[test]
fn custom_key_isolates_lists() {
    let storage = MemoryStorage::new();
    let a = WishlistStore::new(storage.clone());
    let b = WishlistStore::new(storage.clone()).with_key("wishlist:guest");
    a.insert(movie(1)).expect("insert");
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
    assert_eq!(b.key(), "wishlist:guest");
}

// =============================================================
// Recovery
// =============================================================

#[test]
fn malformed_data_reads_as_fallback_without_error() {
    let storage = MemoryStorage::with_raw(DEFAULT_KEY, "{not json");
    let store = WishlistStore::new(storage.clone()).with_recovery(RecoveryPolicy::KeepStored, vec![movie(7)]);
    assert_eq!(ids(&store.read()), vec![7]);
    assert_eq!(storage.raw(DEFAULT_KEY).as_deref(), Some("{not json"));
}

#[test]
fn malformed_data_surfaces_typed_error_from_try_read() {
    let store = WishlistStore::new(MemoryStorage::with_raw(DEFAULT_KEY, "42"));
    assert!(matches!(store.try_read(), Err(StoreError::Malformed(_))));
    assert!(store.read().is_empty());
}

#[test]
fn reset_policy_persists_fallback_over_bad_value() {
    let storage = MemoryStorage::with_raw(DEFAULT_KEY, "[{\"id\":");
    let store = WishlistStore::new(storage.clone()).with_recovery(RecoveryPolicy::Reset, vec![movie(7), movie(15)]);
    assert_eq!(ids(&store.read()), vec![7, 15]);
    assert_eq!(ids(&store.try_read().expect("reset value parses")), vec![7, 15]);
}

#[test]
fn reset_policy_with_empty_fallback_clears_bad_value() {
    let storage = MemoryStorage::with_raw(DEFAULT_KEY, "garbage");
    let store = WishlistStore::new(storage.clone()).with_recovery(RecoveryPolicy::Reset, Vec::new());
    assert!(store.read().is_empty());
    assert_eq!(storage.raw(DEFAULT_KEY), None);
}

#[test]
fn unreachable_backend_reads_empty_and_fails_writes() {
    let store = WishlistStore::new(BrokenStorage);
    assert!(store.read().is_empty());
    assert!(matches!(store.try_read(), Err(StoreError::Backend(StorageError::Unavailable))));
    assert!(matches!(store.insert(movie(1)), Err(StoreError::Backend(StorageError::Access(_)))));
}

// =============================================================
// Writes and mutations
// =============================================================

#[test]
fn writing_empty_list_removes_key() {
    let storage = MemoryStorage::new();
    let store = WishlistStore::new(storage.clone());
    store.write(&[movie(1)]).expect("write");
    assert!(storage.raw(DEFAULT_KEY).is_some());
    store.write(&[]).expect("write empty");
    assert_eq!(storage.raw(DEFAULT_KEY), None);
}

#[test]
fn write_keeps_first_occurrence_of_duplicate_ids() {
    let store = WishlistStore::new(MemoryStorage::new());
    let mut renamed = movie(1);
    renamed.title = "Renamed".to_owned();
    store.write(&[movie(1), movie(2), renamed]).expect("write");
    let items = store.read();
    assert_eq!(ids(&items), vec![1, 2]);
    assert_eq!(items[0].title, "Movie 1");
}

#[test]
fn insert_appends_and_ignores_existing_id() {
    let store = WishlistStore::new(MemoryStorage::new());
    assert!(store.insert(movie(3)).expect("insert"));
    assert!(store.insert(movie(1)).expect("insert"));
    assert!(!store.insert(movie(3)).expect("insert dup"));
    assert_eq!(ids(&store.read()), vec![3, 1]);
}

#[test]
fn remove_preserves_order_and_reports_absence() {
    let store = WishlistStore::new(MemoryStorage::new());
    store.write(&[movie(1), movie(2), movie(3)]).expect("write");
    assert!(store.remove(2).expect("remove"));
    assert!(!store.remove(2).expect("remove again"));
    assert_eq!(ids(&store.read()), vec![1, 3]);
}

#[test]
fn removing_last_item_clears_storage() {
    let storage = MemoryStorage::new();
    let store = WishlistStore::new(storage.clone());
    store.insert(movie(1)).expect("insert");
    store.remove(1).expect("remove");
    assert_eq!(storage.raw(DEFAULT_KEY), None);
}

#[test]
fn toggle_flips_membership() {
    let store = WishlistStore::new(MemoryStorage::new());
    assert!(store.toggle(movie(5)).expect("toggle on"));
    assert!(store.contains(5));
    assert!(!store.toggle(movie(5)).expect("toggle off"));
    assert!(!store.contains(5));
}

#[test]
fn insert_over_malformed_value_starts_from_fallback() {
    let store = WishlistStore::new(MemoryStorage::with_raw(DEFAULT_KEY, "oops"))
        .with_recovery(RecoveryPolicy::KeepStored, vec![movie(7)]);
    store.insert(movie(1)).expect("insert");
    assert_eq!(ids(&store.try_read().expect("now valid")), vec![7, 1]);
}

#[test]
fn mixed_inserts_and_removes_match_a_reference_model() {
    let store = WishlistStore::new(MemoryStorage::new());
    let mut model: Vec<MovieId> = Vec::new();

    // Deterministic pseudo-random walk over a small id space so collisions
    // (re-inserts, removes of absent ids) happen often.
    let mut state: u64 = 0x2545_F491;
    for _ in 0..500 {
        state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        let id = (state >> 33) % 12;
        if (state >> 20) % 3 == 0 {
            store.remove(id).expect("remove");
            model.retain(|m| *m != id);
        } else {
            store.insert(movie(id)).expect("insert");
            if !model.contains(&id) {
                model.push(id);
            }
        }
        assert_eq!(ids(&store.read()), model);
    }
}
