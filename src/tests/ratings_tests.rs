use super::*;
use crate::storage::MemoryStorage;

fn store() -> (Arc<MemoryStorage>, RatingStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = RatingStore::new(storage.clone());
    (storage, store)
}

#[test]
fn rating_defaults_to_zero() {
    let (_, store) = store();
    assert_eq!(store.rating("star1"), 0);
}

#[test]
fn set_rating_round_trips_and_persists() {
    let (storage, store) = store();
    store.set_rating("star1", 4).expect("set rating");
    assert_eq!(store.rating("star1"), 4);

    // Exact persisted layout
    assert_eq!(storage.get("cineplus-rating-star1").as_deref(), Some("4"));

    // A fresh store over the same backend sees the persisted value
    let fresh = RatingStore::new(storage);
    assert_eq!(fresh.rating("star1"), 4);
}

#[test]
fn set_rating_rejects_out_of_range_values() {
    let (storage, store) = store();
    assert!(matches!(
        store.set_rating("star1", 0),
        Err(Error::RatingOutOfRange(0))
    ));
    assert!(matches!(
        store.set_rating("star1", 6),
        Err(Error::RatingOutOfRange(6))
    ));
    // Rejected before any write
    assert_eq!(storage.get("cineplus-rating-star1"), None);
}

#[test]
fn reset_rating_clears_transient_state_only() {
    let (storage, store) = store();
    store.set_rating("star1", 5).expect("set rating");

    store.reset_rating("star1");
    assert_eq!(store.rating("star1"), 0);

    // The durable value is untouched and a fresh load still sees it
    assert_eq!(storage.get("cineplus-rating-star1").as_deref(), Some("5"));
    let fresh = RatingStore::new(storage);
    assert_eq!(fresh.rating("star1"), 5);
}

#[test]
fn ratings_are_scoped_per_movie() {
    let (_, store) = store();
    store.set_rating("star1", 2).expect("set rating");
    store.set_rating("trans1", 5).expect("set rating");
    assert_eq!(store.rating("star1"), 2);
    assert_eq!(store.rating("trans1"), 5);
}

#[test]
fn add_review_appends_oldest_first() {
    let (_, store) = store();
    let first = store.add_review("star1", "Great film", 5).expect("first");
    let second = store.add_review("star1", "Still great", 4).expect("second");

    let reviews = store.reviews("star1");
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0], first);
    assert_eq!(reviews[1], second);
    assert!(second.id > first.id, "ids must be strictly increasing");
}

#[test]
fn review_dates_are_iso8601() {
    let (_, store) = store();
    let review = store.add_review("star1", "Great film", 5).expect("review");
    chrono::DateTime::parse_from_rfc3339(&review.date).expect("parseable date");
    assert!(review.date.ends_with('Z'));
}

#[test]
fn reviews_are_scoped_per_movie() {
    let (_, store) = store();
    store.add_review("star1", "Great film", 5).expect("review");
    assert_eq!(store.reviews("star1").len(), 1);
    assert!(store.reviews("star2").is_empty());
}

#[test]
fn persisted_review_layout_is_stable() {
    let (storage, store) = store();
    store.add_review("star1", "Great film", 5).expect("review");

    // Reviews live under the comments key as a JSON array with the fields
    // in id, text, rating, date order
    let raw = storage.get("cineplus-comments-star1").expect("stored list");
    let reviews = store.reviews("star1");
    assert_eq!(raw, serde_json::to_string(&reviews).expect("serialize"));

    let fixed = Review {
        id: 1700000000000,
        text: "Great film".to_string(),
        rating: 5,
        date: "2024-01-01T00:00:00.000Z".to_string(),
    };
    assert_eq!(
        serde_json::to_string(&vec![fixed]).expect("serialize"),
        r#"[{"id":1700000000000,"text":"Great film","rating":5,"date":"2024-01-01T00:00:00.000Z"}]"#
    );
}

#[test]
fn corrupt_review_list_degrades_to_empty() {
    let (storage, store) = store();
    storage
        .set("cineplus-comments-star1", "{not json]")
        .expect("seed corrupt value");

    assert!(store.reviews("star1").is_empty());

    // The store recovers: the next append starts a clean list
    store.add_review("star1", "Great film", 5).expect("review");
    assert_eq!(store.reviews("star1").len(), 1);
}
