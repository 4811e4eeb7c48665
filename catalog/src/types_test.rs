use super::*;

#[test]
fn movie_deserializes_from_stored_wishlist_shape() {
    let raw = r#"{"id":7,"title":"The Dark Knight","image":"https://img/dk.jpg","rating":4.9,"genre":"Action","duration":"152 min","year":2008}"#;
    let movie: Movie = serde_json::from_str(raw).expect("movie");
    assert_eq!(movie.id, 7);
    assert_eq!(movie.title, "The Dark Knight");
    assert_eq!(movie.year, 2008);
    assert!((movie.rating - 4.9).abs() < f64::EPSILON);
}

#[test]
fn catalog_entry_flattens_movie_fields() {
    let raw = r#"{"id":1,"title":"Dune: Part Two","image":"x","rating":4.8,"genre":"Sci-Fi","duration":"166 min","year":2024,"price":5.99}"#;
    let entry: CatalogEntry = serde_json::from_str(raw).expect("entry");
    assert_eq!(entry.movie.title, "Dune: Part Two");
    assert!((entry.price - 5.99).abs() < f64::EPSILON);

    let value = serde_json::to_value(&entry).expect("encode");
    assert_eq!(value["genre"], "Sci-Fi");
    assert!(value.get("movie").is_none());
}

#[test]
fn rental_uses_camel_case_dates_and_lowercase_status() {
    let raw = r#"{
        "id": 3,
        "movie": {"id":1,"title":"Inception","image":"x","rating":8.8,"genre":"Sci-Fi","duration":"2h 28m","year":2010},
        "rentalDate": "2025-02-01",
        "dueDate": "2025-02-08",
        "status": "overdue"
    }"#;
    let rental: Rental = serde_json::from_str(raw).expect("rental");
    assert_eq!(rental.rental_date, "2025-02-01");
    assert_eq!(rental.due_date, "2025-02-08");
    assert_eq!(rental.status, RentalStatus::Overdue);
}

#[test]
fn subscription_parses_expiry_and_status() {
    let raw = r#"{"plan":"Premium","expiryDate":"2026-01-01","status":"pending"}"#;
    let sub: Subscription = serde_json::from_str(raw).expect("subscription");
    assert_eq!(sub.plan, "Premium");
    assert_eq!(sub.expiry_date, "2026-01-01");
    assert_eq!(sub.status, SubscriptionStatus::Pending);
    assert_eq!(sub.status.label(), "Pending");
}

#[test]
fn unknown_rental_status_is_rejected() {
    let raw = r#""lost""#;
    assert!(serde_json::from_str::<RentalStatus>(raw).is_err());
}

#[test]
fn rental_status_badges_are_distinct() {
    let classes = [
        RentalStatus::Active.badge_class(),
        RentalStatus::Returned.badge_class(),
        RentalStatus::Overdue.badge_class(),
    ];
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
    assert_eq!(RentalStatus::Overdue.label(), "Overdue");
}
