#![cfg(not(feature = "hydrate"))]

use catalog::Movie;
use wishlist::{MemoryStorage, Notifier, Wishlist, WishlistStore};

use super::*;
use crate::util::poster::PLACEHOLDER_IMAGE;
use crate::util::wishlist_sync::new_shared_wishlist;

fn movie(id: u64, image: &str) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        image: image.to_owned(),
        rating: 4.2,
        genre: "Thriller".to_owned(),
        duration: "118 min".to_owned(),
        year: 2021,
    }
}

fn memory_wishlist(movies: Vec<Movie>) -> Wishlist<MemoryStorage> {
    let wishlist = Wishlist::new(WishlistStore::new(MemoryStorage::new()), Notifier::new());
    for m in movies {
        wishlist.add(m).expect("add");
    }
    wishlist
}

fn card_count(html: &str) -> usize {
    html.matches(r#"class="movie-card""#).count()
}

#[test]
fn empty_wishlist_page_offers_explore_movies() {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(new_shared_wishlist());
        view! { <WishlistPage/> }.to_html()
    });
    assert!(html.contains("Your wishlist is empty"), "{html}");
    assert!(html.contains("Explore Movies"), "{html}");
    assert!(html.contains(r#"href="/browse""#), "{html}");
    assert!(html.contains(r#"<span class="badge">0"#), "{html}");
    assert_eq!(card_count(&html), 0);
}

#[test]
fn five_stored_items_render_five_cards_with_one_placeholder() {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(new_shared_wishlist());
        let store = memory_wishlist(vec![
            movie(1, "https://img.example/1.jpg"),
            movie(2, "https://img.example/2.jpg"),
            movie(3, ""),
            movie(4, "https://img.example/4.jpg"),
            movie(5, "https://img.example/5.jpg"),
        ]);
        let snapshot = RwSignal::new(WishlistSnapshot::default());
        let _sub = store.watch(move |items| snapshot.set(WishlistSnapshot::new(items)));
        view! { <WishlistGrid snapshot/> }.to_html()
    });
    assert_eq!(card_count(&html), 5, "{html}");
    assert_eq!(html.matches(PLACEHOLDER_IMAGE).count(), 1, "{html}");
    assert!(!html.contains("Your wishlist is empty"), "{html}");
    assert!(html.contains(r#"<span class="badge">5"#), "{html}");
}

#[test]
fn removal_elsewhere_is_reflected_in_the_grid() {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(new_shared_wishlist());
        let store = memory_wishlist((1..=3).map(|id| movie(id, "https://img.example/x.jpg")).collect());
        let snapshot = RwSignal::new(WishlistSnapshot::default());
        let _sub = store.watch(move |items| snapshot.set(WishlistSnapshot::new(items)));
        store.remove(2).expect("remove");
        view! { <WishlistGrid snapshot/> }.to_html()
    });
    assert_eq!(card_count(&html), 2, "{html}");
    assert!(html.contains("Movie 1") && html.contains("Movie 3"), "{html}");
    assert!(!html.contains("Movie 2"), "{html}");
}

#[test]
fn grid_shows_first_twelve_then_load_more() {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(new_shared_wishlist());
        let store = memory_wishlist((1..=14).map(|id| movie(id, "https://img.example/x.jpg")).collect());
        let snapshot = RwSignal::new(WishlistSnapshot::default());
        let _sub = store.watch(move |items| snapshot.set(WishlistSnapshot::new(items)));
        view! { <WishlistGrid snapshot/> }.to_html()
    });
    assert_eq!(card_count(&html), 12, "{html}");
    assert!(html.contains("Load More"), "{html}");
}
