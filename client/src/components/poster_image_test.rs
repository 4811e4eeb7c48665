use catalog::Movie;
use wishlist::{MemoryStorage, Notifier, Wishlist, WishlistStore};

use super::*;
use crate::util::poster::PLACEHOLDER_IMAGE;

fn movie(id: u64) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        image: format!("https://img.example/{id}.jpg"),
        rating: 4.0,
        genre: "Drama".to_owned(),
        duration: "100 min".to_owned(),
        year: 2019,
    }
}

#[test]
fn load_error_switches_to_placeholder() {
    let owner = Owner::new();
    owner.with(|| {
        let poster = PosterSource::new("https://img.example/1.jpg".to_owned());
        assert_eq!(poster.current(), "https://img.example/1.jpg");
        assert!(!poster.has_failed());

        poster.mark_failed();
        assert_eq!(poster.current(), PLACEHOLDER_IMAGE);

        // The placeholder failing as well keeps the placeholder.
        poster.mark_failed();
        assert_eq!(poster.current(), PLACEHOLDER_IMAGE);
    });
}

#[test]
fn one_failed_poster_in_five_only_affects_that_item() {
    let owner = Owner::new();
    owner.with(|| {
        let wishlist = Wishlist::new(WishlistStore::new(MemoryStorage::new()), Notifier::new());
        for id in 1..=5 {
            wishlist.add(movie(id)).expect("add");
        }
        let posters: Vec<PosterSource> = wishlist
            .items()
            .into_iter()
            .map(|m| PosterSource::new(m.image))
            .collect();

        posters[2].mark_failed();

        let rendered: Vec<String> = posters.iter().map(PosterSource::current).collect();
        assert_eq!(rendered.len(), 5);
        assert_eq!(rendered.iter().filter(|src| *src == PLACEHOLDER_IMAGE).count(), 1);
        assert_eq!(rendered[2], PLACEHOLDER_IMAGE);
        assert_eq!(rendered[4], "https://img.example/5.jpg");
    });
}

#[test]
fn rendered_image_starts_with_its_own_url() {
    let owner = Owner::new();
    let html = owner.with(|| view! { <PosterImage src="https://img.example/7.jpg" alt="Seven"/> }.to_html());
    assert!(html.contains("https://img.example/7.jpg"), "{html}");
    assert!(!html.contains(PLACEHOLDER_IMAGE), "{html}");
}
