//! Heart toggle that adds or removes a movie from the shared wishlist.

use catalog::Movie;
use leptos::prelude::*;

use crate::state::wishlist::WishlistSnapshot;
use crate::util::wishlist_sync::SharedWishlist;

#[component]
pub fn WishlistButton(movie: Movie, snapshot: RwSignal<WishlistSnapshot>) -> impl IntoView {
    let wishlist = expect_context::<SharedWishlist>();
    let id = movie.id;
    let active = move || snapshot.get().contains(id);
    let label = move || if active() { "Remove from wishlist" } else { "Add to wishlist" };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if let Err(err) = wishlist.toggle(movie.clone()) {
            leptos::logging::warn!("wishlist toggle failed: {err}");
        }
    };

    view! {
        <button
            class="heart-btn"
            class:heart-btn--active=active
            on:click=on_click
            title=label
            aria-label=label
            aria-pressed=move || active().to_string()
        >
            "♥"
        </button>
    }
}
