//! Full wishlist grid.
//!
//! One of the independently mounted wishlist views: it subscribes on mount,
//! pages through the list 12 then 6 at a time, and removes through the shared
//! wishlist so the navbar badge and any other tab follow.

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::state::wishlist::{GRID_PAGE, WishlistSnapshot};
use crate::util::wishlist_sync::mount_wishlist_view;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let snapshot = mount_wishlist_view();
    view! { <WishlistGrid snapshot/> }
}

/// The page body over any snapshot signal.
#[component]
pub fn WishlistGrid(snapshot: RwSignal<WishlistSnapshot>) -> impl IntoView {
    let page = RwSignal::new(GRID_PAGE);
    let count = move || snapshot.with(WishlistSnapshot::count);

    view! {
        <section class="wishlist">
            <h1 class="wishlist__title">
                "My Cinema Wishlist"
                <span class="badge">{count}</span>
            </h1>
            <Show
                when=move || { count() > 0 }
                fallback=|| {
                    view! {
                        <div class="wishlist__empty">
                            <p>"Your wishlist is empty. Start adding blockbuster hits!"</p>
                            <a href="/browse" class="btn btn--primary">"Explore Movies"</a>
                        </div>
                    }
                }
            >
                <div class="movie-grid">
                    {move || {
                        let shown = page.get().visible(count());
                        snapshot
                            .get()
                            .items()
                            .iter()
                            .take(shown)
                            .cloned()
                            .map(|movie| view! { <MovieCard movie snapshot/> })
                            .collect_view()
                    }}
                </div>
                <Show when=move || page.get().has_more(count())>
                    <button
                        class="btn btn--outline wishlist__more"
                        on:click=move |_| page.update(|w| w.load_more(count()))
                    >
                        "Load More"
                    </button>
                </Show>
            </Show>
        </section>
    }
}
