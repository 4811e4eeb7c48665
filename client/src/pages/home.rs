//! Landing page: hero, featured rows, and genre tiles.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use catalog::Window;
use catalog::data::{GENRE_TILES, HERO_IMAGE, featured_rows};
use leptos::prelude::*;

use crate::components::movie_card::MovieCard;
use crate::net::api::encode_query_value;
use crate::util::wishlist_sync::mount_wishlist_view;

/// Featured rows share one window: 4 visible, +4 per "View More".
pub const FEATURED_PAGE: Window = Window::new(4, 4);

/// `/browse?genre=<name>` with the name percent-encoded.
pub fn genre_href(genre: &str) -> String {
    format!("/browse?genre={}", encode_query_value(genre))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let snapshot = mount_wishlist_view();
    let rows = featured_rows();
    let longest = rows.iter().map(|(_, movies)| movies.len()).max().unwrap_or_default();
    let active_row = RwSignal::new(0_usize);
    let window = RwSignal::new(FEATURED_PAGE);
    let headings: Vec<&'static str> = rows.iter().map(|(heading, _)| *heading).collect();

    let visible_movies = move || {
        let shown = window.get().visible(longest);
        rows.get(active_row.get())
            .map(|(_, movies)| movies.iter().take(shown).cloned().collect::<Vec<_>>())
            .unwrap_or_default()
    };

    view! {
        <section class="hero" style=format!("background-image: url('{HERO_IMAGE}')")>
            <div class="hero__content">
                <h1>"Your Cinema Experience, " <span class="hero__accent">"Reimagined"</span></h1>
                <p>"Stream the latest blockbusters and timeless classics from the comfort of your home."</p>
                <a href="/browse" class="btn btn--primary">"Browse Movies"</a>
            </div>
        </section>

        <section class="featured">
            <div class="featured__header">
                <h2>"Featured Movies"</h2>
                <div class="tabs" role="tablist">
                    {headings
                        .into_iter()
                        .enumerate()
                        .map(|(index, heading)| {
                            view! {
                                <button
                                    class="tabs__trigger"
                                    class:tabs__trigger--active=move || active_row.get() == index
                                    role="tab"
                                    on:click=move |_| active_row.set(index)
                                >
                                    {heading}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="movie-grid">
                {move || {
                    visible_movies()
                        .into_iter()
                        .map(|movie| view! { <MovieCard movie snapshot/> })
                        .collect_view()
                }}
            </div>
            <div class="featured__more">
                <button
                    class="btn btn--outline"
                    disabled=move || !window.get().has_more(longest)
                    on:click=move |_| window.update(|w| w.load_more(longest))
                >
                    "View More"
                </button>
            </div>
        </section>

        <section class="genres">
            <h2>"Browse by Genre"</h2>
            <div class="genres__grid">
                {GENRE_TILES
                    .iter()
                    .map(|(genre, image)| {
                        view! {
                            <a class="genre-tile" href=genre_href(genre)>
                                <img class="genre-tile__image" src=*image alt=*genre loading="lazy"/>
                                <span class="genre-tile__name">{*genre}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
