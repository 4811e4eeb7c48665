//! Top navigation with the wishlist badge and dropdown.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is mounted on every route, so its wishlist badge is the view
//! most likely to be on screen when another view (a heart toggle, the
//! wishlist page, another tab) changes the list. It mounts its own
//! subscription and removes items through the shared wishlist.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use catalog::{Movie, MovieId};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::poster_image::PosterImage;
use crate::state::ui::UiState;
use crate::state::wishlist::BADGE_PREVIEW;
use crate::util::dark_mode;
use crate::util::wishlist_sync::{SharedWishlist, mount_wishlist_view};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/browse", "Browse"),
    ("/top-rentals", "Top Rentals"),
    ("/my-rentals", "My Rentals"),
    ("/wishlist", "Wishlist"),
    ("/profile", "Profile"),
];

/// Whether `href` is the current route. Home only matches exactly.
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{href}/"))
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let wishlist = expect_context::<SharedWishlist>();
    let snapshot = mount_wishlist_view();
    let location = use_location();
    let pathname = location.pathname;

    Effect::new(move || {
        pathname.track();
        ui.update(UiState::close_overlays);
    });

    let remove = Callback::new(move |id: MovieId| {
        if let Err(err) = wishlist.remove(id) {
            leptos::logging::warn!("wishlist remove failed: {err}");
        }
    });

    let on_toggle_dark = move |_| ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    let on_toggle_menu = move |_| ui.update(UiState::toggle_menu);

    let links = move || {
        let current = pathname.get();
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                let active = is_active(href, &current);
                view! {
                    <a href=*href class="navbar__link" class:navbar__link--active=active>
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="navbar" class:navbar--open=move || ui.get().menu_open>
            <a href="/" class="navbar__brand">"Marquee"</a>
            <nav class="navbar__links">{links}</nav>
            <div class="navbar__actions">
                <div
                    class="navbar__wishlist"
                    on:mouseenter=move |_| ui.update(|u| u.wishlist_open = true)
                    on:mouseleave=move |_| ui.update(|u| u.wishlist_open = false)
                >
                    <a href="/wishlist" class="navbar__wishlist-link" aria-label="Wishlist">
                        "♥"
                        <span class="navbar__badge">{move || snapshot.get().count()}</span>
                    </a>
                    <Show when=move || ui.get().wishlist_open>
                        <div class="navbar__dropdown">
                            <p class="navbar__dropdown-title">"Your Wishlist"</p>
                            <Show
                                when=move || !snapshot.get().is_empty()
                                fallback=|| view! { <p class="navbar__dropdown-empty">"Your wishlist is empty"</p> }
                            >
                                <ul class="navbar__dropdown-list">
                                    {move || {
                                        snapshot
                                            .get()
                                            .preview(BADGE_PREVIEW)
                                            .into_iter()
                                            .map(|movie| view! { <DropdownItem movie remove/> })
                                            .collect_view()
                                    }}
                                </ul>
                            </Show>
                            <a href="/wishlist" class="navbar__dropdown-all">"View Full Wishlist"</a>
                        </div>
                    </Show>
                </div>
                <button class="navbar__theme" on:click=on_toggle_dark aria-label="Toggle dark mode">
                    {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                </button>
                <button class="navbar__menu" on:click=on_toggle_menu aria-label="Toggle menu">"☰"</button>
            </div>
        </header>
    }
}

#[component]
fn DropdownItem(movie: Movie, remove: Callback<MovieId>) -> impl IntoView {
    let Movie { id, title, image, year, .. } = movie;
    view! {
        <li class="navbar__dropdown-item">
            <PosterImage src=image alt=title.clone() class="navbar__dropdown-thumb"/>
            <div class="navbar__dropdown-text">
                <span class="navbar__dropdown-name">{title}</span>
                <span class="navbar__dropdown-year">{year}</span>
            </div>
            <button
                class="navbar__dropdown-remove"
                aria-label="Remove from wishlist"
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    remove.run(id);
                }
            >
                "✕"
            </button>
        </li>
    }
}
