//! Most-rented titles with category tabs.

#[cfg(test)]
#[path = "top_rentals_test.rs"]
mod top_rentals_test;

use catalog::Category;
use catalog::data::top_rentals;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::movie_card::MovieCard;
use crate::util::wishlist_sync::mount_wishlist_view;

/// Category from `?category=`, defaulting to all titles.
pub fn category_from_param(raw: Option<&str>) -> Category {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

#[component]
pub fn TopRentalsPage() -> impl IntoView {
    let snapshot = mount_wishlist_view();
    let params = use_query_map();
    let category = RwSignal::new(params.with_untracked(|p| category_from_param(p.get("category").as_deref())));
    let movies = StoredValue::new(top_rentals());
    let selected = Memo::new(move |_| movies.with_value(|all| category.get().select(all)));

    view! {
        <section class="top-rentals">
            <h1 class="top-rentals__title">"Top Blockbusters"</h1>
            <div class="tabs" role="tablist">
                {Category::ALL
                    .into_iter()
                    .map(|cat| {
                        view! {
                            <button
                                class="tabs__trigger"
                                class:tabs__trigger--active=move || category.get() == cat
                                role="tab"
                                on:click=move |_| category.set(cat)
                            >
                                {cat.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show
                when=move || !selected.with(Vec::is_empty)
                fallback=|| {
                    view! {
                        <p class="top-rentals__empty">
                            "No top rentals available in this category. Check back later!"
                        </p>
                    }
                }
            >
                <div class="movie-grid">
                    {move || {
                        selected.get().into_iter().map(|movie| view! { <MovieCard movie snapshot/> }).collect_view()
                    }}
                </div>
            </Show>
            <a href="/browse" class="btn btn--primary top-rentals__more">"Discover More Hits"</a>
        </section>
    }
}
