//! Catalog browser with search, filters, sort, and paging.
//!
//! DESIGN
//! ======
//! All controls write into one `BrowseQuery` signal; the grid is a memo of
//! `BrowseQuery::apply` over the in-memory catalog. Any filter change
//! collapses the "load more" window back to its first page.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use std::str::FromStr;

use catalog::browse::{GENRES, RATING_STEPS};
use catalog::data::browse_catalog;
use catalog::{BrowseQuery, SortBy, Window};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::movie_card::MovieCard;
use crate::util::wishlist_sync::mount_wishlist_view;

pub const BROWSE_PAGE: Window = Window::new(8, 8);

/// Query seeded from `?genre=` and `?sort=`. Unknown values are ignored.
pub fn initial_query(genre: Option<&str>, sort: Option<&str>) -> BrowseQuery {
    let mut query = BrowseQuery::default();
    if let Some(genre) = genre {
        query.set_genre(canonical_genre(genre));
    }
    if let Some(sort) = sort.and_then(|s| s.parse::<SortBy>().ok()) {
        query.sort = sort;
    }
    query
}

/// The listed spelling of `raw` when it names a known genre.
pub fn canonical_genre(raw: &str) -> &str {
    let trimmed = raw.trim();
    GENRES
        .iter()
        .find(|g| g.eq_ignore_ascii_case(trimmed))
        .copied()
        .unwrap_or(trimmed)
}

/// Parse a control value, keeping `fallback` for blank or invalid input.
pub fn parse_or<T: FromStr>(raw: &str, fallback: T) -> T {
    raw.trim().parse().unwrap_or(fallback)
}

pub fn rating_option_label(step: f64) -> String {
    if step <= 0.0 { "Any rating".to_owned() } else { format!("{step:.1}+ stars") }
}

pub fn result_count_label(count: usize) -> String {
    match count {
        1 => "1 movie".to_owned(),
        n => format!("{n} movies"),
    }
}

#[component]
pub fn BrowsePage() -> impl IntoView {
    let snapshot = mount_wishlist_view();
    let params = use_query_map();
    let query = RwSignal::new(params.with_untracked(|p| {
        initial_query(p.get("genre").as_deref(), p.get("sort").as_deref())
    }));
    let page = RwSignal::new(BROWSE_PAGE);
    let catalog = StoredValue::new(browse_catalog());

    // Genre tiles link here; follow the parameter while the page stays mounted.
    Effect::new(move || {
        if let Some(genre) = params.with(|p| p.get("genre")) {
            query.update(|q| q.set_genre(canonical_genre(&genre)));
            page.update(Window::reset);
        }
    });

    let results = Memo::new(move |_| catalog.with_value(|entries| query.with(|q| q.apply(entries))));
    let edit = move |change: &dyn Fn(&mut BrowseQuery)| {
        query.update(|q| change(q));
        page.update(Window::reset);
    };
    let on_reset = move |_| edit(&BrowseQuery::reset_filters);

    view! {
        <section class="browse">
            <header class="browse__header">
                <h1>"Browse Our Collection"</h1>
                <input
                    class="browse__search"
                    type="search"
                    placeholder="Search for movies by title..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit(&|q: &mut BrowseQuery| q.search.clone_from(&value));
                    }
                />
            </header>
            <div class="browse__layout">
                <aside class="browse__filters">
                    <h2>"Filters"</h2>
                    <label class="browse__filter">
                        <span>"Genre"</span>
                        <select
                            prop:value=move || query.with(|q| q.genre.clone().unwrap_or_else(|| "All".to_owned()))
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                edit(&|q: &mut BrowseQuery| q.set_genre(&value));
                            }
                        >
                            {GENRES.iter().map(|g| view! { <option value=*g>{*g}</option> }).collect_view()}
                        </select>
                    </label>
                    <label class="browse__filter">
                        <span>"Minimum Rating"</span>
                        <select
                            prop:value=move || query.with(|q| q.min_rating.to_string())
                            on:change=move |ev| {
                                let value = parse_or(&event_target_value(&ev), 0.0);
                                edit(&|q: &mut BrowseQuery| q.min_rating = value);
                            }
                        >
                            {RATING_STEPS
                                .iter()
                                .map(|step| view! { <option value=step.to_string()>{rating_option_label(*step)}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <fieldset class="browse__filter">
                        <legend>"Release Year"</legend>
                        <input
                            type="number"
                            min="1970"
                            max="2024"
                            prop:value=move || query.with(|q| q.year_range.0.to_string())
                            on:change=move |ev| {
                                let raw = event_target_value(&ev);
                                edit(&|q: &mut BrowseQuery| q.year_range.0 = parse_or(&raw, q.year_range.0));
                            }
                        />
                        <input
                            type="number"
                            min="1970"
                            max="2024"
                            prop:value=move || query.with(|q| q.year_range.1.to_string())
                            on:change=move |ev| {
                                let raw = event_target_value(&ev);
                                edit(&|q: &mut BrowseQuery| q.year_range.1 = parse_or(&raw, q.year_range.1));
                            }
                        />
                    </fieldset>
                    <fieldset class="browse__filter">
                        <legend>"Price Range"</legend>
                        <input
                            type="number"
                            min="0"
                            max="10"
                            step="0.5"
                            prop:value=move || query.with(|q| q.price_range.0.to_string())
                            on:change=move |ev| {
                                let raw = event_target_value(&ev);
                                edit(&|q: &mut BrowseQuery| q.price_range.0 = parse_or(&raw, q.price_range.0));
                            }
                        />
                        <input
                            type="number"
                            min="0"
                            max="10"
                            step="0.5"
                            prop:value=move || query.with(|q| q.price_range.1.to_string())
                            on:change=move |ev| {
                                let raw = event_target_value(&ev);
                                edit(&|q: &mut BrowseQuery| q.price_range.1 = parse_or(&raw, q.price_range.1));
                            }
                        />
                    </fieldset>
                    <button class="btn btn--outline" on:click=on_reset>"Reset Filters"</button>
                </aside>
                <div class="browse__results">
                    <div class="browse__toolbar">
                        <span class="browse__count">{move || result_count_label(results.with(Vec::len))}</span>
                        <select
                            prop:value=move || query.with(|q| q.sort.as_str())
                            on:change=move |ev| {
                                if let Ok(sort) = event_target_value(&ev).parse::<SortBy>() {
                                    query.update(|q| q.sort = sort);
                                }
                            }
                        >
                            {SortBy::ALL
                                .iter()
                                .map(|sort| view! { <option value=sort.as_str()>{sort.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <Show
                        when=move || !results.with(Vec::is_empty)
                        fallback=move || {
                            view! {
                                <div class="browse__empty">
                                    <h3>"No movies found"</h3>
                                    <p>"Try adjusting your filters or search terms."</p>
                                    <button class="btn btn--primary" on:click=on_reset>"Reset Filters"</button>
                                </div>
                            }
                        }
                    >
                        <div class="movie-grid">
                            {move || {
                                let entries = results.get();
                                let shown = page.get().visible(entries.len());
                                entries
                                    .into_iter()
                                    .take(shown)
                                    .map(|entry| view! { <MovieCard movie=entry.movie snapshot price=entry.price/> })
                                    .collect_view()
                            }}
                        </div>
                        <Show when=move || page.get().has_more(results.with(Vec::len))>
                            <button
                                class="btn btn--outline browse__more"
                                on:click=move |_| page.update(|w| w.load_more(results.with_untracked(Vec::len)))
                            >
                                "Load More"
                            </button>
                        </Show>
                    </Show>
                </div>
            </div>
        </section>
    }
}
