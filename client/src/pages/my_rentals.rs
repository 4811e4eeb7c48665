//! Rental history with per-title return.

#[cfg(test)]
#[path = "my_rentals_test.rs"]
mod my_rentals_test;

use catalog::RentalRecord;
use catalog::data::rental_history;
use leptos::prelude::*;

use crate::components::poster_image::PosterImage;

/// Drop the record with `id`; returns whether one was removed.
pub fn return_rental(records: &mut Vec<RentalRecord>, id: u64) -> bool {
    let before = records.len();
    records.retain(|r| r.id != id);
    records.len() != before
}

#[component]
pub fn MyRentalsPage() -> impl IntoView {
    let records = RwSignal::new(rental_history());

    view! {
        <section class="my-rentals">
            <h1 class="my-rentals__title">"My Rentals"</h1>
            <Show
                when=move || !records.with(Vec::is_empty)
                fallback=|| {
                    view! {
                        <div class="my-rentals__empty">
                            <p>"No rentals yet. Rent a movie and enjoy the show!"</p>
                            <a href="/browse" class="btn btn--primary">"Browse Movies"</a>
                        </div>
                    }
                }
            >
                <div class="movie-grid">
                    {move || {
                        records
                            .get()
                            .into_iter()
                            .map(|record| {
                                let RentalRecord { id, title, poster, rented_on } = record;
                                view! {
                                    <article class="rental-card">
                                        <PosterImage src=poster alt=title.clone() class="rental-card__poster"/>
                                        <h2 class="rental-card__title">{title}</h2>
                                        <p class="rental-card__date">"Rented on: " {rented_on}</p>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| {
                                                records.update(|all| {
                                                    return_rental(all, id);
                                                });
                                            }
                                        >
                                            "Return Movie"
                                        </button>
                                    </article>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
