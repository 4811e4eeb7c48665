//! Poster card used by every movie grid.

#[cfg(test)]
#[path = "movie_card_test.rs"]
mod movie_card_test;

use catalog::Movie;
use leptos::prelude::*;

use crate::components::poster_image::PosterImage;
use crate::components::wishlist_button::WishlistButton;
use crate::state::wishlist::WishlistSnapshot;

/// `$3.99` style rental price.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// `2010 · Sci-Fi · 2h 28m`.
pub fn card_meta(movie: &Movie) -> String {
    format!("{} · {} · {}", movie.year, movie.genre, movie.duration)
}

pub fn rating_label(rating: f64) -> String {
    format!("★ {rating:.1}")
}

#[component]
pub fn MovieCard(
    movie: Movie,
    snapshot: RwSignal<WishlistSnapshot>,
    #[prop(optional)] price: Option<f64>,
) -> impl IntoView {
    let meta = card_meta(&movie);
    let rating = rating_label(movie.rating);
    let title = movie.title.clone();
    let image = movie.image.clone();
    let price = price.map(format_price);

    view! {
        <article class="movie-card">
            <div class="movie-card__poster">
                <PosterImage src=image alt=title.clone() class="movie-card__image"/>
                <span class="movie-card__rating">{rating}</span>
                <WishlistButton movie snapshot/>
            </div>
            <div class="movie-card__body">
                <h3 class="movie-card__title">{title}</h3>
                <p class="movie-card__meta">{meta}</p>
                {price.map(|p| view! { <p class="movie-card__price">{p}</p> })}
            </div>
        </article>
    }
}
