//! Built-in mock datasets backing the storefront pages.
//!
//! There is no catalog service yet; pages read these lists directly.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::types::{CatalogEntry, Movie, MovieId, RentalRecord};

const DUNE: &str = "https://images.unsplash.com/photo-1598899134739-24c46f58b8c0?q=80&w=2056&auto=format&fit=crop";
const OPPENHEIMER: &str = "https://images.unsplash.com/photo-1536440136628-849c177e76a1?q=80&w=1925&auto=format&fit=crop";
const BATMAN: &str = "https://images.unsplash.com/photo-1509347528160-9a9e33742cdb?q=80&w=2070&auto=format&fit=crop";
const INTERSTELLAR: &str = "https://images.unsplash.com/photo-1419242902214-272b3f66ee7a?q=80&w=2013&auto=format&fit=crop";
const GODFATHER: &str = "https://images.unsplash.com/photo-1485846234645-a62644f84728?q=80&w=2059&auto=format&fit=crop";
const PULP_FICTION: &str = "https://images.unsplash.com/photo-1594909122845-11baa439b7bf?q=80&w=2070&auto=format&fit=crop";
const DARK_KNIGHT: &str = "https://images.unsplash.com/photo-1531259683007-016a7b628fc3?q=80&w=2000&auto=format&fit=crop";
const INCEPTION: &str = "https://images.unsplash.com/photo-1478720568477-152d9b164e26?q=80&w=2070&auto=format&fit=crop";
const LA_LA_LAND: &str = "https://images.unsplash.com/photo-1489599849927-2ee91cede3ba?q=80&w=2070&auto=format&fit=crop";
const TOP_GUN: &str = "https://images.unsplash.com/photo-1658785572180-0d5f6cd4e21e?q=80&w=2070&auto=format&fit=crop";
const AVATAR: &str = "https://images.unsplash.com/photo-1674574124461-56b38d0bcde2?q=80&w=2070&auto=format&fit=crop";
const ENDGAME: &str = "https://images.unsplash.com/photo-1535016120720-40c646be5580?q=80&w=2070&auto=format&fit=crop";
const COMEDY: &str = "https://images.unsplash.com/photo-1543584756-8f40a802e14f?q=80&w=2070&auto=format&fit=crop";
const HORROR: &str = "https://images.unsplash.com/photo-1542281286-9e0a16bb7366?q=80&w=2070&auto=format&fit=crop";
const ROMANCE: &str = "https://images.unsplash.com/photo-1518621736915-f3b1c41bfd00?q=80&w=2093&auto=format&fit=crop";
const ANIMATION: &str = "https://images.unsplash.com/photo-1534447677768-be436bb09401?q=80&w=2071&auto=format&fit=crop";

/// Hero banner background on the home page.
pub const HERO_IMAGE: &str = LA_LA_LAND;

fn movie(id: MovieId, title: &str, image: &str, rating: f64, genre: &str, duration: &str, year: u16) -> Movie {
    Movie {
        id,
        title: title.to_owned(),
        image: image.to_owned(),
        rating,
        genre: genre.to_owned(),
        duration: duration.to_owned(),
        year,
    }
}

fn listed(movie: Movie, price: f64) -> CatalogEntry {
    CatalogEntry { movie, price }
}

/// Everything the browse page can show.
#[must_use]
pub fn browse_catalog() -> Vec<CatalogEntry> {
    vec![
        listed(movie(1, "Dune: Part Two", DUNE, 4.8, "Sci-Fi", "166 min", 2024), 5.99),
        listed(movie(2, "Oppenheimer", OPPENHEIMER, 4.7, "Drama", "180 min", 2023), 4.99),
        listed(movie(3, "The Batman", BATMAN, 4.5, "Action", "176 min", 2022), 3.99),
        listed(movie(4, "Interstellar: Remastered", INTERSTELLAR, 4.9, "Sci-Fi", "169 min", 2023), 4.99),
        listed(movie(5, "The Godfather", GODFATHER, 4.9, "Crime", "175 min", 1972), 3.99),
        listed(movie(6, "Pulp Fiction", PULP_FICTION, 4.8, "Crime", "154 min", 1994), 3.99),
        listed(movie(7, "The Dark Knight", DARK_KNIGHT, 4.9, "Action", "152 min", 2008), 3.99),
        listed(movie(8, "Inception", INCEPTION, 4.7, "Sci-Fi", "148 min", 2010), 3.99),
        listed(movie(9, "Everything Everywhere All at Once", OPPENHEIMER, 4.7, "Comedy", "139 min", 2022), 4.49),
        listed(movie(10, "Top Gun: Maverick", TOP_GUN, 4.6, "Action", "130 min", 2022), 4.49),
        listed(movie(11, "Avatar: The Way of Water", AVATAR, 4.7, "Sci-Fi", "192 min", 2022), 5.49),
        listed(movie(12, "Spirited Away", ANIMATION, 4.9, "Animation", "125 min", 2001), 2.99),
        listed(movie(13, "Get Out", HORROR, 4.4, "Horror", "104 min", 2017), 2.99),
        listed(movie(14, "Superbad", COMEDY, 4.1, "Comedy", "113 min", 2007), 1.99),
        listed(movie(15, "La La Land", LA_LA_LAND, 4.5, "Romance", "128 min", 2016), 3.49),
        listed(movie(16, "The Notebook", ROMANCE, 4.2, "Romance", "123 min", 2004), 1.99),
    ]
}

/// Look up a catalog movie by id.
#[must_use]
pub fn find_movie(id: MovieId) -> Option<Movie> {
    browse_catalog().into_iter().find(|e| e.movie.id == id).map(|e| e.movie)
}

/// Curated rows on the home page: `(heading, movies)`.
#[must_use]
pub fn featured_rows() -> Vec<(&'static str, Vec<Movie>)> {
    let pick = |ids: &[MovieId]| ids.iter().filter_map(|id| find_movie(*id)).collect::<Vec<_>>();
    vec![
        ("New Releases", pick(&[1, 2, 3, 4, 11, 10, 9])),
        ("Top Rated", pick(&[5, 7, 12, 4, 6, 1])),
        ("Recommended For You", pick(&[8, 15, 13, 14, 16, 6])),
    ]
}

/// Genre tiles on the home page: `(genre, tile image)`.
pub const GENRE_TILES: &[(&str, &str)] = &[
    ("Action", ENDGAME),
    ("Comedy", COMEDY),
    ("Drama", GODFATHER),
    ("Sci-Fi", INCEPTION),
    ("Horror", HORROR),
    ("Romance", ROMANCE),
    ("Thriller", OPPENHEIMER),
    ("Animation", ANIMATION),
];

/// Most-rented titles for the top-rentals page.
#[must_use]
pub fn top_rentals() -> Vec<Movie> {
    vec![
        movie(101, "Inception", INCEPTION, 8.8, "Sci-Fi", "2h 28m", 2010),
        movie(102, "The Dark Knight", DARK_KNIGHT, 9.0, "Action", "2h 32m", 2008),
        movie(103, "La La Land", LA_LA_LAND, 8.0, "Romance", "2h 8m", 2016),
        movie(104, "Interstellar", INTERSTELLAR, 8.6, "Sci-Fi", "2h 49m", 2014),
        movie(105, "Top Gun: Maverick", TOP_GUN, 8.3, "Action", "2h 10m", 2022),
        movie(106, "The Notebook", ROMANCE, 7.8, "Romance", "2h 3m", 2004),
    ]
}

/// Starter wishlist shown in place of stored data that cannot be parsed.
#[must_use]
pub fn default_wishlist() -> Vec<Movie> {
    vec![
        movie(7, "The Dark Knight", DARK_KNIGHT, 4.9, "Action", "152 min", 2008),
        movie(15, "La La Land", LA_LA_LAND, 4.5, "Romance", "128 min", 2016),
    ]
}

/// Rental history shown on "My Rentals".
#[must_use]
pub fn rental_history() -> Vec<RentalRecord> {
    let record = |id: u64, title: &str, poster: &str, rented_on: &str| RentalRecord {
        id,
        title: title.to_owned(),
        poster: poster.to_owned(),
        rented_on: rented_on.to_owned(),
    };
    vec![
        record(1, "Inception", INCEPTION, "2025-02-25"),
        record(2, "Interstellar", INTERSTELLAR, "2025-02-20"),
        record(3, "The Dark Knight Rises", DARK_KNIGHT, "2025-02-18"),
        record(4, "Avengers: Endgame", ENDGAME, "2025-02-17"),
        record(5, "Dune", DUNE, "2025-02-06"),
        record(6, "The Batman", BATMAN, "2025-01-30"),
        record(7, "Oppenheimer", OPPENHEIMER, "2025-01-20"),
    ]
}
