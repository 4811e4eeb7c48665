//! Browse-page filtering and sorting over the in-memory catalog.
//!
//! Filters compose in a fixed order (title search, genre, price, year,
//! minimum rating) and the result is then sorted. Sorting is stable, so
//! entries that compare equal keep their catalog order.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::types::CatalogEntry;

/// Genre options offered by the browse filter. `"All"` disables the filter.
pub const GENRES: &[&str] = &[
    "All",
    "Action",
    "Adventure",
    "Animation",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Fantasy",
    "Horror",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Thriller",
    "Western",
];

/// Minimum-rating options; `0.0` means "any rating".
pub const RATING_STEPS: &[f64] = &[0.0, 3.0, 3.5, 4.0, 4.5];

/// Error returned when a sort key from the URL or a select is unknown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order: {0}")]
pub struct ParseSortError(pub String);

/// Result ordering for the browse grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Newest,
    Oldest,
    Rating,
    PriceLow,
    PriceHigh,
}

impl SortBy {
    pub const ALL: [Self; 5] = [Self::Newest, Self::Oldest, Self::Rating, Self::PriceLow, Self::PriceHigh];

    /// Stable key used in select values and query strings.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Rating => "rating",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
        }
    }

    /// Human label for the sort select.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest First",
            Self::Oldest => "Oldest First",
            Self::Rating => "Highest Rated",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
        }
    }

    fn compare(self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            Self::Newest => b.movie.year.cmp(&a.movie.year),
            Self::Oldest => a.movie.year.cmp(&b.movie.year),
            Self::Rating => b.movie.rating.total_cmp(&a.movie.rating),
            Self::PriceLow => a.price.total_cmp(&b.price),
            Self::PriceHigh => b.price.total_cmp(&a.price),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = ParseSortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| ParseSortError(s.to_owned()))
    }
}

/// Every browse control in one value so the page can derive its grid from a
/// single memoized input.
#[derive(Clone, Debug, PartialEq)]
pub struct BrowseQuery {
    pub search: String,
    /// `None` means "All".
    pub genre: Option<String>,
    pub price_range: (f64, f64),
    pub year_range: (u16, u16),
    /// `0.0` disables the rating filter.
    pub min_rating: f64,
    pub sort: SortBy,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            genre: None,
            price_range: (0.0, 10.0),
            year_range: (1970, 2024),
            min_rating: 0.0,
            sort: SortBy::Newest,
        }
    }
}

impl BrowseQuery {
    /// Select a genre by its display name; `"All"` or blank clears the filter.
    pub fn set_genre(&mut self, genre: &str) {
        let genre = genre.trim();
        self.genre = if genre.is_empty() || genre.eq_ignore_ascii_case("all") {
            None
        } else {
            Some(genre.to_owned())
        };
    }

    /// Reset the controls the "Reset Filters" action covers. Price, year and
    /// sort are left as chosen.
    pub fn reset_filters(&mut self) {
        self.search.clear();
        self.genre = None;
        self.min_rating = 0.0;
    }

    /// Whether a single entry passes every active filter.
    #[must_use]
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        let movie = &entry.movie;
        let search = self.search.trim();
        if !search.is_empty() && !movie.title.to_lowercase().contains(&search.to_lowercase()) {
            return false;
        }
        if let Some(genre) = &self.genre {
            if movie.genre != *genre {
                return false;
            }
        }
        let (min_price, max_price) = self.price_range;
        if entry.price < min_price || entry.price > max_price {
            return false;
        }
        let (min_year, max_year) = self.year_range;
        if movie.year < min_year || movie.year > max_year {
            return false;
        }
        self.min_rating <= 0.0 || movie.rating >= self.min_rating
    }

    /// Filter then sort `entries` into a new list.
    #[must_use]
    pub fn apply(&self, entries: &[CatalogEntry]) -> Vec<CatalogEntry> {
        let mut out: Vec<CatalogEntry> = entries.iter().filter(|e| self.matches(e)).cloned().collect();
        out.sort_by(|a, b| self.sort.compare(a, b));
        out
    }
}
