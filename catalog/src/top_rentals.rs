//! Category tabs for the top-rentals listing.

#[cfg(test)]
#[path = "top_rentals_test.rs"]
mod top_rentals_test;

use std::str::FromStr;

use crate::types::Movie;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown top-rentals category: {0}")]
pub struct ParseCategoryError(pub String);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Action,
    Romance,
    SciFi,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::All, Self::Action, Self::Romance, Self::SciFi];

    /// Tab value; doubles as the lowercase genre it selects.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Action => "action",
            Self::Romance => "romance",
            Self::SciFi => "sci-fi",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Action => "Action Hits",
            Self::Romance => "Romantic Classics",
            Self::SciFi => "Sci-Fi Favorites",
        }
    }

    /// Movies in this category, genre compared case-insensitively.
    #[must_use]
    pub fn select(self, movies: &[Movie]) -> Vec<Movie> {
        match self {
            Self::All => movies.to_vec(),
            other => movies
                .iter()
                .filter(|m| m.genre.eq_ignore_ascii_case(other.value()))
                .cloned()
                .collect(),
        }
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.value().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCategoryError(s.to_owned()))
    }
}
