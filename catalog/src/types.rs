//! Wire and storage records.
//!
//! DESIGN
//! ======
//! Field names follow the JSON the browser stores under the `wishlist` key and
//! the profile endpoints return, so serde round-trips stay lossless against
//! data written by earlier builds of the storefront.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Numeric movie identifier, unique within the catalog.
pub type MovieId = u64;

/// A catalog movie as shown on cards and stored in the wishlist.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Poster URL. May be unreachable; views substitute a placeholder.
    pub image: String,
    pub rating: f64,
    pub genre: String,
    /// Display runtime such as `"152 min"` or `"2h 28m"`.
    pub duration: String,
    pub year: u16,
}

/// A browsable listing: a movie plus its rental price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub movie: Movie,
    pub price: f64,
}

/// Lifecycle of a rental as reported by `/api/rentals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalStatus {
    Active,
    Returned,
    Overdue,
}

impl RentalStatus {
    /// Badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Returned => "Returned",
            Self::Overdue => "Overdue",
        }
    }

    /// CSS modifier used by the rental status badge.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "badge--active",
            Self::Returned => "badge--returned",
            Self::Overdue => "badge--overdue",
        }
    }
}

/// A rental returned by `GET /api/rentals?userId=`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: u64,
    pub movie: Movie,
    pub rental_date: String,
    pub due_date: String,
    pub status: RentalStatus,
}

/// Subscription lifecycle as reported by `/api/subscription`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Expired,
    Pending,
}

impl SubscriptionStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Pending => "Pending",
        }
    }
}

/// A subscription returned by `GET /api/subscription?userId=`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub plan: String,
    pub expiry_date: String,
    pub status: SubscriptionStatus,
}

/// One line of the "My Rentals" history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRecord {
    pub id: u64,
    pub title: String,
    pub poster: String,
    pub rented_on: String,
}
