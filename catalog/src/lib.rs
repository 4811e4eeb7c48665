//! Storefront domain records and catalog queries for Marquee.
//!
//! This crate is UI-framework agnostic so the client and the wishlist store
//! can share one definition of a movie and its JSON shape. Everything here is
//! plain data plus pure filtering/sorting over in-memory slices.

pub mod browse;
pub mod data;
pub mod paging;
pub mod top_rentals;
pub mod types;

pub use browse::{BrowseQuery, ParseSortError, SortBy};
pub use paging::Window;
pub use top_rentals::{Category, ParseCategoryError};
pub use types::{
    CatalogEntry, Movie, MovieId, Rental, RentalRecord, RentalStatus, Subscription, SubscriptionStatus,
};
