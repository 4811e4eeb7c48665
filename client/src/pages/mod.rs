//! Route-level page components.

pub mod browse;
pub mod home;
pub mod my_rentals;
pub mod profile;
pub mod top_rentals;
pub mod wishlist;
