//! Reusable view components shared across pages.

pub mod footer;
pub mod movie_card;
pub mod navbar;
pub mod poster_image;
pub mod toast_host;
pub mod wishlist_button;
