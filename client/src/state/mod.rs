pub mod auth;
pub mod profile;
pub mod toast;
pub mod ui;
pub mod wishlist;
