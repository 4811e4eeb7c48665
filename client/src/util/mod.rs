pub mod dark_mode;
pub mod poll;
pub mod poster;
pub mod storage;
pub mod wishlist_sync;
