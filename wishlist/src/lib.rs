//! Client-local wishlist store and change notification for Marquee.
//!
//! SYSTEM CONTEXT
//! ==============
//! Several independently mounted views (navbar badge, wishlist grid, profile
//! dashboard) read and write one persisted list. This crate owns that list
//! behind an injected [`StorageBackend`] and tells every mounted view to
//! re-read it through a [`Notifier`]. It has no browser dependency; the client
//! crate plugs in `localStorage` and DOM events.
//!
//! CONSISTENCY
//! ===========
//! Writes are read-modify-write against the backend with last-write-wins
//! semantics. Notifications carry no delta, so subscribers always re-read the
//! whole sequence.

pub mod notifier;
pub mod shared;
pub mod store;

pub use notifier::{ChangeSource, Notifier, Subscription, Transport, is_relevant_storage_key};
pub use shared::Wishlist;
pub use store::{
    DEFAULT_KEY, MemoryStorage, RecoveryPolicy, StorageBackend, StorageError, StoreError, WishlistStore,
};
