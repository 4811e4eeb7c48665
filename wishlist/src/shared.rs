//! Store + notifier pair handed to every view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never touch storage or DOM events directly. They receive a
//! [`Wishlist`], mutate through it (which persists and then notifies), and
//! mount with [`Wishlist::watch`] to receive the full list now and after
//! every change, until the returned subscription is dropped on unmount.

#[cfg(test)]
#[path = "shared_test.rs"]
mod shared_test;

use std::sync::Arc;

use catalog::{Movie, MovieId};

use crate::notifier::{Notifier, Subscription};
use crate::store::{StorageBackend, StoreError, WishlistStore};

#[derive(Clone, Debug)]
pub struct Wishlist<B> {
    store: WishlistStore<B>,
    notifier: Notifier,
}

impl<B> Wishlist<B>
where
    B: StorageBackend + Clone + 'static,
{
    pub fn new(store: WishlistStore<B>, notifier: Notifier) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &WishlistStore<B> {
        &self.store
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn items(&self) -> Vec<Movie> {
        self.store.read()
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.store.contains(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Add `movie` and notify if it was not already wishlisted.
    ///
    /// # Errors
    ///
    /// Returns the store error; nothing is notified on failure.
    pub fn add(&self, movie: Movie) -> Result<bool, StoreError> {
        let added = self.store.insert(movie)?;
        if added {
            self.notifier.notify();
        }
        Ok(added)
    }

    /// Remove `id` and notify if it was present.
    ///
    /// # Errors
    ///
    /// Returns the store error; nothing is notified on failure.
    pub fn remove(&self, id: MovieId) -> Result<bool, StoreError> {
        let removed = self.store.remove(id)?;
        if removed {
            self.notifier.notify();
        }
        Ok(removed)
    }

    /// Flip membership of `movie`, notify, and return the new state.
    ///
    /// # Errors
    ///
    /// Returns the store error; nothing is notified on failure.
    pub fn toggle(&self, movie: Movie) -> Result<bool, StoreError> {
        let now = self.store.toggle(movie)?;
        self.notifier.notify();
        Ok(now)
    }

    /// Empty the wishlist and notify.
    ///
    /// # Errors
    ///
    /// Returns the store error; nothing is notified on failure.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.clear()?;
        self.notifier.notify();
        Ok(())
    }

    /// Mount a view: `sink` gets the current list immediately and the full
    /// re-read list after every notification, until the subscription drops.
    pub fn watch<F>(&self, sink: F) -> Subscription
    where
        F: Fn(Vec<Movie>) + Send + Sync + 'static,
    {
        let sink = Arc::new(sink);
        sink(self.store.read());
        let store = self.store.clone();
        self.notifier.on_change(move |_| sink(store.read()))
    }
}
