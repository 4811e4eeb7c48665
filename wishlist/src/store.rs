//! Persisted wishlist sequence over a pluggable key-value backend.
//!
//! DESIGN
//! ======
//! The stored value is a JSON array of [`Movie`] records under one key
//! (`wishlist` by default). Identifiers are unique within the array: reads and
//! writes both drop later duplicates, so the array is the single source of
//! truth for "is this movie wishlisted". An empty list removes the key rather
//! than storing `[]`.
//!
//! RECOVERY
//! ========
//! A value that fails to parse never reaches views as an error. [`read`]
//! substitutes the configured fallback list and, depending on
//! [`RecoveryPolicy`], either leaves the bad value in place or overwrites it.
//! [`try_read`] exposes the typed error for callers that want it.
//!
//! [`read`]: WishlistStore::read
//! [`try_read`]: WishlistStore::try_read

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use catalog::{Movie, MovieId};

/// Storage key used by the storefront.
pub const DEFAULT_KEY: &str = "wishlist";

/// Failure reported by a [`StorageBackend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (server render, storage disabled).
    #[error("storage is unavailable")]
    Unavailable,
    /// The backend rejected the operation (quota, security policy).
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Error returned by [`WishlistStore`] operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] StorageError),
    /// The stored value is not a JSON array of movies.
    #[error("stored wishlist is malformed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error("failed to serialize wishlist: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Minimal string key-value storage, shaped after `window.localStorage`.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value for `key`, `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be reached.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be reached.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Clones share the same slots, which lets tests mount
/// several views over one "browser profile".
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with a raw value, e.g. data written by another build.
    #[must_use]
    pub fn with_raw(key: &str, raw: &str) -> Self {
        let storage = Self::new();
        storage.slots().insert(key.to_owned(), raw.to_owned());
        storage
    }

    /// Raw stored value, bypassing parsing.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots().get(key).cloned()
    }

    fn slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StorageBackend for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots().remove(key);
        Ok(())
    }
}

/// What [`WishlistStore::read`] does with a stored value it cannot parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecoveryPolicy {
    /// Return the fallback list and leave the stored value untouched.
    #[default]
    KeepStored,
    /// Return the fallback list and persist it over the stored value.
    Reset,
}

/// The wishlist sequence persisted in a [`StorageBackend`].
#[derive(Clone, Debug)]
pub struct WishlistStore<B> {
    backend: B,
    key: String,
    policy: RecoveryPolicy,
    fallback: Vec<Movie>,
}

impl<B: StorageBackend> WishlistStore<B> {
    /// Store under [`DEFAULT_KEY`] with an empty fallback and
    /// [`RecoveryPolicy::KeepStored`].
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_KEY.to_owned(),
            policy: RecoveryPolicy::default(),
            fallback: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        key.clone_into(&mut self.key);
        self
    }

    /// Choose how unreadable data is handled and which list replaces it.
    #[must_use]
    pub fn with_recovery(mut self, policy: RecoveryPolicy, fallback: Vec<Movie>) -> Self {
        self.policy = policy;
        self.fallback = dedup(fallback);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Parse the stored sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if storage is unreachable and
    /// [`StoreError::Malformed`] if the stored value is not a movie array.
    pub fn try_read(&self) -> Result<Vec<Movie>, StoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(Vec::new());
        };
        let items: Vec<Movie> = serde_json::from_str(&raw).map_err(StoreError::Malformed)?;
        Ok(dedup(items))
    }

    /// The stored sequence; never fails.
    ///
    /// Absent data reads as empty. Malformed data reads as the fallback list
    /// (see [`RecoveryPolicy`]). An unreachable backend reads as empty.
    pub fn read(&self) -> Vec<Movie> {
        match self.try_read() {
            Ok(items) => items,
            Err(StoreError::Malformed(err)) => {
                log::warn!("wishlist under {:?} is unreadable, using fallback: {err}", self.key);
                if self.policy == RecoveryPolicy::Reset {
                    if let Err(err) = self.write(&self.fallback) {
                        log::warn!("failed to reset wishlist: {err}");
                    }
                }
                self.fallback.clone()
            }
            Err(err) => {
                log::warn!("wishlist read failed: {err}");
                Vec::new()
            }
        }
    }

    /// Replace the stored sequence. Duplicate ids after the first are
    /// dropped; an empty sequence clears the key.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialize`] or [`StoreError::Backend`].
    pub fn write(&self, items: &[Movie]) -> Result<(), StoreError> {
        if items.is_empty() {
            return self.clear();
        }
        let unique = dedup(items.to_vec());
        let raw = serde_json::to_string(&unique).map_err(StoreError::Serialize)?;
        self.backend.set(&self.key, &raw)?;
        log::debug!("wishlist saved: {} items", unique.len());
        Ok(())
    }

    /// Remove the stored sequence entirely.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if storage is unreachable.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)?;
        log::debug!("wishlist cleared");
        Ok(())
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.read().iter().any(|m| m.id == id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `movie` unless its id is already present. Returns whether the
    /// list changed.
    ///
    /// # Errors
    ///
    /// Propagates [`write`](Self::write) failures.
    pub fn insert(&self, movie: Movie) -> Result<bool, StoreError> {
        let mut items = self.read();
        if items.iter().any(|m| m.id == movie.id) {
            return Ok(false);
        }
        items.push(movie);
        self.write(&items)?;
        Ok(true)
    }

    /// Remove the movie with `id`. Returns whether the list changed.
    ///
    /// # Errors
    ///
    /// Propagates [`write`](Self::write) failures.
    pub fn remove(&self, id: MovieId) -> Result<bool, StoreError> {
        let mut items = self.read();
        let before = items.len();
        items.retain(|m| m.id != id);
        if items.len() == before {
            return Ok(false);
        }
        self.write(&items)?;
        Ok(true)
    }

    /// Add `movie` if absent, remove it if present. Returns the new
    /// wishlisted state.
    ///
    /// # Errors
    ///
    /// Propagates [`write`](Self::write) failures.
    pub fn toggle(&self, movie: Movie) -> Result<bool, StoreError> {
        if self.remove(movie.id)? {
            Ok(false)
        } else {
            self.insert(movie)
        }
    }
}

fn dedup(items: Vec<Movie>) -> Vec<Movie> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|m| seen.insert(m.id)).collect()
}
