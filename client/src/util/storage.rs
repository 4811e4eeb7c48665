//! `localStorage` backend for the wishlist store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `wishlist::WishlistStore` only knows the `StorageBackend` seam. This is the
//! browser implementation: every call looks the storage area up again, so
//! the value is a zero-sized handle that can live in Leptos context.
//! Server rendering sees an empty store and refuses writes.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use wishlist::{StorageBackend, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(err) => Err(StorageError::Access(format!("{err:?}"))),
    }
}

#[cfg(feature = "hydrate")]
fn access_error(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Access(format!("{err:?}"))
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| access_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| access_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| access_error(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
