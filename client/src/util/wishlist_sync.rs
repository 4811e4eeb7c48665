//! Browser wiring for the shared wishlist.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SharedWishlist` is created by `App` and provided through context.
//! Local writes publish a `wishlistUpdated` DOM event on `window`; a bridge
//! installed once per document turns that event, and `storage` events from
//! other tabs, into `Notifier::deliver` calls. Views mount through
//! [`mount_wishlist_view`] and drop their subscription on cleanup.
//!
//! DESIGN
//! ======
//! Bridge listeners live for the whole document, so their closures are
//! leaked with `Closure::forget`. Server rendering has no DOM; there the
//! notifier delivers directly and no bridge exists.

#[cfg(test)]
#[path = "wishlist_sync_test.rs"]
mod wishlist_sync_test;

use catalog::data::default_wishlist;
use leptos::prelude::*;
use wishlist::{Notifier, RecoveryPolicy, Subscription, Wishlist, WishlistStore};

use crate::state::wishlist::WishlistSnapshot;
use crate::util::storage::BrowserStorage;

/// Same-document change event name.
pub const UPDATED_EVENT: &str = "wishlistUpdated";

pub type SharedWishlist = Wishlist<BrowserStorage>;

/// Build the document's wishlist. Malformed stored data is left in place
/// and reads fall back to the starter list until the next write.
pub fn new_shared_wishlist() -> SharedWishlist {
    let store = WishlistStore::new(BrowserStorage).with_recovery(RecoveryPolicy::KeepStored, default_wishlist());
    #[cfg(feature = "hydrate")]
    {
        let notifier = Notifier::with_transport(DomTransport);
        install_bridge(&notifier);
        Wishlist::new(store, notifier)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Wishlist::new(store, Notifier::new())
    }
}

/// Mount a view on the shared wishlist. The returned signal starts empty,
/// matching the server render, and picks up the stored list once the view
/// is live in the browser. It follows every change until the owning scope
/// cleans up.
pub fn mount_wishlist_view() -> RwSignal<WishlistSnapshot> {
    let wishlist = expect_context::<SharedWishlist>();
    let snapshot = RwSignal::new(WishlistSnapshot::default());
    let subscription = StoredValue::new(None::<Subscription>);
    Effect::new(move || {
        let live = wishlist.watch(move |items| snapshot.set(WishlistSnapshot::new(items)));
        subscription.set_value(Some(live));
    });
    on_cleanup(move || {
        if let Some(live) = subscription.try_update_value(Option::take).flatten() {
            drop(live);
        }
    });
    snapshot
}

/// Publishes local changes as a `wishlistUpdated` event on `window`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DomTransport;

#[cfg(feature = "hydrate")]
impl wishlist::Transport for DomTransport {
    fn publish(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match web_sys::Event::new(UPDATED_EVENT) {
            Ok(event) => {
                if let Err(err) = window.dispatch_event(&event) {
                    leptos::logging::warn!("wishlist event dispatch failed: {err:?}");
                }
            }
            Err(err) => leptos::logging::warn!("wishlist event construction failed: {err:?}"),
        }
    }
}

#[cfg(feature = "hydrate")]
fn install_bridge(notifier: &Notifier) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wishlist::{ChangeSource, DEFAULT_KEY, is_relevant_storage_key};

    let Some(window) = web_sys::window() else {
        return;
    };

    let local = notifier.clone();
    let on_local = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
        local.deliver(ChangeSource::Local);
    });
    if let Err(err) = window.add_event_listener_with_callback(UPDATED_EVENT, on_local.as_ref().unchecked_ref()) {
        leptos::logging::warn!("wishlist listener not installed: {err:?}");
    }
    on_local.forget();

    let external = notifier.clone();
    let on_storage = Closure::<dyn Fn(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        if is_relevant_storage_key(ev.key().as_deref(), DEFAULT_KEY) {
            external.deliver(ChangeSource::External);
        }
    });
    if let Err(err) = window.add_event_listener_with_callback("storage", on_storage.as_ref().unchecked_ref()) {
        leptos::logging::warn!("storage listener not installed: {err:?}");
    }
    on_storage.forget();
}
