//! "The wishlist changed" broadcast.
//!
//! DESIGN
//! ======
//! One contract for every channel: [`Notifier::notify`] announces a change,
//! [`Notifier::on_change`] registers a handler and returns a [`Subscription`]
//! that unregisters on drop. How the announcement travels is a [`Transport`]
//! detail. Without a transport, `notify` delivers straight to local handlers;
//! with one (the browser's same-document event), `notify` only publishes and
//! whatever listens on the transport calls [`Notifier::deliver`].
//!
//! Handlers are cloned out of the registry before they run, so a handler may
//! subscribe, unsubscribe or notify without deadlocking.

#[cfg(test)]
#[path = "notifier_test.rs"]
mod notifier_test;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Where a change notification came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeSource {
    /// A view in this document changed the list.
    Local,
    /// Another document (browser tab) changed the underlying storage.
    External,
}

/// Carries a local `notify` to wherever listeners are attached.
pub trait Transport: Send + Sync {
    fn publish(&self);
}

type Handler = Arc<dyn Fn(ChangeSource) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(u64, Handler)>,
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Broadcast hub shared by every view over one store. Clones share handlers.
#[derive(Clone, Default)]
pub struct Notifier {
    registry: Arc<Mutex<Registry>>,
    transport: Option<Arc<dyn Transport>>,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscriber_count())
            .field("transport", &self.transport.is_some())
            .finish()
    }
}

impl Notifier {
    /// Notifier that delivers directly to local handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier whose `notify` goes through `transport`.
    #[must_use]
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            registry: Arc::default(),
            transport: Some(Arc::new(transport)),
        }
    }

    /// Register `handler`; it runs on every delivered change until the
    /// returned [`Subscription`] is dropped.
    pub fn on_change<F>(&self, handler: F) -> Subscription
    where
        F: Fn(ChangeSource) + Send + Sync + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.handlers.push((id, Arc::new(handler)));
        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Announce that this document changed the list.
    pub fn notify(&self) {
        match &self.transport {
            Some(transport) => transport.publish(),
            None => self.deliver(ChangeSource::Local),
        }
    }

    /// Run every registered handler once.
    pub fn deliver(&self, source: ChangeSource) {
        let handlers: Vec<Handler> = lock(&self.registry)
            .handlers
            .iter()
            .map(|(_, handler)| Arc::clone(handler))
            .collect();
        for handler in handlers {
            handler(source);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        lock(&self.registry).handlers.len()
    }
}

/// Registration handle returned by [`Notifier::on_change`].
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    /// Unsubscribe now. Same as dropping.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            lock(&registry).handlers.retain(|(id, _)| *id != self.id);
        }
    }
}

/// Whether a cross-document `storage` event for `changed` concerns the store
/// kept under `watched`. A `None` key means the whole storage was cleared.
#[must_use]
pub fn is_relevant_storage_key(changed: Option<&str>, watched: &str) -> bool {
    changed.map_or(true, |key| key == watched)
}
