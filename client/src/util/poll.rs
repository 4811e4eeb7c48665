//! Cancellable fixed-interval polling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile dashboard re-fetches its bundle on a timer. Each cycle is an
//! `Abortable` future. Starting a cycle aborts the one before it, so a slow
//! response can never land after a newer one. Dropping the [`PollHandle`]
//! stops the timer loop and aborts whatever cycle is still in flight.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

/// Profile dashboard refresh period.
pub const PROFILE_POLL_SECS: u64 = 30;

/// Tracks the single in-flight cycle of a poll loop.
#[derive(Debug, Default)]
pub struct CycleGuard {
    current: Option<AbortHandle>,
    started: u64,
}

impl CycleGuard {
    /// Abort the previous cycle, if any, and wrap `cycle` as the new one.
    pub fn begin<F: Future>(&mut self, cycle: F) -> Abortable<F> {
        self.cancel();
        let (handle, registration) = AbortHandle::new_pair();
        self.current = Some(handle);
        self.started += 1;
        Abortable::new(cycle, registration)
    }

    /// Abort the in-flight cycle. No-op when none is running.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }

    pub fn cycles_started(&self) -> u64 {
        self.started
    }
}

impl Drop for CycleGuard {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Owner of a running poll loop; dropping it stops the loop.
#[derive(Debug)]
pub struct PollHandle {
    abort: AbortHandle,
}

impl PollHandle {
    pub(crate) fn new_pair() -> (Self, AbortRegistration) {
        let (abort, registration) = AbortHandle::new_pair();
        (Self { abort }, registration)
    }

    pub fn stop(self) {}
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// Run `cycle` now and then every `interval` until the handle is dropped.
#[cfg(feature = "hydrate")]
pub fn spawn_polling<F, Fut>(interval: std::time::Duration, cycle: F) -> PollHandle
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let (handle, registration) = PollHandle::new_pair();
    let poll = Abortable::new(poll_loop(interval, cycle), registration);
    leptos::task::spawn_local(async move {
        if poll.await.is_err() {
            log::debug!("poll loop stopped");
        }
    });
    handle
}

#[cfg(feature = "hydrate")]
async fn poll_loop<F, Fut>(interval: std::time::Duration, mut cycle: F)
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let mut guard = CycleGuard::default();
    loop {
        let run = guard.begin(cycle());
        leptos::task::spawn_local(async move {
            if run.await.is_err() {
                log::debug!("poll cycle aborted");
            }
        });
        gloo_timers::future::sleep(interval).await;
    }
}
