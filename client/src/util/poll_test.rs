use futures::channel::oneshot;
use futures::executor::block_on;
use futures::future::{self, Aborted};

use super::*;

#[test]
fn first_cycle_runs_to_completion() {
    let mut guard = CycleGuard::default();
    let run = guard.begin(async { 7 });
    assert_eq!(block_on(run), Ok(7));
    assert_eq!(guard.cycles_started(), 1);
}

#[test]
fn starting_a_cycle_aborts_the_previous_one() {
    let mut guard = CycleGuard::default();
    let (_slow_tx, slow_rx) = oneshot::channel::<u32>();
    let slow = guard.begin(slow_rx);
    let fast = guard.begin(async { 2 });

    assert_eq!(block_on(slow), Err(Aborted));
    assert_eq!(block_on(fast), Ok(2));
    assert_eq!(guard.cycles_started(), 2);
}

#[test]
fn superseded_cycle_never_delivers_late_result() {
    let mut guard = CycleGuard::default();
    let (tx, rx) = oneshot::channel::<&str>();
    let stale = guard.begin(rx);
    let _fresh = guard.begin(future::pending::<()>());

    // The old request resolves after it was superseded.
    tx.send("stale bundle").expect("receiver alive");
    assert_eq!(block_on(stale), Err(Aborted));
}

#[test]
fn dropping_guard_aborts_in_flight_cycle() {
    let mut guard = CycleGuard::default();
    let run = guard.begin(future::pending::<()>());
    drop(guard);
    assert_eq!(block_on(run), Err(Aborted));
}

#[test]
fn cancel_without_cycle_is_noop() {
    let mut guard = CycleGuard::default();
    guard.cancel();
    guard.cancel();
    assert_eq!(guard.cycles_started(), 0);
}

#[test]
fn dropping_poll_handle_aborts_loop() {
    let (handle, registration) = PollHandle::new_pair();
    let poll = Abortable::new(future::pending::<()>(), registration);
    drop(handle);
    assert_eq!(block_on(poll), Err(Aborted));
}

#[test]
fn stop_consumes_and_aborts() {
    let (handle, registration) = PollHandle::new_pair();
    let poll = Abortable::new(future::pending::<()>(), registration);
    handle.stop();
    assert!(block_on(poll).is_err());
}

#[test]
fn profile_poll_interval_is_thirty_seconds() {
    assert_eq!(PROFILE_POLL_SECS, 30);
}
