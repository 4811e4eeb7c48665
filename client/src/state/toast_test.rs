use super::*;

#[test]
fn error_toast_is_destructive() {
    let mut toasts = ToastState::default();
    toasts.error("Failed to load profile data. Please refresh the page.");
    let toast = toasts.current.expect("toast");
    assert_eq!(toast.title, "Error");
    assert_eq!(toast.kind, ToastKind::Destructive);
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut toasts = ToastState::default();
    let first = toasts.error("one");
    let second = toasts.error("two");
    toasts.dismiss(first);
    assert_eq!(toasts.current.as_ref().map(|t| t.description.as_str()), Some("two"));
    toasts.dismiss(second);
    assert!(toasts.current.is_none());
}
