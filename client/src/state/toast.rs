//! Single-slot toast notifications.
//!
//! A newer toast replaces the visible one. `seq` lets an auto-dismiss timer
//! tell whether the toast it was started for is still showing.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays up.
pub const TOAST_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub current: Option<Toast>,
    pub seq: u64,
}

impl ToastState {
    /// Show `toast` and return its sequence number.
    pub fn show(&mut self, toast: Toast) -> u64 {
        self.seq += 1;
        self.current = Some(toast);
        self.seq
    }

    pub fn error(&mut self, description: &str) -> u64 {
        self.show(Toast {
            title: "Error".to_owned(),
            description: description.to_owned(),
            kind: ToastKind::Destructive,
        })
    }

    /// Dismiss only if `seq` is still the visible toast.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}
