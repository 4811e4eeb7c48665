//! "Load more" windows over a list.

#[cfg(test)]
#[path = "paging_test.rs"]
mod paging_test;

/// How many items of a list are currently revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    shown: usize,
    initial: usize,
    step: usize,
}

impl Window {
    #[must_use]
    pub const fn new(initial: usize, step: usize) -> Self {
        Self { shown: initial, initial, step }
    }

    /// Number of items to render for a list of `len`.
    #[must_use]
    pub fn visible(&self, len: usize) -> usize {
        self.shown.min(len)
    }

    /// Whether a "load more" control should be offered.
    #[must_use]
    pub fn has_more(&self, len: usize) -> bool {
        len > self.shown
    }

    /// Reveal one more step, never past the end of the list.
    pub fn load_more(&mut self, len: usize) {
        self.shown = (self.shown + self.step).min(len.max(self.shown));
    }

    pub fn reset(&mut self) {
        self.shown = self.initial;
    }
}
