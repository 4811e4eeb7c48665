//! Local UI chrome state (theme, mobile menu, navbar dropdown).

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub menu_open: bool,
    pub wishlist_open: bool,
}

impl UiState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close transient overlays, e.g. after navigating.
    pub fn close_overlays(&mut self) {
        self.menu_open = false;
        self.wishlist_open = false;
    }
}
