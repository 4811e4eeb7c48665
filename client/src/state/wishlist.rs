//! Per-view snapshot of the shared wishlist.
//!
//! Each mounted view holds its own snapshot, refreshed from the store on
//! every change notification (see `util::wishlist_sync`).

#[cfg(test)]
#[path = "wishlist_test.rs"]
mod wishlist_test;

use catalog::{Movie, MovieId, Window};

/// Items shown in the navbar dropdown.
pub const BADGE_PREVIEW: usize = 4;
/// Items shown on the profile dashboard's wishlist tab.
pub const DASHBOARD_PREVIEW: usize = 3;
/// Wishlist page grid paging.
pub const GRID_PAGE: Window = Window::new(12, 6);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WishlistSnapshot {
    items: Vec<Movie>,
}

impl WishlistSnapshot {
    pub fn new(items: Vec<Movie>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.items.iter().any(|m| m.id == id)
    }

    /// The first `limit` items.
    pub fn preview(&self, limit: usize) -> Vec<Movie> {
        self.items.iter().take(limit).cloned().collect()
    }

    /// Whether a "View All (n)" link is needed after a preview of `limit`.
    pub fn has_overflow(&self, limit: usize) -> bool {
        self.items.len() > limit
    }
}
