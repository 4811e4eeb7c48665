//! Profile dashboard state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filled by the dashboard's poll cycles from `net::api::fetch_profile_bundle`.
//! The wishlist tab does not read `remote_wishlist`; it mounts on the local
//! shared store like every other wishlist view. The remote list only feeds
//! the recent-activity lines.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use std::fmt;
use std::str::FromStr;

use catalog::{Movie, Rental, Subscription};

use crate::net::api::ApiError;
use crate::net::types::ProfileBundle;

/// Rentals previewed on the dashboard before "View All".
pub const RENTALS_PREVIEW: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Overview,
    Wishlist,
    Rentals,
    Settings,
}

impl ProfileTab {
    pub const ALL: [Self; 4] = [Self::Overview, Self::Wishlist, Self::Rentals, Self::Settings];

    pub fn value(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Wishlist => "wishlist",
            Self::Rentals => "rentals",
            Self::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Wishlist => "Wishlist",
            Self::Rentals => "Rentals",
            Self::Settings => "Settings",
        }
    }
}

impl fmt::Display for ProfileTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile tab: {0}")]
pub struct ParseTabError(pub String);

impl FromStr for ProfileTab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.value() == s)
            .ok_or_else(|| ParseTabError(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileState {
    pub tab: ProfileTab,
    pub remote_wishlist: Vec<Movie>,
    pub rentals: Vec<Rental>,
    pub subscription: Option<Subscription>,
    pub recent_activity: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            tab: ProfileTab::Overview,
            remote_wishlist: Vec::new(),
            rentals: Vec::new(),
            subscription: None,
            recent_activity: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl ProfileState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the dashboard data with a fresh bundle.
    pub fn apply_bundle(&mut self, bundle: ProfileBundle) {
        self.recent_activity = recent_activity(&bundle);
        self.remote_wishlist = bundle.wishlist;
        self.rentals = bundle.rentals;
        self.subscription = Some(bundle.subscription);
        self.loading = false;
        self.error = None;
    }

    /// Record a failed batch. Previously loaded data stays on screen.
    pub fn apply_error(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(err.user_message().to_owned());
    }
}

/// Activity lines for the overview tab. Lines whose source list is empty
/// are omitted.
pub fn recent_activity(bundle: &ProfileBundle) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if let Some(movie) = bundle.wishlist.first() {
        lines.push(format!("Added \"{}\" to your cinema wishlist", movie.title));
    }
    if let Some(rental) = bundle.rentals.first() {
        lines.push(format!("Rented \"{}\", enjoy the show", rental.movie.title));
    }
    let sub = &bundle.subscription;
    lines.push(format!("Subscription renewed for \"{}\" until {}", sub.plan, sub.expiry_date));
    lines
}
