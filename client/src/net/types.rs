//! Wire shapes consumed from the session provider and profile endpoints.
//!
//! DESIGN
//! ======
//! Movie, rental, and subscription records come from the `catalog` crate so
//! the profile endpoints and the local wishlist share one JSON shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use catalog::{Movie, Rental, RentalStatus, Subscription, SubscriptionStatus};

/// Signed-in user as reported by `/api/auth/session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub join_date: Option<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Cinematic Star")
    }

    /// First character of the name for the avatar fallback.
    pub fn initial(&self) -> String {
        self.name
            .as_deref()
            .and_then(|n| n.chars().next())
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
    }
}

/// Body of `/api/auth/session`: `{}` when signed out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SessionResponse {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub expires: Option<String>,
}

/// One successful fetch of all three profile endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileBundle {
    pub wishlist: Vec<Movie>,
    pub rentals: Vec<Rental>,
    pub subscription: Subscription,
}
