//! REST helpers for the session provider and the profile endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): no session and an `Unavailable` error, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The three profile endpoints are fetched concurrently and succeed or fail
//! as one batch. Callers show a single message for any [`ApiError`]; the
//! variant detail only goes to the log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::types::{ProfileBundle, SessionUser};
#[cfg(feature = "hydrate")]
use super::types::{Movie, Rental, SessionResponse, Subscription};

pub const SESSION_ENDPOINT: &str = "/api/auth/session";
pub const SIGN_IN_URL: &str = "/api/auth/signin";
pub const SIGN_OUT_URL: &str = "/api/auth/signout";
pub const WISHLIST_ENDPOINT: &str = "/api/wishlist";
pub const RENTALS_ENDPOINT: &str = "/api/rentals";
pub const SUBSCRIPTION_ENDPOINT: &str = "/api/subscription";

/// The only fetch failure text users see.
pub const PROFILE_LOAD_FAILED: &str = "Failed to load profile data. Please refresh the page.";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: &'static str, message: String },
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("{endpoint} returned an unreadable body: {message}")]
    Decode { endpoint: &'static str, message: String },
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn user_message(&self) -> &'static str {
        PROFILE_LOAD_FAILED
    }
}

/// `endpoint?userId=<encoded>`.
#[cfg(any(test, feature = "hydrate"))]
fn user_query_url(endpoint: &str, user_id: &str) -> String {
    format!("{endpoint}?userId={}", encode_query_value(user_id))
}

/// Everything but RFC 3986 unreserved characters.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode one query-string value.
pub fn encode_query_value(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_VALUE).to_string()
}

/// Resolve the current session. `None` when signed out, on failure, or on
/// the server.
pub async fn fetch_session() -> Option<SessionUser> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionResponse>().await.ok()?.user
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(endpoint: &'static str, user_id: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let url = user_query_url(endpoint, user_id);
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport { endpoint, message: e.to_string() })?;
    if !resp.ok() {
        return Err(ApiError::Status { endpoint, status: resp.status() });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode { endpoint, message: e.to_string() })
}

/// Fetch wishlist, rentals, and subscription for `user_id` concurrently.
///
/// # Errors
///
/// Returns the first [`ApiError`] among the three requests; no partial
/// bundle is produced.
pub async fn fetch_profile_bundle(user_id: &str) -> Result<ProfileBundle, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (wishlist, rentals, subscription) = futures::try_join!(
            get_json::<Vec<Movie>>(WISHLIST_ENDPOINT, user_id),
            get_json::<Vec<Rental>>(RENTALS_ENDPOINT, user_id),
            get_json::<Subscription>(SUBSCRIPTION_ENDPOINT, user_id),
        )?;
        Ok(ProfileBundle { wishlist, rentals, subscription })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err(ApiError::Unavailable)
    }
}
