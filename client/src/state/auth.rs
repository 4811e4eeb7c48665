//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` resolves the session once after hydration. Session-gated pages read
//! [`AuthState::gate`] to pick between a skeleton, the sign-in prompt, and
//! their content.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::SessionUser;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

/// What a session-gated page should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    Loading,
    SignIn,
    /// Signed in, but the session carries no user id.
    MissingUser,
    Ready(SessionUser),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: SessionStatus,
    pub user: Option<SessionUser>,
}

impl AuthState {
    /// State after the session lookup finished.
    pub fn resolved(user: Option<SessionUser>) -> Self {
        let status = if user.is_some() { SessionStatus::Authenticated } else { SessionStatus::Unauthenticated };
        Self { status, user }
    }

    pub fn gate(&self) -> Gate {
        match (self.status, &self.user) {
            (SessionStatus::Loading, _) => Gate::Loading,
            (SessionStatus::Unauthenticated, _) => Gate::SignIn,
            (SessionStatus::Authenticated, Some(user)) if !user.id.is_empty() => Gate::Ready(user.clone()),
            (SessionStatus::Authenticated, _) => Gate::MissingUser,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self.status {
            SessionStatus::Authenticated => self.user.as_ref().map(|u| u.id.as_str()).filter(|id| !id.is_empty()),
            _ => None,
        }
    }
}
