//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` is created by the root `App` and handed to
//! pages and access wrappers as a prop. Wrappers never read cookies or
//! tokens; they evaluate the plain [`SessionSnapshot`] this state exposes.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use schemas::{Role, SessionSnapshot, UserProfile};

/// Where the OAuth login flow starts. Navigating here leaves the SPA; the
/// rest of the flow is server-side redirects.
pub const LOGIN_URL: &str = "/auth/google";

/// Where a signed-in user lands after login or logout.
pub const APP_HOME: &str = "/app";

/// Session state tracking the current user and resolution status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    /// True until the first `/api/auth/me` round trip settles.
    pub loading: bool,
    /// True while a login redirect is in flight.
    pub pending: bool,
}

impl SessionState {
    /// Initial state: nothing known yet, profile fetch still outstanding.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true, pending: false }
    }

    /// State after the profile fetch settled, signed in or not.
    #[must_use]
    pub fn resolved(user: Option<UserProfile>) -> Self {
        Self { user, loading: false, pending: false }
    }

    /// Mark a login redirect as started so guards hold their placeholder
    /// instead of bouncing the user around mid-navigation.
    pub fn begin_pending(&mut self) {
        self.pending = true;
    }

    /// Drop the signed-in user, e.g. after logout.
    pub fn clear(&mut self) {
        self.user = None;
        self.loading = false;
        self.pending = false;
    }

    /// True when the signed-in user is a club admin.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role == Role::Admin)
    }

    /// The plain snapshot access wrappers evaluate.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            is_loading: self.loading,
            is_pending: self.pending,
        }
    }
}

/// Resolve the session once by asking the server who the cookie belongs to.
/// No-op during SSR; the server renders the loading placeholder and the
/// hydrated client fills in the rest.
pub fn load_current_user(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            session.set(SessionState::resolved(user));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Leave the SPA for the server-side OAuth flow.
pub fn begin_login(session: RwSignal<SessionState>) {
    session.update(SessionState::begin_pending);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_URL);
        }
    }
}

/// Clear the server cookie, then the local state, then return home.
pub fn logout(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            session.update(SessionState::clear);
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(APP_HOME);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
