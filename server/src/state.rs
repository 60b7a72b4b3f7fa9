//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server itself is stateless per request: content lives in the upstream CMS
//! behind the [`ContentApi`] trait object, sessions are self-contained JWTs,
//! and OAuth is plain config. Everything here is cheap to clone.

use std::sync::Arc;

use crate::services::cms::ContentApi;
use crate::services::oauth::GoogleConfig;
use crate::services::session::SessionService;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Upstream CMS; the portal's only data store.
    pub content: Arc<dyn ContentApi>,
    /// Session token issue/verify.
    pub sessions: SessionService,
    /// Optional Google OAuth. `None` if env vars are not configured.
    pub oauth: Option<GoogleConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(content: Arc<dyn ContentApi>, sessions: SessionService, oauth: Option<GoogleConfig>) -> Self {
        Self { content, sessions, oauth }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
