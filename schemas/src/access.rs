//! Access policies and the single evaluation used by UI role wrappers.
//!
//! DESIGN
//! ======
//! Gating is a pure function over a policy and a session snapshot. The result
//! is a three-way decision the caller pattern-matches; there is no callback
//! indirection and no "render children with a flag" escape hatch. While the
//! snapshot is still resolving the decision is [`AccessDecision::Pending`],
//! which renderers must treat as "show the placeholder, never the protected
//! subtree and never the fallback".

use serde::{Deserialize, Serialize};

use crate::role::RoleSet;
use crate::user::UserProfile;

/// Client-held view of the current session.
///
/// `is_loading` covers the initial profile fetch after mount; `is_pending`
/// covers an in-flight login/logout mutation. Either one parks gating at
/// [`AccessDecision::Pending`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user: Option<UserProfile>,
    pub is_loading: bool,
    pub is_pending: bool,
}

impl SessionSnapshot {
    /// Snapshot at app mount, before the profile fetch resolves.
    #[must_use]
    pub fn loading() -> Self {
        Self { user: None, is_loading: true, is_pending: false }
    }

    /// Resolved snapshot with no signed-in user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolved snapshot for a signed-in user.
    #[must_use]
    pub fn authenticated(user: UserProfile) -> Self {
        Self { user: Some(user), is_loading: false, is_pending: false }
    }

    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.is_loading || self.is_pending
    }
}

/// Declarative gate condition attached to a UI subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Only anonymous visitors pass; signed-in users are denied.
    GuestOnly,
    /// Signed-in users whose role is in the set pass.
    Roles(RoleSet),
}

impl AccessPolicy {
    /// Any signed-in user, whatever the tier.
    pub const SIGNED_IN: Self = Self::Roles(RoleSet::ALL);
}

/// Outcome of evaluating a policy against a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum AccessDecision {
    /// Session still resolving; render nothing protected yet.
    Pending,
    /// Policy failed for a settled session.
    Denied,
    /// Policy passed. Carries the resolved identity; `None` when a
    /// guest-only policy admitted an anonymous visitor.
    Granted(Option<UserProfile>),
}

impl AccessDecision {
    /// The granted identity, if any.
    #[must_use]
    pub fn identity(self) -> Option<UserProfile> {
        match self {
            Self::Granted(user) => user,
            Self::Pending | Self::Denied => None,
        }
    }
}

/// Evaluate `policy` against `snapshot`.
#[must_use]
pub fn evaluate(policy: AccessPolicy, snapshot: &SessionSnapshot) -> AccessDecision {
    if snapshot.is_resolving() {
        return AccessDecision::Pending;
    }
    match policy {
        AccessPolicy::GuestOnly => {
            if snapshot.user.is_none() {
                AccessDecision::Granted(None)
            } else {
                AccessDecision::Denied
            }
        }
        AccessPolicy::Roles(allowed) => match &snapshot.user {
            Some(user) if allowed.allows(user.role) => AccessDecision::Granted(Some(user.clone())),
            _ => AccessDecision::Denied,
        },
    }
}

#[cfg(test)]
#[path = "access_test.rs"]
mod tests;
