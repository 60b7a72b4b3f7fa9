//! Claims carried inside the signed session cookie.

use serde::{Deserialize, Serialize};

use crate::role::Role;
use crate::user::UserProfile;

/// JWT claims for the `access_token` cookie.
///
/// The token is the whole session: created once at login, verified on every
/// protected request, never mutated. Profile fields ride along so `/api/auth/me`
/// answers without an upstream lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// CMS user document id.
    pub sub: String,
    pub email: String,
    pub role: Role,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

impl SessionClaims {
    /// Rebuild the profile embedded in the claims.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            avatar_url: self.avatar_url.clone(),
        }
    }
}

#[cfg(test)]
#[path = "claims_test.rs"]
mod tests;
