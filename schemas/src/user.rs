//! User profile shared between the auth endpoints, the OAuth upsert, and the UI.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A user document from the CMS `users` collection.
///
/// Deserialization accepts the CMS camelCase spelling via aliases; our own
/// responses serialize snake_case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// CMS document id.
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default, alias = "avatarUrl", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

#[cfg(test)]
#[path = "user_test.rs"]
mod tests;
