//! User roles and capability sets.
//!
//! DESIGN
//! ======
//! Roles are flat tiers with no hierarchy. Every access check is a set
//! membership test against a [`RoleSet`], so "admin implies member" style
//! rules never exist implicitly; a policy that wants both lists both.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Membership tier assigned to a user in the CMS `users` collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Pay-per-session visitor.
    Casual,
    /// Paid-up club member.
    Member,
    /// Club committee; may use the admin dashboard and admin API.
    Admin,
}

impl Role {
    /// Canonical string form, matching the CMS field values and JWT claim.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Casual => "casual",
            Self::Member => "member",
            Self::Admin => "admin",
        }
    }
}

impl Default for Role {
    /// New accounts start at the entry tier.
    fn default() -> Self {
        Self::Casual
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string is not one of the known tiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "casual" => Ok(Self::Casual),
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

/// Set of roles allowed by an access policy.
///
/// Small bitset so policies stay `Copy` and can live in consts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleSet(u8);

impl RoleSet {
    /// The empty set; allows nobody.
    pub const EMPTY: Self = Self(0);

    /// Every tier, i.e. "any signed-in user".
    pub const ALL: Self = Self::EMPTY.with(Role::Casual).with(Role::Member).with(Role::Admin);

    const fn bit(role: Role) -> u8 {
        1 << role as u8
    }

    /// Set containing exactly one role.
    #[must_use]
    pub const fn only(role: Role) -> Self {
        Self(Self::bit(role))
    }

    /// Copy of this set with `role` added.
    #[must_use]
    pub const fn with(self, role: Role) -> Self {
        Self(self.0 | Self::bit(role))
    }

    /// Whether `role` is a member of this set.
    #[must_use]
    pub const fn allows(self, role: Role) -> bool {
        self.0 & Self::bit(role) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Role> for RoleSet {
    fn from(role: Role) -> Self {
        Self::only(role)
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

#[cfg(test)]
#[path = "role_test.rs"]
mod tests;
