//! Shared schema types for the Courtside booking portal.
//!
//! This crate owns the types that cross the server/client boundary: user
//! roles and the capability sets built from them, session claims carried in
//! the auth cookie, the access-policy evaluation used by both the edge gate
//! and the UI role wrappers, and the thin DTOs for CMS content and bookings.
//!
//! Payload shapes mirror the upstream CMS documents where they originate
//! there (string ids, camelCase field aliases); our own wire types serialize
//! snake_case.

pub mod access;
pub mod booking;
pub mod claims;
pub mod content;
pub mod role;
pub mod user;

pub use access::{AccessDecision, AccessPolicy, SessionSnapshot, evaluate};
pub use booking::{Booking, BookingRequest, CourtSession};
pub use claims::SessionClaims;
pub use content::{DataEnvelope, GlobalKind, Onboarding};
pub use role::{Role, RoleParseError, RoleSet};
pub use user::UserProfile;
