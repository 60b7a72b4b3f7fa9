//! Thin booking DTOs.
//!
//! These are pass-through shapes for the CMS `sessions` and `bookings`
//! collections. Timestamps stay RFC 3339 strings; no scheduling arithmetic
//! happens on this side of the wire.

use serde::{Deserialize, Serialize};

/// A bookable court session document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourtSession {
    pub id: String,
    pub title: String,
    pub court: String,
    #[serde(alias = "startsAt")]
    pub starts_at: String,
    #[serde(alias = "endsAt")]
    pub ends_at: String,
    #[serde(default)]
    pub capacity: u32,
}

/// Body of `POST /api/bookings`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    #[serde(alias = "sessionId")]
    pub session_id: String,
}

/// A booking document as stored by the CMS.
///
/// The CMS names its relationship fields `session` and `user`; both spellings
/// are accepted on the way in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    #[serde(alias = "sessionId", alias = "session")]
    pub session_id: String,
    #[serde(alias = "userId", alias = "user")]
    pub user_id: String,
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
}

#[cfg(test)]
#[path = "booking_test.rs"]
mod tests;
