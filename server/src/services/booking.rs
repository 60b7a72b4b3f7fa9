//! Booking flows over the CMS collections.
//!
//! Court sessions and bookings are plain CMS documents; this module is the
//! thin pass-through layer plus the deliberately unbuilt domain operations,
//! which answer [`BookingError::Unimplemented`] until the club settles the
//! scheduling rules.

use schemas::{BookingRequest, SessionClaims};
use serde_json::Value;

use super::cms::{CmsError, ContentApi};

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Method not implemented")]
    Unimplemented,
    #[error(transparent)]
    Cms(#[from] CmsError),
}

/// List upcoming court sessions, passing the caller's query through.
pub async fn list_sessions(content: &dyn ContentApi, query: &[(String, String)]) -> Result<Value, BookingError> {
    Ok(content.list("sessions", query).await?)
}

/// Create a booking for the signed-in user.
pub async fn create_booking(
    content: &dyn ContentApi,
    claims: &SessionClaims,
    request: &BookingRequest,
) -> Result<Value, BookingError> {
    let body = serde_json::json!({
        "session": request.session_id,
        "user": claims.sub,
    });
    Ok(content.create("bookings", body).await?)
}

/// Compute the currently bookable period.
pub fn booking_period(_content: &dyn ContentApi) -> Result<Value, BookingError> {
    Err(BookingError::Unimplemented)
}

/// List attendees for a court session.
pub fn session_attendees(_content: &dyn ContentApi, _session_id: &str) -> Result<Value, BookingError> {
    Err(BookingError::Unimplemented)
}

/// Issue an email verification token.
pub fn verification_token(_content: &dyn ContentApi) -> Result<Value, BookingError> {
    Err(BookingError::Unimplemented)
}

#[cfg(test)]
#[path = "booking_test.rs"]
mod tests;
