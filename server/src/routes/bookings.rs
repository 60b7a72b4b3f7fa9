//! Booking and court-session routes.
//!
//! The gate does not cover these paths; the one mutation here requires a
//! valid session via the [`SessionUser`] extractor instead, which answers a
//! plain 401 rather than redirecting.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use schemas::BookingRequest;
use serde_json::Value;

use super::auth::SessionUser;
use crate::services::booking::{self, BookingError};
use crate::state::AppState;

fn booking_error_response(error: &BookingError) -> Response {
    match error {
        BookingError::Unimplemented => (
            StatusCode::NOT_IMPLEMENTED,
            Json(serde_json::json!({ "error": BookingError::Unimplemented.to_string() })),
        )
            .into_response(),
        BookingError::Cms(e) => super::cms_error_status(e).into_response(),
    }
}

/// `GET /api/sessions` — list court sessions, passing query filters through.
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    match booking::list_sessions(state.content.as_ref(), &params).await {
        Ok(value) => Json(value).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "session list failed");
            booking_error_response(&e)
        }
    }
}

/// `POST /api/bookings` — create a booking for the signed-in user.
pub async fn create_booking(
    State(state): State<AppState>,
    user: SessionUser,
    Json(request): Json<BookingRequest>,
) -> Response {
    match booking::create_booking(state.content.as_ref(), &user.0, &request).await {
        Ok(value) => (StatusCode::CREATED, Json(value)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, user = %user.0.sub, "booking create failed");
            booking_error_response(&e)
        }
    }
}

/// `GET /api/bookings/period` — bookable period. Not implemented.
pub async fn booking_period(State(state): State<AppState>) -> Response {
    match booking::booking_period(state.content.as_ref()) {
        Ok(value) => Json(value).into_response(),
        Err(e) => booking_error_response(&e),
    }
}

/// `GET /api/sessions/{id}/attendees` — attendee list. Not implemented.
pub async fn session_attendees(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match booking::session_attendees(state.content.as_ref(), &id) {
        Ok(value) => Json(value).into_response(),
        Err(e) => booking_error_response(&e),
    }
}

/// `POST /api/auth/verification-token` — email verification. Not implemented.
pub async fn verification_token(State(state): State<AppState>) -> Response {
    match booking::verification_token(state.content.as_ref()) {
        Ok(value) => Json(value).into_response(),
        Err(e) => booking_error_response(&e),
    }
}

#[cfg(test)]
#[path = "bookings_test.rs"]
mod tests;
