//! Admin member-management routes.
//!
//! All of these sit behind the edge gate, so handlers can assume an admin
//! session and stay thin pass-throughs to the CMS `users` and `bookings`
//! collections.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::Value;

use crate::services::cms::CmsError;
use crate::state::AppState;

fn log_and_map(error: &CmsError, what: &'static str) -> StatusCode {
    tracing::error!(error = %error, what, "admin cms proxy failed");
    super::cms_error_status(error)
}

/// `GET /api/admin/users` — list member documents.
pub async fn list_members(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, StatusCode> {
    state
        .content
        .list("users", &params)
        .await
        .map(Json)
        .map_err(|e| log_and_map(&e, "list users"))
}

/// `POST /api/admin/users` — create a member document.
pub async fn create_member(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    state
        .content
        .create("users", body)
        .await
        .map(|value| (StatusCode::CREATED, Json(value)))
        .map_err(|e| log_and_map(&e, "create user"))
}

/// `GET /api/admin/users/{id}` — fetch one member document.
pub async fn get_member(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    state
        .content
        .get("users", &id)
        .await
        .map(Json)
        .map_err(|e| log_and_map(&e, "get user"))
}

/// `PATCH /api/admin/users/{id}` — update a member document (role changes
/// included; the CMS validates the payload).
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    state
        .content
        .update("users", &id, body)
        .await
        .map(Json)
        .map_err(|e| log_and_map(&e, "update user"))
}

/// `DELETE /api/admin/users/{id}` — delete a member document.
pub async fn delete_member(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>, StatusCode> {
    state
        .content
        .delete("users", &id)
        .await
        .map(Json)
        .map_err(|e| log_and_map(&e, "delete user"))
}

/// `GET /api/admin/bookings` — list all bookings for the dashboard.
pub async fn list_admin_bookings(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Value>, StatusCode> {
    state
        .content
        .list("bookings", &params)
        .await
        .map(Json)
        .map_err(|e| log_and_map(&e, "list bookings"))
}

#[cfg(test)]
#[path = "members_test.rs"]
mod tests;
