//! REST API helpers for communicating with the booking server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session and
//! content fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schemas::{Booking, CourtSession, Onboarding, Role, UserProfile};
#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
fn global_endpoint(slug: &str) -> String {
    format!("/api/globals/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn member_endpoint(member_id: &str) -> String {
    format!("/api/admin/users/{member_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_payload(session_id: &str) -> serde_json::Value {
    serde_json::json!({ "sessionId": session_id })
}

#[cfg(any(test, feature = "hydrate"))]
fn role_patch_payload(role: Role) -> serde_json::Value {
    serde_json::json!({ "role": role.as_str() })
}

#[cfg(any(test, feature = "hydrate"))]
fn booking_failed_message(status: u16) -> String {
    format!("booking failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sessions_request_failed_message(status: u16) -> String {
    format!("session list failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn members_request_failed_message(status: u16) -> String {
    format!("member list failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bookings_request_failed_message(status: u16) -> String {
    format!("booking list failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn role_update_failed_message(status: u16) -> String {
    format!("role update failed: {status}")
}

/// Pull the `docs` array out of a CMS-style list response. Anything that is
/// not a well-formed list collapses to empty rather than erroring.
#[cfg(any(test, feature = "hydrate"))]
fn parse_docs<T: DeserializeOwned>(value: serde_json::Value) -> Vec<T> {
    #[derive(serde::Deserialize)]
    #[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
    struct DocsEnvelope<T> {
        #[serde(default)]
        docs: Vec<T>,
    }
    serde_json::from_value::<DocsEnvelope<T>>(value).map(|e| e.docs).unwrap_or_default()
}

/// Unwrap a `{ "data": ... }` global envelope.
#[cfg(any(test, feature = "hydrate"))]
fn parse_global<T: DeserializeOwned>(value: serde_json::Value) -> Option<T> {
    #[derive(serde::Deserialize)]
    struct DataEnvelope<T> {
        data: T,
    }
    serde_json::from_value::<DataEnvelope<T>>(value).map(|e| e.data).ok()
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserProfile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Fetch the onboarding global from `/api/globals/onboarding`.
/// Returns `None` when the CMS has no such global or on the server.
pub async fn fetch_onboarding() -> Option<Onboarding> {
    #[cfg(feature = "hydrate")]
    {
        let url = global_endpoint("onboarding");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let value = resp.json::<serde_json::Value>().await.ok()?;
        parse_global(value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch upcoming court sessions from `/api/sessions`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_sessions() -> Result<Vec<CourtSession>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/sessions")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(sessions_request_failed_message(resp.status()));
        }
        let value = resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())?;
        Ok(parse_docs(value))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Book a court session via `POST /api/bookings`.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected, e.g. with
/// 401 when the session cookie has expired mid-visit.
pub async fn create_booking(session_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = booking_payload(session_id);
        let resp = gloo_net::http::Request::post("/api/bookings")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(booking_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch all member documents from `/api/admin/users`. Admin cookie required;
/// the server answers non-admins before this endpoint is reached.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_members() -> Result<Vec<UserProfile>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/users")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(members_request_failed_message(resp.status()));
        }
        let value = resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())?;
        Ok(parse_docs(value))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Change a member's role via `PATCH /api/admin/users/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn update_member_role(member_id: &str, role: Role) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = member_endpoint(member_id);
        let payload = role_patch_payload(role);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(role_update_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (member_id, role);
        Err("not available on server".to_owned())
    }
}

/// Fetch every booking from `/api/admin/bookings` for the dashboard.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with
/// a non-OK status.
pub async fn fetch_admin_bookings() -> Result<Vec<Booking>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/admin/bookings")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(bookings_request_failed_message(resp.status()));
        }
        let value = resp.json::<serde_json::Value>().await.map_err(|e| e.to_string())?;
        Ok(parse_docs(value))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
