//! Auth routes: Google OAuth flow and session endpoints.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use schemas::{SessionClaims, UserProfile};
use serde::Deserialize;
use time::Duration;
use uuid::Uuid;

use crate::services::{cms, oauth};
use crate::state::AppState;

/// Cookie holding the signed session JWT.
pub(crate) const SESSION_COOKIE_NAME: &str = "access_token";

/// Cookie holding the OAuth anti-forgery value.
pub(crate) const STATE_COOKIE_NAME: &str = "state";

/// Lifetime of the anti-forgery cookie: one login round trip.
pub(crate) const STATE_COOKIE_MAX_AGE_SECS: i64 = 60;

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("GOOGLE_REDIRECT_URI")
        .map(|uri| uri.starts_with("https://"))
        .unwrap_or(false)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Verified session claims extracted from the `access_token` cookie.
/// Use as a handler parameter to require a signed-in user of any tier.
pub struct SessionUser(pub SessionClaims);

impl<S> axum::extract::FromRequestParts<S> for SessionUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let claims = app_state.sessions.verify(token).map_err(|_| StatusCode::UNAUTHORIZED)?;
        Ok(Self(claims))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /auth/google` — set the anti-forgery cookie and redirect to Google.
pub async fn google_redirect(State(state): State<AppState>) -> Response {
    let Some(config) = &state.oauth else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Google OAuth not configured").into_response();
    };

    let oauth_state = Uuid::new_v4().to_string();
    let secure = cookie_secure();
    let cookie = Cookie::build((STATE_COOKIE_NAME, oauth_state.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(STATE_COOKIE_MAX_AGE_SECS));

    let jar = CookieJar::new().add(cookie);
    (jar, Redirect::temporary(&config.authorize_url(&oauth_state))).into_response()
}

#[derive(Deserialize)]
pub struct CallbackQuery {
    code: String,
    state: Option<String>,
}

/// `GET /auth/google/callback` — verify state, exchange code, upsert the
/// member, set the session cookie, redirect to the app.
pub async fn google_callback(
    State(state): State<AppState>,
    jar: CookieJar,
    axum::extract::Query(params): axum::extract::Query<CallbackQuery>,
) -> Response {
    let Some(config) = &state.oauth else {
        return (StatusCode::SERVICE_UNAVAILABLE, "Google OAuth not configured").into_response();
    };
    let secure = cookie_secure();

    // Verify OAuth CSRF state from cookie.
    let Some(callback_state) = params.state.as_deref() else {
        return (StatusCode::BAD_REQUEST, "missing oauth state").into_response();
    };
    let expected_state = jar.get(STATE_COOKIE_NAME).map(Cookie::value).unwrap_or_default();
    if expected_state.is_empty() || expected_state != callback_state {
        return (StatusCode::UNAUTHORIZED, "invalid oauth state").into_response();
    }

    // Exchange code for access token.
    let access_token = match oauth::exchange_code(config, &params.code).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "oauth code exchange failed");
            return (StatusCode::BAD_GATEWAY, "OAuth code exchange failed").into_response();
        }
    };

    // Fetch Google profile.
    let google_user = match oauth::fetch_google_user(&access_token).await {
        Ok(u) => u,
        Err(e) => {
            tracing::error!(error = %e, "google profile fetch failed");
            return (StatusCode::BAD_GATEWAY, "Failed to fetch Google profile").into_response();
        }
    };

    // Upsert member in the CMS.
    let profile = match cms::upsert_user(state.content.as_ref(), &google_user).await {
        Ok(p) => p,
        Err(e) => {
            tracing::error!(error = %e, "member upsert failed");
            return (StatusCode::BAD_GATEWAY, "Failed to save member profile").into_response();
        }
    };

    // Issue session token.
    let token = match state.sessions.issue(&profile) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session token issue failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };

    // Set HttpOnly session cookie, clear the one-shot state cookie.
    let session_cookie = Cookie::build((SESSION_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure);
    let clear_state_cookie = Cookie::build((STATE_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO);

    let jar = jar.add(session_cookie).add(clear_state_cookie);
    (jar, Redirect::temporary("/app")).into_response()
}

/// `GET /api/auth/me` — return the signed-in user's profile.
pub async fn me(user: SessionUser) -> Json<UserProfile> {
    Json(user.0.profile())
}

/// `POST /api/auth/logout` — clear the session cookie.
///
/// Tokens are stateless, so there is nothing to invalidate server side;
/// clearing the cookie is idempotent and never requires a valid session.
pub async fn logout() -> impl IntoResponse {
    let secure = cookie_secure();
    let cookie = Cookie::build((SESSION_COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO);

    let jar = CookieJar::new().add(cookie);
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
