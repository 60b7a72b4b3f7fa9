//! Edge access gate for the admin API prefix.
//!
//! DESIGN
//! ======
//! The gate is a pure decision over `(path, cookie)` wrapped in a thin Axum
//! middleware. Only `/api/admin/*` is matched; every other path bypasses the
//! gate entirely. A missing credential and an invalid one (malformed,
//! expired, tampered) take the same path out: a redirect to OAuth login,
//! never a reply that says which case occurred. A valid credential with the
//! wrong tier gets a structured 403 and no redirect.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use schemas::{Role, SessionClaims};

use super::auth::SESSION_COOKIE_NAME;
use crate::services::session::SessionService;
use crate::state::AppState;

/// Path prefix the gate protects.
pub(crate) const PROTECTED_PREFIX: &str = "/api/admin";

/// Where unauthenticated requests are sent.
pub(crate) const LOGIN_PATH: &str = "/auth/google";

/// Exact error body for a signed-in non-admin.
pub(crate) const FORBIDDEN_MESSAGE: &str = "Forbidden: admin level access is required";

/// Gate decision for one request.
#[derive(Debug)]
pub enum GateOutcome {
    /// Forward unmodified. Claims are attached when the path was protected.
    Proceed(Option<SessionClaims>),
    /// No usable credential; send the browser to OAuth login.
    RedirectToLogin,
    /// Valid credential, wrong tier.
    Forbidden,
}

/// Pure gate decision over the request path and session cookie value.
#[must_use]
pub fn decide(sessions: &SessionService, path: &str, token: Option<&str>) -> GateOutcome {
    if !path.starts_with(PROTECTED_PREFIX) {
        return GateOutcome::Proceed(None);
    }
    let Some(token) = token else {
        return GateOutcome::RedirectToLogin;
    };
    match sessions.verify(token) {
        Err(_) => GateOutcome::RedirectToLogin,
        Ok(claims) if claims.role == Role::Admin => GateOutcome::Proceed(Some(claims)),
        Ok(_) => GateOutcome::Forbidden,
    }
}

/// Middleware layered over the admin routes.
///
/// On `Proceed` the verified claims ride along in request extensions so
/// handlers can read the acting admin without re-verifying.
pub async fn admin_gate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(req.headers());
    let token = jar.get(SESSION_COOKIE_NAME).map(Cookie::value);
    match decide(&state.sessions, req.uri().path(), token) {
        GateOutcome::Proceed(claims) => {
            if let Some(claims) = claims {
                req.extensions_mut().insert(claims);
            }
            next.run(req).await
        }
        GateOutcome::RedirectToLogin => Redirect::temporary(LOGIN_PATH).into_response(),
        GateOutcome::Forbidden => {
            (StatusCode::FORBIDDEN, Json(serde_json::json!({ "error": FORBIDDEN_MESSAGE }))).into_response()
        }
    }
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
