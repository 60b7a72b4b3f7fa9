use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use schemas::Role;
use serde_json::Value;
use tower::ServiceExt;

use super::*;
use crate::routes::api_routes;
use crate::state::test_helpers::*;

fn tamper(token: &str) -> String {
    let mut chars: Vec<char> = token.chars().collect();
    let mid = token.len() / 2;
    chars[mid] = if chars[mid] == 'a' { 'b' } else { 'a' };
    chars.into_iter().collect()
}

fn expired_admin_token() -> String {
    let sessions = test_sessions();
    let two_days_ago = time::OffsetDateTime::now_utc().unix_timestamp() - 2 * 24 * 3600;
    sessions.issue_at(&profile_with_role(Role::Admin), two_days_ago).unwrap()
}

// =============================================================================
// decide — pure decision matrix
// =============================================================================

#[test]
fn unprotected_paths_bypass_the_gate_entirely() {
    let sessions = test_sessions();
    assert!(matches!(decide(&sessions, "/api/sessions", None), GateOutcome::Proceed(None)));
    assert!(matches!(
        decide(&sessions, "/api/globals/faq", Some("garbage")),
        GateOutcome::Proceed(None)
    ));
    assert!(matches!(decide(&sessions, "/", None), GateOutcome::Proceed(None)));
}

#[test]
fn admin_path_without_token_redirects_to_login() {
    let sessions = test_sessions();
    assert!(matches!(decide(&sessions, "/api/admin/users", None), GateOutcome::RedirectToLogin));
}

#[test]
fn malformed_token_redirects_to_login() {
    let sessions = test_sessions();
    assert!(matches!(
        decide(&sessions, "/api/admin/users", Some("not-a-jwt")),
        GateOutcome::RedirectToLogin
    ));
    assert!(matches!(decide(&sessions, "/api/admin/users", Some("")), GateOutcome::RedirectToLogin));
}

#[test]
fn expired_token_redirects_instead_of_forbidding() {
    let sessions = test_sessions();
    let token = expired_admin_token();
    assert!(matches!(
        decide(&sessions, "/api/admin/users", Some(&token)),
        GateOutcome::RedirectToLogin
    ));
}

#[test]
fn tampered_token_redirects_to_login() {
    let sessions = test_sessions();
    let token = tamper(&sessions.issue(&profile_with_role(Role::Admin)).unwrap());
    assert!(matches!(
        decide(&sessions, "/api/admin/users", Some(&token)),
        GateOutcome::RedirectToLogin
    ));
}

#[test]
fn non_admin_roles_are_forbidden() {
    let sessions = test_sessions();
    for role in [Role::Casual, Role::Member] {
        let token = sessions.issue(&profile_with_role(role)).unwrap();
        assert!(matches!(
            decide(&sessions, "/api/admin/users", Some(&token)),
            GateOutcome::Forbidden
        ));
    }
}

#[test]
fn admin_token_proceeds_with_claims() {
    let sessions = test_sessions();
    let token = sessions.issue(&profile_with_role(Role::Admin)).unwrap();
    match decide(&sessions, "/api/admin/users", Some(&token)) {
        GateOutcome::Proceed(Some(claims)) => {
            assert_eq!(claims.role, Role::Admin);
            assert_eq!(claims.sub, "u-admin");
        }
        other => panic!("expected Proceed with claims, got {other:?}"),
    }
}

// =============================================================================
// middleware — full router, real requests
// =============================================================================

fn admin_request(token: Option<&str>) -> Request<Body> {
    let builder = Request::builder().uri("/api/admin/users");
    let builder = match token {
        Some(token) => builder.header(header::COOKIE, format!("access_token={token}")),
        None => builder,
    };
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn gate_redirects_anonymous_admin_requests() {
    let app = api_routes(test_app_state());
    let response = app.oneshot(admin_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/auth/google");
}

#[tokio::test]
async fn gate_redirects_expired_tokens_never_403() {
    let app = api_routes(test_app_state());
    let token = expired_admin_token();
    let response = app.oneshot(admin_request(Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/auth/google");
}

#[tokio::test]
async fn gate_redirects_tampered_tokens() {
    let state = test_app_state();
    let token = tamper(&token_for(&state, Role::Admin));
    let response = api_routes(state).oneshot(admin_request(Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn gate_forbids_member_tokens_with_exact_body() {
    let state = test_app_state();
    let token = token_for(&state, Role::Member);
    let response = api_routes(state).oneshot(admin_request(Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Forbidden: admin level access is required" }));
}

#[tokio::test]
async fn gate_forwards_admin_tokens_to_the_handler() {
    let state = test_app_state();
    let token = token_for(&state, Role::Admin);
    let response = api_routes(state).oneshot(admin_request(Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json.get("docs").is_some());
}

#[tokio::test]
async fn gate_covers_admin_mutations_too() {
    let state = test_app_state();
    let token = token_for(&state, Role::Casual);
    let request = Request::builder()
        .method("POST")
        .uri("/api/admin/users")
        .header(header::COOKIE, format!("access_token={token}"))
        .body(Body::empty())
        .unwrap();
    let response = api_routes(state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn non_admin_api_paths_skip_the_gate() {
    let app = api_routes(test_app_state());
    let request = Request::builder().uri("/api/sessions").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
