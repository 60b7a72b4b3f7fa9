use schemas::Role;
use serde_json::json;

use super::*;
use crate::state::test_helpers::FakeContent;

fn member_claims() -> SessionClaims {
    SessionClaims {
        sub: "u3".to_owned(),
        email: "rally@uni.example".to_owned(),
        role: Role::Member,
        name: "Rally".to_owned(),
        avatar_url: None,
        iat: 0,
        exp: i64::MAX,
    }
}

#[tokio::test]
async fn create_booking_posts_session_and_user_ids() {
    let fake = FakeContent::new();
    let request = BookingRequest { session_id: "s5".to_owned() };
    let out = create_booking(&fake, &member_claims(), &request).await.unwrap();
    assert_eq!(out["doc"]["session"], "s5");
    assert_eq!(out["doc"]["user"], "u3");
    let call = &fake.recorded()[0];
    assert_eq!(call.method, "POST");
    assert_eq!(call.path, "bookings");
}

#[tokio::test]
async fn list_sessions_proxies_the_collection() {
    let fake = FakeContent::new().with_list("sessions", json!({"docs": [{"id": "s1"}]}));
    let out = list_sessions(&fake, &[]).await.unwrap();
    assert_eq!(out["docs"][0]["id"], "s1");
}

#[tokio::test]
async fn upstream_failures_surface_as_cms_errors() {
    let fake = FakeContent::new().failing();
    let err = list_sessions(&fake, &[]).await.unwrap_err();
    assert!(matches!(err, BookingError::Cms(_)));
}

#[test]
fn unbuilt_operations_answer_unimplemented() {
    let fake = FakeContent::new();
    assert!(matches!(booking_period(&fake), Err(BookingError::Unimplemented)));
    assert!(matches!(session_attendees(&fake, "s1"), Err(BookingError::Unimplemented)));
    assert!(matches!(verification_token(&fake), Err(BookingError::Unimplemented)));
}

#[test]
fn unimplemented_error_message_is_stable() {
    assert_eq!(BookingError::Unimplemented.to_string(), "Method not implemented");
}
