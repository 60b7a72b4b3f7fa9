use super::*;

#[test]
fn court_session_accepts_cms_camel_case() {
    let doc = serde_json::json!({
        "id": "s9",
        "title": "Social Night",
        "court": "Court 3",
        "startsAt": "2026-09-03T19:00:00Z",
        "endsAt": "2026-09-03T22:00:00Z",
        "capacity": 16
    });
    let session: CourtSession = serde_json::from_value(doc).unwrap();
    assert_eq!(session.starts_at, "2026-09-03T19:00:00Z");
    assert_eq!(session.capacity, 16);
}

#[test]
fn booking_request_accepts_both_spellings() {
    let a: BookingRequest = serde_json::from_value(serde_json::json!({"sessionId": "s1"})).unwrap();
    let b: BookingRequest = serde_json::from_value(serde_json::json!({"session_id": "s1"})).unwrap();
    assert_eq!(a, b);
}

#[test]
fn booking_tolerates_missing_created_at() {
    let doc = serde_json::json!({"id": "b1", "sessionId": "s1", "userId": "u1"});
    let booking: Booking = serde_json::from_value(doc).unwrap();
    assert_eq!(booking.created_at, "");
}
