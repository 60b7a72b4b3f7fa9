use super::*;

fn claims() -> SessionClaims {
    SessionClaims {
        sub: "u42".to_owned(),
        email: "smash@uni.example".to_owned(),
        role: Role::Member,
        name: "Smash Bro".to_owned(),
        avatar_url: None,
        iat: 1_700_000_000,
        exp: 1_700_604_800,
    }
}

#[test]
fn claims_round_trip_through_json() {
    let original = claims();
    let json = serde_json::to_string(&original).unwrap();
    let parsed: SessionClaims = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn role_claim_is_a_lowercase_string() {
    let json = serde_json::to_value(claims()).unwrap();
    assert_eq!(json["role"], "member");
    assert_eq!(json["sub"], "u42");
}

#[test]
fn profile_rebuilds_identity_from_claims() {
    let profile = claims().profile();
    assert_eq!(profile.id, "u42");
    assert_eq!(profile.email, "smash@uni.example");
    assert_eq!(profile.role, Role::Member);
    assert_eq!(profile.avatar_url, None);
}
