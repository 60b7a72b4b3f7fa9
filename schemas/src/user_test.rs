use super::*;

#[test]
fn accepts_cms_camel_case_documents() {
    let doc = serde_json::json!({
        "id": "665f1c2d9a",
        "email": "club@uni.example",
        "name": "Sam Porter",
        "role": "admin",
        "avatarUrl": "https://cdn.example/avatars/sam.png"
    });
    let profile: UserProfile = serde_json::from_value(doc).unwrap();
    assert_eq!(profile.role, Role::Admin);
    assert_eq!(profile.avatar_url.as_deref(), Some("https://cdn.example/avatars/sam.png"));
}

#[test]
fn missing_role_defaults_to_casual() {
    let doc = serde_json::json!({
        "id": "1",
        "email": "new@uni.example",
        "name": "New Player"
    });
    let profile: UserProfile = serde_json::from_value(doc).unwrap();
    assert_eq!(profile.role, Role::Casual);
    assert_eq!(profile.avatar_url, None);
}

#[test]
fn serializes_snake_case_and_omits_empty_avatar() {
    let profile = UserProfile {
        id: "1".to_owned(),
        email: "a@b.example".to_owned(),
        name: "A".to_owned(),
        role: Role::Member,
        avatar_url: None,
    };
    let json = serde_json::to_value(&profile).unwrap();
    assert_eq!(json["role"], "member");
    assert!(json.get("avatar_url").is_none());
}
