use super::*;

fn member(id: &str, role: Role) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        email: format!("{id}@uni.example"),
        name: id.to_owned(),
        role,
        avatar_url: None,
    }
}

#[test]
fn role_options_cover_every_role_in_escalation_order() {
    assert_eq!(role_options(), [Role::Casual, Role::Member, Role::Admin]);
}

#[test]
fn booking_line_names_session_and_user() {
    let booking = Booking {
        id: "b1".to_owned(),
        session_id: "s1".to_owned(),
        user_id: "u1".to_owned(),
        created_at: String::new(),
    };
    assert_eq!(booking_line(&booking), "s1 booked by u1");
}

#[test]
fn apply_role_change_updates_only_the_target_member() {
    let mut members = vec![member("u1", Role::Casual), member("u2", Role::Member)];
    apply_role_change(&mut members, "u2", Role::Admin);
    assert_eq!(members[0].role, Role::Casual);
    assert_eq!(members[1].role, Role::Admin);
}

#[test]
fn apply_role_change_ignores_unknown_members() {
    let mut members = vec![member("u1", Role::Casual)];
    apply_role_change(&mut members, "ghost", Role::Admin);
    assert_eq!(members[0].role, Role::Casual);
}
