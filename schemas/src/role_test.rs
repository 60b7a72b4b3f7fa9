use super::*;

#[test]
fn role_round_trips_through_str() {
    for role in [Role::Casual, Role::Member, Role::Admin] {
        assert_eq!(role.as_str().parse::<Role>(), Ok(role));
    }
}

#[test]
fn role_rejects_unknown_strings() {
    assert_eq!("committee".parse::<Role>(), Err(RoleParseError("committee".to_owned())));
    assert_eq!("Admin".parse::<Role>(), Err(RoleParseError("Admin".to_owned())));
    assert!("".parse::<Role>().is_err());
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    let parsed: Role = serde_json::from_str("\"member\"").unwrap();
    assert_eq!(parsed, Role::Member);
}

#[test]
fn role_defaults_to_casual() {
    assert_eq!(Role::default(), Role::Casual);
}

#[test]
fn role_set_membership() {
    let set = RoleSet::only(Role::Member).with(Role::Admin);
    assert!(set.allows(Role::Member));
    assert!(set.allows(Role::Admin));
    assert!(!set.allows(Role::Casual));
}

#[test]
fn role_set_all_allows_every_tier() {
    for role in [Role::Casual, Role::Member, Role::Admin] {
        assert!(RoleSet::ALL.allows(role));
    }
}

#[test]
fn role_set_empty_allows_nobody() {
    assert!(RoleSet::EMPTY.is_empty());
    for role in [Role::Casual, Role::Member, Role::Admin] {
        assert!(!RoleSet::EMPTY.allows(role));
    }
}

#[test]
fn role_set_no_implicit_hierarchy() {
    // Admin membership never implies membership of other tiers.
    let admin_only = RoleSet::only(Role::Admin);
    assert!(admin_only.allows(Role::Admin));
    assert!(!admin_only.allows(Role::Member));
    assert!(!admin_only.allows(Role::Casual));
}

#[test]
fn role_set_collects_from_iterator() {
    let set: RoleSet = [Role::Casual, Role::Member].into_iter().collect();
    assert!(set.allows(Role::Casual));
    assert!(set.allows(Role::Member));
    assert!(!set.allows(Role::Admin));
}
