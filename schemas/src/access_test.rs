use super::*;
use crate::role::Role;

fn user(role: Role) -> UserProfile {
    UserProfile {
        id: "u1".to_owned(),
        email: "player@uni.example".to_owned(),
        name: "Player One".to_owned(),
        role,
        avatar_url: None,
    }
}

#[test]
fn loading_snapshot_is_pending_for_every_policy() {
    let snapshot = SessionSnapshot::loading();
    assert_eq!(evaluate(AccessPolicy::GuestOnly, &snapshot), AccessDecision::Pending);
    assert_eq!(evaluate(AccessPolicy::SIGNED_IN, &snapshot), AccessDecision::Pending);
    assert_eq!(
        evaluate(AccessPolicy::Roles(RoleSet::only(Role::Admin)), &snapshot),
        AccessDecision::Pending
    );
}

#[test]
fn pending_mutation_also_parks_the_decision() {
    let snapshot = SessionSnapshot { is_pending: true, ..SessionSnapshot::anonymous() };
    assert_eq!(evaluate(AccessPolicy::GuestOnly, &snapshot), AccessDecision::Pending);
}

#[test]
fn guest_only_admits_anonymous_without_identity() {
    let snapshot = SessionSnapshot::anonymous();
    assert_eq!(evaluate(AccessPolicy::GuestOnly, &snapshot), AccessDecision::Granted(None));
}

#[test]
fn guest_only_denies_signed_in_users() {
    let snapshot = SessionSnapshot::authenticated(user(Role::Casual));
    assert_eq!(evaluate(AccessPolicy::GuestOnly, &snapshot), AccessDecision::Denied);
}

#[test]
fn role_policy_grants_with_identity_when_role_allowed() {
    let snapshot = SessionSnapshot::authenticated(user(Role::Member));
    let decision = evaluate(AccessPolicy::Roles(RoleSet::only(Role::Member)), &snapshot);
    let granted = decision.identity().unwrap();
    assert_eq!(granted.role, Role::Member);
    assert_eq!(granted.id, "u1");
}

#[test]
fn role_policy_denies_roles_outside_the_set() {
    let snapshot = SessionSnapshot::authenticated(user(Role::Member));
    assert_eq!(
        evaluate(AccessPolicy::Roles(RoleSet::only(Role::Admin)), &snapshot),
        AccessDecision::Denied
    );
}

#[test]
fn role_policy_denies_anonymous() {
    let snapshot = SessionSnapshot::anonymous();
    assert_eq!(evaluate(AccessPolicy::SIGNED_IN, &snapshot), AccessDecision::Denied);
}

#[test]
fn signed_in_policy_admits_every_tier() {
    for role in [Role::Casual, Role::Member, Role::Admin] {
        let snapshot = SessionSnapshot::authenticated(user(role));
        assert!(matches!(evaluate(AccessPolicy::SIGNED_IN, &snapshot), AccessDecision::Granted(Some(_))));
    }
}

#[test]
fn identity_is_none_for_non_granted_decisions() {
    assert_eq!(AccessDecision::Pending.identity(), None);
    assert_eq!(AccessDecision::Denied.identity(), None);
}
