//! Access wrapper components for route content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap their content in [`GuestOnly`] or [`RequireRole`] instead of
//! checking the session themselves. Wrappers evaluate the session snapshot
//! against an [`AccessPolicy`]: granted content renders, denied visitors are
//! navigated away, and an unresolved session holds a placeholder so nobody
//! is bounced before the profile fetch settles.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use schemas::{AccessDecision, AccessPolicy, RoleSet, SessionSnapshot, evaluate};

use crate::state::session::{APP_HOME, SessionState};

/// SPA route that hosts the login card.
pub const LOGIN_ROUTE: &str = "/app/login";

fn should_render(policy: AccessPolicy, snapshot: &SessionSnapshot) -> bool {
    matches!(evaluate(policy, snapshot), AccessDecision::Granted(_))
}

fn should_redirect(policy: AccessPolicy, snapshot: &SessionSnapshot) -> bool {
    matches!(evaluate(policy, snapshot), AccessDecision::Denied)
}

/// What to show while content is withheld.
fn placeholder_message(snapshot: &SessionSnapshot) -> &'static str {
    if snapshot.is_resolving() { "Loading..." } else { "Redirecting..." }
}

/// Navigate away whenever the session settles on a denial.
fn install_denied_redirect<F>(session: RwSignal<SessionState>, policy: AccessPolicy, target: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect(policy, &session.get().snapshot()) {
            navigate(&target, NavigateOptions::default());
        }
    });
}

/// Render children only while nobody is signed in; signed-in visitors are
/// sent to the app home (or `redirect_to`).
#[component]
pub fn GuestOnly(
    session: RwSignal<SessionState>,
    #[prop(optional, into)] redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let target = redirect_to.unwrap_or_else(|| APP_HOME.to_owned());
    install_denied_redirect(session, AccessPolicy::GuestOnly, target, use_navigate());

    view! {
        <Show
            when=move || should_render(AccessPolicy::GuestOnly, &session.get().snapshot())
            fallback=move || {
                view! {
                    <p class="guard__placeholder">
                        {move || placeholder_message(&session.get().snapshot())}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Render children only for signed-in users whose role is in `roles`;
/// everyone else is sent to the login route (or `redirect_to`).
#[component]
pub fn RequireRole(
    session: RwSignal<SessionState>,
    roles: RoleSet,
    #[prop(optional, into)] redirect_to: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let policy = AccessPolicy::Roles(roles);
    let target = redirect_to.unwrap_or_else(|| LOGIN_ROUTE.to_owned());
    install_denied_redirect(session, policy, target, use_navigate());

    view! {
        <Show
            when=move || should_render(policy, &session.get().snapshot())
            fallback=move || {
                view! {
                    <p class="guard__placeholder">
                        {move || placeholder_message(&session.get().snapshot())}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
