//! Admin dashboard: member management and the booking overview.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here talks to `/api/admin/*`, which the server gates on an
//! admin cookie, so the [`RequireRole`] wrapper and the edge gate enforce
//! the same rule from both sides.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use schemas::{Booking, Role, RoleSet, UserProfile};

use crate::components::guard::RequireRole;
use crate::state::session::{APP_HOME, SessionState, logout};

/// Selectable roles, in escalation order.
fn role_options() -> [Role; 3] {
    [Role::Casual, Role::Member, Role::Admin]
}

/// One-line booking summary for the overview list.
fn booking_line(booking: &Booking) -> String {
    format!("{} booked by {}", booking.session_id, booking.user_id)
}

/// Apply a role change to the locally cached member list.
fn apply_role_change(members: &mut [UserProfile], member_id: &str, role: Role) {
    if let Some(member) = members.iter_mut().find(|m| m.id == member_id) {
        member.role = role;
    }
}

/// Admin page with the members table and booking overview.
#[component]
pub fn AdminPage(session: RwSignal<SessionState>) -> impl IntoView {
    let members = RwSignal::new(Vec::<UserProfile>::new());
    let bookings = RwSignal::new(Vec::<Booking>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    load_admin_data(members, bookings, loading, error);

    let on_role_change = Callback::new(move |(member_id, role): (String, Role)| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::update_member_role(&member_id, role).await {
                    Ok(()) => members.update(|list| apply_role_change(list, &member_id, role)),
                    Err(e) => error.set(format!("Could not change role: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (member_id, role);
        }
    });

    view! {
        <RequireRole session=session roles=RoleSet::only(Role::Admin) redirect_to=APP_HOME.to_owned()>
            <div class="admin-page">
                <header class="admin-page__header toolbar">
                    <span class="toolbar__title">"Courtside Admin"</span>
                    <a class="btn toolbar__back" href=APP_HOME>
                        "Back to app"
                    </a>
                    <span class="toolbar__spacer"></span>
                    <button class="btn toolbar__logout" on:click=move |_| logout(session) title="Logout">
                        "Logout"
                    </button>
                </header>

                <Show when=move || !error.get().is_empty()>
                    <p class="admin-page__error">{move || error.get()}</p>
                </Show>

                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading dashboard..."</p> }>
                    <section class="admin-page__members">
                        <h2>"Members"</h2>
                        <table class="member-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Email"</th>
                                    <th>"Role"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    members
                                        .get()
                                        .into_iter()
                                        .map(|member| {
                                            view! { <MemberRow member=member on_role_change=on_role_change/> }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </tbody>
                        </table>
                    </section>

                    <section class="admin-page__bookings">
                        <h2>{move || format!("Bookings ({})", bookings.get().len())}</h2>
                        <ul class="booking-list">
                            {move || {
                                bookings
                                    .get()
                                    .iter()
                                    .map(|booking| {
                                        view! { <li class="booking-list__row">{booking_line(booking)}</li> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </section>
                </Show>
            </div>
        </RequireRole>
    }
}

/// One member row with an inline role selector.
#[component]
fn MemberRow(member: UserProfile, on_role_change: Callback<(String, Role)>) -> impl IntoView {
    let member_id = member.id.clone();
    let current_role = member.role;

    view! {
        <tr class="member-table__row">
            <td>{member.name.clone()}</td>
            <td>{member.email.clone()}</td>
            <td>
                <select
                    class="member-table__role"
                    on:change=move |ev| {
                        if let Ok(role) = event_target_value(&ev).parse::<Role>() {
                            on_role_change.run((member_id.clone(), role));
                        }
                    }
                >
                    {role_options()
                        .into_iter()
                        .map(|role| {
                            view! {
                                <option value=role.as_str() selected=role == current_role>
                                    {role.as_str()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </td>
        </tr>
    }
}

/// Fetch members and bookings once after hydration.
fn load_admin_data(
    members: RwSignal<Vec<UserProfile>>,
    bookings: RwSignal<Vec<Booking>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_members().await {
                Ok(list) => members.set(list),
                Err(e) => error.set(format!("Could not load members: {e}")),
            }
            match crate::net::api::fetch_admin_bookings().await {
                Ok(list) => bookings.set(list),
                Err(e) => error.set(format!("Could not load bookings: {e}")),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (members, bookings, loading, error);
    }
}
