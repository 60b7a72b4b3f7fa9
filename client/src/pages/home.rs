//! Member home page: onboarding copy, upcoming court sessions, booking.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Content and session inventory
//! come from the REST API after hydration; the page only renders inside a
//! [`RequireRole`] wrapper that admits any signed-in role.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use schemas::{CourtSession, Onboarding, RoleSet};

use crate::components::guard::RequireRole;
use crate::state::session::{SessionState, logout};

/// Trim an RFC 3339 timestamp down to `YYYY-MM-DD HH:MM` for display.
/// Values too short to be timestamps pass through untouched.
fn short_time(timestamp: &str) -> String {
    match timestamp.get(..16) {
        Some(prefix) => prefix.replace('T', " "),
        None => timestamp.to_owned(),
    }
}

/// One-line schedule summary for a court session.
fn session_schedule(entry: &CourtSession) -> String {
    format!("{} | {} to {}", entry.court, short_time(&entry.starts_at), short_time(&entry.ends_at))
}

/// Capacity label; sessions without a configured capacity read as open.
fn capacity_label(capacity: u32) -> String {
    if capacity == 0 { "Open session".to_owned() } else { format!("{capacity} spots") }
}

/// Toolbar greeting for the signed-in user.
fn display_name(state: &SessionState) -> String {
    state.user.as_ref().map_or_else(|| "Guest".to_owned(), |user| user.name.clone())
}

/// Home page with the session list and booking actions.
#[component]
pub fn HomePage(session: RwSignal<SessionState>) -> impl IntoView {
    let onboarding = RwSignal::new(None::<Onboarding>);
    let sessions = RwSignal::new(Vec::<CourtSession>::new());
    let sessions_loading = RwSignal::new(true);
    let notice = RwSignal::new(String::new());

    load_home_data(onboarding, sessions, sessions_loading, notice);

    let on_book = Callback::new(move |session_id: String| {
        notice.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::create_booking(&session_id).await {
                    Ok(()) => notice.set("Session booked. See you on court!".to_owned()),
                    Err(e) => notice.set(format!("Booking failed: {e}")),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session_id;
        }
    });

    view! {
        <RequireRole session=session roles=RoleSet::ALL>
            <div class="home-page">
                <header class="home-page__header toolbar">
                    <span class="toolbar__title">"Courtside"</span>
                    <span class="toolbar__spacer"></span>
                    <Show when=move || session.get().is_admin()>
                        <a class="btn toolbar__admin" href="/app/admin">
                            "Admin"
                        </a>
                    </Show>
                    <span class="toolbar__self">{move || display_name(&session.get())}</span>
                    <button class="btn toolbar__logout" on:click=move |_| logout(session) title="Logout">
                        "Logout"
                    </button>
                </header>

                <Show when=move || onboarding.get().is_some()>
                    <section class="home-page__onboarding">
                        <h2>{move || onboarding.get().map(|o| o.heading).unwrap_or_default()}</h2>
                        <p>{move || onboarding.get().map(|o| o.body).unwrap_or_default()}</p>
                    </section>
                </Show>

                <section class="home-page__sessions">
                    <h2>"Upcoming sessions"</h2>
                    <Show when=move || !notice.get().is_empty()>
                        <p class="home-page__notice">{move || notice.get()}</p>
                    </Show>
                    <Show
                        when=move || !sessions_loading.get()
                        fallback=|| view! { <p>"Loading sessions..."</p> }
                    >
                        <Show
                            when=move || !sessions.get().is_empty()
                            fallback=|| view! { <p>"No sessions are open for booking yet."</p> }
                        >
                            <ul class="session-list">
                                {move || {
                                    sessions
                                        .get()
                                        .into_iter()
                                        .map(|entry| view! { <SessionRow entry=entry on_book=on_book/> })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </Show>
                </section>
            </div>
        </RequireRole>
    }
}

/// One bookable session in the list.
#[component]
fn SessionRow(entry: CourtSession, on_book: Callback<String>) -> impl IntoView {
    let id = entry.id.clone();
    let schedule = session_schedule(&entry);
    let capacity = capacity_label(entry.capacity);

    view! {
        <li class="session-list__row">
            <div class="session-list__info">
                <span class="session-list__title">{entry.title.clone()}</span>
                <span class="session-list__schedule">{schedule}</span>
                <span class="session-list__capacity">{capacity}</span>
            </div>
            <button class="btn btn--primary session-list__book" on:click=move |_| on_book.run(id.clone())>
                "Book"
            </button>
        </li>
    }
}

/// Fetch onboarding copy and the session list once after hydration.
fn load_home_data(
    onboarding: RwSignal<Option<Onboarding>>,
    sessions: RwSignal<Vec<CourtSession>>,
    sessions_loading: RwSignal<bool>,
    notice: RwSignal<String>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            onboarding.set(crate::net::api::fetch_onboarding().await);
            match crate::net::api::fetch_sessions().await {
                Ok(list) => sessions.set(list),
                Err(e) => notice.set(format!("Could not load sessions: {e}")),
            }
            sessions_loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (onboarding, sessions, sessions_loading, notice);
    }
}
