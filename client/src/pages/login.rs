//! Login page with the Google sign-in entry point.
//!
//! Signing in leaves the SPA entirely: the button navigates to the server's
//! OAuth initiator, and the user comes back with a session cookie.

use leptos::prelude::*;

use crate::components::guard::GuestOnly;
use crate::state::session::{LOGIN_URL, SessionState, begin_login};

#[component]
pub fn LoginPage(session: RwSignal<SessionState>) -> impl IntoView {
    view! {
        <GuestOnly session=session>
            <div class="login-page">
                <div class="login-card">
                    <h1>"Courtside"</h1>
                    <p class="login-card__subtitle">"University Badminton Club bookings"</p>
                    <a
                        href=LOGIN_URL
                        class="login-button"
                        on:click=move |ev| {
                            ev.prevent_default();
                            begin_login(session);
                        }
                    >
                        "Sign in with Google"
                    </a>
                    <p class="login-card__hint">
                        "New here? Sign in once and you can book casual sessions right away."
                    </p>
                </div>
            </div>
        </GuestOnly>
    }
}
