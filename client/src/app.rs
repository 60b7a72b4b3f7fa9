//! Root application component with routing and the SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage};
use crate::state::session::{SessionState, load_current_user};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the shared session signal, kicks off the one profile fetch that
/// resolves it, and hands the signal to every routed page as a prop.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::resolving());
    load_current_user(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/courtside.css"/>
        <Title text="Courtside | University Badminton Club"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("app") view=move || view! { <HomePage session=session/> }/>
                <Route
                    path=(StaticSegment("app"), StaticSegment("login"))
                    view=move || view! { <LoginPage session=session/> }
                />
                <Route
                    path=(StaticSegment("app"), StaticSegment("admin"))
                    view=move || view! { <AdminPage session=session/> }
                />
            </Routes>
        </Router>
    }
}
