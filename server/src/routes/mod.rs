//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the public API, the gate-protected admin API, and
//! Leptos SSR rendering under a single Axum router. The marketing site is
//! served as static files at `/`, while the member app lives under `/app`.

pub mod auth;
pub mod bookings;
pub mod content;
pub mod gate;
pub mod members;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::cms::CmsError;
use crate::state::AppState;

/// Map an upstream CMS failure to the outward status.
pub(crate) fn cms_error_status(error: &CmsError) -> StatusCode {
    match error {
        CmsError::NotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// API and auth routes shared by every hosting mode.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Admin surface, written with full paths so the gate middleware sees the
    // real URI. Everything registered here sits behind the gate.
    let admin = Router::new()
        .route(
            "/api/admin/users",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/api/admin/users/{id}",
            get(members::get_member)
                .patch(members::update_member)
                .delete(members::delete_member),
        )
        .route("/api/admin/bookings", get(members::list_admin_bookings))
        .route_layer(axum::middleware::from_fn_with_state(state.clone(), gate::admin_gate));

    Router::new()
        .route("/login", get(redirect_login_to_app))
        .route("/auth/google", get(auth::google_redirect))
        .route("/auth/google/callback", get(auth::google_callback))
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/verification-token", post(bookings::verification_token))
        .route("/api/globals/{slug}", get(content::get_global))
        .route("/api/sessions", get(bookings::list_sessions))
        .route("/api/sessions/{id}/attendees", get(bookings::session_attendees))
        .route("/api/bookings", post(bookings::create_booking))
        .route("/api/bookings/period", get(bookings::booking_period))
        .merge(admin)
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

async fn redirect_login_to_app() -> Redirect {
    Redirect::temporary("/app/login")
}

/// Resolve the path to the static marketing site directory.
fn site_dir() -> PathBuf {
    std::env::var("SITE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site"))
}

fn site_service() -> ServeDir {
    ServeDir::new(site_dir()).append_index_html_on_directories(true)
}

/// Leptos SSR frontend: API routes + member app at `/app` + marketing at `/`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    // Leptos SSR routes (under /app via client-side route definitions).
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(site_service()))
}

/// Full application router.
///
/// SSR is optional at runtime: when the Leptos config cannot load, the server
/// logs a warning and the portal still serves the API and the static site.
pub fn app(state: AppState) -> Router {
    let router = match leptos_app(state.clone()) {
        Ok(router) => router,
        Err(e) => {
            tracing::warn!(error = %e, "Leptos SSR unavailable; serving API and static site only");
            api_routes(state).fallback_service(site_service())
        }
    };
    router.layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
