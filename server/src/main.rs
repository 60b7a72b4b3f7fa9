mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let content = services::cms::CmsClient::from_env().expect("CMS client init failed");
    let sessions = services::session::SessionService::from_env().expect("session service init failed");

    // Google OAuth is non-fatal: without it the portal serves content but
    // nobody can sign in.
    let oauth = match services::oauth::GoogleConfig::from_env() {
        Some(config) => {
            tracing::info!(redirect_uri = %config.redirect_uri, "Google OAuth configured");
            Some(config)
        }
        None => {
            tracing::warn!("Google OAuth not configured; login disabled");
            None
        }
    };

    let state = state::AppState::new(Arc::new(content), sessions, oauth);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "courtside listening");
    axum::serve(listener, app).await.expect("server failed");
}
