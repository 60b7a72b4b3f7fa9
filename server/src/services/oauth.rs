//! Google OAuth service — authorization URL, code exchange, profile fetch.

use serde::Deserialize;

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// Google OAuth configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl GoogleConfig {
    /// Load from `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, `GOOGLE_REDIRECT_URI`.
    /// Returns `None` if any are missing (login will be disabled).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("GOOGLE_CLIENT_ID").ok()?;
        let client_secret = std::env::var("GOOGLE_CLIENT_SECRET").ok()?;
        let redirect_uri = std::env::var("GOOGLE_REDIRECT_URI").ok()?;
        Some(Self { client_id, client_secret, redirect_uri })
    }

    /// Build the Google authorization URL carrying the anti-forgery `state`.
    ///
    /// `include_granted_scopes=true` opts into incremental authorization so a
    /// later consent screen can widen scopes without re-prompting for these.
    #[must_use]
    pub fn authorize_url(&self, state: &str) -> String {
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", "openid email profile"),
            ("include_granted_scopes", "true"),
            ("state", state),
        ];
        let query = params
            .iter()
            .map(|(k, v)| format!("{k}={}", percent_encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{AUTHORIZE_ENDPOINT}?{query}")
    }
}

/// Percent-encode a query value (RFC 3986 unreserved characters pass through).
pub(crate) fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(c),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    let _ = std::fmt::Write::write_fmt(&mut out, format_args!("%{byte:02X}"));
                }
            }
        }
    }
    out
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Profile returned by Google's userinfo endpoint.
#[derive(Debug, Deserialize)]
pub struct GoogleUser {
    /// Google account id; stable across logins.
    pub sub: String,
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl GoogleUser {
    /// Display name with the pre-@ email part as fallback.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self.email.split('@').next().unwrap_or_default().to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OAuthError {
    #[error("google token exchange failed: {0}")]
    TokenExchange(String),
    #[error("google userinfo fetch failed: {0}")]
    Userinfo(String),
}

/// Exchange an authorization code for an access token.
pub async fn exchange_code(config: &GoogleConfig, code: &str) -> Result<String, OAuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .post(TOKEN_ENDPOINT)
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .await
        .map_err(|e| OAuthError::TokenExchange(e.to_string()))?;

    let body = resp
        .text()
        .await
        .map_err(|e| OAuthError::TokenExchange(e.to_string()))?;
    let token_resp: TokenResponse =
        serde_json::from_str(&body).map_err(|_| OAuthError::TokenExchange(format!("unexpected response: {body}")))?;
    Ok(token_resp.access_token)
}

/// Fetch the authenticated Google user's profile.
pub async fn fetch_google_user(access_token: &str) -> Result<GoogleUser, OAuthError> {
    let client = reqwest::Client::new();
    let resp = client
        .get(USERINFO_ENDPOINT)
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(|e| OAuthError::Userinfo(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(OAuthError::Userinfo(format!("{status}: {body}")));
    }

    resp.json::<GoogleUser>()
        .await
        .map_err(|e| OAuthError::Userinfo(e.to_string()))
}

#[cfg(test)]
#[path = "oauth_test.rs"]
mod tests;
