//! Headless CMS client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The CMS is the portal's data layer: users, court sessions, bookings, and
//! the marketing content globals all live upstream. This module exposes the
//! [`ContentApi`] trait the route handlers proxy through, plus the typed user
//! lookup/upsert the OAuth callback needs. Upstream failures surface as
//! [`CmsError`] and are mapped to status codes at the route boundary; there
//! are no retries and no local cache.

use async_trait::async_trait;
use schemas::UserProfile;
use serde_json::Value;

use super::oauth::GoogleUser;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// CMS connection settings loaded from environment.
#[derive(Debug, Clone)]
pub struct CmsConfig {
    /// Base URL of the CMS, e.g. `http://localhost:4000`.
    pub base_url: String,
    /// Optional API key sent as a bearer token.
    pub api_key: Option<String>,
    pub timeout_secs: u64,
}

impl CmsConfig {
    /// Load from `CMS_URL`, `CMS_API_KEY`, `CMS_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, CmsError> {
        let base_url = std::env::var("CMS_URL").map_err(|_| CmsError::MissingConfig("CMS_URL"))?;
        let api_key = std::env::var("CMS_API_KEY").ok().filter(|key| !key.is_empty());
        let timeout_secs = std::env::var("CMS_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Ok(Self { base_url, api_key, timeout_secs })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("missing config: {0}")]
    MissingConfig(&'static str),
    #[error("cms request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("cms returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("cms document not found")]
    NotFound,
    #[error("unexpected cms payload: {0}")]
    Decode(String),
}

/// Read/write surface of the CMS collection and global APIs.
///
/// Route handlers depend on this trait object rather than the concrete
/// client, so tests swap in a canned implementation.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Fetch a singleton global document by slug.
    async fn get_global(&self, slug: &str) -> Result<Value, CmsError>;
    /// List a collection, passing `query` through to the CMS.
    async fn list(&self, collection: &str, query: &[(String, String)]) -> Result<Value, CmsError>;
    async fn get(&self, collection: &str, id: &str) -> Result<Value, CmsError>;
    async fn create(&self, collection: &str, body: Value) -> Result<Value, CmsError>;
    async fn update(&self, collection: &str, id: &str, body: Value) -> Result<Value, CmsError>;
    async fn delete(&self, collection: &str, id: &str) -> Result<Value, CmsError>;
}

/// reqwest-backed [`ContentApi`] implementation.
#[derive(Clone)]
pub struct CmsClient {
    config: CmsConfig,
    http: reqwest::Client,
}

impl CmsClient {
    pub fn new(config: CmsConfig) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, http })
    }

    pub fn from_env() -> Result<Self, CmsError> {
        Self::new(CmsConfig::from_env()?)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/api/{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, self.url(path));
        if let Some(key) = &self.config.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> Result<Value, CmsError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CmsError::NotFound);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CmsError::Status { status: status.as_u16(), body });
        }
        let text = resp.text().await?;
        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| CmsError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ContentApi for CmsClient {
    async fn get_global(&self, slug: &str) -> Result<Value, CmsError> {
        self.send(self.request(reqwest::Method::GET, &format!("globals/{slug}"))).await
    }

    async fn list(&self, collection: &str, query: &[(String, String)]) -> Result<Value, CmsError> {
        self.send(self.request(reqwest::Method::GET, collection).query(query)).await
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Value, CmsError> {
        self.send(self.request(reqwest::Method::GET, &format!("{collection}/{id}"))).await
    }

    async fn create(&self, collection: &str, body: Value) -> Result<Value, CmsError> {
        self.send(self.request(reqwest::Method::POST, collection).json(&body)).await
    }

    async fn update(&self, collection: &str, id: &str, body: Value) -> Result<Value, CmsError> {
        self.send(self.request(reqwest::Method::PATCH, &format!("{collection}/{id}")).json(&body)).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<Value, CmsError> {
        self.send(self.request(reqwest::Method::DELETE, &format!("{collection}/{id}"))).await
    }
}

/// Extract the document from a CMS write response.
///
/// Mutation endpoints wrap the result as `{ "message": …, "doc": … }`; reads
/// return the document bare. Accept both.
pub(crate) fn parse_user_doc(value: &Value) -> Result<UserProfile, CmsError> {
    let doc = value.get("doc").unwrap_or(value);
    serde_json::from_value(doc.clone()).map_err(|e| CmsError::Decode(e.to_string()))
}

/// Look up a user document by exact email.
pub async fn find_user_by_email(content: &dyn ContentApi, email: &str) -> Result<Option<UserProfile>, CmsError> {
    let listing = content
        .list("users", &[("where[email][equals]".to_owned(), email.to_owned())])
        .await?;
    match listing.get("docs").and_then(Value::as_array).and_then(|docs| docs.first()) {
        Some(doc) => parse_user_doc(doc).map(Some),
        None => Ok(None),
    }
}

/// Upsert the signed-in Google account into the `users` collection.
///
/// Existing users keep their role; display fields are refreshed from the
/// Google profile. New users start at the `casual` tier.
pub async fn upsert_user(content: &dyn ContentApi, google: &GoogleUser) -> Result<UserProfile, CmsError> {
    if let Some(existing) = find_user_by_email(content, &google.email).await? {
        let body = serde_json::json!({
            "name": google.display_name(),
            "avatarUrl": google.picture,
        });
        let updated = content.update("users", &existing.id, body).await?;
        return parse_user_doc(&updated);
    }

    let body = serde_json::json!({
        "email": google.email,
        "name": google.display_name(),
        "role": schemas::Role::Casual.as_str(),
        "avatarUrl": google.picture,
    });
    let created = content.create("users", body).await?;
    parse_user_doc(&created)
}

#[cfg(test)]
#[path = "cms_test.rs"]
mod tests;
