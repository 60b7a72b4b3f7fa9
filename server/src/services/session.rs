//! Signed session tokens.
//!
//! DESIGN
//! ======
//! The session IS the token: an HS256 JWT carrying the user's identity and
//! role, set as an `HttpOnly` cookie at login and verified statelessly on
//! every protected request. There is no session table and no refresh flow;
//! expiry or a failed signature simply sends the user back through OAuth.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use schemas::{SessionClaims, UserProfile};
use time::OffsetDateTime;

/// Default validity window when `SESSION_TTL_HOURS` is unset: 7 days.
const DEFAULT_TTL_HOURS: i64 = 168;

/// Error from issuing or verifying a session token.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("SESSION_SECRET is required")]
    MissingSecret,
    #[error("invalid SESSION_TTL_HOURS: {0}")]
    InvalidTtl(String),
    #[error("token encode failed: {0}")]
    Encode(jsonwebtoken::errors::Error),
    #[error("token rejected: {0}")]
    Rejected(jsonwebtoken::errors::Error),
}

/// Issues and verifies the `access_token` session JWTs.
#[derive(Clone)]
pub struct SessionService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl SessionService {
    #[must_use]
    pub fn new(secret: &[u8], ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl_seconds: ttl_hours * 3600,
        }
    }

    /// Load from `SESSION_SECRET` and optional `SESSION_TTL_HOURS`.
    pub fn from_env() -> Result<Self, TokenError> {
        let secret = std::env::var("SESSION_SECRET").map_err(|_| TokenError::MissingSecret)?;
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }
        let ttl_hours = match std::env::var("SESSION_TTL_HOURS") {
            Ok(raw) => raw.trim().parse::<i64>().map_err(|_| TokenError::InvalidTtl(raw))?,
            Err(_) => DEFAULT_TTL_HOURS,
        };
        Ok(Self::new(secret.as_bytes(), ttl_hours))
    }

    /// Issue a token for `user`, valid from now for the configured TTL.
    pub fn issue(&self, user: &UserProfile) -> Result<String, TokenError> {
        self.issue_at(user, OffsetDateTime::now_utc().unix_timestamp())
    }

    /// Issue a token with an explicit issued-at timestamp.
    pub(crate) fn issue_at(&self, user: &UserProfile, issued_at: i64) -> Result<String, TokenError> {
        let claims = SessionClaims {
            sub: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            iat: issued_at,
            exp: issued_at + self.ttl_seconds,
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Encode)
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// All failure modes (malformed, tampered, expired, wrong key) collapse
    /// into [`TokenError::Rejected`]; callers must not distinguish them.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, TokenError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        decode::<SessionClaims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(TokenError::Rejected)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
