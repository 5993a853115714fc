//! Session token issuance and verification
//!
//! Tokens are signed JWTs binding a user id to an expiry. Keys are
//! pre-computed from the configured secret at construction, so issuing
//! and verifying never re-derives key material per request.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Claims carried by a session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Why an inbound token failed verification
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("session expired")]
    Expired,
    #[error("invalid session token")]
    Invalid,
}

/// Issues and verifies signed session tokens.
///
/// Construct once at startup from configuration and store in `AppState`;
/// keys are wrapped in `Arc` so cloning into handlers is cheap.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    ttl_secs: i64,
}

impl TokenIssuer {
    /// Create a new issuer from the signing secret and session lifetime
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            ttl_secs,
        }
    }

    /// Mint a session token bound to a user id, expiring after the
    /// configured lifetime.
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let claims = SessionClaims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign session token: {}", e))
    }

    /// Verify a token and return the user id it is bound to.
    ///
    /// Zero clock-skew leeway: a token is invalid the moment its expiry
    /// passes.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let data =
            decode::<SessionClaims>(token, &self.decoding, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)
    }

    /// Session lifetime in seconds
    #[inline]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }
}
