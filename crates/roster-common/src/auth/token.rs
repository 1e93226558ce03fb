//! Admin session tokens
//!
//! A token carries the admin role marker, its issue time and a random
//! nonce. It is signed with HMAC-SHA256 via the `jsonwebtoken` crate, so
//! a client cannot mint or extend one without the server secret.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Role marker embedded in every admin token
pub const ADMIN_ROLE: &str = "admin";

/// Admin token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Role marker
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Random nonce, never checked
    pub jti: String,
}

impl AdminClaims {
    /// Check if the token has outlived `ttl_secs` at `now`
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl_secs: i64) -> bool {
        let now = now.timestamp();
        now - self.iat > ttl_secs || now > self.exp
    }
}

/// Freshly issued admin token
#[derive(Debug, Clone, Serialize)]
pub struct AdminToken {
    pub token: String,
    /// Expiry as Unix milliseconds
    pub expires_at: i64,
}

/// Issues and validates admin tokens
#[derive(Clone)]
pub struct AdminTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl AdminTokenService {
    /// Create a new token service with the given secret and lifetime
    #[must_use]
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    #[must_use]
    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a token valid from now
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self) -> Result<AdminToken, AppError> {
        self.issue_at(Utc::now())
    }

    /// Issue a token as if it were `now`
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_at(&self, now: DateTime<Utc>) -> Result<AdminToken, AppError> {
        self.encode_claims(&AdminClaims {
            role: ADMIN_ROLE.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
            jti: nonce(),
        })
    }

    fn encode_claims(&self, claims: &AdminClaims) -> Result<AdminToken, AppError> {
        let token = encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode admin token")))?;

        Ok(AdminToken {
            token,
            expires_at: claims.exp * 1000,
        })
    }

    /// Validate a token against the current time
    ///
    /// # Errors
    /// Returns `InvalidToken` for a bad signature or role marker, `TokenExpired`
    /// once the lifetime has passed
    pub fn validate(&self, token: &str) -> Result<AdminClaims, AppError> {
        self.validate_at(token, Utc::now())
    }

    /// Validate a token as if it were `now`
    ///
    /// # Errors
    /// See [`AdminTokenService::validate`]
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<AdminClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against the caller's clock
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<AdminClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidToken)?
            .claims;

        if claims.role != ADMIN_ROLE {
            return Err(AppError::InvalidToken);
        }

        if claims.is_expired_at(now, self.ttl_secs) {
            return Err(AppError::TokenExpired);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for AdminTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminTokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}
