//! Bearer token issuance and verification

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Token claims: subject is the identity's email
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (identity email)
    pub sub: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiration time (unix seconds)
    pub exp: i64,
}

impl Claims {
    pub fn new(subject: &str, ttl: Duration) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            sub: subject.to_string(),
            iat: now,
            exp: now + ttl.num_seconds(),
        }
    }

    pub fn is_expired(&self) -> bool {
        chrono::Utc::now().timestamp() >= self.exp
    }
}

/// Issues and verifies HS256 access tokens with a process-wide secret.
///
/// Tokens are pure bearer credentials: there is no server-side revocation,
/// and "refresh" simply issues a fresh token for an authenticated subject.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    default_ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            default_ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Issue a token for a subject with the configured TTL
    pub fn issue(&self, subject: &str) -> Result<String> {
        self.issue_with_ttl(subject, self.default_ttl)
    }

    /// Issue a token with an explicit TTL
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<String> {
        let claims = Claims::new(subject, ttl);
        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify signature, algorithm tag and expiry; return the subject.
    ///
    /// Signature-invalid, wrong algorithm and expired all collapse to the
    /// same Unauthorized message; callers learn nothing about why.
    pub fn verify(&self, token: &str) -> Result<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| Error::Unauthorized("Could not validate credentials".to_string()))?;

        if data.claims.sub.is_empty() {
            return Err(Error::Unauthorized(
                "Could not validate credentials".to_string(),
            ));
        }
        Ok(data.claims.sub)
    }
}
