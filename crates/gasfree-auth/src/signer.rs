//! HMAC-SHA256 request signer.
//!
//! The relay recomputes the signature from the same three inputs, so the
//! message bytes must match exactly: uppercase method, endpoint path as sent
//! (no host, no query string), decimal seconds, no separators.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use gasfree_types::{GasFreeError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::{CONTENT_TYPE_JSON, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE, HEADER_TIMESTAMP};

type HmacSha256 = Hmac<Sha256>;

/// Current Unix time in whole seconds.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Build the string the relay verifies: `METHOD` + `path` + `timestamp`.
pub fn canonical_message(method: &str, path: &str, timestamp: u64) -> String {
    format!("{}{}{}", method.to_uppercase(), path, timestamp)
}

/// Authentication headers for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    pub timestamp: String,
    pub authorization: String,
    pub content_type: &'static str,
}

impl AuthHeaders {
    /// (name, value) pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (HEADER_TIMESTAMP, self.timestamp.as_str()),
            (HEADER_AUTHORIZATION, self.authorization.as_str()),
            (HEADER_CONTENT_TYPE, self.content_type),
        ]
        .into_iter()
    }
}

/// Signs relay requests with an API key/secret pair.
#[derive(Clone)]
pub struct RequestSigner {
    api_key: String,
    api_secret: String,
}

impl RequestSigner {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    fn mac(&self) -> Result<HmacSha256> {
        HmacSha256::new_from_slice(self.api_secret.as_bytes())
            .map_err(|e| GasFreeError::Config(format!("unusable api secret: {}", e)))
    }

    /// Base64-encoded HMAC-SHA256 of the canonical message.
    pub fn sign(&self, method: &str, path: &str, timestamp: u64) -> Result<String> {
        let mut mac = self.mac()?;
        mac.update(canonical_message(method, path, timestamp).as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }

    /// Constant-time check of a base64 signature against the canonical message.
    pub fn verify(&self, method: &str, path: &str, timestamp: u64, signature: &str) -> bool {
        let Ok(expected) = BASE64.decode(signature) else {
            return false;
        };
        let Ok(mut mac) = self.mac() else {
            return false;
        };
        mac.update(canonical_message(method, path, timestamp).as_bytes());
        mac.verify_slice(&expected).is_ok()
    }

    /// Headers for a request signed at `timestamp`.
    pub fn auth_headers(&self, method: &str, path: &str, timestamp: u64) -> Result<AuthHeaders> {
        let signature = self.sign(method, path, timestamp)?;
        Ok(AuthHeaders {
            timestamp: timestamp.to_string(),
            authorization: format!("ApiKey {}:{}", self.api_key, signature),
            content_type: CONTENT_TYPE_JSON,
        })
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
