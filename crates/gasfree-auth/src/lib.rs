//! Request authentication for the GasFree relay.
//!
//! message   = METHOD || path || timestamp
//! signature = base64(HMAC-SHA256(api_secret, message))
//! headers   = Timestamp, Authorization: ApiKey <key>:<signature>, Content-Type

pub mod signer;

pub use signer::{canonical_message, unix_timestamp, AuthHeaders, RequestSigner};

pub const HEADER_TIMESTAMP: &str = "Timestamp";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
