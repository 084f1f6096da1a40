//! Shared types for the GasFree SDK.
//!
//! - Error taxonomy and `Result` alias
//! - Network profiles (chain id, endpoint, controller contract)
//! - Known relay error reasons
//! - Response models and TRON address predicates

use thiserror::Error;

pub mod address;
pub mod models;
pub mod network;

pub use address::{is_valid_address, verify_address_checksum, AddressCheck};
pub use models::*;
pub use network::{Network, NetworkProfile};

/// GasFree SDK error types.
#[derive(Debug, Error)]
pub enum GasFreeError {
    /// Rejected locally, before any request was sent.
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("deadline {deadline} is not after current time {now}")]
    ExpiredDeadline { deadline: u64, now: u64 },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to parse response: {0}")]
    ResponseParse(#[from] serde_json::Error),

    #[error("api error {reason}: {message}")]
    Api { reason: ApiErrorReason, message: String },

    #[error("api error (code {code}): {message}")]
    ApiGeneric { code: i64, message: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl GasFreeError {
    /// True for errors raised by local input checks.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::ExpiredDeadline { .. })
    }

    /// The typed relay reason, if the service returned a known one.
    pub fn reason(&self) -> Option<ApiErrorReason> {
        match self {
            Self::Api { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GasFreeError>;

/// Error reasons the relay reports in the `reason` field of a failed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorReason {
    ProviderAddressNotMatch,
    DeadlineExceeded,
    InvalidSignature,
    UnsupportedToken,
    TooManyPendingTransfer,
    VersionNotSupported,
    NonceNotMatch,
    MaxFeeExceeded,
    InsufficientBalance,
}

impl ApiErrorReason {
    pub const ALL: [ApiErrorReason; 9] = [
        Self::ProviderAddressNotMatch,
        Self::DeadlineExceeded,
        Self::InvalidSignature,
        Self::UnsupportedToken,
        Self::TooManyPendingTransfer,
        Self::VersionNotSupported,
        Self::NonceNotMatch,
        Self::MaxFeeExceeded,
        Self::InsufficientBalance,
    ];

    /// Wire name, as sent by the relay.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProviderAddressNotMatch => "ProviderAddressNotMatchException",
            Self::DeadlineExceeded => "DeadlineExceededException",
            Self::InvalidSignature => "InvalidSignatureException",
            Self::UnsupportedToken => "UnsupportedTokenException",
            Self::TooManyPendingTransfer => "TooManyPendingTransferException",
            Self::VersionNotSupported => "VersionNotSupportedException",
            Self::NonceNotMatch => "NonceNotMatchException",
            Self::MaxFeeExceeded => "MaxFeeExceededException",
            Self::InsufficientBalance => "InsufficientBalanceException",
        }
    }

    /// Look up a reason by its exact wire name.
    pub fn from_reason(reason: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == reason)
    }
}

impl std::fmt::Display for ApiErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
