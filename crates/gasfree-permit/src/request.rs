//! `PermitTransfer` submission payload.

use gasfree_types::{AddressCheck, GasFreeError, Result};
use serde::{Deserialize, Serialize};

/// Wire names of the fields the relay requires, in validation order.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "token",
    "serviceProvider",
    "user",
    "receiver",
    "value",
    "maxFee",
    "deadline",
    "version",
    "nonce",
    "sig",
];

/// A uint256 field as the caller supplied it: JSON integer or decimal string.
///
/// Forwarded to the relay unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UintValue {
    Int(i64),
    /// Integers above `i64::MAX`.
    Uint(u64),
    Text(String),
}

/// A value that passed the positivity check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Positive {
    Fits(u64),
    /// Larger than `u64::MAX`.
    Large,
}

impl UintValue {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }

    fn positive(&self) -> Option<Positive> {
        match self {
            Self::Int(v) if *v > 0 => Some(Positive::Fits(*v as u64)),
            Self::Int(_) => None,
            Self::Uint(v) if *v > 0 => Some(Positive::Fits(*v)),
            Self::Uint(_) => None,
            // sent verbatim, so padding is not stripped here
            Self::Text(s) => {
                if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let significant = s.trim_start_matches('0');
                if significant.is_empty() {
                    return None;
                }
                // all digits, so the only failure left is overflow
                Some(significant.parse().map(Positive::Fits).unwrap_or(Positive::Large))
            }
        }
    }

    /// True for a strictly positive integer, given as a number or digit string.
    pub fn is_positive_integer(&self) -> bool {
        self.positive().is_some()
    }

    /// The value as `u64`, if it is positive and fits.
    pub fn as_u64(&self) -> Option<u64> {
        match self.positive()? {
            Positive::Fits(v) => Some(v),
            Positive::Large => None,
        }
    }
}

impl From<i64> for UintValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for UintValue {
    fn from(v: u64) -> Self {
        i64::try_from(v).map(Self::Int).unwrap_or(Self::Uint(v))
    }
}

impl From<u32> for UintValue {
    fn from(v: u32) -> Self {
        Self::Int(v.into())
    }
}

impl From<&str> for UintValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for UintValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl std::fmt::Display for UintValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Uint(v) => write!(f, "{}", v),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Signed transfer authorization, submitted as-is to POST /api/v1/gasfree/submit.
///
/// `sig` is the user's EIP-712 signature over the other nine fields, produced
/// against [`crate::message_domain`] and [`crate::message_types`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitTransferRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<UintValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fee: Option<UintValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<UintValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<UintValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<UintValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sig: Option<String>,
}

fn require_str<'a>(field: &'static str, value: &'a Option<String>) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

fn require_uint<'a>(field: &'static str, value: &'a Option<UintValue>) -> Result<&'a UintValue> {
    match value {
        Some(v) if !v.is_blank() => Ok(v),
        _ => Err(missing(field)),
    }
}

fn missing(field: &str) -> GasFreeError {
    GasFreeError::Validation(format!("missing required field: {}", field))
}

impl PermitTransferRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn service_provider(mut self, provider: impl Into<String>) -> Self {
        self.service_provider = Some(provider.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    pub fn value(mut self, value: impl Into<UintValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn max_fee(mut self, max_fee: impl Into<UintValue>) -> Self {
        self.max_fee = Some(max_fee.into());
        self
    }

    pub fn deadline(mut self, deadline: impl Into<UintValue>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    pub fn version(mut self, version: impl Into<UintValue>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn nonce(mut self, nonce: impl Into<UintValue>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn sig(mut self, sig: impl Into<String>) -> Self {
        self.sig = Some(sig.into());
        self
    }

    /// Validate with the default shape-only address check.
    pub fn validate(&self, now: u64) -> Result<()> {
        self.validate_with(now, AddressCheck::Shape)
    }

    /// Validate against `now` (Unix seconds).
    ///
    /// Order: presence, addresses, positive integers, deadline. The first
    /// failure is returned and names the offending wire field.
    pub fn validate_with(&self, now: u64, addresses: AddressCheck) -> Result<()> {
        let token = require_str("token", &self.token)?;
        let service_provider = require_str("serviceProvider", &self.service_provider)?;
        let user = require_str("user", &self.user)?;
        let receiver = require_str("receiver", &self.receiver)?;
        let value = require_uint("value", &self.value)?;
        let max_fee = require_uint("maxFee", &self.max_fee)?;
        let deadline = require_uint("deadline", &self.deadline)?;
        let version = require_uint("version", &self.version)?;
        let nonce = require_uint("nonce", &self.nonce)?;
        require_str("sig", &self.sig)?;

        for (field, address) in [
            ("token", token),
            ("serviceProvider", service_provider),
            ("user", user),
            ("receiver", receiver),
        ] {
            addresses.check(address).map_err(|_| {
                GasFreeError::Validation(format!("invalid address for {}: {}", field, address))
            })?;
        }

        let mut deadline_secs = None;
        for (field, amount) in [
            ("value", value),
            ("maxFee", max_fee),
            ("deadline", deadline),
            ("version", version),
            ("nonce", nonce),
        ] {
            let positive = amount.positive().ok_or_else(|| {
                GasFreeError::Validation(format!("{} must be a positive integer", field))
            })?;
            if field == "deadline" {
                deadline_secs = Some(positive);
            }
        }

        match deadline_secs {
            Some(Positive::Fits(deadline)) if deadline <= now => {
                Err(GasFreeError::ExpiredDeadline { deadline, now })
            }
            _ => Ok(()),
        }
    }
}
