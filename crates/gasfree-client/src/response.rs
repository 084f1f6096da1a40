//! Relay response envelope handling.
//!
//! Every endpoint answers `{code, message, reason?, data?}`. A 200 yields
//! `data`; anything else becomes an API error.

use gasfree_types::{ApiErrorReason, GasFreeError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Relay API response wrapper.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiEnvelope {
    pub code: Option<Value>,
    pub message: Option<String>,
    pub reason: Option<String>,
    pub data: Option<Value>,
}

impl ApiEnvelope {
    fn code(&self) -> Option<i64> {
        match self.code.as_ref()? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Turn a status and raw body into the `data` payload, or an error.
///
/// Absent or null `data` becomes `{}`.
pub fn extract_data(status: u16, body: &[u8]) -> Result<Value> {
    let envelope: ApiEnvelope = serde_json::from_slice(body)?;

    if status != 200 {
        let message = envelope.message.clone().unwrap_or_default();
        if let Some(reason) = envelope.reason.as_deref().and_then(ApiErrorReason::from_reason) {
            warn!(status, %reason, %message, "gasfree api error");
            return Err(GasFreeError::Api { reason, message });
        }
        let code = envelope.code().unwrap_or(i64::from(status));
        warn!(status, code, reason = ?envelope.reason, %message, "gasfree api error");
        return Err(GasFreeError::ApiGeneric { code, message });
    }

    Ok(match envelope.data {
        Some(Value::Null) | None => Value::Object(Default::default()),
        Some(data) => data,
    })
}

/// [`extract_data`], then deserialize into the endpoint's model.
pub fn handle_response<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    let data = extract_data(status, body)?;
    Ok(serde_json::from_value(data)?)
}
