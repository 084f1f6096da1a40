//! Relay response payloads.
//!
//! Every field is optional: the relay adds fields between releases and the
//! SDK must not fail on them. Unknown fields are kept in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `data` of GET /api/v1/config/token/all
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenList {
    #[serde(default)]
    pub tokens: Vec<TokenInfo>,
}

/// A token supported by the relay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub token_address: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub activate_fee: Option<Value>,
    pub transfer_fee: Option<Value>,
    pub supported: Option<bool>,
    pub symbol: Option<String>,
    pub decimal: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `data` of GET /api/v1/config/provider/all
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderList {
    #[serde(default)]
    pub providers: Vec<ProviderInfo>,
}

/// A relay operator fronting transfer fees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub address: Option<String>,
    pub name: Option<String>,
    pub icon: Option<String>,
    pub website: Option<String>,
    pub config: Option<ProviderConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Limits a provider applies to submitted transfers. Durations in seconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub max_pending_transfer: Option<u64>,
    pub min_deadline_duration: Option<u64>,
    pub max_deadline_duration: Option<u64>,
    pub default_deadline_duration: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `data` of GET /api/v1/address/{address}
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub account_address: Option<String>,
    pub gas_free_address: Option<String>,
    pub active: Option<bool>,
    pub nonce: Option<u64>,
    pub allow_submit: Option<bool>,
    #[serde(default)]
    pub assets: Vec<AccountAsset>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAsset {
    pub token_address: Option<String>,
    pub token_symbol: Option<String>,
    pub activate_fee: Option<Value>,
    pub transfer_fee: Option<Value>,
    pub decimal: Option<u32>,
    pub frozen: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `data` of POST /api/v1/gasfree/submit and GET /api/v1/gasfree/{traceId}
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDetails {
    /// Trace id used to look the transfer up later.
    pub id: Option<String>,
    pub created_at: Option<Value>,
    pub updated_at: Option<Value>,
    pub account_address: Option<String>,
    pub gas_free_address: Option<String>,
    pub provider_address: Option<String>,
    pub target_address: Option<String>,
    pub token_address: Option<String>,
    pub amount: Option<Value>,
    pub max_fee: Option<Value>,
    pub signature: Option<String>,
    pub nonce: Option<Value>,
    pub expired_at: Option<Value>,
    /// Relay lifecycle state, e.g. WAITING, INPROGRESS, CONFIRMING, SUCCEED, FAILED.
    pub state: Option<String>,
    pub txn_hash: Option<String>,
    pub txn_state: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TransferDetails {
    pub fn trace_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// True once the relay no longer changes the transfer's state.
    pub fn is_final(&self) -> bool {
        matches!(self.state.as_deref(), Some("SUCCEED") | Some("FAILED"))
    }
}
