//! Transport-independent request preparation shared by both clients.

use std::time::Duration;

use gasfree_auth::{unix_timestamp, AuthHeaders, RequestSigner};
use gasfree_permit::PermitTransferRequest;
use gasfree_types::{GasFreeError, Network, Result};
use tracing::debug;

use crate::config::ClientConfig;

pub const PATH_TOKENS: &str = "/api/v1/config/token/all";
pub const PATH_PROVIDERS: &str = "/api/v1/config/provider/all";
pub const PATH_SUBMIT: &str = "/api/v1/gasfree/submit";

pub(crate) struct ClientContext {
    config: ClientConfig,
    signer: RequestSigner,
}

impl ClientContext {
    pub(crate) fn new(config: ClientConfig) -> Self {
        let signer = RequestSigner::new(config.api_key.clone(), config.api_secret.clone());
        Self { config, signer }
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn network(&self) -> Network {
        self.config.network
    }

    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_millis(self.config.timeout_ms)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Headers for `method path`, signed now.
    pub(crate) fn auth_headers(&self, method: &str, path: &str) -> Result<AuthHeaders> {
        debug!(method, path, network = %self.network(), "gasfree request");
        self.signer.auth_headers(method, path, unix_timestamp())
    }

    pub(crate) fn account_path(&self, address: &str) -> Result<String> {
        self.config.address_check.check(address).inspect_err(|e| {
            debug!(error = %e, "rejected account lookup");
        })?;
        Ok(format!("/api/v1/address/{}", address))
    }

    pub(crate) fn transfer_path(&self, trace_id: &str) -> Result<String> {
        let trace_id = trace_id.trim();
        if trace_id.is_empty() {
            return Err(GasFreeError::Validation("trace id is required".into()));
        }
        // anything else is rewritten by URL parsing after signing
        let unreserved = trace_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'));
        if !unreserved || trace_id == "." || trace_id == ".." {
            return Err(GasFreeError::Validation(format!("invalid trace id: {}", trace_id)));
        }
        Ok(format!("/api/v1/gasfree/{}", trace_id))
    }

    pub(crate) fn check_submit(&self, request: &PermitTransferRequest) -> Result<()> {
        request
            .validate_with(unix_timestamp(), self.config.address_check)
            .inspect_err(|e| {
                debug!(error = %e, "rejected transfer submission");
            })
    }
}

pub(crate) fn http_build_error(e: reqwest::Error) -> GasFreeError {
    GasFreeError::Config(format!("failed to build http client: {}", e))
}
