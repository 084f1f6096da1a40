//! Blocking variant of [`crate::GasFreeClient`].
//!
//! Built on `reqwest::blocking`, so it must not be created or used from
//! inside an async runtime.

use gasfree_permit::{MessageDomain, MessageTypes, PermitTransferRequest};
use gasfree_types::{
    AccountInfo, Network, ProviderInfo, ProviderList, Result, TokenInfo, TokenList,
    TransferDetails,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::context::{http_build_error, ClientContext, PATH_PROVIDERS, PATH_SUBMIT, PATH_TOKENS};
use crate::response;

pub struct GasFreeClient {
    ctx: ClientContext,
    http: reqwest::blocking::Client,
}

impl GasFreeClient {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>, is_testnet: bool) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, api_secret, is_testnet))
    }

    /// Fails with `Config` when the HTTP client cannot be built (TLS backend init).
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let ctx = ClientContext::new(config);
        let http = reqwest::blocking::Client::builder()
            .timeout(ctx.timeout())
            .build()
            .map_err(http_build_error)?;
        Ok(Self { ctx, http })
    }

    pub fn with_http_client(config: ClientConfig, http: reqwest::blocking::Client) -> Self {
        Self {
            ctx: ClientContext::new(config),
            http,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.ctx.config()
    }

    pub fn network(&self) -> Network {
        self.ctx.network()
    }

    pub fn base_url(&self) -> &str {
        self.ctx.config().base_url()
    }

    pub fn get_chain_id(&self) -> u64 {
        self.network().chain_id()
    }

    pub fn get_verifying_contract(&self) -> &'static str {
        self.network().verifying_contract()
    }

    pub fn get_message_domain(&self) -> MessageDomain {
        gasfree_permit::message_domain(self.network())
    }

    pub fn get_message_types(&self) -> MessageTypes {
        gasfree_permit::message_types()
    }

    pub fn get_all_tokens(&self) -> Result<Vec<TokenInfo>> {
        let list: TokenList = self.send(Method::GET, PATH_TOKENS, None)?;
        Ok(list.tokens)
    }

    pub fn get_all_providers(&self) -> Result<Vec<ProviderInfo>> {
        let list: ProviderList = self.send(Method::GET, PATH_PROVIDERS, None)?;
        Ok(list.providers)
    }

    pub fn get_account_info(&self, address: &str) -> Result<AccountInfo> {
        let path = self.ctx.account_path(address)?;
        self.send(Method::GET, &path, None)
    }

    pub fn submit_transfer(&self, request: &PermitTransferRequest) -> Result<TransferDetails> {
        self.ctx.check_submit(request)?;
        self.send(Method::POST, PATH_SUBMIT, Some(request))
    }

    pub fn get_transfer_details(&self, trace_id: &str) -> Result<TransferDetails> {
        let path = self.ctx.transfer_path(trace_id)?;
        self.send(Method::GET, &path, None)
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&PermitTransferRequest>,
    ) -> Result<T> {
        let headers = self.ctx.auth_headers(method.as_str(), path)?;

        let mut req = self
            .http
            .request(method, self.ctx.url(path))
            .timeout(self.ctx.timeout());
        for (name, value) in headers.iter() {
            req = req.header(name, value);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes()?;
        debug!(status, path, len = bytes.len(), "gasfree response");

        response::handle_response(status, &bytes)
    }
}
