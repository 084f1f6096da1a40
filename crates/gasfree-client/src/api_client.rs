//! Async HTTP client for the GasFree relay.
//!
//! Endpoints:
//! - GET /api/v1/config/token/all
//! - GET /api/v1/config/provider/all
//! - GET /api/v1/address/{address}
//! - POST /api/v1/gasfree/submit
//! - GET /api/v1/gasfree/{traceId}

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

/// Signed client for the GasFree relay. One request per call, no retries.
pub struct GasFreeClient {
    ctx: ClientContext,
    http: reqwest::Client,
}

impl GasFreeClient {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>, is_testnet: bool) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key, api_secret, is_testnet))
    }

    /// Fails with `Config` when the HTTP client cannot be built (TLS backend init).
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let ctx = ClientContext::new(config);
        let http = reqwest::Client::builder()
            .timeout(ctx.timeout())
            .build()
            .map_err(http_build_error)?;
        Ok(Self { ctx, http })
    }

    /// Use a caller-built `reqwest::Client` (proxies, custom TLS).
    pub fn with_http_client(config: ClientConfig, http: reqwest::Client) -> Self {
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

    /// EIP-712 domain for signing a `PermitTransfer` on this network.
    pub fn get_message_domain(&self) -> MessageDomain {
        gasfree_permit::message_domain(self.network())
    }

    pub fn get_message_types(&self) -> MessageTypes {
        gasfree_permit::message_types()
    }

    /// Tokens the relay accepts.
    ///
    /// GET /api/v1/config/token/all
    pub async fn get_all_tokens(&self) -> Result<Vec<TokenInfo>> {
        let list: TokenList = self.send(Method::GET, PATH_TOKENS, None).await?;
        Ok(list.tokens)
    }

    /// Registered service providers.
    ///
    /// GET /api/v1/config/provider/all
    pub async fn get_all_providers(&self) -> Result<Vec<ProviderInfo>> {
        let list: ProviderList = self.send(Method::GET, PATH_PROVIDERS, None).await?;
        Ok(list.providers)
    }

    /// GasFree account state for a TRON address: activation, nonce, balances.
    ///
    /// GET /api/v1/address/{address}
    pub async fn get_account_info(&self, address: &str) -> Result<AccountInfo> {
        let path = self.ctx.account_path(address)?;
        self.send(Method::GET, &path, None).await
    }

    /// Submit a signed transfer authorization. The returned details carry the trace id.
    ///
    /// POST /api/v1/gasfree/submit
    pub async fn submit_transfer(&self, request: &PermitTransferRequest) -> Result<TransferDetails> {
        self.ctx.check_submit(request)?;
        self.send(Method::POST, PATH_SUBMIT, Some(request)).await
    }

    /// Current state of a submitted transfer.
    ///
    /// GET /api/v1/gasfree/{traceId}
    pub async fn get_transfer_details(&self, trace_id: &str) -> Result<TransferDetails> {
        let path = self.ctx.transfer_path(trace_id)?;
        self.send(Method::GET, &path, None).await
    }

    async fn send<T: DeserializeOwned>(
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

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let bytes = resp.bytes().await?;
        debug!(status, path, len = bytes.len(), "gasfree response");

        response::handle_response(status, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{serve_once, CapturedRequest};
    use gasfree_auth::{unix_timestamp, RequestSigner};
    use gasfree_types::{ApiErrorReason, GasFreeError};

    const USER: &str = "TLsV52sRDL79HXGGm9yzwKibb6BeruhUzy";

    fn local_client(base_url: &str) -> GasFreeClient {
        GasFreeClient::from_config(
            ClientConfig::new("test-key", "test-secret", true)
                .with_base_url(base_url)
                .with_timeout_ms(5_000),
        )
        .unwrap()
    }

    fn transfer(deadline: u64) -> PermitTransferRequest {
        PermitTransferRequest::new()
            .token("TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf")
            .service_provider("TKtWbdzEq5ss9vTS9kwRhBp5mXmBfBns3E")
            .user(USER)
            .receiver("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t")
            .value("1000000")
            .max_fee("100000")
            .deadline(deadline)
            .version(1u32)
            .nonce(3u32)
            .sig("0xabcdef")
    }

    fn assert_signed(req: &CapturedRequest, method: &str, path: &str) {
        assert_eq!(req.method, method);
        assert_eq!(req.path, path);
        assert_eq!(req.header("content-type").as_deref(), Some("application/json"));

        let timestamp: u64 = req.header("timestamp").unwrap().parse().unwrap();
        let auth = req.header("authorization").unwrap();
        let signature = auth.strip_prefix("ApiKey test-key:").unwrap();
        let signer = RequestSigner::new("test-key", "test-secret");
        assert!(signer.verify(method, path, timestamp, signature));
    }

    #[test]
    fn test_accessors_per_network() {
        let mainnet = GasFreeClient::new("k", "s", false).unwrap();
        assert_eq!(mainnet.get_chain_id(), 728126428);
        assert_eq!(mainnet.get_verifying_contract(), "TFFAMQLZybALaLb4uxHA9RBE7pxhUAjF3U");
        assert_eq!(mainnet.base_url(), "https://open.gasfree.io/tron");

        let testnet = GasFreeClient::new("k", "s", true).unwrap();
        assert_eq!(testnet.get_chain_id(), 3448148188);
        assert_eq!(testnet.get_verifying_contract(), "THQGuFzL87ZqhxkgqYEryRAd7gqFqL5rdc");
        assert_eq!(testnet.get_message_domain().chain_id, 3448148188);
        assert_eq!(testnet.get_message_types().permit_transfer.len(), 9);
    }

    #[tokio::test]
    async fn test_account_info_rejects_bad_address_before_request() {
        // Nothing listens here; a request would fail with a transport error instead.
        let client = local_client("http://127.0.0.1:1");
        for address in ["", "invalid", "0x742d35Cc6634C0532925a3b844Bc454e4438f44e"] {
            let err = client.get_account_info(address).await.unwrap_err();
            assert!(matches!(err, GasFreeError::Validation(_)), "{:?}", err);
        }
    }

    #[tokio::test]
    async fn test_transfer_details_rejects_empty_trace_id() {
        let client = local_client("http://127.0.0.1:1");
        let err = client.get_transfer_details("").await.unwrap_err();
        assert!(matches!(err, GasFreeError::Validation(_)));
    }

    #[tokio::test]
    async fn test_submit_validates_before_request() {
        let client = local_client("http://127.0.0.1:1");

        let mut missing = transfer(unix_timestamp() + 300);
        missing.max_fee = None;
        match client.submit_transfer(&missing).await.unwrap_err() {
            GasFreeError::Validation(msg) => assert!(msg.contains("maxFee"), "{}", msg),
            other => panic!("expected validation error, got {:?}", other),
        }

        let expired = transfer(unix_timestamp() - 60);
        let err = client.submit_transfer(&expired).await.unwrap_err();
        assert!(matches!(err, GasFreeError::ExpiredDeadline { .. }));
    }

    #[tokio::test]
    async fn test_get_all_tokens_signed_request() {
        let (base_url, server) = serve_once(
            200,
            r#"{"code":200,"data":{"tokens":[{"tokenAddress":"TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t","symbol":"USDT","decimal":6}]}}"#,
        );
        let tokens = local_client(&base_url).get_all_tokens().await.unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].symbol.as_deref(), Some("USDT"));

        let captured = server.join().unwrap();
        assert_signed(&captured, "GET", "/api/v1/config/token/all");
        assert!(captured.body.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_providers_missing_data() {
        let (base_url, server) = serve_once(200, r#"{"code":200,"message":"ok"}"#);
        let providers = local_client(&base_url).get_all_providers().await.unwrap();
        assert!(providers.is_empty());

        let captured = server.join().unwrap();
        assert_signed(&captured, "GET", "/api/v1/config/provider/all");
    }

    #[tokio::test]
    async fn test_get_account_info_path() {
        let (base_url, server) = serve_once(
            200,
            r#"{"code":200,"data":{"accountAddress":"TLsV52sRDL79HXGGm9yzwKibb6BeruhUzy","active":true,"nonce":4,"assets":[]}}"#,
        );
        let info = local_client(&base_url).get_account_info(USER).await.unwrap();
        assert_eq!(info.nonce, Some(4));
        assert_eq!(info.active, Some(true));

        let captured = server.join().unwrap();
        assert_signed(&captured, "GET", &format!("/api/v1/address/{}", USER));
    }

    #[tokio::test]
    async fn test_submit_transfer_posts_body() {
        let (base_url, server) = serve_once(
            200,
            r#"{"code":200,"data":{"id":"trace-42","state":"WAITING"}}"#,
        );
        let request = transfer(unix_timestamp() + 300);
        let details = local_client(&base_url).submit_transfer(&request).await.unwrap();
        assert_eq!(details.trace_id(), Some("trace-42"));

        let captured = server.join().unwrap();
        assert_signed(&captured, "POST", "/api/v1/gasfree/submit");
        let sent: PermitTransferRequest = serde_json::from_slice(&captured.body).unwrap();
        assert_eq!(sent, request);
    }

    #[tokio::test]
    async fn test_known_reason_surfaces_typed() {
        let (base_url, server) = serve_once(
            400,
            r#"{"code":400,"reason":"InvalidSignatureException","message":"bad sig"}"#,
        );
        let err = local_client(&base_url)
            .get_transfer_details("trace-42")
            .await
            .unwrap_err();
        assert_eq!(err.reason(), Some(ApiErrorReason::InvalidSignature));

        let captured = server.join().unwrap();
        assert_signed(&captured, "GET", "/api/v1/gasfree/trace-42");
    }

    #[tokio::test]
    async fn test_unknown_reason_surfaces_generic() {
        let (base_url, server) = serve_once(
            500,
            r#"{"code":50010,"reason":"InternalException","message":"try later"}"#,
        );
        let err = local_client(&base_url).get_all_tokens().await.unwrap_err();
        match err {
            GasFreeError::ApiGeneric { code, message } => {
                assert_eq!(code, 50010);
                assert_eq!(message, "try later");
            }
            other => panic!("expected generic api error, got {:?}", other),
        }
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let (base_url, server) = serve_once(502, "<html>bad gateway</html>");
        let err = local_client(&base_url).get_all_tokens().await.unwrap_err();
        assert!(matches!(err, GasFreeError::ResponseParse(_)));
        server.join().unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let err = local_client("http://127.0.0.1:1").get_all_tokens().await.unwrap_err();
        assert!(matches!(err, GasFreeError::Transport(_)), "{:?}", err);
    }
}
