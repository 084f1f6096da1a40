//! Client configuration.

use gasfree_types::{AddressCheck, GasFreeError, Network, Result};

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_API_KEY: &str = "GASFREE_API_KEY";
pub const ENV_API_SECRET: &str = "GASFREE_API_SECRET";
pub const ENV_NETWORK: &str = "GASFREE_NETWORK";
pub const ENV_TIMEOUT_MS: &str = "GASFREE_TIMEOUT_MS";
pub const ENV_BASE_URL: &str = "GASFREE_BASE_URL";

/// Credentials and network selection for a GasFree client.
#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub api_secret: String,
    pub network: Network,
    /// Per-request timeout.
    pub timeout_ms: u64,
    pub address_check: AddressCheck,
    /// Replaces the network's endpoint (staging relays, local mocks).
    pub base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>, is_testnet: bool) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            network: Network::from_testnet_flag(is_testnet),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            address_check: AddressCheck::default(),
            base_url: None,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_address_check(mut self, address_check: AddressCheck) -> Self {
        self.address_check = address_check;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Load from `GASFREE_*` environment variables.
    ///
    /// `GASFREE_API_KEY` and `GASFREE_API_SECRET` are required.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| GasFreeError::Config(format!("{} is not set", name)))
        };

        let api_key = required(ENV_API_KEY)?;
        let api_secret = required(ENV_API_SECRET)?;

        let network = match lookup(ENV_NETWORK) {
            Some(v) => v.parse()?,
            None => Network::default(),
        };

        let timeout_ms = match lookup(ENV_TIMEOUT_MS) {
            Some(v) => v.trim().parse::<u64>().map_err(|e| {
                GasFreeError::Config(format!("invalid {}: {}: {}", ENV_TIMEOUT_MS, v, e))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            api_key,
            api_secret,
            network,
            timeout_ms,
            address_check: AddressCheck::default(),
            base_url: lookup(ENV_BASE_URL).filter(|v| !v.is_empty()),
        })
    }

    /// Endpoint requests are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.network.base_url())
            .trim_end_matches('/')
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("network", &self.network)
            .field("timeout_ms", &self.timeout_ms)
            .field("address_check", &self.address_check)
            .field("base_url", &self.base_url)
            .finish()
    }
}
