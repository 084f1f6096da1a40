//! Static per-network configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GasFreeError;

/// TRON network served by the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

/// Chain parameters for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkProfile {
    pub chain_id: u64,
    pub base_url: &'static str,
    pub verifying_contract: &'static str,
}

const MAINNET: NetworkProfile = NetworkProfile {
    chain_id: 728_126_428,
    base_url: "https://open.gasfree.io/tron",
    verifying_contract: "TFFAMQLZybALaLb4uxHA9RBE7pxhUAjF3U",
};

// Nile
const TESTNET: NetworkProfile = NetworkProfile {
    chain_id: 3_448_148_188,
    base_url: "https://open-test.gasfree.io/nile",
    verifying_contract: "THQGuFzL87ZqhxkgqYEryRAd7gqFqL5rdc",
};

impl Network {
    pub fn from_testnet_flag(is_testnet: bool) -> Self {
        if is_testnet {
            Self::Testnet
        } else {
            Self::Mainnet
        }
    }

    pub fn profile(&self) -> &'static NetworkProfile {
        match self {
            Self::Mainnet => &MAINNET,
            Self::Testnet => &TESTNET,
        }
    }

    pub fn chain_id(&self) -> u64 {
        self.profile().chain_id
    }

    pub fn base_url(&self) -> &'static str {
        self.profile().base_url
    }

    pub fn verifying_contract(&self) -> &'static str {
        self.profile().verifying_contract
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl FromStr for Network {
    type Err = GasFreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" | "tron" => Ok(Self::Mainnet),
            "testnet" | "nile" => Ok(Self::Testnet),
            other => Err(GasFreeError::Config(format!("unknown network: {}", other))),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
