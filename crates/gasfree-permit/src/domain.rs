//! EIP-712 descriptors for `PermitTransfer`.

use gasfree_types::Network;
use serde::Serialize;

pub const DOMAIN_NAME: &str = "GasFreeController";
pub const DOMAIN_VERSION: &str = "V1.0.0";
pub const PRIMARY_TYPE: &str = "PermitTransfer";

/// EIP-712 domain of the GasFree controller contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDomain {
    pub name: &'static str,
    pub version: &'static str,
    pub chain_id: u64,
    pub verifying_contract: &'static str,
}

/// One member of an EIP-712 struct type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypedField {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Type map handed to the caller's EIP-712 signer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageTypes {
    #[serde(rename = "PermitTransfer")]
    pub permit_transfer: Vec<TypedField>,
}

const PERMIT_TRANSFER_FIELDS: [TypedField; 9] = [
    TypedField { name: "token", kind: "address" },
    TypedField { name: "serviceProvider", kind: "address" },
    TypedField { name: "user", kind: "address" },
    TypedField { name: "receiver", kind: "address" },
    TypedField { name: "value", kind: "uint256" },
    TypedField { name: "maxFee", kind: "uint256" },
    TypedField { name: "deadline", kind: "uint256" },
    TypedField { name: "version", kind: "uint256" },
    TypedField { name: "nonce", kind: "uint256" },
];

pub fn message_domain(network: Network) -> MessageDomain {
    MessageDomain {
        name: DOMAIN_NAME,
        version: DOMAIN_VERSION,
        chain_id: network.chain_id(),
        verifying_contract: network.verifying_contract(),
    }
}

pub fn message_types() -> MessageTypes {
    MessageTypes {
        permit_transfer: PERMIT_TRANSFER_FIELDS.to_vec(),
    }
}
