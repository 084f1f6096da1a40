//! Signed HTTP client for the GasFree gas-free TRON transfer relay.
//!
//! Every request carries `Timestamp` and `Authorization: ApiKey <key>:<sig>`
//! headers computed by [`gasfree_auth::RequestSigner`]. Inputs are validated
//! locally before dispatch; the client never retries.
//!
//! # Quick Example
//!
//! ```no_run
//! use gasfree_client::{GasFreeClient, PermitTransferRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> gasfree_client::Result<()> {
//! let client = GasFreeClient::new("API_KEY", "API_SECRET", true)?;
//!
//! let account = client.get_account_info("TLsV52sRDL79HXGGm9yzwKibb6BeruhUzy").await?;
//! let domain = client.get_message_domain();
//! let types = client.get_message_types();
//! // sign PermitTransfer with `domain` and `types` using your wallet, then:
//! let request = PermitTransferRequest::new()
//!     .token("TXYZopYRdj2D9XRtbG411XZZ3kM5VkAeBf")
//!     .service_provider("TKtWbdzEq5ss9vTS9kwRhBp5mXmBfBns3E")
//!     .user("TLsV52sRDL79HXGGm9yzwKibb6BeruhUzy")
//!     .receiver("TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t")
//!     .value("1000000")
//!     .max_fee("100000")
//!     .deadline(1_900_000_000u64)
//!     .version(1u32)
//!     .nonce(account.nonce.unwrap_or_default())
//!     .sig("0x...");
//!
//! let submitted = client.submit_transfer(&request).await?;
//! let details = client.get_transfer_details(submitted.trace_id().unwrap_or_default()).await?;
//! println!("state: {:?}", details.state);
//! # let _ = (domain, types);
//! # Ok(())
//! # }
//! ```

mod api_client;
pub mod config;
mod context;
pub mod response;

#[cfg(feature = "blocking")]
pub mod blocking;

#[cfg(test)]
mod test_server;

pub use api_client::GasFreeClient;
pub use config::ClientConfig;
pub use context::{PATH_PROVIDERS, PATH_SUBMIT, PATH_TOKENS};

// Re-export commonly needed types
pub use gasfree_auth::{AuthHeaders, RequestSigner};
pub use gasfree_permit::{
    MessageDomain, MessageTypes, PermitTransferRequest, TypedField, UintValue, PRIMARY_TYPE,
};
pub use gasfree_types::{
    is_valid_address, verify_address_checksum, AccountAsset, AccountInfo, AddressCheck,
    ApiErrorReason, GasFreeError, Network, ProviderConfig, ProviderInfo, Result, TokenInfo,
    TransferDetails,
};
