//! GasFree transfer authorization.
//!
//! - `PermitTransferRequest`: the payload submitted to the relay, with local validation
//! - EIP-712 domain and type descriptors the caller signs against
//!
//! Signing itself happens outside this crate.

pub mod domain;
pub mod request;

pub use domain::{message_domain, message_types, MessageDomain, MessageTypes, TypedField, PRIMARY_TYPE};
pub use request::{PermitTransferRequest, UintValue, REQUIRED_FIELDS};
