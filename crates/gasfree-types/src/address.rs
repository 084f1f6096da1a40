//! TRON base58check address predicates.
//!
//! The relay only rejects malformed addresses after a round trip, so callers
//! check the shape locally. The checksum check is opt-in.

use sha2::{Digest, Sha256};

use crate::{GasFreeError, Result};

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const ADDRESS_LEN: usize = 34;
const DECODED_LEN: usize = 25;
const ADDRESS_PREFIX: u8 = 0x41;

/// How strictly address fields are checked before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddressCheck {
    /// Leading `T`, 34 characters, base58 alphabet.
    #[default]
    Shape,
    /// Shape plus base58check decoding and checksum.
    Checksum,
}

impl AddressCheck {
    pub fn check(&self, address: &str) -> Result<()> {
        match self {
            Self::Shape if is_valid_address(address) => Ok(()),
            Self::Shape => Err(GasFreeError::Validation(format!(
                "invalid TRON address: {}",
                address
            ))),
            Self::Checksum => verify_address_checksum(address),
        }
    }
}

/// Shape check for a TRON base58 address. Does not verify the checksum.
pub fn is_valid_address(address: &str) -> bool {
    address.len() == ADDRESS_LEN
        && address.starts_with('T')
        && address.chars().all(|c| BASE58_ALPHABET.contains(c))
}

/// Full base58check validation: shape, 0x41 prefix and double-SHA256 checksum.
pub fn verify_address_checksum(address: &str) -> Result<()> {
    if !is_valid_address(address) {
        return Err(GasFreeError::Validation(format!(
            "invalid TRON address: {}",
            address
        )));
    }

    let decoded = bs58::decode(address).into_vec().map_err(|e| {
        GasFreeError::Validation(format!("invalid base58 in {}: {}", address, e))
    })?;

    if decoded.len() != DECODED_LEN || decoded[0] != ADDRESS_PREFIX {
        return Err(GasFreeError::Validation(format!(
            "invalid TRON address payload: {}",
            address
        )));
    }

    let (payload, checksum) = decoded.split_at(21);
    let digest = Sha256::digest(Sha256::digest(payload));
    if &digest[..4] != checksum {
        return Err(GasFreeError::Validation(format!(
            "checksum mismatch for TRON address: {}",
            address
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const USDT: &str = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t";

    #[test]
    fn test_shape_accepts_real_addresses() {
        assert!(is_valid_address(USDT));
        assert!(is_valid_address("TFFAMQLZybALaLb4uxHA9RBE7pxhUAjF3U"));
        assert!(is_valid_address(&format!("T{}", "1".repeat(33))));
    }

    #[test]
    fn test_shape_rejects_malformed() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address("invalid"));
        // wrong prefix
        assert!(!is_valid_address("AR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6t"));
        // too short / too long
        assert!(!is_valid_address(&USDT[..33]));
        assert!(!is_valid_address(&format!("{}1", USDT)));
        // 0, O, I and l are outside the base58 alphabet
        assert!(!is_valid_address("T0R7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6"));
        assert!(!is_valid_address("TOR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6"));
        assert!(!is_valid_address("TIR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6"));
        assert!(!is_valid_address("TlR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6"));
    }

    #[test]
    fn test_checksum() {
        assert!(verify_address_checksum(USDT).is_ok());
        assert!(verify_address_checksum("TLsV52sRDL79HXGGm9yzwKibb6BeruhUzy").is_ok());
        assert!(verify_address_checksum("THQGuFzL87ZqhxkgqYEryRAd7gqFqL5rdc").is_ok());

        // Shape-valid, checksum broken.
        let tampered = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6u";
        assert!(is_valid_address(tampered));
        assert!(verify_address_checksum(tampered).is_err());
        assert!(verify_address_checksum("invalid").is_err());
    }

    #[test]
    fn test_address_check_modes() {
        let tampered = "TR7NHqjeKQxGTCi8q8ZY4pL8otSzgjLj6u";
        assert!(AddressCheck::Shape.check(tampered).is_ok());
        assert!(AddressCheck::Checksum.check(tampered).is_err());
        assert!(AddressCheck::default().check("").is_err());
    }
}
