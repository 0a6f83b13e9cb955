//! Account address codec.
//!
//! Lattice addresses are hex-encoded 32-byte account public keys. The shard
//! router consumes the decoded bytes; everything else carries the string form.

use thiserror::Error;

/// Length of a decoded account address in bytes.
pub const ADDRESS_LEN: usize = 32;

/// Address decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The address is not valid hex.
    #[error("invalid address encoding: {0}")]
    InvalidEncoding(String),

    /// The decoded address has the wrong length.
    #[error("invalid address length: got {got}, want {ADDRESS_LEN}")]
    InvalidLength {
        /// Decoded byte count.
        got: usize,
    },
}

/// Decode a hex account address into its raw bytes.
pub fn decode_address(address: &str) -> Result<Vec<u8>, AddressError> {
    let bytes = hex::decode(address.trim_start_matches("0x"))
        .map_err(|e| AddressError::InvalidEncoding(e.to_string()))?;

    if bytes.len() != ADDRESS_LEN {
        return Err(AddressError::InvalidLength { got: bytes.len() });
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_address() {
        let addr = "01".repeat(ADDRESS_LEN);
        let bytes = decode_address(&addr).unwrap();
        assert_eq!(bytes.len(), ADDRESS_LEN);
        assert_eq!(bytes[0], 1);
    }

    #[test]
    fn test_decode_accepts_0x_prefix() {
        let addr = format!("0x{}", "ab".repeat(ADDRESS_LEN));
        assert!(decode_address(&addr).is_ok());
    }

    #[test]
    fn test_decode_rejects_bad_hex() {
        let err = decode_address("zz").unwrap_err();
        assert!(matches!(err, AddressError::InvalidEncoding(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let err = decode_address("0102").unwrap_err();
        assert_eq!(err, AddressError::InvalidLength { got: 2 });
    }
}
