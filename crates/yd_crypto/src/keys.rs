//! Application key handling.
//!
//! The platform issues each registered application a base64-encoded
//! 32-byte AES key; everything the application sends or receives is
//! encrypted under it.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use zeroize::Zeroizing;

use crate::error::CryptoError;

pub const APP_KEY_LEN: usize = 32;

/// Decode a base64 application key into raw key material.
pub fn decode_app_key(encoded: &str) -> Result<Zeroizing<[u8; APP_KEY_LEN]>, CryptoError> {
    let raw = Zeroizing::new(STANDARD.decode(encoded.trim())?);
    if raw.len() != APP_KEY_LEN {
        return Err(CryptoError::InvalidKey(format!(
            "app key must be {APP_KEY_LEN} bytes, got {}",
            raw.len()
        )));
    }
    let mut key = Zeroizing::new([0u8; APP_KEY_LEN]);
    key.copy_from_slice(&raw);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_valid_key() {
        let encoded = STANDARD.encode([42u8; 32]);
        let key = decode_app_key(&encoded).unwrap();
        assert_eq!(&*key, &[42u8; 32]);
    }

    #[test]
    fn rejects_wrong_length() {
        let encoded = STANDARD.encode([1u8; 16]);
        assert!(matches!(
            decode_app_key(&encoded),
            Err(CryptoError::InvalidKey(_))
        ));
    }

    #[test]
    fn rejects_bad_base64() {
        assert!(matches!(
            decode_app_key("not base64!!!"),
            Err(CryptoError::Base64Decode(_))
        ));
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let encoded = format!("  {}\n", STANDARD.encode([9u8; 32]));
        assert!(decode_app_key(&encoded).is_ok());
    }
}
