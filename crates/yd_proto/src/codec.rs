//! Envelope codec: seal outgoing payloads, open and validate responses.
//!
//! Payload JSON is encrypted under the application's AES key (see
//! `yd_crypto::aead`) and carried as base64 text in the `encrypt` field.
//! Opening checks the top-level `errcode` first; payload decryption only
//! happens for `errcode == 0`.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{de::DeserializeOwned, Serialize};

use crate::envelope::ResponseEnvelope;
use crate::errcode;

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    /// Nonzero `errcode`: the platform's code and message, passed through
    /// verbatim.
    #[error("{message} (errcode {code})")]
    Api { code: i64, message: String },

    /// Ciphertext failed to decrypt, or the plaintext is not the expected JSON.
    #[error("envelope decode failed: {0}")]
    Decode(String),

    /// Local serialization or encryption failure while building a payload.
    #[error("envelope seal failed: {0}")]
    Seal(String),
}

/// Serialize `payload` to JSON and encrypt it into `encrypt`-field text.
pub fn seal<T: Serialize>(key: &[u8; 32], aad: &[u8], payload: &T) -> Result<String, EnvelopeError> {
    let plaintext = serde_json::to_vec(payload).map_err(|e| EnvelopeError::Seal(e.to_string()))?;
    seal_bytes(key, aad, &plaintext)
}

/// Encrypt raw bytes (media file content) into ciphertext text.
pub fn seal_bytes(key: &[u8; 32], aad: &[u8], content: &[u8]) -> Result<String, EnvelopeError> {
    let ciphertext =
        yd_crypto::aead::encrypt(key, content, aad).map_err(|e| EnvelopeError::Seal(e.to_string()))?;
    Ok(STANDARD.encode(ciphertext))
}

/// Decrypt ciphertext text and parse the plaintext as JSON.
pub fn open<T: DeserializeOwned>(key: &[u8; 32], aad: &[u8], ciphertext: &str) -> Result<T, EnvelopeError> {
    let plaintext = open_bytes(key, aad, ciphertext)?;
    serde_json::from_slice(&plaintext).map_err(|e| EnvelopeError::Decode(e.to_string()))
}

/// Decrypt ciphertext text into raw bytes (media file content).
pub fn open_bytes(key: &[u8; 32], aad: &[u8], ciphertext: &str) -> Result<Vec<u8>, EnvelopeError> {
    let raw = STANDARD
        .decode(ciphertext.trim())
        .map_err(|e| EnvelopeError::Decode(e.to_string()))?;
    let plaintext =
        yd_crypto::aead::decrypt(key, &raw, aad).map_err(|e| EnvelopeError::Decode(e.to_string()))?;
    Ok(plaintext.to_vec())
}

/// Validate a response envelope and open its payload.
///
/// A nonzero `errcode` is an error regardless of payload presence. On
/// success an absent or empty `encrypt` field decodes as the empty object,
/// so payload types with defaulted fields come back empty rather than
/// failing.
pub fn open_response<T: DeserializeOwned>(
    key: &[u8; 32],
    aad: &[u8],
    envelope: &ResponseEnvelope,
) -> Result<T, EnvelopeError> {
    ensure_ok(envelope)?;
    match envelope.encrypt.as_deref() {
        Some(ciphertext) if !ciphertext.is_empty() => open(key, aad, ciphertext),
        _ => serde_json::from_str("{}").map_err(|e| EnvelopeError::Decode(e.to_string())),
    }
}

/// Success check alone, for operations whose contract returns no payload.
pub fn ensure_ok(envelope: &ResponseEnvelope) -> Result<(), EnvelopeError> {
    if envelope.errcode != errcode::OK {
        return Err(EnvelopeError::Api {
            code: envelope.errcode,
            message: envelope.errmsg.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IsMemberResponse;
    use serde::{Deserialize, Serialize};

    const KEY: [u8; 32] = [3u8; 32];
    const AAD: &[u8] = b"test-app";

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        name: String,
        count: u32,
    }

    #[test]
    fn seal_open_roundtrip() {
        let payload = Payload { name: "release".into(), count: 3 };
        let sealed = seal(&KEY, AAD, &payload).unwrap();
        let opened: Payload = open(&KEY, AAD, &sealed).unwrap();
        assert_eq!(opened, payload);
    }

    #[test]
    fn seal_open_bytes_roundtrip() {
        let content = vec![0u8, 159, 146, 150];
        let sealed = seal_bytes(&KEY, AAD, &content).unwrap();
        assert_eq!(open_bytes(&KEY, AAD, &sealed).unwrap(), content);
    }

    #[test]
    fn open_rejects_garbage() {
        assert!(matches!(
            open::<Payload>(&KEY, AAD, "@@not base64@@"),
            Err(EnvelopeError::Decode(_))
        ));
        let sealed = seal_bytes(&KEY, AAD, b"not json").unwrap();
        assert!(matches!(
            open::<Payload>(&KEY, AAD, &sealed),
            Err(EnvelopeError::Decode(_))
        ));
    }

    #[test]
    fn open_response_decodes_payload() {
        let payload = Payload { name: "ops".into(), count: 1 };
        let envelope = ResponseEnvelope {
            errcode: 0,
            errmsg: "ok".into(),
            encrypt: Some(seal(&KEY, AAD, &payload).unwrap()),
        };
        let opened: Payload = open_response(&KEY, AAD, &envelope).unwrap();
        assert_eq!(opened, payload);
    }

    #[test]
    fn open_response_treats_missing_encrypt_as_empty_payload() {
        let envelope = ResponseEnvelope { errcode: 0, errmsg: "ok".into(), encrypt: None };
        let opened: IsMemberResponse = open_response(&KEY, AAD, &envelope).unwrap();
        assert!(!opened.belong);

        let envelope = ResponseEnvelope {
            errcode: 0,
            errmsg: "ok".into(),
            encrypt: Some(String::new()),
        };
        let opened: IsMemberResponse = open_response(&KEY, AAD, &envelope).unwrap();
        assert!(!opened.belong);
    }

    #[test]
    fn open_response_passes_error_codes_through() {
        // The payload must not mask the error, even when present.
        let envelope = ResponseEnvelope {
            errcode: 61001,
            errmsg: "group not found".into(),
            encrypt: Some("irrelevant".into()),
        };
        match open_response::<IsMemberResponse>(&KEY, AAD, &envelope) {
            Err(EnvelopeError::Api { code, message }) => {
                assert_eq!(code, 61001);
                assert_eq!(message, "group not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn ensure_ok_checks_errcode_only() {
        let envelope = ResponseEnvelope { errcode: 0, errmsg: String::new(), encrypt: None };
        assert!(ensure_ok(&envelope).is_ok());

        let envelope = ResponseEnvelope { errcode: -7, errmsg: "boom".into(), encrypt: None };
        assert!(matches!(
            ensure_ok(&envelope),
            Err(EnvelopeError::Api { code: -7, .. })
        ));
    }
}
