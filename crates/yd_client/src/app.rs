//! Shared application context: configuration, key material, transport.

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use zeroize::Zeroizing;

use yd_proto::codec;
use yd_proto::envelope::{RequestEnvelope, ResponseEnvelope};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::group::Group;
use crate::media::Media;
use crate::transport::{HttpTransport, RawResponse, Transport};

/// Shared, read-only context handed to every resource client. Cloning is
/// cheap; all clones share one transport and one decoded key.
#[derive(Clone)]
pub struct App {
    inner: Arc<Inner>,
}

struct Inner {
    config: Config,
    key: Zeroizing<[u8; 32]>,
    transport: Box<dyn Transport>,
}

impl App {
    /// Build a context with the real HTTP transport.
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(config.accept_invalid_source_certs)?;
        Self::with_transport(config, Box::new(transport))
    }

    /// Build a context with an injected transport.
    pub fn with_transport(config: Config, transport: Box<dyn Transport>) -> Result<Self> {
        let key = yd_crypto::keys::decode_app_key(&config.aes_key)
            .map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(Inner { config, key, transport }),
        })
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    pub fn group(&self) -> Group {
        Group::new(self.clone())
    }

    pub fn media(&self) -> Media {
        Media::new(self.clone())
    }

    /// Join the API base address with a `/cgi/...` path.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.config.address.trim_end_matches('/'), path)
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }

    fn aad(&self) -> &[u8] {
        self.inner.config.app_id.as_bytes()
    }

    /// Encrypt an operation payload into `encrypt`-field text.
    pub(crate) fn seal<T: Serialize>(&self, payload: &T) -> Result<String> {
        Ok(codec::seal(&self.inner.key, self.aad(), payload)?)
    }

    /// Encrypt raw bytes (media content) into ciphertext text.
    pub(crate) fn seal_bytes(&self, content: &[u8]) -> Result<String> {
        Ok(codec::seal_bytes(&self.inner.key, self.aad(), content)?)
    }

    /// Decrypt ciphertext text and parse it as JSON.
    pub(crate) fn open<T: DeserializeOwned>(&self, ciphertext: &str) -> Result<T> {
        Ok(codec::open(&self.inner.key, self.aad(), ciphertext)?)
    }

    /// Decrypt ciphertext text into raw bytes (media content).
    pub(crate) fn open_bytes(&self, ciphertext: &str) -> Result<Vec<u8>> {
        Ok(codec::open_bytes(&self.inner.key, self.aad(), ciphertext)?)
    }

    /// Wrap sealed payload text in the request envelope form fields.
    pub(crate) fn request_form(&self, encrypt: String) -> Vec<(&'static str, String)> {
        RequestEnvelope {
            buin: self.inner.config.buin,
            app_id: self.inner.config.app_id.clone(),
            encrypt,
        }
        .into_form()
    }

    /// Parse the JSON envelope out of a raw response, applying the uniform
    /// non-200 check. This is the only status-code check outside the
    /// envelope's own error field.
    pub(crate) fn response_envelope(resp: &RawResponse) -> Result<ResponseEnvelope> {
        if resp.status != 200 {
            return Err(Error::Transport(resp.status));
        }
        serde_json::from_slice(&resp.body).map_err(|e| Error::Decode(e.to_string()))
    }

    /// Envelope check plus payload decryption, for data-bearing operations.
    pub(crate) fn open_response<T: DeserializeOwned>(&self, resp: &RawResponse) -> Result<T> {
        let envelope = Self::response_envelope(resp)?;
        Ok(codec::open_response(&self.inner.key, self.aad(), &envelope)?)
    }

    /// Envelope check alone, for operations whose contract returns no
    /// payload. Nothing is decrypted.
    pub(crate) fn ensure_ok(resp: &RawResponse) -> Result<()> {
        let envelope = Self::response_envelope(resp)?;
        Ok(codec::ensure_ok(&envelope)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::mock::{self, MockTransport};

    #[test]
    fn build_url_joins_address_and_path() {
        let mock = MockTransport::new();
        let app = mock::test_app(&mock);
        assert_eq!(app.build_url("/cgi/group/list"), "https://youdu.test/cgi/group/list");
    }

    #[test]
    fn rejects_unusable_key_material() {
        let config = Config {
            buin: 1,
            app_id: "app".into(),
            aes_key: "dG9vIHNob3J0".into(), // 9 bytes, not 32
            address: "https://youdu.test".into(),
            tmp_dir: None,
            accept_invalid_source_certs: false,
        };
        let result = App::with_transport(config, Box::new(MockTransport::new()));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn non_200_status_is_a_transport_error() {
        let resp = RawResponse {
            status: 502,
            body: bytes::Bytes::from_static(b"bad gateway"),
            header: String::new(),
        };
        assert!(matches!(App::response_envelope(&resp), Err(Error::Transport(502))));
    }
}
