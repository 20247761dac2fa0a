use thiserror::Error;

use yd_proto::EnvelopeError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Client-facing error taxonomy. Platform errors pass through verbatim;
/// nothing is retried or remapped locally.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP status != 200 on a call expecting a JSON envelope.
    #[error("http request code {0}")]
    Transport(u16),

    /// Nonzero `errcode` in a decoded envelope.
    #[error("{message} (errcode {code})")]
    Api { code: i64, message: String },

    /// Ciphertext failed to decrypt, or the plaintext is not valid JSON.
    #[error("envelope decode failed: {0}")]
    Decode(String),

    /// Local failure while serializing or encrypting a payload.
    #[error("envelope seal failed: {0}")]
    Seal(String),

    /// Upload kind outside `file | image | voice | video`.
    #[error("unsupported file type {0}")]
    UnsupportedFileType(String),

    /// Temporary-file failure while staging an upload.
    #[error("create tmpfile failed: {0}")]
    Staging(#[source] std::io::Error),

    /// Successful upload envelope carrying a blank media identifier.
    #[error("mediaId is empty")]
    EmptyMediaId,

    /// Local write failure while saving a downloaded file.
    #[error("save failed: {0}")]
    Save(String),

    /// Unusable client configuration (bad key material).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a local upload source or a staged file.
    #[error("read source failed: {0}")]
    Io(#[from] std::io::Error),

    /// Connection-level HTTP failure (DNS, TLS, socket).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// The platform-style error code for this failure: the envelope
    /// `errcode` for `Api`, the reserved local code for transport failures.
    pub fn code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => Some(*code),
            Error::Transport(_) => Some(yd_proto::errcode::ILLEGAL_HTTP_REQUEST),
            _ => None,
        }
    }
}

impl From<EnvelopeError> for Error {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Api { code, message } => Error::Api { code, message },
            EnvelopeError::Decode(msg) => Error::Decode(msg),
            EnvelopeError::Seal(msg) => Error::Seal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_carry_the_reserved_code() {
        let err = Error::Transport(502);
        assert_eq!(err.code(), Some(yd_proto::errcode::ILLEGAL_HTTP_REQUEST));
        assert_eq!(err.to_string(), "http request code 502");
    }

    #[test]
    fn api_errors_keep_the_platform_code() {
        let err = Error::from(EnvelopeError::Api { code: 61006, message: "not member".into() });
        assert_eq!(err.code(), Some(61006));
        assert_eq!(err.to_string(), "not member (errcode 61006)");
    }
}
