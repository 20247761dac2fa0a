//! yd_crypto — Symmetric cipher primitives for the Youdu message envelope
//!
//! Every API payload travels encrypted under the application's AES key.
//! This crate owns the cipher and the key decoding; the envelope layout
//! around the ciphertext lives in `yd_proto`.
//!
//! # Modules
//! - `aead`  — AES-256-GCM encrypt/decrypt with the nonce-prefix wire format
//! - `keys`  — Application AES key decoding
//! - `error` — Crypto error type

pub mod aead;
pub mod error;
pub mod keys;

pub use error::CryptoError;
