//! yd_proto — Wire types and envelope codec for the Youdu HTTP API
//!
//! Every API call wraps its payload in the platform envelope: requests carry
//! `{buin, appId, encrypt}` where `encrypt` is ciphertext of an
//! operation-specific JSON object; responses carry
//! `{errcode, errmsg, encrypt?}` with `errcode == 0` as the only success
//! signal. Binary media downloads move the envelope into an `Encrypt`
//! response header and ship ciphertext of the raw file bytes as the body.
//!
//! # Modules
//! - `envelope` — Request/response envelope wrappers
//! - `codec`    — Seal/open payloads, errcode validation
//! - `header`   — Lenient raw-header parsing for header-form responses
//! - `api`      — Typed request/response payloads per operation
//! - `errcode`  — Platform error codes and the reserved local code

pub mod api;
pub mod codec;
pub mod envelope;
pub mod errcode;
pub mod header;

pub use codec::EnvelopeError;
pub use envelope::{RequestEnvelope, ResponseEnvelope};
