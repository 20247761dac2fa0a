//! Platform error codes.
//!
//! Nonzero codes come back verbatim from the platform and are never remapped
//! locally. The single local exception is `ILLEGAL_HTTP_REQUEST`, reserved
//! for calls where the HTTP status itself was not 200 and no envelope was
//! available to inspect.

/// The call succeeded.
pub const OK: i64 = 0;

/// Reserved local code: HTTP status != 200 on a call expecting a JSON envelope.
pub const ILLEGAL_HTTP_REQUEST: i64 = -1000;
