//! Request/response envelope wrappers common to every API call.

use serde::{Deserialize, Serialize};

/// Outgoing envelope for encrypted calls: tenant, application, ciphertext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Tenant id of the organisation making the call.
    pub buin: u64,

    /// Registered application id within the tenant.
    #[serde(rename = "appId")]
    pub app_id: String,

    /// Ciphertext of the operation-specific JSON payload.
    pub encrypt: String,
}

impl RequestEnvelope {
    /// The platform takes envelopes as form-encoded fields, not a JSON body.
    pub fn into_form(self) -> Vec<(&'static str, String)> {
        vec![
            ("buin", self.buin.to_string()),
            ("appId", self.app_id),
            ("encrypt", self.encrypt),
        ]
    }
}

/// Top-level JSON response for ordinary calls.
///
/// `errcode == 0` is the only success signal; `encrypt` is present only on
/// success and only when the operation returns data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub errcode: i64,

    #[serde(default)]
    pub errmsg: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypt: Option<String>,
}

impl ResponseEnvelope {
    pub fn is_ok(&self) -> bool {
        self.errcode == crate::errcode::OK
    }
}
