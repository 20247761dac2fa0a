//! Client configuration: tenant credentials and connection settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tenant id of the organisation.
    pub buin: u64,

    /// Registered application id within the tenant.
    pub app_id: String,

    /// Base64-encoded 32-byte AES key issued for the application.
    pub aes_key: String,

    /// API base address, e.g. `https://youdu.example.com:7080`.
    pub address: String,

    /// Directory for staged upload files. Defaults to the OS temp dir.
    #[serde(default)]
    pub tmp_dir: Option<PathBuf>,

    /// Skip TLS certificate validation when FETCHING remote upload sources
    /// (self-signed internal file servers). API calls always validate.
    #[serde(default)]
    pub accept_invalid_source_certs: bool,
}

impl Config {
    pub(crate) fn staging_dir(&self) -> PathBuf {
        self.tmp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}
