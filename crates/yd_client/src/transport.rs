//! HTTP transport seam.
//!
//! Resource clients talk to the platform through this trait so the whole
//! stack can run against a fake in tests. The real implementation is a thin
//! `reqwest` wrapper; it returns status, body, and raw header text without
//! interpreting any of them. Retry and timeout policy, if wanted, belongs to
//! the implementation behind this trait, never to the callers.

use std::fmt::Write as _;
use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;

const USER_AGENT: &str = concat!("yd-client/", env!("CARGO_PKG_VERSION"));

/// Raw HTTP result: status, body bytes, and header text as `Name:value`
/// lines. The header-form envelope is parsed out of the text downstream
/// (`yd_proto::header`).
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: Bytes,
    pub header: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// GET with query parameters.
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<RawResponse>;

    /// POST with form-encoded fields.
    async fn post_form(&self, url: &str, fields: &[(&str, String)]) -> Result<RawResponse>;

    /// Multipart POST: the staged file plus auxiliary form fields.
    async fn upload(&self, url: &str, fields: &[(&str, String)], file: &Path) -> Result<RawResponse>;

    /// Plain GET returning the body, used to fetch remote upload sources.
    async fn fetch(&self, url: &str) -> Result<Bytes>;
}

pub struct HttpTransport {
    client: reqwest::Client,
    /// Separate client for source fetches; certificate validation may be
    /// relaxed here by configuration, never for API calls.
    fetch_client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(accept_invalid_source_certs: bool) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        let fetch_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(accept_invalid_source_certs)
            .build()?;
        Ok(Self { client, fetch_client })
    }

    async fn raw_response(resp: reqwest::Response) -> Result<RawResponse> {
        let status = resp.status().as_u16();
        let header = format_raw_header(resp.headers());
        let body = resp.bytes().await?;
        Ok(RawResponse { status, body, header })
    }
}

/// Flatten a header map into `Name:value` lines. Values that are not valid
/// UTF-8 are skipped rather than mangled.
fn format_raw_header(headers: &reqwest::header::HeaderMap) -> String {
    let mut out = String::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            let _ = writeln!(out, "{}:{}", name.as_str(), value);
        }
    }
    out
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str, query: &[(&str, String)]) -> Result<RawResponse> {
        let resp = self.client.get(url).query(query).send().await?;
        Self::raw_response(resp).await
    }

    async fn post_form(&self, url: &str, fields: &[(&str, String)]) -> Result<RawResponse> {
        let resp = self.client.post(url).form(fields).send().await?;
        Self::raw_response(resp).await
    }

    async fn upload(&self, url: &str, fields: &[(&str, String)], file: &Path) -> Result<RawResponse> {
        let file_name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        let content = tokio::fs::read(file).await?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(content).file_name(file_name));
        for (name, value) in fields {
            form = form.text(name.to_string(), value.clone());
        }

        let resp = self.client.post(url).multipart(form).send().await?;
        Self::raw_response(resp).await
    }

    async fn fetch(&self, url: &str) -> Result<Bytes> {
        let resp = self.fetch_client.get(url).send().await?.error_for_status()?;
        Ok(resp.bytes().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderValue};

    #[test]
    fn raw_header_text_is_name_colon_value_lines() {
        let mut headers = HeaderMap::new();
        headers.insert("encrypt", HeaderValue::from_static("abc"));
        headers.insert("content-length", HeaderValue::from_static("42"));
        let raw = format_raw_header(&headers);
        assert!(raw.contains("encrypt:abc\n"));
        assert!(raw.contains("content-length:42\n"));
    }
}
