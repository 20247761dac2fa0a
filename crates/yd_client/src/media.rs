//! Media resource client: upload, download, info.
//!
//! Upload stages the encrypted content in a uniquely named temp file; the
//! `NamedTempFile` guard owns the cleanup guarantee, so the staged artifact
//! is removed on every exit path, success and failure alike.

use std::path::{Path, PathBuf};

use tracing::info;

use yd_proto::api::{
    FileKind, MediaDownloadRequest, MediaFileMeta, MediaInfoRequest, MediaInfoResponse,
    MediaUploadMeta, MediaUploadResponse,
};
use yd_proto::header::decode_header;

use crate::app::App;
use crate::error::{Error, Result};
use crate::transport::RawResponse;

pub struct Media {
    app: App,
}

impl Media {
    pub(crate) fn new(app: App) -> Self {
        Self { app }
    }

    /// Upload a local file or a remote `http(s)://` source, returning the
    /// platform-assigned media id. `file_type` must be one of `file`,
    /// `image`, `voice`, `video`; anything else fails before any I/O.
    pub async fn upload(&self, source: &str, file_type: &str) -> Result<String> {
        let kind = FileKind::parse(file_type)
            .ok_or_else(|| Error::UnsupportedFileType(file_type.to_string()))?;

        let content = self.read_source(source).await?;
        let name = source_name(source);
        info!(
            target: "yd_client",
            event = "media_upload_start",
            kind = kind.as_str(),
            name = %name,
            bytes = content.len()
        );

        let meta = self.app.seal(&MediaUploadMeta { kind, name })?;
        let sealed = self.app.seal_bytes(&content)?;

        // The guard deletes the staged ciphertext when this function
        // returns, on every path.
        let staged = tempfile::Builder::new()
            .prefix("youdu_")
            .tempfile_in(self.app.config().staging_dir())
            .map_err(Error::Staging)?;
        tokio::fs::write(staged.path(), sealed.as_bytes())
            .await
            .map_err(Error::Staging)?;

        let resp = self
            .app
            .transport()
            .upload(
                &self.app.build_url("/cgi/media/upload"),
                &self.app.request_form(meta),
                staged.path(),
            )
            .await?;

        let payload: MediaUploadResponse = self.app.open_response(&resp)?;
        if payload.media_id.trim().is_empty() {
            return Err(Error::EmptyMediaId);
        }
        info!(target: "yd_client", event = "media_uploaded", media_id = %payload.media_id);
        Ok(payload.media_id)
    }

    /// Download a media artifact into `save_dir`, named by the platform.
    /// The envelope arrives in header form: the `Encrypt` header opens to
    /// the file metadata and the body decrypts to the raw bytes.
    pub async fn download(&self, media_id: &str, save_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let encrypt = self.app.seal(&MediaDownloadRequest { media_id: media_id.to_string() })?;
        let resp = self
            .app
            .transport()
            .post_form(&self.app.build_url("/cgi/media/get"), &self.app.request_form(encrypt))
            .await?;
        if resp.status != 200 {
            return Err(Error::Transport(resp.status));
        }

        let headers = decode_header(&resp.header);
        // The transport lowercases header names; the platform spells it Encrypt.
        let meta_ciphertext = headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case("Encrypt"))
            .map(|(_, value)| value);
        let Some(meta_ciphertext) = meta_ciphertext else {
            return Err(Self::missing_header_error(&resp));
        };
        let meta: MediaFileMeta = self.app.open(meta_ciphertext)?;

        let body = std::str::from_utf8(&resp.body)
            .map_err(|e| Error::Decode(format!("media body is not ciphertext text: {e}")))?;
        let content = self.app.open_bytes(body)?;

        let target = save_dir.as_ref().join(&meta.name);
        tokio::fs::write(&target, &content)
            .await
            .map_err(|e| Error::Save(e.to_string()))?;
        if content.is_empty() {
            // A zero-byte artifact counts as a failed save.
            return Err(Error::Save(format!("wrote 0 bytes to {}", target.display())));
        }
        info!(
            target: "yd_client",
            event = "media_downloaded",
            media_id = %media_id,
            path = %target.display(),
            bytes = content.len()
        );
        Ok(target)
    }

    /// Metadata for an uploaded artifact (standard JSON envelope).
    pub async fn info(&self, media_id: &str) -> Result<MediaInfoResponse> {
        let encrypt = self.app.seal(&MediaInfoRequest { media_id: media_id.to_string() })?;
        let resp = self
            .app
            .transport()
            .post_form(&self.app.build_url("/cgi/media/search"), &self.app.request_form(encrypt))
            .await?;
        self.app.open_response(&resp)
    }

    /// Remote sources are fetched over HTTP(S); certificate validation
    /// there follows `Config::accept_invalid_source_certs`. Anything else
    /// is a local path.
    async fn read_source(&self, source: &str) -> Result<Vec<u8>> {
        if is_remote(source) {
            let bytes = self.app.transport().fetch(source).await?;
            Ok(bytes.to_vec())
        } else {
            Ok(tokio::fs::read(source).await?)
        }
    }

    /// A download without the header-form envelope usually means the
    /// platform answered with an ordinary JSON error envelope instead.
    fn missing_header_error(resp: &RawResponse) -> Error {
        match App::ensure_ok(resp) {
            Err(err) => err,
            Ok(()) => Error::Decode("response missing Encrypt header".into()),
        }
    }
}

fn is_remote(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Basename of a path or URL, query string stripped.
fn source_name(source: &str) -> String {
    let trimmed = source.split(['?', '#']).next().unwrap_or(source);
    let name = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
    if name.is_empty() {
        "file".to_string()
    } else {
        name.to_string()
    }
}
