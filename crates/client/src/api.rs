//! REST client for the portfolio backend endpoints.
//!
//! Wraps the portfolio HTTP API (portfolio load/save, media removal,
//! binary upload) using [`reqwest`]. The client is stateless between
//! calls: it holds only the connection pool and the configured base
//! address, never a copy of the item collection.

use serde::Deserialize;

use folio_core::{MediaItem, MediaKind, UploadedMedia};

use crate::error::{DeleteError, LoadError, SaveError, UploadError};

/// HTTP client for one portfolio backend.
pub struct PortfolioApi {
    client: reqwest::Client,
    base_url: String,
}

/// Response returned by `GET /load-portfolio/{user_id}`.
#[derive(Debug, Deserialize)]
struct LoadResponse {
    items: Vec<MediaItem>,
}

/// Response returned by `POST /upload` after storing the binary.
///
/// The backend may include extra fields (e.g. a server-side id or a
/// relative url); only the two needed to construct an item are read.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    filename: String,
    media_type: MediaKind,
}

impl PortfolioApi {
    /// Create a new API client.
    ///
    /// * `base_url` - backend base address, e.g. `http://localhost:8000`.
    ///   A trailing slash is stripped so path joins stay predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Backend base address (e.g. `http://localhost:8000`).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full item collection stored under `user_id`.
    ///
    /// Sends `GET /load-portfolio/{user_id}`. An unknown identifier is not
    /// an error -- the backend answers it with an empty collection.
    pub async fn load(&self, user_id: &str) -> Result<Vec<MediaItem>, LoadError> {
        let response = self
            .client
            .get(format!("{}/load-portfolio/{}", self.base_url, user_id))
            .send()
            .await?;

        let response = ensure_success(response, |status, body| LoadError::Status {
            status,
            body,
        })
        .await?;
        let parsed: LoadResponse = response.json().await?;

        tracing::debug!(user_id, count = parsed.items.len(), "Loaded portfolio");
        Ok(parsed.items)
    }

    /// Persist the full item collection under `user_id`.
    ///
    /// Sends `POST /save-portfolio` with the whole snapshot; the store is
    /// last-write-wins, so whatever lands last simply replaces the key.
    pub async fn save(&self, user_id: &str, items: &[MediaItem]) -> Result<(), SaveError> {
        let body = serde_json::json!({
            "user_id": user_id,
            "items": items,
        });

        let response = self
            .client
            .post(format!("{}/save-portfolio", self.base_url))
            .json(&body)
            .send()
            .await?;

        ensure_success(response, |status, body| SaveError::Status { status, body }).await?;
        tracing::debug!(user_id, count = items.len(), "Saved portfolio");
        Ok(())
    }

    /// Delete a single item from the remote store.
    ///
    /// Sends `DELETE /remove-media`. This does not touch any local state;
    /// the orchestrator dispatches the local removal only after success.
    pub async fn remove(&self, user_id: &str, media_id: &str) -> Result<(), DeleteError> {
        let body = serde_json::json!({
            "user_id": user_id,
            "media_id": media_id,
        });

        let response = self
            .client
            .delete(format!("{}/remove-media", self.base_url))
            .json(&body)
            .send()
            .await?;

        ensure_success(response, |status, body| DeleteError::Status { status, body }).await?;
        Ok(())
    }

    /// Store a raw binary and return the metadata needed to build a
    /// [`MediaItem`].
    ///
    /// Sends `POST /upload` as a multipart form with a single `file`
    /// field. The backend classifies image vs. video from the part's
    /// content type, which is guessed here from the file extension. The
    /// final `url` is resolved against the configured base address as
    /// `{base}/uploads/{stored filename}`.
    pub async fn upload(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedMedia, UploadError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(guess_content_type(filename))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let response = ensure_success(response, |status, body| UploadError::Status {
            status,
            body,
        })
        .await?;
        let parsed: UploadResponse = response.json().await?;

        tracing::debug!(
            filename,
            stored = %parsed.filename,
            kind = parsed.media_type.as_str(),
            "Uploaded media file",
        );

        let url = format!("{}/uploads/{}", self.base_url, parsed.filename);
        Ok(UploadedMedia {
            filename: parsed.filename,
            kind: parsed.media_type,
            url,
        })
    }
}

/// Ensure the response has a success status code. Returns the response
/// unchanged on success, or the error built from the status and body text
/// on failure.
async fn ensure_success<E>(
    response: reqwest::Response,
    make_error: impl FnOnce(u16, String) -> E,
) -> Result<reqwest::Response, E> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(make_error(status.as_u16(), body));
    }
    Ok(response)
}

/// Guess a content type from the file extension.
///
/// The backend only inspects the `image/` vs `video/` prefix, so this
/// covers the common gallery formats and falls back to a generic binary
/// type for everything else.
fn guess_content_type(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        _ => "application/octet-stream",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
