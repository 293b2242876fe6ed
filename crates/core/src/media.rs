//! The media item model shared between the state container and the remote
//! store.
//!
//! Wire field names follow the portfolio API: the media kind is serialized
//! as `media_type` with lowercase values, matching the backend's JSON
//! schema exactly.

use serde::{Deserialize, Serialize};

use crate::category::CategoryChoice;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// MediaKind
// ---------------------------------------------------------------------------

/// Rendering path for an uploaded asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

// ---------------------------------------------------------------------------
// MediaItem
// ---------------------------------------------------------------------------

/// One committed portfolio entry.
///
/// `id` is the sole identity key (unique within a portfolio, assigned at
/// creation). `title`, `description`, and `category` are never empty on a
/// committed item -- drafts are validated before they become items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    /// Stored file name as returned by the upload endpoint.
    pub filename: String,
    #[serde(rename = "media_type")]
    pub kind: MediaKind,
    pub title: String,
    pub description: String,
    pub category: String,
    /// Directly fetchable resource location.
    pub url: String,
}

// ---------------------------------------------------------------------------
// UploadedMedia
// ---------------------------------------------------------------------------

/// Metadata produced by a successful upload: everything needed to build a
/// [`MediaItem`] except the user-supplied draft fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub filename: String,
    pub kind: MediaKind,
    /// Resolved against the configured base address by the gateway.
    pub url: String,
}

// ---------------------------------------------------------------------------
// MediaDraft
// ---------------------------------------------------------------------------

/// The user-supplied half of a not-yet-committed item.
///
/// Fields may be empty while the draft is being edited; [`validate`]
/// (Self::validate) gates the transition into committed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDraft {
    pub title: String,
    pub description: String,
    pub category: CategoryChoice,
}

impl MediaDraft {
    /// Check that the draft is complete enough to commit.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be empty".to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "description must not be empty".to_string(),
            ));
        }
        self.category.resolve().map(|_| ())
    }

    /// Combine the draft with an upload result into a committed item.
    ///
    /// Fails if the draft does not validate; the returned item therefore
    /// never has an empty title, description, or category.
    pub fn into_item(self, id: String, uploaded: UploadedMedia) -> Result<MediaItem, CoreError> {
        self.validate()?;
        let category = self.category.resolve()?;
        Ok(MediaItem {
            id,
            filename: uploaded.filename,
            kind: uploaded.kind,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            url: uploaded.url,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
