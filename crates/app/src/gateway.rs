//! Gateway trait between the session orchestrator and the remote store.
//!
//! [`PortfolioSession`](crate::session::PortfolioSession) talks to the
//! backend only through this trait, so tests can substitute a mock and
//! the production binary plugs in [`PortfolioApi`].

use async_trait::async_trait;

use folio_client::{DeleteError, LoadError, PortfolioApi, SaveError, UploadError};
use folio_core::{MediaItem, UploadedMedia};

/// The four remote operations the orchestrator needs.
///
/// Implementations are stateless between calls with respect to the item
/// collection: they receive and return snapshots, never retaining one.
#[async_trait]
pub trait PortfolioGateway: Send + Sync {
    /// Fetch the collection stored under `user_id`.
    async fn load(&self, user_id: &str) -> Result<Vec<MediaItem>, LoadError>;

    /// Persist a full collection snapshot under `user_id`.
    async fn save(&self, user_id: &str, items: &[MediaItem]) -> Result<(), SaveError>;

    /// Delete one item from the remote store. Does not touch local state.
    async fn remove(&self, user_id: &str, media_id: &str) -> Result<(), DeleteError>;

    /// Store a raw binary, returning the metadata to build a [`MediaItem`].
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadedMedia, UploadError>;
}

#[async_trait]
impl PortfolioGateway for PortfolioApi {
    async fn load(&self, user_id: &str) -> Result<Vec<MediaItem>, LoadError> {
        PortfolioApi::load(self, user_id).await
    }

    async fn save(&self, user_id: &str, items: &[MediaItem]) -> Result<(), SaveError> {
        PortfolioApi::save(self, user_id, items).await
    }

    async fn remove(&self, user_id: &str, media_id: &str) -> Result<(), DeleteError> {
        PortfolioApi::remove(self, user_id, media_id).await
    }

    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadedMedia, UploadError> {
        PortfolioApi::upload(self, filename, bytes).await
    }
}
