//! The portfolio session: state container ownership and sync policy.
//!
//! One [`PortfolioSession`] owns the in-memory collection for the
//! currently active portfolio identifier and is the only component that
//! calls both the state container and the remote gateway. The sync policy
//! it encodes:
//!
//! - activating an identifier discards local state and loads the remote
//!   collection; a late-arriving load response for a previously active
//!   identifier is discarded via an epoch check (stale-response guard);
//! - add/remove mutate local state optimistically, then persist the
//!   post-transition snapshot best-effort (failures are logged, never
//!   rolled back, never retried -- the remote store is last-write-wins);
//! - deletion asks the remote store first and only reconciles local state
//!   after the remote confirms, so a failed delete leaves both sides
//!   consistent.

use std::path::Path;
use std::sync::Mutex;

use folio_client::{DeleteError, LoadError, UploadError};
use folio_core::{
    group_by_category, CategoryGroup, CoreError, MediaDraft, MediaItem, PortfolioAction,
    PortfolioState,
};

use crate::gateway::PortfolioGateway;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures surfaced to the caller of a session operation.
///
/// Load and save failures are deliberately absent: per policy they are
/// logged inside the session and never block the caller.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("deletion failed: {0}")]
    Delete(#[from] DeleteError),

    #[error("could not read media file: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Lifecycle phase of the active identifier (saving is a side effect, not
/// a phase: it never blocks further mutations).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// A load for the active identifier has not settled yet.
    Loading,
    /// Steady state; mutations are accepted and persisted best-effort.
    Synced,
}

/// A load in flight for a specific identifier at a specific epoch.
///
/// Produced by [`PortfolioSession::begin_load`]; redeemed by
/// [`PortfolioSession::apply_load`], which drops the result if the
/// session has moved to another identifier in the meantime.
#[derive(Debug)]
pub struct LoadTicket {
    user_id: String,
    epoch: u64,
}

impl LoadTicket {
    /// Identifier this load was issued for.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

struct Inner {
    user_id: String,
    /// Bumped on every identifier change; stale loads and saves snapshot
    /// the epoch they were issued under and are dropped if it moved.
    epoch: u64,
    state: PortfolioState,
    phase: SessionPhase,
}

/// Snapshot captured at a state transition, saved best-effort afterwards.
struct SaveSnapshot {
    user_id: String,
    epoch: u64,
    items: Vec<MediaItem>,
}

/// Orchestrator for one active portfolio identifier.
pub struct PortfolioSession<G> {
    gateway: G,
    inner: Mutex<Inner>,
}

impl<G: PortfolioGateway> PortfolioSession<G> {
    /// Create a session for `user_id` with an empty collection, awaiting
    /// its first load.
    pub fn new(gateway: G, user_id: impl Into<String>) -> Self {
        Self {
            gateway,
            inner: Mutex::new(Inner {
                user_id: user_id.into(),
                epoch: 0,
                state: PortfolioState::new(),
                phase: SessionPhase::Loading,
            }),
        }
    }

    /// The gateway this session talks through.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn user_id(&self) -> String {
        self.lock().user_id.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.lock().phase
    }

    /// Snapshot of the current item collection.
    pub fn items(&self) -> Vec<MediaItem> {
        self.lock().state.items.clone()
    }

    /// Derived category grouping of the current collection.
    pub fn grouped(&self) -> Vec<CategoryGroup> {
        group_by_category(&self.lock().state.items)
    }

    // -- load protocol -------------------------------------------------------

    /// Start a load for the active identifier.
    pub fn begin_load(&self) -> LoadTicket {
        let mut inner = self.lock();
        inner.phase = SessionPhase::Loading;
        LoadTicket {
            user_id: inner.user_id.clone(),
            epoch: inner.epoch,
        }
    }

    /// Settle a load. Returns `false` when the ticket is stale (the
    /// active identifier changed since [`begin_load`](Self::begin_load))
    /// and the result was discarded.
    ///
    /// A failed load is logged and the session settles in
    /// [`SessionPhase::Synced`] with whatever state it already has; the
    /// display layer treats that as an empty portfolio.
    pub fn apply_load(
        &self,
        ticket: LoadTicket,
        result: Result<Vec<MediaItem>, LoadError>,
    ) -> bool {
        let mut inner = self.lock();
        if ticket.epoch != inner.epoch {
            tracing::debug!(
                user_id = %ticket.user_id,
                "Discarding load response for stale identifier",
            );
            return false;
        }

        match result {
            Ok(items) => {
                tracing::info!(user_id = %ticket.user_id, count = items.len(), "Portfolio loaded");
                inner.state = inner.state.apply(PortfolioAction::LoadItems(items));
            }
            Err(e) => {
                tracing::error!(
                    user_id = %ticket.user_id,
                    error = %e,
                    "Portfolio load failed; continuing with local state",
                );
            }
        }
        inner.phase = SessionPhase::Synced;
        true
    }

    /// Load the active identifier's collection from the remote store.
    pub async fn refresh(&self) {
        let ticket = self.begin_load();
        let result = self.gateway.load(ticket.user_id()).await;
        self.apply_load(ticket, result);
    }

    // -- identifier change ---------------------------------------------------

    /// Switch the active identifier without loading yet.
    ///
    /// Discards the current collection, invalidates in-flight loads and
    /// any not-yet-issued save snapshots taken under the old identifier,
    /// and enters [`SessionPhase::Loading`].
    pub fn set_user(&self, user_id: impl Into<String>) {
        let mut inner = self.lock();
        inner.user_id = user_id.into();
        inner.epoch += 1;
        inner.state = inner.state.apply(PortfolioAction::Clear);
        inner.phase = SessionPhase::Loading;
        tracing::info!(user_id = %inner.user_id, "Switched active portfolio");
    }

    /// Switch the active identifier and load its collection.
    pub async fn activate_user(&self, user_id: impl Into<String>) {
        self.set_user(user_id);
        self.refresh().await;
    }

    // -- mutations -----------------------------------------------------------

    /// Upload a media file and commit it to the portfolio.
    ///
    /// The draft is validated first; the binary is then uploaded and only
    /// on success is a committed item (with a freshly generated id)
    /// appended to local state and the new snapshot persisted. Upload or
    /// validation failure leaves the collection untouched -- no partial
    /// item is ever created.
    pub async fn add_item(
        &self,
        draft: MediaDraft,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<MediaItem, SessionError> {
        draft.validate()?;

        let uploaded = self.gateway.upload(filename, bytes).await?;
        let item = draft.into_item(uuid::Uuid::new_v4().to_string(), uploaded)?;

        let snapshot = {
            let mut inner = self.lock();
            inner.state = inner.state.apply(PortfolioAction::AddItem(item.clone()));
            Self::snapshot(&inner)
        };
        self.persist(snapshot).await;
        Ok(item)
    }

    /// Read a media file from disk and commit it via
    /// [`add_item`](Self::add_item).
    pub async fn add_from_path(
        &self,
        draft: MediaDraft,
        path: &Path,
    ) -> Result<MediaItem, SessionError> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());
        let bytes = tokio::fs::read(path).await?;
        self.add_item(draft, &filename, bytes).await
    }

    /// Remove an item: remote first, then local.
    ///
    /// The remote deletion must succeed before the local `RemoveItem` is
    /// dispatched; on failure local state is untouched and the error is
    /// surfaced so client and remote never drift apart.
    pub async fn remove_item(&self, media_id: &str) -> Result<(), SessionError> {
        let user_id = {
            let inner = self.lock();
            if inner.state.get(media_id).is_none() {
                return Err(CoreError::NotFound {
                    entity: "media item",
                    id: media_id.to_string(),
                }
                .into());
            }
            inner.user_id.clone()
        };

        self.gateway.remove(&user_id, media_id).await?;

        let snapshot = {
            let mut inner = self.lock();
            inner.state = inner.state.apply(PortfolioAction::RemoveItem {
                id: media_id.to_string(),
            });
            Self::snapshot(&inner)
        };
        self.persist(snapshot).await;
        Ok(())
    }

    // -- persistence ---------------------------------------------------------

    /// Best-effort save of a post-transition snapshot.
    ///
    /// Skipped (not canceled -- it was never issued) when the identifier
    /// changed since the snapshot was taken. Failure is logged and local
    /// state stays authoritative until a future load overwrites it.
    async fn persist(&self, snapshot: SaveSnapshot) {
        if self.lock().epoch != snapshot.epoch {
            tracing::debug!(
                user_id = %snapshot.user_id,
                "Skipping save scheduled under a previous identifier",
            );
            return;
        }

        match self
            .gateway
            .save(&snapshot.user_id, &snapshot.items)
            .await
        {
            Ok(()) => {
                tracing::debug!(
                    user_id = %snapshot.user_id,
                    count = snapshot.items.len(),
                    "Portfolio saved",
                );
            }
            Err(e) => {
                tracing::warn!(
                    user_id = %snapshot.user_id,
                    error = %e,
                    "Portfolio save failed; keeping local state",
                );
            }
        }
    }

    fn snapshot(inner: &Inner) -> SaveSnapshot {
        SaveSnapshot {
            user_id: inner.user_id.clone(),
            epoch: inner.epoch,
            items: inner.state.items.clone(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // State transitions are pure and never panic mid-update, so a
        // poisoned lock still holds a consistent Inner.
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
