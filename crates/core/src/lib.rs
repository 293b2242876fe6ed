//! `folio-core` -- domain model and pure state logic for the portfolio
//! gallery client.
//!
//! Everything in this crate is synchronous and free of I/O: the
//! [`MediaItem`](media::MediaItem) model, the reducer-style
//! [`PortfolioState`](portfolio::PortfolioState) container, category
//! grouping, and the theme/settings value types. Network access lives in
//! `folio-client`; orchestration lives in `folio-app`.

pub mod category;
pub mod error;
pub mod grouping;
pub mod media;
pub mod portfolio;
pub mod theme;

pub use category::{Category, CategoryChoice, UNCATEGORIZED};
pub use error::CoreError;
pub use grouping::{group_by_category, CategoryGroup};
pub use media::{MediaDraft, MediaItem, MediaKind, UploadedMedia};
pub use portfolio::{PortfolioAction, PortfolioState};
pub use theme::{ColorMode, Theme};
