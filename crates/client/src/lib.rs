//! HTTP gateway to the portfolio backend.
//!
//! Wraps the four remote operations -- load, save, remove, upload -- as a
//! thin stateless client over [`reqwest`]. Each operation has its own
//! error type so callers can apply the per-operation failure policy
//! (log-only for load/save, surfaced for delete/upload).

pub mod api;
pub mod error;

pub use api::PortfolioApi;
pub use error::{DeleteError, LoadError, SaveError, UploadError};
