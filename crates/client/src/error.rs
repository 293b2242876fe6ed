//! Per-operation gateway errors.
//!
//! One error enum per remote operation. Every enum distinguishes a failed
//! request (network, DNS, timeout, body decode) from a non-2xx response,
//! keeping the raw body text around for logs.

/// Remote load failed. Policy: log only, render the empty state.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The HTTP request itself failed (network, DNS, decode, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("load-portfolio returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Remote save failed. Policy: log only, no retry, no rollback.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("save-portfolio returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Remote deletion failed. Policy: surfaced to the caller; local state is
/// left untouched so client and remote stay consistent.
#[derive(Debug, thiserror::Error)]
pub enum DeleteError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("remove-media returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}

/// Upload failed. Policy: surfaced to the caller; the add flow is aborted
/// and no partial item is created.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upload returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
}
