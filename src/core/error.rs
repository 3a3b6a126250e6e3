//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Transport errors talking to the image API
//! - [`GalleryError`] - Outcomes of user actions (delete, share, download)

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or the connection failed (CORS, offline, ...)
    #[error("network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// Response body was not the expected JSON shape
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Errors surfaced by gallery actions.
///
/// None of these block the UI; they are logged and shown as a notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GalleryError {
    /// The image URL has no trailing path segment to use as a filename
    #[error("cannot derive a filename from '{0}'")]
    MissingFilename(String),
    /// The API rejected or failed the delete request
    #[error("failed to delete image: {0}")]
    Delete(#[source] FetchError),
    /// Fetching or saving the image bytes failed
    #[error("failed to download image: {0}")]
    Download(String),
    /// Writing to the system clipboard failed
    #[error("failed to copy link: {0}")]
    Clipboard(String),
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
