//! Utility modules for web, DOM, and URL operations.
//!
//! Provides:
//! - [`BrowserHost`] - Browser navigation, clipboard and downloads
//! - [`HttpImageApi`] - `gloo-net` client for the image API
//! - [`share_link`], [`filename_from_url`] - URL helpers

mod browser;
pub mod dom;
pub mod fetch;
mod url;

pub use browser::BrowserHost;
pub use fetch::HttpImageApi;
pub use url::{api_item_url, encode_uri_component, filename_from_url, share_link};
