//! Network fetching utilities.
//!
//! Thin wrappers over `gloo-net` plus the HTTP implementation of
//! [`ImageApi`]. Requests are single attempts without timeouts.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::API_BASE_URL;
use crate::core::ImageApi;
use crate::core::error::FetchError;
use crate::utils::api_item_url;

// =============================================================================
// Fetch Functions
// =============================================================================

/// Map a response status to success (2xx) or [`FetchError::Http`].
fn status_to_result(ok: bool, status: u16) -> Result<(), FetchError> {
    if ok {
        Ok(())
    } else {
        Err(FetchError::Http(status))
    }
}

/// Fail on any non-2xx status.
fn ensure_ok(resp: &Response) -> Result<(), FetchError> {
    status_to_result(resp.ok(), resp.status())
}

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = Request::get(url).send().await?;
    ensure_ok(&resp)?;
    Ok(resp.json::<T>().await?)
}

/// Fetch the raw body of a URL.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
    let resp = Request::get(url).send().await?;
    ensure_ok(&resp)?;
    Ok(resp.binary().await?)
}

/// Send a `DELETE` request, ignoring any response body.
pub async fn delete(url: &str) -> Result<(), FetchError> {
    let resp = Request::delete(url).send().await?;
    ensure_ok(&resp)
}

// =============================================================================
// Image API
// =============================================================================

/// HTTP client for the image API.
#[derive(Clone, Copy, Debug)]
pub struct HttpImageApi {
    base: &'static str,
}

impl HttpImageApi {
    pub const fn new(base: &'static str) -> Self {
        Self { base }
    }
}

impl Default for HttpImageApi {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl ImageApi for HttpImageApi {
    async fn list_images(&self) -> Result<Vec<String>, FetchError> {
        fetch_json(self.base).await
    }

    async fn delete_image(&self, filename: &str) -> Result<(), FetchError> {
        delete(&api_item_url(self.base, filename)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_to_result() {
        assert_eq!(status_to_result(true, 200), Ok(()));
        assert_eq!(status_to_result(true, 204), Ok(()));
        assert_eq!(status_to_result(false, 404), Err(FetchError::Http(404)));
        assert_eq!(status_to_result(false, 500), Err(FetchError::Http(500)));
    }

    #[test]
    fn test_default_api_base() {
        let api = HttpImageApi::default();
        assert_eq!(api.base, API_BASE_URL);
        assert_eq!(
            api_item_url(api.base, "foo.png"),
            format!("{}/foo.png", API_BASE_URL.trim_end_matches('/'))
        );
    }
}
