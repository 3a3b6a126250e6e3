//! URL helpers for image links.
//!
//! Pure string functions so they can be tested natively.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::IMAGE_QUERY_PARAM;

/// Characters escaped by JavaScript's `encodeURIComponent`.
///
/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string the way `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Extract the trailing path segment of a URL.
///
/// Any `?query` or `#fragment` is ignored. Returns `None` when the last
/// segment is empty (e.g. `http://host/dir/`).
pub fn filename_from_url(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Build the shareable deep link for an image: `<origin>/?image=<encoded url>`.
pub fn share_link(origin: &str, image_url: &str) -> String {
    format!(
        "{}/?{}={}",
        origin.trim_end_matches('/'),
        IMAGE_QUERY_PARAM,
        encode_uri_component(image_url)
    )
}

/// Join the API base with a filename (`<base>/<filename>`).
pub fn api_item_url(base: &str, filename: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), filename)
}
