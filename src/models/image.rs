//! Image records as shown in the gallery grid.

use crate::config::IMAGE_ID_PREFIX;

/// A single image returned by the list endpoint.
///
/// `id` is a positional token synthesized per fetch (`img-<index>`). It is a
/// rendering key only: it is not derived from `url` and does not identify the
/// same image across refetches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    pub url: String,
    pub id: String,
}

impl ImageRecord {
    /// Map a list response to records, preserving server order.
    pub fn from_urls(urls: Vec<String>) -> Vec<Self> {
        urls.into_iter()
            .enumerate()
            .map(|(index, url)| Self {
                url,
                id: format!("{}{}", IMAGE_ID_PREFIX, index),
            })
            .collect()
    }
}
