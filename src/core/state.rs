//! Gallery state and its synchronous transitions.
//!
//! Everything here is plain data; the async orchestration lives in
//! [`super::controller`].

use crate::config::{FETCH_ERROR_MESSAGE, PAGE_SIZE};
use crate::core::error::FetchError;
use crate::models::ImageRecord;

/// Sequence number of an issued list fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Component-local gallery state.
///
/// The selected image is deliberately absent: it lives in the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    /// Images in server order.
    pub images: Vec<ImageRecord>,
    /// How many images the grid may show. Only ever grows.
    pub display_count: usize,
    /// True until the first list fetch completes.
    pub loading: bool,
    /// User-facing message of the last failed list fetch.
    pub error: Option<String>,
    /// "Link copied" indicator.
    pub copied: bool,
    latest_request: u64,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            images: Vec::new(),
            display_count: PAGE_SIZE,
            loading: true,
            error: None,
            copied: false,
            latest_request: 0,
        }
    }

    /// Images currently revealed: `images[..min(display_count, len)]`.
    pub fn visible(&self) -> &[ImageRecord] {
        let end = self.display_count.min(self.images.len());
        &self.images[..end]
    }

    /// Whether some images are still hidden behind "load more".
    pub fn has_more(&self) -> bool {
        self.display_count < self.images.len()
    }

    /// Reveal the next page. Returns `false` (and changes nothing) once
    /// every image is already visible.
    pub fn load_more(&mut self) -> bool {
        if !self.has_more() {
            return false;
        }
        self.display_count += PAGE_SIZE;
        true
    }

    /// Issue a ticket for a new list fetch. Older tickets become stale.
    pub fn begin_fetch(&mut self) -> RequestTicket {
        self.latest_request += 1;
        RequestTicket(self.latest_request)
    }

    /// Apply a list fetch result.
    ///
    /// Results carrying a stale ticket are dropped so a slow response can
    /// never overwrite a newer one. Returns whether the result was applied.
    pub fn apply_fetch(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<String>, FetchError>,
    ) -> bool {
        if ticket.0 != self.latest_request {
            return false;
        }
        match result {
            Ok(urls) => {
                self.images = ImageRecord::from_urls(urls);
                self.error = None;
            }
            Err(_) => {
                self.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{}.jpg", i)).collect()
    }

    fn loaded(n: usize) -> GalleryState {
        let mut state = GalleryState::new();
        let ticket = state.begin_fetch();
        assert!(state.apply_fetch(ticket, Ok(urls(n))));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GalleryState::new();
        assert_eq!(state.display_count, 10);
        assert!(state.loading);
        assert!(state.images.is_empty());
        assert_eq!(state.error, None);
        assert!(!state.copied);
    }

    #[test]
    fn test_apply_success() {
        let state = loaded(2);
        assert!(!state.loading);
        assert_eq!(state.error, None);
        assert_eq!(state.images[0].id, "img-0");
        assert_eq!(state.images[1].url, "1.jpg");
    }

    #[test]
    fn test_apply_failure_keeps_images_empty() {
        let mut state = GalleryState::new();
        let ticket = state.begin_fetch();
        assert!(state.apply_fetch(ticket, Err(FetchError::Http(500))));
        assert!(!state.loading);
        assert!(state.images.is_empty());
        assert!(state.error.as_deref().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn test_refetch_failure_keeps_images() {
        let mut state = loaded(3);
        let ticket = state.begin_fetch();
        assert!(state.apply_fetch(ticket, Err(FetchError::Http(500))));
        assert_eq!(state.images.len(), 3);
        assert!(state.error.is_some());
        assert!(!state.loading);
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut state = GalleryState::new();
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Err(FetchError::Network("offline".into())));
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Ok(urls(1)));
        assert_eq!(state.error, None);
        assert_eq!(state.images.len(), 1);
    }

    #[test]
    fn test_stale_fetch_is_ignored() {
        let mut state = loaded(3);
        let slow = state.begin_fetch();
        let fast = state.begin_fetch();

        assert!(state.apply_fetch(fast, Ok(urls(1))));
        assert!(!state.apply_fetch(slow, Ok(urls(5))));
        assert_eq!(state.images.len(), 1);
    }

    #[test]
    fn test_load_more() {
        let mut state = loaded(25);
        assert_eq!(state.visible().len(), 10);

        assert!(state.load_more());
        assert_eq!(state.display_count, 20);
        assert_eq!(state.visible().len(), 20);

        assert!(state.load_more());
        assert_eq!(state.display_count, 30);
        assert_eq!(state.visible().len(), 25);
        assert!(!state.has_more());

        // No-op once everything is visible
        assert!(!state.load_more());
        assert_eq!(state.display_count, 30);
    }

    #[test]
    fn test_visible_clamps_to_images() {
        let state = loaded(3);
        assert_eq!(state.display_count, 10);
        assert_eq!(state.visible().len(), 3);
        assert!(!state.has_more());

        let empty = GalleryState::new();
        assert!(empty.visible().is_empty());
    }

    #[test]
    fn test_display_count_survives_refetch() {
        let mut state = loaded(15);
        state.load_more();
        let ticket = state.begin_fetch();
        state.apply_fetch(ticket, Ok(urls(14)));
        assert_eq!(state.display_count, 20);
        assert_eq!(state.visible().len(), 14);
    }
}
