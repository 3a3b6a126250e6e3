//! Gallery controller.
//!
//! Orchestrates list/delete requests, clipboard sharing, downloads and the
//! URL-backed lightbox selection on top of a [`StateStore`].
//!
//! Ordering: every action awaits its own follow-up work (e.g. the resync
//! fetch after a delete) before returning, so state is consistent as soon as
//! the returned future completes.

use leptos::logging::warn;

use crate::config::{COPIED_RESET_MS, DEFAULT_DOWNLOAD_NAME};
use crate::core::error::GalleryError;
use crate::core::host::{GalleryHost, ImageApi, StateStore};
use crate::core::state::GalleryState;
use crate::utils::{filename_from_url, share_link};

/// Result of a download attempt. Downloads never fail outright.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The browser save flow was triggered.
    Saved { filename: String },
    /// Saving failed; the raw URL was opened in a new tab instead.
    OpenedExternally { reason: GalleryError },
}

/// The gallery controller.
///
/// Generic over where state lives (`S`), the image API (`A`) and the browser
/// host (`H`). In the app all three are `Copy` handles.
#[derive(Clone, Copy)]
pub struct GalleryController<S, A, H> {
    state: S,
    api: A,
    host: H,
}

impl<S, A, H> GalleryController<S, A, H>
where
    S: StateStore + Clone + 'static,
    A: ImageApi,
    H: GalleryHost,
{
    pub fn new(state: S, api: A, host: H) -> Self {
        Self { state, api, host }
    }

    #[cfg(test)]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Fetch the image list and apply it if no newer fetch was issued
    /// meanwhile. Returns whether the result was applied.
    pub async fn refresh(&self) -> bool {
        let Some(ticket) = self.state.update_state(GalleryState::begin_fetch) else {
            return false;
        };

        let result = self.api.list_images().await;
        if let Err(e) = &result {
            warn!("[gallery] failed to list images: {}", e);
        }

        self.state
            .update_state(|s| s.apply_fetch(ticket, result))
            .unwrap_or(false)
    }

    /// Delete an image by its URL, then resync the list.
    ///
    /// Closes the lightbox first if it shows the deleted image.
    pub async fn delete(&self, url: &str) -> Result<(), GalleryError> {
        let filename =
            filename_from_url(url).ok_or_else(|| GalleryError::MissingFilename(url.to_string()))?;

        self.api
            .delete_image(filename)
            .await
            .map_err(GalleryError::Delete)?;

        if self.host.selected_image().as_deref() == Some(url) {
            self.host.set_selected_image(None);
        }

        self.refresh().await;
        Ok(())
    }

    /// Save an image locally, falling back to opening it in a new tab.
    pub async fn download(&self, url: &str) -> DownloadOutcome {
        let filename = filename_from_url(url).unwrap_or(DEFAULT_DOWNLOAD_NAME);

        match self.host.save_file(url, filename).await {
            Ok(()) => DownloadOutcome::Saved {
                filename: filename.to_string(),
            },
            Err(reason) => {
                warn!("[gallery] download failed, opening {} instead: {}", url, reason);
                self.host.open_external(url);
                DownloadOutcome::OpenedExternally { reason }
            }
        }
    }

    /// Copy a deep link to the image and flag it as copied for
    /// [`COPIED_RESET_MS`]. Returns the copied link.
    pub async fn share(&self, url: &str) -> Result<String, GalleryError> {
        let link = share_link(&self.host.origin(), url);
        self.host.write_clipboard(&link).await?;

        self.state.update_state(|s| s.copied = true);

        let state = self.state.clone();
        self.host.schedule(
            COPIED_RESET_MS,
            Box::new(move || {
                state.update_state(|s| s.copied = false);
            }),
        );

        Ok(link)
    }

    /// Open the lightbox on `url`.
    pub fn view(&self, url: &str) {
        self.host.set_selected_image(Some(url));
    }

    /// Close the lightbox. No-op when nothing is selected.
    pub fn close(&self) {
        if self.host.selected_image().is_some() {
            self.host.set_selected_image(None);
        }
    }

    /// Reveal the next page of images. Returns whether anything changed.
    pub fn load_more(&self) -> bool {
        self.state
            .update_state(GalleryState::load_more)
            .unwrap_or(false)
    }
}
