//! Seams between the gallery controller and the outside world.
//!
//! The browser implementations live in [`crate::utils`]; tests provide
//! in-memory ones.

#![allow(async_fn_in_trait)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::error::{FetchError, GalleryError};
use crate::core::state::GalleryState;

/// Remote image API.
pub trait ImageApi {
    /// `GET <base>`: the image URLs in server order.
    async fn list_images(&self) -> Result<Vec<String>, FetchError>;

    /// `DELETE <base>/<filename>`.
    async fn delete_image(&self, filename: &str) -> Result<(), FetchError>;
}

/// Browser facilities used by gallery actions.
pub trait GalleryHost {
    /// Current value of the `image` query parameter.
    fn selected_image(&self) -> Option<String>;

    /// Push a history entry with the `image` parameter set, or removed for
    /// `None`.
    fn set_selected_image(&self, image: Option<&str>);

    /// Page origin, e.g. `https://gallery.example`.
    fn origin(&self) -> String;

    async fn write_clipboard(&self, text: &str) -> Result<(), GalleryError>;

    /// Fetch `url` and hand it to the browser's save flow as `filename`.
    async fn save_file(&self, url: &str, filename: &str) -> Result<(), GalleryError>;

    /// Open `url` in a new browsing context.
    fn open_external(&self, url: &str);

    /// Run `task` once after `delay_ms`.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Where the [`GalleryState`] lives.
///
/// Returns `None` if the store has been disposed (e.g. the owning component
/// unmounted while a request was in flight).
pub trait StateStore {
    fn update_state<R>(&self, f: impl FnOnce(&mut GalleryState) -> R) -> Option<R>;
}

impl StateStore for Rc<RefCell<GalleryState>> {
    fn update_state<R>(&self, f: impl FnOnce(&mut GalleryState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
