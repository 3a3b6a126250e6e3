//! Browser implementation of [`GalleryHost`].
//!
//! Navigation goes through `history.pushState`; the shared route signal is
//! re-derived from `location` after every push so views stay in sync with the
//! address bar.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::core::GalleryHost;
use crate::core::error::GalleryError;
use crate::models::AppRoute;
use crate::utils::dom;
use crate::utils::fetch::fetch_bytes;

/// Browser-backed host for the gallery controller.
#[derive(Clone, Copy)]
pub struct BrowserHost {
    route: RwSignal<AppRoute>,
}

impl BrowserHost {
    pub fn new(route: RwSignal<AppRoute>) -> Self {
        Self { route }
    }
}

impl GalleryHost for BrowserHost {
    fn selected_image(&self) -> Option<String> {
        AppRoute::current()
            .canonical()
            .selected_image()
            .map(String::from)
    }

    fn set_selected_image(&self, image: Option<&str>) {
        let route = image.map(AppRoute::with_image).unwrap_or_default();
        route.push();
        self.route.set(AppRoute::current());
    }

    fn origin(&self) -> String {
        dom::origin()
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), GalleryError> {
        let window =
            dom::window().ok_or_else(|| GalleryError::Clipboard("window not available".into()))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| GalleryError::Clipboard(dom::js_error_message(&e)))
    }

    async fn save_file(&self, url: &str, filename: &str) -> Result<(), GalleryError> {
        let bytes = fetch_bytes(url)
            .await
            .map_err(|e| GalleryError::Download(e.to_string()))?;
        dom::save_bytes(&bytes, filename).map_err(GalleryError::Download)
    }

    fn open_external(&self, url: &str) {
        dom::open_in_new_tab(url);
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}
