//! Root application module.
//!
//! Contains the main App component, the GalleryContext definition and the
//! glue that runs controller actions on the wasm event loop.

use gloo_timers::callback::Timeout;
use leptos::logging::{error, log};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::NOTICE_DISMISS_MS;
use crate::core::error::GalleryError;
use crate::core::{DownloadOutcome, GalleryController, GalleryState, StateStore};
use crate::models::{AppRoute, Notice};
use crate::utils::{BrowserHost, HttpImageApi};

/// Controller wired to Leptos state, the HTTP API and the browser.
pub type WebGallery = GalleryController<RwSignal<GalleryState>, HttpImageApi, BrowserHost>;

impl StateStore for RwSignal<GalleryState> {
    fn update_state<R>(&self, f: impl FnOnce(&mut GalleryState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

// ============================================================================
// GalleryContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<GalleryContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or handles
/// built from them.
#[derive(Clone, Copy)]
pub struct GalleryContext {
    /// Image list, paging and flags.
    pub gallery: RwSignal<GalleryState>,
    /// Route derived from `location`; refreshed on push and `popstate`.
    pub route: RwSignal<AppRoute>,
    /// Currently shown notice, if any.
    pub notice: RwSignal<Option<Notice>>,
    pub controller: WebGallery,
}

impl GalleryContext {
    pub fn new() -> Self {
        let gallery = RwSignal::new(GalleryState::new());
        let route = RwSignal::new(AppRoute::current());
        Self {
            gallery,
            route,
            notice: RwSignal::new(None),
            controller: GalleryController::new(
                gallery,
                HttpImageApi::default(),
                BrowserHost::new(route),
            ),
        }
    }

    /// Show a notice and dismiss it after [`NOTICE_DISMISS_MS`] unless a
    /// newer one replaced it.
    pub fn notify(&self, notice: Notice) {
        let slot = self.notice;
        slot.set(Some(notice.clone()));
        Timeout::new(NOTICE_DISMISS_MS, move || {
            slot.try_update(|current| {
                if current.as_ref() == Some(&notice) {
                    *current = None;
                }
            });
        })
        .forget();
    }

    fn report(&self, action: &str, err: &GalleryError) {
        error!("[gallery] {} failed: {}", action, err);
        self.notify(Notice::from(err));
    }

    /// Load (or reload) the image list.
    pub fn refresh(&self) {
        let ctrl = self.controller;
        spawn_local(async move {
            ctrl.refresh().await;
        });
    }

    pub fn delete(&self, url: String) {
        let ctx = *self;
        spawn_local(async move {
            if let Err(e) = ctx.controller.delete(&url).await {
                ctx.report("delete", &e);
            }
        });
    }

    pub fn share(&self, url: String) {
        let ctx = *self;
        spawn_local(async move {
            if let Err(e) = ctx.controller.share(&url).await {
                ctx.report("share", &e);
            }
        });
    }

    pub fn download(&self, url: String) {
        let ctx = *self;
        spawn_local(async move {
            match ctx.controller.download(&url).await {
                DownloadOutcome::Saved { filename } => log!("[gallery] saved {}", filename),
                DownloadOutcome::OpenedExternally { reason } => ctx.notify(Notice::info(format!(
                    "Opened the image in a new tab ({})",
                    reason
                ))),
            }
        });
    }

    pub fn view(&self, url: &str) {
        self.controller.view(url);
    }

    pub fn close(&self) {
        self.controller.close();
    }

    pub fn load_more(&self) {
        self.controller.load_more();
    }
}

impl Default for GalleryContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global GalleryContext, then renders the router.
#[component]
pub fn App() -> impl IntoView {
    let ctx = GalleryContext::new();
    provide_context(ctx);

    view! { <AppRouter /> }
}
