//! Application router component.
//!
//! Handles URL-based routing with the History API.
//! Uses native popstate events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL is the source of truth**: the selected image is the `image` query
//!   parameter and is never copied into component state
//! - **Gallery never re-renders on navigation**: the grid is always mounted
//! - **Lightbox is conditional**: shown only while an image is selected
//! - **popstate events**: Browser back/forward close and reopen the lightbox

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::GalleryContext;
use crate::components::gallery::{Gallery, Lightbox};
use crate::models::AppRoute;

/// Replace an `/images/<id>` alias with the canonical `/?image=<id>` URL,
/// without adding a history entry.
fn canonicalize(route: RwSignal<AppRoute>) {
    if let Some(target) = route.with_untracked(AppRoute::redirect_target) {
        target.replace();
        route.set(target);
    }
}

/// Main application router.
///
/// - `/` → Gallery
/// - `/?image=<url>` → Gallery with the lightbox open on `<url>`
/// - `/images/<id>` → Redirects to `/?image=<id>`
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<GalleryContext>().expect("GalleryContext must be provided");
    let route = ctx.route;

    canonicalize(route);

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
            canonicalize(route);
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let selected = Memo::new(move |_| route.with(|r| r.selected_image().map(String::from)));
    let image = Signal::derive(move || selected.get().unwrap_or_default());

    view! {
        // Gallery is always rendered (stable across route changes)
        <Gallery />

        <Show when=move || route.with(AppRoute::is_modal_open)>
            <Lightbox image=image />
        </Show>
    }
}
