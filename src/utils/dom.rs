//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, Document, HtmlAnchorElement, Url, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Best-effort message of a rejected JS value.
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `(pathname, search)` of the page.
pub fn location_parts() -> (String, String) {
    window()
        .map(|w| {
            let location = w.location();
            (
                location.pathname().unwrap_or_default(),
                location.search().unwrap_or_default(),
            )
        })
        .unwrap_or_default()
}

/// Page origin, e.g. `https://gallery.example`.
pub fn origin() -> String {
    window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

/// Push a new history entry without reloading.
pub fn push_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// Replace the current history entry without adding to browser history.
///
/// Useful for redirects that shouldn't appear in back button history.
pub fn replace_url(url: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
    }
}

/// Open a URL in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    if let Some(window) = window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

// =============================================================================
// Downloads
// =============================================================================

/// Hand bytes to the browser's save flow under `filename`.
///
/// Wraps the bytes in a `Blob`, clicks a transient `<a download>` link and
/// releases both the link and the object URL afterwards.
pub fn save_bytes(bytes: &[u8], filename: &str) -> Result<(), String> {
    let document = document().ok_or("document not available")?;

    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let blob = Blob::new_with_u8_array_sequence(&parts).map_err(|e| js_error_message(&e))?;
    let object_url = Url::create_object_url_with_blob(&blob).map_err(|e| js_error_message(&e))?;

    let result = click_download_link(&document, &object_url, filename);
    let _ = Url::revoke_object_url(&object_url);
    result
}

fn click_download_link(document: &Document, href: &str, filename: &str) -> Result<(), String> {
    let anchor = document
        .create_element("a")
        .map_err(|e| js_error_message(&e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "failed to create download link".to_string())?;
    anchor.set_href(href);
    anchor.set_download(filename);

    let body = document.body().ok_or("document has no body")?;
    body.append_child(&anchor).map_err(|e| js_error_message(&e))?;
    anchor.click();
    anchor.remove();
    Ok(())
}
