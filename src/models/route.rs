//! Path + query based routing.
//!
//! URL format:
//! - `/` or `/?image=<url>` - gallery, optionally with the lightbox open
//! - `/images/<id>` - alias that forwards to `/?image=<id>`
//!
//! The `image` query parameter is the single source of truth for the
//! selected image; nothing else caches it.

use ::url::form_urlencoded;
use percent_encoding::percent_decode_str;

use crate::config::{IMAGE_ALIAS_PREFIX, IMAGE_QUERY_PARAM};
use crate::utils::{dom, encode_uri_component};

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Gallery page; `image` is the selected image, if any.
    Gallery { image: Option<String> },
    /// `/images/<id>`; rewritten to [`AppRoute::Gallery`] on arrival.
    ImageAlias { id: String },
}

impl Default for AppRoute {
    fn default() -> Self {
        Self::Gallery { image: None }
    }
}

impl AppRoute {
    /// Parse `location.pathname` and `location.search` into a route.
    ///
    /// An empty `image` value is treated as absent. Unknown paths fall back
    /// to the gallery.
    pub fn from_location(pathname: &str, search: &str) -> Self {
        if let Some(rest) = pathname.strip_prefix(IMAGE_ALIAS_PREFIX) {
            let raw = rest.trim_end_matches('/');
            if !raw.is_empty() {
                let id = percent_decode_str(raw).decode_utf8_lossy().into_owned();
                return Self::ImageAlias { id };
            }
        }

        let image = form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == IMAGE_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        Self::Gallery { image }
    }

    /// Gallery route with the given image selected.
    pub fn with_image(image: impl Into<String>) -> Self {
        Self::Gallery {
            image: Some(image.into()),
        }
    }

    /// Resolve aliases to the gallery route they stand for.
    pub fn canonical(self) -> Self {
        match self {
            Self::ImageAlias { id } => Self::with_image(id),
            gallery => gallery,
        }
    }

    /// Canonical route to replace the current history entry with, if this
    /// route is an alias.
    pub fn redirect_target(&self) -> Option<Self> {
        match self {
            Self::ImageAlias { id } => Some(Self::with_image(id.clone())),
            Self::Gallery { .. } => None,
        }
    }

    /// The selected image, if any.
    pub fn selected_image(&self) -> Option<&str> {
        match self {
            Self::Gallery { image } => image.as_deref(),
            Self::ImageAlias { id } => Some(id),
        }
    }

    /// Whether the lightbox should be shown.
    pub fn is_modal_open(&self) -> bool {
        self.selected_image().is_some()
    }

    /// Path + query string for this route (used with `history.pushState`).
    pub fn to_url(&self) -> String {
        match self {
            Self::Gallery { image: None } => "/".to_string(),
            Self::Gallery { image: Some(url) } => {
                format!("/?{}={}", IMAGE_QUERY_PARAM, encode_uri_component(url))
            }
            Self::ImageAlias { id } => {
                format!("{}{}", IMAGE_ALIAS_PREFIX, encode_uri_component(id))
            }
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        let (pathname, search) = dom::location_parts();
        Self::from_location(&pathname, &search)
    }

    /// Update browser URL to match this route (using pushState)
    pub fn push(&self) {
        dom::push_url(&self.to_url());
    }

    /// Update browser URL without a new history entry (using replaceState)
    pub fn replace(&self) {
        dom::replace_url(&self.to_url());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_location("/", ""), AppRoute::default());
        assert_eq!(AppRoute::from_location("/", "?"), AppRoute::default());
        assert_eq!(
            AppRoute::from_location("/", "?image=x.jpg"),
            AppRoute::with_image("x.jpg")
        );
        assert_eq!(
            AppRoute::from_location("/", "?foo=1&image=http%3A%2F%2Fh%2Fa%20b.jpg"),
            AppRoute::with_image("http://h/a b.jpg")
        );
        // Unknown paths still render the gallery
        assert_eq!(
            AppRoute::from_location("/somewhere", "?image=y.png"),
            AppRoute::with_image("y.png")
        );
    }

    #[test]
    fn test_empty_image_param_is_closed() {
        let route = AppRoute::from_location("/", "?image=");
        assert_eq!(route, AppRoute::default());
        assert!(!route.is_modal_open());
    }

    #[test]
    fn test_image_alias() {
        let route = AppRoute::from_location("/images/img-3", "");
        assert_eq!(
            route,
            AppRoute::ImageAlias {
                id: "img-3".to_string()
            }
        );
        assert!(route.is_modal_open());
        assert_eq!(route.canonical(), AppRoute::with_image("img-3"));

        assert_eq!(
            AppRoute::from_location("/images/http%3A%2F%2Fh%2Fz.jpg", "").canonical(),
            AppRoute::with_image("http://h/z.jpg")
        );
        // Missing id falls back to the gallery
        assert_eq!(AppRoute::from_location("/images/", ""), AppRoute::default());
    }

    #[test]
    fn test_alias_redirect_target() {
        let alias = AppRoute::from_location("/images/img-3", "");
        let target = alias.redirect_target().unwrap();
        assert_eq!(target.to_url(), "/?image=img-3");
        assert_eq!(target.redirect_target(), None);
        assert_eq!(AppRoute::with_image("x.jpg").redirect_target(), None);
        assert_eq!(AppRoute::default().redirect_target(), None);
    }

    #[test]
    fn test_route_to_url() {
        assert_eq!(AppRoute::default().to_url(), "/");
        assert_eq!(
            AppRoute::with_image("http://h/a.jpg").to_url(),
            "/?image=http%3A%2F%2Fh%2Fa.jpg"
        );
        assert_eq!(
            AppRoute::ImageAlias {
                id: "img-1".to_string()
            }
            .to_url(),
            "/images/img-1"
        );
    }

    #[test]
    fn test_to_url_parses_back() {
        let route = AppRoute::with_image("http://h/a b+c.jpg");
        let url = route.to_url();
        let (path, query) = url.split_once('?').unwrap();
        assert_eq!(AppRoute::from_location(path, query), route);
    }
}
