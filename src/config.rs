//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The API base URL is resolved at compile time from `GALLERY_API_URL`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Gallery";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fallback API base used when `GALLERY_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/images";

/// Base URL of the image API.
///
/// `GET <base>` lists images, `DELETE <base>/<filename>` removes one.
pub const API_BASE_URL: &str = match option_env!("GALLERY_API_URL") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

/// Banner text shown when the image list cannot be loaded.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load images. Please try again later.";

// =============================================================================
// Gallery Configuration
// =============================================================================

/// Number of images revealed initially and by each "load more".
pub const PAGE_SIZE: usize = 10;

/// Filename used for downloads when the URL has no trailing segment.
pub const DEFAULT_DOWNLOAD_NAME: &str = "image.jpg";

/// Prefix for synthesized per-fetch image ids (`img-0`, `img-1`, ...).
pub const IMAGE_ID_PREFIX: &str = "img-";

// =============================================================================
// Routing
// =============================================================================

/// Query parameter holding the selected image URL.
pub const IMAGE_QUERY_PARAM: &str = "image";

/// Path prefix of the image alias route (`/images/<id>`).
pub const IMAGE_ALIAS_PREFIX: &str = "/images/";

// =============================================================================
// Timers
// =============================================================================

/// How long the "link copied" indicator stays visible.
pub const COPIED_RESET_MS: u32 = 2000;

/// How long an error notice stays on screen.
pub const NOTICE_DISMISS_MS: u32 = 4000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
