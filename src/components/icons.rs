//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCheck as Check, LuDownload as Download, LuImage as Image, LuMaximize2 as View,
        LuShare2 as Share, LuTrash2 as Delete, LuTriangleAlert as Warning, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowsFullscreen as View, BsCheckLg as Check, BsDownload as Download,
        BsExclamationTriangle as Warning, BsImage as Image, BsShare as Share, BsTrash as Delete,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHECK, Check);
themed_icon!(CLOSE, Close);
themed_icon!(DELETE, Delete);
themed_icon!(DOWNLOAD, Download);
themed_icon!(IMAGE, Image);
themed_icon!(SHARE, Share);
themed_icon!(VIEW, View);
themed_icon!(WARNING, Warning);
