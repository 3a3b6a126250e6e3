//! Gallery UI components.
//!
//! Components:
//! - [`Gallery`] - Page with header, error banner, grid and load-more
//! - [`Lightbox`] - Full-size modal for the selected image
//! - `ImageCard` - Grid item with per-image actions
//! - `Toasts` - "Link copied" indicator and notices

mod card;
#[allow(clippy::module_inception)]
mod gallery;
mod lightbox;
mod toast;

pub use gallery::Gallery;
pub use lightbox::Lightbox;
