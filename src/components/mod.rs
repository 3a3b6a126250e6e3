//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`gallery`] - Image grid, cards, lightbox and toasts
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod gallery;
pub mod icons;
pub mod router;

pub use router::AppRouter;
