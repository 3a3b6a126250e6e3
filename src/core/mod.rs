//! Core gallery logic, independent of the DOM.
//!
//! This module provides:
//! - [`GalleryState`] state transitions (paging, fetch sequencing)
//! - [`GalleryController`] async actions (list, delete, share, download)
//! - [`ImageApi`], [`GalleryHost`], [`StateStore`] seams to the browser

mod controller;
pub mod error;
mod host;
mod state;

pub use controller::{DownloadOutcome, GalleryController};
pub use host::{GalleryHost, ImageApi, StateStore};
pub use state::GalleryState;
