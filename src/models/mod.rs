//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`ImageRecord`] - Images listed by the API
//! - [`AppRoute`] - Path + query based navigation (selected image lives here)
//! - [`Notice`] - Transient user-facing notifications

mod image;
mod notice;
mod route;

pub use image::ImageRecord;
pub use notice::{Notice, NoticeLevel};
pub use route::AppRoute;
