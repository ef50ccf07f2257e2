//! Core data model definitions shared across Marquee crates.

pub mod error;
pub mod ids;
pub mod image;
pub mod media;
pub mod text;

pub use error::{ModelError, Result as ModelResult};
pub use ids::MediaId;
pub use image::{BackdropSize, DEFAULT_IMAGE_BASE};
pub use media::{MediaItem, POPULARITY_BADGE_THRESHOLD};
pub use text::{OVERVIEW_MAX_CHARS, truncate_with_ellipsis};
