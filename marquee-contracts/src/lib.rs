//! Trait surfaces for the collaborators the carousel consumes: a media
//! provider that lists trending titles and a router that opens detail views.

pub mod error;
pub mod navigation;
pub mod provider;

pub use error::{LoadErrorKind, ProviderError};
pub use navigation::{DetailRoute, NavigationTarget};
pub use provider::{MediaProvider, TimeWindow, TrendingMedia, TrendingQuery};

/// Frequently used contracts for UI crates.
pub mod prelude {
    pub use super::error::{LoadErrorKind, ProviderError};
    pub use super::navigation::NavigationTarget;
    pub use super::provider::{MediaProvider, TrendingQuery};
    pub use marquee_model::{MediaId, MediaItem};
}
