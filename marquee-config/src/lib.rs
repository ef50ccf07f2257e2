//! Configuration for Marquee.
//!
//! Values are layered: built-in defaults, then a TOML file, then a `.env`
//! file, then the process environment. The loaded [`Config`] is the only
//! place the TMDB API key is read from; consumers receive it explicitly.

pub mod loader;
pub mod models;
pub mod sources;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    ApiKey, CarouselConfig, Config, ConfigMetadata, TmdbConfig,
    DEFAULT_AUTO_ADVANCE_MS, DEFAULT_SKELETON_CARDS,
    DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_TMDB_BASE_URL,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
