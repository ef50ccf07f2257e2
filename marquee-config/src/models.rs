use std::path::PathBuf;
use std::time::Duration;

use marquee_model::{BackdropSize, DEFAULT_IMAGE_BASE};
use url::Url;
use zeroize::Zeroizing;

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 3_000;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;
pub const DEFAULT_SKELETON_CARDS: usize = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub tmdb: TmdbConfig,
    pub carousel: CarouselConfig,
    pub metadata: ConfigMetadata,
}

/// Where the configuration came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}

/// Connection settings for the TMDB API.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: Option<ApiKey>,
    pub base_url: Url,
    pub image_base_url: Url,
    pub language: Option<String>,
    pub backdrop_size: BackdropSize,
    pub request_timeout: Duration,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_url(DEFAULT_TMDB_BASE_URL),
            image_base_url: default_url(DEFAULT_IMAGE_BASE),
            language: None,
            backdrop_size: BackdropSize::default(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl TmdbConfig {
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = ApiKey::new(key);
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Behaviour knobs of the trending carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub auto_advance: Duration,
    pub swipe_threshold_px: f32,
    pub skeleton_cards: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance: Duration::from_millis(DEFAULT_AUTO_ADVANCE_MS),
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            skeleton_cards: DEFAULT_SKELETON_CARDS,
        }
    }
}

/// TMDB v3 API key. Wiped from memory on drop and never printed.
#[derive(Clone)]
pub struct ApiKey(Zeroizing<String>);

impl ApiKey {
    /// Returns `None` for blank input so an empty variable counts as unset.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(Zeroizing::new(trimmed.to_string())))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

fn default_url(raw: &str) -> Url {
    Url::parse(raw).expect("built-in URL constants are valid")
}
