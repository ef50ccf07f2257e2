use thiserror::Error;

use super::models::Config;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("auto-advance period must be greater than zero")]
    ZeroAutoAdvance,
    #[error("swipe threshold must be a non-negative number, got {0}")]
    InvalidSwipeThreshold(f32),
    #[error("{field} must use http or https, got '{scheme}'")]
    UnsupportedScheme { field: &'static str, scheme: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }

    /// Emit every warning through the `log` facade.
    pub fn log(&self) {
        for warning in &self.items {
            match &warning.hint {
                Some(hint) => log::warn!("{} ({})", warning.message, hint),
                None => log::warn!("{}", warning.message),
            }
        }
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if config.carousel.auto_advance.is_zero() {
        return Err(ConfigGuardRailError::ZeroAutoAdvance);
    }

    let threshold = config.carousel.swipe_threshold_px;
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(ConfigGuardRailError::InvalidSwipeThreshold(threshold));
    }

    for (field, url) in [
        ("tmdb.base_url", &config.tmdb.base_url),
        ("tmdb.image_base_url", &config.tmdb.image_base_url),
    ] {
        match url.scheme() {
            "https" => {}
            "http" => warnings.push(format!(
                "{field} uses plain http; the API key travels in the query string"
            )),
            other => {
                return Err(ConfigGuardRailError::UnsupportedScheme {
                    field,
                    scheme: other.to_string(),
                });
            }
        }
    }

    if !config.tmdb.has_api_key() {
        warnings.push_with_hint(
            "TMDB API key is missing; the trending carousel will stay empty",
            "Set TMDB_API_KEY, TMDB_API_KEY_FILE, or tmdb.api_key in marquee.toml",
        );
    }

    if config.carousel.skeleton_cards == 0 {
        warnings.push("carousel.skeleton_cards is 0; nothing renders while loading");
    }

    Ok(warnings)
}
