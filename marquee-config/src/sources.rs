use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;

use marquee_model::BackdropSize;
use serde::{Deserialize, Serialize};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub tmdb: FileTmdbConfig,
    #[serde(default)]
    pub carousel: FileCarouselConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileTmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_size: Option<BackdropSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FileCarouselConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_advance_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swipe_threshold_px: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skeleton_cards: Option<usize>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub tmdb_api_key: Option<String>,
    pub tmdb_api_key_file: Option<PathBuf>,
    pub tmdb_base_url: Option<String>,
    pub tmdb_image_base_url: Option<String>,
    pub tmdb_language: Option<String>,
    pub tmdb_backdrop_size: Option<String>,
    pub auto_advance_ms: Option<u64>,
    pub swipe_threshold_px: Option<f32>,
    /// Numeric variables that were set but did not parse, with their raw value.
    pub unparsed: Vec<(&'static str, String)>,
}

impl EnvConfig {
    /// Read the process environment.
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Process environment first, then entries of a `.env` file for names
    /// the environment leaves unset.
    pub fn gather_with_dotenv(dotenv: &HashMap<String, String>) -> Self {
        Self::from_lookup(|name| {
            std::env::var(name).ok().or_else(|| dotenv.get(name).cloned())
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |name: &str| {
            lookup(name).filter(|value| !value.trim().is_empty())
        };

        let mut env_config = Self::default();

        env_config.config_path = non_blank("MARQUEE_CONFIG").map(PathBuf::from);
        env_config.tmdb_api_key = non_blank("TMDB_API_KEY");
        env_config.tmdb_api_key_file =
            non_blank("TMDB_API_KEY_FILE").map(PathBuf::from);
        env_config.tmdb_base_url = non_blank("TMDB_BASE_URL");
        env_config.tmdb_image_base_url = non_blank("TMDB_IMAGE_BASE_URL");
        env_config.tmdb_language = non_blank("TMDB_LANGUAGE");
        env_config.tmdb_backdrop_size = non_blank("TMDB_BACKDROP_SIZE");
        env_config.auto_advance_ms =
            env_config.parse_number(non_blank, "MARQUEE_AUTO_ADVANCE_MS");
        env_config.swipe_threshold_px =
            env_config.parse_number(non_blank, "MARQUEE_SWIPE_THRESHOLD_PX");

        env_config
    }

    fn parse_number<T, F>(&mut self, lookup: F, name: &'static str) -> Option<T>
    where
        T: FromStr,
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(name)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(_) => {
                self.unparsed.push((name, raw));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_unparseable_values_are_ignored() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TMDB_API_KEY", "   "),
            ("MARQUEE_AUTO_ADVANCE_MS", "soon"),
            ("MARQUEE_SWIPE_THRESHOLD_PX", " 42.5 "),
            ("TMDB_LANGUAGE", "de-DE"),
        ]);
        let env = EnvConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(env.tmdb_api_key, None);
        assert_eq!(env.auto_advance_ms, None);
        assert_eq!(env.unparsed, vec![("MARQUEE_AUTO_ADVANCE_MS", "soon".to_string())]);
        assert_eq!(env.swipe_threshold_px, Some(42.5));
        assert_eq!(env.tmdb_language.as_deref(), Some("de-DE"));
    }

    #[test]
    fn file_config_reads_both_sections() {
        let file: FileConfig = toml::from_str(
            r#"
            [tmdb]
            api_key = "abc"
            backdrop_size = "w780"

            [carousel]
            auto_advance_ms = 5000
            "#,
        )
        .expect("valid toml");

        assert_eq!(file.tmdb.api_key.as_deref(), Some("abc"));
        assert_eq!(file.tmdb.backdrop_size, Some(BackdropSize::W780));
        assert_eq!(file.carousel.auto_advance_ms, Some(5000));
        assert_eq!(file.carousel.skeleton_cards, None);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed = toml::from_str::<FileConfig>("[tmdb]\napikey = \"typo\"\n");
        assert!(parsed.is_err());
    }
}
