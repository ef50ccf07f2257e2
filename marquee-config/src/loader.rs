use once_cell::sync::Lazy;
use std::{collections::HashMap, fs, path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

use marquee_model::BackdropSize;

use super::{
    models::{ApiKey, CarouselConfig, Config, ConfigMetadata, TmdbConfig},
    sources::{EnvConfig, FileConfig, FileTmdbConfig},
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

#[derive(Debug, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
    /// When false only the config and `.env` files are consulted.
    pub read_process_env: bool,
}

impl Default for ConfigLoaderOptions {
    fn default() -> Self {
        Self {
            config_path: None,
            env_file: None,
            read_process_env: true,
        }
    }
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    pub fn without_process_env(mut self) -> Self {
        self.options.read_process_env = false;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let (dotenv, env_file_loaded) = self.read_env_file()?;

        let env_config = if self.options.read_process_env {
            EnvConfig::gather_with_dotenv(&dotenv)
        } else {
            EnvConfig::from_lookup(|name| dotenv.get(name).cloned())
        };

        self.load_with_env(env_config, env_file_loaded)
    }

    /// Compose a configuration from an already gathered environment.
    pub fn load_with_env(
        &self,
        env_config: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let file = self.read_file_config(&env_config)?;
        let (config, warnings) =
            self.compose_config(file, env_config, env_file_loaded)?;

        Ok(ConfigLoad { config, warnings })
    }

    fn read_env_file(
        &self,
    ) -> Result<(HashMap<String, String>, bool), ConfigLoadError> {
        let iter = match &self.options.env_file {
            Some(path) => dotenvy::from_path_iter(path),
            None => dotenvy::from_filename_iter(".env"),
        };

        let iter = match iter {
            Ok(iter) => iter,
            Err(dotenvy::Error::Io(_)) => return Ok((HashMap::new(), false)),
            Err(err) => return Err(err.into()),
        };

        let mut vars = HashMap::new();
        for entry in iter {
            let (key, value) = entry?;
            vars.insert(key, value);
        }
        log::debug!("Loaded {} entries from .env file", vars.len());
        Ok((vars, true))
    }

    /// `--config` beats `MARQUEE_CONFIG`; both must exist. Without either,
    /// the first default location on disk is used, if any.
    fn locate_config(&self, env_config: &EnvConfig) -> Option<ConfigLocation> {
        if let Some(path) = self
            .options
            .config_path
            .clone()
            .or_else(|| env_config.config_path.clone())
        {
            return Some(ConfigLocation::Requested(path));
        }

        DEFAULT_CONFIG_LOCATIONS
            .iter()
            .find(|candidate| candidate.is_file())
            .cloned()
            .map(ConfigLocation::Discovered)
    }

    fn read_file_config(
        &self,
        env_config: &EnvConfig,
    ) -> Result<Option<(FileConfig, PathBuf)>, ConfigLoadError> {
        let path = match self.locate_config(env_config) {
            None => return Ok(None),
            Some(ConfigLocation::Requested(path)) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(ConfigLocation::Requested(path))
            | Some(ConfigLocation::Discovered(path)) => path,
        };

        let contents = fs::read_to_string(&path).map_err(|source| {
            ConfigLoadError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let file_config = toml::from_str::<FileConfig>(&contents).map_err(
            |source| ConfigLoadError::Parse {
                path: path.clone(),
                source,
            },
        )?;

        log::info!("Read settings from {}", path.display());
        Ok(Some((file_config, path)))
    }

    fn compose_config(
        &self,
        file: Option<(FileConfig, PathBuf)>,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
        let mut warnings = ConfigWarnings::default();

        let (file_config, config_path) = match file {
            Some((file_config, path)) => (file_config, Some(path)),
            None => {
                warnings.push_with_hint(
                    "No marquee.toml detected; falling back to environment variables",
                    "Create marquee.toml or pass --config to pin settings",
                );
                (FileConfig::default(), None)
            }
        };

        for (name, raw) in &env.unparsed {
            warnings.push_with_hint(
                format!("Ignoring {name}={raw:?}: not a number"),
                "Using the file or built-in value instead",
            );
        }

        let FileConfig {
            tmdb: file_tmdb,
            carousel: file_carousel,
        } = file_config;

        let defaults = TmdbConfig::default();

        let tmdb = TmdbConfig {
            api_key: resolve_api_key(&env, &file_tmdb, &mut warnings),
            base_url: resolve_url(
                "tmdb.base_url",
                env.tmdb_base_url.clone().or(file_tmdb.base_url.clone()),
                defaults.base_url,
            )?,
            image_base_url: resolve_url(
                "tmdb.image_base_url",
                env.tmdb_image_base_url
                    .clone()
                    .or(file_tmdb.image_base_url.clone()),
                defaults.image_base_url,
            )?,
            language: env
                .tmdb_language
                .clone()
                .or(file_tmdb.language.clone())
                .filter(|lang| !lang.trim().is_empty()),
            backdrop_size: match env.tmdb_backdrop_size.as_deref() {
                Some(raw) => raw.parse::<BackdropSize>().map_err(|_| {
                    ConfigLoadError::InvalidValue {
                        field: "TMDB_BACKDROP_SIZE",
                        value: raw.to_string(),
                    }
                })?,
                None => file_tmdb.backdrop_size.unwrap_or(defaults.backdrop_size),
            },
            request_timeout: file_tmdb
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        };

        let carousel_defaults = CarouselConfig::default();
        let carousel = CarouselConfig {
            auto_advance: env
                .auto_advance_ms
                .or(file_carousel.auto_advance_ms)
                .map(Duration::from_millis)
                .unwrap_or(carousel_defaults.auto_advance),
            swipe_threshold_px: env
                .swipe_threshold_px
                .or(file_carousel.swipe_threshold_px)
                .unwrap_or(carousel_defaults.swipe_threshold_px),
            skeleton_cards: file_carousel
                .skeleton_cards
                .unwrap_or(carousel_defaults.skeleton_cards),
        };

        let config = Config {
            tmdb,
            carousel,
            metadata: ConfigMetadata {
                config_path,
                env_file_loaded,
            },
        };

        warnings.extend(validation::apply_guard_rails(&config)?);

        Ok((config, warnings))
    }
}

/// First usable key wins: `TMDB_API_KEY`, `TMDB_API_KEY_FILE`,
/// `tmdb.api_key_file`, then `tmdb.api_key`. An unreadable key file is
/// reported as a warning and skipped; with no key at all the provider
/// reports the missing configuration at fetch time.
fn resolve_api_key(
    env: &EnvConfig,
    file_tmdb: &FileTmdbConfig,
    warnings: &mut ConfigWarnings,
) -> Option<ApiKey> {
    if let Some(key) = env.tmdb_api_key.clone().and_then(ApiKey::new) {
        return Some(key);
    }

    let key_files = [
        env.tmdb_api_key_file.as_deref(),
        file_tmdb.api_key_file.as_deref(),
    ];
    for path in key_files.into_iter().flatten() {
        match fs::read_to_string(path) {
            Ok(contents) => {
                if let Some(key) = ApiKey::new(contents) {
                    return Some(key);
                }
                warnings.push(format!("API key file {} is empty", path.display()));
            }
            Err(err) => warnings.push_with_hint(
                format!("Cannot read API key file {}: {err}", path.display()),
                "Check the path in TMDB_API_KEY_FILE or tmdb.api_key_file",
            ),
        }
    }

    file_tmdb.api_key.clone().and_then(ApiKey::new)
}

fn resolve_url(
    field: &'static str,
    raw: Option<String>,
    default: Url,
) -> Result<Url, ConfigLoadError> {
    match raw {
        Some(raw) => Url::parse(raw.trim())
            .map_err(|source| ConfigLoadError::InvalidUrl { field, source }),
        None => Ok(default),
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid URL in {field}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid value '{value}' for {field}")]
    InvalidValue { field: &'static str, value: String },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug)]
enum ConfigLocation {
    /// Named by `--config` or `MARQUEE_CONFIG`.
    Requested(PathBuf),
    Discovered(PathBuf),
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
