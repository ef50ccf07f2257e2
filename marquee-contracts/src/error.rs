use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures a media provider can report for a single fetch.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("TMDB API key is missing")]
    MissingApiKey,

    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(#[source] BoxError),

    #[error("provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("unexpected response shape: {0}")]
    Schema(String),
}

/// The two ways a carousel load can fail, as far as the UI cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// No credentials were configured, nothing was requested.
    ConfigurationMissing,
    /// The request went out and did not yield a usable list.
    LoadFailure,
}

impl ProviderError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            ProviderError::MissingApiKey => LoadErrorKind::ConfigurationMissing,
            ProviderError::InvalidUrl(_)
            | ProviderError::Network(_)
            | ProviderError::Status { .. }
            | ProviderError::Schema(_) => LoadErrorKind::LoadFailure,
        }
    }

    pub fn network<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ProviderError::Network(Box::new(err))
    }
}

impl std::fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadErrorKind::ConfigurationMissing => {
                f.write_str("configuration missing")
            }
            LoadErrorKind::LoadFailure => f.write_str("load failure"),
        }
    }
}
