use async_trait::async_trait;
use marquee_config::{ApiKey, TmdbConfig};
use marquee_contracts::{MediaProvider, ProviderError, TrendingQuery};
use marquee_model::{BackdropSize, MediaItem};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::schema::parse_trending;

const USER_AGENT: &str = concat!("marquee/", env!("CARGO_PKG_VERSION"));

/// TMDB error envelope, e.g. `{"status_code": 7, "status_message": "..."}`.
#[derive(Debug, Deserialize)]
struct TmdbErrorBody {
    #[serde(default)]
    status_code: Option<i64>,
    #[serde(default)]
    status_message: Option<String>,
}

/// [`MediaProvider`] backed by the TMDB v3 API.
///
/// The API key is handed in through [`TmdbConfig`]; the provider never
/// consults the process environment. Without a key every fetch fails fast
/// with [`ProviderError::MissingApiKey`] and no request leaves the process.
#[derive(Clone)]
pub struct TmdbProvider {
    client: Client,
    api_key: Option<ApiKey>,
    base_url: Url,
    image_base_url: Url,
    language: Option<String>,
    backdrop_size: BackdropSize,
}

impl std::fmt::Debug for TmdbProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbProvider")
            .field("base_url", &self.base_url.as_str())
            .field("has_api_key", &self.api_key.is_some())
            .field("language", &self.language)
            .finish()
    }
}

impl TmdbProvider {
    pub fn new(config: TmdbConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(ProviderError::network)?;
        Ok(Self::with_client(client, config))
    }

    /// Reuse an existing HTTP client (connection pool, proxies, TLS roots).
    pub fn with_client(client: Client, config: TmdbConfig) -> Self {
        if config.api_key.is_none() {
            tracing::warn!("TmdbProvider created without an API key");
        }
        Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url,
            image_base_url: config.image_base_url,
            language: config.language,
            backdrop_size: config.backdrop_size,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn image_base_url(&self) -> &str {
        self.image_base_url.as_str()
    }

    pub fn backdrop_size(&self) -> BackdropSize {
        self.backdrop_size
    }

    /// Full backdrop URL of an item, if it has artwork.
    pub fn backdrop_url(&self, item: &MediaItem) -> Option<String> {
        item.backdrop_url(self.image_base_url.as_str(), self.backdrop_size)
    }

    /// Request URL for a trending list, without credentials.
    pub fn trending_url(&self, query: TrendingQuery) -> Result<Url, ProviderError> {
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            query.path()
        );
        let mut url =
            Url::parse(&raw).map_err(|err| ProviderError::InvalidUrl(err.to_string()))?;
        if let Some(language) = &self.language {
            url.query_pairs_mut().append_pair("language", language);
        }
        Ok(url)
    }

    async fn get_bytes(&self, url: Url, key: &ApiKey) -> Result<Vec<u8>, ProviderError> {
        let response = self
            .client
            .get(url)
            .query(&[("api_key", key.expose())])
            .send()
            .await
            .map_err(|err| ProviderError::network(err.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| ProviderError::network(err.without_url()))?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<TmdbErrorBody>(&body).ok();
            tracing::warn!(
                status = status.as_u16(),
                tmdb_code = detail.as_ref().and_then(|d| d.status_code),
                "TMDB request failed: {}",
                detail
                    .as_ref()
                    .and_then(|d| d.status_message.as_deref())
                    .unwrap_or("no error message")
            );
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        Ok(body.to_vec())
    }
}

#[async_trait]
impl MediaProvider for TmdbProvider {
    async fn fetch_trending(
        &self,
        query: TrendingQuery,
    ) -> Result<Vec<MediaItem>, ProviderError> {
        let Some(key) = &self.api_key else {
            return Err(ProviderError::MissingApiKey);
        };

        let url = self.trending_url(query)?;
        tracing::debug!(endpoint = %url, "fetching {query}");

        let body = self.get_bytes(url, key).await?;
        let items = parse_trending(&body)?;

        tracing::info!(count = items.len(), "fetched {query}");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_contracts::{TimeWindow, TrendingMedia};

    fn provider(config: TmdbConfig) -> TmdbProvider {
        TmdbProvider::with_client(Client::new(), config)
    }

    #[test]
    fn trending_url_keeps_the_version_segment() {
        let mut config = TmdbConfig::default();
        config.language = Some("en-US".to_string());
        let url = provider(config)
            .trending_url(TrendingQuery::default())
            .expect("valid url");
        assert_eq!(
            url.as_str(),
            "https://api.themoviedb.org/3/trending/movie/week?language=en-US"
        );
    }

    #[test]
    fn trending_url_tolerates_trailing_slash() {
        let mut config = TmdbConfig::default();
        config.base_url = Url::parse("http://127.0.0.1:9000/3/").expect("url");
        let url = provider(config)
            .trending_url(TrendingQuery::new(TrendingMedia::Tv, TimeWindow::Day))
            .expect("valid url");
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/3/trending/tv/day");
    }

    #[test]
    fn debug_output_hides_the_key() {
        let p = provider(TmdbConfig::default().with_api_key("super-secret"));
        let rendered = format!("{p:?}");
        assert!(rendered.contains("has_api_key: true"));
        assert!(!rendered.contains("super-secret"));
    }

    #[tokio::test]
    async fn missing_key_fails_without_a_request() {
        let mut config = TmdbConfig::default();
        // Unroutable: a request attempt would surface as a network error.
        config.base_url = Url::parse("http://0.0.0.0:1/3").expect("url");
        let err = provider(config)
            .fetch_trending(TrendingQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::MissingApiKey));
    }
}
