//! Typed shape of TMDB `/trending/{media}/{window}` responses.
//!
//! The page itself must decode (a `results` array is mandatory). Individual
//! entries that do not fit [`TrendingEntry`], or that have no title (people
//! in `all` lists), are skipped and logged so one odd row cannot blank the
//! whole carousel.

use marquee_contracts::ProviderError;
use marquee_model::{MediaId, MediaItem};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingPage {
    #[serde(default)]
    pub page: Option<u32>,
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub total_results: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingEntry {
    pub id: u64,
    /// Movies carry `title`, TV shows carry `name`.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub popularity: Option<f64>,
    #[serde(default)]
    pub media_type: Option<String>,
}

impl TrendingEntry {
    fn into_media_item(self) -> Option<MediaItem> {
        let title = self
            .title
            .or(self.name)
            .filter(|title| !title.trim().is_empty())?;

        Some(MediaItem {
            id: MediaId(self.id),
            title,
            overview: self.overview.unwrap_or_default(),
            backdrop_path: self.backdrop_path.filter(|p| !p.trim().is_empty()),
            popularity: self.popularity.unwrap_or_default(),
        })
    }
}

/// Decode a trending response body into carousel items, keeping the
/// provider's ranking order.
pub fn parse_trending(body: &[u8]) -> Result<Vec<MediaItem>, ProviderError> {
    let page: TrendingPage = serde_json::from_slice(body)
        .map_err(|err| ProviderError::Schema(err.to_string()))?;

    let total = page.results.len();
    let mut items = Vec::with_capacity(total);

    for (position, raw) in page.results.into_iter().enumerate() {
        match serde_json::from_value::<TrendingEntry>(raw) {
            Ok(entry) => {
                let id = entry.id;
                let media_type = entry.media_type.clone();
                match entry.into_media_item() {
                    Some(item) => items.push(item),
                    None => tracing::debug!(
                        id,
                        media_type = media_type.as_deref().unwrap_or("unknown"),
                        "skipping trending entry without a title"
                    ),
                }
            }
            Err(err) => {
                tracing::warn!(position, "skipping malformed trending entry: {err}");
            }
        }
    }

    if items.len() < total {
        tracing::info!(kept = items.len(), total, "trending page partially usable");
    }

    Ok(items)
}
