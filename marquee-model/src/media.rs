use crate::ids::MediaId;
use crate::image::BackdropSize;
use crate::text::{OVERVIEW_MAX_CHARS, truncate_with_ellipsis};

/// Popularity above which a slide carries the "popular" badge.
pub const POPULARITY_BADGE_THRESHOLD: f64 = 50.0;

/// One displayable title as returned by the media provider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    pub id: MediaId,
    pub title: String,
    pub overview: String,
    /// Provider-relative backdrop path (`/abc.jpg`), absent for items
    /// without artwork.
    pub backdrop_path: Option<String>,
    pub popularity: f64,
}

impl MediaItem {
    pub fn new(id: impl Into<MediaId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            overview: String::new(),
            backdrop_path: None,
            popularity: 0.0,
        }
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn with_backdrop(mut self, path: impl Into<String>) -> Self {
        self.backdrop_path = Some(path.into());
        self
    }

    pub fn with_popularity(mut self, popularity: f64) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn is_popular(&self) -> bool {
        self.popularity > POPULARITY_BADGE_THRESHOLD
    }

    /// Overview cut to the slide budget.
    pub fn overview_excerpt(&self) -> String {
        truncate_with_ellipsis(&self.overview, OVERVIEW_MAX_CHARS)
    }

    pub fn backdrop_url(
        &self,
        image_base: &str,
        size: BackdropSize,
    ) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(|path| size.url_for(image_base, path))
    }
}
