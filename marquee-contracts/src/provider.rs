use std::fmt::{Display, Formatter};
use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::MediaItem;

use crate::error::ProviderError;

/// Which catalogue a trending list is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrendingMedia {
    #[default]
    Movie,
    Tv,
    All,
}

/// Aggregation window of a trending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    Day,
    #[default]
    Week,
}

impl TrendingMedia {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingMedia::Movie => "movie",
            TrendingMedia::Tv => "tv",
            TrendingMedia::All => "all",
        }
    }
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

/// A trending category. The default is "movies trending this week", the
/// list the carousel requests on mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TrendingQuery {
    pub media: TrendingMedia,
    pub window: TimeWindow,
}

impl TrendingQuery {
    pub const fn new(media: TrendingMedia, window: TimeWindow) -> Self {
        Self { media, window }
    }

    /// Path of the list relative to the provider API root.
    pub fn path(&self) -> String {
        format!("trending/{}/{}", self.media.as_str(), self.window.as_str())
    }
}

impl Display for TrendingQuery {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} trending this {}", self.media.as_str(), self.window.as_str())
    }
}

/// Source of ranked media lists.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    async fn fetch_trending(
        &self,
        query: TrendingQuery,
    ) -> Result<Vec<MediaItem>, ProviderError>;
}

#[async_trait]
impl<T> MediaProvider for Arc<T>
where
    T: MediaProvider + ?Sized,
{
    async fn fetch_trending(
        &self,
        query: TrendingQuery,
    ) -> Result<Vec<MediaItem>, ProviderError> {
        (**self).fetch_trending(query).await
    }
}
