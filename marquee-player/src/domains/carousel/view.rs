//! Render contract: what a front end needs to draw the carousel.

use marquee_contracts::DetailRoute;
use marquee_model::{BackdropSize, DEFAULT_IMAGE_BASE, MediaId, MediaItem};

use super::state::CarouselState;

/// Where backdrop artwork is served from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSettings {
    pub base: String,
    pub size: BackdropSize,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            base: DEFAULT_IMAGE_BASE.to_string(),
            size: BackdropSize::default(),
        }
    }
}

impl ImageSettings {
    pub fn new(base: impl Into<String>, size: BackdropSize) -> Self {
        Self {
            base: base.into(),
            size,
        }
    }
}

/// Presentational call-to-action buttons. They carry no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    Watch,
    Like,
}

impl SlideAction {
    pub const ALL: [SlideAction; 2] = [SlideAction::Watch, SlideAction::Like];

    pub fn label(&self) -> &'static str {
        match self {
            SlideAction::Watch => "Watch Now",
            SlideAction::Like => "Like",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub id: MediaId,
    pub title: String,
    pub overview: String,
    pub backdrop_url: Option<String>,
    pub popular: bool,
    pub actions: [SlideAction; 2],
    pub route: DetailRoute,
    /// Zero-based position within the list.
    pub position: usize,
    pub total: usize,
}

impl SlideView {
    fn from_item(
        item: &MediaItem,
        position: usize,
        total: usize,
        images: &ImageSettings,
    ) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            overview: item.overview_excerpt(),
            backdrop_url: item.backdrop_url(&images.base, images.size),
            popular: item.is_popular(),
            actions: SlideAction::ALL,
            route: DetailRoute(item.id),
            position,
            total,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CarouselView {
    pub slide: Option<SlideView>,
    pub indicators: Vec<Indicator>,
    /// Placeholder cards while the list is still loading.
    pub skeletons: usize,
    pub is_paused: bool,
}

impl CarouselView {
    pub fn is_loading(&self) -> bool {
        self.skeletons > 0
    }

    /// Loaded (or failed) with nothing to show.
    pub fn is_empty(&self) -> bool {
        self.slide.is_none() && self.skeletons == 0
    }
}

pub fn view_carousel(state: &CarouselState, images: &ImageSettings) -> CarouselView {
    if state.load_state().is_pending() {
        return CarouselView {
            skeletons: state.settings().skeleton_cards,
            is_paused: state.is_paused(),
            ..CarouselView::default()
        };
    }

    let total = state.len();
    let current = state.current_index();

    CarouselView {
        slide: state
            .current_item()
            .map(|item| SlideView::from_item(item, current, total, images)),
        indicators: (0..total)
            .map(|index| Indicator {
                index,
                active: index == current,
            })
            .collect(),
        skeletons: 0,
        is_paused: state.is_paused(),
    }
}
