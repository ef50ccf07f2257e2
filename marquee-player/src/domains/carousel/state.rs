//! CarouselState: slide cursor, pause inputs, and timer bookkeeping.

use std::time::Duration;

use marquee_config::CarouselConfig;
use marquee_contracts::{LoadErrorKind, TrendingQuery};
use marquee_model::MediaItem;

use super::gesture::SwipeTracker;
use super::messages::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotStarted,
    Loading,
    Loaded,
    Failed(LoadErrorKind),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::NotStarted | LoadState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    pub query: TrendingQuery,
    pub auto_advance: Duration,
    pub swipe_threshold_px: f32,
    pub skeleton_cards: usize,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self::from(&CarouselConfig::default())
    }
}

impl From<&CarouselConfig> for CarouselSettings {
    fn from(config: &CarouselConfig) -> Self {
        Self {
            query: TrendingQuery::default(),
            auto_advance: config.auto_advance,
            swipe_threshold_px: config.swipe_threshold_px,
            skeleton_cards: config.skeleton_cards,
        }
    }
}

/// Inputs the auto-advance timer depends on. The timer is rebuilt whenever
/// this value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TimerKey {
    pub paused: bool,
    pub len: usize,
    pub disposed: bool,
}

#[derive(Debug, Clone)]
pub struct CarouselState {
    // Content, written once by the load
    items: Vec<MediaItem>,
    pub(crate) load_state: LoadState,

    // Cursor
    current_index: usize,
    /// Successful `advance` calls, including wraps onto the same slide.
    steps: u64,

    // Pause inputs
    /// Pointer regions currently entered. Nested regions each count once
    /// so leaving an inner region does not resume the slideshow.
    pub(crate) hover_regions: u32,
    pub(crate) swipe: SwipeTracker,

    // Timer
    pub(crate) timer_generation: u64,
    pub(crate) timer_armed: bool,
    pub(crate) disposed: bool,

    pub(crate) settings: CarouselSettings,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(CarouselSettings::default())
    }
}

impl CarouselState {
    pub fn new(settings: CarouselSettings) -> Self {
        Self {
            items: Vec::new(),
            load_state: LoadState::NotStarted,
            current_index: 0,
            steps: 0,
            hover_regions: 0,
            swipe: SwipeTracker::new(),
            timer_generation: 0,
            timer_armed: false,
            disposed: false,
            settings,
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        self.items.get(self.current_index)
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn is_paused(&self) -> bool {
        self.hover_regions > 0 || self.swipe.is_active()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn timer_generation(&self) -> u64 {
        self.timer_generation
    }

    pub fn is_timer_armed(&self) -> bool {
        self.timer_armed
    }

    /// Whether a running timer should exist for the current inputs.
    pub fn should_auto_advance(&self) -> bool {
        !self.disposed && !self.is_paused() && !self.items.is_empty()
    }

    pub(crate) fn timer_key(&self) -> TimerKey {
        TimerKey {
            paused: self.is_paused(),
            len: self.items.len(),
            disposed: self.disposed,
        }
    }

    /// Install the loaded list. Only the first call has any effect.
    pub(crate) fn install_items(&mut self, items: Vec<MediaItem>) -> bool {
        if self.load_state != LoadState::Loading {
            return false;
        }
        self.items = items;
        self.current_index = 0;
        self.load_state = LoadState::Loaded;
        true
    }

    /// Step one slide, wrapping at both ends. No-op without items.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let len = self.items.len();
        if len == 0 {
            return false;
        }
        let len = len as isize;
        let next = (self.current_index as isize + direction.step() + len) % len;
        self.current_index = next as usize;
        self.steps += 1;
        true
    }

    /// Select a slide directly. Out-of-range indices are refused.
    pub fn jump(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.current_index = index;
        true
    }
}
