//! Inputs and outputs of the carousel reducer.

use std::time::Duration;

use marquee_contracts::{ProviderError, TrendingQuery};
use marquee_model::{MediaId, MediaItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

#[derive(Debug)]
pub enum CarouselMessage {
    // Lifecycle
    Mount,
    Loaded(Result<Vec<MediaItem>, ProviderError>),
    Dispose,

    // Navigation
    Advance(Direction),
    Jump(usize),
    /// Carries the timer generation it was scheduled under.
    AutoAdvanceTick(u64),

    // Pointer
    PointerEntered,
    PointerLeft,

    // Touch
    TouchStart(f32),
    TouchEnd(f32),
    TouchCancel,

    // Selection
    OpenCurrent,
    Open(MediaId),
}

/// Side effects requested by the reducer, performed by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEffect {
    Fetch(TrendingQuery),
    ScheduleAutoAdvance { generation: u64, period: Duration },
    CancelAutoAdvance,
    Navigate(MediaId),
}
