//! Trending carousel
//!
//! One slide visible at a time, auto-advancing on a timer unless the
//! pointer hovers it or a touch gesture is in progress. Swipes step one
//! slide, indicators jump directly, opening a slide hands its id to the
//! router.

pub mod gesture;
pub mod messages;
pub mod runtime;
pub mod state;
pub mod update;
pub mod view;

pub use gesture::SwipeTracker;
pub use messages::{CarouselEffect, CarouselMessage, Direction};
pub use runtime::CarouselRuntime;
pub use state::{CarouselSettings, CarouselState, LoadState};
pub use update::update_carousel;
pub use view::{
    CarouselView, ImageSettings, Indicator, SlideAction, SlideView, view_carousel,
};
