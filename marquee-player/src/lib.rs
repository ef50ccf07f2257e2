//! Marquee player library
//!
//! The trending carousel and the glue the `marquee` binary needs to run it
//! headless. The carousel itself is split the usual way: state, messages, a
//! reducer that returns effects, a view model, and a runtime that performs
//! the effects on tokio.

pub mod app;
pub mod domains;
pub mod infra;
pub mod render;

pub use domains::carousel::{
    CarouselEffect, CarouselMessage, CarouselRuntime, CarouselSettings,
    CarouselState, CarouselView, Direction, LoadState,
};
