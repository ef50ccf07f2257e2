//! Presentation of [`CarouselView`](crate::domains::carousel::CarouselView)
//! outside a GUI toolkit.

pub mod text;

pub use text::render_text;
