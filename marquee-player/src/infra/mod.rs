pub mod logging;
pub mod navigation;
