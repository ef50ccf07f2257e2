use env_logger::{Builder, Target};
use log::LevelFilter;

/// Every Marquee crate shares the `marquee` module prefix.
const CRATE_PREFIX: &str = "marquee";

/// Stdout carries the rendered slides.
fn log_target() -> Target {
    Target::Stderr
}

fn init_default_logger() {
    Builder::new()
        .target(log_target())
        .filter_level(LevelFilter::Warn)
        .filter_module(CRATE_PREFIX, LevelFilter::Debug)
        .init();
}

/// Install `env_logger`. `RUST_LOG` wins when set; otherwise third-party
/// crates log at warn and Marquee at debug.
pub fn init_logger() {
    if std::env::var("RUST_LOG").is_err() {
        init_default_logger();
        log::debug!("RUST_LOG not set, using default log filters");
    } else {
        Builder::from_default_env().target(log_target()).init();
        log::debug!("Logger initialized from RUST_LOG");
    }
}
