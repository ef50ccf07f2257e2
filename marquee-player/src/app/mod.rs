//! Headless driver: loads the trending list once and prints each slide as
//! the carousel advances.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use marquee_config::{CarouselConfig, Config, TmdbConfig};
use marquee_contracts::{MediaProvider, NavigationTarget, TrendingQuery};
use marquee_core::TmdbProvider;

use crate::domains::carousel::{
    CarouselRuntime, CarouselSettings, CarouselView, ImageSettings, LoadState,
};
use crate::infra::navigation::LogNavigator;
use crate::render::render_text;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub tmdb: TmdbConfig,
    pub carousel: CarouselConfig,
    pub query: TrendingQuery,
    /// Stop after this many slides have been shown.
    pub max_slides: Option<usize>,
}

impl AppConfig {
    pub fn new(config: Config) -> Self {
        Self {
            tmdb: config.tmdb,
            carousel: config.carousel,
            query: TrendingQuery::default(),
            max_slides: None,
        }
    }

    pub fn with_max_slides(mut self, max_slides: Option<usize>) -> Self {
        self.max_slides = max_slides;
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        if language.is_some() {
            self.tmdb.language = language;
        }
        self
    }

    pub fn carousel_settings(&self) -> CarouselSettings {
        CarouselSettings {
            query: self.query,
            ..CarouselSettings::from(&self.carousel)
        }
    }

    pub fn image_settings(&self) -> ImageSettings {
        ImageSettings::new(self.tmdb.image_base_url.as_str(), self.tmdb.backdrop_size)
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub load_state: LoadState,
    pub items: usize,
    pub slides_shown: usize,
}

/// Run against the real TMDB API until `shutdown` resolves.
pub async fn run<W, F>(config: AppConfig, out: &mut W, shutdown: F) -> anyhow::Result<RunSummary>
where
    W: Write,
    F: Future<Output = ()>,
{
    let provider =
        TmdbProvider::new(config.tmdb.clone()).context("Failed to build the TMDB client")?;
    log::debug!("Using {provider:?}");

    run_with(
        config,
        Arc::new(provider),
        Arc::new(LogNavigator::new()),
        out,
        shutdown,
    )
    .await
}

/// Drive a carousel with any provider and router, printing each slide and
/// view change. Ends when the load leaves nothing to show, when `max_slides`
/// slides have been shown, or when `shutdown` resolves.
pub async fn run_with<W, F>(
    config: AppConfig,
    provider: Arc<dyn MediaProvider>,
    navigator: Arc<dyn NavigationTarget>,
    out: &mut W,
    shutdown: F,
) -> anyhow::Result<RunSummary>
where
    W: Write,
    F: Future<Output = ()>,
{
    let images = config.image_settings();
    let mut runtime = CarouselRuntime::new(config.carousel_settings(), provider, navigator);
    let mut printer = ViewPrinter::default();

    runtime.mount();
    printer.print(out, runtime.view(&images), runtime.state().steps())?;

    tokio::pin!(shutdown);

    loop {
        if runtime.state().load_state() != LoadState::Loading && runtime.state().is_empty() {
            log::warn!("Nothing to show; stopping");
            break;
        }
        if config
            .max_slides
            .is_some_and(|max| printer.slides_shown >= max)
        {
            log::debug!("Shown {} slides; stopping", printer.slides_shown);
            break;
        }

        tokio::select! {
            _ = &mut shutdown => {
                log::info!("Shutdown requested");
                break;
            }
            more = runtime.pump() => {
                if !more {
                    break;
                }
                printer.print(out, runtime.view(&images), runtime.state().steps())?;
            }
        }
    }

    runtime.dispose();

    Ok(RunSummary {
        load_state: runtime.state().load_state(),
        items: runtime.state().len(),
        slides_shown: printer.slides_shown,
    })
}

/// Prints views and counts slides. A step of the carousel is a new slide
/// even when it lands on the same title, as with a single-item list.
#[derive(Debug, Default)]
struct ViewPrinter {
    last: Option<CarouselView>,
    last_steps: u64,
    slides_shown: usize,
}

impl ViewPrinter {
    fn print<W: Write>(
        &mut self,
        out: &mut W,
        view: CarouselView,
        steps: u64,
    ) -> anyhow::Result<()> {
        let stepped = steps != self.last_steps;
        self.last_steps = steps;

        let previous = self.last.as_ref().and_then(|last| last.slide.as_ref());
        let new_slide = match (previous, &view.slide) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(previous), Some(current)) => {
                stepped || previous.position != current.position || previous.id != current.id
            }
        };
        if new_slide {
            self.slides_shown += 1;
        } else if self.last.as_ref() == Some(&view) {
            return Ok(());
        }

        let text = render_text(&view);
        if !text.is_empty() {
            writeln!(out, "{text}\n").context("Failed to write carousel output")?;
        }
        self.last = Some(view);
        Ok(())
    }
}
