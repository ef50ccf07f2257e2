//! Drives the carousel reducer on tokio.
//!
//! All state changes happen in [`CarouselRuntime::dispatch`] on the caller's
//! task. Background work (the single fetch and the auto-advance timer) only
//! ever posts messages back through the runtime's channel.

use std::sync::Arc;
use std::time::Duration;

use marquee_contracts::{DetailRoute, MediaProvider, NavigationTarget, TrendingQuery};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::messages::{CarouselEffect, CarouselMessage};
use super::state::{CarouselSettings, CarouselState};
use super::update::update_carousel;
use super::view::{CarouselView, ImageSettings, view_carousel};

pub struct CarouselRuntime {
    state: CarouselState,
    provider: Arc<dyn MediaProvider>,
    navigator: Arc<dyn NavigationTarget>,
    tx: mpsc::UnboundedSender<CarouselMessage>,
    rx: mpsc::UnboundedReceiver<CarouselMessage>,
    fetch: Option<JoinHandle<()>>,
    timer: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for CarouselRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselRuntime")
            .field("state", &self.state)
            .field("timer_running", &self.is_timer_running())
            .finish_non_exhaustive()
    }
}

impl CarouselRuntime {
    pub fn new(
        settings: CarouselSettings,
        provider: Arc<dyn MediaProvider>,
        navigator: Arc<dyn NavigationTarget>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: CarouselState::new(settings),
            provider,
            navigator,
            tx,
            rx,
            fetch: None,
            timer: None,
        }
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn view(&self, images: &ImageSettings) -> CarouselView {
        view_carousel(&self.state, images)
    }

    /// Handle for posting messages from other tasks (input adapters).
    pub fn sender(&self) -> mpsc::UnboundedSender<CarouselMessage> {
        self.tx.clone()
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Start the single trending load.
    pub fn mount(&mut self) {
        self.dispatch(CarouselMessage::Mount);
    }

    pub fn dispose(&mut self) {
        self.dispatch(CarouselMessage::Dispose);
    }

    pub fn dispatch(&mut self, message: CarouselMessage) {
        let effects = update_carousel(&mut self.state, message);
        for effect in effects {
            self.perform(effect);
        }
    }

    /// Wait for the next message from a background task.
    pub async fn next_message(&mut self) -> Option<CarouselMessage> {
        self.rx.recv().await
    }

    /// Receive and apply one background message. Returns `false` once the
    /// channel is closed.
    pub async fn pump(&mut self) -> bool {
        match self.next_message().await {
            Some(message) => {
                self.dispatch(message);
                true
            }
            None => false,
        }
    }

    /// Apply every message already queued without waiting.
    pub fn drain_pending(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.rx.try_recv() {
            self.dispatch(message);
            applied += 1;
        }
        applied
    }

    fn perform(&mut self, effect: CarouselEffect) {
        match effect {
            CarouselEffect::Fetch(query) => self.spawn_fetch(query),
            CarouselEffect::ScheduleAutoAdvance { generation, period } => {
                self.spawn_timer(generation, period)
            }
            CarouselEffect::CancelAutoAdvance => self.cancel_timer(),
            CarouselEffect::Navigate(id) => {
                log::debug!("Opening {}", DetailRoute(id));
                self.navigator.navigate_to_detail(id);
            }
        }
    }

    fn spawn_fetch(&mut self, query: TrendingQuery) {
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        self.fetch = Some(tokio::spawn(async move {
            let result = provider.fetch_trending(query).await;
            if tx.send(CarouselMessage::Loaded(result)).is_err() {
                log::debug!("Carousel gone before {query} finished loading");
            }
        }));
    }

    fn spawn_timer(&mut self, generation: u64, period: Duration) {
        self.cancel_timer();
        let tx = self.tx.clone();
        log::trace!("Auto-advance armed (gen {generation}, every {period:?})");
        self.timer = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                if tx.send(CarouselMessage::AutoAdvanceTick(generation)).is_err() {
                    break;
                }
            }
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }
}

impl Drop for CarouselRuntime {
    fn drop(&mut self) {
        self.cancel_timer();
        if let Some(handle) = self.fetch.take() {
            handle.abort();
        }
    }
}
