use marquee_contracts::{LoadErrorKind, ProviderError};
use marquee_model::MediaItem;

use super::messages::{CarouselEffect, CarouselMessage, Direction};
use super::state::{CarouselState, LoadState, TimerKey};

/// Apply one message and return the effects the runtime must perform.
///
/// Every path that can change the pause flag or the item count goes through
/// [`retime`], which drops the current timer and arms a fresh one when the
/// carousel should keep sliding.
pub fn update_carousel(
    state: &mut CarouselState,
    message: CarouselMessage,
) -> Vec<CarouselEffect> {
    if state.disposed {
        log::trace!("Carousel disposed; dropping {message:?}");
        return Vec::new();
    }

    let before = state.timer_key();
    let mut effects = Vec::new();

    match message {
        CarouselMessage::Mount => {
            if state.load_state == LoadState::NotStarted {
                state.load_state = LoadState::Loading;
                log::debug!("Carousel mounted; requesting {}", state.settings.query);
                effects.push(CarouselEffect::Fetch(state.settings.query));
            } else {
                log::debug!("Carousel already mounted ({:?})", state.load_state);
            }
        }
        CarouselMessage::Loaded(result) => handle_loaded(state, result),
        CarouselMessage::Dispose => {
            state.disposed = true;
            state.swipe.cancel();
            log::debug!("Carousel disposed");
        }
        CarouselMessage::Advance(direction) => {
            state.advance(direction);
        }
        CarouselMessage::Jump(index) => {
            if !state.jump(index) {
                log::warn!(
                    "Ignoring jump to slide {index}; carousel has {} items",
                    state.len()
                );
            }
        }
        CarouselMessage::AutoAdvanceTick(generation) => {
            if state.timer_armed && generation == state.timer_generation {
                state.advance(Direction::Next);
            } else {
                log::trace!(
                    "Stale auto-advance tick (gen {generation}, current {})",
                    state.timer_generation
                );
            }
        }
        CarouselMessage::PointerEntered => {
            state.hover_regions = state.hover_regions.saturating_add(1);
        }
        CarouselMessage::PointerLeft => {
            state.hover_regions = state.hover_regions.saturating_sub(1);
        }
        CarouselMessage::TouchStart(x) => state.swipe.begin(x),
        CarouselMessage::TouchEnd(x) => {
            let threshold = state.settings.swipe_threshold_px;
            if let Some(direction) = state.swipe.finish(x, threshold) {
                state.advance(direction);
            }
        }
        CarouselMessage::TouchCancel => state.swipe.cancel(),
        CarouselMessage::OpenCurrent => {
            if let Some(item) = state.current_item() {
                effects.push(CarouselEffect::Navigate(item.id));
            }
        }
        CarouselMessage::Open(id) => {
            if state.items().iter().any(|item| item.id == id) {
                effects.push(CarouselEffect::Navigate(id));
            } else {
                log::warn!("Ignoring open request for unknown item {id}");
            }
        }
    }

    retime(state, before, &mut effects);
    effects
}

fn handle_loaded(
    state: &mut CarouselState,
    result: Result<Vec<MediaItem>, ProviderError>,
) {
    if state.load_state != LoadState::Loading {
        log::warn!(
            "Ignoring load completion in state {:?}; items are fixed after the first load",
            state.load_state
        );
        return;
    }

    match result {
        Ok(items) => {
            if items.is_empty() {
                log::warn!("No trending titles returned; carousel stays empty");
            } else {
                log::info!("Loaded {} trending titles", items.len());
            }
            state.install_items(items);
        }
        Err(err) => {
            let kind = err.kind();
            match kind {
                LoadErrorKind::ConfigurationMissing => {
                    log::error!("TMDB API key is missing; carousel stays empty")
                }
                LoadErrorKind::LoadFailure => {
                    log::error!("Error fetching trending titles: {err}")
                }
            }
            state.load_state = LoadState::Failed(kind);
        }
    }
}

fn retime(
    state: &mut CarouselState,
    before: TimerKey,
    effects: &mut Vec<CarouselEffect>,
) {
    if state.timer_key() == before {
        return;
    }

    state.timer_generation = state.timer_generation.wrapping_add(1);

    if state.timer_armed {
        effects.push(CarouselEffect::CancelAutoAdvance);
        state.timer_armed = false;
    }

    if state.should_auto_advance() {
        state.timer_armed = true;
        effects.push(CarouselEffect::ScheduleAutoAdvance {
            generation: state.timer_generation,
            period: state.settings.auto_advance,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use marquee_model::MediaId;

    fn items(count: u64) -> Vec<MediaItem> {
        (1..=count)
            .map(|id| MediaItem::new(id, format!("Movie {id}")))
            .collect()
    }

    fn mounted_with(count: u64) -> (CarouselState, Vec<CarouselEffect>) {
        let mut state = CarouselState::default();
        update_carousel(&mut state, CarouselMessage::Mount);
        let effects = update_carousel(&mut state, CarouselMessage::Loaded(Ok(items(count))));
        (state, effects)
    }

    fn schedule(generation: u64) -> CarouselEffect {
        CarouselEffect::ScheduleAutoAdvance {
            generation,
            period: Duration::from_millis(3_000),
        }
    }

    #[test]
    fn mount_fetches_once() {
        let mut state = CarouselState::default();
        let first = update_carousel(&mut state, CarouselMessage::Mount);
        assert!(matches!(first.as_slice(), [CarouselEffect::Fetch(_)]));
        assert_eq!(state.load_state(), LoadState::Loading);

        let second = update_carousel(&mut state, CarouselMessage::Mount);
        assert!(second.is_empty());
    }

    #[test]
    fn successful_load_arms_the_timer() {
        let (state, effects) = mounted_with(5);
        assert_eq!(effects, vec![schedule(1)]);
        assert!(state.is_timer_armed());
        assert_eq!(state.load_state(), LoadState::Loaded);
    }

    #[test]
    fn empty_or_failed_load_never_arms_the_timer() {
        let (state, effects) = mounted_with(0);
        assert!(effects.is_empty());
        assert!(!state.is_timer_armed());

        let mut state = CarouselState::default();
        update_carousel(&mut state, CarouselMessage::Mount);
        let effects = update_carousel(
            &mut state,
            CarouselMessage::Loaded(Err(ProviderError::Schema("no results".into()))),
        );
        assert!(effects.is_empty());
        assert!(state.is_empty());
        assert_eq!(state.load_state(), LoadState::Failed(LoadErrorKind::LoadFailure));

        let mut state = CarouselState::default();
        update_carousel(&mut state, CarouselMessage::Mount);
        update_carousel(&mut state, CarouselMessage::Loaded(Err(ProviderError::MissingApiKey)));
        assert_eq!(
            state.load_state(),
            LoadState::Failed(LoadErrorKind::ConfigurationMissing)
        );
    }

    #[test]
    fn second_load_completion_is_ignored() {
        let (mut state, _) = mounted_with(3);
        let effects = update_carousel(&mut state, CarouselMessage::Loaded(Ok(items(9))));
        assert!(effects.is_empty());
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn ticks_advance_only_for_the_live_generation() {
        let (mut state, _) = mounted_with(3);
        let live = state.timer_generation();

        update_carousel(&mut state, CarouselMessage::AutoAdvanceTick(live));
        assert_eq!(state.current_index(), 1);

        update_carousel(&mut state, CarouselMessage::AutoAdvanceTick(live - 1));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn ticks_on_an_empty_carousel_are_harmless() {
        let mut state = CarouselState::default();
        let effects = update_carousel(&mut state, CarouselMessage::AutoAdvanceTick(0));
        assert!(effects.is_empty());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn hover_pauses_and_leaving_reschedules_fresh() {
        let (mut state, _) = mounted_with(3);

        let effects = update_carousel(&mut state, CarouselMessage::PointerEntered);
        assert_eq!(effects, vec![CarouselEffect::CancelAutoAdvance]);
        assert!(state.is_paused());

        // A tick that was already queued from the old timer is dropped.
        update_carousel(&mut state, CarouselMessage::AutoAdvanceTick(1));
        assert_eq!(state.current_index(), 0);

        let effects = update_carousel(&mut state, CarouselMessage::PointerLeft);
        assert_eq!(effects, vec![schedule(3)]);
        assert!(!state.is_paused());
    }

    #[test]
    fn nested_hover_regions_do_not_flicker() {
        let (mut state, _) = mounted_with(3);
        update_carousel(&mut state, CarouselMessage::PointerEntered);
        let inner_enter = update_carousel(&mut state, CarouselMessage::PointerEntered);
        assert!(inner_enter.is_empty());

        let inner_leave = update_carousel(&mut state, CarouselMessage::PointerLeft);
        assert!(inner_leave.is_empty());
        assert!(state.is_paused());

        let outer_leave = update_carousel(&mut state, CarouselMessage::PointerLeft);
        assert!(matches!(
            outer_leave.as_slice(),
            [CarouselEffect::ScheduleAutoAdvance { .. }]
        ));

        // Unbalanced leaves saturate instead of underflowing.
        let extra = update_carousel(&mut state, CarouselMessage::PointerLeft);
        assert!(extra.is_empty());
        assert!(!state.is_paused());
    }

    #[test]
    fn swipes_step_once_in_each_direction() {
        let (mut state, _) = mounted_with(5);

        update_carousel(&mut state, CarouselMessage::TouchStart(100.0));
        update_carousel(&mut state, CarouselMessage::TouchEnd(40.0));
        assert_eq!(state.current_index(), 1);

        update_carousel(&mut state, CarouselMessage::TouchStart(40.0));
        update_carousel(&mut state, CarouselMessage::TouchEnd(100.0));
        assert_eq!(state.current_index(), 0);

        update_carousel(&mut state, CarouselMessage::TouchStart(100.0));
        update_carousel(&mut state, CarouselMessage::TouchEnd(70.0));
        assert_eq!(state.current_index(), 0);

        update_carousel(&mut state, CarouselMessage::TouchEnd(0.0));
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn touch_pauses_until_the_gesture_ends() {
        let (mut state, _) = mounted_with(5);

        let start = update_carousel(&mut state, CarouselMessage::TouchStart(200.0));
        assert_eq!(start, vec![CarouselEffect::CancelAutoAdvance]);
        assert!(state.is_paused());

        let end = update_carousel(&mut state, CarouselMessage::TouchEnd(20.0));
        assert!(matches!(end.as_slice(), [CarouselEffect::ScheduleAutoAdvance { .. }]));
        assert_eq!(state.current_index(), 1);

        update_carousel(&mut state, CarouselMessage::TouchStart(200.0));
        let cancel = update_carousel(&mut state, CarouselMessage::TouchCancel);
        assert!(matches!(cancel.as_slice(), [CarouselEffect::ScheduleAutoAdvance { .. }]));
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn jump_and_open_route_through_effects() {
        let (mut state, _) = mounted_with(4);

        update_carousel(&mut state, CarouselMessage::Jump(2));
        assert_eq!(state.current_index(), 2);
        update_carousel(&mut state, CarouselMessage::Jump(40));
        assert_eq!(state.current_index(), 2);

        let open = update_carousel(&mut state, CarouselMessage::OpenCurrent);
        assert_eq!(open, vec![CarouselEffect::Navigate(MediaId(3))]);

        let open = update_carousel(&mut state, CarouselMessage::Open(MediaId(1)));
        assert_eq!(open, vec![CarouselEffect::Navigate(MediaId(1))]);

        let unknown = update_carousel(&mut state, CarouselMessage::Open(MediaId(77)));
        assert!(unknown.is_empty());
    }

    #[test]
    fn open_on_empty_carousel_does_nothing() {
        let mut state = CarouselState::default();
        assert!(update_carousel(&mut state, CarouselMessage::OpenCurrent).is_empty());
    }

    #[test]
    fn dispose_cancels_and_freezes_state() {
        let (mut state, _) = mounted_with(3);
        let generation = state.timer_generation();

        let effects = update_carousel(&mut state, CarouselMessage::Dispose);
        assert_eq!(effects, vec![CarouselEffect::CancelAutoAdvance]);
        assert!(!state.is_timer_armed());

        let late = update_carousel(&mut state, CarouselMessage::AutoAdvanceTick(generation));
        assert!(late.is_empty());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn load_arriving_after_dispose_is_dropped() {
        let mut state = CarouselState::default();
        update_carousel(&mut state, CarouselMessage::Mount);
        update_carousel(&mut state, CarouselMessage::Dispose);

        let effects = update_carousel(&mut state, CarouselMessage::Loaded(Ok(items(5))));
        assert!(effects.is_empty());
        assert!(state.is_empty());
    }
}
