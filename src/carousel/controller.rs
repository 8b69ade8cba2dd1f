// SPDX-License-Identifier: MPL-2.0
//! The slide carousel controller.
//!
//! `SlideCarousel` owns the [`CarouselState`] and is the only thing that
//! mutates it. Every navigation entry point funnels into `go_to`, which either
//! starts a transition and returns a [`PendingTransition`] for the caller to
//! schedule, or explains why nothing happened.

use super::{
    CarouselError, CarouselOptions, CarouselState, DisplaySurface, NavigationRequest, NoLocation,
    Phase, PostTransitionActions, Refusal, SlideLocation, SlideNumber, TrackOffset,
    TransitionTicket,
};
use super::location::LocationError;
use std::time::Duration;

/// A transition that has started and needs its follow-up scheduled.
///
/// The caller must deliver `ticket` back through
/// [`SlideCarousel::complete_transition`] once `delay` has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub ticket: TransitionTicket,
    pub delay: Duration,
    pub from: SlideNumber,
    pub to: SlideNumber,
}

/// Outcome of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Started(PendingTransition),
    /// A transition is in flight; the request was dropped, not queued.
    Dropped,
    /// The target is already showing.
    AlreadyCurrent,
    /// Wrap-around is disabled and the deck edge was reached.
    AtBoundary,
}

impl Navigation {
    /// Returns the transition to schedule, if one started.
    #[must_use]
    pub fn pending(self) -> Option<PendingTransition> {
        match self {
            Navigation::Started(pending) => Some(pending),
            _ => None,
        }
    }
}

/// Slide carousel bound to a display surface and an optional location.
#[derive(Debug)]
pub struct SlideCarousel<S, L = NoLocation> {
    state: CarouselState,
    surface: S,
    location: L,
    actions: PostTransitionActions,
    options: CarouselOptions,
}

impl<S: DisplaySurface> SlideCarousel<S, NoLocation> {
    /// Builds a carousel without a location collaborator.
    ///
    /// # Errors
    ///
    /// See [`SlideCarousel::with_location`].
    pub fn new(
        total: usize,
        surface: S,
        actions: PostTransitionActions,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        Self::with_location(total, surface, NoLocation, actions, options)
    }
}

impl<S: DisplaySurface, L: SlideLocation> SlideCarousel<S, L> {
    /// Builds a carousel for `total` slides and paints its initial state.
    ///
    /// The starting slide is read from `location` when it holds a valid
    /// slide; otherwise the carousel starts on slide 1.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::MissingSurface`] for the first required
    /// surface `surface` does not provide. Nothing is painted in that case.
    pub fn with_location(
        total: usize,
        mut surface: S,
        location: L,
        actions: PostTransitionActions,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        if let Some(missing) = surface.inventory().first_missing(total) {
            tracing::error!(%missing, total, "slide carousel cannot start");
            return Err(CarouselError::MissingSurface(missing));
        }

        let initial = match location.initial_slide() {
            Some(requested) => SlideNumber::new(requested, total).unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring initial slide from location");
                SlideNumber::FIRST
            }),
            None => SlideNumber::FIRST,
        };

        let state = CarouselState::new(total, initial);
        surface.set_track_offset(TrackOffset::for_slide(initial));
        surface.set_slide_active(initial, true);
        surface.set_indicator_active(initial, true);
        surface.set_progress(state.progress_percent());
        if let Some(animation) = actions.get(initial) {
            surface.play_animation(initial, animation);
        }

        tracing::debug!(total, initial = initial.get(), "slide carousel ready");

        Ok(Self {
            state,
            surface,
            location,
            actions,
            options,
        })
    }

    /// Jumps to the one-based slide `index`.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::InvalidIndex`] if `index` is outside
    /// `1..=total`. Out-of-range targets are never clamped.
    pub fn go_to_slide(&mut self, index: usize) -> Result<Navigation, CarouselError> {
        let target = SlideNumber::new(index, self.state.total())?;
        Ok(self.go_to(target))
    }

    /// Advances one slide, wrapping from the last to the first.
    pub fn next_slide(&mut self) -> Navigation {
        let total = self.state.total();
        let current = self.state.current();
        let target = if self.options.wrap_around {
            Some(current.wrapping_next(total))
        } else {
            current.checked_next(total)
        };
        match target {
            Some(target) => self.go_to(target),
            None if self.state.is_transitioning() => Navigation::Dropped,
            None => Navigation::AtBoundary,
        }
    }

    /// Goes back one slide, wrapping from the first to the last.
    pub fn previous_slide(&mut self) -> Navigation {
        let total = self.state.total();
        let current = self.state.current();
        let target = if self.options.wrap_around {
            Some(current.wrapping_previous(total))
        } else {
            current.checked_previous()
        };
        match target {
            Some(target) => self.go_to(target),
            None if self.state.is_transitioning() => Navigation::Dropped,
            None => Navigation::AtBoundary,
        }
    }

    /// Resolves a directional input request.
    ///
    /// Requests are dropped while a transition is in flight, before any
    /// range check.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::InvalidIndex`] for an out-of-range `GoTo`.
    pub fn handle_request(
        &mut self,
        request: NavigationRequest,
    ) -> Result<Navigation, CarouselError> {
        if self.state.is_transitioning() {
            tracing::debug!(?request, "navigation dropped during transition");
            return Ok(Navigation::Dropped);
        }
        match request {
            NavigationRequest::Next => Ok(self.next_slide()),
            NavigationRequest::Previous => Ok(self.previous_slide()),
            NavigationRequest::GoTo(index) => self.go_to_slide(index),
        }
    }

    /// Runs the follow-up of the transition identified by `ticket`.
    ///
    /// Plays the arrived slide's post-transition animation and returns to
    /// idle. Returns `false` (and does nothing) for a ticket that does not
    /// belong to the in-flight transition.
    pub fn complete_transition(&mut self, ticket: TransitionTicket) -> bool {
        if !self.state.finish(ticket) {
            tracing::debug!(ticket = ticket.value(), "ignoring stale transition follow-up");
            return false;
        }

        let arrived = self.state.current();
        if let Some(animation) = self.actions.get(arrived) {
            self.surface.play_animation(arrived, animation);
        }
        tracing::debug!(slide = arrived.get(), "transition complete");
        true
    }

    /// Reapplies the current track offset, e.g. after the viewport changed size.
    ///
    /// Never changes the current slide or starts a transition.
    pub fn handle_resize(&mut self) {
        self.surface
            .set_track_offset(TrackOffset::for_slide(self.state.current()));
    }

    #[must_use]
    pub fn current_slide(&self) -> SlideNumber {
        self.state.current()
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.state.total()
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    #[must_use]
    pub fn progress_percent(&self) -> f32 {
        self.state.progress_percent()
    }

    #[must_use]
    pub fn track_offset(&self) -> TrackOffset {
        TrackOffset::for_slide(self.state.current())
    }

    #[must_use]
    pub fn options(&self) -> CarouselOptions {
        self.options
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for surface bookkeeping (viewport size, sync flags).
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn location(&self) -> &L {
        &self.location
    }

    fn go_to(&mut self, target: SlideNumber) -> Navigation {
        let from = self.state.current();
        let ticket = match self.state.begin(target) {
            Ok(ticket) => ticket,
            Err(Refusal::Busy) => {
                tracing::debug!(target = target.get(), "navigation dropped during transition");
                return Navigation::Dropped;
            }
            Err(Refusal::AlreadyCurrent) => return Navigation::AlreadyCurrent,
        };

        self.surface.set_track_offset(TrackOffset::for_slide(target));
        self.surface.set_indicator_active(from, false);
        self.surface.set_slide_active(from, false);
        self.surface.reset_animation(from);
        self.surface.set_indicator_active(target, true);
        self.surface.set_slide_active(target, true);
        self.surface.set_progress(self.state.progress_percent());

        if self.options.publish_location {
            match self.location.publish(target) {
                Ok(()) => {}
                Err(LocationError::Unsupported) => {
                    tracing::trace!("location collaborator does not accept updates");
                }
                Err(err) => tracing::warn!(%err, "failed to publish slide location"),
            }
        }

        tracing::debug!(from = from.get(), to = target.get(), "transition started");

        Navigation::Started(PendingTransition {
            ticket,
            delay: self.options.transition.as_duration(),
            from,
            to: target,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::{
        FragmentLocation, NavigationKey, SlideAnimation, Surface, SurfaceInventory, SwipeTracker,
    };
    use crate::test_utils::{assert_abs_diff_eq, RecordingSurface, SurfaceCall};

    fn carousel(total: usize) -> SlideCarousel<RecordingSurface> {
        SlideCarousel::new(
            total,
            RecordingSurface::complete(total),
            PostTransitionActions::new(),
            CarouselOptions::default(),
        )
        .expect("complete surface")
    }

    fn settle(carousel: &mut SlideCarousel<RecordingSurface>, navigation: Navigation) {
        let pending = navigation.pending().expect("transition should start");
        assert!(carousel.complete_transition(pending.ticket));
    }

    #[test]
    fn starts_idle_on_first_slide_with_initial_paint() {
        let carousel = carousel(5);
        assert_eq!(carousel.current_slide(), SlideNumber::FIRST);
        assert_eq!(carousel.phase(), Phase::Idle);

        let surface = carousel.surface();
        assert_eq!(surface.active_slide(), Some(1));
        assert_eq!(surface.active_indicator(), Some(1));
        assert_abs_diff_eq!(surface.progress(), 20.0);
        assert_abs_diff_eq!(surface.offset().percent(), 0.0);
    }

    #[test]
    fn go_to_every_slide_enters_and_leaves_transition() {
        for n in 2..=5 {
            let mut carousel = carousel(5);
            let navigation = carousel.go_to_slide(n).unwrap();
            let pending = navigation.pending().unwrap();

            assert_eq!(carousel.current_slide().get(), n);
            assert!(carousel.is_transitioning());
            assert_eq!(pending.delay, Duration::from_millis(800));
            assert_eq!(pending.to.get(), n);

            assert!(carousel.complete_transition(pending.ticket));
            assert!(!carousel.is_transitioning());
            assert_eq!(carousel.current_slide().get(), n);
        }
    }

    #[test]
    fn go_to_writes_offset_once_and_swaps_active_state() {
        let mut carousel = carousel(5);
        carousel.surface_mut().clear_calls();

        carousel.go_to_slide(4).unwrap();

        let surface = carousel.surface();
        let offset_writes = surface
            .calls()
            .iter()
            .filter(|call| matches!(call, SurfaceCall::Offset(_)))
            .count();
        assert_eq!(offset_writes, 1);
        assert_abs_diff_eq!(surface.offset().percent(), -300.0);
        assert_eq!(surface.active_slide(), Some(4));
        assert_eq!(surface.active_indicator(), Some(4));
        assert_abs_diff_eq!(surface.progress(), 80.0);
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut carousel = carousel(5);
        let navigation = carousel.go_to_slide(5).unwrap();
        settle(&mut carousel, navigation);

        let navigation = carousel.next_slide();
        assert_eq!(carousel.current_slide(), SlideNumber::FIRST);
        settle(&mut carousel, navigation);
    }

    #[test]
    fn previous_wraps_from_first_to_last() {
        let mut carousel = carousel(5);
        let navigation = carousel.previous_slide();
        assert_eq!(carousel.current_slide().get(), 5);
        settle(&mut carousel, navigation);
    }

    #[test]
    fn navigation_while_transitioning_is_dropped() {
        let mut carousel = carousel(5);
        let pending = carousel.go_to_slide(3).unwrap().pending().unwrap();

        assert_eq!(carousel.next_slide(), Navigation::Dropped);
        assert_eq!(carousel.previous_slide(), Navigation::Dropped);
        assert_eq!(carousel.go_to_slide(1), Ok(Navigation::Dropped));
        assert_eq!(
            carousel.handle_request(NavigationRequest::GoTo(5)),
            Ok(Navigation::Dropped)
        );
        assert_eq!(carousel.current_slide().get(), 3);

        assert!(carousel.complete_transition(pending.ticket));
        assert!(carousel.next_slide().pending().is_some());
        assert_eq!(carousel.current_slide().get(), 4);
    }

    #[test]
    fn go_to_current_is_a_no_op() {
        let mut carousel = carousel(5);
        carousel.surface_mut().clear_calls();

        assert_eq!(carousel.go_to_slide(1), Ok(Navigation::AlreadyCurrent));
        assert!(!carousel.is_transitioning());
        assert!(carousel.surface().calls().is_empty());
    }

    #[test]
    fn out_of_range_target_is_an_error_not_a_clamp() {
        let mut carousel = carousel(5);
        assert_eq!(
            carousel.go_to_slide(6),
            Err(CarouselError::InvalidIndex { index: 6, total: 5 })
        );
        assert_eq!(
            carousel.go_to_slide(0),
            Err(CarouselError::InvalidIndex { index: 0, total: 5 })
        );
        assert_eq!(carousel.current_slide(), SlideNumber::FIRST);
        assert!(!carousel.is_transitioning());
    }

    #[test]
    fn progress_always_matches_current_over_total() {
        let mut carousel = carousel(4);
        for _ in 0..9 {
            let navigation = carousel.next_slide();
            let expected = carousel.current_slide().get() as f32 / 4.0 * 100.0;
            assert_abs_diff_eq!(carousel.surface().progress(), expected);
            assert_abs_diff_eq!(carousel.progress_percent(), expected);
            settle(&mut carousel, navigation);
        }
    }

    #[test]
    fn five_slides_four_nexts_then_wrap() {
        let mut carousel = carousel(5);
        for _ in 0..4 {
            let navigation = carousel.next_slide();
            settle(&mut carousel, navigation);
        }
        assert_eq!(carousel.current_slide().get(), 5);

        let navigation = carousel.next_slide();
        settle(&mut carousel, navigation);
        assert_eq!(carousel.current_slide().get(), 1);
    }

    #[test]
    fn swipe_sixty_left_goes_next_forty_does_nothing() {
        let mut carousel = carousel(5);
        let mut swipe = SwipeTracker::default();

        swipe.press(400.0);
        let request = swipe.release(340.0).expect("60 units is a swipe");
        let navigation = carousel.handle_request(request).unwrap();
        assert_eq!(carousel.current_slide().get(), 2);
        settle(&mut carousel, navigation);

        swipe.press(400.0);
        assert_eq!(swipe.release(360.0), None);
        assert_eq!(carousel.current_slide().get(), 2);
    }

    #[test]
    fn keys_resolve_through_requests() {
        let mut carousel = carousel(5);

        let navigation = carousel
            .handle_request(NavigationKey::End.request(5))
            .unwrap();
        assert_eq!(carousel.current_slide().get(), 5);
        settle(&mut carousel, navigation);

        let navigation = carousel
            .handle_request(NavigationKey::Home.request(5))
            .unwrap();
        assert_eq!(carousel.current_slide().get(), 1);
        settle(&mut carousel, navigation);

        let navigation = carousel
            .handle_request(NavigationKey::ArrowLeft.request(5))
            .unwrap();
        assert_eq!(carousel.current_slide().get(), 5);
        settle(&mut carousel, navigation);
    }

    #[test]
    fn resize_reapplies_offset_without_state_change() {
        let mut carousel = carousel(5);
        let navigation = carousel.go_to_slide(3).unwrap();
        settle(&mut carousel, navigation);
        carousel.surface_mut().clear_calls();

        carousel.handle_resize();
        carousel.handle_resize();

        assert_eq!(carousel.current_slide().get(), 3);
        assert!(!carousel.is_transitioning());
        assert_eq!(
            carousel.surface().calls(),
            &[
                SurfaceCall::Offset(TrackOffset::for_slide(SlideNumber::from_position(2))),
                SurfaceCall::Offset(TrackOffset::for_slide(SlideNumber::from_position(2))),
            ]
        );
        assert_abs_diff_eq!(carousel.track_offset().percent(), -200.0);
    }

    #[test]
    fn resize_during_transition_keeps_lock() {
        let mut carousel = carousel(5);
        let pending = carousel.go_to_slide(2).unwrap().pending().unwrap();
        carousel.handle_resize();
        assert!(carousel.is_transitioning());
        assert!(carousel.complete_transition(pending.ticket));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut carousel = carousel(5);
        let first = carousel.go_to_slide(2).unwrap().pending().unwrap();
        assert!(carousel.complete_transition(first.ticket));
        assert!(!carousel.complete_transition(first.ticket));

        let _second = carousel.go_to_slide(3).unwrap().pending().unwrap();
        assert!(!carousel.complete_transition(first.ticket));
        assert!(carousel.is_transitioning());
    }

    #[test]
    fn missing_surface_fails_construction() {
        let surface = RecordingSurface::with_inventory(SurfaceInventory {
            progress: false,
            ..SurfaceInventory::complete(5)
        });
        let result = SlideCarousel::new(
            5,
            surface,
            PostTransitionActions::new(),
            CarouselOptions::default(),
        );
        assert_eq!(
            result.err(),
            Some(CarouselError::MissingSurface(Surface::Progress))
        );
    }

    #[test]
    fn single_slide_deck_fails_construction() {
        let result = SlideCarousel::new(
            1,
            RecordingSurface::complete(1),
            PostTransitionActions::new(),
            CarouselOptions::default(),
        );
        assert_eq!(
            result.err(),
            Some(CarouselError::MissingSurface(Surface::Slide(2)))
        );
    }

    #[test]
    fn post_transition_animation_runs_after_follow_up() {
        let actions = PostTransitionActions::new()
            .with(SlideNumber::from_position(2), SlideAnimation::RevealItems);
        let mut carousel = SlideCarousel::new(
            5,
            RecordingSurface::complete(5),
            actions,
            CarouselOptions::default(),
        )
        .unwrap();

        let pending = carousel.go_to_slide(3).unwrap().pending().unwrap();
        assert!(carousel.surface().played().is_empty());

        carousel.complete_transition(pending.ticket);
        assert_eq!(carousel.surface().played(), vec![(3, SlideAnimation::RevealItems)]);

        let pending = carousel.go_to_slide(4).unwrap().pending().unwrap();
        assert!(carousel
            .surface()
            .calls()
            .contains(&SurfaceCall::ResetAnimation(3)));
        carousel.complete_transition(pending.ticket);
        assert_eq!(carousel.surface().played().len(), 1);
    }

    #[test]
    fn without_wrap_boundaries_hold() {
        let options = CarouselOptions {
            wrap_around: false,
            ..CarouselOptions::default()
        };
        let mut carousel = SlideCarousel::new(
            3,
            RecordingSurface::complete(3),
            PostTransitionActions::new(),
            options,
        )
        .unwrap();

        assert_eq!(carousel.previous_slide(), Navigation::AtBoundary);
        let navigation = carousel.go_to_slide(3).unwrap();
        settle_generic(&mut carousel, navigation);
        assert_eq!(carousel.next_slide(), Navigation::AtBoundary);
        assert_eq!(carousel.current_slide().get(), 3);
    }

    fn settle_generic<L: SlideLocation>(
        carousel: &mut SlideCarousel<RecordingSurface, L>,
        navigation: Navigation,
    ) {
        let pending = navigation.pending().expect("transition should start");
        assert!(carousel.complete_transition(pending.ticket));
    }

    #[test]
    fn location_sets_initial_slide_and_receives_updates() {
        let location = FragmentLocation::from_fragment("#slide-4").unwrap();
        let mut carousel = SlideCarousel::with_location(
            5,
            RecordingSurface::complete(5),
            location,
            PostTransitionActions::new(),
            CarouselOptions::default(),
        )
        .unwrap();
        assert_eq!(carousel.current_slide().get(), 4);
        assert_abs_diff_eq!(carousel.surface().offset().percent(), -300.0);

        let navigation = carousel.next_slide();
        settle_generic(&mut carousel, navigation);
        assert_eq!(carousel.location().fragment(), Some("#slide-5"));
    }

    #[test]
    fn out_of_range_initial_location_starts_on_first_slide() {
        let carousel = SlideCarousel::with_location(
            3,
            RecordingSurface::complete(3),
            FragmentLocation::from_slide(9),
            PostTransitionActions::new(),
            CarouselOptions::default(),
        )
        .unwrap();
        assert_eq!(carousel.current_slide(), SlideNumber::FIRST);
    }

    #[test]
    fn location_not_published_when_disabled() {
        let options = CarouselOptions {
            publish_location: false,
            ..CarouselOptions::default()
        };
        let mut carousel = SlideCarousel::with_location(
            3,
            RecordingSurface::complete(3),
            FragmentLocation::new(),
            PostTransitionActions::new(),
            options,
        )
        .unwrap();
        let navigation = carousel.next_slide();
        settle_generic(&mut carousel, navigation);
        assert_eq!(carousel.location().fragment(), None);
    }
}
