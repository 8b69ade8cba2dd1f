// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Every carousel call here can write a new track offset, so each handler
//! ends by draining the surface's pending scroll into a widget task. A
//! started transition turns that offset into a [`TrackMotion`] stepped by
//! frame ticks; anything else jumps straight to it.

use super::{App, Message};
use crate::carousel::{Navigation, NavigationRequest, PendingTransition, TransitionTicket};
use crate::ui::surface_model::TRACK_ID;
use crate::ui::track_motion::{self, TrackMotion};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::Instant;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(request) => self.navigate(request),
            Message::Key(key) => {
                let Some(total) = self.screen.presentation().map(|p| p.total_slides()) else {
                    return Task::none();
                };
                self.navigate(key.request(total))
            }
            Message::SwipeStarted(x) => {
                self.swipe.press(x);
                Task::none()
            }
            Message::SwipeEnded(x) => match self.swipe.release(x) {
                Some(request) => self.navigate(request),
                None => Task::none(),
            },
            Message::SwipeCancelled => {
                self.swipe.cancel();
                Task::none()
            }
            Message::CursorMoved(x) => {
                self.cursor_x = Some(x);
                Task::none()
            }
            Message::PointerPressed => {
                if let Some(x) = self.cursor_x {
                    self.swipe.press(x);
                }
                Task::none()
            }
            Message::PointerReleased => {
                match self.cursor_x.and_then(|x| self.swipe.release(x)) {
                    Some(request) => self.navigate(request),
                    None => Task::none(),
                }
            }
            Message::TransitionElapsed(ticket) => {
                let completed = self
                    .screen
                    .presentation_mut()
                    .is_some_and(|presentation| presentation.complete_transition(ticket));
                match self.motion.take() {
                    Some(motion) if completed => self.scroll_track(motion.target()),
                    motion => {
                        self.motion = motion;
                        Task::none()
                    }
                }
            }
            Message::AnimationTick(now) => self.step_motion(now),
            Message::TrackScrolled(x) => self.settle_track(x),
            Message::Resized(width) => {
                if let Some(presentation) = self.screen.presentation_mut() {
                    presentation.surface_mut().set_viewport_width(width);
                    presentation.handle_resize();
                }
                self.sync_scroll()
            }
            Message::WindowCloseRequested(_) => {
                self.remember_position();
                if self.resume_last_slide {
                    if let Some(key) = self.app_state.save() {
                        tracing::warn!(%key, "session state not saved");
                    }
                }
                iced::exit()
            }
        }
    }

    fn navigate(&mut self, request: NavigationRequest) -> Task<Message> {
        let Some(presentation) = self.screen.presentation_mut() else {
            return Task::none();
        };

        let navigation = match presentation.handle_request(request) {
            Ok(navigation) => navigation,
            Err(err) => {
                tracing::warn!(%err, ?request, "navigation rejected");
                return Task::none();
            }
        };

        match navigation {
            Navigation::Started(pending) => {
                self.start_motion(&pending, Instant::now());
                schedule(pending)
            }
            Navigation::Dropped | Navigation::AlreadyCurrent | Navigation::AtBoundary => {
                Task::none()
            }
        }
    }

    /// Jumps the slide track to the carousel's offset if it wrote a new one.
    /// A running motion is abandoned.
    pub(crate) fn sync_scroll(&mut self) -> Task<Message> {
        match self.take_scroll_x() {
            Some(x) => {
                self.motion = None;
                self.scroll_track(x)
            }
            None => Task::none(),
        }
    }

    fn take_scroll_x(&mut self) -> Option<f32> {
        self.screen
            .presentation_mut()
            .and_then(|presentation| presentation.surface_mut().take_scroll_x())
    }

    fn scroll_track(&mut self, x: f32) -> Task<Message> {
        self.track_x = x;
        operation::scroll_to(Id::new(TRACK_ID), AbsoluteOffset { x, y: 0.0 })
    }

    /// Moves the track from where it is showing to the new offset over the
    /// transition delay.
    fn start_motion(&mut self, pending: &PendingTransition, now: Instant) {
        if let Some(target) = self.take_scroll_x() {
            self.motion = Some(TrackMotion::new(self.track_x, target, now, pending.delay));
        }
    }

    fn step_motion(&mut self, now: Instant) -> Task<Message> {
        let Some(motion) = self.motion else {
            return Task::none();
        };
        if motion.is_finished(now) {
            self.motion = None;
        }
        self.scroll_track(motion.position_at(now))
    }

    /// Pulls the track back when something other than the carousel scrolled
    /// it (wheel, trackpad, a finger drag shorter than a swipe).
    fn settle_track(&mut self, shown_x: f32) -> Task<Message> {
        // reports lag behind a running motion
        if self.motion.is_some() {
            return Task::none();
        }
        self.track_x = shown_x;
        let Some(presentation) = self.screen.presentation_mut() else {
            return Task::none();
        };
        if !track_motion::has_drifted(shown_x, presentation.surface().scroll_x()) {
            return Task::none();
        }
        tracing::debug!(shown_x, "track scrolled away from current slide");
        presentation.handle_resize();
        self.sync_scroll()
    }

    /// Stores the current deck and slide for the next session.
    pub(crate) fn remember_position(&mut self) {
        let Some(slide) = self
            .screen
            .presentation()
            .map(|presentation| presentation.current_slide().get())
        else {
            return;
        };

        self.app_state.remember(self.deck_path.as_deref(), slide);
    }
}

/// Delivers the transition ticket back once the delay has elapsed.
fn schedule(pending: PendingTransition) -> Task<Message> {
    Task::perform(transition_timer(pending), Message::TransitionElapsed)
}

// the sleep is created on first poll, inside the executor
async fn transition_timer(pending: PendingTransition) -> TransitionTicket {
    tokio::time::sleep(pending.delay).await;
    pending.ticket
}
