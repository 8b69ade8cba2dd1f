// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel::{NavigationKey, NavigationRequest, TransitionTicket};
use crate::ui::carousel_view;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Previous/next control or indicator pressed.
    Navigate(NavigationRequest),
    /// One of the carousel keys was pressed and nothing else handled it.
    Key(NavigationKey),
    /// A touch started at this x coordinate.
    SwipeStarted(f32),
    /// The touch was lifted at this x coordinate.
    SwipeEnded(f32),
    SwipeCancelled,
    /// The mouse cursor moved to this x coordinate.
    CursorMoved(f32),
    /// Left mouse button pressed or released outside any widget; drags
    /// swipe like touches do.
    PointerPressed,
    PointerReleased,
    /// The transition delay for this ticket has elapsed.
    TransitionElapsed(TransitionTicket),
    /// Frame tick while the track is moving.
    AnimationTick(Instant),
    /// The slide track reported a new scroll position.
    TrackScrolled(f32),
    /// The window was resized to this width.
    Resized(f32),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

impl From<carousel_view::Event> for Message {
    fn from(event: carousel_view::Event) -> Self {
        match event {
            carousel_view::Event::Navigate(request) => Message::Navigate(request),
            carousel_view::Event::TrackScrolled(x) => Message::TrackScrolled(x),
        }
    }
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `pt-BR`).
    pub lang: Option<String>,
    /// Deck path, optionally followed by a `#slide-N` fragment.
    pub deck: Option<String>,
    /// One-based slide to open on; wins over the fragment.
    pub at: Option<usize>,
    /// Directory with extra `.ftl` files.
    pub i18n_dir: Option<String>,
}
