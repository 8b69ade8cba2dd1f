// SPDX-License-Identifier: MPL-2.0
//! Routes native events to carousel messages.
//!
//! Keys and mouse presses only count when no widget captured them, so a
//! click on a control never doubles as a drag. Touch events feed the swipe
//! tracker regardless, since the slide track's scrollable captures them.

use super::Message;
use crate::carousel::NavigationKey;
use crate::ui::track_motion::FRAME_INTERVAL;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, touch, window, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size.width)),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::SwipeStarted(position.x))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::SwipeEnded(position.x))
        }
        Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::SwipeCancelled),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position.x))
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => match status {
            event::Status::Ignored => Some(Message::PointerPressed),
            event::Status::Captured => None,
        },
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::PointerReleased)
        }
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::SwipeCancelled),
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => match status {
            event::Status::Ignored => navigation_key(&key).map(Message::Key),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Frame ticks for the track motion, only while one is running.
pub fn create_motion_subscription(moving: bool) -> Subscription<Message> {
    if moving {
        time::every(FRAME_INTERVAL).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

fn navigation_key(key: &Key) -> Option<NavigationKey> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(NavigationKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(NavigationKey::ArrowRight),
        Key::Named(Named::Home) => Some(NavigationKey::Home),
        Key::Named(Named::End) => Some(NavigationKey::End),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_keys_are_recognized() {
        assert_eq!(
            navigation_key(&Key::Named(Named::ArrowLeft)),
            Some(NavigationKey::ArrowLeft)
        );
        assert_eq!(
            navigation_key(&Key::Named(Named::ArrowRight)),
            Some(NavigationKey::ArrowRight)
        );
        assert_eq!(navigation_key(&Key::Named(Named::Home)), Some(NavigationKey::Home));
        assert_eq!(navigation_key(&Key::Named(Named::End)), Some(NavigationKey::End));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(navigation_key(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(navigation_key(&Key::Named(Named::Space)), None);
        assert_eq!(navigation_key(&Key::Character("n".into())), None);
    }
}
