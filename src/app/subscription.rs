// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module handles the periodic tick driving toast auto-dismiss and the
//! keyboard routing that lets Escape close the preview modal.

use super::Message;
use crate::ui::preview;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss.
///
/// Only active while toasts are visible, so an idle gallery schedules no
/// wakeups at all.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(500)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard subscription for the preview modal.
///
/// While the modal is open, an uncaptured Escape press closes it; this is
/// the same close request the header button and the backdrop emit. With the
/// modal closed there is nothing to dismiss, so no listener is installed.
pub fn create_key_subscription(preview_open: bool) -> Subscription<Message> {
    if !preview_open {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if let event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) = &event
        {
            match status {
                event::Status::Ignored => Some(Message::Preview(preview::Message::Close)),
                event::Status::Captured => None,
            }
        } else {
            None
        }
    })
}
