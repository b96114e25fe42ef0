// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery is the base layer; the preview modal and the toast stack are
//! mounted above it only while they have something to show. The modal layer
//! exists in the widget tree exactly when [`preview::State::frame`] returns
//! a frame, so nothing demo-related is rendered while the preview is closed.

use super::Message;
use crate::catalog::ProjectRecord;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::notifications;
use crate::ui::preview::{self, DemoFrame};
use crate::ui::{gallery, styles};
use iced::widget::{center, mouse_area, opaque, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub projects: &'a [ProjectRecord],
    pub thumbnails: &'a media::Cache,
    pub preview: &'a preview::State,
    pub notifications: &'a notifications::Manager,
    pub is_dark: bool,
}

/// Renders the gallery with the optional modal and toast layers above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = gallery::view(gallery::ViewContext {
        i18n: ctx.i18n,
        projects: ctx.projects,
        thumbnails: ctx.thumbnails,
        is_dark: ctx.is_dark,
    })
    .map(Message::Gallery);

    let mut layers = Stack::new()
        .push(base)
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(frame) = ctx.preview.frame() {
        layers = layers.push(modal_layer(frame, ctx.i18n));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(
            ctx.notifications
                .view(ctx.i18n)
                .map(Message::Notification),
        );
    }

    layers.into()
}

/// The dimmed backdrop with the demo frame centered on top.
///
/// The frame content is wrapped in `opaque` so clicks inside the modal never
/// reach the backdrop, while a press on the backdrop itself requests a close.
fn modal_layer<'a>(frame: DemoFrame<'a>, i18n: &'a I18n) -> Element<'a, Message> {
    let content = frame.view(i18n).map(Message::Preview);

    opaque(
        mouse_area(center(opaque(content)).style(styles::backdrop))
            .on_press(Message::Preview(preview::Message::Close)),
    )
}
