// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for non-blocking user feedback.
//!
//! Startup warnings (unreadable config, bad catalog file) surface here
//! instead of interrupting the gallery. Notifications carry i18n keys, not
//! formatted text, so they localize at render time.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{button, container, Column, Row, Text};
use iced::{Alignment, Background, Border, Element, Length, Theme};
use std::time::{Duration, Instant};

/// How long a toast stays visible before auto-dismissing.
const INFO_TIMEOUT: Duration = Duration::from_secs(3);
const WARNING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    key: String,
    severity: Severity,
    created: Instant,
}

impl Notification {
    #[must_use]
    pub fn info(key: &str) -> Self {
        Self {
            key: key.to_string(),
            severity: Severity::Info,
            created: Instant::now(),
        }
    }

    #[must_use]
    pub fn warning(key: &str) -> Self {
        Self {
            key: key.to_string(),
            severity: Severity::Warning,
            created: Instant::now(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn is_expired(&self) -> bool {
        let timeout = match self.severity {
            Severity::Info => INFO_TIMEOUT,
            Severity::Warning => WARNING_TIMEOUT,
        };
        self.created.elapsed() > timeout
    }
}

/// Messages emitted by the toast widgets.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(usize),
}

/// Queue of live notifications, pruned by the tick subscription.
#[derive(Debug, Default)]
pub struct Manager {
    items: Vec<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.push(notification);
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.items.is_empty()
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Drops expired notifications. Called from the periodic tick.
    pub fn tick(&mut self) {
        self.items.retain(|n| !n.is_expired());
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(index) => {
                if index < self.items.len() {
                    self.items.remove(index);
                }
            }
        }
    }

    /// Renders the toast stack, anchored bottom-right.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut stack = Column::new().spacing(spacing::SM);
        for (index, notification) in self.items.iter().enumerate() {
            let label = Text::new(i18n.tr(&notification.key)).size(typography::BODY);
            let dismiss = button(Text::new("×").size(typography::BODY))
                .on_press(Message::Dismiss(index))
                .padding(spacing::XS);
            let row = Row::new()
                .push(label)
                .push(dismiss)
                .spacing(spacing::SM)
                .align_y(Alignment::Center);
            stack = stack.push(
                container(row)
                    .padding(spacing::SM)
                    .style(toast_style(notification.severity)),
            );
        }

        container(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::End)
            .align_y(Alignment::End)
            .padding(spacing::MD)
            .into()
    }
}

fn toast_style(severity: Severity) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let accent = match severity {
            Severity::Info => palette::GRAY_700,
            Severity::Warning => palette::GOLD_500,
        };
        container::Style {
            background: Some(Background::Color(palette::SLATE_900)),
            text_color: Some(palette::WHITE),
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..container::Style::default()
        }
    }
}
