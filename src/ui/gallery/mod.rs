// SPDX-License-Identifier: MPL-2.0
//! Gallery renderer: one interactive card per project record.
//!
//! The gallery is stateless; it maps the injected catalog slice to cards in
//! collection order and emits an open message when a card is activated.
//! The whole card is clickable through a `mouse_area`, and an explicit
//! button is kept for small-viewport layouts without hover affordances;
//! both emit the same message, which the idempotent open operation makes
//! harmless.

use crate::catalog::ProjectRecord;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::image::Image;
use iced::widget::{button, container, mouse_area, scrollable, Column, Row, Text};
use iced::{Alignment, Element, Length};

/// Cards per grid row.
const CARDS_PER_ROW: usize = 3;
/// Character budget for the card description before truncation.
const DESCRIPTION_MAX_CHARS: usize = 90;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub projects: &'a [ProjectRecord],
    pub thumbnails: &'a media::Cache,
    pub is_dark: bool,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    /// A card (or its explicit button) was activated.
    Open(ProjectRecord),
}

/// Render the gallery: heading, then the card grid or the empty state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let heading = Column::new()
        .push(Text::new(ctx.i18n.tr("gallery-title")).size(typography::HEADING))
        .push(
            Text::new(ctx.i18n.tr("gallery-subtitle"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .spacing(spacing::SM)
        .align_x(Alignment::Center);

    let body: Element<'_, Message> = if ctx.projects.is_empty() {
        container(
            Text::new(ctx.i18n.tr("gallery-empty"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(spacing::LG)
        .into()
    } else {
        grid(&ctx)
    };

    let content = Column::new()
        .push(container(heading).width(Length::Fill).center_x(Length::Fill))
        .push(body)
        .spacing(spacing::LG)
        .padding(spacing::LG);

    scrollable(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::LG).align_x(Alignment::Center);
    for chunk in ctx.projects.chunks(CARDS_PER_ROW) {
        let mut row = Row::new().spacing(spacing::LG);
        for record in chunk {
            row = row.push(card(ctx, record));
        }
        rows = rows.push(row);
    }

    container(rows)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn card<'a>(ctx: &ViewContext<'a>, record: &'a ProjectRecord) -> Element<'a, Message> {
    let name = Text::new(record.name.as_str()).size(typography::TITLE);
    let description = Text::new(record.short_description(DESCRIPTION_MAX_CHARS))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let open_button = button(
        Row::new()
            .push(icons::sized(icons::eye(), sizing::ICON_SM))
            .push(Text::new(ctx.i18n.tr("card-open-demo")).size(typography::BODY))
            .spacing(spacing::SM)
            .align_y(Alignment::Center),
    )
    .on_press(Message::Open(record.clone()))
    .style(styles::primary_button)
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill);

    let mut details = Column::new()
        .push(name)
        .push(description)
        .spacing(spacing::SM);
    if !record.tags.is_empty() {
        details = details.push(tag_row(&record.tags));
    }
    details = details.push(open_button);

    let body = Column::new()
        .push(thumbnail(ctx, record))
        .push(container(details).padding(spacing::MD));

    let surface = container(body)
        .width(sizing::CARD_WIDTH)
        .style(styles::card(ctx.is_dark));

    mouse_area(surface)
        .on_press(Message::Open(record.clone()))
        .interaction(iced::mouse::Interaction::Pointer)
        .into()
}

fn thumbnail<'a>(ctx: &ViewContext<'a>, record: &'a ProjectRecord) -> Element<'a, Message> {
    match ctx.thumbnails.peek(&record.image) {
        Some(image) => Image::new(image.handle.clone())
            .width(Length::Fill)
            .height(sizing::CARD_IMAGE_HEIGHT)
            .into(),
        // Still loading or failed: a quiet placeholder, never an error.
        None => container(icons::sized(icons::eye(), sizing::ICON_SM))
            .width(Length::Fill)
            .height(sizing::CARD_IMAGE_HEIGHT)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::thumbnail_placeholder)
            .into(),
    }
}

fn tag_row(tags: &[String]) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for tag in tags {
        row = row.push(
            container(Text::new(tag.as_str()).size(typography::CAPTION))
                .padding([spacing::XS, spacing::SM])
                .style(styles::tag_pill),
        );
    }
    row.into()
}
