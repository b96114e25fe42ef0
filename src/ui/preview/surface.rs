// SPDX-License-Identifier: MPL-2.0
//! The sandboxed embedded surface shown inside the preview modal.
//!
//! [`DemoFrame`] is the isolated rendering context for a project's live
//! demo: it is parameterized by the demo reference and title only, and
//! carries an explicit [`SandboxPermissions`] grant. The demo content
//! itself stays opaque; this module owns the frame chrome, the permission
//! set, and the lazily loaded snapshot of the demo surface.

use super::{Message, Surface};
use crate::catalog::ProjectRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::image::Image;
use iced::widget::{button, container, Column, Row, Space, Text};
use iced::{Alignment, Element, Length};

/// Capability grant for the embedded demo context.
///
/// The default demo grant is the minimum a typical interactive demo needs:
/// same-origin access, script execution, popups, and form submission.
/// Top-level navigation is never granted, keeping the host's navigation and
/// history isolated from the embedded content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SandboxPermissions {
    pub same_origin: bool,
    pub scripts: bool,
    pub popups: bool,
    pub forms: bool,
    pub top_navigation: bool,
}

impl SandboxPermissions {
    /// The grant used for portfolio demos.
    #[must_use]
    pub const fn demo() -> Self {
        Self {
            same_origin: true,
            scripts: true,
            popups: true,
            forms: true,
            top_navigation: false,
        }
    }

    /// Serializes the grant in embed-attribute form, one `allow-*` token
    /// per granted capability.
    #[must_use]
    pub fn attribute_value(&self) -> String {
        let mut tokens = Vec::new();
        if self.same_origin {
            tokens.push("allow-same-origin");
        }
        if self.scripts {
            tokens.push("allow-scripts");
        }
        if self.popups {
            tokens.push("allow-popups");
        }
        if self.forms {
            tokens.push("allow-forms");
        }
        if self.top_navigation {
            tokens.push("allow-top-navigation");
        }
        tokens.join(" ")
    }
}

impl Default for SandboxPermissions {
    fn default() -> Self {
        Self::demo()
    }
}

/// The preview modal's embedded context: header bar plus demo surface.
#[derive(Debug)]
pub struct DemoFrame<'a> {
    record: &'a ProjectRecord,
    surface: &'a Surface,
    permissions: SandboxPermissions,
}

impl<'a> DemoFrame<'a> {
    #[must_use]
    pub fn new(record: &'a ProjectRecord, surface: &'a Surface) -> Self {
        Self {
            record,
            surface,
            permissions: SandboxPermissions::demo(),
        }
    }

    #[must_use]
    pub fn record(&self) -> &'a ProjectRecord {
        self.record
    }

    #[must_use]
    pub fn permissions(&self) -> &SandboxPermissions {
        &self.permissions
    }

    /// Renders the modal frame: sticky header bar with the project name, a
    /// static "live demo" label and the close affordance, above the demo
    /// surface. Consumes the frame; one is built per render.
    pub fn view(self, i18n: &'a I18n) -> Element<'a, Message> {
        let header = self.view_header(i18n);
        let content = self.view_surface(i18n);

        let frame = Column::new()
            .push(header)
            .push(content)
            .width(sizing::PREVIEW_WIDTH)
            .height(sizing::PREVIEW_HEIGHT);

        container(frame).style(styles::modal).into()
    }

    fn view_header(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(self.record.name.as_str()).size(typography::TITLE);
        let live_label = Text::new(i18n.tr("preview-live-label"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400);
        let close = button(icons::sized(icons::close(), sizing::ICON_SM))
            .on_press(Message::Close)
            .style(styles::header_icon_button)
            .padding(spacing::XS);

        let bar = Row::new()
            .push(title)
            .push(live_label)
            .push(Space::new().width(Length::Fill))
            .push(close)
            .spacing(spacing::SM)
            .align_y(Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .padding([spacing::SM, spacing::MD])
            .style(styles::modal_header)
            .into()
    }

    fn view_surface(&self, i18n: &'a I18n) -> Element<'a, Message> {
        let body: Element<'a, Message> = match self.surface {
            Surface::Loading => Text::new(i18n.tr("preview-loading"))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into(),
            Surface::Ready(snapshot) => Image::new(snapshot.handle.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            Surface::Unavailable => Text::new(i18n.tr("preview-unavailable"))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into(),
        };

        let reference = Text::new(self.record.demo_url.as_str())
            .size(typography::CAPTION)
            .color(palette::GRAY_400);

        let surface = Column::new()
            .push(
                container(body)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            )
            .push(
                container(reference)
                    .width(Length::Fill)
                    .align_x(Alignment::Center)
                    .padding(spacing::XS),
            );

        container(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: 1,
            name: "Trattoria Bella".into(),
            description: "Restaurant site".into(),
            image: "https://example.com/1.jpg".into(),
            tags: vec!["Restaurant".into()],
            demo_url: "https://demo.example.com/trattoria".into(),
        }
    }

    #[test]
    fn demo_grant_is_the_minimal_set() {
        let permissions = SandboxPermissions::demo();
        assert!(permissions.same_origin);
        assert!(permissions.scripts);
        assert!(permissions.popups);
        assert!(permissions.forms);
        assert!(!permissions.top_navigation);
    }

    #[test]
    fn attribute_value_lists_granted_capabilities_in_order() {
        assert_eq!(
            SandboxPermissions::demo().attribute_value(),
            "allow-same-origin allow-scripts allow-popups allow-forms"
        );
    }

    #[test]
    fn attribute_value_omits_revoked_capabilities() {
        let permissions = SandboxPermissions {
            popups: false,
            ..SandboxPermissions::demo()
        };
        assert_eq!(
            permissions.attribute_value(),
            "allow-same-origin allow-scripts allow-forms"
        );
    }

    #[test]
    fn frame_carries_the_demo_grant_by_default() {
        let record = record();
        let surface = Surface::Loading;
        let frame = DemoFrame::new(&record, &surface);
        assert_eq!(frame.permissions(), &SandboxPermissions::demo());
        assert_eq!(frame.record().id, 1);
    }

    #[test]
    fn view_builds_from_borrowed_state() {
        use crate::config::Config;
        use crate::i18n::fluent::I18n;

        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let record = record();

        // The element must borrow the record and surface, not require them
        // to live forever.
        for surface in [Surface::Loading, Surface::Unavailable] {
            let frame = DemoFrame::new(&record, &surface);
            let _element: iced::Element<'_, Message> = frame.view(&i18n);
        }
    }
}
