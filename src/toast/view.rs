// SPDX-License-Identifier: MPL-2.0
//! Rendering of the toast cards.
//!
//! Layout of a card:
//!
//! ```text
//! +------------------------------------------+
//! | [icon]  Title                        [x] |
//! |         Description                      |
//! |         [UNDO]            (undo only)    |
//! +------------------------------------------+
//! ```

use super::card::Toast;
use super::container::ToastContainer;
use super::kind::ToastKind;
use super::style::{fade_button, fade_container, fade_text, Stylesheet};
use super::Message;
use crate::config::DEFAULT_TOAST_SPACING;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

impl<M> ToastContainer<M> {
    /// Renders the displayed toasts as a vertical stack.
    pub fn view(&self) -> Element<'_, Message> {
        let cards = self.toasts().iter().map(|toast| self.card(toast));

        Column::with_children(cards)
            .spacing(DEFAULT_TOAST_SPACING)
            .align_x(alignment::Horizontal::Right)
            .into()
    }

    fn card<'a>(&'a self, toast: &'a Toast) -> Element<'a, Message> {
        let sheet: &'a dyn Stylesheet = self.stylesheet();
        let kind = toast.kind();
        let id = toast.id();
        let alpha = toast.opacity_at(self.now());

        let icon = Container::new(self.icons().icon(kind).view(sizing::ICON_LG, alpha))
            .padding(spacing::XXS)
            .height(Length::Fill)
            .align_y(alignment::Vertical::Center);

        let title = Text::new(toast.title())
            .size(typography::TITLE_SM)
            .style(move |theme: &Theme| fade_text(sheet.title(theme, kind), alpha));

        let description = Text::new(toast.description())
            .size(typography::BODY)
            .style(move |theme: &Theme| fade_text(sheet.description(theme, kind), alpha));

        let mut body = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(title)
            .push(description);

        if kind == ToastKind::Undo {
            let undo = button(Text::new(self.undo_label()).size(typography::CAPTION))
                .on_press(Message::Undo(id))
                .padding([spacing::XXS, spacing::XS])
                .style(move |theme: &Theme, status| {
                    fade_button(sheet.undo_button(theme, kind, status), alpha)
                });
            body = body.push(
                Container::new(undo)
                    .height(Length::Fill)
                    .align_y(alignment::Vertical::Bottom),
            );
        }

        let close_icon = self
            .icons()
            .close_icon(kind, self.neutral_close_button())
            .view(sizing::ICON_SM, alpha);
        let close = button(close_icon)
            .on_press(Message::Close(id))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| {
                fade_button(sheet.close_button(theme, kind, status), alpha)
            });

        let content = Row::new()
            .spacing(spacing::SM)
            .push(icon)
            .push(body)
            .push(close);

        Container::new(content)
            .width(Length::Fixed(self.toast_width()))
            .height(Length::Fixed(self.toast_height()))
            .padding(spacing::SM)
            .style(move |theme: &Theme| fade_container(sheet.card(theme, kind), alpha))
            .into()
    }
}
