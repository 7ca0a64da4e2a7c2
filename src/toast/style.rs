// SPDX-License-Identifier: MPL-2.0
//! Styling of the toast cards.
//!
//! Every card element is tagged with a [`StyleClass`]. A [`Stylesheet`]
//! turns a class into an Iced style, so a theme layer can color each kind
//! differently without touching the container.

use super::kind::ToastKind;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{button, container, text};
use iced::{Background, Color, Theme};

/// Style markers applied to the parts of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    Card(ToastKind),
    Title,
    Description,
    CloseButton,
    UndoButton,
}

impl StyleClass {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StyleClass::Card(kind) => kind.style_class(),
            StyleClass::Title => "toast-title",
            StyleClass::Description => "toast-description",
            StyleClass::CloseButton => "toast-close-button",
            StyleClass::UndoButton => "toast-undo-button",
        }
    }
}

/// Maps the style markers of a card to Iced styles.
pub trait Stylesheet {
    fn card(&self, theme: &Theme, kind: ToastKind) -> container::Style;

    fn title(&self, theme: &Theme, kind: ToastKind) -> text::Style;

    fn description(&self, theme: &Theme, kind: ToastKind) -> text::Style;

    fn close_button(&self, theme: &Theme, kind: ToastKind, status: button::Status)
        -> button::Style;

    fn undo_button(&self, theme: &Theme, kind: ToastKind, status: button::Status)
        -> button::Style;
}

/// Stylesheet derived from the design tokens: a background card with a
/// border in the accent color of the kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultStylesheet;

impl Stylesheet for DefaultStylesheet {
    fn card(&self, theme: &Theme, kind: ToastKind) -> container::Style {
        let bg_color = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(bg_color)),
            border: iced::Border {
                color: kind.color(),
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            text_color: Some(theme.palette().text),
            ..Default::default()
        }
    }

    fn title(&self, theme: &Theme, _kind: ToastKind) -> text::Style {
        text::Style {
            color: Some(theme.palette().text),
        }
    }

    fn description(&self, theme: &Theme, _kind: ToastKind) -> text::Style {
        let base = theme.palette().text;
        text::Style {
            color: Some(Color { a: 0.8, ..base }),
        }
    }

    fn close_button(
        &self,
        theme: &Theme,
        _kind: ToastKind,
        status: button::Status,
    ) -> button::Style {
        let base = theme.extended_palette().background.base;

        let hover = |alpha: f32| button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        };

        match status {
            button::Status::Active => button::Style {
                background: None,
                text_color: base.text,
                border: iced::Border::default(),
                shadow: shadow::NONE,
                snap: true,
            },
            button::Status::Hovered => hover(opacity::OVERLAY_SUBTLE),
            button::Status::Pressed => hover(opacity::OVERLAY_MEDIUM),
            button::Status::Disabled => button::Style {
                background: None,
                text_color: Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..base.text
                },
                border: iced::Border::default(),
                shadow: shadow::NONE,
                snap: true,
            },
        }
    }

    fn undo_button(&self, _theme: &Theme, kind: ToastKind, status: button::Status) -> button::Style {
        let accent = kind.color();
        let fill = match status {
            button::Status::Active | button::Status::Disabled => opacity::TRANSPARENT,
            button::Status::Hovered => opacity::OVERLAY_SUBTLE,
            button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color { a: fill, ..accent })),
            text_color: accent,
            border: iced::Border {
                color: accent,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

fn fade_color(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn fade_background(background: Option<Background>, alpha: f32) -> Option<Background> {
    match background {
        Some(Background::Color(color)) => Some(Background::Color(fade_color(color, alpha))),
        other => other,
    }
}

/// Scales every color of a card style by `alpha`.
pub(crate) fn fade_container(style: container::Style, alpha: f32) -> container::Style {
    container::Style {
        background: fade_background(style.background, alpha),
        text_color: style.text_color.map(|c| fade_color(c, alpha)),
        border: iced::Border {
            color: fade_color(style.border.color, alpha),
            ..style.border
        },
        shadow: iced::Shadow {
            color: fade_color(style.shadow.color, alpha),
            ..style.shadow
        },
        ..style
    }
}

pub(crate) fn fade_text(style: text::Style, alpha: f32) -> text::Style {
    text::Style {
        color: style.color.map(|c| fade_color(c, alpha)),
    }
}

pub(crate) fn fade_button(style: button::Style, alpha: f32) -> button::Style {
    button::Style {
        background: fade_background(style.background, alpha),
        text_color: fade_color(style.text_color, alpha),
        border: iced::Border {
            color: fade_color(style.border.color, alpha),
            ..style.border
        },
        shadow: iced::Shadow {
            color: fade_color(style.shadow.color, alpha),
            ..style.shadow
        },
        ..style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn card_style_uses_accent_color() {
        let theme = Theme::Dark;
        for kind in ToastKind::ALL {
            let style = DefaultStylesheet.card(&theme, kind);
            assert_eq!(style.border.color, kind.color());
            assert!(style.background.is_some());
        }
    }

    #[test]
    fn class_names_match_markers() {
        assert_eq!(StyleClass::Card(ToastKind::Undo).name(), "toast-undo");
        assert_eq!(StyleClass::Title.name(), "toast-title");
        assert_eq!(StyleClass::Description.name(), "toast-description");
        assert_eq!(StyleClass::CloseButton.name(), "toast-close-button");
        assert_eq!(StyleClass::UndoButton.name(), "toast-undo-button");
    }

    #[test]
    fn fade_container_scales_alpha() {
        let style = DefaultStylesheet.card(&Theme::Light, ToastKind::Warning);
        let border_alpha = style.border.color.a;
        let faded = fade_container(style, 0.5);

        assert_abs_diff_eq!(faded.border.color.a, border_alpha * 0.5);
        match faded.background {
            Some(Background::Color(color)) => assert_abs_diff_eq!(color.a, 0.5),
            _ => panic!("expected color background"),
        }
    }

    #[test]
    fn fully_faded_button_is_invisible() {
        let style =
            DefaultStylesheet.undo_button(&Theme::Dark, ToastKind::Undo, button::Status::Pressed);
        let faded = fade_button(style, 0.0);
        assert_abs_diff_eq!(faded.text_color.a, 0.0);
        assert_abs_diff_eq!(faded.border.color.a, 0.0);
    }

    #[test]
    fn close_button_hover_has_background() {
        let style = DefaultStylesheet.close_button(
            &Theme::Dark,
            ToastKind::Information,
            button::Status::Hovered,
        );
        assert!(style.background.is_some());
    }
}
