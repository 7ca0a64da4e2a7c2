// SPDX-License-Identifier: MPL-2.0
//! Toast kinds and their style markers.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::fmt;

/// The kind of a toast determines its icon, accent color and whether it
/// carries an undo button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastKind {
    #[default]
    Information,
    Warning,
    Success,
    /// Offers an "UNDO" action. Requires an undo handler on the container.
    Undo,
}

impl ToastKind {
    /// Every kind, in declaration order.
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Information,
        ToastKind::Warning,
        ToastKind::Success,
        ToastKind::Undo,
    ];

    /// Style marker applied to cards of this kind.
    #[must_use]
    pub fn style_class(self) -> &'static str {
        match self {
            ToastKind::Information => "toast-information",
            ToastKind::Warning => "toast-warning",
            ToastKind::Success => "toast-success",
            ToastKind::Undo => "toast-undo",
        }
    }

    /// Accent color used by the default stylesheet.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastKind::Information => palette::INFO_500,
            ToastKind::Warning => palette::WARNING_500,
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Undo => palette::UNDO_500,
        }
    }

    /// Position of this kind in [`ToastKind::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            ToastKind::Information => 0,
            ToastKind::Warning => 1,
            ToastKind::Success => 2,
            ToastKind::Undo => 3,
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ToastKind::Information => "information",
            ToastKind::Warning => "warning",
            ToastKind::Success => "success",
            ToastKind::Undo => "undo",
        };
        f.write_str(name)
    }
}
