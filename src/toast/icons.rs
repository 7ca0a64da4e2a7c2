// SPDX-License-Identifier: MPL-2.0
//! Icons shown on the toast cards.
//!
//! Default icons are SVGs embedded at compile time from `assets/icons/` and
//! their handles are cached using `OnceLock`. Every icon can be replaced at
//! runtime with an SVG or raster [`Icon`].

use super::kind::ToastKind;
use super::Message;
use crate::error::{Error, Result};
use iced::widget::{image, svg, Image, Svg};
use iced::{Element, Length};
use resvg::usvg;
use std::sync::OnceLock;

/// Macro to define a default icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal) => {
        fn $name() -> svg::Handle {
            static HANDLE: OnceLock<svg::Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE
                .get_or_init(|| svg::Handle::from_memory(DATA))
                .clone()
        }
    };
}

define_icon!(information, "information.svg");
define_icon!(warning, "warning.svg");
define_icon!(success, "success.svg");
define_icon!(undo, "undo.svg");
define_icon!(close_information, "close_information.svg");
define_icon!(close_warning, "close_warning.svg");
define_icon!(close_success, "close_success.svg");
define_icon!(close_undo, "close_undo.svg");
define_icon!(close_neutral, "close_neutral.svg");

/// An icon image, either vector or raster.
#[derive(Debug, Clone)]
pub enum Icon {
    Svg(svg::Handle),
    Raster(image::Handle),
}

impl Icon {
    /// Parses SVG bytes, rejecting documents that do not render.
    pub fn svg_from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        usvg::Tree::from_data(&bytes, &usvg::Options::default())
            .map_err(|e| Error::InvalidArgument(format!("invalid SVG icon: {e}")))?;
        Ok(Icon::Svg(svg::Handle::from_memory(bytes)))
    }

    /// Decodes an encoded raster image (PNG) into an icon.
    pub fn raster_from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image_rs::load_from_memory(bytes)
            .map_err(|e| Error::InvalidArgument(format!("invalid raster icon: {e}")))?
            .into_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Icon::Raster(image::Handle::from_rgba(
            width,
            height,
            decoded.into_raw(),
        )))
    }

    /// Renders the icon as a square of `size` drawn with `opacity`.
    pub(crate) fn view<'a>(&self, size: f32, opacity: f32) -> Element<'a, Message> {
        match self {
            Icon::Svg(handle) => Svg::new(handle.clone())
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .opacity(opacity)
                .into(),
            Icon::Raster(handle) => Image::new(handle.clone())
                .width(Length::Fixed(size))
                .height(Length::Fixed(size))
                .opacity(opacity)
                .into(),
        }
    }
}

impl From<svg::Handle> for Icon {
    fn from(handle: svg::Handle) -> Self {
        Icon::Svg(handle)
    }
}

impl From<image::Handle> for Icon {
    fn from(handle: image::Handle) -> Self {
        Icon::Raster(handle)
    }
}

/// The icons used by a container: one type icon and one close icon per
/// kind, plus the neutral close icon.
#[derive(Debug, Clone)]
pub struct IconSet {
    kind: [Icon; 4],
    close: [Icon; 4],
    neutral_close: Icon,
}

impl Default for IconSet {
    fn default() -> Self {
        Self {
            kind: [
                Icon::Svg(information()),
                Icon::Svg(warning()),
                Icon::Svg(success()),
                Icon::Svg(undo()),
            ],
            close: [
                Icon::Svg(close_information()),
                Icon::Svg(close_warning()),
                Icon::Svg(close_success()),
                Icon::Svg(close_undo()),
            ],
            neutral_close: Icon::Svg(close_neutral()),
        }
    }
}

impl IconSet {
    #[must_use]
    pub fn icon(&self, kind: ToastKind) -> &Icon {
        &self.kind[kind.index()]
    }

    /// The close icon for `kind`, or the neutral one when `neutral` is set.
    #[must_use]
    pub fn close_icon(&self, kind: ToastKind, neutral: bool) -> &Icon {
        if neutral {
            &self.neutral_close
        } else {
            &self.close[kind.index()]
        }
    }

    pub fn set_icon(&mut self, kind: ToastKind, icon: Icon) {
        self.kind[kind.index()] = icon;
    }

    pub fn set_close_icon(&mut self, kind: ToastKind, icon: Icon) {
        self.close[kind.index()] = icon;
    }

    pub fn set_neutral_close_icon(&mut self, icon: Icon) {
        self.neutral_close = icon;
    }
}
