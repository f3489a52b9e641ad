//! Banner request model.

use crate::color::Rgb;
use crate::compositor::Shadow;
use crate::gradient::{Background, BackgroundKind};
use crate::layout::TextAlign;
use crate::wrap::TextDirection;
use serde::{Deserialize, Serialize};

/// Everything needed to render one banner.
///
/// Field names follow the JSON request format; missing fields take the
/// values of [`ImageSpec::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
    /// May contain explicit `\n` line breaks.
    pub text: String,
    pub wrap_text: bool,
    /// One stop for solid backgrounds, two or more for gradients.
    pub bg_color: Vec<Rgb>,
    /// Only the first color is used.
    pub fg_color: Vec<Rgb>,
    pub background_type: BackgroundKind,
    pub text_shadow: bool,
    pub text_direction: TextDirection,
    pub text_align: TextAlign,
    /// Font file path or family name.
    pub font: String,
    pub font_size: u32,
    pub shadow_color: Rgb,
    pub shadow_offset: (i32, i32),
    /// Extra pixels between consecutive lines.
    pub line_spacing: i32,
    /// Horizontal margin kept free on each side when wrapping.
    pub padding: u32,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            text: String::new(),
            wrap_text: true,
            bg_color: vec![Rgb::new(0x22, 0x22, 0x22)],
            fg_color: vec![Rgb::WHITE],
            background_type: BackgroundKind::Solid,
            text_shadow: false,
            text_direction: TextDirection::LeftToRight,
            text_align: TextAlign::Center,
            font: "arial.ttf".to_string(),
            font_size: 40,
            shadow_color: Rgb::BLACK,
            shadow_offset: (2, 2),
            line_spacing: 10,
            padding: 20,
        }
    }
}

impl ImageSpec {
    /// Default banner showing `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn background(&self) -> Background {
        Background {
            kind: self.background_type,
            stops: self.bg_color.clone(),
        }
    }

    /// Text color, white when no foreground color was given.
    pub fn foreground(&self) -> Rgb {
        self.fg_color.first().copied().unwrap_or(Rgb::WHITE)
    }

    pub fn shadow(&self) -> Option<Shadow> {
        self.text_shadow.then_some(Shadow {
            color: self.shadow_color,
            offset: self.shadow_offset,
        })
    }

    /// Maximum line width when wrapping. Can be zero or negative for narrow
    /// canvases, which the wrapper rejects. Saturates at the `i32` range.
    pub fn wrap_width(&self) -> i32 {
        let width = self.width as i64 - 2 * self.padding as i64;
        width.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }
}
