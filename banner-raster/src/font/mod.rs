//! Font metrics provider.
//!
//! Layout and wrapping only ever talk to [`TextMeasure`]; the compositor only
//! to [`TextPainter`]. Concrete backends:
//! - [`OutlineFont`]: a TrueType/OpenType face shaped with cosmic-text and
//!   rasterized as tiny-skia paths
//! - [`BuiltinFont`]: the embedded-graphics 10x20 bitmap font, always available
//! - [`FixedAdvanceFont`]: fixed-size cells, no font files involved

mod builtin;
mod config;
mod fixed;
mod outline;
mod provider;

use crate::canvas::Canvas;
use crate::color::Rgb;

pub use builtin::BuiltinFont;
pub use config::{FontConfig, DEFAULT_PLATFORM_FONT};
pub use fixed::FixedAdvanceFont;
pub use outline::OutlineFont;
pub use provider::{FontProvider, FontSourceKind};

/// Pixel size of the ink box a string occupies when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Measures single-line strings.
pub trait TextMeasure {
    /// Tight box of `text` as it will be drawn by the same backend.
    fn measure(&mut self, text: &str) -> TextExtent;
}

/// Draws single-line strings.
///
/// Drawing `text` at `(x, y)` must cover exactly the box
/// `(x, y, measure(text).width, measure(text).height)`.
pub trait TextPainter: TextMeasure {
    fn draw_text(&mut self, canvas: &mut Canvas, text: &str, x: i32, y: i32, color: Rgb);
}

/// A loaded font, whichever backend it ended up on.
pub enum Font {
    Outline(OutlineFont),
    Builtin(BuiltinFont),
}

impl Font {
    /// Family name of the face in use (`"builtin"` for the bitmap font).
    pub fn family(&self) -> &str {
        match self {
            Font::Outline(font) => font.family(),
            Font::Builtin(_) => "builtin",
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Font::Builtin(_))
    }
}

impl TextMeasure for Font {
    fn measure(&mut self, text: &str) -> TextExtent {
        match self {
            Font::Outline(font) => font.measure(text),
            Font::Builtin(font) => font.measure(text),
        }
    }
}

impl TextPainter for Font {
    fn draw_text(&mut self, canvas: &mut Canvas, text: &str, x: i32, y: i32, color: Rgb) {
        match self {
            Font::Outline(font) => font.draw_text(canvas, text, x, y, color),
            Font::Builtin(font) => font.draw_text(canvas, text, x, y, color),
        }
    }
}
