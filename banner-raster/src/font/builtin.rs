//! Built-in bitmap font, used when no outline font can be loaded.

use super::{TextExtent, TextMeasure, TextPainter};
use crate::canvas::Canvas;
use crate::color::Rgb;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use std::convert::Infallible;

const FONT: &MonoFont<'static> = &FONT_10X20;

/// Fixed 10x20 monospace font compiled into the binary.
///
/// Ignores the requested point size. Characters outside ASCII render as the
/// font's replacement glyph but still occupy one cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl TextMeasure for BuiltinFont {
    fn measure(&mut self, text: &str) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        // embedded-graphics starts a new row at every '\n'
        let width = text.split('\n').map(row_width).max().unwrap_or(0);
        let rows = u32::try_from(text.split('\n').count()).unwrap_or(u32::MAX);
        TextExtent {
            width,
            height: rows.saturating_mul(FONT.character_size.height),
        }
    }
}

fn row_width(row: &str) -> u32 {
    let cells = u32::try_from(row.chars().count()).unwrap_or(u32::MAX);
    if cells == 0 {
        return 0;
    }
    cells
        .saturating_mul(FONT.character_size.width)
        .saturating_add((cells - 1).saturating_mul(FONT.character_spacing))
}

impl TextPainter for BuiltinFont {
    fn draw_text(&mut self, canvas: &mut Canvas, text: &str, x: i32, y: i32, color: Rgb) {
        let extent = self.measure(text);
        let outside = x as i64 >= canvas.width() as i64
            || y as i64 >= canvas.height() as i64
            || x as i64 + extent.width as i64 <= 0
            || y as i64 + extent.height as i64 <= 0;
        if outside {
            return;
        }
        let style = MonoTextStyle::new(FONT, Rgb888::new(color.r, color.g, color.b));
        match Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
            .draw(&mut CanvasTarget(canvas))
        {
            Ok(_) => {}
            Err(never) => match never {},
        }
    }
}

/// embedded-graphics draw target writing straight into a [`Canvas`].
struct CanvasTarget<'a>(&'a mut Canvas);

impl OriginDimensions for CanvasTarget<'_> {
    fn size(&self) -> Size {
        Size::new(self.0.width(), self.0.height())
    }
}

impl DrawTarget for CanvasTarget<'_> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.0
                .put_pixel(point.x, point.y, Rgb::new(color.r(), color.g(), color.b()));
        }
        Ok(())
    }
}
