//! Draws placed lines onto the background, shadow first.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::font::TextPainter;
use crate::layout::{LinePlacement, TextBlock};

/// Drop shadow drawn under every line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadow {
    pub color: Rgb,
    /// Pixel offset `(dx, dy)` from the foreground position.
    pub offset: (i32, i32),
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: Rgb::BLACK,
            offset: (2, 2),
        }
    }
}

/// Draw every line of `block` at its placement.
///
/// For each line the shadow (if any) is drawn before the foreground, so the
/// foreground wins wherever the two overlap. Ink outside the canvas is
/// clipped, and shadow offsets saturate at the `i32` range.
pub fn draw<P: TextPainter + ?Sized>(
    canvas: &mut Canvas,
    block: &TextBlock,
    placements: &[LinePlacement],
    font: &mut P,
    foreground: Rgb,
    shadow: Option<&Shadow>,
) {
    for (line, at) in block.lines.iter().zip(placements) {
        if let Some(shadow) = shadow {
            let (dx, dy) = shadow.offset;
            let (sx, sy) = (at.x.saturating_add(dx), at.y.saturating_add(dy));
            font.draw_text(canvas, &line.text, sx, sy, shadow.color);
        }
        font.draw_text(canvas, &line.text, at.x, at.y, foreground);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FixedAdvanceFont;
    use crate::layout::{measure_block, place, TextAlign};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };

    fn setup(text: &str) -> (Canvas, TextBlock, Vec<LinePlacement>, FixedAdvanceFont) {
        let mut font = FixedAdvanceFont::new(10, 10);
        let mut canvas = Canvas::new(40, 30).unwrap();
        canvas.fill(Rgb::BLACK);
        let block = measure_block(vec![text.to_string()], &mut font, 0).unwrap();
        let placements = place(40, 30, &block, TextAlign::Center).unwrap();
        (canvas, block, placements, font)
    }

    #[test]
    fn test_foreground_only() {
        let (mut canvas, block, placements, mut font) = setup("ab");
        assert_eq!(placements[0], LinePlacement { x: 10, y: 10 });
        draw(&mut canvas, &block, &placements, &mut font, Rgb::WHITE, None);
        assert_eq!(canvas.pixel(10, 10), Some(Rgb::WHITE));
        assert_eq!(canvas.pixel(29, 19), Some(Rgb::WHITE));
        assert_eq!(canvas.pixel(30, 20), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(9, 9), Some(Rgb::BLACK));
    }

    #[test]
    fn test_shadow_under_foreground() {
        let (mut canvas, block, placements, mut font) = setup("ab");
        let shadow = Shadow {
            color: RED,
            offset: (2, 2),
        };
        draw(&mut canvas, &block, &placements, &mut font, Rgb::WHITE, Some(&shadow));
        // overlap keeps the foreground
        assert_eq!(canvas.pixel(15, 15), Some(Rgb::WHITE));
        // shadow peeks out to the lower right
        assert_eq!(canvas.pixel(31, 21), Some(RED));
        assert_eq!(canvas.pixel(12, 21), Some(RED));
        // and nowhere above or left of the text
        assert_eq!(canvas.pixel(9, 11), Some(Rgb::BLACK));
    }

    #[test]
    fn test_negative_offset_and_clipping() {
        let (mut canvas, block, placements, mut font) = setup("abcdef");
        // 60px wide on a 40px canvas: starts at x = -10
        assert_eq!(placements[0].x, -10);
        let shadow = Shadow {
            color: RED,
            offset: (-3, -3),
        };
        draw(&mut canvas, &block, &placements, &mut font, Rgb::WHITE, Some(&shadow));
        assert_eq!(canvas.pixel(0, 7), Some(RED));
        assert_eq!(canvas.pixel(0, 10), Some(Rgb::WHITE));
        assert_eq!(canvas.pixel(39, 19), Some(Rgb::WHITE));
    }

    #[test]
    fn test_extreme_shadow_offset_is_clipped() {
        let (mut canvas, block, placements, mut font) = setup("ab");
        let shadow = Shadow {
            color: RED,
            offset: (i32::MAX, i32::MIN),
        };
        draw(&mut canvas, &block, &placements, &mut font, Rgb::WHITE, Some(&shadow));
        assert_eq!(canvas.pixel(10, 10), Some(Rgb::WHITE));
        assert_eq!(canvas.pixel(31, 21), Some(Rgb::BLACK));
    }

    #[test]
    fn test_shadow_default() {
        let shadow = Shadow::default();
        assert_eq!(shadow.color, Rgb::BLACK);
        assert_eq!(shadow.offset, (2, 2));
    }
}
