use super::{TextExtent, TextMeasure, TextPainter};
use crate::canvas::Canvas;
use crate::color::Rgb;

/// Every character is an `advance` x `height` cell; non-whitespace cells are
/// drawn as solid blocks. A `\n` starts a new row of cells below.
///
/// Needs no font files, which makes layout results exact and predictable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAdvanceFont {
    pub advance: u32,
    pub height: u32,
}

impl FixedAdvanceFont {
    pub fn new(advance: u32, height: u32) -> Self {
        Self { advance, height }
    }
}

impl TextMeasure for FixedAdvanceFont {
    fn measure(&mut self, text: &str) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let widest = text
            .split('\n')
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0);
        let rows = text.split('\n').count();
        TextExtent {
            width: u32::try_from(widest)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.advance),
            height: u32::try_from(rows)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.height),
        }
    }
}

impl TextPainter for FixedAdvanceFont {
    fn draw_text(&mut self, canvas: &mut Canvas, text: &str, x: i32, y: i32, color: Rgb) {
        for (row, line) in text.split('\n').enumerate() {
            let cell_y = offset(y, row, self.height);
            for (i, ch) in line.chars().enumerate() {
                if !ch.is_whitespace() {
                    let cell_x = offset(x, i, self.advance);
                    canvas.fill_rect(cell_x, cell_y, self.advance, self.height, color);
                }
            }
        }
    }
}

/// `start + index * step`, saturating at the `i32` range.
fn offset(start: i32, index: usize, step: u32) -> i32 {
    let delta = (index as i64).saturating_mul(step as i64);
    (start as i64)
        .saturating_add(delta)
        .clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
