//! Block measurement and per-line placement.
//!
//! All lines are measured as one block that is centered on the canvas; the
//! alignment then only moves each line inside that block. Text direction has
//! no influence here.

use crate::error::{BannerError, BannerResult};
use crate::font::TextMeasure;
use serde::{Deserialize, Serialize};

/// Horizontal alignment of a line within the text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// A line of text with its measured box at the active font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphLine {
    pub text: String,
    pub width: u32,
    pub height: u32,
}

/// Top-left draw coordinate of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePlacement {
    pub x: i32,
    pub y: i32,
}

/// Measured lines plus the size of their combined box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub lines: Vec<GlyphLine>,
    /// Widest line.
    pub width: i32,
    /// Sum of line heights plus spacing between (not after) lines.
    pub height: i32,
    /// Extra pixels between consecutive lines.
    pub line_spacing: i32,
}

impl TextBlock {
    /// Top-left corner that centers the block on a canvas. May be negative
    /// when the block is larger than the canvas.
    pub fn origin(&self, canvas_width: u32, canvas_height: u32) -> (i32, i32) {
        let center = |canvas: u32, block: i32| {
            let v = (canvas as i64 - block as i64).div_euclid(2);
            v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
        };
        (
            center(canvas_width, self.width),
            center(canvas_height, self.height),
        )
    }
}

/// Measure every line and the block they form.
///
/// Fails with `DegenerateGeometry` when the block does not fit in `i32`
/// pixel coordinates.
pub fn measure_block<M: TextMeasure + ?Sized>(
    lines: Vec<String>,
    font: &mut M,
    line_spacing: i32,
) -> BannerResult<TextBlock> {
    let lines: Vec<GlyphLine> = lines
        .into_iter()
        .map(|text| {
            let extent = font.measure(&text);
            GlyphLine {
                text,
                width: extent.width,
                height: extent.height,
            }
        })
        .collect();

    let widest = lines.iter().map(|l| l.width).max().unwrap_or(0);
    let width = i32::try_from(widest).map_err(|_| {
        BannerError::DegenerateGeometry(format!("text block is {widest}px wide"))
    })?;
    let height = if lines.is_empty() {
        0
    } else {
        let total: i64 = lines
            .iter()
            .map(|l| l.height as i64 + line_spacing as i64)
            .sum::<i64>()
            - line_spacing as i64;
        i32::try_from(total).map_err(|_| {
            BannerError::DegenerateGeometry(format!(
                "text block is {total}px tall with {line_spacing}px line spacing"
            ))
        })?
    };

    Ok(TextBlock {
        lines,
        width,
        height,
        line_spacing,
    })
}

/// Resolve the draw position of every line, top to bottom.
///
/// Fails with `DegenerateGeometry` when a line would start outside the `i32`
/// coordinate range.
pub fn place(
    canvas_width: u32,
    canvas_height: u32,
    block: &TextBlock,
    align: TextAlign,
) -> BannerResult<Vec<LinePlacement>> {
    let (origin_x, origin_y) = block.origin(canvas_width, canvas_height);
    let mut y = origin_y as i64;
    let coordinate = |v: i64| {
        i32::try_from(v).map_err(|_| {
            BannerError::DegenerateGeometry(format!("line position {v} is out of range"))
        })
    };
    let mut placements = Vec::with_capacity(block.lines.len());
    for line in &block.lines {
        let slack = block.width as i64 - line.width as i64;
        let x = match align {
            TextAlign::Left => origin_x as i64,
            TextAlign::Right => origin_x as i64 + slack,
            TextAlign::Center => origin_x as i64 + slack / 2,
        };
        placements.push(LinePlacement {
            x: coordinate(x)?,
            y: coordinate(y)?,
        });
        y += line.height as i64 + block.line_spacing as i64;
    }
    Ok(placements)
}
