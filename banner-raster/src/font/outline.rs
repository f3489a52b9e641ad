//! Outline fonts shaped with cosmic-text and drawn as tiny-skia paths.

use super::provider::{database_with, OutlineData};
use super::{TextExtent, TextMeasure, TextPainter};
use crate::canvas::Canvas;
use crate::color::Rgb;
use cosmic_text::{
    Attrs, Buffer, CacheKeyFlags, Command, Family, FontSystem, Metrics, Shaping, SwashCache,
};
use std::collections::HashMap;
use tiny_skia::{PathBuilder, Transform};

/// Union of glyph outline bounds, in line-local coordinates.
#[derive(Debug, Clone, Copy)]
struct InkBox {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl InkBox {
    fn union(self, rect: tiny_skia::Rect) -> Self {
        Self {
            left: self.left.min(rect.left()),
            top: self.top.min(rect.top()),
            right: self.right.max(rect.right()),
            bottom: self.bottom.max(rect.bottom()),
        }
    }
}

/// Glyph outlines of one shaped line, ready to be filled.
struct ShapedLine {
    glyphs: Vec<tiny_skia::Path>,
    ink: Option<InkBox>,
    advance: f32,
}

impl ShapedLine {
    fn extent(&self) -> TextExtent {
        match self.ink {
            Some(ink) => TextExtent {
                width: (ink.right - ink.left).ceil().max(0.0) as u32,
                height: (ink.bottom - ink.top).ceil().max(0.0) as u32,
            },
            // Blank text has an advance but no ink
            None => TextExtent {
                width: self.advance.ceil().max(0.0) as u32,
                height: 0,
            },
        }
    }
}

/// One font face at one pixel size.
///
/// Measurement and drawing share the same shaped outlines, so the measured
/// box is exactly the box the glyphs cover.
pub struct OutlineFont {
    font_system: FontSystem,
    swash_cache: SwashCache,
    family: String,
    size_px: f32,
    shaped: HashMap<String, ShapedLine>,
}

impl OutlineFont {
    pub(crate) fn new(data: &OutlineData, size_px: f32) -> Self {
        let font_system =
            FontSystem::new_with_locale_and_db("en".to_string(), database_with(&data.data));
        Self {
            font_system,
            swash_cache: SwashCache::new(),
            family: data.family.clone(),
            size_px: size_px.max(1.0),
            shaped: HashMap::new(),
        }
    }

    /// Family name of the loaded face.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Font size in pixels per em.
    pub fn size_px(&self) -> f32 {
        self.size_px
    }

    fn shaped(&mut self, text: &str) -> &ShapedLine {
        if !self.shaped.contains_key(text) {
            let line = shape_line(
                &mut self.font_system,
                &mut self.swash_cache,
                &self.family,
                self.size_px,
                text,
            );
            self.shaped.insert(text.to_string(), line);
        }
        &self.shaped[text]
    }
}

impl TextMeasure for OutlineFont {
    fn measure(&mut self, text: &str) -> TextExtent {
        self.shaped(text).extent()
    }
}

impl TextPainter for OutlineFont {
    fn draw_text(&mut self, canvas: &mut Canvas, text: &str, x: i32, y: i32, color: Rgb) {
        log::debug!(target: "banner", "draw_text {:?} at {} {}", text, x, y);
        let line = self.shaped(text);
        let Some(ink) = line.ink else {
            return;
        };
        // Move the ink box's top-left corner onto (x, y)
        let transform = Transform::from_translate(x as f32 - ink.left, y as f32 - ink.top);
        for path in &line.glyphs {
            canvas.fill_path(path, transform, color);
        }
    }
}

fn shape_line(
    font_system: &mut FontSystem,
    swash_cache: &mut SwashCache,
    family: &str,
    size_px: f32,
    text: &str,
) -> ShapedLine {
    let metrics = Metrics::new(size_px, size_px * 1.2);
    let mut buffer = Buffer::new(font_system, metrics);

    // Disable hinting so outlines are identical at every position
    let attrs = Attrs::new()
        .family(Family::Name(family))
        .cache_key_flags(CacheKeyFlags::DISABLE_HINTING);

    buffer.set_text(font_system, text, &attrs, Shaping::Advanced, None);
    buffer.shape_until_scroll(font_system, false);

    let mut glyphs = Vec::new();
    let mut ink: Option<InkBox> = None;
    let mut advance: f32 = 0.0;

    for run in buffer.layout_runs() {
        advance = advance.max(run.line_w);
        for glyph in run.glyphs.iter() {
            // Get the cache key for outline retrieval (physical() provides this)
            let physical_glyph = glyph.physical((0.0, 0.0), 1.0);

            let glyph_x = glyph.x + glyph.font_size * glyph.x_offset;
            let glyph_y = run.line_y + glyph.y - glyph.font_size * glyph.y_offset;

            let Some(commands) =
                swash_cache.get_outline_commands(font_system, physical_glyph.cache_key)
            else {
                continue;
            };

            // Font outlines have Y pointing up, screen has Y pointing down
            let mut path_builder = PathBuilder::new();
            for cmd in commands {
                match cmd {
                    Command::MoveTo(p) => path_builder.move_to(glyph_x + p.x, glyph_y - p.y),
                    Command::LineTo(p) => path_builder.line_to(glyph_x + p.x, glyph_y - p.y),
                    Command::QuadTo(ctrl, end) => path_builder.quad_to(
                        glyph_x + ctrl.x,
                        glyph_y - ctrl.y,
                        glyph_x + end.x,
                        glyph_y - end.y,
                    ),
                    Command::CurveTo(c1, c2, end) => path_builder.cubic_to(
                        glyph_x + c1.x,
                        glyph_y - c1.y,
                        glyph_x + c2.x,
                        glyph_y - c2.y,
                        glyph_x + end.x,
                        glyph_y - end.y,
                    ),
                    Command::Close => path_builder.close(),
                }
            }

            // Whitespace glyphs have no outline and produce no path
            if let Some(path) = path_builder.finish() {
                let bounds = path.bounds();
                ink = Some(match ink {
                    Some(ink) => ink.union(bounds),
                    None => InkBox {
                        left: bounds.left(),
                        top: bounds.top(),
                        right: bounds.right(),
                        bottom: bounds.bottom(),
                    },
                });
                glyphs.push(path);
            }
        }
    }

    ShapedLine {
        glyphs,
        ink,
        advance,
    }
}
