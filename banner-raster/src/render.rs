//! The banner pipeline: background, wrapping, layout, then the draw pass.

use crate::canvas::Canvas;
use crate::compositor;
use crate::error::BannerResult;
use crate::font::{FontConfig, FontProvider, TextPainter};
use crate::gradient;
use crate::image_spec::ImageSpec;
use crate::layout;
use crate::wrap;

/// Renders [`ImageSpec`]s with fonts from one shared provider.
///
/// The provider only caches font bytes, so a `Renderer` can be shared across
/// threads and every call still gets its own font instance and canvas.
pub struct Renderer {
    fonts: FontProvider,
}

impl Renderer {
    pub fn new(config: FontConfig) -> Self {
        Self {
            fonts: config.resolve(),
        }
    }

    pub fn fonts(&self) -> &FontProvider {
        &self.fonts
    }

    /// Render `spec` into a new canvas.
    pub fn render(&self, spec: &ImageSpec) -> BannerResult<Canvas> {
        let mut font = self.fonts.load(&spec.font, spec.font_size);
        log::debug!(
            target: "banner",
            "rendering {}x{} banner with font {:?}",
            spec.width,
            spec.height,
            font.family()
        );
        render_with_font(spec, &mut font)
    }

    /// Render `spec` and encode it as PNG.
    pub fn render_png(&self, spec: &ImageSpec) -> BannerResult<Vec<u8>> {
        self.render(spec)?.to_png()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(FontConfig::default())
    }
}

/// Run the pipeline with an already loaded font.
pub fn render_with_font<P: TextPainter + ?Sized>(
    spec: &ImageSpec,
    font: &mut P,
) -> BannerResult<Canvas> {
    let mut canvas = gradient::synthesize(spec.width, spec.height, &spec.background())?;

    let lines = if spec.wrap_text {
        wrap::wrap(&spec.text, font, spec.wrap_width(), spec.text_direction)?
    } else {
        wrap::split_literal(&spec.text)
    };

    let block = layout::measure_block(lines, font, spec.line_spacing)?;
    let placements = layout::place(spec.width, spec.height, &block, spec.text_align)?;
    log::debug!(
        target: "banner",
        "text block {}x{} with {} lines",
        block.width,
        block.height,
        block.lines.len()
    );

    compositor::draw(
        &mut canvas,
        &block,
        &placements,
        font,
        spec.foreground(),
        spec.shadow().as_ref(),
    );
    Ok(canvas)
}
