//! Pure Rust text banner rasterizer using tiny-skia and cosmic-text.
//!
//! Renders a block of text onto a solid or gradient background and encodes
//! the result as PNG. It uses:
//! - `tiny-skia` for the pixel buffer, circles and glyph paths
//! - `cosmic-text` for shaping and glyph outlines
//! - `fontdb` for system font lookup
//! - `embedded-graphics` for the built-in fallback font
//!
//! # Example
//!
//! ```rust,ignore
//! use banner_raster::{FontConfig, ImageSpec, Renderer};
//!
//! let renderer = Renderer::new(FontConfig::default());
//! let spec = ImageSpec::with_text("Hello world");
//! let png_data = renderer.render_png(&spec)?;
//! ```

mod canvas;
mod color;
mod compositor;
mod error;
pub mod font;
mod gradient;
mod image_spec;
mod layout;
mod render;
mod wrap;

// Re-export public API
pub use canvas::Canvas;
pub use color::Rgb;
pub use compositor::{draw, Shadow};
pub use error::{BannerError, BannerResult};
pub use font::{
    BuiltinFont, FixedAdvanceFont, Font, FontConfig, FontProvider, FontSourceKind, TextExtent,
    TextMeasure, TextPainter,
};
pub use gradient::{linear, radial, solid, synthesize, Background, BackgroundKind};
pub use image_spec::ImageSpec;
pub use layout::{measure_block, place, GlyphLine, LinePlacement, TextAlign, TextBlock};
pub use render::{render_with_font, Renderer};
pub use wrap::{split_literal, wrap, TextDirection};
