//! Owned pixel buffer the pipeline paints into.

use crate::color::Rgb;
use crate::error::{BannerError, BannerResult};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Transform};

/// Maximum canvas dimension (same as Chrome).
const MAX_DIMENSION: u32 = 32767;

/// Mutable RGBA raster sized to the output image.
pub struct Canvas {
    /// Width of the canvas in pixels.
    width: u32,
    /// Height of the canvas in pixels.
    height: u32,
    /// Pixel buffer (premultiplied RGBA).
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a transparent canvas with the specified dimensions.
    pub fn new(width: u32, height: u32) -> BannerResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(BannerError::DegenerateGeometry(format!(
                "canvas must be between 1x1 and {MAX_DIMENSION}x{MAX_DIMENSION}, got {width}x{height}"
            )));
        }
        let pixmap = Pixmap::new(width, height).ok_or_else(|| {
            BannerError::DegenerateGeometry(format!("cannot allocate {width}x{height} canvas"))
        })?;
        Ok(Self {
            width,
            height,
            pixmap,
        })
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the whole canvas with one color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixmap.fill(color.into());
    }

    /// Fill a single row with one color. Rows outside the canvas are ignored.
    pub fn fill_row(&mut self, y: u32, color: Rgb) {
        if y >= self.height {
            return;
        }
        let px: PremultipliedColorU8 = color.into();
        let start = (y * self.width) as usize;
        let end = start + self.width as usize;
        self.pixmap.pixels_mut()[start..end].fill(px);
    }

    /// Fill an axis-aligned rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let px: PremultipliedColorU8 = color.into();
        let stride = self.width as i64;
        let pixels = self.pixmap.pixels_mut();
        for row in y0..y1 {
            pixels[(row * stride + x0) as usize..(row * stride + x1) as usize].fill(px);
        }
    }

    /// Fill a circle of `radius` centered on the pixel corner `(cx, cy)`.
    ///
    /// The fill is not anti-aliased so concentric fills produce flat rings.
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgb) {
        let Some(path) = PathBuilder::from_circle(cx as f32, cy as f32, radius as f32) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color.into());
        paint.anti_alias = false;
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Fill a vector path in the given color with anti-aliasing.
    pub(crate) fn fill_path(&mut self, path: &tiny_skia::Path, transform: Transform, color: Rgb) {
        let mut paint = Paint::default();
        paint.set_color(color.into());
        paint.anti_alias = true;
        self.pixmap
            .fill_path(path, &paint, FillRule::Winding, transform, None);
    }

    /// Overwrite one pixel. Coordinates outside the canvas are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let idx = (y as u32 * self.width + x as u32) as usize;
        self.pixmap.pixels_mut()[idx] = color.into();
    }

    /// Read one pixel as straight RGB, ignoring alpha.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Rgb::new(c.red(), c.green(), c.blue()))
    }

    /// Get the canvas contents as straight-alpha RGBA bytes.
    pub fn get_image_data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity((self.width * self.height * 4) as usize);
        for px in self.pixmap.pixels() {
            let c = px.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        data
    }

    /// Export canvas to PNG data.
    pub fn to_png(&self) -> BannerResult<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;

            // Convert from premultiplied to straight alpha for PNG
            let data = self.get_image_data();
            writer.write_image_data(&data)?;
        }
        log::debug!(target: "banner", "encoded {}x{} png ({} bytes)", self.width, self.height, buf.len());
        Ok(buf)
    }

    /// Get a reference to the underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}
