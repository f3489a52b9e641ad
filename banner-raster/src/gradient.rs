//! Background synthesis: solid fills and the two gradient styles.

use crate::canvas::Canvas;
use crate::color::Rgb;
use crate::error::{BannerError, BannerResult};
use serde::{Deserialize, Serialize};

/// Type of background fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundKind {
    /// Flat fill with the first color stop.
    #[default]
    Solid,
    /// Top-to-bottom blend between the first two stops.
    #[serde(alias = "gradient-linear")]
    LinearGradient,
    /// Concentric blend, first stop at the rim and second at the center.
    #[serde(alias = "gradient-radial")]
    RadialGradient,
}

/// Background descriptor: fill type plus ordered color stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    pub kind: BackgroundKind,
    pub stops: Vec<Rgb>,
}

impl Background {
    pub fn solid(color: Rgb) -> Self {
        Self {
            kind: BackgroundKind::Solid,
            stops: vec![color],
        }
    }

    pub fn linear(top: Rgb, bottom: Rgb) -> Self {
        Self {
            kind: BackgroundKind::LinearGradient,
            stops: vec![top, bottom],
        }
    }

    pub fn radial(rim: Rgb, center: Rgb) -> Self {
        Self {
            kind: BackgroundKind::RadialGradient,
            stops: vec![rim, center],
        }
    }
}

/// Build a new canvas painted with `background`.
///
/// Solid backgrounds, and gradients with fewer than two stops, are a flat
/// fill with the first stop. Stops beyond the second are ignored.
pub fn synthesize(width: u32, height: u32, background: &Background) -> BannerResult<Canvas> {
    let first = *background.stops.first().ok_or(BannerError::MissingColorStop)?;
    let mut canvas = Canvas::new(width, height)?;
    match (background.kind, background.stops.get(1)) {
        (BackgroundKind::LinearGradient, Some(&second)) => fill_linear(&mut canvas, first, second),
        (BackgroundKind::RadialGradient, Some(&second)) => fill_radial(&mut canvas, first, second),
        (kind, _) => {
            if kind != BackgroundKind::Solid {
                log::debug!(target: "banner", "{kind:?} with a single stop, using flat fill");
            }
            canvas.fill(first);
        }
    }
    Ok(canvas)
}

/// Flat fill.
pub fn solid(width: u32, height: u32, color: Rgb) -> BannerResult<Canvas> {
    synthesize(width, height, &Background::solid(color))
}

/// Row-wise linear gradient from `top` toward `bottom`.
pub fn linear(width: u32, height: u32, top: Rgb, bottom: Rgb) -> BannerResult<Canvas> {
    synthesize(width, height, &Background::linear(top, bottom))
}

/// Radial gradient with `rim` at the outer edge and `center` at the core.
pub fn radial(width: u32, height: u32, rim: Rgb, center: Rgb) -> BannerResult<Canvas> {
    synthesize(width, height, &Background::radial(rim, center))
}

/// Each row takes `lerp(top, bottom, y / height)`; there is no horizontal
/// variation and the last row stops short of `bottom`.
fn fill_linear(canvas: &mut Canvas, top: Rgb, bottom: Rgb) {
    let height = canvas.height();
    for y in 0..height {
        let ratio = y as f64 / height as f64;
        canvas.fill_row(y, Rgb::lerp(top, bottom, ratio));
    }
}

/// Painter's algorithm: circles from `max_radius` down to 1, each smaller
/// circle overwriting the previous one.
fn fill_radial(canvas: &mut Canvas, rim: Rgb, center: Rgb) {
    let cx = canvas.width() / 2;
    let cy = canvas.height() / 2;
    let max_radius = cx.max(cy);
    // Corners outside the largest circle keep the rim color.
    canvas.fill(rim);
    for i in (1..=max_radius).rev() {
        let ratio = i as f64 / max_radius as f64;
        canvas.fill_circle(cx as i32, cy as i32, i, Rgb::lerp(center, rim, ratio));
    }
}
