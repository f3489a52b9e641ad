//! Integration tests for banner-raster.

use banner_raster::font::DEFAULT_PLATFORM_FONT;
use banner_raster::{
    render_with_font, BackgroundKind, BannerError, FixedAdvanceFont, FontConfig, FontSourceKind,
    ImageSpec, Renderer, Rgb, TextAlign, TextDirection, TextMeasure,
};
use std::path::Path;

macro_rules! skip_if_no_platform_font {
    () => {
        if !Path::new(DEFAULT_PLATFORM_FONT).is_file() {
            eprintln!("Skipping test: {} not installed", DEFAULT_PLATFORM_FONT);
            return;
        }
    };
}

fn decode(png_data: &[u8]) -> image::RgbaImage {
    image::load_from_memory_with_format(png_data, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8()
}

/// Bounding box of every pixel that differs from `background`.
fn ink_bounds(img: &image::RgbaImage, background: [u8; 3]) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if px.0[..3] != background {
            bounds = Some(match bounds {
                None => (x, y, x, y),
                Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
            });
        }
    }
    bounds
}

#[test]
fn test_render_png_with_builtin_font() {
    let renderer = Renderer::new(FontConfig::builtin_only());
    let spec = ImageSpec::with_text("Hello world");
    let png_data = renderer.render_png(&spec).unwrap();

    let img = decode(&png_data);
    assert_eq!(img.dimensions(), (600, 400));
    // Corners keep the background, fully opaque
    assert_eq!(img.get_pixel(0, 0).0, [0x22, 0x22, 0x22, 255]);
    assert_eq!(img.get_pixel(599, 399).0, [0x22, 0x22, 0x22, 255]);

    // 11 cells of 10x20: block box is 110x20 at (245, 190)
    let (x0, y0, x1, y1) = ink_bounds(&img, [0x22, 0x22, 0x22]).unwrap();
    assert!(x0 >= 245 && x1 < 355, "ink x range {x0}..{x1}");
    assert!(y0 >= 190 && y1 < 210, "ink y range {y0}..{y1}");
}

#[test]
fn test_long_word_is_not_broken() {
    let mut font = FixedAdvanceFont::new(10, 20);
    let word = "A".repeat(56);
    let spec = ImageSpec {
        width: 240,
        padding: 20,
        ..ImageSpec::with_text(word.clone())
    };
    let lines = banner_raster::wrap(&spec.text, &mut font, spec.wrap_width(), spec.text_direction)
        .unwrap();
    assert_eq!(lines, vec![word]);

    // The overflowing line is still centered and clipped on both sides
    let canvas = render_with_font(&spec, &mut font).unwrap();
    assert_eq!(canvas.pixel(0, 200), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(239, 200), Some(Rgb::WHITE));
}

#[test]
fn test_linear_gradient_rows() {
    let renderer = Renderer::new(FontConfig::builtin_only());
    let spec = ImageSpec {
        width: 50,
        height: 100,
        background_type: BackgroundKind::LinearGradient,
        bg_color: vec![Rgb::BLACK, Rgb::WHITE],
        ..ImageSpec::with_text("")
    };
    let img = decode(&renderer.render_png(&spec).unwrap());
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    let last = img.get_pixel(49, 99).0;
    assert!(last[0] > 240 && last[0] < 255, "last row {last:?}");
    // no horizontal variation
    assert_eq!(img.get_pixel(0, 37), img.get_pixel(49, 37));
}

#[test]
fn test_radial_gradient_center_and_rim() {
    let renderer = Renderer::new(FontConfig::builtin_only());
    let red = Rgb::new(255, 0, 0);
    let blue = Rgb::new(0, 0, 255);
    let spec = ImageSpec {
        width: 100,
        height: 100,
        background_type: BackgroundKind::RadialGradient,
        bg_color: vec![red, blue],
        ..ImageSpec::with_text("")
    };
    let canvas = renderer.render(&spec).unwrap();
    let center = canvas.pixel(50, 50).unwrap();
    assert!(center.b > 240 && center.r < 15, "center {center:?}");
    assert_eq!(canvas.pixel(0, 0), Some(red));
    assert_eq!(canvas.pixel(50, 0), Some(red));
}

#[test]
fn test_rtl_reverses_word_order_only() {
    let mut font = FixedAdvanceFont::new(10, 20);
    let lines = banner_raster::wrap(
        "one two three",
        &mut font,
        560,
        TextDirection::RightToLeft,
    )
    .unwrap();
    assert_eq!(lines, vec!["three two one"]);
}

#[test]
fn test_rtl_request_with_line_break() {
    let renderer = Renderer::new(FontConfig::builtin_only());
    let spec: ImageSpec = serde_json::from_str(
        r##"{
            "width": 600,
            "height": 400,
            "text": "\u0633\u0644\u0627\u0645\nHello world!",
            "wrap_text": true,
            "bg_color": ["#222222"],
            "fg_color": ["#ffffff"],
            "text_direction": "rtl"
        }"##,
    )
    .unwrap();

    let mut font = renderer.fonts().load(&spec.font, spec.font_size);
    let lines =
        banner_raster::wrap(&spec.text, &mut font, spec.wrap_width(), spec.text_direction).unwrap();
    assert_eq!(lines, vec!["world! \u{633}\u{644}\u{627}\u{645}\nHello"]);

    // Both rows of the single wrapped line land inside its 110x40 box
    let img = decode(&renderer.render_png(&spec).unwrap());
    let (x0, y0, x1, y1) = ink_bounds(&img, [0x22, 0x22, 0x22]).unwrap();
    assert!(x0 >= 245 && x1 < 355, "ink x range {x0}..{x1}");
    assert!(y0 >= 180 && y0 < 200, "ink starts at {y0}");
    assert!(y1 >= 200 && y1 < 220, "ink ends at {y1}");
}

#[test]
fn test_line_break_inside_wrapped_line() {
    let mut font = FixedAdvanceFont::new(10, 20);
    let spec = ImageSpec {
        width: 200,
        height: 200,
        padding: 0,
        text_align: TextAlign::Left,
        ..ImageSpec::with_text("ab\ncd ef")
    };
    let canvas = render_with_font(&spec, &mut font).unwrap();
    // one wrapped line with rows "ab" and "cd ef": 50x40 at (75, 80)
    assert_eq!(canvas.pixel(75, 80), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(95, 80), Some(Rgb::new(0x22, 0x22, 0x22)));
    assert_eq!(canvas.pixel(75, 100), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(124, 100), Some(Rgb::WHITE));
    assert_eq!(canvas.pixel(75, 79), Some(Rgb::new(0x22, 0x22, 0x22)));
}

#[test]
fn test_invalid_color_in_request() {
    let err = serde_json::from_str::<ImageSpec>(r##"{"text": "x", "bg_color": ["#12345"]}"##)
        .unwrap_err();
    assert!(err.to_string().contains("#12345"));
    assert!(matches!(
        Rgb::parse("#12345"),
        Err(BannerError::InvalidColorFormat(_))
    ));
}

#[test]
fn test_renderer_is_shareable_across_threads() {
    let renderer = std::sync::Arc::new(Renderer::new(FontConfig::builtin_only()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let renderer = std::sync::Arc::clone(&renderer);
            std::thread::spawn(move || {
                let spec = ImageSpec {
                    width: 100 + i,
                    height: 50,
                    ..ImageSpec::with_text("hi")
                };
                renderer.render(&spec).unwrap().width()
            })
        })
        .collect();
    let widths: Vec<u32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(widths, vec![100, 101, 102, 103]);
    assert_eq!(renderer.fonts().load_with_source("arial.ttf", 40).1, FontSourceKind::Builtin);
}

#[test]
fn test_outline_text_stays_inside_measured_box() {
    skip_if_no_platform_font!();
    let config = FontConfig {
        load_system_fonts: false,
        ..FontConfig::default()
    };
    let renderer = Renderer::new(config);
    let spec = ImageSpec::with_text("Hello world");

    let mut font = renderer.fonts().load(&spec.font, spec.font_size);
    let extent = font.measure("Hello world");
    assert!(extent.width > 100 && extent.height > 20);

    let img = decode(&renderer.render_png(&spec).unwrap());
    let (x0, y0, x1, y1) = ink_bounds(&img, [0x22, 0x22, 0x22]).unwrap();
    let origin_x = (600 - extent.width as i32).div_euclid(2) as u32;
    let origin_y = (400 - extent.height as i32).div_euclid(2) as u32;
    // anti-aliasing may leave the outermost pixels untouched, never outside
    assert!(x0 >= origin_x && x1 < origin_x + extent.width, "x {x0}..{x1}");
    assert!(y0 >= origin_y && y1 < origin_y + extent.height, "y {y0}..{y1}");
    assert!(x0 <= origin_x + 1 && y0 <= origin_y + 1);
}
