#![allow(dead_code)]

use crosshair_overlay::{Drawable, Overlay, OverlayConfig, Point, Rect, Stroke};
use std::path::PathBuf;

pub const SCREEN_WIDTH: f32 = 1920.0;
pub const SCREEN_HEIGHT: f32 = 1080.0;

pub fn overlay() -> Overlay {
    Overlay::with_bounds(
        &OverlayConfig::default(),
        Rect::from(0.0, 0.0).sized(SCREEN_WIDTH, SCREEN_HEIGHT),
    )
}

pub fn screen_center() -> Point {
    Point::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// Write a solid `width` x `height` PNG to the temp directory.
pub fn png_fixture(name: &str, width: u32, height: u32) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "crosshair-overlay-{}-{name}.png",
        std::process::id()
    ));
    image::RgbaImage::from_pixel(width, height, image::Rgba([0, 255, 0, 255]))
        .save(&path)
        .expect("failed to write fixture");
    path
}

/// A file that exists but isn't an image.
pub fn garbage_fixture(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "crosshair-overlay-{}-{name}.png",
        std::process::id()
    ));
    std::fs::write(&path, b"definitely not a png").expect("failed to write fixture");
    path
}

/// The segments and stroke of a procedural crosshair render.
pub fn lines(drawables: &[Drawable]) -> (Vec<(Point, Point)>, Stroke) {
    match drawables {
        [Drawable::Geometry { geometry, stroke }] => (geometry.segments(), *stroke),
        other => panic!("expected crosshair lines, got {other:?}"),
    }
}

pub fn half_length(segment: &(Point, Point)) -> f32 {
    let (a, b) = segment;
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt() / 2.0
}

pub fn midpoint(segment: &(Point, Point)) -> Point {
    let (a, b) = segment;
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
