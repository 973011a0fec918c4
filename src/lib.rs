//! A click-through crosshair overlay and the settings panel that drives it.
//!
//! The overlay model ([`Overlay`]) is toolkit independent: it produces a list of
//! [`Drawable`]s on each repaint and reconciles the requested visibility with the
//! window state on a fixed tick. The [`app`] module wires it to eframe, and the
//! [`platform`] module hides the OS calls needed to make the window click-through.

pub mod app;
pub mod config;
pub mod logging;
pub mod overlay;
pub mod painter;
pub mod platform;
pub mod settings;
pub mod texture;

#[cfg(windows)]
mod windows;

#[cfg(target_os = "linux")]
mod linux;

pub use config::{CrosshairConfig, OverlayConfig, PanelConfig};
pub use overlay::{Drawable, Overlay, Transition};
pub use platform::{Platform, WindowHandle};
pub use settings::{FileDialog, SettingsPanel};
pub use texture::CrosshairImage;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The image at `path` could not be read or decoded.
    Decode {
        path: std::path::PathBuf,
        source: image::ImageError,
    },
    /// A native windowing call failed.
    Platform(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Decode { path, source } => {
                write!(f, "failed to load {}: {source}", path.display())
            }
            Error::Platform(msg) => write!(f, "platform error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode { source, .. } => Some(source),
            Error::Platform(_) => None,
        }
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Platform(msg.to_owned())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for eframe::egui::Color32 {
    fn from(c: Color) -> Self {
        eframe::egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
    }
}

impl From<eframe::egui::Color32> for Color {
    fn from(c: eframe::egui::Color32) -> Self {
        let [r, g, b, a] = c.to_srgba_unmultiplied();
        Color { r, g, b, a }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add<Point> for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub<Point> for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Start a rectangle at `x`, `y`; finish it with [`Rect::sized`].
    pub fn from(x: f32, y: f32) -> Self {
        let p = Point::new(x, y);
        Self { min: p, max: p }
    }

    pub fn sized(&self, width: f32, height: f32) -> Self {
        Self {
            min: self.min,
            max: self.min + Point::new(width, height),
        }
    }

    /// A `width` by `height` rectangle whose center is `center`.
    pub fn centered_at(center: Point, width: f32, height: f32) -> Self {
        Rect::from(center.x - width / 2.0, center.y - height / 2.0).sized(width, height)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GeometryElement {
    Start(Point),
    Line(Point),
    End,
}

/// Path description, built up figure by figure.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawGeometry {
    pub elements: Vec<GeometryElement>,
}

impl DrawGeometry {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn start(mut self, x: f32, y: f32) -> Self {
        self.elements.push(GeometryElement::Start(Point::new(x, y)));
        self
    }

    pub fn line(mut self, x: f32, y: f32) -> Self {
        self.elements.push(GeometryElement::Line(Point::new(x, y)));
        self
    }

    pub fn end(mut self) -> Self {
        self.elements.push(GeometryElement::End);
        self
    }

    pub fn line_segment(self, a: &Point, b: &Point) -> Self {
        self.start(a.x, a.y).line(b.x, b.y).end()
    }

    /// Flatten into polylines, one per figure.
    pub fn polylines(&self) -> Vec<Vec<Point>> {
        let mut figures = vec![];
        let mut current: Vec<Point> = vec![];
        for el in self.elements.iter() {
            match el {
                GeometryElement::Start(start) => {
                    if current.len() > 1 {
                        figures.push(std::mem::take(&mut current));
                    }
                    current = vec![*start];
                }
                GeometryElement::Line(p) => current.push(*p),
                GeometryElement::End => {
                    if current.len() > 1 {
                        figures.push(std::mem::take(&mut current));
                    }
                    current.clear();
                }
            }
        }
        if current.len() > 1 {
            figures.push(current);
        }
        figures
    }

    /// Straight segments making up the geometry.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.polylines()
            .iter()
            .flat_map(|l| l.windows(2).map(|w| (w[0], w[1])).collect::<Vec<_>>())
            .collect()
    }
}
