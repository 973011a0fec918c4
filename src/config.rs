use crate::{Color, CrosshairImage, Rect};
use std::ops::RangeInclusive;
use std::time::Duration;

pub const DEFAULT_SIZE: u32 = 15;
pub const DEFAULT_THICKNESS: u32 = 2;
pub const DEFAULT_COLOR: Color = Color::RED;

/// Slider ranges; the overlay itself does not enforce them.
pub const SIZE_RANGE: RangeInclusive<u32> = 5..=100;
pub const THICKNESS_RANGE: RangeInclusive<u32> = 1..=10;
pub const FOV_RANGE: RangeInclusive<u32> = 60..=120;
pub const DEFAULT_FOV: u32 = 90;

/// What the overlay draws.
#[derive(Debug, Clone, PartialEq)]
pub struct CrosshairConfig {
    /// Half length of each line, in pixels.
    pub size: u32,
    /// Stroke width, in pixels.
    pub thickness: u32,
    pub color: Color,
    /// Drawn instead of the lines while present.
    pub custom_image: Option<CrosshairImage>,
}

impl Default for CrosshairConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            thickness: DEFAULT_THICKNESS,
            color: DEFAULT_COLOR,
            custom_image: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Window title, also used to find the native window again.
    pub title: String,
    /// Period of the visibility reconciliation tick.
    pub tick_interval: Duration,
    /// Used when the platform can't report the desktop size.
    pub fallback_bounds: Rect,
    /// Ask the toolkit to keep the window off the task bar.
    pub hide_from_taskbar: bool,
    /// Ticks spent looking for the native window before click-through is
    /// given up on.
    pub click_through_attempts: u32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            title: "Crosshair Overlay".to_owned(),
            tick_interval: Duration::from_millis(16),
            fallback_bounds: Rect::from(0.0, 0.0).sized(1920.0, 1080.0),
            hide_from_taskbar: true,
            click_through_attempts: 120,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PanelConfig {
    pub title: String,
    pub position: [f32; 2],
    pub size: [f32; 2],
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title: "Crosshair Settings".to_owned(),
            position: [100.0, 100.0],
            size: [400.0, 450.0],
        }
    }
}
