use crate::config::{CrosshairConfig, OverlayConfig};
use crate::platform::Platform;
use crate::{Color, CrosshairImage, DrawGeometry, Point, Rect, Result, Stroke};

use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Something to put on the surface, in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Geometry {
        geometry: DrawGeometry,
        stroke: Stroke,
    },
    Texture {
        image: CrosshairImage,
        region: Rect,
    },
}

/// Window state change the tick asks for.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Transition {
    Show,
    Hide,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClickThrough {
    /// The native window hasn't been found yet.
    Pending,
    Applied,
    /// The platform call failed or isn't available; only the toolkit's
    /// input passthrough hint is in effect.
    Unavailable,
}

struct OverlayImpl {
    title: String,
    bounds: Rect,
    crosshair: CrosshairConfig,
    desired_visible: bool,
    applied_visible: bool,
    click_through: ClickThrough,
    lookups_left: u32,
    needs_redraw: bool,
}

impl OverlayImpl {
    fn touch(&mut self) {
        self.needs_redraw = true;
    }

    fn surface(&self) -> Rect {
        Rect::from(0.0, 0.0).sized(self.bounds.width(), self.bounds.height())
    }

    fn render(&self) -> Vec<Drawable> {
        if !self.desired_visible {
            return vec![];
        }
        let surface = self.surface();
        let center = surface.center();

        if let Some(image) = &self.crosshair.custom_image {
            let region = Rect::centered_at(center, image.width() as f32, image.height() as f32);
            return vec![Drawable::Texture {
                image: image.clone(),
                region,
            }];
        }

        let size = self.crosshair.size as f32;
        let left = center + Point::new(-size, 0.0);
        let right = center + Point::new(size, 0.0);
        let top = center + Point::new(0.0, -size);
        let below = center + Point::new(0.0, size);
        let geometry = DrawGeometry::new()
            .line_segment(&left, &right)
            .line_segment(&top, &below);
        let stroke = Stroke {
            color: self.crosshair.color,
            width: self.crosshair.thickness as f32,
        };
        vec![Drawable::Geometry { geometry, stroke }]
    }

    fn tick(&mut self) -> Option<Transition> {
        if self.desired_visible == self.applied_visible {
            return None;
        }
        self.applied_visible = self.desired_visible;
        Some(if self.applied_visible {
            Transition::Show
        } else {
            Transition::Hide
        })
    }
}

/// Handle to the overlay surface; clones refer to the same overlay.
#[derive(Clone)]
pub struct Overlay {
    overlay: Arc<Mutex<OverlayImpl>>,
}

impl Overlay {
    /// Create an overlay spanning the desktop as reported by `platform`.
    pub fn new(config: &OverlayConfig, platform: &dyn Platform) -> Self {
        let bounds = match platform.desktop_bounds() {
            Ok(Some(bounds)) => bounds,
            Ok(None) => config.fallback_bounds,
            Err(e) => {
                warn!("could not query desktop bounds, using fallback: {e}");
                config.fallback_bounds
            }
        };
        Self::with_bounds(config, bounds)
    }

    /// Create an overlay covering `bounds`, which are fixed from here on.
    pub fn with_bounds(config: &OverlayConfig, bounds: Rect) -> Self {
        info!("overlay bounds: {bounds:?}");
        Self {
            overlay: Arc::new(Mutex::new(OverlayImpl {
                title: config.title.clone(),
                bounds,
                crosshair: CrosshairConfig::default(),
                desired_visible: false,
                applied_visible: false,
                click_through: ClickThrough::Pending,
                lookups_left: config.click_through_attempts,
                needs_redraw: true,
            })),
        }
    }

    pub fn set_size(&self, size: u32) {
        let mut overlay = self.overlay.lock();
        overlay.crosshair.size = size;
        overlay.touch();
    }

    pub fn set_thickness(&self, thickness: u32) {
        let mut overlay = self.overlay.lock();
        overlay.crosshair.thickness = thickness;
        overlay.touch();
    }

    pub fn set_color(&self, color: Color) {
        let mut overlay = self.overlay.lock();
        overlay.crosshair.color = color;
        overlay.touch();
    }

    /// Decode `path` and draw it instead of the lines.
    ///
    /// On failure the current crosshair is kept and the error returned.
    pub fn load_custom_image<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let image = CrosshairImage::load(path.as_ref())?;
        info!("custom crosshair loaded from {}", path.as_ref().display());
        self.set_custom_image(image);
        Ok(())
    }

    pub fn set_custom_image(&self, image: CrosshairImage) {
        let mut overlay = self.overlay.lock();
        overlay.crosshair.custom_image = Some(image);
        overlay.touch();
    }

    /// Default size, thickness and color; drops the custom image.
    pub fn reset_to_default(&self) {
        debug!("crosshair reset to default");
        let mut overlay = self.overlay.lock();
        overlay.crosshair = CrosshairConfig::default();
        overlay.touch();
    }

    /// Request the overlay be shown or hidden; applied on the next [`Overlay::tick`].
    pub fn set_visible(&self, visible: bool) {
        debug!("overlay visibility requested: {visible}");
        self.overlay.lock().desired_visible = visible;
    }

    /// The requested visibility.
    pub fn is_visible(&self) -> bool {
        self.overlay.lock().desired_visible
    }

    /// Whether the window is currently shown, as of the last tick.
    pub fn is_shown(&self) -> bool {
        self.overlay.lock().applied_visible
    }

    pub fn crosshair(&self) -> CrosshairConfig {
        self.overlay.lock().crosshair.clone()
    }

    pub fn title(&self) -> String {
        self.overlay.lock().title.clone()
    }

    /// Desktop rectangle the window is placed on.
    pub fn bounds(&self) -> Rect {
        self.overlay.lock().bounds
    }

    /// The drawing area, with its origin at the window's top left.
    pub fn surface(&self) -> Rect {
        self.overlay.lock().surface()
    }

    /// Drawables for a repaint; empty while the overlay is not visible.
    pub fn render(&self) -> Vec<Drawable> {
        let mut overlay = self.overlay.lock();
        overlay.needs_redraw = false;
        overlay.render()
    }

    /// True if the configuration changed since the last [`Overlay::render`].
    pub fn needs_redraw(&self) -> bool {
        self.overlay.lock().needs_redraw
    }

    /// Reconcile the requested visibility with the window state.
    pub fn tick(&self) -> Option<Transition> {
        let transition = self.overlay.lock().tick();
        if let Some(t) = transition {
            debug!("overlay window transition: {t:?}");
        }
        transition
    }

    pub fn click_through(&self) -> ClickThrough {
        self.overlay.lock().click_through
    }

    /// Find the native window and make it ignore pointer input.
    ///
    /// Does nothing once applied or given up on. Stays pending while the
    /// window can't be found, so it can be retried on the next tick, until
    /// `OverlayConfig::click_through_attempts` lookups have come up empty.
    pub fn apply_click_through(&self, platform: &dyn Platform) -> ClickThrough {
        let (state, title) = {
            let mut overlay = self.overlay.lock();
            if overlay.click_through == ClickThrough::Pending && overlay.lookups_left == 0 {
                overlay.click_through = ClickThrough::Unavailable;
            }
            (overlay.click_through, overlay.title.clone())
        };
        if state != ClickThrough::Pending {
            return state;
        }
        let state = match platform.find_window(&title) {
            Ok(None) => {
                let mut overlay = self.overlay.lock();
                overlay.lookups_left = overlay.lookups_left.saturating_sub(1);
                if overlay.lookups_left > 0 {
                    ClickThrough::Pending
                } else {
                    warn!("overlay window {title:?} never appeared, giving up on click-through");
                    ClickThrough::Unavailable
                }
            }
            Ok(Some(handle)) => match platform.make_click_through(handle) {
                Ok(()) => {
                    info!("overlay window {handle:?} is click-through");
                    ClickThrough::Applied
                }
                Err(e) => {
                    warn!("failed to make overlay click-through: {e}");
                    ClickThrough::Unavailable
                }
            },
            Err(e) => {
                warn!("failed to find overlay window: {e}");
                ClickThrough::Unavailable
            }
        };
        self.overlay.lock().click_through = state;
        state
    }
}
