use crate::{CrosshairImage, Drawable, Point, Rect};
use eframe::egui;

impl From<Point> for egui::Pos2 {
    fn from(p: Point) -> Self {
        egui::pos2(p.x, p.y)
    }
}

impl From<Rect> for egui::Rect {
    fn from(r: Rect) -> Self {
        egui::Rect::from_min_max(r.min.into(), r.max.into())
    }
}

/// Replays [`Drawable`]s onto an egui painter.
#[derive(Default)]
pub struct SurfacePainter {
    // Only one image is on screen at a time.
    texture: Option<(u64, egui::TextureHandle)>,
}

impl SurfacePainter {
    pub fn new() -> Self {
        Default::default()
    }

    fn texture_for(&mut self, ctx: &egui::Context, image: &CrosshairImage) -> egui::TextureId {
        match &self.texture {
            Some((id, handle)) if *id == image.id() => handle.id(),
            _ => {
                let size = [image.width() as usize, image.height() as usize];
                let handle = ctx.load_texture(
                    format!("crosshair-{}", image.id()),
                    egui::ColorImage::from_rgba_unmultiplied(size, image.rgba()),
                    egui::TextureOptions::LINEAR,
                );
                let id = handle.id();
                self.texture = Some((image.id(), handle));
                id
            }
        }
    }

    pub fn paint(&mut self, ctx: &egui::Context, painter: &egui::Painter, drawables: &[Drawable]) {
        for drawable in drawables {
            match drawable {
                Drawable::Geometry { geometry, stroke } => {
                    let stroke = egui::Stroke::new(stroke.width, stroke.color);
                    for line in geometry.polylines() {
                        let points: Vec<egui::Pos2> = line.into_iter().map(Into::into).collect();
                        painter.add(egui::Shape::line(points, stroke));
                    }
                }
                Drawable::Texture { image, region } => {
                    let texture = self.texture_for(ctx, image);
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(texture, (*region).into(), uv, egui::Color32::WHITE);
                }
            }
        }
    }
}
