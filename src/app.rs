use crate::overlay::ClickThrough;
use crate::painter::SurfacePainter;
use crate::settings::{self, NativeFileDialog, SettingsPanel};
use crate::{Overlay, OverlayConfig, Platform, Transition};

use eframe::egui;
use tracing::info;

/// Settings panel in the root window, overlay in a second viewport.
pub struct CrosshairApp {
    config: OverlayConfig,
    overlay: Overlay,
    panel: SettingsPanel,
    platform: Box<dyn Platform>,
    painter: SurfacePainter,
    viewport: egui::ViewportId,
}

impl CrosshairApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: OverlayConfig,
        overlay: Overlay,
        platform: Box<dyn Platform>,
    ) -> Self {
        settings::apply_style(&cc.egui_ctx);
        let panel = SettingsPanel::new(overlay.clone(), Box::new(NativeFileDialog));
        Self::from_parts(config, overlay, platform, panel)
    }

    /// Assemble the app around an existing panel, without a creation context.
    pub fn from_parts(
        config: OverlayConfig,
        overlay: Overlay,
        platform: Box<dyn Platform>,
        panel: SettingsPanel,
    ) -> Self {
        let viewport = egui::ViewportId::from_hash_of(&config.title);
        info!("overlay viewport {viewport:?} covers {:?}", overlay.bounds());
        Self {
            config,
            overlay,
            panel,
            platform,
            painter: SurfacePainter::new(),
            viewport,
        }
    }

    fn overlay_viewport(&self) -> egui::ViewportBuilder {
        let bounds = self.overlay.bounds();
        egui::ViewportBuilder::default()
            .with_title(self.overlay.title())
            .with_position([bounds.min.x, bounds.min.y])
            .with_inner_size([bounds.width(), bounds.height()])
            .with_decorations(false)
            .with_transparent(true)
            .with_always_on_top()
            .with_mouse_passthrough(true)
            .with_taskbar(!self.config.hide_from_taskbar)
            .with_visible(self.overlay.is_shown())
    }

    /// One reconciliation step: retries click-through while it is pending and
    /// returns the commands for the overlay viewport.
    pub fn tick_commands(&mut self) -> Vec<egui::ViewportCommand> {
        let mut commands = vec![];
        if let Some(transition) = self.overlay.tick() {
            let visible = transition == Transition::Show;
            commands.push(egui::ViewportCommand::Visible(visible));
        }
        if self.overlay.click_through() == ClickThrough::Pending {
            self.overlay.apply_click_through(self.platform.as_ref());
        }
        commands
    }

    fn tick(&mut self, ctx: &egui::Context) {
        for command in self.tick_commands() {
            ctx.send_viewport_cmd_to(self.viewport, command);
        }
    }
}

impl eframe::App for CrosshairApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0, 0.0, 0.0, 0.0]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(ctx);
        self.panel.ui(ctx);

        if self.overlay.needs_redraw() {
            ctx.request_repaint_of(self.viewport);
        }

        let builder = self.overlay_viewport();
        let overlay = self.overlay.clone();
        let painter = &mut self.painter;
        ctx.show_viewport_immediate(self.viewport, builder, |ctx, _class| {
            egui::CentralPanel::default()
                .frame(egui::Frame::none())
                .show(ctx, |ui| {
                    let drawables = overlay.render();
                    painter.paint(ctx, ui.painter(), &drawables);
                });
        });

        ctx.request_repaint_after(self.config.tick_interval);
    }
}
