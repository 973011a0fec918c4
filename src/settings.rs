//! The settings panel.
//!
//! Each control changes one overlay property and its own label, nothing else.
//! The control handlers are plain methods so they can be driven without a
//! window; [`SettingsPanel::ui`] only lays the controls out and calls them.

use crate::config::{DEFAULT_FOV, FOV_RANGE, SIZE_RANGE, THICKNESS_RANGE};
use crate::{Color, Overlay};

use eframe::egui;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Source of image paths for the upload button.
pub trait FileDialog {
    /// Blocks until the user picks a file or cancels.
    fn pick_image(&self) -> Option<PathBuf>;
}

/// The system file picker.
#[derive(Debug, Default)]
pub struct NativeFileDialog;

impl FileDialog for NativeFileDialog {
    fn pick_image(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select Crosshair Image")
            .add_filter("Images", &["png", "xpm", "jpg", "jpeg"])
            .add_filter("All Files", &["*"])
            .pick_file()
    }
}

pub struct SettingsPanel {
    overlay: Overlay,
    files: Box<dyn FileDialog>,
    size: u32,
    thickness: u32,
    // Not connected to anything.
    fov: u32,
    enabled: bool,
    /// Color being edited while the color dialog is open.
    color_dialog: Option<Color>,
    /// Last upload failure, shown below the buttons.
    status: Option<String>,
}

impl SettingsPanel {
    /// Panel controlling `overlay`, starting from its current values.
    pub fn new(overlay: Overlay, files: Box<dyn FileDialog>) -> Self {
        let crosshair = overlay.crosshair();
        let enabled = overlay.is_visible();
        Self {
            overlay,
            files,
            size: crosshair.size,
            thickness: crosshair.thickness,
            fov: DEFAULT_FOV,
            enabled,
            color_dialog: None,
            status: None,
        }
    }

    pub fn size_label(&self) -> String {
        format!("Crosshair Size: {}", self.size)
    }

    pub fn thickness_label(&self) -> String {
        format!("Crosshair Thickness: {}", self.thickness)
    }

    pub fn fov_label(&self) -> String {
        format!("Field of View (FOV): {}", self.fov)
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.enabled {
            "Disable Crosshair"
        } else {
            "Enable Crosshair"
        }
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_color_dialog_open(&self) -> bool {
        self.color_dialog.is_some()
    }

    /// Color the open dialog would apply on OK.
    pub fn pending_color(&self) -> Option<Color> {
        self.color_dialog
    }

    pub fn size_changed(&mut self, size: u32) {
        self.size = size;
        self.overlay.set_size(size);
    }

    pub fn thickness_changed(&mut self, thickness: u32) {
        self.thickness = thickness;
        self.overlay.set_thickness(thickness);
    }

    pub fn fov_changed(&mut self, fov: u32) {
        self.fov = fov;
    }

    pub fn open_color_dialog(&mut self) {
        self.color_dialog = Some(self.overlay.crosshair().color);
    }

    /// Close the color dialog; `None` means it was cancelled.
    pub fn finish_color_dialog(&mut self, choice: Option<Color>) {
        self.color_dialog = None;
        match choice {
            Some(color) => {
                debug!("crosshair color chosen: {color:?}");
                self.overlay.set_color(color);
            }
            None => debug!("color dialog cancelled"),
        }
    }

    pub fn upload_custom_crosshair(&mut self) {
        let Some(path) = self.files.pick_image() else {
            debug!("file dialog cancelled");
            return;
        };
        match self.overlay.load_custom_image(&path) {
            Ok(()) => self.status = None,
            Err(e) => {
                warn!("{e}");
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn remove_custom_crosshair(&mut self) {
        self.status = None;
        self.overlay.reset_to_default();
    }

    pub fn toggle_crosshair(&mut self) {
        self.enabled = !self.enabled;
        self.overlay.set_visible(self.enabled);
    }

    fn color_dialog_ui(&mut self, ctx: &egui::Context) {
        let Some(mut current) = self.color_dialog else {
            return;
        };
        // Color32 is premultiplied, so only take it back once the user edits.
        let mut color: egui::Color32 = current.into();
        let mut choice = None;
        egui::Window::new("Select Crosshair Color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                if egui::color_picker::color_picker_color32(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::OnlyBlend,
                ) {
                    current = color.into();
                }
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        choice = Some(Some(current));
                    }
                    if ui.button("Cancel").clicked() {
                        choice = Some(None);
                    }
                });
            });
        match choice {
            Some(choice) => self.finish_color_dialog(choice),
            None => self.color_dialog = Some(current),
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!self.is_color_dialog_open(), |ui| {
                ui.spacing_mut().slider_width = ui.available_width();

                ui.label(self.size_label());
                let mut size = self.size;
                if ui
                    .add(egui::Slider::new(&mut size, SIZE_RANGE).show_value(false))
                    .changed()
                {
                    self.size_changed(size);
                }

                ui.label(self.thickness_label());
                let mut thickness = self.thickness;
                if ui
                    .add(egui::Slider::new(&mut thickness, THICKNESS_RANGE).show_value(false))
                    .changed()
                {
                    self.thickness_changed(thickness);
                }

                ui.label(self.fov_label());
                let mut fov = self.fov;
                if ui
                    .add(egui::Slider::new(&mut fov, FOV_RANGE).show_value(false))
                    .changed()
                {
                    self.fov_changed(fov);
                }

                ui.add_space(8.0);
                if ui.button("Choose Crosshair Color").clicked() {
                    self.open_color_dialog();
                }
                if ui.button("Upload Custom Crosshair").clicked() {
                    self.upload_custom_crosshair();
                }
                ui.vertical_centered(|ui| {
                    if ui.button("Remove Custom Crosshair").clicked() {
                        self.remove_custom_crosshair();
                    }
                });

                let mut enabled = self.enabled;
                if ui.toggle_value(&mut enabled, self.toggle_label()).clicked() {
                    self.toggle_crosshair();
                }

                if let Some(status) = &self.status {
                    ui.colored_label(ui.visuals().warn_fg_color, status);
                }
            });
        });
        self.color_dialog_ui(ctx);
    }
}

/// Dark translucent look with rounded widgets.
pub fn apply_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::dark();
    style.visuals.window_rounding = egui::Rounding::same(20.0);
    style.visuals.widgets.inactive.rounding = egui::Rounding::same(10.0);
    style.visuals.widgets.hovered.rounding = egui::Rounding::same(10.0);
    style.visuals.widgets.active.rounding = egui::Rounding::same(10.0);
    style.spacing.item_spacing = egui::vec2(8.0, 10.0);
    style.spacing.button_padding = egui::vec2(8.0, 5.0);
    for font in style.text_styles.values_mut() {
        font.size = font.size.max(14.0);
    }
    ctx.set_style(style);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{OverlayConfig, Rect};

    struct Cancelled;
    impl FileDialog for Cancelled {
        fn pick_image(&self) -> Option<PathBuf> {
            None
        }
    }

    fn panel() -> (Overlay, SettingsPanel) {
        let overlay = Overlay::with_bounds(
            &OverlayConfig::default(),
            Rect::from(0.0, 0.0).sized(800.0, 600.0),
        );
        let panel = SettingsPanel::new(overlay.clone(), Box::new(Cancelled));
        (overlay, panel)
    }

    #[test]
    fn labels_start_from_overlay_values() {
        let (_, panel) = panel();
        assert_eq!(panel.size_label(), "Crosshair Size: 15");
        assert_eq!(panel.thickness_label(), "Crosshair Thickness: 2");
        assert_eq!(panel.fov_label(), "Field of View (FOV): 90");
        assert_eq!(panel.toggle_label(), "Enable Crosshair");
    }

    #[test]
    fn cancelled_upload_changes_nothing() {
        let (overlay, mut panel) = panel();
        let before = overlay.crosshair();
        panel.upload_custom_crosshair();
        assert_eq!(overlay.crosshair(), before);
        assert_eq!(panel.status(), None);
    }

    #[test]
    fn untouched_color_dialog_keeps_exact_color() {
        let (overlay, mut panel) = panel();
        let translucent = Color::rgba(200, 100, 50, 128);
        overlay.set_color(translucent);
        panel.open_color_dialog();

        let ctx = egui::Context::default();
        for _ in 0..3 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| panel.ui(ctx));
        }
        assert_eq!(panel.pending_color(), Some(translucent));

        panel.finish_color_dialog(panel.pending_color());
        assert_eq!(overlay.crosshair().color, translucent);
    }

    #[test]
    fn style_applies_without_a_window() {
        let ctx = egui::Context::default();
        apply_style(&ctx);
        assert_eq!(ctx.style().visuals.window_rounding, egui::Rounding::same(20.0));
    }
}
