use crosshair_overlay::{app::CrosshairApp, logging, platform, Overlay, OverlayConfig, PanelConfig};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    logging::init(cfg!(debug_assertions));

    let config = OverlayConfig::default();
    let panel = PanelConfig::default();

    let platform = platform::native();
    let overlay = Overlay::new(&config, platform.as_ref());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(panel.title.clone())
            .with_position(panel.position)
            .with_inner_size(panel.size),
        ..Default::default()
    };

    eframe::run_native(
        &panel.title,
        native_options,
        Box::new(move |cc| Box::new(CrosshairApp::new(cc, config, overlay, platform))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))?;

    tracing::info!("settings window closed");
    Ok(())
}
