use anyhow::Context;
use decay_viewer::{model, ui};
use eframe::egui;

fn main() -> anyhow::Result<()> {
    decay_viewer::logging::init();

    let settings = ui::settings_io::load_settings();
    let catalog = model::builtin::catalog(settings.asset_indices)
        .context("invalid catalog configuration")?;
    tracing::info!(
        objects = catalog.object_count(),
        stages = catalog.stage_count(),
        asset_dir = %settings.asset_dir.display(),
        "catalog ready"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Decay Array"),
        ..Default::default()
    };

    eframe::run_native(
        "Decay Array",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ui::app::ViewerApp::new(catalog, settings)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("viewer window failed: {err}"))
}
