use eframe::egui;

use crate::ui::app::{SettingsPanel, SettingsTab};
use crate::ui::settings::ViewerSettings;
use crate::ui::settings_io::save_settings;
use crate::ui::textures::TextureCache;

pub fn draw_right_panel(
    ctx: &egui::Context,
    panel: &mut SettingsPanel,
    settings: &mut ViewerSettings,
    textures: &mut TextureCache,
) {
    egui::SidePanel::right("settings")
        .resizable(true)
        .default_width(260.0)
        .min_width(220.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut panel.tab, SettingsTab::Display, "Display");
                ui.selectable_value(&mut panel.tab, SettingsTab::Assets, "Assets");
            });

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| match panel.tab {
                SettingsTab::Display => draw_display(ui, settings),
                SettingsTab::Assets => draw_assets(ui, settings, textures),
            });

            ui.separator();

            if ui.button("Save").clicked() {
                panel.status = Some(match save_settings(settings) {
                    Ok(()) => "Settings saved.".to_string(),
                    Err(err) => {
                        tracing::error!("failed to save settings: {err:#}");
                        format!("Save failed: {err}")
                    }
                });
            }

            if let Some(status) = &panel.status {
                ui.label(egui::RichText::new(status).small());
            }
        });
}

/* =========================
   Display
   ========================= */

fn draw_display(ui: &mut egui::Ui, settings: &mut ViewerSettings) {
    ui.label("UI Scale");
    ui.add(egui::Slider::new(&mut settings.ui_scale, 0.75..=2.0));

    ui.label("Reveal interval (ms per character)");
    ui.add(
        egui::DragValue::new(&mut settings.char_interval_ms)
            .speed(1)
            .range(1..=500),
    );

    ui.collapsing("Colors", |ui| {
        for key in ViewerSettings::PALETTE_KEYS {
            let mut color = settings.color(key);
            ui.horizontal(|ui| {
                if ui.color_edit_button_srgba(&mut color).changed() {
                    settings.set_color(key, color);
                }
                ui.label(key);
            });
        }
    });
}

/* =========================
   Assets
   ========================= */

fn draw_assets(ui: &mut egui::Ui, settings: &mut ViewerSettings, textures: &mut TextureCache) {
    ui.label("Image folder");
    ui.label(
        egui::RichText::new(textures.asset_dir().display().to_string())
            .monospace()
            .small(),
    );

    if ui.button("Choose folder…").clicked() {
        if let Some(dir) = rfd::FileDialog::new()
            .set_directory(textures.asset_dir())
            .pick_folder()
        {
            settings.asset_dir = dir.clone();
            textures.set_asset_dir(dir);
        }
    }

    ui.separator();
    ui.label("Object → file number");
    for (object, index) in settings.asset_indices.iter().enumerate() {
        ui.label(egui::RichText::new(format!("object {object} → object{index}_*.png")).small());
    }
    ui.label(
        egui::RichText::new("Edit the settings file to remap; applied on restart.")
            .small()
            .italics(),
    );
}
