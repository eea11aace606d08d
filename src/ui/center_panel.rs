use eframe::egui;

use crate::engine::presenter::{Presenter, Screen};
use crate::engine::protocol::Gesture;
use crate::ui::settings::ViewerSettings;
use crate::ui::textures::{draw_asset, TextureCache};

/// Main image plus the object data log for the selected stage.
pub fn draw_center_panel(
    ctx: &egui::Context,
    presenter: &Presenter,
    textures: &mut TextureCache,
    settings: &ViewerSettings,
) -> Option<Gesture> {
    let Screen::Detail(detail) = presenter.screen() else {
        return None;
    };
    let mut gesture = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        let background = ui.interact(
            ui.max_rect(),
            egui::Id::new("detail_area"),
            egui::Sense::click(),
        );

        // ---------- Image ----------
        ui.vertical_centered(|ui| {
            let size = egui::vec2(
                ui.available_width().min(720.0),
                (ui.available_height() * 0.6).max(120.0),
            );
            let hover = format!("{} - {}", detail.object_label, detail.stage_label);
            let image = draw_asset(
                ui,
                textures,
                &detail.asset,
                size,
                settings.color("Placeholder"),
                &hover,
            );
            if image.double_clicked() {
                gesture = Some(Gesture::AdvanceView);
            }
        });

        ui.separator();

        // ---------- Data log ----------
        ui.label(
            egui::RichText::new(format!("[OBJECT DATA LOG] - {}", detail.object_label))
                .strong()
                .color(settings.color("Heading")),
        );
        ui.label(
            egui::RichText::new(format!("{} | Time: {}", detail.stage_label, detail.time_range))
                .color(settings.color("Body")),
        );
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("detail_reveal")
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(presenter.detail_reveal().revealed())
                        .monospace()
                        .color(settings.color("Reveal")),
                );
            });

        if background.double_clicked() {
            gesture = Some(Gesture::AdvanceView);
        }
    });

    gesture
}
