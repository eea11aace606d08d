use eframe::egui;

use crate::engine::presenter::Presenter;
use crate::engine::protocol::Gesture;
use crate::ui::settings::ViewerSettings;
use crate::ui::textures::{draw_asset, TextureCache};

const THUMB_SIZE: egui::Vec2 = egui::vec2(140.0, 100.0);

/// Stage thumbnails for the active object. Hidden on the summary.
pub fn draw_left_panel(
    ctx: &egui::Context,
    presenter: &Presenter,
    textures: &mut TextureCache,
    settings: &ViewerSettings,
) -> Option<Gesture> {
    let object = presenter.view().active_object()?;
    let mut picked = None;

    egui::SidePanel::left("thumbnails")
        .resizable(false)
        .default_width(THUMB_SIZE.x + 20.0)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("STAGES")
                    .strong()
                    .color(settings.color("Heading")),
            );
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                for thumb in presenter.thumbnails() {
                    let stroke = if thumb.active {
                        egui::Stroke::new(2.0, settings.color("Highlight"))
                    } else {
                        egui::Stroke::NONE
                    };

                    let clicked = egui::Frame::new()
                        .stroke(stroke)
                        .corner_radius(4.0)
                        .inner_margin(egui::Margin::same(4))
                        .show(ui, |ui| {
                            let image = draw_asset(
                                ui,
                                textures,
                                &thumb.asset,
                                THUMB_SIZE,
                                settings.color("Placeholder"),
                                thumb.label,
                            );
                            let caption = ui.add(
                                egui::Label::new(
                                    egui::RichText::new(thumb.label)
                                        .small()
                                        .color(settings.color("Body")),
                                )
                                .sense(egui::Sense::click()),
                            );
                            image.clicked() || caption.clicked()
                        })
                        .inner;

                    if clicked {
                        picked = Some(Gesture::Pick {
                            object,
                            stage: thumb.stage,
                        });
                    }

                    ui.add_space(6.0);
                }
            });
        });

    picked
}
