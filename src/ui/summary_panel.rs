use eframe::egui;

use crate::engine::presenter::{Presenter, Screen};
use crate::engine::protocol::Gesture;
use crate::ui::settings::ViewerSettings;
use crate::ui::textures::{draw_asset, TextureCache};

/// egui's default double-click window.
const DOUBLE_CLICK_SECS: f64 = 0.3;

/// Holds a cell click back until it can no longer become a double-click,
/// which anywhere on the summary means "return to start".
#[derive(Debug, Default)]
pub struct PendingPick {
    pending: Option<(Gesture, f64)>,
}

impl PendingPick {
    pub fn click(&mut self, pick: Gesture, now: f64) {
        self.pending = Some((pick, now));
    }

    pub fn double_click(&mut self) -> Gesture {
        self.pending = None;
        Gesture::ReturnToStart
    }

    /// Releases the held pick once the double-click window has passed.
    pub fn poll(&mut self, now: f64) -> Option<Gesture> {
        match self.pending {
            Some((pick, at)) if now - at > DOUBLE_CLICK_SECS => {
                self.pending = None;
                Some(pick)
            }
            _ => None,
        }
    }

    /// Seconds until `poll` can release the held pick.
    pub fn remaining(&self, now: f64) -> Option<f64> {
        self.pending
            .map(|(_, at)| (at + DOUBLE_CLICK_SECS - now).max(0.0))
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}

/// Full object × stage grid beside the final report.
pub fn draw_summary_panel(
    ctx: &egui::Context,
    presenter: &Presenter,
    textures: &mut TextureCache,
    settings: &ViewerSettings,
    clicks: &mut PendingPick,
) -> Option<Gesture> {
    let Screen::Summary(summary) = presenter.screen() else {
        return None;
    };
    let columns = presenter.catalog().stage_count();
    let now = ctx.input(|i| i.time);
    let mut gesture = clicks.poll(now);

    egui::CentralPanel::default().show(ctx, |ui| {
        let background = ui.interact(
            ui.max_rect(),
            egui::Id::new("summary_area"),
            egui::Sense::click(),
        );

        ui.columns(2, |cols| {
            let cell = ((cols[0].available_width() - 8.0 * columns as f32) / columns as f32)
                .max(32.0);

            egui::Grid::new("summary_grid")
                .spacing([8.0, 8.0])
                .show(&mut cols[0], |ui| {
                    for (i, c) in summary.cells.iter().enumerate() {
                        let hover = format!("{} - {}", c.object_label, c.stage_label);
                        let response = draw_asset(
                            ui,
                            textures,
                            &c.asset,
                            egui::vec2(cell, cell),
                            settings.color("Placeholder"),
                            &hover,
                        );
                        if response.double_clicked() {
                            gesture = Some(clicks.double_click());
                        } else if response.clicked() {
                            let pick = Gesture::Pick {
                                object: c.object,
                                stage: c.stage,
                            };
                            clicks.click(pick, now);
                        }
                        if (i + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });

            egui::ScrollArea::vertical()
                .id_salt("summary_reveal")
                .show(&mut cols[1], |ui| {
                    ui.label(
                        egui::RichText::new(presenter.summary_reveal().revealed())
                            .monospace()
                            .color(settings.color("Reveal")),
                    );
                });
        });

        if background.double_clicked() {
            gesture = Some(clicks.double_click());
        }
    });

    if let Some(wait) = clicks.remaining(now) {
        ctx.request_repaint_after(std::time::Duration::from_secs_f64(wait));
    }

    gesture
}
