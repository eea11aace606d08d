use eframe::egui;
use std::time::{Duration, Instant};

use crate::engine::presenter::Presenter;
use crate::engine::protocol::Gesture;
use crate::model::catalog::Catalog;
use crate::ui::center_panel::draw_center_panel;
use crate::ui::left_panel::draw_left_panel;
use crate::ui::right_panel::draw_right_panel;
use crate::ui::settings::ViewerSettings;
use crate::ui::summary_panel::{draw_summary_panel, PendingPick};
use crate::ui::textures::TextureCache;

/* =========================
   Settings panel state
   ========================= */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Display,
    Assets,
}

#[derive(Default)]
pub struct SettingsPanel {
    pub open: bool,
    pub tab: SettingsTab,
    pub status: Option<String>,
}

/* =========================
   App
   ========================= */

pub struct ViewerApp {
    presenter: Presenter,
    settings: ViewerSettings,
    textures: TextureCache,
    panel: SettingsPanel,
    summary_clicks: PendingPick,
    started: Instant,
}

impl ViewerApp {
    pub fn new(catalog: Catalog, settings: ViewerSettings) -> Self {
        Self {
            presenter: Presenter::new(catalog, settings.char_interval_ms),
            textures: TextureCache::new(settings.asset_dir.clone()),
            settings,
            panel: SettingsPanel::default(),
            summary_clicks: PendingPick::default(),
            started: Instant::now(),
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn draw_top_bar(&mut self, ctx: &egui::Context) -> Option<Gesture> {
        let mut gesture = None;
        let view = self.presenter.view();
        let position = match view.active_object() {
            Some(object) => format!("VIEW {}/{}", object + 1, view.view_count()),
            None => "SUMMARY".to_string(),
        };

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("DECAY ARRAY")
                        .strong()
                        .color(self.settings.color("Heading")),
                );
                ui.separator();
                ui.label(egui::RichText::new(position).monospace());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.toggle_value(&mut self.panel.open, "⚙ Settings");
                    if ui.button("Next ▶").clicked() {
                        gesture = Some(Gesture::AdvanceView);
                    }
                });
            });
        });

        gesture
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyPresses {
    advance: bool,
    escape: bool,
    /// A focused widget owns the keyboard.
    captured: bool,
}

impl KeyPresses {
    fn read(ctx: &egui::Context) -> Self {
        let captured = ctx.wants_keyboard_input();
        ctx.input(|i| Self {
            advance: i.key_pressed(egui::Key::Space) || i.key_pressed(egui::Key::ArrowRight),
            escape: i.key_pressed(egui::Key::Escape),
            captured,
        })
    }

    /// Space / → cycles views, Escape leaves the summary.
    fn gesture(self, on_summary: bool) -> Option<Gesture> {
        if self.captured {
            None
        } else if self.advance {
            Some(Gesture::AdvanceView)
        } else if on_summary && self.escape {
            Some(Gesture::ReturnToStart)
        } else {
            None
        }
    }
}

/* =========================
   egui App
   ========================= */

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        ctx.set_pixels_per_point(self.settings.ui_scale);

        let now = self.now_ms();
        self.presenter.pump(now);
        self.presenter.set_char_interval(self.settings.char_interval_ms);

        let mut gestures = Vec::new();
        gestures.extend(KeyPresses::read(ctx).gesture(self.presenter.view().is_summary()));
        gestures.extend(self.draw_top_bar(ctx));

        if self.panel.open {
            draw_right_panel(ctx, &mut self.panel, &mut self.settings, &mut self.textures);
        }

        if self.presenter.view().is_summary() {
            gestures.extend(draw_summary_panel(
                ctx,
                &self.presenter,
                &mut self.textures,
                &self.settings,
                &mut self.summary_clicks,
            ));
        } else {
            self.summary_clicks.clear();
            gestures.extend(draw_left_panel(
                ctx,
                &self.presenter,
                &mut self.textures,
                &self.settings,
            ));
            gestures.extend(draw_center_panel(
                ctx,
                &self.presenter,
                &mut self.textures,
                &self.settings,
            ));
        }

        for gesture in gestures {
            self.presenter.handle(gesture, now);
        }

        if let Some(deadline) = self.presenter.next_deadline() {
            ctx.request_repaint_after(Duration::from_millis(deadline.saturating_sub(now)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_advances_unless_a_widget_has_focus() {
        let keys = KeyPresses {
            advance: true,
            ..Default::default()
        };
        assert_eq!(keys.gesture(false), Some(Gesture::AdvanceView));

        let typing = KeyPresses {
            captured: true,
            ..keys
        };
        assert_eq!(typing.gesture(false), None);
        assert_eq!(typing.gesture(true), None);
    }

    #[test]
    fn escape_only_leaves_the_summary() {
        let keys = KeyPresses {
            escape: true,
            ..Default::default()
        };
        assert_eq!(keys.gesture(true), Some(Gesture::ReturnToStart));
        assert_eq!(keys.gesture(false), None);
    }
}
