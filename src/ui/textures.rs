use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use eframe::egui;

use crate::engine::file_name::AssetId;

/// Decoded images keyed by asset. Failures are cached too so a missing file
/// is read and reported once.
pub struct TextureCache {
    asset_dir: PathBuf,
    loaded: HashMap<AssetId, Option<egui::TextureHandle>>,
}

impl TextureCache {
    pub fn new(asset_dir: PathBuf) -> Self {
        Self {
            asset_dir,
            loaded: HashMap::new(),
        }
    }

    pub fn asset_dir(&self) -> &Path {
        &self.asset_dir
    }

    pub fn set_asset_dir(&mut self, dir: PathBuf) {
        tracing::info!(dir = %dir.display(), "asset folder changed");
        self.asset_dir = dir;
        self.loaded.clear();
    }

    pub fn get(&mut self, ctx: &egui::Context, asset: &AssetId) -> Option<&egui::TextureHandle> {
        if !self.loaded.contains_key(asset) {
            let texture = match read_image(&self.asset_dir.join(asset.as_str())) {
                Ok(image) => Some(ctx.load_texture(
                    asset.as_str(),
                    image,
                    egui::TextureOptions::LINEAR,
                )),
                Err(err) => {
                    tracing::warn!(%asset, "image unavailable: {err:#}");
                    None
                }
            };
            self.loaded.insert(asset.clone(), texture);
        }
        self.loaded.get(asset).and_then(Option::as_ref)
    }
}

fn read_image(path: &Path) -> anyhow::Result<egui::ColorImage> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let rgba = image::load_from_memory(&bytes)
        .with_context(|| format!("decoding {}", path.display()))?
        .to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        [w as usize, h as usize],
        rgba.as_raw(),
    ))
}

/// Draws `asset` scaled into `size`, or a placeholder box naming it.
pub fn draw_asset(
    ui: &mut egui::Ui,
    textures: &mut TextureCache,
    asset: &AssetId,
    size: egui::Vec2,
    placeholder: egui::Color32,
    hover: &str,
) -> egui::Response {
    let response = match textures.get(ui.ctx(), asset) {
        Some(texture) => {
            let fitted = fit_within(texture.size_vec2(), size);
            ui.add(egui::Image::from_texture((texture.id(), fitted)).sense(egui::Sense::click()))
        }
        None => {
            let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
            ui.painter().rect_filled(rect, 4.0, placeholder);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                asset.as_str(),
                egui::FontId::monospace(10.0),
                egui::Color32::GRAY,
            );
            response
        }
    };
    response.on_hover_text(hover)
}

fn fit_within(image: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if image.x <= 0.0 || image.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.x / image.x).min(bounds.y / image.y);
    image * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_keeps_aspect_ratio() {
        let fitted = fit_within(egui::vec2(400.0, 200.0), egui::vec2(100.0, 100.0));
        assert_eq!(fitted, egui::vec2(100.0, 50.0));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_image(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(format!("{err:#}").contains("reading"));
    }
}
