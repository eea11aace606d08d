use serde::{Deserialize, Serialize};
use egui::Color32;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::model::builtin::DEFAULT_ASSET_INDICES;
use crate::model::catalog::OBJECT_COUNT;

pub const DEFAULT_CHAR_INTERVAL_MS: u64 = 15;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ViewerSettings {
    pub ui_scale: f32,

    /// Delay between two revealed characters.
    pub char_interval_ms: u64,

    /// Folder holding the `object{N}_{suffix}.png` files.
    pub asset_dir: PathBuf,

    /// Asset file number per catalog object. Must be injective.
    pub asset_indices: [u32; OBJECT_COUNT],

    // Role → color mapping
    pub palette: HashMap<String, [u8; 4]>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        let mut palette = HashMap::new();

        palette.insert("Heading".into(), [220, 220, 220, 255]);
        palette.insert("Body".into(), [180, 180, 180, 255]);
        palette.insert("Reveal".into(), [153, 153, 153, 255]);
        palette.insert("Highlight".into(), [200, 90, 40, 255]);
        palette.insert("Placeholder".into(), [51, 51, 51, 255]);

        Self {
            ui_scale: 1.0,
            char_interval_ms: DEFAULT_CHAR_INTERVAL_MS,
            asset_dir: PathBuf::from("assets"),
            asset_indices: DEFAULT_ASSET_INDICES,
            palette,
        }
    }
}

impl ViewerSettings {
    pub const PALETTE_KEYS: [&'static str; 5] =
        ["Heading", "Body", "Reveal", "Highlight", "Placeholder"];

    pub fn color(&self, key: &str) -> Color32 {
        self.palette
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::WHITE)
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        self.palette.insert(
            key.to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }
}
