use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::ui::settings::ViewerSettings;

fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("decay_viewer");
    fs::create_dir_all(&path).ok();
    path.push("viewer_settings.json");
    path
}

/// Loads saved settings, then applies environment overrides:
/// - `DECAY_VIEWER_ASSET_DIR` - image folder
/// - `DECAY_VIEWER_CHAR_INTERVAL_MS` - reveal speed (minimum 1)
pub fn load_settings() -> ViewerSettings {
    let path = settings_path();
    let mut settings = match fs::read_to_string(&path) {
        Ok(text) => settings_from_text(&text),
        Err(_) => ViewerSettings::default(),
    };
    apply_env_overrides(&mut settings);
    settings
}

/// Parses a saved settings file. Malformed text yields the defaults.
pub fn settings_from_text(text: &str) -> ViewerSettings {
    serde_json::from_str(text).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring malformed settings");
        ViewerSettings::default()
    })
}

pub fn save_settings(settings: &ViewerSettings) -> anyhow::Result<()> {
    let path = settings_path();
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(&path, json)
        .with_context(|| format!("writing settings to {}", path.display()))?;
    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn apply_env_overrides(settings: &mut ViewerSettings) {
    apply_overrides(settings, |key| env::var(key).ok());
}

fn apply_overrides(settings: &mut ViewerSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(dir) = lookup("DECAY_VIEWER_ASSET_DIR") {
        if !dir.trim().is_empty() {
            settings.asset_dir = PathBuf::from(dir.trim());
        }
    }
    let interval = lookup("DECAY_VIEWER_CHAR_INTERVAL_MS").and_then(|v| v.trim().parse::<u64>().ok());
    if let Some(ms) = interval {
        settings.char_interval_ms = ms.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overridden(vars: &[(&str, &str)]) -> ViewerSettings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut settings = ViewerSettings::default();
        apply_overrides(&mut settings, |key| vars.get(key).cloned());
        settings
    }

    #[test]
    fn env_overrides_asset_dir_and_interval() {
        let settings = overridden(&[
            ("DECAY_VIEWER_ASSET_DIR", "/srv/decay"),
            ("DECAY_VIEWER_CHAR_INTERVAL_MS", " 40 "),
        ]);
        assert_eq!(settings.asset_dir, PathBuf::from("/srv/decay"));
        assert_eq!(settings.char_interval_ms, 40);
    }

    #[test]
    fn zero_interval_is_raised_to_one() {
        let settings = overridden(&[("DECAY_VIEWER_CHAR_INTERVAL_MS", "0")]);
        assert_eq!(settings.char_interval_ms, 1);
    }

    #[test]
    fn blank_or_unparsable_values_are_ignored() {
        let settings = overridden(&[
            ("DECAY_VIEWER_ASSET_DIR", "   "),
            ("DECAY_VIEWER_CHAR_INTERVAL_MS", "fast"),
        ]);
        let defaults = ViewerSettings::default();
        assert_eq!(settings.asset_dir, defaults.asset_dir);
        assert_eq!(settings.char_interval_ms, defaults.char_interval_ms);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let defaults = ViewerSettings::default();
        for text in ["{ not json", r#"{ "ui_scale": "big" }"#, ""] {
            let settings = settings_from_text(text);
            assert_eq!(settings.ui_scale, defaults.ui_scale);
            assert_eq!(settings.char_interval_ms, defaults.char_interval_ms);
            assert_eq!(settings.asset_indices, defaults.asset_indices);
        }
    }

    #[test]
    fn saved_file_round_trips_edited_fields() {
        let mut settings = ViewerSettings::default();
        settings.ui_scale = 1.5;
        settings.asset_indices = [3, 2, 1, 0];

        let text = serde_json::to_string_pretty(&settings).unwrap();
        let loaded = settings_from_text(&text);
        assert_eq!(loaded.ui_scale, 1.5);
        assert_eq!(loaded.asset_indices, [3, 2, 1, 0]);
    }
}
