// Optional on-disk presentation config: theme color tokens and size
// overrides, loaded once at startup. Missing or unreadable files fall back to
// the built-in defaults.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::theme::{parse_color, FilterTheme, PanelSizes};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeTokens {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SizeOverrides {
    #[serde(default)]
    pub width: Option<f32>,
    #[serde(default)]
    pub padding: Option<f32>,
    #[serde(default)]
    pub spacing: Option<f32>,
    #[serde(default)]
    pub slider_height: Option<f32>,
    #[serde(default)]
    pub input_height: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PanelConfig {
    #[serde(default)]
    pub theme: Option<ThemeTokens>,
    #[serde(default)]
    pub sizes: Option<SizeOverrides>,
}

lazy_static! {
    pub static ref PANEL_CONFIG: RwLock<PanelConfig> = RwLock::new(PanelConfig::default());
}

fn config_file_path() -> PathBuf {
    // Allow override for tests and packaging via env var
    if let Ok(p) = std::env::var("FILTER_PANEL_CONFIG_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("filter_config.json")
}

impl PanelConfig {
    pub fn load_from_file(path: &std::path::Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: PanelConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(cfg)
    }

    /// Resolves the effective theme: defaults overlaid with any parseable
    /// tokens. A malformed token keeps the default for that slot only.
    pub fn theme(&self) -> FilterTheme {
        let mut theme = FilterTheme::default();
        let Some(tokens) = &self.theme else {
            return theme;
        };
        let mut apply = |slot: &mut eframe::egui::Color32, token: &Option<String>, name: &str| {
            if let Some(token) = token {
                match parse_color(token) {
                    Ok(color) => *slot = color,
                    Err(e) => log::warn!("ignoring {name} theme token: {e}"),
                }
            }
        };
        apply(&mut theme.primary, &tokens.primary, "primary");
        apply(&mut theme.secondary, &tokens.secondary, "secondary");
        apply(&mut theme.background, &tokens.background, "background");
        apply(&mut theme.text, &tokens.text, "text");
        theme
    }

    /// Resolves the effective sizes: defaults overlaid with any overrides.
    pub fn sizes(&self) -> PanelSizes {
        let mut sizes = PanelSizes::default();
        let Some(over) = &self.sizes else {
            return sizes;
        };
        sizes.width = over.width.unwrap_or(sizes.width);
        sizes.padding = over.padding.unwrap_or(sizes.padding);
        sizes.spacing = over.spacing.unwrap_or(sizes.spacing);
        sizes.slider_height = over.slider_height.unwrap_or(sizes.slider_height);
        sizes.input_height = over.input_height.unwrap_or(sizes.input_height);
        sizes
    }
}

pub fn load_config_from_disk() {
    let path = config_file_path();
    match PanelConfig::load_from_file(&path) {
        Ok(cfg) => {
            *PANEL_CONFIG.write().unwrap() = cfg;
            log::info!("Loaded panel config from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default panel config; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;

    #[test]
    fn empty_config_yields_defaults() {
        let cfg: PanelConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.theme(), FilterTheme::default());
        assert_eq!(cfg.sizes(), PanelSizes::default());
    }

    #[test]
    fn theme_tokens_override_per_slot() {
        let cfg: PanelConfig = serde_json::from_str(
            r##"{"theme": {"primary": "#ff0000", "text": "#333333"}}"##,
        )
        .unwrap();
        let theme = cfg.theme();
        assert_eq!(theme.primary, Color32::from_rgb(0xff, 0, 0));
        assert_eq!(theme.text, Color32::from_rgb(0x33, 0x33, 0x33));
        // untouched slots keep their defaults
        assert_eq!(theme.secondary, FilterTheme::default().secondary);
        assert_eq!(theme.background, FilterTheme::default().background);
    }

    #[test]
    fn malformed_token_keeps_that_slot_default() {
        let cfg: PanelConfig = serde_json::from_str(
            r##"{"theme": {"primary": "not-a-color", "secondary": "#00ff00"}}"##,
        )
        .unwrap();
        let theme = cfg.theme();
        assert_eq!(theme.primary, FilterTheme::default().primary);
        assert_eq!(theme.secondary, Color32::from_rgb(0, 0xff, 0));
    }

    #[test]
    fn partial_size_overrides_apply() {
        let cfg: PanelConfig =
            serde_json::from_str(r#"{"sizes": {"width": 400.0, "input_height": 32.0}}"#).unwrap();
        let sizes = cfg.sizes();
        assert_eq!(sizes.width, 400.0);
        assert_eq!(sizes.input_height, 32.0);
        assert_eq!(sizes.padding, PanelSizes::default().padding);
        assert_eq!(sizes.slider_height, PanelSizes::default().slider_height);
    }
}
