//! Tooltip timing and layout configuration.
//!
//! Stores tunable delays and placement distances as JSON at
//! `~/.local/share/tooltip-sim/config.json`. Loaded once on startup; any
//! load error falls back to the built-in defaults so the feature stays
//! functional without a config file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file path.
fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tooltip-sim")
        .join("config.json")
}

/// Persisted tooltip settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Hover dwell before the tooltip appears, in milliseconds.
    #[serde(default = "default_show_delay")]
    pub show_delay_ms: u64,
    /// Grace period after pointer-leave before the tooltip hides.
    #[serde(default = "default_hide_delay")]
    pub hide_delay_ms: u64,
    /// Gap between hotspot edge and tooltip edge, also the minimum
    /// distance kept from every viewport edge.
    #[serde(default = "default_gap")]
    pub placement_gap: f32,
    /// Vertical offset above the cursor in pointer-follow mode.
    #[serde(default = "default_gap")]
    pub follow_offset: f32,
    /// Viewport width below which the bottom-sheet layout is used.
    #[serde(default = "default_breakpoint")]
    pub mobile_breakpoint: f32,
    /// Distance between the bottom sheet and the bottom viewport edge.
    #[serde(default = "default_sheet_margin")]
    pub sheet_bottom_margin: f32,
    /// Path the config was loaded from (not serialized).
    #[serde(skip)]
    path: PathBuf,
}

fn default_show_delay() -> u64 { 300 }
fn default_hide_delay() -> u64 { 150 }
fn default_gap() -> f32 { 15.0 }
fn default_breakpoint() -> f32 { 768.0 }
fn default_sheet_margin() -> f32 { 20.0 }

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: default_show_delay(),
            hide_delay_ms: default_hide_delay(),
            placement_gap: default_gap(),
            follow_offset: default_gap(),
            mobile_breakpoint: default_breakpoint(),
            sheet_bottom_margin: default_sheet_margin(),
            path: default_path(),
        }
    }
}

impl TooltipConfig {
    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_from(&default_path())
    }

    /// Load from an explicit path, falling back to defaults on any error.
    pub fn load_from(path: &Path) -> Self {
        let mut config: Self = match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        };
        config.path = path.to_path_buf();
        config
    }

    /// Persist current config to disk.
    pub fn save(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = std::fs::write(&self.path, json);
        }
    }

    pub fn show_delay(&self) -> Duration {
        Duration::from_millis(self.show_delay_ms)
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}
