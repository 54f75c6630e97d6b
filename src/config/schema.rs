use std::env;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/isaitamil/config.toml` or
/// `~/.config/isaitamil/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `ISAITAMIL__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playback: PlaybackSettings,
    pub controls: ControlsSettings,
    pub ui: UiSettings,
    pub recommend: RecommendSettings,
    pub network: NetworkSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Starting volume, 0-100.
    pub volume: u8,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self { volume: 70 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Percent of the track to scrub per keypress.
    pub seek_percent: u8,
    /// Volume change per keypress, 0-100 scale.
    pub volume_step: u8,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            seek_percent: 5,
            volume_step: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Separator between elapsed and total time in the player bar.
    pub time_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ IsaiTamil: Tamil hits in your terminal ~ ".to_string(),
            time_separator: " / ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RecommendSettings {
    /// Gemini API key. When neither this nor `GEMINI_API_KEY` is set, the
    /// mood finder is disabled and no request is ever issued.
    pub api_key: Option<String>,
    /// Model used for `generateContent`.
    pub model: String,
    /// API base URL, without a trailing slash.
    pub endpoint: String,
    /// Read/write timeout for the recommendation request, seconds.
    pub timeout_secs: u64,
}

impl Default for RecommendSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 20,
        }
    }
}

impl RecommendSettings {
    /// The credential to use: explicit config first, `GEMINI_API_KEY`
    /// environment variable as fallback. `None` means "make no call".
    pub fn resolved_api_key(&self) -> Option<String> {
        self.api_key
            .as_ref()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .or_else(|| env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Connect timeout for audio downloads, seconds.
    pub connect_timeout_secs: u64,
    /// Read timeout for audio downloads, seconds.
    pub read_timeout_secs: u64,
    /// Cap on a single audio download, in megabytes.
    pub max_download_mb: u64,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 5,
            read_timeout_secs: 30,
            max_download_mb: 32,
        }
    }
}
