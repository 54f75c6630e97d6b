use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix
/// `ISAITAMIL__`), then an optional config file and falls back to struct
/// defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("ISAITAMIL")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if self.playback.volume > 100 {
            return Err("playback.volume must be <= 100".to_string());
        }
        if self.controls.seek_percent == 0 || self.controls.seek_percent > 50 {
            return Err("controls.seek_percent must be in 1..=50".to_string());
        }
        if self.controls.volume_step == 0 || self.controls.volume_step > 100 {
            return Err("controls.volume_step must be in 1..=100".to_string());
        }
        if self.recommend.timeout_secs == 0 {
            return Err("recommend.timeout_secs must be >= 1".to_string());
        }
        if self.network.max_download_mb == 0 {
            return Err("network.max_download_mb must be >= 1".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `ISAITAMIL_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("ISAITAMIL_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/isaitamil/config.toml`
/// or `~/.config/isaitamil/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("isaitamil").join("config.toml"))
}
