use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_isaitamil_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("ISAITAMIL_CONFIG_PATH", "/tmp/isaitamil-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/isaitamil-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("isaitamil")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("isaitamil")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
volume = 45

[controls]
seek_percent = 10
volume_step = 2

[ui]
header_text = "hello"
time_separator = " | "

[recommend]
api_key = "test-key"
model = "gemini-test"
timeout_secs = 7

[network]
connect_timeout_secs = 2
read_timeout_secs = 9
max_download_mb = 8
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ISAITAMIL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("ISAITAMIL__PLAYBACK__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.volume, 45);
    assert_eq!(s.controls.seek_percent, 10);
    assert_eq!(s.controls.volume_step, 2);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.time_separator, " | ");
    assert_eq!(s.recommend.api_key.as_deref(), Some("test-key"));
    assert_eq!(s.recommend.model, "gemini-test");
    assert_eq!(s.recommend.timeout_secs, 7);
    assert_eq!(s.network.connect_timeout_secs, 2);
    assert_eq!(s.network.read_timeout_secs, 9);
    assert_eq!(s.network.max_download_mb, 8);
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
volume = 45
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("ISAITAMIL_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("ISAITAMIL__PLAYBACK__VOLUME", "15");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.volume, 15);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.controls.seek_percent = 0;
    assert!(s.validate().is_err());
    s.controls.seek_percent = 5;

    s.recommend.timeout_secs = 0;
    assert!(s.validate().is_err());
}

#[test]
fn resolved_api_key_prefers_config_over_environment() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("GEMINI_API_KEY", "env-key");

    let mut s = RecommendSettings::default();
    assert_eq!(s.resolved_api_key().as_deref(), Some("env-key"));

    s.api_key = Some("config-key".to_string());
    assert_eq!(s.resolved_api_key().as_deref(), Some("config-key"));

    s.api_key = Some("   ".to_string());
    assert_eq!(s.resolved_api_key().as_deref(), Some("env-key"));
}

#[test]
fn resolved_api_key_is_none_without_any_credential() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("GEMINI_API_KEY");

    let s = RecommendSettings::default();
    assert_eq!(s.resolved_api_key(), None);
}
