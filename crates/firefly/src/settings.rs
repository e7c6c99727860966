//! Settings file loading.

use std::path::{Path, PathBuf};

use anyhow::Context;
use firefly_core::Settings;

/// Default location of the settings file.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("firefly")
        .join("settings.json")
}

/// Load settings from `path`, or from [`default_path`] when none is given.
///
/// A missing default file yields default settings; an explicitly given path
/// must exist.
pub async fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let settings_path = path.map_or_else(default_path, Path::to_path_buf);

    if path.is_none() && !settings_path.exists() {
        tracing::debug!("No settings file at {:?}; using defaults", settings_path);
        return Ok(Settings::default());
    }

    let contents = tokio::fs::read_to_string(&settings_path)
        .await
        .with_context(|| format!("failed to read settings from {}", settings_path.display()))?;

    let settings = Settings::from_json(&contents)
        .with_context(|| format!("invalid settings in {}", settings_path.display()))?;

    tracing::info!("Settings loaded from {:?}", settings_path);
    Ok(settings)
}
