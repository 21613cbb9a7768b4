use crate::config::types::{Config, SETTINGS_FILE_NAME};
use anyhow::{Context, Result};
use std::fs;

/// 將使用者設定寫回根目錄的 settings.json
pub fn save_settings(config: &Config) -> Result<()> {
    let path = config.root.join(SETTINGS_FILE_NAME);
    let content =
        serde_json::to_string_pretty(&config.settings).context("Failed to serialize settings")?;

    fs::write(&path, content)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;

    Ok(())
}
