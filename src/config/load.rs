use crate::config::types::{AssetPaths, Config, SETTINGS_FILE_NAME, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

impl Config {
    /// 以目前工作目錄作為素材根目錄
    pub fn new() -> Result<Self> {
        let root = std::env::current_dir().context("Failed to resolve working directory")?;
        Ok(Self::from_root(&root))
    }

    #[must_use]
    pub fn from_root(root: &Path) -> Self {
        let settings = Self::load_settings(root).unwrap_or_else(|e| {
            warn!("{e:#}, falling back to defaults");
            UserSettings::default()
        });

        let mut paths = AssetPaths::from_root(root);
        if let Some(output_folder) = &settings.output_folder {
            paths.output_folder = root.join(output_folder);
        }

        Self {
            root: root.to_path_buf(),
            paths,
            settings,
        }
    }

    fn load_settings(root: &Path) -> Result<UserSettings> {
        let path = root.join(SETTINGS_FILE_NAME);
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
