use super::manifest::{
    Catalog, VERSION_FORMAT, apply_catalog, build_catalog, load_manifest, write_manifest,
};
use crate::config::{AssetPaths, Config};
use crate::tools::scan_video_files;
use anyhow::{Context, Result};
use console::style;
use log::info;
use rust_i18n::t;

/// 依影片資料夾重建 wallpaper.json 的 `videos` 與 `version`
pub struct CatalogBuilder {
    paths: AssetPaths,
    base_url: String,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_paths(config.paths.clone(), &config.settings.base_url)
    }

    #[must_use]
    pub fn with_paths(paths: AssetPaths, base_url: &str) -> Self {
        Self {
            paths,
            base_url: base_url.to_string(),
        }
    }

    /// 以今天的本地日期作為版本號
    pub fn run(&self) -> Result<Catalog> {
        let version = chrono::Local::now().format(VERSION_FORMAT).to_string();
        let catalog = self.rebuild(&version)?;
        self.print_summary(&catalog);
        Ok(catalog)
    }

    /// 重建並寫回 manifest
    ///
    /// 任何讀取或解析失敗都會在寫入前中止，原檔不會被修改
    pub fn rebuild(&self, version: &str) -> Result<Catalog> {
        let video_files = scan_video_files(&self.paths.video_folder).with_context(|| {
            format!(
                "Failed to list video folder {}",
                self.paths.video_folder.display()
            )
        })?;
        info!(
            "Found {} video files in {}",
            video_files.len(),
            self.paths.video_folder.display()
        );

        let mut manifest = load_manifest(&self.paths.manifest_path).with_context(|| {
            format!(
                "Failed to load manifest {}",
                self.paths.manifest_path.display()
            )
        })?;

        let filenames: Vec<&str> = video_files.iter().map(|f| f.file_name.as_str()).collect();
        let catalog = build_catalog(&filenames, &self.base_url);

        apply_catalog(&mut manifest, &catalog, version)
            .context("Failed to serialize catalog entries")?;
        write_manifest(&self.paths.manifest_path, &manifest).with_context(|| {
            format!(
                "Failed to write manifest {}",
                self.paths.manifest_path.display()
            )
        })?;

        info!(
            "Manifest {} updated: {} videos, version {version}",
            self.paths.manifest_path.display(),
            catalog.len()
        );

        Ok(catalog)
    }

    fn print_summary(&self, catalog: &Catalog) {
        let file_name = self
            .paths
            .manifest_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy();

        println!(
            "{}",
            style(t!(
                "catalog.updated",
                file = file_name,
                count = catalog.len()
            ))
            .green()
        );
        println!("\n{}", style(t!("catalog.by_category")).cyan().bold());
        for (category, count) in &catalog.category_counts {
            println!(
                "  {}",
                t!("catalog.category_line", category = category, count = count)
            );
        }
    }
}
