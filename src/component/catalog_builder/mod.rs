//! wallpaper.json 目錄重建元件
//!
//! 掃描影片資料夾、依檔名關鍵字分類、重新編號並覆寫 `videos` 與 `version`

mod categorizer;
mod main;
mod manifest;

pub use categorizer::{category_for, display_name};
pub use main::CatalogBuilder;
pub use manifest::{
    Catalog, CatalogEntry, VERSION_FORMAT, apply_catalog, build_catalog, format_video_id,
    load_manifest, write_manifest,
};
