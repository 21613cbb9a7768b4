//! wallpaper.json 讀寫與目錄建立

use super::categorizer::{category_for, display_name};
use crate::config::{CATEGORY_KEYWORDS, Category, thumbnail_file_name};
use crate::error::AssetError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const VERSION_FORMAT: &str = "%Y.%m.%d";

/// wallpaper.json 的 `videos` 陣列元素，欄位順序即輸出順序
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub asset: String,
    pub thumbnail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
    /// 依分類順序排列，只含非空分類
    pub category_counts: Vec<(Category, usize)>,
}

impl Catalog {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[must_use]
pub fn format_video_id(index: usize) -> String {
    format!("vid-{index:03}")
}

/// 由檔名清單建立目錄
///
/// 依分類分桶、桶內依檔名排序、依固定分類順序輸出並從 1 開始編號
#[must_use]
pub fn build_catalog<S: AsRef<str>>(filenames: &[S], base_url: &str) -> Catalog {
    let base_url = base_url.trim_end_matches('/');

    let mut buckets: BTreeMap<Category, Vec<&str>> = BTreeMap::new();
    for filename in filenames {
        let filename = filename.as_ref();
        let category = category_for(filename, CATEGORY_KEYWORDS, &Category::ALL);
        buckets.entry(category).or_default().push(filename);
    }

    let mut catalog = Catalog::default();
    for category in Category::ALL {
        let Some(files) = buckets.get_mut(&category) else {
            continue;
        };
        files.sort_unstable();

        for filename in files.iter() {
            let id = format_video_id(catalog.entries.len() + 1);
            catalog.entries.push(CatalogEntry {
                id,
                name: display_name(filename),
                category,
                asset: format!("{base_url}/video/{filename}"),
                thumbnail: format!(
                    "{base_url}/video/thumbnail/{}",
                    thumbnail_file_name(filename)
                ),
            });
        }
        catalog.category_counts.push((category, files.len()));
    }

    catalog
}

/// 讀取既有的 manifest，必須是 JSON 物件
pub fn load_manifest(path: &Path) -> Result<Map<String, Value>, AssetError> {
    let content = fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| AssetError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(AssetError::InvalidManifest(path.to_path_buf())),
    }
}

/// 只覆寫 `videos` 與 `version`，其他欄位保持原位
pub fn apply_catalog(
    manifest: &mut Map<String, Value>,
    catalog: &Catalog,
    version: &str,
) -> Result<(), serde_json::Error> {
    manifest.insert("videos".to_string(), serde_json::to_value(&catalog.entries)?);
    manifest.insert("version".to_string(), Value::String(version.to_string()));
    Ok(())
}

/// 以兩格縮排寫回 manifest
///
/// 先寫入同目錄的暫存檔再改名，寫入失敗時原檔保持不變
pub fn write_manifest(path: &Path, manifest: &Map<String, Value>) -> Result<(), AssetError> {
    let content = serde_json::to_string_pretty(manifest).map_err(|e| AssetError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    let temp_path = temp_sibling(path);
    if let Err(e) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(AssetError::io(&temp_path, e));
    }
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AssetError::io(path, e)
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
