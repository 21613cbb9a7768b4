//! 整合測試 - 以暫存資料夾驗證 wallpaper.json 重建流程

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;
use wallpaper_assets::component::CatalogBuilder;
use wallpaper_assets::config::{AssetPaths, Category, Config, DEFAULT_BASE_URL};
use wallpaper_assets::error::AssetError;

const VERSION: &str = "2026.10.18";

fn setup(files: &[&str], manifest: &str) -> (TempDir, AssetPaths) {
    let temp_dir = TempDir::new().unwrap();
    let paths = AssetPaths::from_root(temp_dir.path());
    fs::create_dir_all(&paths.thumbnail_folder).unwrap();
    for file in files {
        fs::write(paths.video_folder.join(file), "video").unwrap();
    }
    fs::write(&paths.manifest_path, manifest).unwrap();
    (temp_dir, paths)
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

/// 測試 1: 依分類順序編號並保留其他欄位
#[test]
fn test_rebuild_manifest() {
    let (_temp_dir, paths) = setup(
        &["unknown-thing.webm", "bmw-drift.mkv", "Zenitsu-Run.mp4", "readme.txt"],
        r#"{"name":"Themes+","version":"2024.01.01","videos":[{"id":"old"}],"images":[]}"#,
    );
    fs::write(paths.thumbnail_folder.join("bmw-drift.jpg"), "jpg").unwrap();

    let builder = CatalogBuilder::with_paths(paths.clone(), "https://cdn.test/assets");
    let catalog = builder.rebuild(VERSION).unwrap();

    assert_eq!(catalog.len(), 3);
    assert_eq!(
        catalog.category_counts,
        [(Category::Anime, 1), (Category::Cars, 1), (Category::Misc, 1)]
    );

    let manifest = read_json(&paths.manifest_path);
    assert_eq!(manifest["name"], "Themes+");
    assert_eq!(manifest["images"], json!([]));
    assert_eq!(manifest["version"], VERSION);
    assert_eq!(
        manifest["videos"],
        json!([
            {
                "id": "vid-001",
                "name": "Zenitsu Run",
                "category": "anime",
                "asset": "https://cdn.test/assets/video/Zenitsu-Run.mp4",
                "thumbnail": "https://cdn.test/assets/video/thumbnail/Zenitsu-Run.jpg"
            },
            {
                "id": "vid-002",
                "name": "Bmw Drift",
                "category": "cars",
                "asset": "https://cdn.test/assets/video/bmw-drift.mkv",
                "thumbnail": "https://cdn.test/assets/video/thumbnail/bmw-drift.jpg"
            },
            {
                "id": "vid-003",
                "name": "Unknown Thing",
                "category": "misc",
                "asset": "https://cdn.test/assets/video/unknown-thing.webm",
                "thumbnail": "https://cdn.test/assets/video/thumbnail/unknown-thing.jpg"
            }
        ])
    );

    println!("✓ manifest 重建測試通過");
}

/// 測試 2: 同一天重跑兩次輸出完全相同
#[test]
fn test_rebuild_is_idempotent() {
    let (_temp_dir, paths) = setup(
        &["sakura-field.mov", "minecraft-castle.mp4", "astronaut-drift.mp4"],
        r#"{"title":"桜","videos":[]}"#,
    );
    let builder = CatalogBuilder::with_paths(paths.clone(), DEFAULT_BASE_URL);

    builder.rebuild(VERSION).unwrap();
    let first = fs::read(&paths.manifest_path).unwrap();
    builder.rebuild(VERSION).unwrap();
    let second = fs::read(&paths.manifest_path).unwrap();

    assert_eq!(first, second);
    // 非 ASCII 字元原樣寫出
    assert!(String::from_utf8(second).unwrap().contains("\"title\": \"桜\""));
}

/// 測試 3: manifest 無法解析時不寫入
#[test]
fn test_unparseable_manifest_is_untouched() {
    let broken = "{ \"videos\": [ ";
    let (_temp_dir, paths) = setup(&["bmw-drift.mkv"], broken);

    let err = CatalogBuilder::with_paths(paths.clone(), DEFAULT_BASE_URL)
        .rebuild(VERSION)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AssetError>(),
        Some(AssetError::Parse { .. })
    ));
    assert_eq!(fs::read_to_string(&paths.manifest_path).unwrap(), broken);
}

/// 測試 4: manifest 不存在時失敗
#[test]
fn test_missing_manifest_fails() {
    let (_temp_dir, paths) = setup(&["bmw-drift.mkv"], "{}");
    fs::remove_file(&paths.manifest_path).unwrap();

    let err = CatalogBuilder::with_paths(paths.clone(), DEFAULT_BASE_URL)
        .rebuild(VERSION)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AssetError>(),
        Some(AssetError::Io { .. })
    ));
    assert!(!paths.manifest_path.exists());
}

/// 測試 5: 影片資料夾不存在時失敗且不修改 manifest
#[test]
fn test_missing_video_folder_fails() {
    let temp_dir = TempDir::new().unwrap();
    let paths = AssetPaths::from_root(temp_dir.path());
    fs::write(&paths.manifest_path, r#"{"version":"old"}"#).unwrap();

    let result = CatalogBuilder::with_paths(paths.clone(), DEFAULT_BASE_URL).rebuild(VERSION);

    assert!(result.is_err());
    assert_eq!(read_json(&paths.manifest_path), json!({"version": "old"}));
}

/// 測試 6: 沒有影片時寫入空陣列並更新版本
#[test]
fn test_empty_folder_writes_empty_videos() {
    let (_temp_dir, paths) = setup(
        &[],
        r#"{"version":"2020.02.02","videos":[{"id":"vid-001"}]}"#,
    );

    let catalog = CatalogBuilder::with_paths(paths.clone(), DEFAULT_BASE_URL)
        .rebuild(VERSION)
        .unwrap();

    assert!(catalog.is_empty());
    assert_eq!(
        read_json(&paths.manifest_path),
        json!({"version": VERSION, "videos": []})
    );
}

/// 測試 7: run() 使用今天的日期作為版本號，設定檔的 base_url 會被採用
#[test]
fn test_run_with_config_stamps_today() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("video")).unwrap();
    fs::write(root.join("video/lake-dawn.mp4"), "video").unwrap();
    fs::write(root.join("wallpaper.json"), "{}").unwrap();
    fs::write(
        root.join("settings.json"),
        r#"{"base_url":"https://mirror.test"}"#,
    )
    .unwrap();

    let config = Config::from_root(root);
    let before = chrono::Local::now().format("%Y.%m.%d").to_string();
    CatalogBuilder::new(&config).run().unwrap();
    let after = chrono::Local::now().format("%Y.%m.%d").to_string();

    let manifest = read_json(&root.join("wallpaper.json"));
    let version = manifest["version"].as_str().unwrap();
    assert!(version == before || version == after);
    assert_eq!(
        manifest["videos"][0]["asset"],
        "https://mirror.test/video/lake-dawn.mp4"
    );
}
