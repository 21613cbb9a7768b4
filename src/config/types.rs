use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// 可辨識的影片副檔名（不分大小寫）
pub const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "avi", "mkv", "mov", "wmv", "webm"];

pub const DEFAULT_BASE_URL: &str = "https://buildwithkt.dev/extensions/themes+/assets";

pub const VIDEO_FOLDER_NAME: &str = "video";
pub const THUMBNAIL_FOLDER_NAME: &str = "thumbnail";
pub const OUTPUT_FOLDER_NAME: &str = "testExport";
pub const MANIFEST_FILE_NAME: &str = "wallpaper.json";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// 以檔名結尾比對，所以只叫 `.mp4` 的檔案也算影片
#[must_use]
pub fn is_video_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.to_string_lossy().to_lowercase();
        VIDEO_EXTENSIONS
            .iter()
            .any(|ext| name.strip_suffix(ext).is_some_and(|rest| rest.ends_with('.')))
    })
}

/// 影片 `<stem>.<ext>` 的縮圖檔名一律為 `<stem>.jpg`
#[must_use]
pub fn thumbnail_file_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    format!("{stem}.jpg")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "zh-TW")]
    ZhTw,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::EnUs, Self::ZhTw];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::ZhTw => "zh-TW",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnUs => write!(f, "English"),
            Self::ZhTw => write!(f, "繁體中文"),
        }
    }
}

/// 重新編碼參數（NVENC 固定品質模式）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderSettings {
    pub target_fps: u32,
    /// NVENC CQ 值，0-51，越低品質越好
    pub quality_cq: u32,
    pub hwaccel: String,
    pub video_codec: String,
    pub preset: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            target_fps: 24,
            quality_cq: 20,
            hwaccel: "cuda".to_string(),
            video_codec: "h264_nvenc".to_string(),
            preset: "p4".to_string(),
            audio_codec: "aac".to_string(),
            audio_bitrate: "128k".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    pub language: Language,
    pub base_url: String,
    /// 相對於根目錄的輸出資料夾，未設定時使用 `testExport`
    pub output_folder: Option<PathBuf>,
    pub encoder: EncoderSettings,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            output_folder: None,
            encoder: EncoderSettings::default(),
        }
    }
}

/// 三個工具共用的資料夾配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub video_folder: PathBuf,
    pub thumbnail_folder: PathBuf,
    pub output_folder: PathBuf,
    pub manifest_path: PathBuf,
}

impl AssetPaths {
    /// `<root>/video`, `<root>/video/thumbnail`, `<root>/testExport`, `<root>/wallpaper.json`
    #[must_use]
    pub fn from_root(root: &Path) -> Self {
        let video_folder = root.join(VIDEO_FOLDER_NAME);
        Self {
            thumbnail_folder: video_folder.join(THUMBNAIL_FOLDER_NAME),
            video_folder,
            output_folder: root.join(OUTPUT_FOLDER_NAME),
            manifest_path: root.join(MANIFEST_FILE_NAME),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub paths: AssetPaths,
    pub settings: UserSettings,
}
