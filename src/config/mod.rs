pub mod category;
pub mod load;
pub mod save;
pub mod types;

pub use category::{CATEGORY_KEYWORDS, Category, KeywordTable};
pub use types::{
    AssetPaths, Config, DEFAULT_BASE_URL, EncoderSettings, Language, MANIFEST_FILE_NAME,
    UserSettings, VIDEO_EXTENSIONS, is_video_file, thumbnail_file_name,
};
