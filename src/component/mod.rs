//! 功能元件模組
//!
//! 三個工具彼此獨立，只透過資料夾慣例（影片 → 縮圖 → manifest）銜接

pub mod catalog_builder;
pub mod thumbnail_generator;
pub mod video_encoder;

pub use catalog_builder::CatalogBuilder;
pub use thumbnail_generator::ThumbnailGenerator;
pub use video_encoder::VideoEncoder;
