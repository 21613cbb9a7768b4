//! 影片縮圖生成元件
//!
//! 每支影片擷取中間幀（`floor(總幀數 / 2)`）存成 `video/thumbnail/<stem>.jpg`

mod frame_extractor;
mod main;

pub use frame_extractor::{FfmpegFrameExtractor, FrameExtractor, middle_frame_index};
pub use main::{GenerationResult, ThumbnailGenerator};
