//! 影片重新編碼元件
//!
//! 使用 ffmpeg（CUDA 硬體加速 + NVENC）統一影片幀率與畫質，輸出為 mp4

mod ffmpeg_command;
mod main;

pub use ffmpeg_command::{FfmpegCommand, FfmpegTranscoder, Transcoder, destination_path};
pub use main::{EncodingTask, TaskStatus, VideoEncoder};
