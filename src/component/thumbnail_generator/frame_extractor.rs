use crate::error::AssetError;
use crate::tools::get_frame_count;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const FFMPEG: &str = "ffmpeg";

/// 影片解碼能力：取得幀數、擷取指定幀為 JPG
///
/// 每次呼叫各自開啟並釋放解碼資源，不在檔案之間共用任何 handle
pub trait FrameExtractor {
    fn frame_count(&self, video_path: &Path) -> Result<u64, AssetError>;

    fn extract_frame(
        &self,
        video_path: &Path,
        frame_index: u64,
        output_path: &Path,
    ) -> Result<(), AssetError>;
}

#[must_use]
pub const fn middle_frame_index(total_frames: u64) -> u64 {
    total_frames / 2
}

/// 以 ffprobe/ffmpeg 子行程實作的擷取器
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegFrameExtractor;

impl FfmpegFrameExtractor {
    fn build_args(video_path: &Path, frame_index: u64, output_path: &Path) -> Vec<String> {
        vec![
            "-hide_banner".to_string(),
            "-nostdin".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-i".to_string(),
            video_path.to_string_lossy().to_string(),
            "-vf".to_string(),
            format!(r"select=eq(n\,{frame_index})"),
            "-frames:v".to_string(),
            "1".to_string(),
            "-update".to_string(),
            "1".to_string(),
            "-an".to_string(),
            "-sn".to_string(),
            "-dn".to_string(),
            "-q:v".to_string(),
            "2".to_string(),
            "-y".to_string(),
            output_path.to_string_lossy().to_string(),
        ]
    }
}

impl FrameExtractor for FfmpegFrameExtractor {
    fn frame_count(&self, video_path: &Path) -> Result<u64, AssetError> {
        get_frame_count(video_path)
    }

    fn extract_frame(
        &self,
        video_path: &Path,
        frame_index: u64,
        output_path: &Path,
    ) -> Result<(), AssetError> {
        debug!(
            "Extracting frame {frame_index} from {} to {}",
            video_path.display(),
            output_path.display()
        );

        // 先寫到暫存檔，擷取成功才覆蓋舊縮圖；失敗時舊縮圖保持不變
        let temp_path = temp_output_path(output_path);
        remove_if_exists(&temp_path)?;

        let output = Command::new(FFMPEG)
            .args(Self::build_args(video_path, frame_index, &temp_path))
            .output()
            .map_err(|e| AssetError::spawn(FFMPEG, &e))?;

        if !output.status.success() {
            remove_if_exists(&temp_path)?;
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AssetError::Decode {
                path: video_path.to_path_buf(),
                message: stderr.trim().to_string(),
            });
        }

        // select 濾鏡找不到該幀時 ffmpeg 仍會正常結束但不輸出任何檔案
        if !temp_path.exists() {
            return Err(AssetError::Decode {
                path: video_path.to_path_buf(),
                message: format!("frame {frame_index} could not be read"),
            });
        }

        fs::rename(&temp_path, output_path).map_err(|e| AssetError::io(output_path, e))?;

        Ok(())
    }
}

/// `<stem>.jpg` 的暫存檔 `<stem>.tmp.jpg`，副檔名不變以便 ffmpeg 判斷輸出格式
fn temp_output_path(output_path: &Path) -> PathBuf {
    let extension = output_path
        .extension()
        .map(|ext| format!("tmp.{}", ext.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    output_path.with_extension(extension)
}

fn remove_if_exists(path: &Path) -> Result<(), AssetError> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(AssetError::io(path, e)),
        _ => Ok(()),
    }
}
