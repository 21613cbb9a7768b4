use crate::config::EncoderSettings;
use crate::error::AssetError;
use std::path::{Path, PathBuf};
use std::process::Command;

const FFMPEG: &str = "ffmpeg";

/// 外部轉檔能力
pub trait Transcoder {
    fn transcode(&self, input_path: &Path, output_path: &Path) -> Result<(), AssetError>;
}

/// 輸出一律為 `<output_folder>/<stem>.mp4`，與原始容器無關
#[must_use]
pub fn destination_path(source_path: &Path, output_folder: &Path) -> PathBuf {
    let file_stem = source_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    output_folder.join(format!("{file_stem}.mp4"))
}

pub struct FfmpegCommand<'a> {
    source_path: &'a Path,
    destination_path: &'a Path,
    settings: &'a EncoderSettings,
}

impl<'a> FfmpegCommand<'a> {
    #[must_use]
    pub const fn new(
        source_path: &'a Path,
        destination_path: &'a Path,
        settings: &'a EncoderSettings,
    ) -> Self {
        Self {
            source_path,
            destination_path,
            settings,
        }
    }

    #[must_use]
    pub fn build_command(&self) -> Command {
        let mut cmd = Command::new(FFMPEG);

        cmd.args(["-hwaccel", &self.settings.hwaccel]);
        cmd.arg("-i").arg(self.source_path);
        cmd.args([
            "-r",
            &self.settings.target_fps.to_string(),
            "-c:v",
            &self.settings.video_codec,
            "-cq",
            &self.settings.quality_cq.to_string(),
            "-preset",
            &self.settings.preset,
            "-c:a",
            &self.settings.audio_codec,
            "-b:a",
            &self.settings.audio_bitrate,
            "-y",
        ]);
        cmd.arg(self.destination_path);

        cmd
    }
}

/// 呼叫 ffmpeg（NVENC GPU 編碼）的轉檔器
#[derive(Debug, Clone, Default)]
pub struct FfmpegTranscoder {
    settings: EncoderSettings,
}

impl FfmpegTranscoder {
    #[must_use]
    pub const fn new(settings: EncoderSettings) -> Self {
        Self { settings }
    }
}

impl Transcoder for FfmpegTranscoder {
    fn transcode(&self, input_path: &Path, output_path: &Path) -> Result<(), AssetError> {
        let output = FfmpegCommand::new(input_path, output_path, &self.settings)
            .build_command()
            .output()
            .map_err(|e| AssetError::spawn(FFMPEG, &e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AssetError::ExternalTool {
                tool: FFMPEG.to_string(),
                message: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}
