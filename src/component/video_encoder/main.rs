use super::ffmpeg_command::{FfmpegTranscoder, Transcoder, destination_path};
use crate::config::{AssetPaths, Config, EncoderSettings};
use crate::error::AssetError;
use crate::tools::{VideoFileInfo, ensure_directory_exists, scan_video_files};
use anyhow::{Context, Result};
use console::style;
use log::{error, info, warn};
use rust_i18n::t;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug)]
pub struct EncodingTask {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub status: TaskStatus,
    pub error_message: Option<String>,
}

impl EncodingTask {
    #[must_use]
    pub fn new(video: &VideoFileInfo, output_folder: &std::path::Path) -> Self {
        Self {
            source_path: video.path.clone(),
            destination_path: destination_path(&video.path, output_folder),
            status: TaskStatus::Pending,
            error_message: None,
        }
    }
}

/// 將影片資料夾中的影片逐一重新編碼到輸出資料夾
pub struct VideoEncoder<T = FfmpegTranscoder> {
    paths: AssetPaths,
    settings: EncoderSettings,
    transcoder: T,
    shutdown_signal: Arc<AtomicBool>,
}

impl VideoEncoder {
    #[must_use]
    pub fn new(config: &Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        let settings = config.settings.encoder.clone();
        Self::with_transcoder(
            config.paths.clone(),
            settings.clone(),
            FfmpegTranscoder::new(settings),
            shutdown_signal,
        )
    }
}

impl<T: Transcoder> VideoEncoder<T> {
    pub const fn with_transcoder(
        paths: AssetPaths,
        settings: EncoderSettings,
        transcoder: T,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            paths,
            settings,
            transcoder,
            shutdown_signal,
        }
    }

    /// 處理全部影片，回傳每支影片的任務狀態
    pub fn run(&self) -> Result<Vec<EncodingTask>> {
        let video_files = scan_video_files(&self.paths.video_folder).with_context(|| {
            format!(
                "Failed to list video folder {}",
                self.paths.video_folder.display()
            )
        })?;
        ensure_directory_exists(&self.paths.output_folder)?;

        println!(
            "{}",
            style(t!("batch.found", count = video_files.len())).green()
        );
        println!(
            "{}",
            t!(
                "encoder.output_folder",
                folder = self.paths.output_folder.display()
            )
        );
        println!(
            "{}",
            style(t!(
                "encoder.settings",
                fps = self.settings.target_fps,
                cq = self.settings.quality_cq,
                codec = self.settings.video_codec
            ))
            .dim()
        );
        println!("{}", "-".repeat(50));

        let mut tasks: Vec<EncodingTask> = video_files
            .iter()
            .map(|video| EncodingTask::new(video, &self.paths.output_folder))
            .collect();

        for task in &mut tasks {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("Shutdown requested, remaining videos left pending");
                println!("{}", style(t!("batch.interrupted")).yellow());
                break;
            }
            self.encode_task(task)?;
        }

        println!("{}", "-".repeat(50));
        self.print_summary(&tasks);

        Ok(tasks)
    }

    /// 只處理影片資料夾中的單一檔案
    ///
    /// 找不到輸入檔時回傳 `Failed` 任務而非錯誤
    pub fn process_single_video(&self, filename: &str) -> Result<EncodingTask> {
        let source_path = self.paths.video_folder.join(filename);
        ensure_directory_exists(&self.paths.output_folder)?;

        let mut task = EncodingTask {
            destination_path: destination_path(&source_path, &self.paths.output_folder),
            source_path,
            status: TaskStatus::Pending,
            error_message: None,
        };

        if !task.source_path.is_file() {
            let message = t!("encoder.not_found", path = task.source_path.display()).to_string();
            println!("{} {}", style("✗").red(), message);
            task.status = TaskStatus::Failed;
            task.error_message = Some(message);
            return Ok(task);
        }

        self.encode_task(&mut task)?;
        Ok(task)
    }

    /// 單一檔案失敗只記錄在任務上；找不到 ffmpeg 則回傳錯誤中止整批
    fn encode_task(&self, task: &mut EncodingTask) -> Result<()> {
        let name = task
            .source_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        println!("{}", t!("encoder.processing", name = &name));

        match self
            .transcoder
            .transcode(&task.source_path, &task.destination_path)
        {
            Ok(()) => {
                let output_name = task
                    .destination_path
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy();
                println!(
                    "  {} {}",
                    style("✓").green(),
                    t!("encoder.success", name = output_name)
                );
                info!(
                    "Encoded {} -> {}",
                    task.source_path.display(),
                    task.destination_path.display()
                );
                task.status = TaskStatus::Completed;
                Ok(())
            }
            Err(e @ AssetError::ToolNotFound { .. }) => {
                error!("{e}");
                task.status = TaskStatus::Failed;
                task.error_message = Some(e.to_string());
                Err(e.into())
            }
            Err(e) => {
                error!("Encoding failed for {name}: {e}");
                println!(
                    "  {} {}",
                    style("✗").red(),
                    t!("batch.error", message = &e)
                );
                task.status = TaskStatus::Failed;
                task.error_message = Some(e.to_string());
                Ok(())
            }
        }
    }

    fn print_summary(&self, tasks: &[EncodingTask]) {
        let completed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        let failed = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Failed)
            .count();

        println!(
            "{}",
            style(t!(
                "batch.completed",
                success = completed,
                total = tasks.len()
            ))
            .cyan()
            .bold()
        );
        if failed > 0 {
            println!("  {}", style(t!("batch.failed", count = failed)).red());
        }

        info!("Encoding finished - success: {completed}, failed: {failed}");
    }
}
