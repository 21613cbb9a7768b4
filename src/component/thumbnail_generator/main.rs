use super::frame_extractor::{FfmpegFrameExtractor, FrameExtractor, middle_frame_index};
use crate::config::{AssetPaths, Config, thumbnail_file_name};
use crate::error::AssetError;
use crate::tools::{VideoFileInfo, ensure_directory_exists, scan_video_files};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rust_i18n::t;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 縮圖生成結果
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerationResult {
    pub total_videos: usize,
    pub successful: usize,
    pub failed: usize,
}

/// 為每支影片擷取中間幀作為 `<thumbnail>/<stem>.jpg`
pub struct ThumbnailGenerator<E = FfmpegFrameExtractor> {
    paths: AssetPaths,
    extractor: E,
    shutdown_signal: Arc<AtomicBool>,
}

impl ThumbnailGenerator {
    #[must_use]
    pub fn new(config: &Config, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self::with_extractor(config.paths.clone(), FfmpegFrameExtractor, shutdown_signal)
    }
}

impl<E: FrameExtractor> ThumbnailGenerator<E> {
    pub const fn with_extractor(
        paths: AssetPaths,
        extractor: E,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            paths,
            extractor,
            shutdown_signal,
        }
    }

    pub fn run(&self) -> Result<GenerationResult> {
        let video_files = scan_video_files(&self.paths.video_folder).with_context(|| {
            format!(
                "Failed to list video folder {}",
                self.paths.video_folder.display()
            )
        })?;
        ensure_directory_exists(&self.paths.thumbnail_folder)?;

        println!(
            "{}",
            style(t!("batch.found", count = video_files.len())).green()
        );

        let result = self.process_videos(&video_files)?;

        self.print_summary(&result);

        Ok(result)
    }

    fn process_videos(&self, videos: &[VideoFileInfo]) -> Result<GenerationResult> {
        let mut result = GenerationResult {
            total_videos: videos.len(),
            ..GenerationResult::default()
        };

        let progress_bar = ProgressBar::new(videos.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );

        for video in videos {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                warn!("Shutdown requested, stopping before {}", video.file_name);
                progress_bar.abandon_with_message(t!("batch.interrupted").to_string());
                break;
            }

            progress_bar.set_message(video.file_name.clone());

            match self.process_single_video(video) {
                Ok(output_path) => {
                    let name = output_path.file_name().unwrap_or_default().to_string_lossy();
                    progress_bar.println(format!(
                        "  {} {}",
                        style("✓").green(),
                        t!("thumbnail.created", name = name)
                    ));
                    result.successful += 1;
                }
                Err(e) if e.is_fatal() => {
                    progress_bar.abandon();
                    return Err(e.into());
                }
                Err(e) => {
                    error!("Thumbnail failed for {}: {e}", video.file_name);
                    progress_bar.println(format!(
                        "  {} {}",
                        style("✗").red(),
                        t!("batch.error", message = e)
                    ));
                    result.failed += 1;
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        Ok(result)
    }

    fn process_single_video(&self, video: &VideoFileInfo) -> Result<PathBuf, AssetError> {
        let output_path = self
            .paths
            .thumbnail_folder
            .join(thumbnail_file_name(&video.file_name));

        let total_frames = self.extractor.frame_count(&video.path)?;
        if total_frames == 0 {
            return Err(AssetError::Decode {
                path: video.path.clone(),
                message: "no frames".to_string(),
            });
        }

        let frame_index = middle_frame_index(total_frames);
        self.extractor
            .extract_frame(&video.path, frame_index, &output_path)?;

        info!(
            "Thumbnail created: {} (frame {frame_index}/{total_frames})",
            output_path.display()
        );
        Ok(output_path)
    }

    fn print_summary(&self, result: &GenerationResult) {
        println!();
        println!(
            "{}",
            style(t!(
                "thumbnail.done",
                folder = self.paths.thumbnail_folder.display()
            ))
            .cyan()
            .bold()
        );
        println!(
            "  {}",
            t!(
                "batch.completed",
                success = result.successful,
                total = result.total_videos
            )
        );
        if result.failed > 0 {
            println!(
                "  {}",
                style(t!("batch.failed", count = result.failed)).red()
            );
        }

        info!(
            "Thumbnail generation finished - success: {}, failed: {}",
            result.successful, result.failed
        );
    }
}
