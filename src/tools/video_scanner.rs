use crate::config::is_video_file;
use crate::error::AssetError;
use crate::tools::validate_directory_exists;
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFileInfo {
    pub path: PathBuf,
    /// 含副檔名的檔名
    pub file_name: String,
}

/// 列出資料夾第一層中可辨識的影片檔（不遞迴，不含子資料夾如 thumbnail）
///
/// 依檔名排序，讓每次執行的處理順序一致
pub fn scan_video_files(directory: &Path) -> Result<Vec<VideoFileInfo>, AssetError> {
    validate_directory_exists(directory)?;

    let mut video_files = Vec::new();
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // 根目錄本身讀不到才是致命錯誤
            Err(e) if e.depth() == 0 => return Err(walk_error(directory, e)),
            // 其餘如斷掉的符號連結，只略過該項目
            Err(e) => {
                warn!("Skipping unreadable entry: {e}");
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_video_file(entry.path()) {
            continue;
        }

        // 非 UTF-8 檔名無法寫進 JSON 網址，直接略過
        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            warn!("Skipping non UTF-8 file name: {}", entry.path().display());
            continue;
        };

        video_files.push(VideoFileInfo {
            path: entry.into_path(),
            file_name,
        });
    }

    video_files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(video_files)
}

fn walk_error(directory: &Path, e: walkdir::Error) -> AssetError {
    let path = e.path().unwrap_or(directory).to_path_buf();
    let source = e
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    AssetError::io(path, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_filters_extensions_and_subfolders() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::write(base.join("sakura-field.mov"), "v").unwrap();
        fs::write(base.join("Zenitsu-Run.MP4"), "v").unwrap();
        fs::write(base.join("notes.txt"), "t").unwrap();
        fs::create_dir(base.join("thumbnail")).unwrap();
        fs::write(base.join("thumbnail/sakura-field.jpg"), "i").unwrap();
        fs::create_dir(base.join("folder.mp4")).unwrap();

        let files = scan_video_files(base).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();

        assert_eq!(names, ["Zenitsu-Run.MP4", "sakura-field.mov"]);
        assert_eq!(files[1].path, base.join("sakura-field.mov"));
    }

    #[test]
    fn test_scan_missing_folder_fails() {
        let temp_dir = TempDir::new().unwrap();
        let result = scan_video_files(&temp_dir.path().join("video"));
        assert!(matches!(result, Err(AssetError::Io { .. })));
    }

    #[test]
    fn test_scan_empty_folder() {
        let temp_dir = TempDir::new().unwrap();
        assert!(scan_video_files(temp_dir.path()).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_scan_skips_dangling_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::write(base.join("bmw-drift.mkv"), "v").unwrap();
        fs::write(base.join("lake.mp4"), "v").unwrap();
        std::os::unix::fs::symlink("/nonexistent/x.mp4", base.join("dead.mp4")).unwrap();
        std::os::unix::fs::symlink(base.join("lake.mp4"), base.join("lake-link.mp4")).unwrap();

        let files = scan_video_files(base).unwrap();
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();

        assert_eq!(names, ["bmw-drift.mkv", "lake-link.mp4", "lake.mp4"]);
    }

    #[test]
    fn test_walk_error_keeps_io_source() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing-video-folder");
        let e = WalkDir::new(&missing).into_iter().next().unwrap().unwrap_err();

        let err = walk_error(&missing, e);

        let AssetError::Io { path, source } = &err else {
            panic!("expected Io error, got {err:?}");
        };
        assert_eq!(path, &missing);
        assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        // 路徑只出現一次
        assert_eq!(err.to_string().matches("missing-video-folder").count(), 1);
    }
}
