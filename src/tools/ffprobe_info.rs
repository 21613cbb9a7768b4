use crate::error::AssetError;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

const FFPROBE: &str = "ffprobe";

#[derive(Deserialize)]
struct FfprobeOutput {
    streams: Option<Vec<StreamInfo>>,
}

#[derive(Deserialize)]
struct StreamInfo {
    nb_frames: Option<String>,
    nb_read_frames: Option<String>,
}

impl StreamInfo {
    fn frame_count(&self) -> Option<u64> {
        self.nb_frames
            .as_deref()
            .and_then(parse_frame_count)
            .or_else(|| self.nb_read_frames.as_deref().and_then(parse_frame_count))
    }
}

/// 使用 ffprobe 取得第一條視訊串流的總幀數
///
/// 先讀取容器標頭的 `nb_frames`；部分容器（如 webm/mkv）沒有此欄位，
/// 此時改用 `-count_frames` 實際解碼計數
pub fn get_frame_count(path: &Path) -> Result<u64, AssetError> {
    if let Some(count) = probe_frames(path, false)? {
        return Ok(count);
    }
    Ok(probe_frames(path, true)?.unwrap_or(0))
}

fn probe_frames(path: &Path, count_frames: bool) -> Result<Option<u64>, AssetError> {
    let mut cmd = Command::new(FFPROBE);
    cmd.args(["-v", "error", "-select_streams", "v:0"]);
    if count_frames {
        cmd.arg("-count_frames");
    }
    cmd.args([
        "-show_entries",
        "stream=nb_frames,nb_read_frames",
        "-print_format",
        "json",
    ])
    .arg(path);

    let output = cmd.output().map_err(|e| AssetError::spawn(FFPROBE, &e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AssetError::Decode {
            path: path.to_path_buf(),
            message: format!("ffprobe: {}", stderr.trim()),
        });
    }

    let probe: FfprobeOutput =
        serde_json::from_slice(&output.stdout).map_err(|e| AssetError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(probe
        .streams
        .as_deref()
        .and_then(<[StreamInfo]>::first)
        .and_then(StreamInfo::frame_count))
}

/// 解析幀數字串，ffprobe 無法取得時會輸出 "N/A"
fn parse_frame_count(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}
