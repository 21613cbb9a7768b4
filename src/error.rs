use std::path::PathBuf;
use thiserror::Error;

/// 素材處理錯誤
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("Could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {0} is not a JSON object")]
    InvalidManifest(PathBuf),

    #[error("{tool} failed: {message}")]
    ExternalTool { tool: String, message: String },

    #[error("{tool} not found. Please install FFmpeg and add it to PATH.")]
    ToolNotFound { tool: String },
}

impl AssetError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// 將 `Command` 啟動失敗轉換為錯誤，找不到程式時視為 `ToolNotFound`
    pub fn spawn(tool: &str, source: &std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::ToolNotFound {
                tool: tool.to_string(),
            }
        } else {
            Self::ExternalTool {
                tool: tool.to_string(),
                message: source.to_string(),
            }
        }
    }

    /// 是否應中止整批處理
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ToolNotFound { .. })
    }
}
