use crate::error::AssetError;
use std::io::{Error, ErrorKind};
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<(), AssetError> {
    if !path.exists() {
        return Err(AssetError::io(
            path,
            Error::new(ErrorKind::NotFound, "folder does not exist"),
        ));
    }
    if !path.is_dir() {
        return Err(AssetError::io(
            path,
            Error::new(ErrorKind::InvalidInput, "path is not a folder"),
        ));
    }
    Ok(())
}

pub fn ensure_directory_exists(path: &Path) -> Result<(), AssetError> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| AssetError::io(path, e))?;
    }
    Ok(())
}
