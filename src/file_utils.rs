use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use log::debug;

use crate::errors::{AppError, FileOperation};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// Find files directly inside `dir` whose name ends with `suffix`.
    ///
    /// The match is a plain, case-sensitive suffix check on the file name, so
    /// "srt" selects both `a.srt` and `transcriptsrt`. Subdirectories are not
    /// searched and matching directory names are skipped. Results are sorted
    /// by file name.
    pub fn find_files<P: AsRef<Path>>(dir: P, suffix: &str) -> Result<Vec<PathBuf>, AppError> {
        let dir = dir.as_ref();
        let mut result = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| AppError::DirectoryRead {
                path: dir.to_path_buf(),
                source: e.into(),
            })?;

            if !entry.path().is_file() {
                continue;
            }

            if entry.file_name().to_string_lossy().ends_with(suffix) {
                debug!("Selected {:?}", entry.path());
                result.push(entry.path().to_path_buf());
            }
        }

        Ok(result)
    }

    // @generates: Backup path by appending a suffix to the full file name
    pub fn backup_path<P: AsRef<Path>>(path: P, backup_suffix: &str) -> PathBuf {
        let mut name: OsString = path.as_ref().as_os_str().to_owned();
        name.push(backup_suffix);
        PathBuf::from(name)
    }

    /// Read a file to a string.
    ///
    /// Content that is not valid UTF-8 fails as a read error; nothing is
    /// converted or guessed.
    pub async fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String, AppError> {
        let path = path.as_ref();
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::file_io(path, FileOperation::Read, e))
    }

    /// Move the original file to its backup path, replacing any earlier backup
    pub async fn backup_file<P: AsRef<Path>>(path: P, backup_suffix: &str) -> Result<PathBuf, AppError> {
        let path = path.as_ref();
        let backup = Self::backup_path(path, backup_suffix);
        tokio::fs::rename(path, &backup)
            .await
            .map_err(|e| AppError::file_io(path, FileOperation::Rename, e))?;
        Ok(backup)
    }

    /// Write a string to a file, replacing its content
    pub async fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<(), AppError> {
        let path = path.as_ref();
        tokio::fs::write(path, content)
            .await
            .map_err(|e| AppError::file_io(path, FileOperation::Write, e))
    }
}
