/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use fixsrt::errors::{AppError, FileOperation};
use fixsrt::file_utils::FileManager;
use crate::common;

/// Only names ending in the exact, case-sensitive suffix are selected
#[test]
fn test_find_files_withMixedNames_shouldMatchSuffixCaseSensitively() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "foo.srt", "")?;
    common::create_test_file(dir, "bar.txt", "")?;
    common::create_test_file(dir, "baz.SRT", "")?;

    let found = FileManager::find_files(dir, "srt")?;

    assert_eq!(found, vec![dir.join("foo.srt")]);
    Ok(())
}

/// The suffix check does not require a dot before the suffix
#[test]
fn test_find_files_withDotlessSuffixMatch_shouldSelectIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    common::create_test_file(dir, "transcriptsrt", "")?;
    common::create_test_file(dir, "a.srt.bak", "")?;

    let found = FileManager::find_files(dir, "srt")?;

    assert_eq!(found, vec![dir.join("transcriptsrt")]);
    Ok(())
}

/// Subdirectories are neither searched nor selected
#[test]
fn test_find_files_withSubdirectories_shouldOnlyListTopLevelFiles() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    fs::create_dir(dir.join("nested.srt"))?;
    fs::create_dir(dir.join("inner"))?;
    common::create_test_file(&dir.join("inner"), "deep.srt", "")?;
    common::create_test_file(dir, "b.srt", "")?;
    common::create_test_file(dir, "a.srt", "")?;

    let found = FileManager::find_files(dir, "srt")?;

    assert_eq!(found, vec![dir.join("a.srt"), dir.join("b.srt")]);
    Ok(())
}

/// A missing directory is reported as a directory read error
#[test]
fn test_find_files_withMissingDirectory_shouldReturnDirectoryReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("does_not_exist");

    let err = FileManager::find_files(&missing, "srt").unwrap_err();

    assert!(matches!(err, AppError::DirectoryRead { .. }));
    Ok(())
}

/// Backup path appends the suffix to the full file name
#[test]
fn test_backup_path_shouldAppendSuffix() {
    let backup = FileManager::backup_path(Path::new("/tmp/subs/movie.en.srt"), ".bak");
    assert_eq!(backup, Path::new("/tmp/subs/movie.en.srt.bak"));
}

/// Test dir_exists for files and directories
#[test]
fn test_dir_exists_withFileAndDir_shouldDistinguish() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let file = common::create_test_file(temp_dir.path(), "x.srt", "")?;

    assert!(FileManager::dir_exists(temp_dir.path()));
    assert!(!FileManager::dir_exists(&file));
    assert!(!FileManager::dir_exists(temp_dir.path().join("nope")));
    Ok(())
}

/// Backup moves the original and replaces an existing backup
#[tokio::test]
async fn test_backup_file_withExistingBackup_shouldOverwriteIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let dir = temp_dir.path();
    let original = common::create_test_file(dir, "a.srt", "new original")?;
    common::create_test_file(dir, "a.srt.bak", "stale backup")?;

    let backup = FileManager::backup_file(&original, ".bak").await?;

    assert_eq!(backup, dir.join("a.srt.bak"));
    assert!(!original.exists());
    assert_eq!(fs::read_to_string(&backup)?, "new original");
    Ok(())
}

/// Renaming a missing file fails with a rename error
#[tokio::test]
async fn test_backup_file_withMissingFile_shouldReturnRenameError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let missing = temp_dir.path().join("gone.srt");

    let err = FileManager::backup_file(&missing, ".bak").await.unwrap_err();

    assert!(matches!(err, AppError::FileIo { operation: FileOperation::Rename, .. }));
    Ok(())
}

/// Read and write round trip through the async helpers
#[tokio::test]
async fn test_write_then_read_shouldReturnSameContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("out.srt");

    FileManager::write_to_file(&path, "0\nT\ntext\n").await?;
    let content = FileManager::read_to_string(&path).await?;

    assert_eq!(content, "0\nT\ntext\n");
    Ok(())
}

/// Reading a missing file fails with a read error
#[tokio::test]
async fn test_read_to_string_withMissingFile_shouldReturnReadError() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let err = FileManager::read_to_string(temp_dir.path().join("none.srt")).await.unwrap_err();

    assert!(matches!(err, AppError::FileIo { operation: FileOperation::Read, .. }));
    Ok(())
}
