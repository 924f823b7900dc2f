//! ファイルI/O操作
//!
//! UTF-8テキストファイルの全体読み込みと全体書き込み

use crate::error::{FileError, Result};
use std::fs;
use std::path::Path;

/// パスが読み込み可能な通常ファイルであることを確認
pub fn ensure_readable_file(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| FileError::from_io(&e, path))?;

    if !metadata.is_file() {
        return Err(FileError::InvalidPath {
            path: path.display().to_string(),
        }
        .into());
    }

    // 権限チェックは実際に開いて確認する
    fs::File::open(path).map_err(|e| FileError::from_io(&e, path))?;
    Ok(())
}

/// ファイル内容を全て読み込む
pub fn read_file(path: &Path) -> Result<String> {
    ensure_readable_file(path)?;

    let content = fs::read_to_string(path).map_err(|e| FileError::from_io(&e, path))?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// ファイル全体を書き込む（既存の内容は切り詰めて上書き）
///
/// パスそのものへ書き込むため、シンボリックリンクはリンク先が更新され
/// デバイスファイルもそのまま残る。親ディレクトリは作成しない
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if path.is_dir() {
        return Err(FileError::InvalidPath {
            path: path.display().to_string(),
        }
        .into());
    }

    fs::write(path, content.as_bytes()).map_err(|e| FileError::from_io(&e, path))?;

    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdaptError;
    use tempfile::tempdir;

    #[test]
    fn test_write_and_read_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        let content = "Hello, World!\nこんにちは！";

        write_file(&file_path, content).unwrap();
        assert_eq!(read_file(&file_path).unwrap(), content);
    }

    #[test]
    fn test_write_replaces_existing_content() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("replace.txt");
        fs::write(&file_path, "a much longer original body").unwrap();

        write_file(&file_path, "short").unwrap();
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "short");

        // 余計なファイルは作らない
        let leftovers = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("missing.txt");

        match read_file(&file_path) {
            Err(AdaptError::File(FileError::NotFound { path })) => {
                assert!(path.ends_with("missing.txt"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_read_directory_is_rejected() {
        let temp_dir = tempdir().unwrap();
        assert!(matches!(
            read_file(temp_dir.path()),
            Err(AdaptError::File(FileError::InvalidPath { .. }))
        ));
    }

    #[test]
    fn test_read_invalid_utf8() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        fs::write(&file_path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

        assert!(matches!(
            read_file(&file_path),
            Err(AdaptError::File(FileError::Encoding { .. }))
        ));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("no").join("such").join("dir.txt");

        assert!(write_file(&file_path, "data").is_err());
        assert!(!file_path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_through_symlink_updates_target() {
        let temp_dir = tempdir().unwrap();
        let real = temp_dir.path().join("real.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_file(&link, "new").unwrap();

        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_to_device_keeps_device() {
        use std::os::unix::fs::FileTypeExt;

        let device = Path::new("/dev/null");
        write_file(device, "discarded").unwrap();
        assert!(fs::metadata(device).unwrap().file_type().is_char_device());
    }
}
