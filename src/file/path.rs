//! パス処理ユーティリティ
//!
//! ダイアログに入力されたパスの展開と表示用の短縮

use crate::error::{AdaptError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// パス展開の便利関数
///
/// `~` と `$VAR` を展開し、相対パスはカレントディレクトリ基準の絶対パスにする
pub fn expand_path(input: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(input)
        .map_err(|e| AdaptError::Path(format!("cannot expand '{}': {}", input, e)))?;

    let path = PathBuf::from(expanded.as_ref());
    if path.is_absolute() {
        return Ok(path);
    }

    let current_dir = env::current_dir()
        .map_err(|e| AdaptError::Path(format!("current directory unavailable: {}", e)))?;
    Ok(current_dir.join(path))
}

/// ホームディレクトリ配下のパスを `~` で短縮
pub fn format_for_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            if relative.as_os_str().is_empty() {
                return "~".to_string();
            }
            return format!("~{}{}", std::path::MAIN_SEPARATOR, relative.display());
        }
    }
    path.display().to_string()
}

/// ダイアログの初期入力に使うディレクトリ文字列（末尾区切り付き）
pub fn directory_hint(path: &Path) -> Option<String> {
    let parent = path.parent()?;
    if parent.as_os_str().is_empty() {
        return None;
    }
    let mut hint = format_for_display(parent);
    if !hint.ends_with(std::path::MAIN_SEPARATOR) {
        hint.push(std::path::MAIN_SEPARATOR);
    }
    Some(hint)
}
