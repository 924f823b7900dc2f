//! パス補完
//!
//! 入力の最後の区切り文字までをディレクトリとして展開し、その中のエントリを前方一致で絞り込む。
//! 候補は入力の書式（`~` や相対パス）を保ったまま返す

use crate::error::Result;
use crate::file::expand_path;
use std::fs;
use std::path::PathBuf;

/// パス補完エンジン
#[derive(Debug, Clone, Default)]
pub struct PathCompletion;

impl PathCompletion {
    pub fn new() -> Self {
        Self
    }

    /// 入力をディレクトリ部分（区切り文字込み）とファイル名の接頭辞に分割
    fn split_input(input: &str) -> (&str, &str) {
        match input.rfind(['/', '\\']) {
            Some(idx) => input.split_at(idx + 1),
            None => ("", input),
        }
    }

    fn directory_for(dir_part: &str) -> Result<PathBuf> {
        if dir_part.is_empty() {
            expand_path(".")
        } else {
            expand_path(dir_part)
        }
    }

    /// 補完候補を取得
    pub fn complete(&self, input: &str) -> Result<Vec<String>> {
        let (dir_part, prefix) = Self::split_input(input);
        let dir = Self::directory_for(dir_part)?;

        if !dir.is_dir() {
            return Ok(vec![]);
        }

        // 隠しファイルは接頭辞が '.' の場合に限り表示
        let include_hidden = prefix.starts_with('.');

        let mut candidates = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().to_string();

            if !include_hidden && name.starts_with('.') {
                continue;
            }
            if !name.starts_with(prefix) {
                continue;
            }

            let suffix = if entry.file_type()?.is_dir() { "/" } else { "" };
            candidates.push(format!("{}{}{}", dir_part, name, suffix));
        }

        candidates.sort();
        Ok(candidates)
    }

    /// 共通プレフィックスを取得
    pub fn common_prefix(candidates: &[String]) -> String {
        let Some(first) = candidates.first() else {
            return String::new();
        };

        let mut prefix_len = first.len();
        for candidate in &candidates[1..] {
            prefix_len = first
                .char_indices()
                .zip(candidate.chars())
                .take_while(|((_, a), b)| a == b)
                .map(|((idx, ch), _)| idx + ch.len_utf8())
                .last()
                .unwrap_or(0)
                .min(prefix_len);
        }

        first[..prefix_len].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_split_input() {
        assert_eq!(PathCompletion::split_input("docs/rep"), ("docs/", "rep"));
        assert_eq!(PathCompletion::split_input("docs/"), ("docs/", ""));
        assert_eq!(PathCompletion::split_input("file"), ("", "file"));
    }

    #[test]
    fn test_complete_lists_matching_entries() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("report1.docx"), "").unwrap();
        fs::write(root.join("report2.docx"), "").unwrap();
        fs::write(root.join("budget.xlsx"), "").unwrap();
        fs::write(root.join(".hidden"), "").unwrap();
        fs::create_dir(root.join("reports")).unwrap();

        let base = format!("{}/", root.display());
        let completion = PathCompletion::new();

        let candidates = completion.complete(&format!("{}rep", base)).unwrap();
        assert_eq!(
            candidates,
            vec![
                format!("{}report1.docx", base),
                format!("{}report2.docx", base),
                format!("{}reports/", base),
            ]
        );

        let all = completion.complete(&base).unwrap();
        assert_eq!(all.len(), 4);

        let hidden = completion.complete(&format!("{}.h", base)).unwrap();
        assert_eq!(hidden, vec![format!("{}.hidden", base)]);
    }

    #[test]
    fn test_complete_in_missing_directory() {
        let temp_dir = tempdir().unwrap();
        let input = format!("{}/absent/fi", temp_dir.path().display());
        assert!(PathCompletion::new().complete(&input).unwrap().is_empty());
    }

    #[test]
    fn test_common_prefix() {
        let candidates = vec!["prefix_file1.txt".to_string(), "prefix_file2.txt".to_string()];
        assert_eq!(PathCompletion::common_prefix(&candidates), "prefix_file");

        let single = vec!["single.txt".to_string()];
        assert_eq!(PathCompletion::common_prefix(&single), "single.txt");

        assert_eq!(PathCompletion::common_prefix(&[]), "");

        let multibyte = vec!["資料a".to_string(), "資料b".to_string()];
        assert_eq!(PathCompletion::common_prefix(&multibyte), "資料");
    }
}
