//! ファイルダイアログ
//!
//! 開く／保存先を選ぶモーダルなパス入力。補完機能付き

pub mod completion;

pub use completion::PathCompletion;

use crate::adapter::AdapterKind;
use crate::error::Result;
use crate::file::expand_path;
use std::path::PathBuf;

/// ダイアログの用途
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPurpose {
    /// 指定アダプターで開く
    Open(AdapterKind),
    /// 選択中のアダプターで保存
    Save(AdapterKind),
}

impl DialogPurpose {
    pub fn title(self) -> String {
        match self {
            DialogPurpose::Open(kind) => format!("Open ({})", kind),
            DialogPurpose::Save(kind) => format!("Save As ({})", kind),
        }
    }
}

/// 補完の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// 候補なし
    NoMatch,
    /// 入力が延長された
    Extended,
    /// 候補が複数あり、これ以上延長できない
    Ambiguous,
}

/// ファイルダイアログの状態
#[derive(Debug, Clone)]
pub struct FileDialog {
    purpose: DialogPurpose,
    input: String,
    candidates: Vec<String>,
    /// 直近の補完で候補が見つからなかった
    no_match: bool,
    completion: PathCompletion,
}

impl FileDialog {
    pub fn new(purpose: DialogPurpose) -> Self {
        Self {
            purpose,
            input: String::new(),
            candidates: Vec::new(),
            no_match: false,
            completion: PathCompletion::new(),
        }
    }

    /// 初期入力付きで作成
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }

    pub fn purpose(&self) -> DialogPurpose {
        self.purpose
    }

    pub fn title(&self) -> String {
        self.purpose.title()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// 直近の補完で表示する候補
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// 補完候補が見つからなかったことを表示するか
    pub fn no_match(&self) -> bool {
        self.no_match
    }

    pub fn add_char(&mut self, ch: char) {
        self.input.push(ch);
        self.reset_completion();
    }

    pub fn add_str(&mut self, s: &str) {
        self.input
            .extend(s.chars().filter(|ch| *ch != '\n' && *ch != '\r'));
        self.reset_completion();
    }

    pub fn backspace(&mut self) -> bool {
        self.reset_completion();
        self.input.pop().is_some()
    }

    fn reset_completion(&mut self) {
        self.candidates.clear();
        self.no_match = false;
    }

    /// 補完を実行
    ///
    /// ディレクトリを列挙できない場合は候補なしとして扱う
    pub fn complete(&mut self) -> CompletionOutcome {
        let candidates = match self.completion.complete(&self.input) {
            Ok(candidates) => candidates,
            Err(error) => {
                log::debug!("path completion failed: {}", error);
                Vec::new()
            }
        };
        self.reset_completion();

        match candidates.len() {
            0 => {
                self.no_match = true;
                CompletionOutcome::NoMatch
            }
            1 => {
                self.input = candidates[0].clone();
                CompletionOutcome::Extended
            }
            _ => {
                let common = PathCompletion::common_prefix(&candidates);
                if common.len() > self.input.len() {
                    self.input = common;
                    CompletionOutcome::Extended
                } else {
                    self.candidates = candidates;
                    CompletionOutcome::Ambiguous
                }
            }
        }
    }

    /// 入力を確定してパスを得る。空入力なら `None`
    pub fn resolve(&self) -> Result<Option<PathBuf>> {
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        expand_path(trimmed).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_titles_name_the_adapter() {
        assert_eq!(DialogPurpose::Open(AdapterKind::Excel).title(), "Open (Excel)");
        assert_eq!(
            DialogPurpose::Save(AdapterKind::PlainText).title(),
            "Save As (Plain Text)"
        );
    }

    #[test]
    fn test_input_editing() {
        let mut dialog = FileDialog::new(DialogPurpose::Open(AdapterKind::Word));
        dialog.add_char('a');
        dialog.add_str("b\nc");
        assert_eq!(dialog.input(), "abc");

        assert!(dialog.backspace());
        assert_eq!(dialog.input(), "ab");
    }

    #[test]
    fn test_empty_input_resolves_to_none() {
        let dialog = FileDialog::new(DialogPurpose::Save(AdapterKind::Word)).with_input("   ");
        assert_eq!(dialog.resolve().unwrap(), None);
    }

    #[test]
    fn test_complete_single_and_ambiguous() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("alpha.txt"), "").unwrap();
        fs::write(root.join("beta1.txt"), "").unwrap();
        fs::write(root.join("beta2.txt"), "").unwrap();
        let base = format!("{}/", root.display());

        let mut dialog = FileDialog::new(DialogPurpose::Open(AdapterKind::PlainText))
            .with_input(format!("{}al", base));
        assert_eq!(dialog.complete(), CompletionOutcome::Extended);
        assert_eq!(dialog.input(), format!("{}alpha.txt", base));

        let mut dialog = FileDialog::new(DialogPurpose::Open(AdapterKind::PlainText))
            .with_input(format!("{}b", base));
        assert_eq!(dialog.complete(), CompletionOutcome::Extended);
        assert_eq!(dialog.input(), format!("{}beta", base));

        assert_eq!(dialog.complete(), CompletionOutcome::Ambiguous);
        assert_eq!(dialog.candidates().len(), 2);

        dialog.add_char('2');
        assert!(dialog.candidates().is_empty());

        let mut dialog = FileDialog::new(DialogPurpose::Open(AdapterKind::PlainText))
            .with_input(format!("{}zzz", base));
        assert_eq!(dialog.complete(), CompletionOutcome::NoMatch);
        assert!(dialog.no_match());

        dialog.backspace();
        assert!(!dialog.no_match());
    }

    #[test]
    fn test_complete_in_missing_directory_is_no_match() {
        let temp_dir = tempdir().unwrap();
        let input = format!("{}/missing/fi", temp_dir.path().display());
        let mut dialog = FileDialog::new(DialogPurpose::Save(AdapterKind::Word)).with_input(input);

        assert_eq!(dialog.complete(), CompletionOutcome::NoMatch);
        assert!(dialog.candidates().is_empty());
    }

    #[test]
    fn test_resolve_expands_path() {
        let temp_dir = tempdir().unwrap();
        let input = format!("{}/doc.txt", temp_dir.path().display());
        let dialog = FileDialog::new(DialogPurpose::Open(AdapterKind::Word)).with_input(input);

        assert_eq!(
            dialog.resolve().unwrap(),
            Some(temp_dir.path().join("doc.txt"))
        );
    }
}
