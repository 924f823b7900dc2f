//! アプリケーションシェル
//!
//! 1画面分の状態機械。アダプター選択、ドキュメント本文、ステータス行、
//! モーダル通知、開いているファイルダイアログを保持する。
//!
//! 全ての失敗はここで通知に変換され、アプリケーションは使用を継続できる

use crate::adapter::AdapterKind;
use crate::dialog::{DialogPurpose, FileDialog};
use crate::editor::TextField;
use crate::error::{AdaptError, DialogError, Notice, Operation, Result};
use crate::file::directory_hint;
use std::path::Path;

/// シェルの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    NoAdapterSelected,
    AdapterSelected(AdapterKind),
}

/// アプリケーションシェル
#[derive(Debug, Default)]
pub struct Shell {
    /// 最後に読み込みに成功したアダプター
    adapter: Option<AdapterKind>,
    /// ドキュメント本文
    document: TextField,
    /// ステータス行
    status: String,
    /// 表示中の通知
    notice: Option<Notice>,
    /// 開いているダイアログ
    dialog: Option<FileDialog>,
    /// ダイアログ初期入力用のディレクトリヒント
    last_directory: Option<String>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ShellState {
        match self.adapter {
            Some(kind) => ShellState::AdapterSelected(kind),
            None => ShellState::NoAdapterSelected,
        }
    }

    pub fn adapter(&self) -> Option<AdapterKind> {
        self.adapter
    }

    pub fn document(&self) -> &TextField {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut TextField {
        &mut self.document
    }

    pub fn text(&self) -> &str {
        self.document.text()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dialog(&self) -> Option<&FileDialog> {
        self.dialog.as_ref()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut FileDialog> {
        self.dialog.as_mut()
    }

    /// 通知またはダイアログが入力を占有しているか
    pub fn is_modal(&self) -> bool {
        self.notice.is_some() || self.dialog.is_some()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// 読み込みボタン: 指定アダプターで開くダイアログを表示
    pub fn request_load(&mut self, kind: AdapterKind) -> Result<()> {
        self.open_dialog(DialogPurpose::Open(kind))
    }

    /// 保存ボタン: アダプター未選択なら通知のみで終了
    pub fn request_save(&mut self) -> Result<()> {
        match self.adapter {
            Some(kind) => self.open_dialog(DialogPurpose::Save(kind)),
            None => {
                log::info!("save requested before any adapter was selected");
                self.notice = Some(Notice::from_failure(
                    Operation::Save,
                    &AdaptError::NoAdapterSelected,
                ));
                Ok(())
            }
        }
    }

    fn open_dialog(&mut self, purpose: DialogPurpose) -> Result<()> {
        if self.is_modal() {
            return Err(DialogError::AlreadyOpen.into());
        }

        let mut dialog = FileDialog::new(purpose);
        if let Some(hint) = &self.last_directory {
            dialog = dialog.with_input(hint.clone());
        }
        log::debug!("dialog opened: {}", purpose.title());
        self.dialog = Some(dialog);
        Ok(())
    }

    /// ダイアログを閉じる（状態は変更しない）
    pub fn cancel_dialog(&mut self) -> Result<()> {
        self.dialog.take().ok_or(DialogError::NotOpen)?;
        log::debug!("dialog cancelled");
        Ok(())
    }

    /// ダイアログのパス補完
    pub fn complete_dialog(&mut self) -> Result<()> {
        let dialog = self.dialog.as_mut().ok_or(DialogError::NotOpen)?;
        let outcome = dialog.complete();
        log::debug!("path completion: {:?}", outcome);
        Ok(())
    }

    /// ダイアログを確定し、保留中の操作を実行
    ///
    /// 入力が空ならダイアログは開いたまま。操作の失敗は通知として表示する
    pub fn submit_dialog(&mut self) -> Result<()> {
        let dialog = self.dialog.as_ref().ok_or(DialogError::NotOpen)?;
        let purpose = dialog.purpose();

        let path = match dialog.resolve() {
            Ok(Some(path)) => path,
            Ok(None) => return Ok(()),
            Err(error) => {
                self.dialog = None;
                self.report_failure(Operation::from(purpose), &error);
                return Ok(());
            }
        };

        self.dialog = None;
        // 失敗は通知済み
        let _ = match purpose {
            DialogPurpose::Open(kind) => self.load(kind, &path),
            DialogPurpose::Save(_) => self.save(&path),
        };
        Ok(())
    }

    /// アダプターで読み込み、本文を置き換える
    ///
    /// 失敗時は本文とアダプター選択を変更せず通知を表示する
    pub fn load(&mut self, kind: AdapterKind, path: &Path) -> Result<()> {
        match kind.adapter().load(path) {
            Ok(text) => {
                self.document.set_text(text);
                self.adapter = Some(kind);
                self.status = format!("Loaded data from: {}", path.display());
                self.remember_directory(path);
                log::info!("loaded {} with {} adapter", path.display(), kind);
                Ok(())
            }
            Err(error) => {
                self.report_failure(Operation::Load, &error);
                Err(error)
            }
        }
    }

    /// 最後に選択されたアダプターで本文を保存する
    pub fn save(&mut self, path: &Path) -> Result<()> {
        let result = match self.adapter {
            Some(kind) => kind.adapter().save(self.document.text(), path),
            None => Err(AdaptError::NoAdapterSelected),
        };

        match result {
            Ok(()) => {
                self.status = format!("Data saved to: {}", path.display());
                self.remember_directory(path);
                log::info!("saved {} bytes to {}", self.document.text().len(), path.display());
                Ok(())
            }
            Err(error) => {
                self.report_failure(Operation::Save, &error);
                Err(error)
            }
        }
    }

    fn report_failure(&mut self, operation: Operation, error: &AdaptError) {
        log::warn!("{:?} failed: {}", operation, error);
        self.notice = Some(Notice::from_failure(operation, error));
    }

    fn remember_directory(&mut self, path: &Path) {
        self.last_directory = directory_hint(path);
    }

    /// ステータス行に表示する選択中アダプターの説明
    pub fn adapter_label(&self) -> String {
        match self.adapter {
            Some(kind) => format!("Adapter: {}", kind),
            None => "Adapter: (none)".to_string(),
        }
    }
}

impl From<DialogPurpose> for Operation {
    fn from(purpose: DialogPurpose) -> Self {
        match purpose {
            DialogPurpose::Open(_) => Operation::Load,
            DialogPurpose::Save(_) => Operation::Save,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NoticeLevel;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn starts_without_adapter() {
        let shell = Shell::new();
        assert_eq!(shell.state(), ShellState::NoAdapterSelected);
        assert!(shell.text().is_empty());
        assert!(shell.status().is_empty());
        assert!(!shell.is_modal());
    }

    #[test]
    fn save_without_adapter_only_notifies() {
        let mut shell = Shell::new();
        shell.request_save().unwrap();

        assert!(shell.dialog().is_none());
        let notice = shell.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.message, "No adapter selected. Please load a file first.");
    }

    #[test]
    fn request_is_rejected_while_modal() {
        let mut shell = Shell::new();
        shell.request_load(AdapterKind::Word).unwrap();
        assert!(matches!(
            shell.request_load(AdapterKind::Excel),
            Err(AdaptError::Dialog(DialogError::AlreadyOpen))
        ));
        assert_eq!(
            shell.dialog().unwrap().purpose(),
            DialogPurpose::Open(AdapterKind::Word)
        );
    }

    #[test]
    fn cancel_keeps_state() {
        let mut shell = Shell::new();
        shell.request_load(AdapterKind::PlainText).unwrap();
        shell.cancel_dialog().unwrap();

        assert_eq!(shell.state(), ShellState::NoAdapterSelected);
        assert!(shell.dialog().is_none());
        assert!(matches!(
            shell.cancel_dialog(),
            Err(AdaptError::Dialog(DialogError::NotOpen))
        ));
    }

    #[test]
    fn empty_submission_keeps_dialog_open() {
        let mut shell = Shell::new();
        shell.request_load(AdapterKind::PlainText).unwrap();
        shell.submit_dialog().unwrap();
        assert!(shell.dialog().is_some());
    }

    #[test]
    fn submit_loads_through_dialog() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memo.txt");
        fs::write(&path, "from disk").unwrap();

        let mut shell = Shell::new();
        shell.request_load(AdapterKind::PlainText).unwrap();
        shell
            .dialog_mut()
            .unwrap()
            .add_str(&path.display().to_string());
        shell.submit_dialog().unwrap();

        assert!(shell.dialog().is_none());
        assert_eq!(shell.text(), "from disk");
        assert_eq!(shell.state(), ShellState::AdapterSelected(AdapterKind::PlainText));
        assert_eq!(shell.status(), format!("Loaded data from: {}", path.display()));
    }

    #[test]
    fn next_dialog_starts_in_last_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("memo.txt");
        fs::write(&path, "x").unwrap();

        let mut shell = Shell::new();
        shell.load(AdapterKind::PlainText, &path).unwrap();
        shell.request_save().unwrap();

        let hint = shell.dialog().unwrap().input().to_string();
        assert!(hint.ends_with(std::path::MAIN_SEPARATOR));
        assert_eq!(
            shell.dialog().unwrap().purpose(),
            DialogPurpose::Save(AdapterKind::PlainText)
        );
    }

    #[test]
    fn failed_load_reports_and_keeps_document() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.txt");
        fs::write(&good, "keep me").unwrap();

        let mut shell = Shell::new();
        shell.load(AdapterKind::PlainText, &good).unwrap();

        let missing = dir.path().join("missing.doc");
        assert!(shell.load(AdapterKind::Word, &missing).is_err());

        assert_eq!(shell.text(), "keep me");
        assert_eq!(shell.adapter(), Some(AdapterKind::PlainText));
        let notice = shell.notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Error loading data: "));
    }

    #[test]
    fn save_failure_is_non_fatal() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source.txt");
        fs::write(&source, "body").unwrap();

        let mut shell = Shell::new();
        shell.load(AdapterKind::PlainText, &source).unwrap();

        let target = dir.path().join("missing-dir").join("out.txt");
        assert!(shell.save(&target).is_err());
        assert!(shell.notice().unwrap().message.starts_with("Error saving data: "));

        shell.dismiss_notice();
        assert!(!shell.is_modal());
        assert_eq!(shell.status(), format!("Loaded data from: {}", source.display()));
    }
}
