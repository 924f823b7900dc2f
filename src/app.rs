//! メインアプリケーション構造体
//!
//! シェル・フォーカス・キーマップを束ね、入力イベントを画面操作として実行する。
//! 端末には依存しないため、フロントエンド無しでテストできる

use crate::error::Result;
use crate::input::{Action, Button, DialogAction, EditAction, Focus, InputContext, KeyMap};
use crate::shell::Shell;
use crossterm::event::KeyEvent;

/// メインアプリケーション構造体
pub struct App {
    /// アプリケーション実行状態
    running: bool,
    /// 画面の状態機械
    shell: Shell,
    /// 現在のフォーカス
    focus: Focus,
    /// キーマップ
    keymap: KeyMap,
}

impl App {
    /// 新しいアプリケーションインスタンスを作成
    pub fn new() -> Self {
        Self {
            running: true,
            shell: Shell::new(),
            focus: Focus::default(),
            keymap: KeyMap::new(),
        }
    }

    /// アプリケーションが実行中かどうか
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// アプリケーションを終了状態にする
    pub fn shutdown(&mut self) {
        self.running = false;
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut Shell {
        &mut self.shell
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// 現在の入力コンテキスト
    pub fn input_context(&self) -> InputContext {
        if self.shell.notice().is_some() {
            InputContext::Notice
        } else if self.shell.dialog().is_some() {
            InputContext::Dialog
        } else {
            InputContext::Main(self.focus)
        }
    }

    /// キーイベントを処理
    pub fn handle_key_event(&mut self, event: KeyEvent) -> Result<()> {
        let action = self.keymap.map_event(self.input_context(), event);
        self.perform(action)
    }

    /// ボタンのクリック
    ///
    /// モーダル表示中のクリックは無視する
    pub fn click(&mut self, button: Button) -> Result<()> {
        if self.shell.is_modal() {
            return Ok(());
        }
        self.focus = Focus::Button(button);
        self.press(button)
    }

    /// テキストフィールドのクリック
    pub fn click_text_field(&mut self) {
        if !self.shell.is_modal() {
            self.focus = Focus::TextField;
        }
    }

    /// 貼り付け
    pub fn paste(&mut self, text: &str) {
        match self.input_context() {
            InputContext::Dialog => {
                if let Some(dialog) = self.shell.dialog_mut() {
                    dialog.add_str(text);
                }
            }
            InputContext::Main(Focus::TextField) => self.shell.document_mut().insert_str(text),
            _ => {}
        }
    }

    /// 操作を実行
    pub fn perform(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Press(button) => self.press(button)?,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Edit(edit) => self.edit(edit),
            Action::Dialog(dialog) => self.dialog(dialog)?,
            Action::DismissNotice => self.shell.dismiss_notice(),
            Action::Quit => self.shutdown(),
            Action::Ignore => {}
        }
        Ok(())
    }

    fn press(&mut self, button: Button) -> Result<()> {
        log::debug!("button pressed: {}", button.label());
        match button.adapter() {
            Some(kind) => self.shell.request_load(kind),
            None => self.shell.request_save(),
        }
    }

    fn edit(&mut self, edit: EditAction) {
        let field = self.shell.document_mut();
        match edit {
            EditAction::Insert(ch) => field.insert_char(ch),
            EditAction::Newline => field.insert_newline(),
            EditAction::Backspace => {
                field.backspace();
            }
            EditAction::Delete => {
                field.delete();
            }
            EditAction::Left => {
                field.move_left();
            }
            EditAction::Right => {
                field.move_right();
            }
            EditAction::Up => {
                field.move_up();
            }
            EditAction::Down => {
                field.move_down();
            }
            EditAction::LineStart => field.move_line_start(),
            EditAction::LineEnd => field.move_line_end(),
        }
    }

    fn dialog(&mut self, action: DialogAction) -> Result<()> {
        match action {
            DialogAction::Insert(ch) => {
                if let Some(dialog) = self.shell.dialog_mut() {
                    dialog.add_char(ch);
                }
            }
            DialogAction::Backspace => {
                if let Some(dialog) = self.shell.dialog_mut() {
                    dialog.backspace();
                }
            }
            DialogAction::Complete => self.shell.complete_dialog()?,
            DialogAction::Submit => self.shell.submit_dialog()?,
            DialogAction::Cancel => self.shell.cancel_dialog()?,
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
