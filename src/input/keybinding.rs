//! キーバインドシステム
//!
//! キー入力を入力コンテキスト（メイン画面・ダイアログ・通知）に応じて操作へ変換する

use super::focus::{Button, Focus};
use crossterm::event::{
    KeyCode as CrosstermKeyCode, KeyEvent, KeyEventKind, KeyModifiers as CrosstermModifiers,
};
use std::collections::HashMap;

/// キー入力の内部表現
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    /// 修飾キー
    pub modifiers: KeyModifiers,
    /// 基本キー
    pub code: KeyCode,
}

/// 修飾キーの組み合わせ
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyModifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// 基本キーコード
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    F(u8),
    Esc,
    Unknown,
}

impl Key {
    pub fn plain(code: KeyCode) -> Self {
        Self {
            modifiers: KeyModifiers::default(),
            code,
        }
    }

    pub fn ctrl(ch: char) -> Self {
        Self {
            modifiers: KeyModifiers {
                ctrl: true,
                ..KeyModifiers::default()
            },
            code: KeyCode::Char(ch),
        }
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let modifiers = KeyModifiers {
            ctrl: event.modifiers.contains(CrosstermModifiers::CONTROL),
            alt: event.modifiers.contains(CrosstermModifiers::ALT),
            shift: event.modifiers.contains(CrosstermModifiers::SHIFT),
        };

        let code = match event.code {
            CrosstermKeyCode::Char(c) => KeyCode::Char(c),
            CrosstermKeyCode::Enter => KeyCode::Enter,
            CrosstermKeyCode::Backspace => KeyCode::Backspace,
            CrosstermKeyCode::Delete => KeyCode::Delete,
            CrosstermKeyCode::Tab => KeyCode::Tab,
            CrosstermKeyCode::BackTab => KeyCode::BackTab,
            CrosstermKeyCode::Up => KeyCode::Up,
            CrosstermKeyCode::Down => KeyCode::Down,
            CrosstermKeyCode::Left => KeyCode::Left,
            CrosstermKeyCode::Right => KeyCode::Right,
            CrosstermKeyCode::Home => KeyCode::Home,
            CrosstermKeyCode::End => KeyCode::End,
            CrosstermKeyCode::F(n) => KeyCode::F(n),
            CrosstermKeyCode::Esc => KeyCode::Esc,
            _ => KeyCode::Unknown,
        };

        Key { modifiers, code }
    }
}

/// 入力コンテキスト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// 通常画面（フォーカス付き）
    Main(Focus),
    /// ファイルダイアログ表示中
    Dialog,
    /// 通知表示中
    Notice,
}

/// テキストフィールド編集操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    Insert(char),
    Newline,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}

/// ダイアログ操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Insert(char),
    Backspace,
    Complete,
    Submit,
    Cancel,
}

/// 変換後の操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// ボタンを押す
    Press(Button),
    FocusNext,
    FocusPrev,
    Edit(EditAction),
    Dialog(DialogAction),
    DismissNotice,
    Quit,
    /// 何もしない
    Ignore,
}

/// キーマップ
pub struct KeyMap {
    /// どのコンテキストでも有効なショートカット（通知・ダイアログ表示中を除く）
    global_bindings: HashMap<Key, Action>,
}

impl KeyMap {
    pub fn new() -> Self {
        let mut global_bindings = HashMap::with_capacity(8);

        global_bindings.insert(Key::plain(KeyCode::F(1)), Action::Press(Button::LoadWord));
        global_bindings.insert(Key::plain(KeyCode::F(2)), Action::Press(Button::LoadExcel));
        global_bindings.insert(Key::plain(KeyCode::F(3)), Action::Press(Button::LoadPlainText));
        global_bindings.insert(Key::plain(KeyCode::F(4)), Action::Press(Button::Save));
        global_bindings.insert(Key::ctrl('s'), Action::Press(Button::Save));
        global_bindings.insert(Key::ctrl('q'), Action::Quit);
        global_bindings.insert(Key::plain(KeyCode::Tab), Action::FocusNext);
        global_bindings.insert(Key::plain(KeyCode::BackTab), Action::FocusPrev);

        Self { global_bindings }
    }

    /// crossterm のキーイベントを変換（押下以外は無視）
    pub fn map_event(&self, context: InputContext, event: KeyEvent) -> Action {
        if event.kind == KeyEventKind::Release {
            return Action::Ignore;
        }
        self.map_key(context, &Key::from(event))
    }

    /// コンテキストに応じてキーを変換
    pub fn map_key(&self, context: InputContext, key: &Key) -> Action {
        match context {
            InputContext::Notice => Self::map_notice(key),
            InputContext::Dialog => Self::map_dialog(key),
            InputContext::Main(focus) => {
                // BackTab は端末によって Shift+BackTab として届く
                let lookup = match key.code {
                    KeyCode::BackTab => Key::plain(KeyCode::BackTab),
                    _ => key.clone(),
                };
                if let Some(action) = self.global_bindings.get(&lookup) {
                    return action.clone();
                }
                match focus {
                    Focus::Button(button) => Self::map_button(button, key),
                    Focus::TextField => Self::map_text_field(key),
                }
            }
        }
    }

    fn map_notice(key: &Key) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Action::DismissNotice,
            _ => Action::Ignore,
        }
    }

    fn map_dialog(key: &Key) -> Action {
        if key.modifiers.ctrl {
            return match key.code {
                KeyCode::Char('g') | KeyCode::Char('c') => Action::Dialog(DialogAction::Cancel),
                _ => Action::Ignore,
            };
        }

        match key.code {
            KeyCode::Char(ch) => Action::Dialog(DialogAction::Insert(ch)),
            KeyCode::Backspace => Action::Dialog(DialogAction::Backspace),
            KeyCode::Tab => Action::Dialog(DialogAction::Complete),
            KeyCode::Enter => Action::Dialog(DialogAction::Submit),
            KeyCode::Esc => Action::Dialog(DialogAction::Cancel),
            _ => Action::Ignore,
        }
    }

    fn map_button(button: Button, key: &Key) -> Action {
        if key.modifiers.ctrl || key.modifiers.alt {
            return Action::Ignore;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::Press(button),
            KeyCode::Right | KeyCode::Down => Action::FocusNext,
            KeyCode::Left | KeyCode::Up => Action::FocusPrev,
            _ => Action::Ignore,
        }
    }

    fn map_text_field(key: &Key) -> Action {
        if key.modifiers.ctrl {
            return match key.code {
                KeyCode::Char('a') => Action::Edit(EditAction::LineStart),
                KeyCode::Char('e') => Action::Edit(EditAction::LineEnd),
                KeyCode::Char('d') => Action::Edit(EditAction::Delete),
                KeyCode::Char('h') => Action::Edit(EditAction::Backspace),
                _ => Action::Ignore,
            };
        }

        let edit = match key.code {
            KeyCode::Char(ch) => EditAction::Insert(ch),
            KeyCode::Enter => EditAction::Newline,
            KeyCode::Backspace => EditAction::Backspace,
            KeyCode::Delete => EditAction::Delete,
            KeyCode::Left => EditAction::Left,
            KeyCode::Right => EditAction::Right,
            KeyCode::Up => EditAction::Up,
            KeyCode::Down => EditAction::Down,
            KeyCode::Home => EditAction::LineStart,
            KeyCode::End => EditAction::LineEnd,
            _ => return Action::Ignore,
        };
        Action::Edit(edit)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new()
    }
}
