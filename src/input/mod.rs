//! 入力処理モジュール
//!
//! 端末イベントを画面上の操作に変換する

pub mod focus;
pub mod keybinding;

pub use focus::{Button, Focus};
pub use keybinding::{Action, DialogAction, EditAction, InputContext, KeyMap};
