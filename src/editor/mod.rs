//! エディタモジュール
//!
//! ドキュメント本文を編集するテキストフィールド

pub mod text_field;

pub use text_field::{CursorPosition, TextField};
