//! adaptpad - フォーマットアダプター経由でテキストを読み書きする端末アプリ
//!
//! モジュール構成

// コアモジュール
pub mod app;
pub mod error;
pub mod logging;
pub mod options;

// データ層
pub mod adapter;
pub mod editor;
pub mod file;

// ロジック層
pub mod dialog;
pub mod input;
pub mod shell;

// 表示層
pub mod frontend;
pub mod ui;

// 公開API
pub use adapter::{AdapterKind, TextAdapter};
pub use app::App;
pub use error::{AdaptError, Result};
pub use frontend::TuiApplication;
pub use shell::{Shell, ShellState};
