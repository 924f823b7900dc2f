//! エラーハンドリングシステム
//!
//! adaptpad 全体で使用されるエラー型と、ユーザー向け通知への変換を定義
//! 致命的なのは端末の初期化失敗のみ。その他は全て通知として表示し、処理を継続する

use std::io;
use thiserror::Error;

/// アプリケーション全体のエラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdaptError {
    /// ファイル操作エラー
    #[error(transparent)]
    File(#[from] FileError),

    /// UI操作エラー
    #[error(transparent)]
    Ui(#[from] UiError),

    /// ダイアログ入力エラー
    #[error(transparent)]
    Dialog(#[from] DialogError),

    /// アダプター未選択での保存
    #[error("No adapter selected. Please load a file first.")]
    NoAdapterSelected,

    /// パス展開エラー
    #[error("Path error: {0}")]
    Path(String),
}

/// ファイル操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    #[error("Could not find file '{path}'")]
    NotFound { path: String },

    #[error("Access to the path '{path}' is denied")]
    PermissionDenied { path: String },

    #[error("'{path}' is not a regular file")]
    InvalidPath { path: String },

    #[error("'{path}' is not valid UTF-8 text")]
    Encoding { path: String },

    #[error("{message}")]
    Io { message: String },
}

impl FileError {
    /// `io::Error` をパス付きで分類
    pub fn from_io(error: &io::Error, path: &std::path::Path) -> Self {
        let path = path.display().to_string();
        match error.kind() {
            io::ErrorKind::NotFound => FileError::NotFound { path },
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied { path },
            io::ErrorKind::InvalidData => FileError::Encoding { path },
            _ => FileError::Io {
                message: format!("{}: {}", path, error),
            },
        }
    }
}

/// UI操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UiError {
    #[error("Terminal initialization failed")]
    TerminalInit,

    #[error("Terminal operation failed: {component}")]
    Terminal { component: String },
}

/// ダイアログ操作固有のエラー
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DialogError {
    #[error("No file dialog is open")]
    NotOpen,

    #[error("A file dialog is already open")]
    AlreadyOpen,
}

// std::io::Error から AdaptError への変換（パス不明時）
impl From<io::Error> for AdaptError {
    fn from(error: io::Error) -> Self {
        AdaptError::File(FileError::Io {
            message: error.to_string(),
        })
    }
}

/// 通知レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// 操作の種類（通知メッセージの接頭辞を決める）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Save,
}

impl Operation {
    fn failure_prefix(self) -> &'static str {
        match self {
            Operation::Load => "Error loading data",
            Operation::Save => "Error saving data",
        }
    }
}

/// モーダル通知
///
/// 表示中は解除操作以外の入力を受け付けない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NoticeLevel::Error,
        }
    }

    /// 操作失敗を通知に変換
    pub fn from_failure(operation: Operation, error: &AdaptError) -> Self {
        match error {
            AdaptError::NoAdapterSelected => Self::info(error.to_string()),
            _ => Self::error(format!("{}: {}", operation.failure_prefix(), error)),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.level {
            NoticeLevel::Info => "Notice",
            NoticeLevel::Error => "Error",
        }
    }
}

/// パニックハンドラの設定
///
/// 端末を通常モードに戻してから位置情報を出力し、即座に終了する
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        crate::frontend::tui::restore_terminal();

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message: &str = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        log::error!("PANIC at {}: {}", location, message);
        eprintln!("PANIC at {}: {}", location, message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, AdaptError>;
