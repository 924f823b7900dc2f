//! ロギングシステム
//!
//! `log` ファサードのバックエンド。stderr または追記専用ファイルへ出力する

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// コマンドライン引数からの変換
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warning),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    fn from_log(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }

    fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

/// ロガー
///
/// * TUI 実行中は端末を汚さないよう stderr 出力を止める
/// * ファイル出力先が指定されていればそちらへ追記する
#[derive(Debug)]
pub struct Logger {
    level: LogLevel,
    output_stderr: bool,
    output_file: Option<PathBuf>,
}

impl Logger {
    /// デフォルト構築
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            output_stderr: true,
            output_file: None,
        }
    }

    /// ファイル出力を設定
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// 標準エラー出力を無効化
    #[cfg(test)]
    pub fn without_stderr(mut self) -> Self {
        self.output_stderr = false;
        self
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    fn write_line(&self, message: &str) {
        if self.output_stderr && stderr_enabled() {
            eprintln!("{}", message);
        }

        if let Some(path) = &self.output_file {
            if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) {
                let _ = writeln!(file, "{}", message);
            }
        }
    }

    /// 任意のログレベルでメッセージを整形
    fn format_line(level: LogLevel, target: &str, message: impl AsRef<str>) -> String {
        format!(
            "{} {} [{}] {}",
            timestamp_ms(),
            level.tag(),
            target,
            message.as_ref()
        )
    }

    /// `log` ファサードのバックエンドとして登録
    ///
    /// プロセス終了まで保持される。二度目以降の呼び出しは無視される
    pub fn install(self) {
        let filter = self.level.to_filter();
        let logger: &'static Logger = Box::leak(Box::new(self));
        if log::set_logger(logger).is_ok() {
            log::set_max_level(filter);
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.should_log(LogLevel::from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = LogLevel::from_log(record.level());
        self.write_line(&Self::format_line(
            level,
            record.target(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

/// TUI 実行中の stderr 出力を切り替える
///
/// 端末が代替スクリーンにある間に stderr へ書くと画面が崩れる
pub fn set_stderr_enabled(enabled: bool) {
    STDERR_ENABLED.store(enabled, Ordering::Relaxed);
}

fn stderr_enabled() -> bool {
    STDERR_ENABLED.load(Ordering::Relaxed)
}

static STDERR_ENABLED: AtomicBool = AtomicBool::new(true);

/// ログファイルの既定パス（`~/.adaptpad-log/debug.log`）
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".adaptpad-log").join("debug.log"))
}

/// 親ディレクトリを作成
pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_millis())
        .unwrap_or_default()
}
