//! 起動オプション
//!
//! コマンドライン引数と環境変数から実行時設定を組み立てる

use crate::logging::{default_log_path, LogLevel};
use std::path::PathBuf;

/// デバッグレベルを有効にする環境変数
pub const DEBUG_ENV: &str = "ADAPTPAD_DEBUG";

/// 実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Tui,
    Help,
    Version,
}

/// 起動オプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub run_mode: RunMode,
    /// ログレベル
    pub log_level: LogLevel,
    /// ログファイル出力先（未指定時はファイル出力なし）
    pub debug_log: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            run_mode: RunMode::Tui,
            log_level: LogLevel::Warning,
            debug_log: None,
        }
    }
}

impl Options {
    /// 引数を解釈（未知の引数は警告して無視）
    pub fn parse(args: &[String], debug_env: bool) -> Self {
        let mut options = Options::default();
        if debug_env {
            options.log_level = LogLevel::Debug;
        }

        let mut iter = args.iter().peekable();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => options.run_mode = RunMode::Help,
                "--version" | "-V" => options.run_mode = RunMode::Version,
                "--debug-log" => {
                    let path = iter.peek().and_then(|next| {
                        if !next.starts_with('-') {
                            Some(PathBuf::from(next.as_str()))
                        } else {
                            None
                        }
                    });
                    if path.is_some() {
                        options.debug_log = path;
                        iter.next();
                    } else {
                        options.debug_log = default_log_path();
                    }
                }
                "--log-level" => match iter.next().and_then(|value| LogLevel::parse(value)) {
                    Some(level) => options.log_level = level,
                    None => eprintln!("warning: --log-level expects debug|info|warning|error"),
                },
                other => eprintln!("warning: ignoring unknown argument '{}'", other),
            }
        }

        options
    }

    /// 環境から解釈
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args, std::env::var_os(DEBUG_ENV).is_some())
    }
}

pub fn usage() -> String {
    format!(
        "adaptpad {}\n\n\
         Usage: adaptpad [--debug-log [PATH]] [--log-level LEVEL]\n\n\
         Options:\n  \
           --debug-log [PATH]   append logs to PATH (default ~/.adaptpad-log/debug.log)\n  \
           --log-level LEVEL    debug | info | warning | error (default warning)\n  \
           -h, --help           show this help\n  \
           -V, --version        show version\n\n\
         Environment:\n  \
           {}       set to enable debug logging\n",
        env!("CARGO_PKG_VERSION"),
        DEBUG_ENV
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_run_tui_without_file_log() {
        let options = Options::parse(&[], false);
        assert_eq!(options, Options::default());
        assert_eq!(options.log_level, LogLevel::Warning);
    }

    #[test]
    fn debug_log_with_explicit_path() {
        let options = Options::parse(&args(&["--debug-log", "/tmp/pad.log"]), false);
        assert_eq!(options.debug_log, Some(PathBuf::from("/tmp/pad.log")));
        assert_eq!(options.run_mode, RunMode::Tui);
    }

    #[test]
    fn debug_log_without_path_uses_default() {
        let options = Options::parse(&args(&["--debug-log", "--log-level", "info"]), false);
        assert_eq!(options.debug_log, default_log_path());
        assert_eq!(options.log_level, LogLevel::Info);
    }

    #[test]
    fn env_flag_enables_debug_level() {
        assert_eq!(Options::parse(&[], true).log_level, LogLevel::Debug);
    }

    #[test]
    fn help_and_version_modes() {
        assert_eq!(Options::parse(&args(&["--help"]), false).run_mode, RunMode::Help);
        assert_eq!(Options::parse(&args(&["-V"]), false).run_mode, RunMode::Version);
        assert!(usage().contains("--debug-log"));
    }
}
