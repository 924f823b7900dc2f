//! ファイル操作モジュール
//!
//! アダプターが利用する全体読み書きのプリミティブとパス展開

pub mod io;
pub mod path;

pub use io::{ensure_readable_file, read_file, write_file};
pub use path::{directory_hint, expand_path, format_for_display};
