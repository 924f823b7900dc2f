//! タグ付きアダプター（Word/Excel エミュレーション）
//!
//! 読み込みはファイル内容を解析せず、タグとパスの説明を返す。
//! 保存はタグ + 空白 + 本文をそのまま書き込む

use super::{AdapterKind, TextAdapter};
use crate::error::Result;
use crate::file;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct TaggedAdapter {
    kind: AdapterKind,
    tag: &'static str,
}

impl TaggedAdapter {
    pub fn new(kind: AdapterKind, tag: &'static str) -> Self {
        Self { kind, tag }
    }

    fn decorate(&self, body: &str) -> String {
        format!("{} {}", self.tag, body)
    }
}

impl TextAdapter for TaggedAdapter {
    fn kind(&self) -> AdapterKind {
        self.kind
    }

    fn load(&self, path: &Path) -> Result<String> {
        // 内容は読まないが、読めないパスは他のアダプターと同様に失敗させる
        file::ensure_readable_file(path)?;
        Ok(self.decorate(&format!("Data loaded from {}", path.display())))
    }

    fn save(&self, content: &str, path: &Path) -> Result<()> {
        file::write_file(path, &self.decorate(content))
    }
}
