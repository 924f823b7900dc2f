//! フォーマットアダプター
//!
//! テキストの読み込み・保存方法を切り替える能力インターフェース。
//! Word/Excel はタグ文字列を付加するだけのエミュレーションで、実際の形式は解析しない

pub mod plain;
pub mod tagged;

pub use plain::PlainTextAdapter;
pub use tagged::TaggedAdapter;

use crate::error::Result;
use std::fmt;
use std::path::Path;

/// アダプターの能力
pub trait TextAdapter {
    /// 種別
    fn kind(&self) -> AdapterKind;

    /// パスからテキストを読み込む
    fn load(&self, path: &Path) -> Result<String>;

    /// テキストをパスへ保存する
    fn save(&self, content: &str, path: &Path) -> Result<()>;
}

/// アダプターの種別
///
/// シェルはこの値で選択状態を保持し、必要になった時点でアダプターを構築する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdapterKind {
    Word,
    Excel,
    PlainText,
}

impl AdapterKind {
    pub const ALL: [AdapterKind; 3] = [AdapterKind::Word, AdapterKind::Excel, AdapterKind::PlainText];

    /// 表示名
    pub fn label(self) -> &'static str {
        match self {
            AdapterKind::Word => "Word",
            AdapterKind::Excel => "Excel",
            AdapterKind::PlainText => "Plain Text",
        }
    }

    /// 固定タグ（プレーンテキストは無し）
    pub fn tag(self) -> Option<&'static str> {
        match self {
            AdapterKind::Word => Some("[Word File]"),
            AdapterKind::Excel => Some("[Excel File]"),
            AdapterKind::PlainText => None,
        }
    }

    /// 種別に対応するアダプターを構築
    pub fn adapter(self) -> Box<dyn TextAdapter> {
        match self.tag() {
            Some(tag) => Box::new(TaggedAdapter::new(self, tag)),
            None => Box::new(PlainTextAdapter),
        }
    }
}

impl fmt::Display for AdapterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
