//! プレーンテキストアダプター（無変換）

use super::{AdapterKind, TextAdapter};
use crate::error::Result;
use crate::file;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextAdapter;

impl TextAdapter for PlainTextAdapter {
    fn kind(&self) -> AdapterKind {
        AdapterKind::PlainText
    }

    fn load(&self, path: &Path) -> Result<String> {
        file::read_file(path)
    }

    fn save(&self, content: &str, path: &Path) -> Result<()> {
        file::write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn load_returns_content_unmodified() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.txt");
        std::fs::write(&path, "line one\r\nline two\n\ttabbed").unwrap();

        let loaded = PlainTextAdapter.load(&path).unwrap();
        assert_eq!(loaded, "line one\r\nline two\n\ttabbed");
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(PlainTextAdapter.load(&dir.path().join("nope.txt")).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn save_after_load_reproduces_file(content in "\\PC*") {
            let dir = tempdir().unwrap();
            let original = dir.path().join("original.txt");
            let copy = dir.path().join("copy.txt");
            std::fs::write(&original, &content).unwrap();

            let loaded = PlainTextAdapter.load(&original).unwrap();
            PlainTextAdapter.save(&loaded, &copy).unwrap();

            prop_assert_eq!(std::fs::read_to_string(&copy).unwrap(), content);
        }
    }
}
