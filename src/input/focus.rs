//! ボタンとフォーカス

use crate::adapter::AdapterKind;

/// 画面上のボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    LoadWord,
    LoadExcel,
    LoadPlainText,
    Save,
}

impl Button {
    /// 表示順
    pub const ALL: [Button; 4] = [
        Button::LoadWord,
        Button::LoadExcel,
        Button::LoadPlainText,
        Button::Save,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Button::LoadWord => "Load Word",
            Button::LoadExcel => "Load Excel",
            Button::LoadPlainText => "Load Plain Text",
            Button::Save => "Save File",
        }
    }

    /// ショートカットキーの表示
    pub fn shortcut(self) -> &'static str {
        match self {
            Button::LoadWord => "F1",
            Button::LoadExcel => "F2",
            Button::LoadPlainText => "F3",
            Button::Save => "F4",
        }
    }

    /// 読み込みボタンが束縛するアダプター
    pub fn adapter(self) -> Option<AdapterKind> {
        match self {
            Button::LoadWord => Some(AdapterKind::Word),
            Button::LoadExcel => Some(AdapterKind::Excel),
            Button::LoadPlainText => Some(AdapterKind::PlainText),
            Button::Save => None,
        }
    }
}

/// フォーカス対象
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Button(Button),
    #[default]
    TextField,
}

impl Focus {
    /// フォーカス巡回順（ボタン4つ → テキストフィールド）
    const RING: [Focus; 5] = [
        Focus::Button(Button::LoadWord),
        Focus::Button(Button::LoadExcel),
        Focus::Button(Button::LoadPlainText),
        Focus::TextField,
        Focus::Button(Button::Save),
    ];

    fn index(self) -> usize {
        Self::RING
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::RING.len();
        Self::RING[(self.index() + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_ring_wraps_both_ways() {
        let mut focus = Focus::Button(Button::LoadWord);
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Button(Button::LoadWord));

        assert_eq!(Focus::Button(Button::LoadWord).prev(), Focus::Button(Button::Save));
        assert_eq!(Focus::TextField.next(), Focus::Button(Button::Save));
    }

    #[test]
    fn load_buttons_bind_distinct_adapters() {
        let bound: Vec<_> = Button::ALL.iter().filter_map(|b| b.adapter()).collect();
        assert_eq!(bound, AdapterKind::ALL.to_vec());
        assert_eq!(Button::Save.adapter(), None);
    }
}
