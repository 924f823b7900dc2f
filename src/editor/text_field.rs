//! 複数行テキストフィールド
//!
//! ドキュメント本文とカーソルを保持する。読み込み時は全体を置き換え、
//! 保存時は全体を読み出す

/// カーソル位置（行・列は0始まり、列は文字数単位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// テキストフィールド
#[derive(Debug, Clone, Default)]
pub struct TextField {
    text: String,
    /// バイトオフセット（常に文字境界）
    cursor: usize,
    /// 上下移動時に維持する列
    preferred_column: Option<usize>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 全体を置き換え、カーソルを先頭へ
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = 0;
        self.preferred_column = None;
    }

    pub fn cursor_offset(&self) -> usize {
        self.cursor
    }

    /// 文字を挿入
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        self.preferred_column = None;
    }

    /// 文字列を挿入（貼り付け）
    pub fn insert_str(&mut self, s: &str) {
        let normalized = s.replace("\r\n", "\n");
        self.text.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
        self.preferred_column = None;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// カーソル前の1文字を削除
    pub fn backspace(&mut self) -> bool {
        let Some(prev) = self.prev_boundary() else {
            return false;
        };
        self.text.replace_range(prev..self.cursor, "");
        self.cursor = prev;
        self.preferred_column = None;
        true
    }

    /// カーソル位置の1文字を削除
    pub fn delete(&mut self) -> bool {
        let Some(next) = self.next_boundary() else {
            return false;
        };
        self.text.replace_range(self.cursor..next, "");
        self.preferred_column = None;
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.preferred_column = None;
        match self.prev_boundary() {
            Some(prev) => {
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        self.preferred_column = None;
        match self.next_boundary() {
            Some(next) => {
                self.cursor = next;
                true
            }
            None => false,
        }
    }

    pub fn move_line_start(&mut self) {
        self.cursor = self.line_start(self.cursor);
        self.preferred_column = None;
    }

    pub fn move_line_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
        self.preferred_column = None;
    }

    pub fn move_up(&mut self) -> bool {
        let start = self.line_start(self.cursor);
        if start == 0 {
            return false;
        }
        let column = self.sticky_column();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, column);
        self.preferred_column = Some(column);
        true
    }

    pub fn move_down(&mut self) -> bool {
        let end = self.line_break(self.cursor);
        if end >= self.text.len() {
            return false;
        }
        let column = self.sticky_column();
        self.cursor = self.offset_in_line(end + 1, column);
        self.preferred_column = Some(column);
        true
    }

    /// 現在のカーソル位置（行・列）
    pub fn cursor_position(&self) -> CursorPosition {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let column = before[self.line_start(self.cursor)..].chars().count();
        CursorPosition { line, column }
    }

    /// 表示用の行一覧（空テキストでも1行、行末の `\r` は含まない）
    pub fn lines(&self) -> Vec<&str> {
        self.text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }

    fn sticky_column(&self) -> usize {
        self.preferred_column
            .unwrap_or_else(|| self.cursor_position().column)
    }

    // CRLF は1文字として扱う
    fn prev_boundary(&self) -> Option<usize> {
        let before = &self.text[..self.cursor];
        if before.ends_with("\r\n") {
            return Some(self.cursor - 2);
        }
        before.char_indices().next_back().map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        let after = &self.text[self.cursor..];
        if after.starts_with("\r\n") {
            return Some(self.cursor + 2);
        }
        after.chars().next().map(|ch| self.cursor + ch.len_utf8())
    }

    fn line_start(&self, offset: usize) -> usize {
        self.text[..offset].rfind('\n').map(|idx| idx + 1).unwrap_or(0)
    }

    /// 行を終える `\n` の位置（最終行ならテキスト末尾）
    fn line_break(&self, offset: usize) -> usize {
        self.text[offset..]
            .find('\n')
            .map(|idx| offset + idx)
            .unwrap_or(self.text.len())
    }

    /// 行内容の末尾（CRLF の `\r` の手前）
    fn line_end(&self, offset: usize) -> usize {
        let end = self.line_break(offset);
        if end > offset && self.text[..end].ends_with('\r') && end < self.text.len() {
            end - 1
        } else {
            end
        }
    }

    fn offset_in_line(&self, line_start: usize, column: usize) -> usize {
        let end = self.line_end(line_start);
        self.text[line_start..end]
            .char_indices()
            .nth(column)
            .map(|(idx, _)| line_start + idx)
            .unwrap_or(end)
    }
}
