//! 画面描画
//!
//! App の状態から1フレームを構築する。テキストフィールドのスクロール位置と
//! 直近のレイアウト（マウス判定用）はフレーム間で保持する

use super::layout::{centered, ScreenLayout, MIN_HEIGHT, MIN_WIDTH};
use super::theme::Theme;
use crate::app::App;
use crate::dialog::FileDialog;
use crate::error::{Notice, NoticeLevel};
use crate::input::{Button, Focus};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use unicode_width::UnicodeWidthChar;

const WINDOW_TITLE: &str = " Text Format Adapter ";
const TAB_WIDTH: usize = 4;
/// ダイアログに表示する補完候補の最大数
const MAX_CANDIDATES: usize = 6;

/// レンダラー
#[derive(Debug, Default)]
pub struct Renderer {
    theme: Theme,
    /// テキストフィールドの表示開始行
    scroll_row: usize,
    /// テキストフィールドの表示開始列（表示幅単位）
    scroll_col: usize,
    /// 直近フレームのレイアウト
    last_layout: Option<ScreenLayout>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 直近に描画したレイアウト（画面が小さすぎた場合は `None`）
    pub fn last_layout(&self) -> Option<&ScreenLayout> {
        self.last_layout.as_ref()
    }

    /// 1フレーム描画
    pub fn render<B: Backend>(&mut self, terminal: &mut Terminal<B>, app: &App) -> io::Result<()> {
        terminal.draw(|frame| self.draw(frame, app))?;
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame<'_>, app: &App) {
        let area = frame.area();

        if ScreenLayout::is_too_small(area) {
            self.last_layout = None;
            let message = format!(
                "Window too small: {}x{} (need {}x{})",
                area.width, area.height, MIN_WIDTH, MIN_HEIGHT
            );
            frame.render_widget(Paragraph::new(message).wrap(Wrap { trim: true }), area);
            return;
        }

        let layout = ScreenLayout::compute(area);
        let shell = app.shell();
        let modal = shell.is_modal();

        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .title(WINDOW_TITLE)
                .border_style(self.theme.window_border),
            area,
        );

        for (button, rect) in &layout.buttons {
            let focused = !modal && app.focus() == Focus::Button(*button);
            self.draw_button(frame, *button, *rect, focused);
        }

        let field_focused = !modal && app.focus() == Focus::TextField;
        self.draw_text_field(frame, app, layout.text_field, field_focused);

        frame.render_widget(
            Paragraph::new(shell.status())
            .style(self.theme.status_line),
            layout.status_line,
        );

        frame.render_widget(
            Paragraph::new(format!(
                "{}  |  F1-F3 load  F4/Ctrl-S save  Tab focus  Ctrl-Q quit",
                shell.adapter_label()
            ))
            .style(self.theme.hint),
            layout.hint_line,
        );

        if let Some(dialog) = shell.dialog() {
            self.draw_dialog(frame, area, dialog);
        }
        if let Some(notice) = shell.notice() {
            self.draw_notice(frame, area, notice);
        }

        self.last_layout = Some(layout);
    }

    fn draw_button(&self, frame: &mut Frame<'_>, button: Button, rect: Rect, focused: bool) {
        let style = if focused {
            self.theme.button_focused
        } else {
            self.theme.button
        };
        let widget = Paragraph::new(format!("{} [{}]", button.label(), button.shortcut()))
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(widget, rect);
    }

    fn draw_text_field(&mut self, frame: &mut Frame<'_>, app: &App, rect: Rect, focused: bool) {
        let border_style = if focused {
            self.theme.text_field_border_focused
        } else {
            self.theme.text_field_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Document ")
            .border_style(border_style);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let document = app.shell().document();
        let lines = document.lines();
        let cursor = document.cursor_position();
        let cursor_line = lines.get(cursor.line).copied().unwrap_or("");
        let cursor_x = display_width(cursor_line.chars().take(cursor.column));

        self.scroll_into_view(cursor.line, cursor_x, inner);

        let visible: Vec<Line> = lines
            .iter()
            .skip(self.scroll_row)
            .take(inner.height as usize)
            .map(|line| Line::from(clip_line(line, self.scroll_col, inner.width as usize)))
            .collect();
        frame.render_widget(Paragraph::new(visible), inner);

        if focused {
            let x = inner.x + (cursor_x - self.scroll_col) as u16;
            let y = inner.y + (cursor.line - self.scroll_row) as u16;
            frame.set_cursor_position((x, y));
        }
    }

    fn scroll_into_view(&mut self, line: usize, column: usize, inner: Rect) {
        let height = inner.height as usize;
        let width = inner.width as usize;

        if line < self.scroll_row {
            self.scroll_row = line;
        } else if line >= self.scroll_row + height {
            self.scroll_row = line + 1 - height;
        }

        if column < self.scroll_col {
            self.scroll_col = column;
        } else if column >= self.scroll_col + width {
            self.scroll_col = column + 1 - width;
        }
    }

    fn draw_dialog(&self, frame: &mut Frame<'_>, area: Rect, dialog: &FileDialog) {
        let candidates = dialog.candidates();
        let shown = candidates.len().min(MAX_CANDIDATES);
        let overflow = candidates.len() > MAX_CANDIDATES;
        let height = 5 + shown as u16 + u16::from(overflow) + u16::from(dialog.no_match());
        let width = area.width.saturating_sub(8).min(72);
        let rect = centered(area, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", dialog.title()))
            .border_style(self.theme.dialog_border);
        let inner = block.inner(rect);

        let label = "Path: ";
        let room = (inner.width as usize).saturating_sub(label.len() + 1);
        let input = tail_fitting(dialog.input(), room);

        let mut lines = vec![Line::from(vec![
            Span::raw(label),
            Span::raw(input.clone()),
        ])];
        lines.push(Line::from(""));
        for candidate in candidates.iter().take(MAX_CANDIDATES) {
            lines.push(Line::from(Span::styled(
                format!("  {}", candidate),
                self.theme.dialog_candidate,
            )));
        }
        if overflow {
            lines.push(Line::from(Span::styled(
                format!("  ... {} more", candidates.len() - MAX_CANDIDATES),
                self.theme.dialog_candidate,
            )));
        }
        if dialog.no_match() {
            lines.push(Line::from(Span::styled(
                "  [No matches]",
                self.theme.dialog_candidate,
            )));
        }
        lines.push(Line::from(Span::styled(
            "Enter: OK  Esc: Cancel  Tab: Complete",
            self.theme.hint,
        )));

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(lines).block(block), rect);

        let cursor_x = inner.x + (label.len() + display_width(input.chars())) as u16;
        frame.set_cursor_position((cursor_x.min(inner.x + inner.width.saturating_sub(1)), inner.y));
    }

    fn draw_notice(&self, frame: &mut Frame<'_>, area: Rect, notice: &Notice) {
        let style = match notice.level {
            NoticeLevel::Info => self.theme.notice_info,
            NoticeLevel::Error => self.theme.notice_error,
        };

        let max_width = area.width.saturating_sub(8).max(20);
        let message_width = display_width(notice.message.chars()) as u16;
        let width = (message_width + 4).clamp(30.min(max_width), max_width);
        let text_width = width.saturating_sub(2).max(1);
        let message_lines = message_width.div_ceil(text_width).max(1);
        let rect = centered(area, width, message_lines + 4);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", notice.title()))
            .border_style(style);

        let body = vec![
            Line::from(notice.message.clone()),
            Line::from(""),
            Line::from(Span::styled("[ OK ]", style)).alignment(Alignment::Center),
        ];

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(body).wrap(Wrap { trim: false }).block(block),
            rect,
        );
    }
}

fn char_width(ch: char) -> usize {
    match ch {
        '\t' => TAB_WIDTH,
        _ => ch.width().unwrap_or(0),
    }
}

/// 表示幅（タブは固定幅、制御文字は0）
fn display_width(chars: impl Iterator<Item = char>) -> usize {
    chars.map(char_width).sum()
}

/// 表示開始列と幅で1行を切り出す
fn clip_line(line: &str, skip: usize, width: usize) -> String {
    let mut out = String::new();
    let mut column = 0;

    for ch in line.chars() {
        let w = char_width(ch);
        if w == 0 {
            continue;
        }
        let start = column;
        column += w;

        if start < skip {
            continue;
        }
        if column > skip + width {
            break;
        }
        if ch == '\t' {
            out.push_str(&" ".repeat(TAB_WIDTH));
        } else {
            out.push(ch);
        }
    }
    out
}

/// 末尾から幅に収まる部分を取り出す（長いパスは先頭を省略）
fn tail_fitting(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        let w = char_width(ch);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    text[start..].to_string()
}
