//! 画面レイアウト
//!
//! 上段に読み込みボタン3つ、中央にテキストフィールド、その下にステータス行と保存ボタン

use crate::input::Button;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 最小必要サイズ
pub const MIN_WIDTH: u16 = 50;
pub const MIN_HEIGHT: u16 = 14;

/// 1フレーム分の領域割り当て
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// 全体
    pub total: Rect,
    /// ボタン領域（表示順）
    pub buttons: Vec<(Button, Rect)>,
    /// テキストフィールド（枠込み）
    pub text_field: Rect,
    /// ステータス行
    pub status_line: Rect,
    /// 操作ヒント行
    pub hint_line: Rect,
}

impl ScreenLayout {
    /// 画面が小さすぎるか
    pub fn is_too_small(area: Rect) -> bool {
        area.width < MIN_WIDTH || area.height < MIN_HEIGHT
    }

    /// ウィンドウ枠の内側を分割
    pub fn compute(total: Rect) -> Self {
        let inner = Rect {
            x: total.x.saturating_add(1),
            y: total.y.saturating_add(1),
            width: total.width.saturating_sub(2),
            height: total.height.saturating_sub(2),
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(inner);

        let load_buttons = [Button::LoadWord, Button::LoadExcel, Button::LoadPlainText];
        let mut buttons = Self::button_row(rows[0], &load_buttons);
        buttons.extend(Self::button_row(rows[3], &[Button::Save]));

        Self {
            total,
            buttons,
            text_field: rows[1],
            status_line: rows[2],
            hint_line: rows[4],
        }
    }

    fn button_row(row: Rect, buttons: &[Button]) -> Vec<(Button, Rect)> {
        let mut x = row.x.saturating_add(1);
        let right = row.x.saturating_add(row.width);
        let mut placed = Vec::with_capacity(buttons.len());

        for &button in buttons {
            let width = Self::button_width(button);
            if x.saturating_add(width) > right {
                break;
            }
            placed.push((button, Rect::new(x, row.y, width, row.height)));
            x = x.saturating_add(width + 2);
        }
        placed
    }

    /// ボタン幅（ラベル + ショートカット + 枠）
    pub fn button_width(button: Button) -> u16 {
        let text = button.label().len() + button.shortcut().len() + 3;
        (text as u16).saturating_add(2)
    }

    pub fn button_rect(&self, button: Button) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(candidate, _)| *candidate == button)
            .map(|(_, rect)| *rect)
    }

    /// 座標にあるボタン
    pub fn button_at(&self, column: u16, row: u16) -> Option<Button> {
        self.buttons
            .iter()
            .find(|(_, rect)| contains(*rect, column, row))
            .map(|(button, _)| *button)
    }

    pub fn is_in_text_field(&self, column: u16, row: u16) -> bool {
        contains(self.text_field, column, row)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// 中央に配置した矩形
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_buttons_fit_on_standard_terminal() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.buttons.len(), 4);

        let word = layout.button_rect(Button::LoadWord).unwrap();
        let save = layout.button_rect(Button::Save).unwrap();
        assert!(save.y > layout.text_field.y);
        assert!(word.y < layout.text_field.y);
        assert_eq!(layout.status_line.height, 1);
    }

    #[test]
    fn hit_testing_finds_buttons() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 80, 24));
        let excel = layout.button_rect(Button::LoadExcel).unwrap();

        assert_eq!(layout.button_at(excel.x, excel.y + 1), Some(Button::LoadExcel));
        assert_eq!(layout.button_at(0, 0), None);

        let field = layout.text_field;
        assert!(layout.is_in_text_field(field.x + 1, field.y + 1));
        assert_eq!(layout.button_at(field.x + 1, field.y + 1), None);
    }

    #[test]
    fn small_screens_are_detected() {
        assert!(ScreenLayout::is_too_small(Rect::new(0, 0, 40, 24)));
        assert!(!ScreenLayout::is_too_small(Rect::new(0, 0, 80, 24)));
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered(area, 10, 4), Rect::new(5, 3, 10, 4));
        assert_eq!(centered(area, 30, 20), area);
    }
}
