//! 配色
//!
//! 16色端末でも判別できる色のみを使う

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct Theme {
    pub window_border: Style,
    pub button: Style,
    pub button_focused: Style,
    pub text_field_border: Style,
    pub text_field_border_focused: Style,
    pub status_line: Style,
    pub hint: Style,
    pub dialog_border: Style,
    pub dialog_candidate: Style,
    pub notice_info: Style,
    pub notice_error: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            window_border: Style::default().fg(Color::Gray),
            button: Style::default().fg(Color::White),
            button_focused: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            text_field_border: Style::default().fg(Color::DarkGray),
            text_field_border_focused: Style::default().fg(Color::Cyan),
            status_line: Style::default().fg(Color::Green),
            hint: Style::default().fg(Color::DarkGray),
            dialog_border: Style::default().fg(Color::Yellow),
            dialog_candidate: Style::default().fg(Color::Gray),
            notice_info: Style::default().fg(Color::Cyan),
            notice_error: Style::default().fg(Color::Red),
        }
    }
}
