use crate::app::App;
use crate::error::{AdaptError, Result, UiError};
use crate::logging;
use crate::ui::Renderer;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::time::Duration;

pub struct TuiApplication {
    app: App,
    renderer: Renderer,
}

impl TuiApplication {
    pub fn new() -> Self {
        Self {
            app: App::new(),
            renderer: Renderer::new(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        enter_terminal()?;
        logging::set_stderr_enabled(false);

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).map_err(|_| AdaptError::Ui(UiError::TerminalInit));
        let mut terminal = match terminal {
            Ok(terminal) => terminal,
            Err(err) => {
                restore_terminal();
                return Err(err);
            }
        };

        log::info!("event loop started");
        let loop_result = self.event_loop(&mut terminal);
        let show_cursor_result = terminal.show_cursor().map_err(|err| terminal_error("show cursor", err));
        drop(terminal);
        let cleanup_result = leave_terminal();
        logging::set_stderr_enabled(true);
        log::info!("event loop finished");

        loop_result.and(show_cursor_result).and(cleanup_result)
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while self.app.is_running() {
            self.renderer
                .render(terminal, &self.app)
                .map_err(|err| terminal_error("render", err))?;

            if event::poll(Duration::from_millis(100)).map_err(|err| terminal_error("event poll", err))? {
                match event::read().map_err(|err| terminal_error("event read", err))? {
                    Event::Key(key_event) => self.app.handle_key_event(key_event)?,
                    Event::Mouse(mouse_event) => self.handle_mouse(mouse_event)?,
                    Event::Paste(text) => self.app.paste(&text),
                    Event::Resize(_, _) | Event::FocusGained | Event::FocusLost => {}
                }
            }
        }

        Ok(())
    }

    fn handle_mouse(&mut self, mouse_event: MouseEvent) -> Result<()> {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }
        let Some(layout) = self.renderer.last_layout() else {
            return Ok(());
        };

        let (column, row) = (mouse_event.column, mouse_event.row);
        if let Some(button) = layout.button_at(column, row) {
            self.app.click(button)?;
        } else if layout.is_in_text_field(column, row) {
            self.app.click_text_field();
        }
        Ok(())
    }
}

impl Default for TuiApplication {
    fn default() -> Self {
        Self::new()
    }
}

fn enter_terminal() -> Result<()> {
    enable_raw_mode().map_err(|_| AdaptError::Ui(UiError::TerminalInit))?;
    let mut out = stdout();
    if let Err(err) = execute!(out, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste) {
        restore_terminal();
        return Err(terminal_error("enter alternate screen", err));
    }
    Ok(())
}

fn leave_terminal() -> Result<()> {
    let mut out = stdout();
    execute!(out, DisableBracketedPaste, DisableMouseCapture, LeaveAlternateScreen)
        .map_err(|err| terminal_error("leave alternate screen", err))?;
    disable_raw_mode().map_err(|err| terminal_error("disable raw mode", err))?;
    Ok(())
}

/// 端末を通常モードへ戻す（失敗は無視）
pub fn restore_terminal() {
    let mut out = stdout();
    let _ = execute!(out, DisableBracketedPaste, DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    logging::set_stderr_enabled(true);
}

fn terminal_error(context: &str, err: impl std::fmt::Display) -> AdaptError {
    AdaptError::Ui(UiError::Terminal {
        component: format!("{}: {}", context, err),
    })
}
