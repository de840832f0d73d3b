//! Terminal user interface for the live waveform view.
//!
//! Draws the waveform canvas with a status footer and maps key presses to
//! session commands.

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{stdout, Stdout};
use std::time::Duration;

use crate::waveform::{PixelCanvas, RecordingState};

use super::session::LiveSession;

/// User input command in the live view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveCommand {
    /// No key pressed
    Continue,
    /// Pause/resume recording (Space key)
    TogglePause,
    /// Stop or restart recording ('s' key)
    ToggleRecording,
    /// Switch between half and full width ('f' key)
    ToggleFullscreen,
    /// Show or hide the live bar ('a' key)
    ToggleAnimation,
    /// Exit (Escape, 'q' or Ctrl+C)
    Quit,
}

impl LiveCommand {
    /// Maps a key press to a command.
    pub fn from_key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Self::Quit,
            KeyCode::Char('q') | KeyCode::Esc => Self::Quit,
            KeyCode::Char(' ') => Self::TogglePause,
            KeyCode::Char('s') => Self::ToggleRecording,
            KeyCode::Char('f') => Self::ToggleFullscreen,
            KeyCode::Char('a') => Self::ToggleAnimation,
            _ => Self::Continue,
        }
    }
}

/// Terminal UI hosting the waveform canvas.
pub struct WavetrailTui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    canvas: PixelCanvas,
}

impl WavetrailTui {
    /// Creates a new TUI instance and enters alternate screen mode.
    ///
    /// # Errors
    /// - If terminal cannot be initialized
    /// - If raw mode cannot be enabled
    /// - If alternate screen cannot be entered
    pub fn new() -> anyhow::Result<Self> {
        enable_raw_mode()?;

        // Drop never runs if construction fails, so undo raw mode here
        let terminal = undo_on_error(open_terminal(), || {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
        })?;

        Ok(WavetrailTui {
            terminal,
            canvas: PixelCanvas::new(0, 0),
        })
    }

    /// Advances the session by one tick and draws the frame.
    ///
    /// # Errors
    /// - If terminal rendering fails
    pub fn render(&mut self, session: &mut LiveSession) -> anyhow::Result<()> {
        let canvas = &mut self.canvas;

        self.terminal.draw(|frame| {
            let area = frame.area();
            let footer_height = 1;

            let canvas_area = Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: area.height.saturating_sub(footer_height),
            };
            let footer_area = Rect {
                x: area.x,
                y: area.y + canvas_area.height,
                width: area.width,
                height: area.height.min(footer_height),
            };

            canvas.fit_area(canvas_area);
            session.tick(&mut *canvas);
            frame.render_widget(&*canvas, canvas_area);

            frame.render_widget(status_line(session), footer_area);
        })?;

        Ok(())
    }

    /// Waits up to `timeout` for a key press and returns the matching command.
    ///
    /// # Errors
    /// - If event polling fails
    pub fn handle_input(&mut self, timeout: Duration) -> anyhow::Result<LiveCommand> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(LiveCommand::Continue);
                }
                let command = LiveCommand::from_key(key.code, key.modifiers);
                if command != LiveCommand::Continue {
                    tracing::debug!("Key {:?} mapped to {:?}", key.code, command);
                }
                return Ok(command);
            }
        }
        Ok(LiveCommand::Continue)
    }

    /// Cleans up terminal state and exits alternate screen mode.
    ///
    /// # Errors
    /// - If terminal mode cannot be disabled
    /// - If cursor cannot be shown
    pub fn cleanup(&mut self) -> anyhow::Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for WavetrailTui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Enters the alternate screen and wraps stdout in a ratatui terminal.
fn open_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Runs `undo` when `result` is an error, then passes `result` through.
fn undo_on_error<T>(result: anyhow::Result<T>, undo: impl FnOnce()) -> anyhow::Result<T> {
    if let Err(e) = &result {
        tracing::error!("Terminal setup failed, restoring terminal: {e}");
        undo();
    }
    result
}

/// Footer with state indicator, elapsed time, bar count and key hints.
fn status_line(session: &LiveSession) -> Paragraph<'static> {
    let indicator = match session.state() {
        RecordingState::Recording => Span::styled("● ", Style::default().fg(Color::Red)),
        RecordingState::Paused => Span::styled("⏸ ", Style::default().fg(Color::Yellow)),
        RecordingState::Stopped => Span::styled("■ ", Style::default().fg(Color::DarkGray)),
    };

    let duration_secs = session.recording_duration().as_secs();
    let minutes = duration_secs / 60;
    let secs = duration_secs % 60;

    let line = Line::from(vec![
        indicator,
        Span::raw(format!("{minutes}:{secs:02}")),
        Span::raw(" / "),
        Span::raw(format!("{} bars", session.picks().len())),
        Span::styled(
            "   space pause · s stop · f fullscreen · a live bar · q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    Paragraph::new(line).style(
        Style::default()
            .fg(Color::Rgb(185, 207, 212))
            .bg(Color::Rgb(0, 0, 0)),
    )
}
