use crate::app::{App, AppEvent, AppMode};
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::view::{render_status_line, render_story, shifted};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Instant;

/// Maps a key press to an app event: Esc and Ctrl-C quit, anything else
/// counts as input.
pub fn key_to_event(key: KeyEvent) -> AppEvent {
    match key.code {
        KeyCode::Esc => AppEvent::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
        _ => AppEvent::Input,
    }
}

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
        })
    }

    /// Draw, poll for keys until the frame is due, then tick the app with
    /// the measured frame time. Returns once the app quits.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<AppMode> {
        let frame = app.frame_interval();
        let mut last_tick = Instant::now();

        loop {
            if app.mode() == AppMode::Quit {
                return Ok(AppMode::Quit);
            }
            self.render_frame(app)?;

            let timeout = frame.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_event(key_to_event(key));
                    }
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= frame {
                app.handle_event(AppEvent::Tick(elapsed.as_secs_f32()));
                last_tick = Instant::now();
            }
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let render_state = app.get_render_state();
        let theme = *app.theme();

        self.terminal.draw(|frame| {
            let area = frame.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(area);

            frame.render_widget(
                Block::default()
                    .style(Style::default().bg(theme.flashed_background(render_state.flash))),
                area,
            );
            let story_area = shifted(chunks[0], render_state.offset, chunks[0]);
            frame.render_widget(render_story(&render_state, &theme), story_area);
            frame.render_widget(render_status_line(&render_state, &theme), chunks[1]);
        })?;

        Ok(())
    }
}
