use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::engine::{Stage, Writer, WriterConfig};
use crate::ui::stage::{EffectsHandle, ScreenEffects, SharedSurface, Surface, TerminalAudio, TerminalTarget};
use crate::ui::theme::Theme;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Settings for a terminal play session.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub writer: WriterConfig,
    pub theme: Theme,
    pub frame_rate: u32,
    /// Style markup instead of showing it verbatim.
    pub rich_text: bool,
    /// Names resolvable by the audio tags.
    pub sounds: Vec<String>,
    pub bell: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            writer: WriterConfig::default(),
            theme: Theme::default(),
            frame_rate: DEFAULT_FRAME_RATE,
            rich_text: true,
            sounds: Vec::new(),
            bell: false,
        }
    }
}

pub struct App {
    mode: AppMode,
    writer: Writer,
    surface: SharedSurface,
    effects: Rc<RefCell<ScreenEffects>>,
    messages: Receiver<String>,
    last_message: Option<String>,
    finished: Rc<Cell<bool>>,
    theme: Theme,
    frame_rate: u32,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let surface = Rc::new(RefCell::new(Surface::new(config.rich_text)));
        let effects = Rc::new(RefCell::new(ScreenEffects::new()));
        let (sender, messages) = mpsc::channel();

        let stage = Stage::new()
            .with_audio(TerminalAudio::new(config.bell).with_sounds(config.sounds))
            .with_effects(EffectsHandle(effects.clone()))
            .with_broadcast(sender);
        let writer = Writer::new(config.writer)
            .with_target(TerminalTarget::new(surface.clone()))
            .with_stage(stage);

        Self {
            mode: AppMode::Finished,
            writer,
            surface,
            effects,
            messages,
            last_message: None,
            finished: Rc::new(Cell::new(false)),
            theme: config.theme,
            frame_rate: config.frame_rate.max(1),
        }
    }

    /// Start playing `script` from an empty screen.
    pub fn start(&mut self, script: &str) {
        let finished = Rc::new(Cell::new(false));
        self.finished = finished.clone();
        self.mode = AppMode::Playing;
        self.last_message = None;
        self.writer
            .play(script, true, Some(Box::new(move || finished.set(true))));
        self.sync();
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn writer(&self) -> &Writer {
        &self.writer
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate as f64)
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match (self.mode, event) {
            (_, AppEvent::Quit) => {
                self.writer.stop();
                self.mode = AppMode::Quit;
            }
            (AppMode::Playing, AppEvent::Input) => self.writer.set_input_flag(),
            (AppMode::Finished, AppEvent::Input) => self.mode = AppMode::Quit,
            (_, AppEvent::Tick(dt)) => self.tick(dt),
            (AppMode::Quit, _) => {}
        }
    }

    /// Advance the writer and the screen effects by one frame.
    pub fn tick(&mut self, dt: f32) {
        if self.mode == AppMode::Quit {
            return;
        }
        self.effects.borrow_mut().tick(dt);
        self.writer.tick(dt);
        self.sync();
    }

    fn sync(&mut self) {
        while let Ok(message) = self.messages.try_recv() {
            log::info!("message: {message}");
            self.last_message = Some(message);
        }
        if self.mode == AppMode::Playing && self.finished.get() {
            log::debug!("script finished");
            self.mode = AppMode::Finished;
        }
    }

    pub fn get_render_state(&self) -> RenderState {
        let surface = self.surface.borrow();
        let effects = self.effects.borrow();
        RenderState {
            mode: self.mode,
            text: surface.text.clone(),
            rich_text: surface.rich_text,
            text_color: surface.color,
            offset: effects.offset(),
            flash: effects.flash_level(),
            message: self.last_message.clone(),
            waiting_for_input: self
                .writer
                .player()
                .is_some_and(|player| player.is_waiting_for_input()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> AppConfig {
        AppConfig {
            writer: WriterConfig {
                writing_speed: 0.0,
                ..WriterConfig::default()
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_start_instant_script_finishes() {
        let mut app = App::new(instant());
        app.start("Hello");
        assert_eq!(app.mode(), AppMode::Finished);
        assert_eq!(app.get_render_state().text, "Hello");
    }

    #[test]
    fn test_input_resumes_wait() {
        let mut app = App::new(instant());
        app.start("A<wi>B");
        assert_eq!(app.mode(), AppMode::Playing);
        assert!(app.get_render_state().waiting_for_input);

        app.handle_event(AppEvent::Input);
        app.handle_event(AppEvent::Tick(0.016));
        assert_eq!(app.mode(), AppMode::Finished);
        assert_eq!(app.get_render_state().text, "AB");
    }

    #[test]
    fn test_input_after_finish_quits() {
        let mut app = App::new(instant());
        app.start("done");
        app.handle_event(AppEvent::Input);
        assert_eq!(app.mode(), AppMode::Quit);
    }

    #[test]
    fn test_quit_stops_writer() {
        let mut app = App::new(instant());
        app.start("A<wi>B");
        app.handle_event(AppEvent::Quit);
        assert_eq!(app.mode(), AppMode::Quit);
        assert!(!app.writer().is_writing());
        app.handle_event(AppEvent::Tick(1.0));
        assert_eq!(app.get_render_state().text, "A");
    }

    #[test]
    fn test_broadcast_reaches_status() {
        let mut app = App::new(instant());
        app.start("<m=hello>Hi");
        assert_eq!(app.get_render_state().message.as_deref(), Some("hello"));
    }

    #[test]
    fn test_flash_is_visible_in_render_state() {
        let mut app = App::new(instant());
        app.start("<flash=0.5><w=10>x");
        app.handle_event(AppEvent::Tick(0.25));
        assert_eq!(app.get_render_state().flash, 0.5);
    }

    #[test]
    fn test_punch_offsets_screen() {
        let mut app = App::new(instant());
        app.start("<hpunch=10><w=10>x");
        assert_ne!(app.get_render_state().offset.0, 0);
        assert_eq!(app.get_render_state().offset.1, 0);
    }

    #[test]
    fn test_frame_interval_from_rate() {
        let app = App::new(AppConfig {
            frame_rate: 50,
            ..AppConfig::default()
        });
        assert_eq!(app.frame_interval(), Duration::from_millis(20));
    }
}
