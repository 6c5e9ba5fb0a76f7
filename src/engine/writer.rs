//! Public entry point: owns the collaborators and at most one play.

use super::color::Color;
use super::config::WriterConfig;
use super::host::{Stage, TextTarget};
use super::input::InputLatch;
use super::player::Player;
use super::reveal::Progress;
use crate::markup::{tokenize, Token};

/// Called once when a play finishes. Never called for a cancelled play.
pub type Completion = Box<dyn FnOnce()>;

struct Play {
    id: u64,
    player: Player,
    on_complete: Option<Completion>,
}

/// Typewriter driver.
///
/// `play` starts revealing markup; `tick` advances the reveal by the time
/// elapsed since the previous tick. Starting a new play cancels the running
/// one.
pub struct Writer {
    config: WriterConfig,
    target: Option<Box<dyn TextTarget>>,
    stage: Stage,
    input: InputLatch,
    play: Option<Play>,
    plays_started: u64,
}

impl Writer {
    pub fn new(config: WriterConfig) -> Self {
        Self {
            config,
            target: None,
            stage: Stage::new(),
            input: InputLatch::new(),
            play: None,
            plays_started: 0,
        }
    }

    pub fn with_target(mut self, target: impl TextTarget + 'static) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Changes apply from the next play.
    pub fn config_mut(&mut self) -> &mut WriterConfig {
        &mut self.config
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn has_text_target(&self) -> bool {
        self.target.is_some()
    }

    /// Current target text, empty without a target.
    pub fn text(&self) -> String {
        self.target.as_ref().map(|t| t.text()).unwrap_or_default()
    }

    pub fn supports_rich_text(&self) -> bool {
        self.target.as_ref().is_some_and(|t| t.supports_rich_text())
    }

    pub fn set_text_color(&mut self, color: Color) {
        if let Some(target) = self.target.as_deref_mut() {
            target.set_color(color);
        }
    }

    pub fn set_text_alpha(&mut self, alpha: f32) {
        if let Some(target) = self.target.as_deref_mut() {
            target.set_alpha(alpha);
        }
    }

    /// Handle for input sources that live elsewhere, e.g. another thread.
    pub fn input_latch(&self) -> InputLatch {
        self.input.clone()
    }

    /// Signal that some input happened. Releases a pending `<wi>` or `<wc>`
    /// on the next tick.
    pub fn set_input_flag(&self) {
        self.input.set();
    }

    pub fn is_writing(&self) -> bool {
        self.play.is_some()
    }

    /// The running play, if any.
    pub fn player(&self) -> Option<&Player> {
        self.play.as_ref().map(|play| &play.player)
    }

    /// Tokenize `content` and start revealing it.
    ///
    /// Without a text target this does nothing at all and `on_complete` is
    /// dropped uncalled. Otherwise any running play is cancelled and the new
    /// play runs until its first suspension before returning. Every play
    /// writes from empty text; `clear_first` empties the target before the
    /// script is even tokenized.
    pub fn play(&mut self, content: &str, clear_first: bool, on_complete: Option<Completion>) {
        let Some(target) = self.target.as_deref_mut() else {
            log::debug!("no text target, skipping play");
            return;
        };
        if clear_first {
            target.set_text("");
        }
        self.play_tokens(tokenize(content), on_complete);
    }

    /// Start revealing an already tokenized script.
    pub fn play_tokens(&mut self, tokens: Vec<Token>, on_complete: Option<Completion>) {
        let Some(target) = self.target.as_deref_mut() else {
            log::debug!("no text target, skipping play");
            return;
        };
        if !target.text().is_empty() {
            target.set_text("");
        }
        self.stop();
        self.input.clear();
        self.plays_started += 1;
        log::debug!("play #{} started with {} tokens", self.plays_started, tokens.len());
        self.play = Some(Play {
            id: self.plays_started,
            player: Player::new(tokens, &self.config),
            on_complete,
        });
        self.resume(0.0);
    }

    /// Advance the running play by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.resume(dt);
    }

    /// Cancel the running play. Its completion callback is dropped.
    pub fn stop(&mut self) {
        if let Some(play) = self.play.take() {
            log::debug!(
                "play #{} cancelled at token {}",
                play.id,
                play.player.position()
            );
        }
    }

    fn resume(&mut self, dt: f32) {
        let (Some(play), Some(target)) = (self.play.as_mut(), self.target.as_deref_mut()) else {
            return;
        };
        let progress = play.player.resume(dt, target, &mut self.stage, &self.input);
        if progress == Progress::Done {
            if let Some(play) = self.play.take() {
                log::debug!("play #{} finished", play.id);
                if let Some(on_complete) = play.on_complete {
                    on_complete();
                }
            }
        }
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(WriterConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedScreen {
        text: Rc<RefCell<String>>,
        color: Rc<Cell<Option<Color>>>,
    }

    impl TextTarget for SharedScreen {
        fn text(&self) -> String {
            self.text.borrow().clone()
        }
        fn set_text(&mut self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }
        fn supports_rich_text(&self) -> bool {
            false
        }
        fn set_color(&mut self, color: Color) {
            self.color.set(Some(color));
        }
        fn set_alpha(&mut self, alpha: f32) {
            let color = self.color.get().unwrap_or_default();
            self.color.set(Some(color.with_alpha(alpha)));
        }
    }

    fn counter() -> (Rc<Cell<u32>>, Completion) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, Box::new(move || inner.set(inner.get() + 1)))
    }

    #[test]
    fn test_play_without_target_does_nothing() {
        let mut writer = Writer::default();
        let (count, done) = counter();
        writer.play("hello", true, Some(done));
        assert!(!writer.is_writing());
        assert_eq!(count.get(), 0);
        assert_eq!(writer.text(), "");
    }

    #[test]
    fn test_instant_play_completes_inside_play() {
        let mut writer = Writer::new(WriterConfig {
            writing_speed: 0.0,
            punctuation_pause: 0.0,
            ..WriterConfig::default()
        })
        .with_target(SharedScreen::default());
        let (count, done) = counter();
        writer.play("hello", true, Some(done));
        assert_eq!(count.get(), 1);
        assert!(!writer.is_writing());
        assert_eq!(writer.text(), "hello");
    }

    #[test]
    fn test_play_starts_from_empty_text() {
        let screen = SharedScreen::default();
        *screen.text.borrow_mut() = "old ".to_string();
        let mut writer = Writer::new(WriterConfig {
            writing_speed: 0.0,
            ..WriterConfig::default()
        })
        .with_target(screen);

        writer.play("new", false, None);
        assert_eq!(writer.text(), "new");
        writer.play("fresh", true, None);
        assert_eq!(writer.text(), "fresh");
    }

    #[test]
    fn test_stop_drops_completion() {
        let mut writer = Writer::default().with_target(SharedScreen::default());
        let (count, done) = counter();
        writer.play("<w=1>late", true, Some(done));
        assert!(writer.is_writing());
        writer.stop();
        writer.tick(5.0);
        assert_eq!(count.get(), 0);
        assert_eq!(writer.text(), "");
    }

    #[test]
    fn test_color_and_alpha_forwarded() {
        let screen = SharedScreen::default();
        let color = screen.color.clone();
        let mut writer = Writer::default().with_target(screen);
        writer.set_text_color(Color::rgba(1.0, 0.0, 0.0, 1.0));
        writer.set_text_alpha(0.5);
        assert_eq!(color.get(), Some(Color::rgba(1.0, 0.0, 0.0, 0.5)));
    }

    #[test]
    fn test_set_input_flag_through_latch_handle() {
        let mut writer = Writer::new(WriterConfig {
            writing_speed: 0.0,
            ..WriterConfig::default()
        })
        .with_target(SharedScreen::default());
        let latch = writer.input_latch();
        writer.play("a<wi>b", true, None);
        assert!(writer.player().is_some_and(|p| p.is_waiting_for_input()));
        latch.set();
        writer.tick(0.016);
        assert_eq!(writer.text(), "ab");
        assert!(!writer.is_writing());
    }
}
