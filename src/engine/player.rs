//! The token player: walks a token list one token at a time, suspending at
//! waits and resuming on later ticks.

use super::config::WriterConfig;
use super::format::FormatState;
use super::host::{Stage, TextTarget, Vec3};
use super::input::InputLatch;
use super::reveal::{Progress, Reveal, RevealStyle};
use super::timing::{
    parse_param, TickBudget, TimingState, DEFAULT_FLASH_DURATION, DEFAULT_PUNCH_INTENSITY,
    DEFAULT_WAIT, PUNCH_DURATION,
};
use crate::markup::{Token, TokenKind};

/// Where the walk currently is.
#[derive(Debug, Clone)]
enum Step {
    /// About to process `tokens[index]`.
    Next,
    Reveal(Reveal),
    Sleeping { remaining: f32 },
    /// `fresh` is set until the first tick after the wait began.
    AwaitInput { clear: bool, fresh: bool },
}

/// What a single token asks the walk to do next.
enum Dispatch {
    Continue,
    Suspend(Step),
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Audio {
    Once,
    Loop,
    Pause,
    Stop,
}

/// Resume state of one play.
///
/// Owns its format and timing state; nothing here outlives the play.
#[derive(Debug, Clone)]
pub struct Player {
    tokens: Vec<Token>,
    index: usize,
    format: FormatState,
    timing: TimingState,
    whole_words: bool,
    hidden_open: String,
    step: Step,
}

impl Player {
    pub fn new(tokens: Vec<Token>, config: &WriterConfig) -> Self {
        Self {
            tokens,
            index: 0,
            format: FormatState::new(),
            timing: TimingState::new(config),
            whole_words: config.write_whole_words,
            hidden_open: format!("<color={}>", config.hidden_text_color.to_hex()),
            step: Step::Next,
        }
    }

    /// Index of the token being processed.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn format(&self) -> &FormatState {
        &self.format
    }

    pub fn timing(&self) -> &TimingState {
        &self.timing
    }

    /// Whether the walk is parked on an input wait.
    pub fn is_waiting_for_input(&self) -> bool {
        matches!(self.step, Step::AwaitInput { .. })
    }

    /// Spend `dt` seconds on the walk, processing tokens until the next
    /// suspension. `Done` means the last token was processed or an exit tag
    /// was reached.
    pub(crate) fn resume(
        &mut self,
        dt: f32,
        target: &mut dyn TextTarget,
        stage: &mut Stage,
        input: &InputLatch,
    ) -> Progress {
        let mut budget = TickBudget::new(dt);
        loop {
            match &mut self.step {
                Step::Next => {
                    let Some(token) = self.tokens.get(self.index).cloned() else {
                        return Progress::Done;
                    };
                    input.clear();
                    log::trace!("token {}: {:?} {:?}", self.index, token.kind, token.parameter);
                    match self.dispatch(&token, target, stage) {
                        Dispatch::Continue => self.index += 1,
                        Dispatch::Suspend(step) => self.step = step,
                        Dispatch::Exit => {
                            log::debug!("exit tag at token {}", self.index);
                            self.index = self.tokens.len();
                            return Progress::Done;
                        }
                    }
                }
                Step::Reveal(reveal) => match reveal.advance(&mut budget, &self.timing, target) {
                    Progress::Pending => return Progress::Pending,
                    Progress::Done => self.finish_token(),
                },
                Step::Sleeping { remaining } => match budget.spend(*remaining) {
                    Some(left) => {
                        *remaining = left;
                        return Progress::Pending;
                    }
                    None => self.finish_token(),
                },
                Step::AwaitInput { clear, fresh } => {
                    if *fresh {
                        *fresh = false;
                        return Progress::Pending;
                    }
                    if !input.take() {
                        return Progress::Pending;
                    }
                    if *clear {
                        target.set_text("");
                    }
                    budget.drain();
                    self.finish_token();
                }
            }
        }
    }

    fn finish_token(&mut self) {
        self.step = Step::Next;
        self.index += 1;
    }

    fn dispatch(
        &mut self,
        token: &Token,
        target: &mut dyn TextTarget,
        stage: &mut Stage,
    ) -> Dispatch {
        let parameter = token.parameter.as_str();
        match token.kind {
            TokenKind::Words => return Dispatch::Suspend(Step::Reveal(self.reveal(parameter, target))),
            TokenKind::BoldStart => self.format.bold = true,
            TokenKind::BoldEnd => self.format.bold = false,
            TokenKind::ItalicStart => self.format.italic = true,
            TokenKind::ItalicEnd => self.format.italic = false,
            TokenKind::ColorStart => self.format.color = Some(parameter.to_string()),
            TokenKind::ColorEnd => self.format.color = None,
            TokenKind::Wait => {
                return Dispatch::Suspend(Step::Sleeping {
                    remaining: parse_param(parameter, DEFAULT_WAIT),
                })
            }
            TokenKind::WaitForInputNoClear => {
                return Dispatch::Suspend(Step::AwaitInput {
                    clear: false,
                    fresh: true,
                })
            }
            TokenKind::WaitForInputAndClear => {
                return Dispatch::Suspend(Step::AwaitInput {
                    clear: true,
                    fresh: true,
                })
            }
            TokenKind::WaitOnPunctuationStart => self.timing.set_punctuation_pause(parameter),
            TokenKind::WaitOnPunctuationEnd => self.timing.reset_punctuation_pause(),
            TokenKind::Clear => target.set_text(""),
            TokenKind::SpeedStart => self.timing.set_speed(parameter),
            TokenKind::SpeedEnd => self.timing.reset_speed(),
            TokenKind::Exit => return Dispatch::Exit,
            TokenKind::Message => {
                if let Some(broadcast) = stage.broadcast.as_deref_mut() {
                    broadcast.publish(parameter);
                }
            }
            TokenKind::VerticalPunch => {
                let intensity = parse_param(parameter, DEFAULT_PUNCH_INTENSITY);
                shake(stage, Vec3::new(0.0, intensity, 0.0));
            }
            TokenKind::HorizontalPunch => {
                let intensity = parse_param(parameter, DEFAULT_PUNCH_INTENSITY);
                shake(stage, Vec3::new(intensity, 0.0, 0.0));
            }
            TokenKind::Punch => {
                let intensity = parse_param(parameter, DEFAULT_PUNCH_INTENSITY);
                shake(stage, Vec3::new(intensity, intensity, 0.0));
            }
            TokenKind::Flash => {
                let duration = parse_param(parameter, DEFAULT_FLASH_DURATION);
                if let Some(effects) = stage.effects.as_deref_mut() {
                    effects.flash(duration);
                }
            }
            TokenKind::Audio => audio(stage, parameter, Audio::Once),
            TokenKind::AudioLoop => audio(stage, parameter, Audio::Loop),
            TokenKind::AudioPause => audio(stage, parameter, Audio::Pause),
            TokenKind::AudioStop => audio(stage, parameter, Audio::Stop),
        }
        Dispatch::Continue
    }

    fn reveal(&self, text: &str, target: &mut dyn TextTarget) -> Reveal {
        let rich = target.supports_rich_text();
        let style = if rich {
            RevealStyle {
                open: self.format.open_markup(),
                close: self.format.close_markup(),
                hidden_open: Some(self.hidden_open.clone()),
                whole_words: self.whole_words,
            }
        } else {
            RevealStyle {
                whole_words: self.whole_words,
                ..RevealStyle::default()
            }
        };
        Reveal::new(text, target.text(), style)
    }
}

fn shake(stage: &mut Stage, axis: Vec3) {
    if let Some(effects) = stage.effects.as_deref_mut() {
        effects.shake(axis, PUNCH_DURATION);
    }
}

fn audio(stage: &mut Stage, name: &str, action: Audio) {
    let Some(lookup) = stage.audio.as_deref_mut() else {
        return;
    };
    let Some(source) = lookup.find_audio_source(name) else {
        log::warn!("no audio source named {name:?}");
        return;
    };
    match action {
        Audio::Once => source.play_once(),
        Audio::Loop => source.play_looping(),
        Audio::Pause => source.pause(),
        Audio::Stop => source.stop(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::color::Color;
    use crate::markup::tokenize;

    #[derive(Default)]
    struct Screen {
        text: String,
        rich: bool,
    }

    impl TextTarget for Screen {
        fn text(&self) -> String {
            self.text.clone()
        }
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
        }
        fn supports_rich_text(&self) -> bool {
            self.rich
        }
        fn set_color(&mut self, _color: Color) {}
        fn set_alpha(&mut self, _alpha: f32) {}
    }

    fn instant() -> WriterConfig {
        WriterConfig {
            writing_speed: 0.0,
            punctuation_pause: 0.0,
            ..WriterConfig::default()
        }
    }

    fn run(markup: &str, rich: bool) -> (Player, Screen, Progress) {
        let mut player = Player::new(tokenize(markup), &instant());
        let mut screen = Screen {
            rich,
            ..Screen::default()
        };
        let progress = player.resume(0.0, &mut screen, &mut Stage::new(), &InputLatch::new());
        (player, screen, progress)
    }

    #[test]
    fn test_instant_play_finishes_in_one_resume() {
        let (_, screen, progress) = run("Hello, world!", true);
        assert_eq!(progress, Progress::Done);
        assert_eq!(screen.text, "Hello, world!");
    }

    #[test]
    fn test_format_tags_produce_markup() {
        let (_, screen, _) = run("A<b>B</b><color=red>C</color>", true);
        assert_eq!(screen.text, "A<b>B</b><color=red>C</color>");
    }

    #[test]
    fn test_plain_target_gets_no_markup() {
        let (_, screen, _) = run("A<b>B</b><i>C", false);
        assert_eq!(screen.text, "ABC");
    }

    #[test]
    fn test_unbalanced_end_is_noop() {
        let (player, screen, _) = run("</b>x</i></color>", true);
        assert_eq!(screen.text, "x");
        assert!(player.format().is_plain());
    }

    #[test]
    fn test_unterminated_start_stays_active() {
        let (player, screen, _) = run("<i>one two", true);
        assert_eq!(screen.text, "<i>one two</i>");
        assert!(player.format().italic);
    }

    #[test]
    fn test_clear_tag_wipes_text() {
        let (_, screen, _) = run("gone<clear>kept", true);
        assert_eq!(screen.text, "kept");
    }

    #[test]
    fn test_exit_stops_walk() {
        let (player, screen, progress) = run("a<x>b", true);
        assert_eq!(progress, Progress::Done);
        assert_eq!(screen.text, "a");
        assert_eq!(player.position(), 3);
    }

    #[test]
    fn test_speed_tags_update_timing() {
        let (player, _, _) = run("<s=12>", true);
        assert_eq!(player.timing().writing_speed, 12.0);
        let (player, _, _) = run("<s=12></s>", true);
        assert_eq!(player.timing().writing_speed, 0.0);
        let (player, _, _) = run("<s=abc>", true);
        assert_eq!(player.timing().writing_speed, 0.0);
    }

    #[test]
    fn test_wait_suspends_until_time_passes() {
        let mut player = Player::new(tokenize("a<w=0.5>b"), &instant());
        let mut screen = Screen::default();
        let mut stage = Stage::new();
        let input = InputLatch::new();

        assert_eq!(player.resume(0.0, &mut screen, &mut stage, &input), Progress::Pending);
        assert_eq!(screen.text, "a");
        assert_eq!(player.resume(0.25, &mut screen, &mut stage, &input), Progress::Pending);
        assert_eq!(screen.text, "a");
        assert_eq!(player.resume(0.25, &mut screen, &mut stage, &input), Progress::Done);
        assert_eq!(screen.text, "ab");
    }

    #[test]
    fn test_bad_wait_defaults_to_one_second() {
        let mut player = Player::new(tokenize("<w=soon>b"), &instant());
        let mut screen = Screen::default();
        let mut stage = Stage::new();
        let input = InputLatch::new();

        player.resume(0.0, &mut screen, &mut stage, &input);
        assert_eq!(player.resume(0.75, &mut screen, &mut stage, &input), Progress::Pending);
        assert_eq!(player.resume(0.25, &mut screen, &mut stage, &input), Progress::Done);
    }

    #[test]
    fn test_input_wait_needs_a_later_tick() {
        let mut player = Player::new(tokenize("a<wi>b"), &instant());
        let mut screen = Screen::default();
        let mut stage = Stage::new();
        let input = InputLatch::new();

        assert_eq!(player.resume(0.0, &mut screen, &mut stage, &input), Progress::Pending);
        assert!(player.is_waiting_for_input());
        assert_eq!(player.resume(1.0, &mut screen, &mut stage, &input), Progress::Pending);
        assert_eq!(screen.text, "a");

        input.set();
        assert_eq!(player.resume(0.0, &mut screen, &mut stage, &input), Progress::Done);
        assert_eq!(screen.text, "ab");
        assert!(!input.is_set());
    }

    #[test]
    fn test_input_before_wait_is_discarded() {
        let mut player = Player::new(tokenize("a<wi>b"), &instant());
        let mut screen = Screen::default();
        let mut stage = Stage::new();
        let input = InputLatch::new();
        input.set();

        player.resume(0.0, &mut screen, &mut stage, &input);
        assert_eq!(player.resume(0.0, &mut screen, &mut stage, &input), Progress::Pending);
        assert_eq!(screen.text, "a");
    }
}
