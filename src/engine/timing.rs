// Timing state and tick bookkeeping for the player.

use super::config::WriterConfig;

/// Seconds waited by `<w>` when its parameter is missing or bad.
pub const DEFAULT_WAIT: f32 = 1.0;
/// Shake intensity used by the punch tags when their parameter is bad.
pub const DEFAULT_PUNCH_INTENSITY: f32 = 10.0;
/// How long a punch shakes.
pub const PUNCH_DURATION: f32 = 0.5;
/// Fade duration used by `<flash>` when its parameter is bad.
pub const DEFAULT_FLASH_DURATION: f32 = 0.2;

/// Characters that trigger the punctuation pause once revealed.
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '.' | '?' | '!' | ',' | ':' | ';' | ')')
}

/// Parse a numeric tag parameter, falling back to `default` when it is not a
/// finite number.
pub fn parse_param(parameter: &str, default: f32) -> f32 {
    let parameter = parameter.trim();
    if parameter.is_empty() {
        return default;
    }
    match parameter.parse::<f32>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            log::warn!("bad numeric tag parameter {parameter:?}, using {default}");
            default
        }
    }
}

/// Writing speed and punctuation pause in effect for a play.
///
/// Starts from the configured values; tags override them and the matching
/// end tags restore the configured values.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingState {
    pub writing_speed: f32,
    pub punctuation_pause: f32,
    base_speed: f32,
    base_pause: f32,
}

impl TimingState {
    pub fn new(config: &WriterConfig) -> Self {
        Self {
            writing_speed: config.writing_speed,
            punctuation_pause: config.punctuation_pause,
            base_speed: config.writing_speed,
            base_pause: config.punctuation_pause,
        }
    }

    /// `<s=…>`; a bad value means the configured speed.
    pub fn set_speed(&mut self, parameter: &str) {
        self.writing_speed = parse_param(parameter, self.base_speed);
    }

    pub fn reset_speed(&mut self) {
        self.writing_speed = self.base_speed;
    }

    /// `<wp=…>`; a bad value means the configured pause.
    pub fn set_punctuation_pause(&mut self, parameter: &str) {
        self.punctuation_pause = parse_param(parameter, self.base_pause);
    }

    pub fn reset_punctuation_pause(&mut self) {
        self.punctuation_pause = self.base_pause;
    }

    /// Delay between reveal steps, `None` when writing instantly.
    pub fn step_delay(&self) -> Option<f32> {
        (self.writing_speed > 0.0).then(|| 1.0 / self.writing_speed)
    }
}

/// Time left to spend within the current tick.
///
/// A wait that finishes partway through a tick hands the leftover to the
/// next wait, so reveal speed does not depend on frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TickBudget(f32);

impl TickBudget {
    pub fn new(dt: f32) -> Self {
        Self(dt.max(0.0))
    }

    /// Spend toward a wait of `remaining` seconds. Returns what is still left
    /// of the wait, or `None` if the budget covered it.
    pub fn spend(&mut self, remaining: f32) -> Option<f32> {
        let left = remaining.max(0.0) - self.0;
        if left > 0.0 {
            self.0 = 0.0;
            Some(left)
        } else {
            self.0 = (-left).max(0.0);
            None
        }
    }

    pub fn drain(&mut self) {
        self.0 = 0.0;
    }
}
