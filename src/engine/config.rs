// Configuration for the writer.
// Defaults match the stock typewriter behavior: 60 chars/sec, quarter-second
// punctuation pause, invisible white for unrevealed text.

use super::color::Color;
use super::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Writer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Characters per second (default 60). Zero or less writes instantly.
    pub writing_speed: f32,

    /// Seconds to pause after punctuation (default 0.25)
    pub punctuation_pause: f32,

    /// Color of the not-yet-revealed text (default transparent white)
    pub hidden_text_color: Color,

    /// Reveal whole words at a time instead of single characters
    pub write_whole_words: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            writing_speed: 60.0,
            punctuation_pause: 0.25,
            hidden_text_color: Color::INVISIBLE,
            write_whole_words: false,
        }
    }
}

impl WriterConfig {
    /// Parse a RON document and validate it.
    ///
    /// Missing fields take their defaults, so `(writing_speed: 30)` is a
    /// complete config.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: WriterConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a RON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        Self::from_ron_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.writing_speed.is_finite() || self.writing_speed < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "writing_speed",
                reason: format!("{} is not a non-negative number", self.writing_speed),
            });
        }
        if !self.punctuation_pause.is_finite() || self.punctuation_pause < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "punctuation_pause",
                reason: format!("{} is not a non-negative number", self.punctuation_pause),
            });
        }
        if self
            .hidden_text_color
            .channels()
            .iter()
            .any(|c| !(0.0..=1.0).contains(c))
        {
            return Err(ConfigError::InvalidValue {
                field: "hidden_text_color",
                reason: "channels must be within 0.0..=1.0".to_string(),
            });
        }
        Ok(())
    }
}
