//! Collaborator traits the writer drives.
//!
//! The writer never talks to a concrete display, sound system or message
//! bus. Hosts implement these traits and hand them to the
//! writer; anything left out is simply skipped.

use super::color::Color;
use std::sync::mpsc::Sender;

/// Displacement axis for screen shakes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Where revealed text ends up.
pub trait TextTarget {
    /// Text currently displayed, markup included.
    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    /// Whether `<b>`, `<i>` and `<color=…>` in the text are interpreted.
    ///
    /// When false the writer emits no markup and omits unrevealed text.
    fn supports_rich_text(&self) -> bool;

    fn set_color(&mut self, color: Color);

    fn set_alpha(&mut self, alpha: f32);
}

/// A named sound.
pub trait AudioSource {
    fn play_once(&mut self);
    fn play_looping(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
}

/// Resolves audio tag parameters to sources.
pub trait AudioLookup {
    fn find_audio_source(&mut self, name: &str) -> Option<&mut dyn AudioSource>;
}

/// Screen effects. Both run on their own; the writer does not wait for them.
pub trait Effects {
    fn shake(&mut self, axis: Vec3, duration: f32);

    /// Fade to white over `duration`, then back over the same duration.
    fn flash(&mut self, duration: f32);
}

/// Receives `<m=…>` messages.
pub trait Broadcast {
    fn publish(&mut self, message: &str);
}

impl Broadcast for Sender<String> {
    fn publish(&mut self, message: &str) {
        // A dropped receiver just means nobody is listening.
        if self.send(message.to_string()).is_err() {
            log::debug!("broadcast receiver gone, dropping message {message:?}");
        }
    }
}

/// Optional side-effect collaborators. Missing ones turn their tags into
/// no-ops.
#[derive(Default)]
pub struct Stage {
    pub audio: Option<Box<dyn AudioLookup>>,
    pub effects: Option<Box<dyn Effects>>,
    pub broadcast: Option<Box<dyn Broadcast>>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_audio(mut self, audio: impl AudioLookup + 'static) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    pub fn with_effects(mut self, effects: impl Effects + 'static) -> Self {
        self.effects = Some(Box::new(effects));
        self
    }

    pub fn with_broadcast(mut self, broadcast: impl Broadcast + 'static) -> Self {
        self.broadcast = Some(Box::new(broadcast));
        self
    }
}
