//! Terminal implementations of the writer's collaborators.

use crate::engine::{AudioLookup, AudioSource, Color, Effects, TextTarget, Vec3};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

/// What the view draws: the writer's output plus the base text color.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub text: String,
    pub color: Color,
    pub rich_text: bool,
}

impl Surface {
    pub fn new(rich_text: bool) -> Self {
        Self {
            text: String::new(),
            color: Color::WHITE,
            rich_text,
        }
    }
}

pub type SharedSurface = Rc<RefCell<Surface>>;

/// Writer target backed by a [`Surface`] the view also reads.
#[derive(Debug, Clone)]
pub struct TerminalTarget {
    surface: SharedSurface,
}

impl TerminalTarget {
    pub fn new(surface: SharedSurface) -> Self {
        Self { surface }
    }
}

impl TextTarget for TerminalTarget {
    fn text(&self) -> String {
        self.surface.borrow().text.clone()
    }

    fn set_text(&mut self, text: &str) {
        let mut surface = self.surface.borrow_mut();
        surface.text.clear();
        surface.text.push_str(text);
    }

    fn supports_rich_text(&self) -> bool {
        self.surface.borrow().rich_text
    }

    fn set_color(&mut self, color: Color) {
        self.surface.borrow_mut().color = color;
    }

    fn set_alpha(&mut self, alpha: f32) {
        let mut surface = self.surface.borrow_mut();
        surface.color = surface.color.with_alpha(alpha);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Shake {
    axis: Vec3,
    duration: f32,
    elapsed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Flash {
    duration: f32,
    elapsed: f32,
}

/// Cells of displacement per unit of punch intensity.
const SHAKE_CELLS_PER_UNIT: f32 = 0.2;
const MAX_SHAKE_CELLS: f32 = 4.0;
/// Direction flips per second while shaking.
const SHAKE_FREQUENCY: f32 = 30.0;

/// Screen shake and flash, advanced once per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScreenEffects {
    shake: Option<Shake>,
    flash: Option<Flash>,
}

impl ScreenEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        if let Some(shake) = &mut self.shake {
            shake.elapsed += dt;
            if shake.elapsed >= shake.duration {
                self.shake = None;
            }
        }
        if let Some(flash) = &mut self.flash {
            flash.elapsed += dt;
            if flash.elapsed >= flash.duration * 2.0 {
                self.flash = None;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.shake.is_some() || self.flash.is_some()
    }

    /// Current shake displacement in cells, `(columns, rows)`.
    pub fn offset(&self) -> (i16, i16) {
        let Some(shake) = self.shake else {
            return (0, 0);
        };
        let decay = 1.0 - shake.elapsed / shake.duration;
        let sign = if (shake.elapsed * SHAKE_FREQUENCY) as u32 % 2 == 0 {
            1.0
        } else {
            -1.0
        };
        let cells = |intensity: f32| {
            let amount = (intensity.abs() * SHAKE_CELLS_PER_UNIT).min(MAX_SHAKE_CELLS) * decay;
            (amount.round() * sign) as i16
        };
        (cells(shake.axis.x), cells(shake.axis.y))
    }

    /// Whiteness of the screen, `0.0..=1.0`: rises over the flash duration
    /// and falls over the same duration.
    pub fn flash_level(&self) -> f32 {
        let Some(flash) = self.flash else {
            return 0.0;
        };
        if flash.duration <= 0.0 {
            return 0.0;
        }
        let level = if flash.elapsed < flash.duration {
            flash.elapsed / flash.duration
        } else {
            2.0 - flash.elapsed / flash.duration
        };
        level.clamp(0.0, 1.0)
    }
}

/// Shared handle so the view can read what the writer triggered.
#[derive(Debug, Clone, Default)]
pub struct EffectsHandle(pub Rc<RefCell<ScreenEffects>>);

impl Effects for EffectsHandle {
    fn shake(&mut self, axis: Vec3, duration: f32) {
        log::debug!("shake {axis:?} for {duration}s");
        self.0.borrow_mut().shake = Some(Shake {
            axis,
            duration: duration.max(0.0),
            elapsed: 0.0,
        });
    }

    fn flash(&mut self, duration: f32) {
        log::debug!("flash for {duration}s");
        self.0.borrow_mut().flash = Some(Flash {
            duration: duration.max(0.0),
            elapsed: 0.0,
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SoundState {
    #[default]
    Stopped,
    Playing,
    Looping,
    Paused,
}

/// A sound the terminal can only approximate with the bell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSound {
    name: String,
    state: SoundState,
    bell: bool,
}

impl TerminalSound {
    pub fn state(&self) -> SoundState {
        self.state
    }

    fn ring(&self) {
        if self.bell {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(b"\x07");
            let _ = stdout.flush();
        }
    }
}

impl AudioSource for TerminalSound {
    fn play_once(&mut self) {
        log::info!("audio {:?}: play", self.name);
        self.ring();
        self.state = SoundState::Playing;
    }

    fn play_looping(&mut self) {
        log::info!("audio {:?}: loop", self.name);
        self.ring();
        self.state = SoundState::Looping;
    }

    fn pause(&mut self) {
        log::info!("audio {:?}: pause", self.name);
        self.state = SoundState::Paused;
    }

    fn stop(&mut self) {
        log::info!("audio {:?}: stop", self.name);
        self.state = SoundState::Stopped;
    }
}

/// Registry of named terminal sounds.
///
/// Only registered names resolve; audio tags naming anything else are
/// ignored by the writer.
#[derive(Debug, Clone, Default)]
pub struct TerminalAudio {
    sources: HashMap<String, TerminalSound>,
    bell: bool,
}

impl TerminalAudio {
    /// `bell` rings the terminal bell whenever a sound starts.
    pub fn new(bell: bool) -> Self {
        Self {
            sources: HashMap::new(),
            bell,
        }
    }

    pub fn register(&mut self, name: impl Into<String>) {
        let name = name.into();
        let sound = TerminalSound {
            name: name.clone(),
            state: SoundState::Stopped,
            bell: self.bell,
        };
        self.sources.insert(name, sound);
    }

    pub fn with_sounds<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.register(name);
        }
        self
    }

    pub fn state(&self, name: &str) -> Option<SoundState> {
        self.sources.get(name).map(TerminalSound::state)
    }
}

impl AudioLookup for TerminalAudio {
    fn find_audio_source(&mut self, name: &str) -> Option<&mut dyn AudioSource> {
        self.sources
            .get_mut(name)
            .map(|sound| sound as &mut dyn AudioSource)
    }
}
