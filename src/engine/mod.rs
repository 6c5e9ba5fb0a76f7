pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod host;
pub mod input;
pub mod player;
mod reveal;
pub mod timing;
pub mod writer;

pub use color::Color;
pub use config::WriterConfig;
pub use error::{load_script, ConfigError, LoadError};
pub use format::FormatState;
pub use host::{AudioLookup, AudioSource, Broadcast, Effects, Stage, TextTarget, Vec3};
pub use input::InputLatch;
pub use player::Player;
pub use timing::TimingState;
pub use writer::{Completion, Writer};
