pub mod command;
pub mod rich_text;
pub mod stage;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use command::Cli;
pub use stage::{EffectsHandle, ScreenEffects, Surface, TerminalAudio, TerminalTarget};
pub use terminal::TuiManager;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;
