pub mod app;
pub mod event;
pub mod mode;
pub mod render_state;

pub use app::{App, AppConfig, DEFAULT_FRAME_RATE};
pub use event::AppEvent;
pub use mode::AppMode;
pub use render_state::RenderState;
