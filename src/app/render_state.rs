use crate::app::mode::AppMode;
use crate::engine::Color;

/// Snapshot of everything the view needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub text: String,
    pub rich_text: bool,
    /// Base color set on the text target.
    pub text_color: Color,
    /// Shake displacement in cells.
    pub offset: (i16, i16),
    pub flash: f32,
    /// Latest broadcast message.
    pub message: Option<String>,
    pub waiting_for_input: bool,
}

impl RenderState {
    /// Render state before anything was played
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            text: String::new(),
            rich_text: true,
            text_color: Color::WHITE,
            offset: (0, 0),
            flash: 0.0,
            message: None,
            waiting_for_input: false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.text_color.a <= 0.0
    }
}
