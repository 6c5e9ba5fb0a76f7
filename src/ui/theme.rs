use ratatui::style::Color;

/// Colors of the player screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    /// Status line messages.
    pub accent: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38),
            text: Color::Rgb(169, 177, 214),
            accent: Color::Rgb(247, 118, 142),
            dimmed: Color::Rgb(100, 110, 150),
        }
    }

    /// Background washed toward white by a screen flash of `level` (0..=1).
    pub fn flashed_background(&self, level: f32) -> Color {
        blend_to_white(self.background, level)
    }
}

fn blend_to_white(color: Color, level: f32) -> Color {
    let level = level.clamp(0.0, 1.0);
    match color {
        Color::Rgb(r, g, b) => {
            let lift = |c: u8| (c as f32 + (255.0 - c as f32) * level).round() as u8;
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        _ if level >= 0.5 => Color::White,
        other => other,
    }
}
